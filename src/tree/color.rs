//! The extended color alphabet of the tree.
//!
//! `Red` and `Black` are the classical red-black colors. `DoubleBlack` and
//! `NegativeBlack` only exist while a removal is being rebalanced: they
//! count as two and minus one black nodes respectively, which lets deletion
//! reuse the rotation skeleton of insertion.

/// The color of a tree node.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum Color {
    /// Contributes nothing to the black height.
    Red,
    /// Contributes one to the black height.
    Black,
    /// Contributes two to the black height. Transient.
    DoubleBlack,
    /// Contributes minus one to the black height. Transient.
    NegativeBlack,
}

impl Color {
    /// Returns `true` for the colors that must never survive a public operation.
    #[inline]
    #[must_use]
    pub const fn is_transient(self) -> bool {
        matches!(self, Self::DoubleBlack | Self::NegativeBlack)
    }

    /// One step darker.
    ///
    /// # Panics
    ///
    /// Panics on `DoubleBlack`, which has no darker color.
    pub(crate) const fn blacker(self) -> Self {
        match self {
            Self::NegativeBlack => Self::Red,
            Self::Red => Self::Black,
            Self::Black => Self::DoubleBlack,
            Self::DoubleBlack => panic!("a double-black node cannot be darkened"),
        }
    }

    /// One step redder.
    ///
    /// # Panics
    ///
    /// Panics on `NegativeBlack`, which has no redder color.
    pub(crate) const fn redder(self) -> Self {
        match self {
            Self::DoubleBlack => Self::Black,
            Self::Black => Self::Red,
            Self::Red => Self::NegativeBlack,
            Self::NegativeBlack => panic!("a negative-black node cannot be reddened"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::Color;
    use rstest::rstest;

    #[rstest]
    #[case(Color::NegativeBlack, Color::Red)]
    #[case(Color::Red, Color::Black)]
    #[case(Color::Black, Color::DoubleBlack)]
    fn test_blacker(#[case] color: Color, #[case] expected: Color) {
        assert_eq!(color.blacker(), expected);
    }

    #[rstest]
    #[case(Color::DoubleBlack, Color::Black)]
    #[case(Color::Black, Color::Red)]
    #[case(Color::Red, Color::NegativeBlack)]
    fn test_redder(#[case] color: Color, #[case] expected: Color) {
        assert_eq!(color.redder(), expected);
    }

    #[rstest]
    #[case(Color::Red)]
    #[case(Color::Black)]
    #[case(Color::NegativeBlack)]
    fn test_redder_undoes_blacker(#[case] color: Color) {
        assert_eq!(color.blacker().redder(), color);
    }

    #[rstest]
    #[should_panic(expected = "cannot be darkened")]
    fn test_blacker_double_black_panics() {
        let _ = Color::DoubleBlack.blacker();
    }

    #[rstest]
    #[should_panic(expected = "cannot be reddened")]
    fn test_redder_negative_black_panics() {
        let _ = Color::NegativeBlack.redder();
    }

    #[rstest]
    fn test_is_transient() {
        assert!(!Color::Red.is_transient());
        assert!(!Color::Black.is_transient());
        assert!(Color::DoubleBlack.is_transient());
        assert!(Color::NegativeBlack.is_transient());
    }
}
