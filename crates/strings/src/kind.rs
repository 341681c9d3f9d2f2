//! Combinable character kinds for [`random_kind`](crate::random_kind).

bitflags::bitflags! {
    /// Sub-pools selectable by flag.
    ///
    /// Setting several flags selects the union of their sub-pools. The sub-pools are disjoint,
    /// so overlapping combinations such as `ALL | DIGITS` never weight a symbol twice.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
    pub struct KindSet: u8 {
        /// `0-9`
        const DIGITS = 1 << 0;
        /// `a-z`
        const LOWER = 1 << 1;
        /// `A-Z`
        const UPPER = 1 << 2;
        /// ASCII punctuation, `!` through `~` excluding letters and digits
        const SYMBOLS = 1 << 3;
        const ALL = Self::DIGITS.bits()
            | Self::LOWER.bits()
            | Self::UPPER.bits()
            | Self::SYMBOLS.bits();
    }
}
