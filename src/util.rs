/// Which child slot of a parent a node hangs from.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub(crate) enum Side {
    /// Values strictly less than the parent's value.
    Left,
    /// Values greater than or equal to the parent's value.
    Right,
}

impl Side {
    /// Picks the side `value` descends to below a node holding `pivot`. Ties go right.
    pub(crate) fn of<T: Ord>(value: &T, pivot: &T) -> Self {
        if value < pivot {
            Side::Left
        } else {
            Side::Right
        }
    }
}
