use quickcheck::{Arbitrary, Gen};

mod tree;

/// The order values are fed to a tree in a quicktest.
#[derive(Clone, Debug)]
pub(crate) enum Order<T> {
    /// As quickcheck generated them
    Shuffled(Vec<T>),
    /// Sorted ascending, which builds a right leaning chain
    Ascending(Vec<T>),
    /// Sorted descending, which builds a left leaning chain
    Descending(Vec<T>),
}

impl<T> Order<T> {
    pub(crate) fn values(&self) -> &[T] {
        match self {
            Order::Shuffled(xs) | Order::Ascending(xs) | Order::Descending(xs) => xs,
        }
    }
}

impl<T> Arbitrary for Order<T>
where
    T: Arbitrary + Ord,
{
    fn arbitrary(g: &mut Gen) -> Self {
        let mut xs = Vec::<T>::arbitrary(g);
        match g.choose(&[0, 1, 2]).unwrap() {
            0 => Order::Shuffled(xs),
            1 => {
                xs.sort();
                Order::Ascending(xs)
            }
            2 => {
                xs.sort_by(|a, b| b.cmp(a));
                Order::Descending(xs)
            }
            _ => unreachable!(),
        }
    }
}
