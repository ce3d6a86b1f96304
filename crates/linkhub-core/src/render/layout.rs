//! Round-robin column layout

/// Number of card columns on the page
pub const COLUMN_COUNT: usize = 3;

/// An item placed in a column, with its position in the input
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Slot<T> {
    pub index: usize,
    pub item: T,
}

/// Put item `i` in column `i % columns`, keeping input order inside each column
///
/// Always returns exactly `columns` columns (at least one), some possibly empty.
pub fn distribute<I, T>(items: I, columns: usize) -> Vec<Vec<Slot<T>>>
where
    I: IntoIterator<Item = T>,
{
    let columns = columns.max(1);
    let mut out: Vec<Vec<Slot<T>>> = (0..columns).map(|_| Vec::new()).collect();
    for (index, item) in items.into_iter().enumerate() {
        out[index % columns].push(Slot { index, item });
    }
    out
}
