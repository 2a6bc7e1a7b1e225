#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Page<T, C> {
    pub items: Vec<T>,
    pub next_cursor: Option<C>,
}

impl<T, C> Page<T, C> {
    pub fn is_last(&self) -> bool {
        self.next_cursor.is_none()
    }
}

impl<T> Page<T, usize> {
    // A size of 0 is treated as 1.
    pub fn window<I>(records: I, offset: usize, size: usize) -> Self
    where
        I: ExactSizeIterator<Item = T>,
    {
        let total = records.len();
        let items = records.skip(offset).take(size.max(1)).collect::<Vec<_>>();
        let end = offset.saturating_add(items.len());

        Self {
            items,
            next_cursor: (end < total).then_some(end),
        }
    }
}
