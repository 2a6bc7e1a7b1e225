use crate::{fetcher::Fetcher, page::Page};

#[derive(Clone, Debug)]
pub struct MemoryFetcher<T> {
    items: Vec<T>,
    page_size: usize,
    fail_from: Option<usize>,
}

impl<T> MemoryFetcher<T> {
    pub fn new(items: Vec<T>, page_size: usize) -> Self {
        Self {
            items,
            page_size,
            fail_from: None,
        }
    }

    pub fn failing() -> Self {
        Self::new(Vec::new(), 1).fail_from(0)
    }

    pub fn fail_from(mut self, offset: usize) -> Self {
        self.fail_from = Some(offset);
        self
    }
}

impl<T> Fetcher for MemoryFetcher<T>
where
    T: Clone + Send + Sync,
{
    type Item = T;
    type Cursor = usize;
    type Error = anyhow::Error;

    async fn fetch(&self, cursor: Option<usize>) -> anyhow::Result<Page<T, usize>> {
        let offset = cursor.unwrap_or_default();
        if self.fail_from.is_some_and(|fail_from| offset >= fail_from) {
            anyhow::bail!("forced failure at offset {offset}")
        }

        Ok(Page::window(self.items.iter().cloned(), offset, self.page_size))
    }
}
