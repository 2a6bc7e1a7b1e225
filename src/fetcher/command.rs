use crate::{executor::Executor, fetcher::Fetcher, page::Page, parser::Parser};

// The command runs again for every page, so offsets only stay meaningful
// while its output is stable.
#[derive(Clone, Debug)]
pub struct CommandFetcher<E, P> {
    executor: E,
    parser: P,
    page_size: usize,
}

impl<E, P> CommandFetcher<E, P> {
    pub fn new(executor: E, parser: P, page_size: usize) -> Self {
        Self {
            executor,
            parser,
            page_size,
        }
    }
}

impl<E, P> Fetcher for CommandFetcher<E, P>
where
    E: Executor + Send + Sync,
    P: Parser + Send + Sync,
{
    type Item = P::Item;
    type Cursor = usize;
    type Error = anyhow::Error;

    #[tracing::instrument(skip_all, fields(fetcher = %std::any::type_name::<Self>()))]
    async fn fetch(&self, cursor: Option<usize>) -> anyhow::Result<Page<P::Item, usize>> {
        let offset = cursor.unwrap_or_default();
        tracing::debug!(offset, "fetching records");

        let output = self.executor.execute().await?;
        let records = self.parser.parse(&output)?;
        let page = Page::window(records.into_iter(), offset, self.page_size);

        tracing::debug!(count = page.items.len(), "succeeded fetching records");

        Ok(page)
    }
}
