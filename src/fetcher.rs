use crate::page::Page;

pub mod command;
pub mod memory;

pub trait Fetcher {
    type Item;
    type Cursor;
    type Error;

    fn fetch(
        &self,
        cursor: Option<Self::Cursor>,
    ) -> impl Future<Output = Result<Page<Self::Item, Self::Cursor>, Self::Error>> + Send;
}
