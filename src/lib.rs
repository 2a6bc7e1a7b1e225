pub mod cli;
pub mod completion;
pub mod executor;
pub mod fetcher;
pub mod loadable;
pub mod logging;
pub mod page;
pub mod parser;
pub mod request;

pub use crate::{
    loadable::{Loadable, Paginated},
    page::Page,
    request::Request,
};
