pub mod lines;

pub trait Parser {
    type Item;

    fn parse(&self, input: &str) -> anyhow::Result<Vec<Self::Item>>;
}
