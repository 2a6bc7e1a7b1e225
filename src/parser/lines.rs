use crate::parser::Parser;

#[derive(Clone, Copy, Debug, Default)]
pub struct LinesParser;

impl Parser for LinesParser {
    type Item = String;

    fn parse(&self, input: &str) -> anyhow::Result<Vec<Self::Item>> {
        let records = input
            .lines()
            .map(str::trim_end)
            .filter(|line| !line.is_empty())
            .map(ToOwned::to_owned)
            .collect();

        Ok(records)
    }
}
