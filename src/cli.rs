use std::num::NonZeroUsize;

use clap::{Parser, ValueEnum};
use strum::Display as StrumDisplay;

#[derive(Debug, Parser)]
#[command(version, about)]
pub struct Cli {
    #[arg(long, value_enum, default_value_t = Log::Plain)]
    pub log: Log,

    /// Number of records per page
    #[arg(short = 's', long, default_value_t = 20)]
    pub page_size: usize,

    /// Maximum number of pages to load
    #[arg(short, long, default_value = "1")]
    pub pages: NonZeroUsize,

    /// Command printing one record per line
    #[arg(required = true, trailing_var_arg = true, allow_hyphen_values = true)]
    pub command: Vec<String>,
}

#[derive(Debug, Clone, ValueEnum, StrumDisplay, PartialEq, Eq)]
#[strum(serialize_all = "snake_case")]
pub enum Log {
    Plain,
    Json,
}
