use anyhow::Context as _;
use clap::Parser as _;
use loadable::{
    cli::Cli,
    executor::command::CommandExecutor,
    fetcher::command::CommandFetcher,
    logging,
    parser::lines::LinesParser,
    Loadable,
    Request,
};

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    logging::init(&cli.log);

    let (program, args) = cli.command.split_first().context("missing command")?;
    tracing::debug!(log = %cli.log, page_size = cli.page_size, pages = cli.pages.get(), "starting");

    let fetcher = CommandFetcher::new(CommandExecutor::new(program.as_str(), args), LinesParser, cli.page_size);
    let request = Request::new(fetcher)?;

    let mut cursor = None;
    for index in 0..cli.pages.get() {
        let page = request
            .at(cursor.take())
            .load()
            .await
            .with_context(|| format!("failed to load page {index}"))?;

        for item in &page.items {
            println!("{item}");
        }

        tracing::info!(page = index, count = page.items.len(), "loaded page");

        match page.next_cursor {
            Some(next) => cursor = Some(next),
            None => break,
        }
    }

    Ok(())
}
