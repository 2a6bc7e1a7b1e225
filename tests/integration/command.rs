use loadable::{
    executor::command::CommandExecutor,
    fetcher::command::CommandFetcher,
    parser::lines::LinesParser,
    Loadable,
    Page,
    Request,
};
use tokio::sync::oneshot;

fn printf(output: &str) -> CommandFetcher<CommandExecutor, LinesParser> {
    CommandFetcher::new(CommandExecutor::new("printf", [output]), LinesParser, 2)
}

#[tokio::test]
async fn command() {
    let request = Request::new(printf("alpha\\nbeta\\ngamma\\n")).unwrap();

    let first = request.at(None).load().await.unwrap();
    assert_eq!(
        first,
        Page {
            items: vec!["alpha".to_string(), "beta".to_string()],
            next_cursor: Some(2),
        }
    );

    let second = request.at(first.next_cursor).load().await.unwrap();
    assert_eq!(
        second,
        Page {
            items: vec!["gamma".to_string()],
            next_cursor: None,
        }
    );
}

#[tokio::test]
async fn command_not_found() {
    let fetcher = CommandFetcher::new(CommandExecutor::new("command_not_found", Vec::<String>::new()), LinesParser, 2);
    let (success_tx, success_rx) = oneshot::channel();
    let (failure_tx, failure_rx) = oneshot::channel();

    Request::new(fetcher)
        .unwrap()
        .on_success(move |page: Page<String, usize>| { let _ = success_tx.send(page); })
        .on_failure(move |err: anyhow::Error| { let _ = failure_tx.send(err.to_string()); })
        .trigger();

    assert_eq!(failure_rx.await.unwrap(), "failed to run command_not_found");
    assert!(success_rx.await.is_err());
}
