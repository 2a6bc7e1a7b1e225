use std::sync::{Arc, Mutex};

use loadable::{fetcher::memory::MemoryFetcher, Loadable, Page, Paginated, Request};
use tokio::sync::mpsc;

// Follows cursors through `continue_loading` the way a paginating view does,
// keeping only the most recent cursor between pages.
#[tokio::test]
async fn continue_loading_until_last_page() {
    let request = Request::new(MemoryFetcher::new((1..=7).collect::<Vec<u32>>(), 3)).unwrap();
    let (tx, mut rx) = mpsc::unbounded_channel::<Page<u32, usize>>();

    let first_tx = tx.clone();
    request
        .at(None)
        .on_success(move |page| { let _ = first_tx.send(page); })
        .trigger();

    let mut items = Vec::new();
    while let Some(page) = rx.recv().await {
        items.extend_from_slice(&page.items);

        match page.next_cursor {
            Some(cursor) => {
                let tx = tx.clone();
                request.continue_loading(cursor)(Box::new(move |page| { let _ = tx.send(page); }));
            },
            None => break,
        }
    }

    assert_eq!(items, [1, 2, 3, 4, 5, 6, 7]);
}

#[tokio::test]
async fn each_load_completes_once() {
    let request = Request::new(MemoryFetcher::new((1..=4).collect::<Vec<u32>>(), 2).fail_from(2)).unwrap();
    let outcomes = Arc::new(Mutex::new(Vec::new()));
    let (done_tx, mut done_rx) = mpsc::unbounded_channel::<()>();

    for cursor in [None, Some(2)] {
        let successes = outcomes.clone();
        let failures = outcomes.clone();
        let success_done = done_tx.clone();
        let failure_done = done_tx.clone();

        request
            .at(cursor)
            .on_success(move |page| {
                successes.lock().unwrap().push(format!("succeeded with {:?}", page.items));
                let _ = success_done.send(());
            })
            .on_failure(move |err| {
                failures.lock().unwrap().push(format!("failed with {err}"));
                let _ = failure_done.send(());
            })
            .trigger();
    }
    drop(done_tx);

    let mut completed = 0;
    while done_rx.recv().await.is_some() {
        completed += 1;
    }

    let mut outcomes = outcomes.lock().unwrap().clone();
    outcomes.sort();

    assert_eq!(completed, 2);
    assert_eq!(outcomes, ["failed with forced failure at offset 2", "succeeded with [1, 2]"]);
}
