use ytsortcli::pager::fetch_all;
use ytsortcli::types::Page;

#[tokio::test]
async fn test_single_page_makes_exactly_one_call() {
    let mut calls = 0;

    let items = fetch_all("things", async |token| {
        calls += 1;
        assert!(token.is_none());
        Ok::<_, String>(Page {
            items: vec!["a", "b", "c"],
            next_page_token: None,
        })
    })
    .await;

    assert_eq!(calls, 1);
    assert_eq!(items, vec!["a", "b", "c"]);
}

#[tokio::test]
async fn test_pages_are_concatenated_in_received_order() {
    let mut seen_tokens: Vec<Option<String>> = Vec::new();

    let items = fetch_all("things", async |token| {
        seen_tokens.push(token.clone());
        match token.as_deref() {
            None => Ok::<_, String>(Page {
                items: vec![1, 2],
                next_page_token: Some("page2".to_string()),
            }),
            Some("page2") => Ok(Page {
                items: vec![3, 4],
                next_page_token: None,
            }),
            Some(other) => panic!("unexpected token {}", other),
        }
    })
    .await;

    assert_eq!(items, vec![1, 2, 3, 4]);
    assert_eq!(seen_tokens, vec![None, Some("page2".to_string())]);
}

#[tokio::test]
async fn test_failed_page_returns_partial_result() {
    let mut calls = 0;

    let items = fetch_all("things", async |_token| {
        calls += 1;
        if calls == 1 {
            Ok(Page {
                items: vec!["first", "second"],
                next_page_token: Some("more".to_string()),
            })
        } else {
            Err("page fetch failed".to_string())
        }
    })
    .await;

    // The second page failed: only the first page's items come back, and the
    // failure does not surface as an error.
    assert_eq!(calls, 2);
    assert_eq!(items, vec!["first", "second"]);
}
