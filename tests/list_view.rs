mod common;

use common::{api, endpoints, MockClient, Reply};
use folio::{
    config::Config,
    render::{list::ListBody, ListPage},
    types::search_result::{AuthorName, SearchResultItem},
    view::{list::LIST_ERROR, ListView, RacePolicy, ViewState},
};
use pretty_assertions::assert_eq;

fn view(client: &MockClient, policy: RacePolicy) -> ListView<MockClient> {
    ListView::new(api(client), policy)
}

fn titles(view: &ListView<MockClient>) -> Vec<String> {
    view.state()
        .data()
        .map(|items| items.iter().map(|i| i.title.clone()).collect())
        .unwrap_or_default()
}

#[tokio::test]
async fn mount_loads_default_listing_once() {
    let client = MockClient::default();
    client.body(endpoints().default_listing(), common::SUBJECT_FICTION);
    let mut view = view(&client, RacePolicy::LastIssued);

    view.mount().await;
    view.mount().await;

    assert_eq!(
        client.requests(),
        vec!["https://openlibrary.org/subjects/fiction.json?limit=10".to_string()]
    );
    assert_eq!(
        titles(&view),
        vec![
            "Pride and Prejudice",
            "Alice's Adventures in Wonderland",
            "A Christmas Carol"
        ]
    );
}

#[tokio::test]
async fn remount_loads_again() {
    let client = MockClient::default();
    client.body(endpoints().default_listing(), common::SUBJECT_FICTION);
    let mut view = view(&client, RacePolicy::LastIssued);

    view.mount().await;
    view.unmount();
    assert_eq!(view.state(), &ViewState::Idle);
    view.mount().await;

    assert_eq!(client.requests().len(), 2);
}

#[tokio::test]
async fn search_enters_loading_before_the_response() {
    let client = MockClient::default();
    client.body(endpoints().search("dune").unwrap(), common::SEARCH_DUNE);
    let mut view = view(&client, RacePolicy::LastIssued);

    let pending = view.begin_search("dune").unwrap();
    assert_eq!(view.state(), &ViewState::Loading);
    assert!(client.requests().is_empty());

    let outcome = view.run(&pending).await;
    assert!(view.finish(pending, outcome));
    assert_eq!(titles(&view), vec!["Dune", "Dune Messiah"]);
}

#[tokio::test]
async fn blank_query_changes_nothing() {
    let client = MockClient::default();
    client.body(endpoints().default_listing(), common::SUBJECT_FICTION);
    let mut view = view(&client, RacePolicy::LastIssued);
    view.mount().await;
    let before = view.state().clone();

    view.search("").await;
    view.search("   \t").await;

    assert_eq!(view.state(), &before);
    assert_eq!(client.requests().len(), 1);
    assert_eq!(view.query(), None);
}

#[tokio::test]
async fn search_results_match_the_response_exactly() {
    let client = MockClient::default();
    client.body(endpoints().search("dune").unwrap(), common::SEARCH_DUNE);
    let mut view = view(&client, RacePolicy::LastIssued);

    view.search("dune").await;

    assert_eq!(
        view.state(),
        &ViewState::Success(vec![
            SearchResultItem {
                identifier:         "/works/OL893415W".into(),
                title:              "Dune".into(),
                authors:            Some(vec![AuthorName {
                    name: "Frank Herbert".into(),
                }]),
                cover_id:           Some(11481354),
                first_publish_year: Some(1965),
            },
            SearchResultItem {
                identifier:         "/works/OL893412W".into(),
                title:              "Dune Messiah".into(),
                authors:            Some(vec![AuthorName {
                    name: "Frank Herbert".into(),
                }]),
                cover_id:           None,
                first_publish_year: Some(1969),
            },
        ])
    );
    assert_eq!(view.query(), Some("dune"));
}

#[tokio::test]
async fn search_replaces_the_listing() {
    let client = MockClient::default();
    client
        .body(endpoints().default_listing(), common::SUBJECT_FICTION)
        .body(endpoints().search("dune").unwrap(), common::SEARCH_DUNE);
    let mut view = view(&client, RacePolicy::LastIssued);

    view.mount().await;
    view.search("dune").await;

    assert_eq!(titles(&view), vec!["Dune", "Dune Messiah"]);
}

#[tokio::test]
async fn zero_results_is_empty_not_error() {
    let client = MockClient::default();
    client.body(endpoints().search("qwxzzy").unwrap(), common::SEARCH_NOTHING);
    let mut view = view(&client, RacePolicy::LastIssued);

    view.search("qwxzzy").await;

    assert_eq!(view.state(), &ViewState::Empty);
    let page = ListPage::new(view.state(), view.query(), &Config::default());
    assert_eq!(
        page.body,
        ListBody::Empty("No books found for your query.".into())
    );
}

#[tokio::test]
async fn listing_without_works_is_empty() {
    let client = MockClient::default();
    client.body(endpoints().default_listing(), r#"{"name": "fiction"}"#);
    let mut view = view(&client, RacePolicy::LastIssued);

    view.mount().await;

    let page = ListPage::new(view.state(), view.query(), &Config::default());
    assert_eq!(page.body, ListBody::Empty("No books found.".into()));
}

#[tokio::test]
async fn every_failure_shows_the_same_message() {
    let client = MockClient::default();
    client
        .reply(endpoints().search("offline").unwrap(), Reply::NetworkError)
        .body(endpoints().search("garbled").unwrap(), "<html>oops</html>")
        .body(endpoints().search("wrong").unwrap(), r#"{"docs": {"key": 1}}"#);
    let mut view = view(&client, RacePolicy::LastIssued);

    for query in ["offline", "garbled", "wrong", "missing"] {
        view.search(query).await;
        assert_eq!(view.state(), &ViewState::Error(LIST_ERROR.to_string()));
    }
}

#[tokio::test]
async fn late_response_wins_when_racing_by_resolution() {
    let client = MockClient::default();
    client
        .body(endpoints().search("dune").unwrap(), common::SEARCH_DUNE)
        .body(endpoints().search("austen").unwrap(), common::SEARCH_AUSTEN);
    let mut view = view(&client, RacePolicy::LastResolved);

    let a = view.begin_search("dune").unwrap();
    let b = view.begin_search("austen").unwrap();
    let outcome_b = view.run(&b).await;
    view.finish(b, outcome_b);
    let outcome_a = view.run(&a).await;
    view.finish(a, outcome_a);

    // A was issued first but resolved last, so its results stay.
    assert_eq!(titles(&view), vec!["Dune", "Dune Messiah"]);
    assert_eq!(view.query(), Some("dune"));
}

#[tokio::test]
async fn stale_response_is_dropped_when_racing_by_issue() {
    let client = MockClient::default();
    client
        .body(endpoints().search("dune").unwrap(), common::SEARCH_DUNE)
        .body(endpoints().search("nothing").unwrap(), common::SEARCH_NOTHING);
    let mut view = view(&client, RacePolicy::LastIssued);

    let a = view.begin_search("dune").unwrap();
    let b = view.begin_search("nothing").unwrap();
    let outcome_b = view.run(&b).await;
    assert!(view.finish(b, outcome_b));
    let outcome_a = view.run(&a).await;
    assert!(!view.finish(a, outcome_a));

    assert_eq!(view.state(), &ViewState::Empty);
    assert_eq!(view.query(), Some("nothing"));
}

#[tokio::test]
async fn cards_fall_back_for_missing_fields() {
    let client = MockClient::default();
    client.body(endpoints().default_listing(), common::SUBJECT_FICTION);
    let mut view = view(&client, RacePolicy::LastIssued);
    view.mount().await;

    let page = ListPage::new(view.state(), view.query(), &Config::default());
    let cards = page.cards();
    assert_eq!(
        cards[0].image.src(),
        "https://covers.openlibrary.org/b/id/14348537-L.jpg"
    );
    assert_eq!(cards[0].author_text, "Jane Austen");
    assert_eq!(cards[1].image.src(), "https://via.placeholder.com/150");
    assert_eq!(cards[2].author_text, "Unknown Author");
    assert_eq!(cards[2].published_text, "");
    assert_eq!(view.select(2).as_deref(), Some("/book/works/OL8193497W"));
    assert_eq!(view.select(3), None);
}

#[tokio::test]
async fn unreachable_covers_become_placeholders() {
    let client = MockClient::default();
    client
        .body(endpoints().default_listing(), common::SUBJECT_FICTION)
        .body("https://covers.openlibrary.org/b/id/14348537-L.jpg", "");
    let mut view = view(&client, RacePolicy::LastIssued);
    view.mount().await;

    let mut page = ListPage::new(view.state(), view.query(), &Config::default());
    for image in page.images_mut() {
        view.api().probe_cover(image).await;
    }
    let srcs: Vec<&str> = page.cards().iter().map(|c| c.image.src()).collect();
    assert_eq!(
        srcs,
        vec![
            "https://covers.openlibrary.org/b/id/14348537-L.jpg",
            "https://via.placeholder.com/150",
            "https://via.placeholder.com/150",
        ]
    );
    assert!(matches!(view.state(), ViewState::Success(_)));
}

#[tokio::test]
async fn search_after_unmount_keeps_its_results_on_mount() {
    let client = MockClient::default();
    client
        .body(endpoints().default_listing(), common::SUBJECT_FICTION)
        .body(endpoints().search("dune").unwrap(), common::SEARCH_DUNE);
    let mut view = view(&client, RacePolicy::LastIssued);

    view.mount().await;
    view.unmount();
    view.search("dune").await;
    assert!(view.is_mounted());
    view.mount().await;

    assert_eq!(client.requests().len(), 2);
    assert_eq!(titles(&view), vec!["Dune", "Dune Messiah"]);
    assert_eq!(view.select(0).as_deref(), Some("/book/works/OL893415W"));
}

#[tokio::test]
async fn fetch_finishing_after_unmount_is_dropped() {
    for policy in [RacePolicy::LastIssued, RacePolicy::LastResolved] {
        let client = MockClient::default();
        client.body(endpoints().search("dune").unwrap(), common::SEARCH_DUNE);
        let mut view = view(&client, policy);

        let pending = view.begin_search("dune").unwrap();
        view.unmount();
        let outcome = view.run(&pending).await;

        assert!(!view.finish(pending, outcome));
        assert!(!view.is_mounted());
        assert_eq!(view.state(), &ViewState::Idle);
        assert_eq!(view.query(), None);
    }
}
