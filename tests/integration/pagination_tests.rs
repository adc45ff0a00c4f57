//! Page iteration against a paginated endpoint.

use bunnynet::{ErrorKind, IteratorState, Pagination};
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, ResponseTemplate};

use crate::common::{TestFixture, api_key, error_body, page_body};

fn ids(keys: &[bunnynet::ApiKey]) -> Vec<i64> {
    keys.iter().map(|k| k.id).collect()
}

#[tokio::test]
async fn test_iterator_walks_every_page_then_stops() {
    let fixture = TestFixture::start().await.expect("fixture");
    fixture
        .mount_pages(
            "/apikey",
            &[vec![api_key(1), api_key(2)], vec![api_key(3), api_key(4)], vec![api_key(5)]],
        )
        .await;

    let mut pages = fixture.client.api_keys().pages(2);
    assert_eq!(pages.state(), IteratorState::Fresh);
    assert!(pages.items().is_empty());

    let mut seen = Vec::new();
    for _ in 0..3 {
        assert!(pages.next().await);
        seen.extend(ids(pages.items()));
        assert!(pages.error().is_none());
    }
    assert_eq!(seen, vec![1, 2, 3, 4, 5]);
    assert!(pages.page_info().is_some_and(|info| info.is_last_page()));

    assert!(!pages.next().await);
    assert_eq!(pages.state(), IteratorState::Exhausted);
    assert!(pages.error().is_none());
    assert_eq!(fixture.request_count("/apikey").await, 3);
}

#[tokio::test]
async fn test_list_all_returns_pages_in_order() {
    let fixture = TestFixture::start().await.expect("fixture");
    fixture
        .mount_pages(
            "/apikey",
            &[vec![api_key(1), api_key(2)], vec![api_key(3), api_key(4)], vec![api_key(5)]],
        )
        .await;

    let all = fixture.client.api_keys().list_all(2).await.expect("list_all");
    assert_eq!(ids(&all), vec![1, 2, 3, 4, 5]);
}

#[tokio::test]
async fn test_reset_restarts_from_first_page() {
    let fixture = TestFixture::start().await.expect("fixture");
    fixture.mount_pages("/apikey", &[vec![api_key(1)], vec![api_key(2)], vec![api_key(3)]]).await;

    let mut pages = fixture.client.api_keys().pages(1);
    assert!(pages.next().await);
    assert!(pages.next().await);
    assert_eq!(pages.pagination().page(), 3);

    pages.reset();
    assert_eq!(pages.state(), IteratorState::Fresh);
    assert_eq!(pages.pagination().page(), 1);

    let all = pages.all_items().await.expect("all_items");
    assert_eq!(ids(&all), vec![1, 2, 3]);
}

#[tokio::test]
async fn test_failed_page_freezes_iterator() {
    let fixture = TestFixture::start().await.expect("fixture");

    Mock::given(method("GET"))
        .and(path("/apikey"))
        .and(query_param("page", "1"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(page_body(vec![api_key(1)], 1, 2, true)),
        )
        .mount(&fixture.server)
        .await;
    Mock::given(method("GET"))
        .and(path("/apikey"))
        .and(query_param("page", "2"))
        .respond_with(ResponseTemplate::new(503).set_body_string("upstream unavailable"))
        .mount(&fixture.server)
        .await;

    let mut pages = fixture.client.api_keys().pages(1);
    assert!(pages.next().await);
    assert!(!pages.next().await);
    assert_eq!(pages.state(), IteratorState::Failed);

    let err = pages.error().expect("stored error").clone();
    assert_eq!(err.kind(), ErrorKind::UnexpectedStatus);
    assert_eq!(err.status_code(), Some(503));

    assert!(!pages.next().await);
    assert!(!pages.next().await);
    assert_eq!(fixture.request_count("/apikey").await, 2);

    let again = fixture.client.api_keys().list_all(1).await.unwrap_err();
    assert_eq!(again.status_code(), Some(503));
}

#[tokio::test]
async fn test_single_page_fetch_sends_clamped_values() {
    let fixture = TestFixture::start().await.expect("fixture");

    Mock::given(method("GET"))
        .and(path("/apikey"))
        .and(query_param("page", "1"))
        .and(query_param("perPage", "1000"))
        .respond_with(ResponseTemplate::new(200).set_body_json(page_body(vec![], 1, 0, false)))
        .expect(1)
        .mount(&fixture.server)
        .await;

    let page = fixture
        .client
        .api_keys()
        .list(Pagination::new().with_page(0).with_per_page(5000))
        .await
        .expect("page");
    assert!(page.items.is_empty());
    assert_eq!(page.page_info().total_pages(1000), 0);
}

#[tokio::test]
async fn test_error_mid_list_all_discards_partial_results() {
    let fixture = TestFixture::start().await.expect("fixture");

    Mock::given(method("GET"))
        .and(path("/dnszone"))
        .and(query_param("page", "1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(page_body(
            vec![serde_json::json!({"Id": 1, "Domain": "a.example"})],
            1,
            2,
            true,
        )))
        .mount(&fixture.server)
        .await;
    Mock::given(method("GET"))
        .and(path("/dnszone"))
        .and(query_param("page", "2"))
        .respond_with(
            ResponseTemplate::new(429)
                .set_body_json(error_body("rate.limited", "", "Too many requests")),
        )
        .mount(&fixture.server)
        .await;

    let err = fixture.client.dns_zones().list_all(1, None).await.unwrap_err();
    assert!(err.is_api());
    assert_eq!(err.error_key(), Some("rate.limited"));
}
