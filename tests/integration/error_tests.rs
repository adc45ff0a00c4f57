//! Error classification as seen by callers.

use bunnynet::{Client, ErrorKind};
use wiremock::matchers::{method, path};
use wiremock::{Mock, ResponseTemplate};

use crate::common::{TestFixture, error_body};

#[tokio::test]
async fn test_api_rejection_carries_key_field_and_status() {
    let fixture = TestFixture::start().await.expect("fixture");

    Mock::given(method("GET"))
        .and(path("/pullzone/42"))
        .respond_with(ResponseTemplate::new(404).set_body_json(error_body(
            "pullzone.not_found",
            "Id",
            "The requested pull zone was not found",
        )))
        .mount(&fixture.server)
        .await;

    let err = fixture.client.pull_zones().get(42, false).await.unwrap_err();

    assert_eq!(err.kind(), ErrorKind::Api);
    assert!(err.is_api());
    assert!(!err.is_client());
    assert_eq!(err.status_code(), Some(404));
    assert_eq!(err.error_key(), Some("pullzone.not_found"));

    let api = err.api_error().expect("api error");
    assert_eq!(api.field, "Id");
    assert_eq!(api.message, "The requested pull zone was not found");
    assert_eq!(api.status_code, 404);
    assert_eq!(
        err.to_string(),
        "[404] pullzone.not_found: The requested pull zone was not found (Id)"
    );
}

#[tokio::test]
async fn test_non_json_error_body_is_unexpected_status() {
    let fixture = TestFixture::start().await.expect("fixture");

    Mock::given(method("GET"))
        .and(path("/dnszone/7"))
        .respond_with(
            ResponseTemplate::new(500).set_body_string("<html>Internal Server Error</html>"),
        )
        .mount(&fixture.server)
        .await;

    let err = fixture.client.dns_zones().get(7).await.unwrap_err();

    assert_eq!(err.kind(), ErrorKind::UnexpectedStatus);
    assert!(err.is_client());
    assert_eq!(err.status_code(), Some(500));
    assert!(err.api_error().is_none());
    assert!(err.error_key().is_none());
}

#[tokio::test]
async fn test_malformed_success_body_is_decode_error() {
    let fixture = TestFixture::start().await.expect("fixture");

    Mock::given(method("GET"))
        .and(path("/apikey/3"))
        .respond_with(ResponseTemplate::new(200).set_body_string("{\"Id\": \"not a number\""))
        .mount(&fixture.server)
        .await;

    let err = fixture.client.api_keys().get(3).await.unwrap_err();

    assert_eq!(err.kind(), ErrorKind::Decode);
    assert!(err.is_client());
    assert!(err.status_code().is_none());
}

#[tokio::test]
async fn test_no_content_yields_default_value() {
    let fixture = TestFixture::start().await.expect("fixture");

    Mock::given(method("GET"))
        .and(path("/country"))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&fixture.server)
        .await;
    Mock::given(method("DELETE"))
        .and(path("/apikey/9"))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&fixture.server)
        .await;

    let countries = fixture.client.countries().list().await.expect("countries");
    assert!(countries.is_empty());

    fixture.client.api_keys().delete(9).await.expect("delete");
}

#[tokio::test]
async fn test_unreachable_server_is_client_error() {
    crate::common::init_tracing();
    let client = Client::builder()
        .api_key(crate::common::TEST_KEY)
        .base_url("http://127.0.0.1:1")
        .build()
        .expect("client");

    let err = client.countries().list().await.unwrap_err();

    assert!(err.is_client());
    assert!(!err.is_api());
    assert!(err.kind().is_transport(), "unexpected kind {:?}", err.kind());
    assert!(err.status_code().is_none());
}

#[tokio::test]
async fn test_missing_access_key_is_reported_by_the_api() {
    let fixture = TestFixture::start().await.expect("fixture");

    Mock::given(method("GET"))
        .and(path("/apikey"))
        .respond_with(
            ResponseTemplate::new(401)
                .set_body_json(error_body("authorization.failed", "", "Unauthorized")),
        )
        .mount(&fixture.server)
        .await;

    fixture.client.set_api_key("");
    let err = fixture.client.api_keys().list_all(0).await.unwrap_err();

    assert!(err.is_api());
    assert_eq!(err.status_code(), Some(401));

    let requests = fixture.server.received_requests().await.unwrap_or_default();
    assert!(requests.iter().all(|request| !request.headers.contains_key("accesskey")));
}
