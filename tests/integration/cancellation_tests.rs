//! Deadlines, cancellation and key rotation on live requests.

use std::time::{Duration, Instant};

use bunnynet::{CancellationToken, ErrorKind};
use wiremock::matchers::{header, method, path};
use wiremock::{Mock, ResponseTemplate};

use crate::common::{TEST_KEY, TestFixture};

async fn mount_slow_countries(fixture: &TestFixture, delay: Duration) {
    Mock::given(method("GET"))
        .and(path("/country"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(serde_json::json!([])).set_delay(delay),
        )
        .mount(&fixture.server)
        .await;
}

#[tokio::test]
async fn test_cancel_aborts_in_flight_request() {
    let fixture = TestFixture::start().await.expect("fixture");
    mount_slow_countries(&fixture, Duration::from_secs(10)).await;

    let token = CancellationToken::new();
    let scoped = fixture.client.with_cancellation(token.clone());

    let canceller = tokio::spawn(async move {
        tokio::time::sleep(Duration::from_millis(50)).await;
        token.cancel();
    });

    let started = Instant::now();
    let err = scoped.countries().list().await.unwrap_err();
    canceller.await.expect("canceller");

    assert_eq!(err.kind(), ErrorKind::Cancelled);
    assert!(err.is_client());
    assert!(started.elapsed() < Duration::from_secs(5));
}

#[tokio::test]
async fn test_cancelled_token_fails_before_sending() {
    let fixture = TestFixture::start().await.expect("fixture");
    mount_slow_countries(&fixture, Duration::ZERO).await;

    let token = CancellationToken::new();
    token.cancel();

    let err = fixture.client.with_cancellation(token).countries().list().await.unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Cancelled);
    assert_eq!(fixture.request_count("/country").await, 0);

    // The unscoped client is unaffected.
    fixture.client.countries().list().await.expect("unscoped list");
}

#[tokio::test]
async fn test_scoped_timeout_expires() {
    let fixture = TestFixture::start().await.expect("fixture");
    mount_slow_countries(&fixture, Duration::from_secs(10)).await;

    let scoped = fixture.client.with_timeout(Duration::from_millis(100));
    assert_eq!(scoped.timeout(), Duration::from_millis(100));

    let err = scoped.countries().list().await.unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Timeout);
    assert!(err.is_client());
}

#[tokio::test]
async fn test_rotated_key_applies_to_later_requests() {
    let fixture = TestFixture::start().await.expect("fixture");

    Mock::given(method("GET"))
        .and(path("/country"))
        .and(header("AccessKey", TEST_KEY))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([])))
        .expect(1)
        .mount(&fixture.server)
        .await;
    Mock::given(method("GET"))
        .and(path("/country"))
        .and(header("AccessKey", "rotated-key"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([])))
        .expect(1)
        .mount(&fixture.server)
        .await;

    let clone = fixture.client.clone();
    fixture.client.countries().list().await.expect("before rotation");

    fixture.client.set_api_key("rotated-key");
    clone.countries().list().await.expect("after rotation");
}
