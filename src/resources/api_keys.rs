//! Account API key management.

use reqwest::Method;
use serde::{Deserialize, Serialize};

use crate::client::{Client, NO_BODY};
use crate::pagination::{PageIterator, PaginatedResponse, Pagination};
use crate::Result;

/// An API key of the account.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct ApiKey {
    /// Unique identifier.
    pub id: i64,
    /// The key value.
    pub key: String,
    /// Roles granted to the key.
    pub roles: Vec<String>,
}

#[derive(Serialize)]
#[serde(rename_all = "PascalCase")]
struct CreateApiKey<'a> {
    roles: &'a [String],
}

/// Client for API key operations.
///
/// Access via `client.api_keys()`.
#[derive(Clone)]
pub struct ApiKeysClient {
    client: Client,
}

impl ApiKeysClient {
    pub(crate) fn new(client: Client) -> Self {
        Self { client }
    }

    /// Fetches one page of API keys.
    pub async fn list(&self, pagination: Pagination) -> Result<PaginatedResponse<ApiKey>> {
        self.client.get_page("/apikey", pagination, &()).await
    }

    /// Returns an iterator over all pages. A `per_page` of 0 uses the default.
    pub fn pages(&self, per_page: u32) -> PageIterator<ApiKey> {
        self.client.paginate("/apikey", (), per_page)
    }

    /// Fetches every API key page by page.
    pub async fn list_all(&self, per_page: u32) -> Result<Vec<ApiKey>> {
        self.pages(per_page).all_items().await
    }

    /// Returns the API key with the given id.
    pub async fn get(&self, id: i64) -> Result<ApiKey> {
        self.client.call(Method::GET, &format!("/apikey/{id}"), &(), NO_BODY).await
    }

    /// Creates an API key with the given roles.
    ///
    /// # Example
    ///
    /// ```rust,no_run
    /// # async fn example(client: bunnynet::Client) -> bunnynet::Result<()> {
    /// let key = client.api_keys().create(&["User".to_owned()]).await?;
    /// println!("created key {}", key.id);
    /// # Ok(())
    /// # }
    /// ```
    pub async fn create(&self, roles: &[String]) -> Result<ApiKey> {
        let body = CreateApiKey { roles };
        self.client.call(Method::POST, "/apikey", &(), Some(&body)).await
    }

    /// Deletes the API key with the given id.
    pub async fn delete(&self, id: i64) -> Result<()> {
        self.client.call_empty(Method::DELETE, &format!("/apikey/{id}"), &(), NO_BODY).await
    }
}

impl std::fmt::Debug for ApiKeysClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ApiKeysClient").finish_non_exhaustive()
    }
}


#[cfg(test)]
mod wiremock_tests {
    use wiremock::matchers::{body_json, method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    use super::*;

    fn create_mock_client(server: &MockServer) -> Client {
        Client::builder().api_key("test_key").base_url(server.uri()).build().unwrap()
    }

    #[tokio::test]
    async fn test_list() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/apikey"))
            .and(query_param("page", "1"))
            .and(query_param("perPage", "10"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "Items": [{"Id": 1, "Key": "k1", "Roles": ["Admin"]}],
                "CurrentPage": 1,
                "TotalItems": 1,
                "HasMoreItems": false
            })))
            .mount(&server)
            .await;

        let page = create_mock_client(&server)
            .api_keys()
            .list(Pagination::new().with_per_page(10))
            .await
            .unwrap();
        assert_eq!(page.items[0].key, "k1");
        assert_eq!(page.total_items, 1);
    }

    #[tokio::test]
    async fn test_create_posts_roles() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/apikey"))
            .and(body_json(serde_json::json!({"Roles": ["User"]})))
            .respond_with(
                ResponseTemplate::new(201)
                    .set_body_json(serde_json::json!({"Id": 7, "Key": "new", "Roles": ["User"]})),
            )
            .expect(1)
            .mount(&server)
            .await;

        let key =
            create_mock_client(&server).api_keys().create(&["User".to_owned()]).await.unwrap();
        assert_eq!(key.id, 7);
    }

    #[tokio::test]
    async fn test_get_and_delete() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/apikey/7"))
            .respond_with(
                ResponseTemplate::new(200).set_body_json(serde_json::json!({"Id": 7, "Key": "k"})),
            )
            .mount(&server)
            .await;
        Mock::given(method("DELETE"))
            .and(path("/apikey/7"))
            .respond_with(ResponseTemplate::new(204))
            .expect(1)
            .mount(&server)
            .await;

        let keys = create_mock_client(&server).api_keys();
        assert_eq!(keys.get(7).await.unwrap().key, "k");
        keys.delete(7).await.unwrap();
    }

    #[tokio::test]
    async fn test_list_all_stops_on_error() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/apikey"))
            .and(query_param("page", "1"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "Items": [{"Id": 1}],
                "CurrentPage": 1,
                "TotalItems": 2,
                "HasMoreItems": true
            })))
            .mount(&server)
            .await;
        Mock::given(method("GET"))
            .and(path("/apikey"))
            .and(query_param("page", "2"))
            .respond_with(ResponseTemplate::new(401).set_body_json(serde_json::json!({
                "ErrorKey": "auth.unauthorized",
                "Field": "",
                "Message": "Unauthorized"
            })))
            .mount(&server)
            .await;

        let err = create_mock_client(&server).api_keys().list_all(1).await.unwrap_err();
        assert!(err.is_api());
        assert_eq!(err.status_code(), Some(401));
    }
}
