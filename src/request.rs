//! Request construction.
//!
//! [`build_request`] turns a method, resource path and optional JSON body
//! into an authenticated [`HttpRequest`]. Query parameters are a separate,
//! additive step through [`QueryEncodable`] and [`add_query_params`].

use std::collections::BTreeMap;

use bytes::Bytes;
use reqwest::Method;
use reqwest::header::{ACCEPT, CONTENT_TYPE, HeaderMap, HeaderName, HeaderValue, USER_AGENT};
use serde::Serialize;

use crate::transport::HttpRequest;
use crate::{Error, Result};

/// Name of the authentication header.
pub const ACCESS_KEY_HEADER: &str = "AccessKey";

const APPLICATION_JSON: &str = "application/json";

/// A value that can be expressed as URL query parameters.
///
/// Parameter types implement this explicitly instead of relying on a
/// generic serializer, so the wire names and the "omit when unset" rules
/// are visible next to each type.
///
/// ```rust
/// use std::collections::BTreeMap;
/// use bunnynet::QueryEncodable;
///
/// struct Search(Option<String>);
///
/// impl QueryEncodable for Search {
///     fn to_query_params(&self) -> BTreeMap<String, String> {
///         self.0
///             .iter()
///             .map(|s| ("search".to_owned(), s.clone()))
///             .collect()
///     }
/// }
///
/// assert!(Search(None).to_query_params().is_empty());
/// ```
pub trait QueryEncodable {
    /// Returns the parameters to append to the query string.
    fn to_query_params(&self) -> BTreeMap<String, String>;
}

/// No query parameters.
impl QueryEncodable for () {
    fn to_query_params(&self) -> BTreeMap<String, String> {
        BTreeMap::new()
    }
}

impl<Q: QueryEncodable> QueryEncodable for Option<Q> {
    fn to_query_params(&self) -> BTreeMap<String, String> {
        self.as_ref().map(QueryEncodable::to_query_params).unwrap_or_default()
    }
}

impl<Q: QueryEncodable + ?Sized> QueryEncodable for &Q {
    fn to_query_params(&self) -> BTreeMap<String, String> {
        (**self).to_query_params()
    }
}

/// Builds an authenticated request.
///
/// `path` replaces whatever path, query and fragment `base_url` carries. A body is encoded as
/// JSON only for `POST`, `PUT` and `PATCH`; it is ignored otherwise. The
/// `AccessKey` and `User-Agent` headers are omitted when their value is
/// empty.
///
/// # Errors
///
/// Returns a [`Configuration`](crate::ErrorKind::Configuration) error when
/// the base URL or a header value is invalid, and an
/// [`Encode`](crate::ErrorKind::Encode) error when the body cannot be
/// serialized. Nothing is partially built on failure.
pub fn build_request<B>(
    method: Method,
    base_url: &str,
    path: &str,
    body: Option<&B>,
    api_key: &str,
    user_agent: &str,
) -> Result<HttpRequest>
where
    B: Serialize + ?Sized,
{
    let mut url = url::Url::parse(base_url)
        .map_err(|e| Error::configuration("invalid base URL").with_source(e))?;
    if url.cannot_be_a_base() {
        return Err(Error::configuration(format!("base URL cannot carry a path: {}", base_url)));
    }
    url.set_path(path);
    url.set_query(None);
    url.set_fragment(None);

    let mut headers = HeaderMap::new();
    headers.insert(ACCEPT, HeaderValue::from_static(APPLICATION_JSON));

    if !api_key.is_empty() {
        let mut value = HeaderValue::from_str(api_key)
            .map_err(|_| Error::configuration("invalid access key format"))?;
        value.set_sensitive(true);
        headers.insert(HeaderName::from_static("accesskey"), value);
    }

    if !user_agent.is_empty() {
        let value = HeaderValue::from_str(user_agent)
            .map_err(|_| Error::configuration("invalid user agent format"))?;
        headers.insert(USER_AGENT, value);
    }

    let mut request = HttpRequest { method, url, headers, body: None, timeout: None };
    if let Some(body) = body.filter(|_| carries_body(&request.method)) {
        set_json_body(&mut request, body)?;
    }
    Ok(request)
}

/// Encodes `body` as the JSON payload of `request`, whatever its method.
///
/// A few endpoints take a body on `DELETE`, which [`build_request`]
/// never attaches on its own.
pub(crate) fn set_json_body<B>(request: &mut HttpRequest, body: &B) -> Result<()>
where
    B: Serialize + ?Sized,
{
    let encoded = serde_json::to_vec(body)
        .map_err(|e| Error::encode("failed to encode request body").with_source(e))?;
    request.headers.insert(CONTENT_TYPE, HeaderValue::from_static(APPLICATION_JSON));
    request.body = Some(Bytes::from(encoded));
    Ok(())
}

/// Appends the encoded parameters to the request's query string.
///
/// Existing parameters are kept. Values are percent-encoded.
pub fn add_query_params<Q>(request: &mut HttpRequest, params: &Q)
where
    Q: QueryEncodable + ?Sized,
{
    let params = params.to_query_params();
    if params.is_empty() {
        return;
    }
    request.url.query_pairs_mut().extend_pairs(params.iter());
}

fn carries_body(method: &Method) -> bool {
    *method == Method::POST || *method == Method::PUT || *method == Method::PATCH
}
