//! Response decoding.
//!
//! Status handling:
//!
//! | Status     | [`parse_response`]                  |
//! |------------|-------------------------------------|
//! | 204        | `Ok(None)`, body ignored            |
//! | 400 and up | [`parse_error_response`]            |
//! | otherwise  | JSON decode into the target         |
//!
//! [`parse_paginated_response`] only performs the last row. It relies on
//! the caller having already rejected error statuses, which
//! [`Client::execute`](crate::Client::execute) does for every request.

use reqwest::StatusCode;
use serde::de::DeserializeOwned;

use crate::pagination::PaginatedResponse;
use crate::transport::HttpResponse;
use crate::{ApiError, Error, Result};

/// Decodes a response into `R`.
///
/// Returns `Ok(None)` for `204 No Content` regardless of the body, so a
/// caller's existing value stays untouched.
///
/// # Errors
///
/// Error statuses become the error produced by [`parse_error_response`].
/// A success body that is not valid JSON for `R` is a
/// [`Decode`](crate::ErrorKind::Decode) error wrapping the parse failure.
pub fn parse_response<R>(response: &HttpResponse) -> Result<Option<R>>
where
    R: DeserializeOwned,
{
    if response.status == StatusCode::NO_CONTENT {
        return Ok(None);
    }
    if is_error_status(response.status) {
        return Err(parse_error_response(response));
    }
    decode(&response.body).map(Some)
}

/// Checks a response that carries no value of interest.
///
/// Success statuses are accepted without looking at the body.
pub fn parse_empty_response(response: &HttpResponse) -> Result<()> {
    if is_error_status(response.status) {
        return Err(parse_error_response(response));
    }
    Ok(())
}

/// Converts an error response into an [`Error`].
///
/// A body matching the API error document becomes a remote
/// [`Api`](crate::ErrorKind::Api) error carrying the response status. Any
/// other body yields the client-side
/// [`UnexpectedStatus`](crate::ErrorKind::UnexpectedStatus) fallback, which
/// still reports the status.
pub fn parse_error_response(response: &HttpResponse) -> Error {
    let status = response.status.as_u16();
    match serde_json::from_slice::<ApiError>(&response.body) {
        Ok(api) => Error::api(api.with_status_code(status)),
        Err(e) => {
            tracing::warn!(status, error = %e, "failed to parse error response body");
            Error::unexpected_status(status)
        },
    }
}

/// Decodes a page of results.
///
/// The status code is not inspected.
pub fn parse_paginated_response<T>(response: &HttpResponse) -> Result<PaginatedResponse<T>>
where
    T: DeserializeOwned,
{
    decode(&response.body)
}

pub(crate) fn is_error_status(status: StatusCode) -> bool {
    status.as_u16() >= 400
}

fn decode<R: DeserializeOwned>(body: &[u8]) -> Result<R> {
    serde_json::from_slice(body)
        .map_err(|e| Error::decode("failed to parse response body").with_source(e))
}
