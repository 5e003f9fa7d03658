use serde::de::DeserializeOwned;

use crate::core::{EmClient, EmError, query::Query};

/// Header carrying the API token, sent with every request.
pub(crate) const AUTH_HEADER: &str = "auth-token";

/// The one GET-and-decode routine behind every endpoint method.
///
/// Joins `path` onto the client's base URL, appends the query pairs, sends a
/// single authenticated GET, and decodes a 200 body as JSON into `T`. Any
/// non-200 status becomes [`EmError::Status`] with the body discarded; a
/// malformed body becomes [`EmError::Decode`]. Errors are always returned to
/// the caller, never handled here.
pub(crate) async fn get_json<T: DeserializeOwned>(
    client: &EmClient,
    path: &str,
    query: &Query,
) -> Result<T, EmError> {
    let mut url = client.base().join(path)?;
    if !query.pairs().is_empty() {
        let mut qp = url.query_pairs_mut();
        for (key, value) in query.pairs() {
            qp.append_pair(key, value);
        }
    }

    let resp = client
        .http()
        .get(url.clone())
        .header(AUTH_HEADER, client.token())
        .send()
        .await?;

    let status = resp.status();
    if status != reqwest::StatusCode::OK {
        return Err(EmError::Status {
            status: status.as_u16(),
            text: status.canonical_reason().unwrap_or("unknown").to_string(),
            url: url.to_string(),
        });
    }

    let text = resp.text().await?;
    serde_json::from_str(&text).map_err(|source| EmError::Decode {
        url: url.to_string(),
        source,
    })
}
