use crate::{
    error::{
        Error,
        Result,
    },
    resources::ServiceList,
};
use reqwest::Url;

/// Longest prefix of an error response body kept in [`Error::HttpStatus`].
const BODY_SNIPPET_LEN: usize = 512;

/// Issues the single `GET` for the service list and decodes it.
///
/// A non-success status is reported as [`Error::HttpStatus`] without attempting to decode
/// the body. The response is dropped before returning, whatever the outcome.
#[instrument(level = "debug", skip_all, fields(%url))]
pub async fn fetch_services(client: &reqwest::Client, url: &Url) -> Result<ServiceList> {
    let res = client.get(url.clone()).send().await?;
    let status = res.status();
    debug!(%status, "API server responded");

    if !status.is_success() {
        let body = match res.text().await {
            Ok(body) => snippet(&body),
            Err(err) => format!("<unreadable body: {err}>"),
        };
        return Err(Error::HttpStatus { status, body });
    }

    let body = res.bytes().await?;
    trace!(len = body.len(), "read response body");
    decode_services(&body)
}

/// All-or-nothing decode of a `ServiceList` payload.
pub fn decode_services(body: &[u8]) -> Result<ServiceList> {
    let list: ServiceList = serde_json::from_slice(body)?;
    debug!("decoded {} services", list.items.len());
    Ok(list)
}

fn snippet(body: &str) -> String {
    let body = body.trim();
    if body.len() <= BODY_SNIPPET_LEN {
        return body.to_string();
    }
    let mut end = BODY_SNIPPET_LEN;
    while !body.is_char_boundary(end) {
        end -= 1;
    }
    format!("{}...", &body[..end])
}
