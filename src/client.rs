use crate::{
    config::Config,
    error::Result,
};
use reqwest::header::{
    HeaderMap,
    HeaderValue,
    AUTHORIZATION,
};

/// Builds the client used for the services request.
///
/// The bearer token is attached to every request as a sensitive default header. Certificate
/// verification is only disabled when `config.allow_insecure_tls` is set.
pub fn build_client(config: &Config, token: &str) -> Result<reqwest::Client> {
    let mut auth = HeaderValue::from_str(&format!("Bearer {token}"))?;
    auth.set_sensitive(true);

    let mut headers = HeaderMap::new();
    headers.insert(AUTHORIZATION, auth);

    let mut builder = reqwest::Client::builder().default_headers(headers);

    if config.allow_insecure_tls {
        warn!("TLS certificate verification of {} is disabled", config.api_url);
        builder = builder.danger_accept_invalid_certs(true);
    }

    match config.timeout {
        Some(timeout) => {
            debug!(?timeout, "request timeout");
            builder = builder.timeout(timeout);
        }
        None => debug!("no request timeout configured"),
    }

    Ok(builder.build()?)
}
