use crate::error::{
    Error,
    Result,
};
use std::path::Path;

/// Reads the bearer token from `path`, without surrounding whitespace.
pub fn read_token(path: impl AsRef<Path>) -> Result<String> {
    let path = path.as_ref();
    debug!(?path, "reading API token");

    let raw = std::fs::read_to_string(path).map_err(|source| Error::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let token = raw.trim();
    if token.is_empty() {
        warn!("token file {path:?} is empty, the API server will likely reject the request");
    }

    Ok(token.to_string())
}
