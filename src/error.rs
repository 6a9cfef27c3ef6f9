use reqwest::{
    header::InvalidHeaderValue,
    StatusCode,
};
use std::path::PathBuf;
use thiserror::Error;

/// Everything that can end a run after the configuration has been resolved.
#[derive(Error, Debug)]
pub enum Error {
    #[error("unable to read token file {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("request to the API server failed: {0}")]
    Network(#[from] reqwest::Error),

    #[error("token is not a valid Authorization header value: {0}")]
    InvalidToken(#[from] InvalidHeaderValue),

    #[error("API server responded with {status}: {body}")]
    HttpStatus { status: StatusCode, body: String },

    #[error("unable to decode service list: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("unable to write report: {0}")]
    Output(#[source] std::io::Error),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;

impl Error {
    /// Process exit code for this error category. `1` and `2` are left to configuration
    /// and command line errors.
    pub fn exit_code(&self) -> u8 {
        match self {
            Error::Io { .. } => 3,
            Error::Network(_) | Error::InvalidToken(_) => 4,
            Error::HttpStatus { .. } => 5,
            Error::Decode(_) => 6,
            Error::Output(_) => 7,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exit_codes_are_distinct_per_category() {
        let io = Error::Io {
            path: "token.txt".into(),
            source: std::io::Error::from(std::io::ErrorKind::NotFound),
        };
        let status = Error::HttpStatus {
            status: StatusCode::FORBIDDEN,
            body: String::new(),
        };
        let decode = Error::Decode(serde_json::from_str::<serde_json::Value>("{").unwrap_err());
        let output = Error::Output(std::io::Error::from(std::io::ErrorKind::BrokenPipe));

        let codes = [io.exit_code(), status.exit_code(), decode.exit_code(), output.exit_code()];
        assert_eq!(codes, [3, 5, 6, 7]);
    }

    #[test]
    fn http_status_message_carries_code_and_body() {
        let err = Error::HttpStatus {
            status: StatusCode::UNAUTHORIZED,
            body: "Unauthorized".to_string(),
        };
        assert_eq!(err.to_string(), "API server responded with 401 Unauthorized: Unauthorized");
    }
}
