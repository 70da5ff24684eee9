use serde::Deserialize;

/// Errors from talking to the gym API.
#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("API error ({status}): {message}")]
    Api {
        status: u16,
        /// Machine-readable error code from the response body, when present.
        code: Option<String>,
        message: String,
    },
}

impl ClientError {
    /// Build an [`ClientError::Api`] from a non-success status and its raw body.
    ///
    /// The server answers errors with `{"error": ..., "code": ...}`; any other
    /// body is kept verbatim as the message.
    pub fn from_response(status: u16, body: String) -> Self {
        match serde_json::from_str::<ErrorBody>(&body) {
            Ok(parsed) => Self::Api {
                status,
                code: parsed.code,
                message: parsed.error,
            },
            Err(_) => Self::Api {
                status,
                code: None,
                message: body,
            },
        }
    }

    /// HTTP status of an API error, if this is one.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Api { status, .. } => Some(*status),
            Self::Request(err) => err.status().map(|s| s.as_u16()),
        }
    }
}

#[derive(Deserialize)]
struct ErrorBody {
    error: String,
    code: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;

    #[test]
    fn structured_body_is_parsed() {
        let err = ClientError::from_response(
            409,
            r#"{"error":"Duplicate entry","code":"CONFLICT"}"#.to_string(),
        );
        assert_matches!(
            &err,
            ClientError::Api { status: 409, code: Some(code), message }
                if code == "CONFLICT" && message == "Duplicate entry"
        );
        assert_eq!(err.status(), Some(409));
    }

    #[test]
    fn plain_body_is_kept() {
        let err = ClientError::from_response(502, "Bad Gateway".to_string());
        assert_matches!(
            err,
            ClientError::Api { status: 502, code: None, message } if message == "Bad Gateway"
        );
    }
}
