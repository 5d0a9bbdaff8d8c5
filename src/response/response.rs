use thiserror::Error;

/// The raw payload envelope produced by the transport collaborator: a
/// `data` mapping plus an optional `errors` sequence.
#[derive(Clone, Debug, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct Response {
    #[serde(default)]
    pub data: Option<serde_json::Value>,
    #[serde(default)]
    pub errors: Vec<ServerError>,
}
impl Response {
    pub fn from_slice(bytes: &[u8]) -> Result<Self, serde_json::Error> {
        serde_json::from_slice(bytes)
    }

    pub fn from_str(payload: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(payload)
    }

    /// Extract the `data` mapping, surfacing a non-empty `errors` sequence
    /// as an [`ErrorResponse`] outcome even when `data` is present.
    pub fn into_data(self) -> Result<serde_json::Value, ErrorResponse> {
        if !self.errors.is_empty() || self.data.is_none() {
            return Err(ErrorResponse {
                data: self.data,
                errors: self.errors,
            });
        }
        Ok(self.data.expect("data is present"))
    }
}

/// One error descriptor reported by the server inside the response
/// envelope.
#[derive(Clone, Debug, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct ServerError {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub locations: Option<Vec<ServerErrorLocation>>,
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub path: Option<Vec<serde_json::Value>>,
}

#[derive(Clone, Debug, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct ServerErrorLocation {
    pub column: u64,
    pub line: u64,
}

/// The server reported errors for this request (or returned no `data` at
/// all). Any partial `data` the server produced alongside the errors is
/// retained.
#[derive(Clone, Debug, Error, PartialEq)]
#[error("server returned {} error(s)", errors.len())]
pub struct ErrorResponse {
    pub data: Option<serde_json::Value>,
    pub errors: Vec<ServerError>,
}
