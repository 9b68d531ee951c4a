use serde::{Deserialize, Serialize};

/// Sign-in payload. The client sends its user object; everything beyond the
/// email is embedded into the token as-is.
#[derive(Debug, Serialize, Deserialize)]
pub struct SessionStart {
    pub email: String,
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}
