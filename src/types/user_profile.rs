use serde::{Deserialize, Serialize};

/// The authenticated user's profile as returned by the backend.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
    /// Canvas user id.
    pub id: i64,

    /// Display name.
    pub name: String,

    /// Email address; the backend sends an empty string when Canvas
    /// does not expose one.
    #[serde(default)]
    pub email: String,

    /// Avatar URL, if Canvas provides one.
    #[serde(default)]
    pub avatar: Option<String>,

    /// The Canvas instance URL backing this session. Present on
    /// `GET /api/user`, absent in the login response.
    #[serde(default)]
    pub canvas_url: Option<String>,
}

/// Response body of `POST /api/auth/login`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct LoginResponse {
    /// Whether authentication succeeded.
    pub success: bool,

    /// Opaque session id to send back as `X-Session-Id`.
    pub session_id: String,

    /// The authenticated user.
    pub user: UserProfile,
}
