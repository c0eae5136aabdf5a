//! Authenticated session handed to the content service boundary.

use std::fmt;

/// Credentials and endpoint for one signed-in user.
#[derive(Clone, PartialEq, Eq)]
pub struct Session {
    api_url: String,
    token: String,
    user_id: Option<String>,
}

impl Session {
    pub fn new(api_url: impl Into<String>, token: impl Into<String>) -> Self {
        let api_url = api_url.into().trim_end_matches('/').to_string();
        Self {
            api_url,
            token: token.into(),
            user_id: None,
        }
    }

    pub fn with_user_id(mut self, user_id: impl Into<String>) -> Self {
        self.user_id = Some(user_id.into());
        self
    }

    pub fn api_url(&self) -> &str {
        &self.api_url
    }

    pub fn token(&self) -> &str {
        &self.token
    }

    pub fn user_id(&self) -> Option<&str> {
        self.user_id.as_deref()
    }

    /// Absolute URL for a service route such as `/repo/{id}/files`.
    pub fn endpoint(&self, route: &str) -> String {
        format!("{}/{}", self.api_url, route.trim_start_matches('/'))
    }
}

impl fmt::Debug for Session {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Session")
            .field("api_url", &self.api_url)
            .field("token", &"<redacted>")
            .field("user_id", &self.user_id)
            .finish()
    }
}
