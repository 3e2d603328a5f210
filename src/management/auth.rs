use chrono::Utc;

use crate::types::Token;

/// Seconds before the announced expiry at which a token is treated as stale.
pub const EXPIRY_MARGIN_SECS: u64 = 240;

#[derive(Debug, Default)]
pub struct TokenManager {
    token: Option<Token>,
}

impl TokenManager {
    pub fn new() -> Self {
        TokenManager { token: None }
    }

    pub fn with_token(token: Token) -> Self {
        TokenManager { token: Some(token) }
    }

    /// Returns the cached access token if one is present and not about to
    /// expire.
    pub fn valid_token(&self) -> Option<&str> {
        match &self.token {
            Some(token) if !Self::is_expired(token) => Some(token.access_token.as_str()),
            _ => None,
        }
    }

    pub fn store(&mut self, token: Token) {
        self.token = Some(token);
    }

    pub fn invalidate(&mut self) {
        self.token = None;
    }

    pub fn current_token(&self) -> Option<&Token> {
        self.token.as_ref()
    }

    fn is_expired(token: &Token) -> bool {
        let now = Utc::now().timestamp() as u64;
        let expires_at = token.obtained_at.saturating_add(token.expires_in);
        now.saturating_add(EXPIRY_MARGIN_SECS) >= expires_at
    }
}
