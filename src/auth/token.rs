//! Access token state.

use chrono::{DateTime, Duration, Utc};
use oauth2::TokenResponse;
use secrecy::{ExposeSecret, SecretString};

use super::provider::MondoTokenResponse;

/// An OAuth2 token issued by the Mondo token endpoint.
///
/// A token is only ever replaced as a whole: a successful `authenticate` or
/// `refresh` builds a new one from the token response.
#[derive(Clone)]
pub struct Token {
    access_token: SecretString,
    refresh_token: Option<SecretString>,
    client_id: Option<String>,
    user_id: Option<String>,
    expires_in: Option<Duration>,
    expires_at: Option<DateTime<Utc>>,
}

impl Token {
    /// Build a token from a token endpoint response received at `issued_at`.
    pub(crate) fn from_response(response: &MondoTokenResponse, issued_at: DateTime<Utc>) -> Self {
        let expires_in = response
            .expires_in()
            .and_then(|d| Duration::from_std(d).ok());
        let extra = response.extra_fields();

        Self {
            access_token: SecretString::from(response.access_token().secret().to_string()),
            refresh_token: response
                .refresh_token()
                .map(|t| SecretString::from(t.secret().to_string())),
            client_id: extra.client_id.clone(),
            user_id: extra.user_id.clone(),
            expires_in,
            expires_at: expires_in.map(|d| issued_at + d),
        }
    }

    /// Carry the refresh token over from `previous` when the refresh
    /// response did not rotate it.
    pub(crate) fn inherit_refresh_token(mut self, previous: &Token) -> Self {
        if self.refresh_token.is_none() {
            self.refresh_token = previous.refresh_token.clone();
        }
        self
    }

    /// The access token.
    pub fn access_token(&self) -> &SecretString {
        &self.access_token
    }

    /// The refresh token, if the server issued one.
    pub fn refresh_token(&self) -> Option<&SecretString> {
        self.refresh_token.as_ref()
    }

    /// OAuth2 client id the token was issued to.
    pub fn client_id(&self) -> Option<&str> {
        self.client_id.as_deref()
    }

    /// User the token acts for.
    pub fn user_id(&self) -> Option<&str> {
        self.user_id.as_deref()
    }

    /// Lifetime granted by the server.
    pub fn expires_in(&self) -> Option<Duration> {
        self.expires_in
    }

    /// When the access token stops being valid.
    ///
    /// `None` if the server did not report a lifetime.
    pub fn expires_at(&self) -> Option<DateTime<Utc>> {
        self.expires_at
    }

    /// Check if the access token has expired.
    ///
    /// A token counts as expired from the instant of `expires_at` onwards.
    pub fn is_expired(&self) -> bool {
        self.is_expired_at(Utc::now())
    }

    /// Check expiry against the given instant instead of the clock.
    pub fn is_expired_at(&self, now: DateTime<Utc>) -> bool {
        self.expires_at.is_some_and(|exp| now >= exp)
    }

    pub(crate) fn expose_access_token(&self) -> &str {
        self.access_token.expose_secret()
    }
}

impl std::fmt::Debug for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Token")
            .field("access_token", &"[REDACTED]")
            .field(
                "refresh_token",
                &self.refresh_token.as_ref().map(|_| "[REDACTED]"),
            )
            .field("client_id", &self.client_id)
            .field("user_id", &self.user_id)
            .field("expires_at", &self.expires_at)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn response(json: serde_json::Value) -> MondoTokenResponse {
        serde_json::from_value(json).unwrap()
    }

    fn sample_response() -> MondoTokenResponse {
        response(serde_json::json!({
            "access_token": "access-abc",
            "client_id": "oauthclient_123",
            "expires_in": 21600,
            "refresh_token": "refresh-xyz",
            "token_type": "Bearer",
            "user_id": "user_456"
        }))
    }

    #[test]
    fn test_from_response() {
        let issued_at = Utc::now();
        let token = Token::from_response(&sample_response(), issued_at);

        assert_eq!(token.expose_access_token(), "access-abc");
        assert_eq!(
            token.refresh_token().map(|t| t.expose_secret().to_string()),
            Some("refresh-xyz".to_string())
        );
        assert_eq!(token.client_id(), Some("oauthclient_123"));
        assert_eq!(token.user_id(), Some("user_456"));
        assert_eq!(token.expires_in(), Some(Duration::seconds(21600)));
        assert_eq!(token.expires_at(), Some(issued_at + Duration::seconds(21600)));
    }

    #[test]
    fn test_expiry_boundary() {
        let issued_at = Utc::now();
        let token = Token::from_response(&sample_response(), issued_at);
        let expires_at = issued_at + Duration::seconds(21600);

        assert!(!token.is_expired_at(issued_at));
        assert!(!token.is_expired_at(expires_at - Duration::milliseconds(1)));
        assert!(token.is_expired_at(expires_at));
        assert!(token.is_expired_at(expires_at + Duration::seconds(1)));
        assert!(!token.is_expired());
    }

    #[test]
    fn test_token_without_lifetime_never_expires() {
        let token = Token::from_response(
            &response(serde_json::json!({
                "access_token": "access-abc",
                "token_type": "Bearer"
            })),
            Utc::now(),
        );

        assert!(token.expires_at().is_none());
        assert!(!token.is_expired_at(Utc::now() + Duration::days(3650)));
        assert!(token.client_id().is_none());
    }

    #[test]
    fn test_inherit_refresh_token() {
        let previous = Token::from_response(&sample_response(), Utc::now());
        let rotated = Token::from_response(
            &response(serde_json::json!({
                "access_token": "access-new",
                "token_type": "Bearer",
                "expires_in": 21600
            })),
            Utc::now(),
        )
        .inherit_refresh_token(&previous);

        assert_eq!(rotated.expose_access_token(), "access-new");
        assert_eq!(
            rotated.refresh_token().map(|t| t.expose_secret().to_string()),
            Some("refresh-xyz".to_string())
        );
    }

    #[test]
    fn test_token_debug_redacts_secrets() {
        let token = Token::from_response(&sample_response(), Utc::now());
        let debug_str = format!("{:?}", token);

        assert!(!debug_str.contains("access-abc"));
        assert!(!debug_str.contains("refresh-xyz"));
        assert!(debug_str.contains("REDACTED"));
    }
}
