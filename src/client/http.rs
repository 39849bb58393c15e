//! HTTP client implementation for the Mondo API.

use std::collections::BTreeMap;
use std::sync::Arc;

use reqwest::Method;
use secrecy::SecretString;
use serde::de::DeserializeOwned;
use tokio::sync::RwLock;

use crate::api::{AccountsService, BalancesService, FeedService, PingService, TransactionsService};
use crate::auth::{OAuthProvider, Token};
use crate::{Error, Result};

use super::config::ClientConfig;

/// Flat request parameters, sent as the query string for GET and as a
/// form body otherwise.
pub type Params = BTreeMap<String, String>;

/// Parameter name carrying the access token.
pub const ACCESS_TOKEN_PARAM: &str = "access_token";

/// The main client for interacting with the Mondo API.
///
/// The client holds the OAuth2 client credentials and at most one access
/// token. Services returned by [`accounts`](Self::accounts),
/// [`transactions`](Self::transactions) and friends share that token.
///
/// # Example
///
/// ```no_run
/// use mondo_rs::{AccountId, MondoClient};
///
/// # async fn example() -> mondo_rs::Result<()> {
/// let client = MondoClient::new("your-client-id", "your-client-secret")?;
/// client.authenticate("johndoe@example.com", "password").await?;
///
/// for account in client.accounts().list().await? {
///     let balance = client.balances().get(&account.id).await?;
///     println!("{}: {} {}", account.description, balance.balance_major(), balance.currency);
/// }
/// # Ok(())
/// # }
/// ```
pub struct MondoClient {
    pub(crate) inner: Arc<ClientInner>,
}

pub(crate) struct ClientInner {
    pub(crate) http: reqwest::Client,
    pub(crate) oauth: OAuthProvider,
    pub(crate) token: RwLock<Option<Token>>,
    pub(crate) config: ClientConfig,
}

impl MondoClient {
    /// Create a client for the production API.
    ///
    /// No request is made until [`authenticate`](Self::authenticate).
    ///
    /// # Errors
    ///
    /// Returns [`Error::Config`] if the client id or secret is empty.
    pub fn new(client_id: impl Into<String>, client_secret: impl Into<String>) -> Result<Self> {
        Self::with_config(client_id, client_secret, ClientConfig::default())
    }

    /// Create a client with custom configuration.
    pub fn with_config(
        client_id: impl Into<String>,
        client_secret: impl Into<String>,
        config: ClientConfig,
    ) -> Result<Self> {
        let client_id = client_id.into();
        let client_secret = client_secret.into();

        if client_id.trim().is_empty() || client_secret.trim().is_empty() {
            return Err(Error::Config(
                "Client id and client secret must be defined for client construction".to_string(),
            ));
        }

        let client_secret = SecretString::from(client_secret);
        let oauth = OAuthProvider::new(&client_id, &client_secret, &config.base_url)?;

        let mut builder = reqwest::Client::builder()
            .user_agent(&config.user_agent)
            .redirect(reqwest::redirect::Policy::none());
        if let Some(timeout) = config.timeout {
            builder = builder.timeout(timeout);
        }
        let http = builder.build()?;

        Ok(Self {
            inner: Arc::new(ClientInner {
                http,
                oauth,
                token: RwLock::new(None),
                config,
            }),
        })
    }

    /// Authenticate with the password grant and store the issued token.
    ///
    /// Any previously stored token is replaced. If two calls overlap, the
    /// token from whichever response arrives last is kept.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidInput`] if the username or password is empty,
    /// [`Error::Authentication`] if the token endpoint rejects them, and
    /// [`Error::Http`] if the token endpoint cannot be reached.
    pub async fn authenticate(&self, username: &str, password: &str) -> Result<Token> {
        if username.trim().is_empty() || password.is_empty() {
            return Err(Error::InvalidInput(
                "Username and password must be defined for authorization".to_string(),
            ));
        }

        let password = SecretString::from(password.to_string());
        let token = self
            .inner
            .oauth
            .password(&self.inner.http, username, &password)
            .await?;

        tracing::info!(user_id = ?token.user_id(), "Authenticated with Mondo");
        self.inner.store_token(token.clone()).await;
        Ok(token)
    }

    /// Check whether the stored access token has expired.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NoToken`] if no token is stored.
    pub async fn is_expired(&self) -> Result<bool> {
        Ok(self.inner.current_token().await?.is_expired())
    }

    /// Exchange the stored refresh token for a new access token.
    ///
    /// On failure the previous token stays in place.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NoToken`] if no token is stored, and
    /// [`Error::Authentication`] if the token has no refresh token or the
    /// exchange is rejected.
    pub async fn refresh(&self) -> Result<Token> {
        let current = self.inner.current_token().await?;
        let refresh_token = current.refresh_token().ok_or_else(|| {
            Error::Authentication("Stored token has no refresh token".to_string())
        })?;

        let token = self
            .inner
            .oauth
            .refresh(&self.inner.http, refresh_token)
            .await?
            .inherit_refresh_token(&current);

        tracing::info!(user_id = ?token.user_id(), "Refreshed Mondo access token");
        self.inner.store_token(token.clone()).await;
        Ok(token)
    }

    /// Revoke the stored token.
    ///
    /// Mondo has no revocation endpoint, so this always fails with
    /// [`Error::Unsupported`] once a token is present. The token is kept.
    pub async fn revoke(&self) -> Result<()> {
        self.inner.current_token().await?;
        tracing::warn!("No revoke endpoint available");
        Err(Error::Unsupported("token revocation"))
    }

    /// The stored token, if any.
    pub async fn token(&self) -> Option<Token> {
        self.inner.token.read().await.clone()
    }

    /// Get the accounts service.
    pub fn accounts(&self) -> AccountsService {
        AccountsService::new(self.inner.clone())
    }

    /// Get the balances service.
    pub fn balances(&self) -> BalancesService {
        BalancesService::new(self.inner.clone())
    }

    /// Get the transactions service.
    pub fn transactions(&self) -> TransactionsService {
        TransactionsService::new(self.inner.clone())
    }

    /// Get the feed service.
    pub fn feed(&self) -> FeedService {
        FeedService::new(self.inner.clone())
    }

    /// Get the token introspection service.
    pub fn ping(&self) -> PingService {
        PingService::new(self.inner.clone())
    }

    /// Get the API base URL, which is also the OAuth2 site.
    pub fn base_url(&self) -> &str {
        self.inner.oauth.site()
    }

    /// Get the OAuth2 token URL.
    pub fn token_url(&self) -> &str {
        self.inner.oauth.token_url()
    }

    /// Get the OAuth2 authorization URL.
    pub fn authorization_url(&self) -> &str {
        self.inner.oauth.authorization_url()
    }
}

impl ClientInner {
    /// The stored token, or [`Error::NoToken`].
    pub(crate) async fn current_token(&self) -> Result<Token> {
        self.token.read().await.clone().ok_or(Error::NoToken)
    }

    pub(crate) async fn store_token(&self, token: Token) {
        *self.token.write().await = Some(token);
    }

    /// Parameters holding only the current access token.
    pub(crate) async fn token_params(&self) -> Result<Params> {
        let token = self.current_token().await?;
        Ok(access_token_params(token.expose_access_token()))
    }

    /// Make a request with a flat parameter map.
    pub(crate) async fn call<T: DeserializeOwned>(
        &self,
        method: Method,
        path: &str,
        params: &Params,
    ) -> Result<T> {
        let url = format!("{}{}", self.config.base_url, path);
        tracing::debug!(%method, path, "Sending Mondo API request");

        let request = self.http.request(method.clone(), &url);
        let request = if method == Method::GET {
            request.query(params)
        } else {
            request.form(params)
        };

        let response = request.send().await?;
        self.handle_response(response).await
    }

    /// Make a GET request.
    pub(crate) async fn get<T: DeserializeOwned>(&self, path: &str, params: &Params) -> Result<T> {
        self.call(Method::GET, path, params).await
    }

    /// Make a PATCH request.
    pub(crate) async fn patch<T: DeserializeOwned>(
        &self,
        path: &str,
        params: &Params,
    ) -> Result<T> {
        self.call(Method::PATCH, path, params).await
    }

    /// Make a POST request.
    pub(crate) async fn post<T: DeserializeOwned>(&self, path: &str, params: &Params) -> Result<T> {
        self.call(Method::POST, path, params).await
    }

    /// Handle an API response.
    async fn handle_response<T: DeserializeOwned>(
        &self,
        response: reqwest::Response,
    ) -> Result<T> {
        let status = response.status();

        if status.is_success() {
            Ok(response.json().await?)
        } else {
            let status_code = status.as_u16();
            let body: serde_json::Value = response.json().await.unwrap_or_default();

            if status_code == 401 {
                return Err(Error::Unauthorized);
            }

            if status_code == 404 {
                let message = body
                    .get("message")
                    .and_then(|m| m.as_str())
                    .unwrap_or("Resource not found")
                    .to_string();
                return Err(Error::NotFound(message));
            }

            Err(Error::from_api_response(status_code, body))
        }
    }
}

/// A parameter map holding only `access_token`.
pub(crate) fn access_token_params(access_token: &str) -> Params {
    let mut params = Params::new();
    params.insert(ACCESS_TOKEN_PARAM.to_string(), access_token.to_string());
    params
}

impl Clone for MondoClient {
    fn clone(&self) -> Self {
        Self {
            inner: self.inner.clone(),
        }
    }
}

impl std::fmt::Debug for MondoClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MondoClient")
            .field("config", &self.inner.config)
            .field("oauth", &self.inner.oauth)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_construction_requires_credentials() {
        assert!(matches!(MondoClient::new("", "secret"), Err(Error::Config(_))));
        assert!(matches!(MondoClient::new("id", ""), Err(Error::Config(_))));
        assert!(matches!(MondoClient::new("  ", "  "), Err(Error::Config(_))));
        assert!(MondoClient::new("id", "secret").is_ok());
    }

    #[test]
    fn test_oauth_endpoints_follow_base_url() {
        let client = MondoClient::new("id", "secret").unwrap();
        assert_eq!(client.base_url(), "https://production-api.gmon.io");
        assert_eq!(
            client.token_url(),
            "https://production-api.gmon.io/oauth2/token"
        );

        let client = MondoClient::with_config(
            "id",
            "secret",
            ClientConfig::new().with_base_url("https://example.com"),
        )
        .unwrap();
        assert_eq!(client.base_url(), "https://example.com");
        assert_eq!(client.authorization_url(), "https://example.com/oauth2/token");
    }

    #[tokio::test]
    async fn test_token_operations_require_token() {
        let client = MondoClient::new("id", "secret").unwrap();

        assert!(client.token().await.is_none());
        assert!(matches!(client.is_expired().await, Err(Error::NoToken)));
        assert!(matches!(client.refresh().await, Err(Error::NoToken)));
        assert!(matches!(client.revoke().await, Err(Error::NoToken)));
    }

    #[tokio::test]
    async fn test_authenticate_validates_arguments() {
        let client = MondoClient::new("id", "secret").unwrap();

        assert!(matches!(
            client.authenticate("", "password").await,
            Err(Error::InvalidInput(_))
        ));
        assert!(matches!(
            client.authenticate("johndoe@example.com", "").await,
            Err(Error::InvalidInput(_))
        ));
    }

    #[test]
    fn test_access_token_params() {
        let params = access_token_params("T");
        assert_eq!(params.len(), 1);
        assert_eq!(params.get("access_token").map(String::as_str), Some("T"));
    }

    #[test]
    fn test_debug_redacts_secret() {
        let client = MondoClient::new("id", "super-secret").unwrap();
        assert!(!format!("{:?}", client).contains("super-secret"));
    }
}
