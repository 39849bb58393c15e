//! OAuth2 token provider for the password grant and refresh exchange.

use chrono::Utc;
use oauth2::basic::{
    BasicErrorResponse, BasicRevocationErrorResponse, BasicTokenIntrospectionResponse,
    BasicTokenType,
};
use oauth2::{
    AuthType, AuthUrl, ClientId, ClientSecret, EndpointNotSet, EndpointSet, ExtraTokenFields,
    HttpClientError, RefreshToken, RequestTokenError, ResourceOwnerPassword, ResourceOwnerUsername,
    StandardRevocableToken, StandardTokenResponse, TokenUrl,
};
use secrecy::{ExposeSecret, SecretString};
use serde::{Deserialize, Serialize};

use crate::api::Endpoint;
use crate::{Error, Result};

use super::token::Token;

/// Extra fields Mondo returns alongside the standard token response.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub(crate) struct MondoTokenFields {
    /// OAuth2 client the token was issued to
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub client_id: Option<String>,
    /// User the token acts for
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_id: Option<String>,
}

impl ExtraTokenFields for MondoTokenFields {}

/// Token endpoint response.
pub(crate) type MondoTokenResponse = StandardTokenResponse<MondoTokenFields, BasicTokenType>;

type OAuthClient = oauth2::Client<
    BasicErrorResponse,
    MondoTokenResponse,
    BasicTokenIntrospectionResponse,
    StandardRevocableToken,
    BasicRevocationErrorResponse,
    EndpointSet,
    EndpointNotSet,
    EndpointNotSet,
    EndpointNotSet,
    EndpointSet,
>;

/// Wraps the `oauth2` client configured for one Mondo site.
pub(crate) struct OAuthProvider {
    client: OAuthClient,
    site: String,
    token_url: String,
    authorization_url: String,
}

impl OAuthProvider {
    /// Configure the provider for `site`.
    ///
    /// The token and authorization URLs are both the site's token path;
    /// Mondo serves the password grant and refresh from the same endpoint.
    pub(crate) fn new(client_id: &str, client_secret: &SecretString, site: &str) -> Result<Self> {
        let token_url = format!("{}{}", site, Endpoint::Token.path());
        let authorization_url = token_url.clone();

        let auth = AuthUrl::new(authorization_url.clone())
            .map_err(|e| Error::Config(format!("Invalid authorization URL: {}", e)))?;
        let token = TokenUrl::new(token_url.clone())
            .map_err(|e| Error::Config(format!("Invalid token URL: {}", e)))?;

        let client: OAuthClient = oauth2::Client::new(ClientId::new(client_id.to_string()))
            .set_client_secret(ClientSecret::new(
                client_secret.expose_secret().to_string(),
            ))
            .set_auth_uri(auth)
            .set_token_uri(token)
            .set_auth_type(AuthType::RequestBody);

        Ok(Self {
            client,
            site: site.to_string(),
            token_url,
            authorization_url,
        })
    }

    pub(crate) fn site(&self) -> &str {
        &self.site
    }

    pub(crate) fn token_url(&self) -> &str {
        &self.token_url
    }

    pub(crate) fn authorization_url(&self) -> &str {
        &self.authorization_url
    }

    /// Exchange a username and password for a token.
    pub(crate) async fn password(
        &self,
        http: &reqwest::Client,
        username: &str,
        password: &SecretString,
    ) -> Result<Token> {
        let username = ResourceOwnerUsername::new(username.to_string());
        let password = ResourceOwnerPassword::new(password.expose_secret().to_string());

        let response = self
            .client
            .exchange_password(&username, &password)
            .request_async(http)
            .await
            .map_err(token_error)?;

        Ok(Token::from_response(&response, Utc::now()))
    }

    /// Exchange a refresh token for a new access token.
    pub(crate) async fn refresh(
        &self,
        http: &reqwest::Client,
        refresh_token: &SecretString,
    ) -> Result<Token> {
        let refresh_token = RefreshToken::new(refresh_token.expose_secret().to_string());

        let response = self
            .client
            .exchange_refresh_token(&refresh_token)
            .request_async(http)
            .await
            .map_err(token_error)?;

        Ok(Token::from_response(&response, Utc::now()))
    }
}

/// Map a token exchange failure onto the crate error.
///
/// Only an OAuth2 error reply from the token endpoint is an authentication
/// failure; transport and decoding errors keep their own variants.
fn token_error(
    err: RequestTokenError<HttpClientError<reqwest::Error>, BasicErrorResponse>,
) -> Error {
    match err {
        RequestTokenError::ServerResponse(response) => {
            Error::Authentication(format!("Token endpoint rejected the request: {}", response))
        }
        RequestTokenError::Request(HttpClientError::Reqwest(err)) => Error::Http(*err),
        RequestTokenError::Request(other) => {
            Error::Authentication(format!("Token request failed: {}", other))
        }
        RequestTokenError::Parse(err, _body) => Error::Json(err.into_inner()),
        RequestTokenError::Other(message) => {
            Error::Authentication(format!("Unexpected token endpoint response: {}", message))
        }
    }
}

impl std::fmt::Debug for OAuthProvider {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("OAuthProvider")
            .field("site", &self.site)
            .field("token_url", &self.token_url)
            .field("client_secret", &"[REDACTED]")
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_derived_urls() {
        let secret = SecretString::from("secret".to_string());
        let provider =
            OAuthProvider::new("client", &secret, "https://production-api.gmon.io").unwrap();

        assert_eq!(provider.site(), "https://production-api.gmon.io");
        assert_eq!(
            provider.token_url(),
            "https://production-api.gmon.io/oauth2/token"
        );
        assert_eq!(provider.authorization_url(), provider.token_url());
    }

    #[test]
    fn test_invalid_site_is_config_error() {
        let secret = SecretString::from("secret".to_string());
        let result = OAuthProvider::new("client", &secret, "not a url");
        assert!(matches!(result, Err(Error::Config(_))));
    }

    #[test]
    fn test_provider_debug_redacts_secret() {
        let secret = SecretString::from("very-secret".to_string());
        let provider = OAuthProvider::new("client", &secret, "https://example.com").unwrap();
        let debug_str = format!("{:?}", provider);
        assert!(!debug_str.contains("very-secret"));
    }
}
