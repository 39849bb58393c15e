//! Token introspection service.

use std::sync::Arc;

use crate::api::Endpoint;
use crate::client::ClientInner;
use crate::models::WhoAmI;
use crate::Result;

/// Service for checking what the current token grants.
pub struct PingService {
    inner: Arc<ClientInner>,
}

impl PingService {
    pub(crate) fn new(inner: Arc<ClientInner>) -> Self {
        Self { inner }
    }

    /// Ask the API who the stored access token belongs to.
    pub async fn whoami(&self) -> Result<WhoAmI> {
        let params = self.inner.token_params().await?;
        self.inner.get(&Endpoint::Ping.path(), &params).await
    }
}
