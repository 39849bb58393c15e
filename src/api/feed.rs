//! Feed service for posting items to a user's account feed.

use std::sync::Arc;

use serde::de::IgnoredAny;

use crate::api::Endpoint;
use crate::client::{access_token_params, ClientInner, Params};
use crate::models::{AccountId, FeedItem};
use crate::Result;

/// Service for feed operations.
///
/// # Example
///
/// ```no_run
/// use mondo_rs::AccountId;
/// use mondo_rs::models::FeedItemBuilder;
///
/// # async fn example(client: mondo_rs::MondoClient) -> mondo_rs::Result<()> {
/// let item = FeedItemBuilder::new()
///     .title("Weekly summary")
///     .image_url("https://example.com/chart.png")
///     .build()?;
///
/// client
///     .feed()
///     .post(&AccountId::new("acc_00009237aqC8c5umZmrRdh"), &item)
///     .await?;
/// # Ok(())
/// # }
/// ```
pub struct FeedService {
    inner: Arc<ClientInner>,
}

impl FeedService {
    pub(crate) fn new(inner: Arc<ClientInner>) -> Self {
        Self { inner }
    }

    /// Post an item to an account's feed.
    ///
    /// The item type defaults to `basic` unless the item sets one.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidInput`](crate::Error::InvalidInput) if the
    /// account id is empty or the item lacks a title or image url.
    pub async fn post(&self, account_id: &AccountId, item: &FeedItem) -> Result<()> {
        let token = self.inner.current_token().await?;
        let account_id = account_id.require("post a feed item")?;
        item.validate()?;

        let params = feed_params(token.expose_access_token(), account_id, item);
        let _: IgnoredAny = self.inner.post(&Endpoint::Feed.path(), &params).await?;
        Ok(())
    }
}

/// Build the POST form for a feed item.
///
/// Precedence, lowest first: the default item type, the item's own
/// fields, then `account_id` and `access_token`.
pub(crate) fn feed_params(access_token: &str, account_id: &str, item: &FeedItem) -> Params {
    let mut params = item.with_defaults();
    params.insert("account_id".to_string(), account_id.to_string());
    params.extend(access_token_params(access_token));
    params
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::feed::{IMAGE_URL_KEY, TITLE_KEY};

    #[test]
    fn test_feed_params_exact() {
        let item = FeedItem::from_fields([(TITLE_KEY, "X"), (IMAGE_URL_KEY, "Y")]);
        let params = feed_params("T", "acc_1", &item);

        let expected: Params = [
            ("access_token", "T"),
            ("params[title]", "X"),
            ("params[image_url]", "Y"),
            ("type", "basic"),
            ("account_id", "acc_1"),
        ]
        .into_iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();
        assert_eq!(params, expected);
    }

    #[test]
    fn test_feed_params_account_id_wins_over_item() {
        let item = FeedItem::from_fields([
            (TITLE_KEY, "X"),
            (IMAGE_URL_KEY, "Y"),
            ("account_id", "acc_other"),
        ]);
        let params = feed_params("T", "acc_1", &item);
        assert_eq!(params.get("account_id").map(String::as_str), Some("acc_1"));
    }
}
