//! Feed item models.
//!
//! The feed endpoint takes a flat form with `params[...]` keys rather than
//! a JSON document, so a [`FeedItem`] is kept as the exact field map that
//! will be sent.

use std::collections::BTreeMap;

use crate::{Error, Result};

/// Form key for the item title.
pub const TITLE_KEY: &str = "params[title]";
/// Form key for the item image.
pub const IMAGE_URL_KEY: &str = "params[image_url]";
/// Form key for the item type.
pub const TYPE_KEY: &str = "type";
/// Item type used when none is given.
pub const DEFAULT_ITEM_TYPE: &str = "basic";

/// Keys every feed item must carry.
pub const REQUIRED_KEYS: [&str; 2] = [TITLE_KEY, IMAGE_URL_KEY];

/// A feed item ready to post, as its flat form fields.
///
/// Build one with [`FeedItemBuilder`] or wrap an existing field map with
/// [`FeedItem::from_fields`].
///
/// # Example
///
/// ```
/// use mondo_rs::models::FeedItemBuilder;
///
/// let item = FeedItemBuilder::new()
///     .title("Coffee budget")
///     .image_url("https://example.com/cup.png")
///     .body("You have £4.20 left this week")
///     .build()
///     .unwrap();
///
/// assert_eq!(item.get("params[title]"), Some("Coffee budget"));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FeedItem {
    fields: BTreeMap<String, String>,
}

impl FeedItem {
    /// Wrap a raw field map.
    ///
    /// Keys are sent as-is, so they must already use the `params[...]` form.
    /// Required keys are checked when the item is posted.
    pub fn from_fields<I, K, V>(fields: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        Self {
            fields: fields
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }

    /// Get a field by its form key.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.fields.get(key).map(String::as_str)
    }

    /// The raw form fields.
    pub fn fields(&self) -> &BTreeMap<String, String> {
        &self.fields
    }

    /// Check that the title and image url are present and non-empty.
    pub fn validate(&self) -> Result<()> {
        let missing: Vec<&str> = REQUIRED_KEYS
            .iter()
            .copied()
            .filter(|key| self.get(key).map_or(true, |v| v.trim().is_empty()))
            .collect();

        if !missing.is_empty() {
            return Err(Error::InvalidInput(format!(
                "Both title and image_url are required for a new feed item; missing {}",
                missing.join(", ")
            )));
        }
        Ok(())
    }

    /// Fields with the default item type filled in where none was given.
    pub(crate) fn with_defaults(&self) -> BTreeMap<String, String> {
        let mut merged = BTreeMap::new();
        merged.insert(TYPE_KEY.to_string(), DEFAULT_ITEM_TYPE.to_string());
        merged.extend(self.fields.clone());
        merged
    }
}

/// Builder for [`FeedItem`].
#[derive(Debug, Clone, Default)]
pub struct FeedItemBuilder {
    item_type: Option<String>,
    title: Option<String>,
    image_url: Option<String>,
    body: Option<String>,
    url: Option<String>,
    background_color: Option<String>,
    title_color: Option<String>,
    body_color: Option<String>,
}

impl FeedItemBuilder {
    /// Create a new feed item builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the item type. Defaults to `basic`.
    pub fn item_type(mut self, item_type: impl Into<String>) -> Self {
        self.item_type = Some(item_type.into());
        self
    }

    /// Set the title (required).
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Set the image shown next to the item (required).
    pub fn image_url(mut self, image_url: impl Into<String>) -> Self {
        self.image_url = Some(image_url.into());
        self
    }

    /// Set the body text.
    pub fn body(mut self, body: impl Into<String>) -> Self {
        self.body = Some(body.into());
        self
    }

    /// Set the URL opened when the item is tapped.
    pub fn url(mut self, url: impl Into<String>) -> Self {
        self.url = Some(url.into());
        self
    }

    /// Set the background colour, as a hex string.
    pub fn background_color(mut self, color: impl Into<String>) -> Self {
        self.background_color = Some(color.into());
        self
    }

    /// Set the title colour, as a hex string.
    pub fn title_color(mut self, color: impl Into<String>) -> Self {
        self.title_color = Some(color.into());
        self
    }

    /// Set the body colour, as a hex string.
    pub fn body_color(mut self, color: impl Into<String>) -> Self {
        self.body_color = Some(color.into());
        self
    }

    /// Build the feed item.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidInput`] if the title or image url is missing.
    pub fn build(self) -> Result<FeedItem> {
        let mut fields = BTreeMap::new();

        let pairs = [
            (TYPE_KEY, self.item_type),
            (TITLE_KEY, self.title),
            (IMAGE_URL_KEY, self.image_url),
            ("params[body]", self.body),
            ("params[background_color]", self.background_color),
            ("params[title_color]", self.title_color),
            ("params[body_color]", self.body_color),
            ("url", self.url),
        ];
        for (key, value) in pairs {
            if let Some(value) = value {
                fields.insert(key.to_string(), value);
            }
        }

        let item = FeedItem { fields };
        item.validate()?;
        Ok(item)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_minimal() {
        let item = FeedItemBuilder::new()
            .title("X")
            .image_url("Y")
            .build()
            .unwrap();

        assert_eq!(item.get(TITLE_KEY), Some("X"));
        assert_eq!(item.get(IMAGE_URL_KEY), Some("Y"));
        assert_eq!(item.get(TYPE_KEY), None);
        assert_eq!(item.fields().len(), 2);
    }

    #[test]
    fn test_builder_missing_image_url() {
        let result = FeedItemBuilder::new().title("X").build();
        assert!(matches!(result, Err(Error::InvalidInput(_))));
    }

    #[test]
    fn test_raw_fields_validation() {
        let item = FeedItem::from_fields([(TITLE_KEY, "X")]);
        let err = item.validate().unwrap_err();
        assert!(err.to_string().contains(IMAGE_URL_KEY));

        let item = FeedItem::from_fields([(TITLE_KEY, "X"), (IMAGE_URL_KEY, "")]);
        assert!(item.validate().is_err());
    }

    #[test]
    fn test_defaults_do_not_override_explicit_type() {
        let item = FeedItem::from_fields([
            (TITLE_KEY, "X"),
            (IMAGE_URL_KEY, "Y"),
            (TYPE_KEY, "custom"),
        ]);
        assert_eq!(item.with_defaults().get(TYPE_KEY).map(String::as_str), Some("custom"));

        let item = FeedItem::from_fields([(TITLE_KEY, "X"), (IMAGE_URL_KEY, "Y")]);
        assert_eq!(item.with_defaults().get(TYPE_KEY).map(String::as_str), Some("basic"));
    }
}
