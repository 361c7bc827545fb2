//! Record shapes exchanged between the scraping collaborators, the cleanup
//! stages, and the downstream retrieval indexer.
//!
//! All three record types are JSON objects on disk. Required fields are
//! `brand_name` and `product_name`; a record missing either fails the whole
//! file load. Every other field defaults to an empty value when absent or
//! `null`.

use std::collections::BTreeMap;

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};

/// Option label meaning "single item, no variant".
pub const SINGLE_ITEM: &str = "단품";

/// Color-swatch image references attached to a variant.
///
/// The scraper writes either a bare string (possibly empty) or a list.
/// Both shapes are coerced into a de-duplicated list on deserialization,
/// and the value always serializes as a list.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "ThumbColorRepr", into = "Vec<String>")]
pub struct ThumbColor(Vec<String>);

#[derive(Deserialize)]
#[serde(untagged)]
enum ThumbColorRepr {
    One(String),
    Many(Vec<Option<String>>),
    Null(()),
}

impl From<ThumbColorRepr> for ThumbColor {
    fn from(repr: ThumbColorRepr) -> Self {
        match repr {
            ThumbColorRepr::One(url) => Self::new([url]),
            ThumbColorRepr::Many(urls) => Self::new(urls.into_iter().flatten()),
            ThumbColorRepr::Null(()) => Self::default(),
        }
    }
}

impl From<ThumbColor> for Vec<String> {
    fn from(value: ThumbColor) -> Self {
        value.0
    }
}

impl ThumbColor {
    /// Builds a swatch list, dropping empty strings and repeated entries.
    /// First-seen order is kept.
    pub fn new<I, S>(urls: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut out = Self::default();
        for url in urls {
            out.insert(url.into());
        }
        out
    }

    /// Adds `url` unless it is empty or already present. Returns whether the
    /// list changed.
    pub fn insert(&mut self, url: String) -> bool {
        if url.is_empty() || self.0.contains(&url) {
            return false;
        }
        self.0.push(url);
        true
    }

    /// Adds every entry of `other` not already present.
    pub fn union_with(&mut self, other: &ThumbColor) {
        for url in &other.0 {
            self.insert(url.clone());
        }
    }

    #[must_use]
    pub fn as_slice(&self) -> &[String] {
        &self.0
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Set equality, ignoring order.
    #[must_use]
    pub fn same_set(&self, other: &ThumbColor) -> bool {
        self.len() == other.len() && self.0.iter().all(|url| other.0.contains(url))
    }
}

/// One product variant as scraped from a category listing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductRecord {
    pub brand_name: String,
    pub product_name: String,
    /// Variant label, e.g. `"01 핑크"`, or [`SINGLE_ITEM`] for products
    /// without options. Raw labels may carry a second line with the price.
    #[serde(default, deserialize_with = "empty_if_null")]
    pub code_name: String,
    /// Price as digits only, e.g. `"36000"`.
    #[serde(default, deserialize_with = "empty_if_null")]
    pub price: String,
    #[serde(default, deserialize_with = "empty_if_null")]
    pub product_main_image: String,
    #[serde(default, deserialize_with = "empty_if_null")]
    pub product_url: String,
    #[serde(default)]
    pub thumb_color: ThumbColor,
    /// Fields this pipeline does not interpret (e.g. `product_images`),
    /// carried through unchanged.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// A block of customer reviews collected under one option label.
///
/// On input the option label may be keyed `review_name` or, in older
/// scrapes, `code_name`. Review bodies may arrive as `text1..textN` keys or
/// as a `texts` array; numbered keys are flattened in numeric order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawReviewRecord")]
pub struct ReviewRecord {
    pub brand_name: String,
    pub product_name: String,
    pub review_name: String,
    pub price: String,
    pub product_main_image: String,
    pub product_url: String,
    pub texts: Vec<String>,
}

#[derive(Deserialize)]
struct RawReviewRecord {
    brand_name: String,
    product_name: String,
    #[serde(default)]
    review_name: Option<String>,
    #[serde(default)]
    code_name: Option<String>,
    #[serde(default, deserialize_with = "empty_if_null")]
    price: String,
    #[serde(default, deserialize_with = "empty_if_null")]
    product_main_image: String,
    #[serde(default, deserialize_with = "empty_if_null")]
    product_url: String,
    #[serde(default)]
    texts: Option<Vec<String>>,
    #[serde(flatten)]
    rest: BTreeMap<String, Value>,
}

impl TryFrom<RawReviewRecord> for ReviewRecord {
    type Error = String;

    fn try_from(raw: RawReviewRecord) -> Result<Self, Self::Error> {
        let mut numbered = Vec::new();
        for (key, value) in raw.rest {
            let Some(index) = key
                .strip_prefix("text")
                .and_then(|n| n.parse::<u32>().ok())
            else {
                continue;
            };
            let text = match value {
                Value::String(s) => s,
                Value::Null => String::new(),
                other => return Err(format!("review field {key} must be a string, got {other}")),
            };
            numbered.push((index, text));
        }
        numbered.sort_by_key(|(index, _)| *index);

        let mut texts = raw.texts.unwrap_or_default();
        texts.extend(numbered.into_iter().map(|(_, text)| text));

        Ok(Self {
            brand_name: raw.brand_name,
            product_name: raw.product_name,
            review_name: raw.review_name.or(raw.code_name).unwrap_or_default(),
            price: raw.price,
            product_main_image: raw.product_main_image,
            product_url: raw.product_url,
            texts,
        })
    }
}

/// A product variant with the review bodies matched to it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MergedRecord {
    #[serde(flatten)]
    pub product: ProductRecord,
    /// Empty when no review block matched; never omitted.
    #[serde(default)]
    pub texts: Vec<String>,
}

impl AsRef<ProductRecord> for ProductRecord {
    fn as_ref(&self) -> &ProductRecord {
        self
    }
}

impl AsMut<ProductRecord> for ProductRecord {
    fn as_mut(&mut self) -> &mut ProductRecord {
        self
    }
}

impl AsRef<ProductRecord> for MergedRecord {
    fn as_ref(&self) -> &ProductRecord {
        &self.product
    }
}

impl AsMut<ProductRecord> for MergedRecord {
    fn as_mut(&mut self) -> &mut ProductRecord {
        &mut self.product
    }
}

fn empty_if_null<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

#[cfg(test)]
#[path = "records_test.rs"]
mod tests;
