//! Product record and its value objects.

use indexmap::IndexMap;
use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use ecourses_core::ProductId;

/// Course price, stored in cents so values are exact and non-negative by
/// construction.
///
/// The storefront payload carries decimal prices (`6.99`), so serialization
/// converts to and from dollars; deserializing a negative number is the one
/// externally reachable way to violate the price invariant and is rejected.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Price(u64);

impl Price {
    pub const fn from_cents(cents: u64) -> Self {
        Self(cents)
    }

    pub const fn cents(self) -> u64 {
        self.0
    }

    pub fn dollars(self) -> f64 {
        self.0 as f64 / 100.0
    }

    pub const fn is_free(self) -> bool {
        self.0 == 0
    }
}

impl core::fmt::Display for Price {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}.{:02}", self.0 / 100, self.0 % 100)
    }
}

impl Serialize for Price {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_f64(self.dollars())
    }
}

impl<'de> Deserialize<'de> for Price {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let dollars = f64::deserialize(deserializer)?;
        if !dollars.is_finite() || dollars < 0.0 {
            return Err(D::Error::custom(format!(
                "price must be a non-negative number, got {dollars}"
            )));
        }
        Ok(Self((dollars * 100.0).round() as u64))
    }
}

/// Heterogeneous specification table.
///
/// Keys are not fixed across products; each course picks its own attribute
/// names, and iteration order is authoring order.
pub type Specifications = IndexMap<String, String>;

/// One purchasable course in the catalog.
///
/// Field names follow the storefront wire format (`detailedDescription`,
/// `inStock`); `video`/`videos` are omitted from the payload when absent.
/// When `videos` is present it supersedes `video` for presentation; both
/// fields stay populated, `videos` just means the course ships in segments.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    pub price: Price,
    pub image: String,
    pub images: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub video: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub videos: Option<Vec<String>>,
    pub description: String,
    pub detailed_description: String,
    pub category: String,
    pub features: Vec<String>,
    pub specifications: Specifications,
    pub in_stock: bool,
}

impl Product {
    /// Whether the course ships as a multi-part video bundle.
    pub fn is_bundle(&self) -> bool {
        self.videos.is_some()
    }

    /// Videos to present for this course, in presentation order.
    ///
    /// A bundle supersedes the single preview; a course with neither yields
    /// an empty list.
    pub fn playlist(&self) -> Vec<&str> {
        match (&self.videos, &self.video) {
            (Some(videos), _) => videos.iter().map(String::as_str).collect(),
            (None, Some(video)) => vec![video.as_str()],
            (None, None) => Vec::new(),
        }
    }
}
