//! Static hotel metadata shown in the info panel.
//!
//! The record is fetched once from the info endpoint and cached for the life
//! of the widget. Every field is optional: the backend may send any subset
//! and unknown fields are ignored.
//!
//! - [`HotelInfo`]: the payload of `GET /hotel-info`
//! - [`sections`]: pure projection into ordered [`InfoSection`] descriptors

mod sections;

pub use sections::{InfoSection, sections, star_count};

use serde::de::IgnoredAny;
use serde::{Deserialize, Deserializer, Serialize};

/// Hotel metadata record.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct HotelInfo {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address: Option<Address>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rating: Option<Rating>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hours: Option<Hours>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub contact: Option<Contact>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub faqs: Option<Vec<Faq>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub policies: Option<Policies>,
}

/// Postal address.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Address {
    #[serde(default)]
    pub street: Option<String>,
    #[serde(default)]
    pub city: Option<String>,
    #[serde(default)]
    pub postal_code: Option<String>,
}

/// Aggregate guest rating on a 0-5 scale.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Rating {
    /// Accepts a number or a numeric string; anything else reads as absent.
    #[serde(default, deserialize_with = "lenient_number")]
    pub average: Option<f64>,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawNumber {
    Number(f64),
    Text(String),
    Other(#[allow(dead_code)] IgnoredAny),
}

fn lenient_number<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    let average = match Option::<RawNumber>::deserialize(deserializer)? {
        None => None,
        Some(RawNumber::Number(n)) => Some(n),
        Some(RawNumber::Text(text)) => {
            let parsed = text.trim().parse::<f64>().ok();
            if parsed.is_none() {
                tracing::warn!(value = %text, "Ignoring non-numeric rating.average");
            }
            parsed
        }
        Some(RawNumber::Other(_)) => {
            tracing::warn!("Ignoring rating.average of unexpected type");
            None
        }
    };
    Ok(average)
}

/// Opening hours of the main services.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Hours {
    #[serde(default)]
    pub breakfast: Option<String>,
    #[serde(default)]
    pub spa: Option<String>,
    #[serde(default)]
    pub pool: Option<String>,
}

/// Reception contact details.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Contact {
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
}

/// One frequently asked question.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Faq {
    #[serde(default)]
    pub q: Option<String>,
    #[serde(default)]
    pub a: Option<String>,
}

/// Booking policies.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Policies {
    #[serde(default)]
    pub cancellation: Option<String>,
    #[serde(default)]
    pub deposit: Option<String>,
}
