use derive_more::Display;
use serde::{Deserialize, Serialize};

pub mod api_client;
pub mod catalog;
pub mod image_set;
pub mod requests;
pub mod responses;

pub use api_client::{APIClient, ClientError, ImagePart};

/// Most images a single property listing may carry.
pub const MAX_PROPERTY_IMAGES: usize = 10;

#[derive(
    Debug,
    Display,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    Serialize,
    Deserialize,
)]
pub struct PropertyId(pub i64);

#[derive(
    Debug,
    Display,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    Serialize,
    Deserialize,
)]
pub struct CategoryId(pub i64);

/// Listing statuses offered in the admin forms.
pub const STATUS_OPTIONS: [&str; 3] = ["Available", "Sold", "Rented"];

/// Sale status of a property listing.
///
/// The backend stores this as a plain string, so unknown values round-trip
/// through `Other` rather than failing deserialization.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PropertyStatus {
    Available,
    Sold,
    Rented,
    Other(String),
}

impl PropertyStatus {
    pub fn as_str(&self) -> &str {
        match self {
            Self::Available => "Available",
            Self::Sold => "Sold",
            Self::Rented => "Rented",
            Self::Other(s) => s,
        }
    }
}

impl std::fmt::Display for PropertyStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<&str> for PropertyStatus {
    fn from(value: &str) -> Self {
        match value {
            "Available" => Self::Available,
            "Sold" => Self::Sold,
            "Rented" => Self::Rented,
            other => Self::Other(other.to_string()),
        }
    }
}

impl From<String> for PropertyStatus {
    fn from(value: String) -> Self {
        value.as_str().into()
    }
}

impl Serialize for PropertyStatus {
    fn serialize<S: serde::Serializer>(
        &self,
        serializer: S,
    ) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for PropertyStatus {
    fn deserialize<D: serde::Deserializer<'de>>(
        deserializer: D,
    ) -> Result<Self, D::Error> {
        String::deserialize(deserializer).map(Into::into)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_round_trips_known_values() {
        for name in STATUS_OPTIONS {
            let status = PropertyStatus::from(name);
            assert_ne!(status, PropertyStatus::Other(name.to_string()));
            let encoded = serde_json::to_string(&status).unwrap();
            assert_eq!(encoded, format!("\"{name}\""));
            let decoded: PropertyStatus =
                serde_json::from_str(&encoded).unwrap();
            assert_eq!(decoded, status);
        }
    }

    #[test]
    fn status_preserves_unknown_values() {
        let decoded: PropertyStatus =
            serde_json::from_str("\"Pending\"").unwrap();
        assert_eq!(decoded, PropertyStatus::Other("Pending".to_string()));
        assert_eq!(serde_json::to_string(&decoded).unwrap(), "\"Pending\"");
    }
}
