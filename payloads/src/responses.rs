use crate::{CategoryId, PropertyId, PropertyStatus};
use serde::{Deserialize, Serialize};

/// A real-estate listing as returned by the backend.
///
/// `category` is embedded by the list endpoints; single-property fetches may
/// omit it, so resolution falls back through `category_name`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Property {
    pub id: PropertyId,
    pub title: String,
    pub category_id: CategoryId,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<Category>,
    pub location: String,
    /// Display string, e.g. "2,50,00,000" (price per aana).
    pub price: String,
    /// Display string, e.g. "12" (percent).
    pub roi: String,
    pub status: PropertyStatus,
    pub area: String,
    /// Area in the R-A-P-D convention, e.g. "0-0-0-0.0".
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub area_nepali: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub distance_from_highway: Option<f64>,
    /// Relative or absolute image URLs; resolve relative ones with
    /// `APIClient::image_url`.
    #[serde(default)]
    pub images: Vec<String>,
    pub description: String,
}

impl Property {
    /// Name of the embedded category, if the relation was included.
    pub fn category_name(&self) -> Option<&str> {
        self.category.as_ref().map(|c| c.name.as_str())
    }
}

/// A grouping label for properties. The detail endpoint embeds the
/// properties referencing it; list endpoints leave `properties` out.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Category {
    pub id: CategoryId,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub properties: Option<Vec<Property>>,
}

/// Back-office dashboard counters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Stats {
    pub total_properties: i64,
    pub total_categories: i64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn property_decodes_backend_json() {
        let json = r#"{
            "id": 7,
            "title": "Riverside plot",
            "categoryId": 2,
            "category": {"id": 2, "name": "land"},
            "location": "Chitwan",
            "price": "1,20,00,000",
            "roi": "10",
            "status": "Available",
            "area": "1200",
            "areaNepali": "0-4-0-0",
            "distanceFromHighway": 250,
            "images": ["/uploads/riverside-1.jpg"],
            "description": "South-facing plot by the river."
        }"#;

        let property: Property = serde_json::from_str(json).unwrap();
        assert_eq!(property.id, PropertyId(7));
        assert_eq!(property.category_name(), Some("land"));
        assert_eq!(property.status, PropertyStatus::Available);
        assert_eq!(property.area_nepali.as_deref(), Some("0-4-0-0"));
        assert_eq!(property.distance_from_highway, Some(250.0));
        assert_eq!(property.images.len(), 1);
    }

    #[test]
    fn property_tolerates_missing_optional_fields() {
        let json = r#"{
            "id": 1,
            "title": "Office floor",
            "categoryId": 3,
            "location": "Kathmandu",
            "price": "90,00,000",
            "roi": "8",
            "status": "Rented",
            "area": "800",
            "description": "Third floor, lift access."
        }"#;

        let property: Property = serde_json::from_str(json).unwrap();
        assert_eq!(property.category_name(), None);
        assert!(property.images.is_empty());
        assert_eq!(property.area_nepali, None);
        assert_eq!(property.distance_from_highway, None);
    }

    #[test]
    fn stats_decodes_camel_case() {
        let stats: Stats =
            serde_json::from_str(r#"{"totalProperties":12,"totalCategories":3}"#)
                .unwrap();
        assert_eq!(stats.total_properties, 12);
        assert_eq!(stats.total_categories, 3);
    }
}
