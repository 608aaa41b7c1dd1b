use crate::CategoryId;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Validation messages keyed by form field name.
///
/// Field names follow the wire convention (`categoryId`, `areaNepali`) so
/// a message lands under the input it belongs to. Any entry blocks
/// submission; validation never reaches the network.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormErrors {
    errors: BTreeMap<&'static str, String>,
}

impl FormErrors {
    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn len(&self) -> usize {
        self.errors.len()
    }

    pub fn get(&self, field: &str) -> Option<&str> {
        self.errors.get(field).map(String::as_str)
    }

    pub fn insert(&mut self, field: &'static str, message: impl Into<String>) {
        self.errors.insert(field, message.into());
    }

    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &str)> {
        self.errors.iter().map(|(field, message)| (*field, message.as_str()))
    }
}

/// In-progress property form contents, exactly as entered.
///
/// Numbers stay as strings until submission; `category_id` of 0 means no
/// selection has been made yet.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PropertyDraft {
    pub title: String,
    pub category_id: CategoryId,
    pub location: String,
    pub price: String,
    pub roi: String,
    pub status: String,
    pub area: String,
    pub area_nepali: String,
    pub distance_from_highway: String,
    pub description: String,
}

impl PropertyDraft {
    /// Check every field, collecting all violations at once.
    pub fn validate(&self) -> FormErrors {
        let mut errors = FormErrors::default();

        if self.title.trim().is_empty() {
            errors.insert("title", "Title is required");
        }
        if self.category_id == CategoryId(0) {
            errors.insert("categoryId", "Category is required");
        }
        if self.location.trim().is_empty() {
            errors.insert("location", "Location is required");
        }
        if self.price.trim().is_empty() {
            errors.insert("price", "Price is required");
        }
        if self.roi.trim().is_empty() {
            errors.insert("roi", "ROI is required");
        }
        if self.status.trim().is_empty() {
            errors.insert("status", "Status is required");
        }
        if self.area.trim().is_empty() {
            errors.insert("area", "Area is required");
        }
        if self.description.trim().is_empty() {
            errors.insert("description", "Description is required");
        }

        let area_nepali = self.area_nepali.trim();
        if !area_nepali.is_empty() && !is_area_nepali(area_nepali) {
            errors.insert(
                "areaNepali",
                "Use the R-A-P-D format, e.g. 0-0-0-0.0",
            );
        }

        errors
    }

    /// Parsed highway distance, if one was entered.
    pub fn distance_value(&self) -> Option<f64> {
        let raw = self.distance_from_highway.trim();
        if raw.is_empty() {
            return None;
        }
        raw.parse().ok().filter(|distance| *distance >= 0.0)
    }
}

/// Four integer groups separated by hyphens (ropani-aana-paisa-daam), with
/// an optional decimal suffix on the last group.
fn is_area_nepali(value: &str) -> bool {
    let groups: Vec<&str> = value.split('-').collect();
    if groups.len() != 4 {
        return false;
    }
    let digits =
        |g: &str| !g.is_empty() && g.chars().all(|c| c.is_ascii_digit());
    if !groups[..3].iter().all(|g| digits(g)) {
        return false;
    }
    match groups[3].split_once('.') {
        Some((whole, fraction)) => digits(whole) && digits(fraction),
        None => digits(groups[3]),
    }
}

/// Contact-page inquiry form contents.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactDraft {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub investment_range: String,
    pub property_type: String,
    pub message: String,
}

impl ContactDraft {
    pub fn validate(&self) -> FormErrors {
        let mut errors = FormErrors::default();

        if self.name.trim().is_empty() {
            errors.insert("name", "Name is required");
        }
        let email = self.email.trim();
        if email.is_empty() {
            errors.insert("email", "Email is required");
        } else if !is_email(email) {
            errors.insert("email", "Please enter a valid email address");
        }
        let phone = self.phone.trim();
        if !phone.is_empty() && !is_nepal_mobile(phone) {
            errors.insert("phone", "Please enter a valid phone number");
        }
        if self.investment_range.trim().is_empty() {
            errors.insert("investmentRange", "Investment range is required");
        }
        if self.property_type.trim().is_empty() {
            errors.insert("propertyType", "Property type is required");
        }

        errors
    }
}

fn is_email(value: &str) -> bool {
    if value.chars().any(char::is_whitespace) {
        return false;
    }
    let Some((local, domain)) = value.split_once('@') else {
        return false;
    };
    if local.is_empty() || domain.contains('@') {
        return false;
    }
    match domain.rsplit_once('.') {
        Some((host, tld)) => !host.is_empty() && !tld.is_empty(),
        None => false,
    }
}

/// Nepali mobile number: optional +977 country code, then ten digits
/// starting 96-99.
fn is_nepal_mobile(value: &str) -> bool {
    let digits = value.strip_prefix("+977").unwrap_or(value);
    let bytes = digits.as_bytes();
    bytes.len() == 10
        && digits.chars().all(|c| c.is_ascii_digit())
        && bytes[0] == b'9'
        && (b'6'..=b'9').contains(&bytes[1])
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_draft() -> PropertyDraft {
        PropertyDraft {
            title: "Riverside plot".to_string(),
            category_id: CategoryId(2),
            location: "Chitwan".to_string(),
            price: "1,20,00,000".to_string(),
            roi: "10".to_string(),
            status: "Available".to_string(),
            area: "1200".to_string(),
            area_nepali: String::new(),
            distance_from_highway: String::new(),
            description: "South-facing plot by the river.".to_string(),
        }
    }

    #[test]
    fn valid_draft_passes() {
        assert!(valid_draft().validate().is_empty());
    }

    #[test]
    fn missing_title_is_reported() {
        let mut draft = valid_draft();
        draft.title = "  ".to_string();
        let errors = draft.validate();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors.get("title"), Some("Title is required"));
    }

    #[test]
    fn all_violations_surface_together() {
        let draft = PropertyDraft {
            area_nepali: "bad".to_string(),
            ..PropertyDraft::default()
        };
        let errors = draft.validate();
        assert!(errors.len() >= 3);
        assert!(errors.get("title").is_some());
        assert!(errors.get("categoryId").is_some());
        assert!(errors.get("areaNepali").is_some());
    }

    #[test]
    fn area_nepali_requires_four_groups() {
        let mut draft = valid_draft();
        draft.area_nepali = "12-3-1".to_string();
        assert!(draft.validate().get("areaNepali").is_some());

        draft.area_nepali = "1-2-3-4.5".to_string();
        assert!(draft.validate().is_empty());

        draft.area_nepali = "0-0-0-0.0".to_string();
        assert!(draft.validate().is_empty());
    }

    #[test]
    fn area_nepali_rejects_stray_characters() {
        for bad in ["1-2-3-x", "1-2-3-", "-1-2-3", "1-2-3-4.5.6", "1 -2-3-4"] {
            let mut draft = valid_draft();
            draft.area_nepali = bad.to_string();
            assert!(
                draft.validate().get("areaNepali").is_some(),
                "expected {bad:?} to be rejected"
            );
        }
    }

    #[test]
    fn distance_parses_only_non_negative_numbers() {
        let mut draft = valid_draft();
        assert_eq!(draft.distance_value(), None);

        draft.distance_from_highway = "250".to_string();
        assert_eq!(draft.distance_value(), Some(250.0));

        draft.distance_from_highway = "-5".to_string();
        assert_eq!(draft.distance_value(), None);

        draft.distance_from_highway = "near".to_string();
        assert_eq!(draft.distance_value(), None);
    }

    fn valid_contact() -> ContactDraft {
        ContactDraft {
            name: "Asha Gurung".to_string(),
            email: "asha@example.com".to_string(),
            phone: "+9779812345678".to_string(),
            investment_range: "50L - 1Cr".to_string(),
            property_type: "Land".to_string(),
            message: "Interested in riverside plots.".to_string(),
        }
    }

    #[test]
    fn valid_contact_passes() {
        assert!(valid_contact().validate().is_empty());
    }

    #[test]
    fn contact_requires_core_fields() {
        let errors = ContactDraft::default().validate();
        assert!(errors.get("name").is_some());
        assert!(errors.get("email").is_some());
        assert!(errors.get("investmentRange").is_some());
        assert!(errors.get("propertyType").is_some());
        // Phone and message are optional.
        assert!(errors.get("phone").is_none());
        assert_eq!(errors.len(), 4);
    }

    #[test]
    fn contact_checks_email_shape() {
        for bad in ["plainaddress", "a@b", "a b@c.com", "@host.com"] {
            let mut contact = valid_contact();
            contact.email = bad.to_string();
            assert!(
                contact.validate().get("email").is_some(),
                "expected {bad:?} to be rejected"
            );
        }
    }

    #[test]
    fn contact_checks_phone_shape() {
        for good in ["9812345678", "+9779861234567"] {
            let mut contact = valid_contact();
            contact.phone = good.to_string();
            assert!(contact.validate().is_empty(), "expected {good:?} to pass");
        }
        for bad in ["12345", "9512345678", "+977981234567890"] {
            let mut contact = valid_contact();
            contact.phone = bad.to_string();
            assert!(
                contact.validate().get("phone").is_some(),
                "expected {bad:?} to be rejected"
            );
        }
    }
}
