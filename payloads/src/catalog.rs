//! Derived views over the property list: category aggregation for the
//! filter bar, and filtering by the selected category.

use crate::responses::Property;

/// Token for the synthetic "show everything" filter entry.
pub const ALL_CATEGORIES: &str = "all";

/// Label used when a property carries no resolvable category.
pub const UNKNOWN_CATEGORY: &str = "Unknown";

/// One entry in the category filter bar.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryCount {
    /// Filter token; the category name itself, or [`ALL_CATEGORIES`].
    pub id: String,
    pub name: String,
    pub count: usize,
}

fn resolved_name(property: &Property) -> &str {
    property.category_name().unwrap_or(UNKNOWN_CATEGORY)
}

/// Derive the filter entries for a property list.
///
/// The first entry is always the synthetic "all" one counting every
/// property; the rest follow in first-seen order with per-name counts.
pub fn aggregate_categories(properties: &[Property]) -> Vec<CategoryCount> {
    let mut counts = vec![CategoryCount {
        id: ALL_CATEGORIES.to_string(),
        name: "All Properties".to_string(),
        count: properties.len(),
    }];

    for property in properties {
        let name = resolved_name(property);
        match counts[1..].iter_mut().find(|entry| entry.name == name) {
            Some(entry) => entry.count += 1,
            None => counts.push(CategoryCount {
                id: name.to_string(),
                name: name.to_string(),
                count: 1,
            }),
        }
    }

    counts
}

/// Filter the list by a category token, preserving order.
///
/// The "all" token returns everything. A property without an embedded
/// category matches no named token (it only ever shows under "all").
pub fn filter_by_category(
    properties: &[Property],
    category: &str,
) -> Vec<Property> {
    if category == ALL_CATEGORIES {
        return properties.to_vec();
    }
    properties
        .iter()
        .filter(|property| {
            property.category_name().is_some_and(|name| name == category)
        })
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{CategoryId, PropertyId, PropertyStatus, responses};

    fn property(id: i64, category: Option<&str>) -> Property {
        Property {
            id: PropertyId(id),
            title: format!("Listing {id}"),
            category_id: CategoryId(category.map_or(0, |_| 1)),
            category: category.map(|name| responses::Category {
                id: CategoryId(1),
                name: name.to_string(),
                properties: None,
            }),
            location: "Kathmandu".to_string(),
            price: "1,00,00,000".to_string(),
            roi: "10".to_string(),
            status: PropertyStatus::Available,
            area: "500".to_string(),
            area_nepali: None,
            distance_from_highway: None,
            images: vec![],
            description: "A listing".to_string(),
        }
    }

    #[test]
    fn empty_list_yields_only_the_all_entry() {
        let categories = aggregate_categories(&[]);
        assert_eq!(categories.len(), 1);
        assert_eq!(categories[0].id, ALL_CATEGORIES);
        assert_eq!(categories[0].count, 0);
    }

    #[test]
    fn counts_follow_first_seen_order() {
        let list = vec![
            property(1, Some("land")),
            property(2, Some("commercial")),
            property(3, Some("land")),
            property(4, None),
        ];
        let categories = aggregate_categories(&list);

        let names: Vec<&str> =
            categories.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(
            names,
            ["All Properties", "land", "commercial", UNKNOWN_CATEGORY]
        );
        assert_eq!(categories[0].count, 4);
        assert_eq!(categories[1].count, 2);
        assert_eq!(categories[2].count, 1);
        assert_eq!(categories[3].count, 1);
    }

    #[test]
    fn named_counts_sum_to_list_length() {
        let list = vec![
            property(1, Some("land")),
            property(2, None),
            property(3, Some("residential")),
            property(4, Some("land")),
            property(5, None),
        ];
        let sum: usize = aggregate_categories(&list)
            .iter()
            .filter(|c| c.id != ALL_CATEGORIES)
            .map(|c| c.count)
            .sum();
        assert_eq!(sum, list.len());
    }

    #[test]
    fn all_token_is_identity() {
        let list = vec![property(1, Some("land")), property(2, None)];
        assert_eq!(filter_by_category(&list, ALL_CATEGORIES), list);
    }

    #[test]
    fn named_token_keeps_matching_subsequence_in_order() {
        let list = vec![
            property(1, Some("land")),
            property(2, Some("commercial")),
            property(3, Some("land")),
        ];
        let filtered = filter_by_category(&list, "land");
        let ids: Vec<PropertyId> = filtered.iter().map(|p| p.id).collect();
        assert_eq!(ids, [PropertyId(1), PropertyId(3)]);
    }

    #[test]
    fn uncategorized_matches_no_named_token() {
        let list = vec![property(1, None)];
        assert!(filter_by_category(&list, "land").is_empty());
        assert!(filter_by_category(&list, UNKNOWN_CATEGORY).is_empty());
        assert_eq!(filter_by_category(&list, ALL_CATEGORIES).len(), 1);
    }
}
