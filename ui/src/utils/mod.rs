//! Small display helpers shared across pages.

use payloads::PropertyStatus;

/// Uppercase the first character; category names come lowercased from the
/// backend.
pub fn capitalize(value: &str) -> String {
    let mut chars = value.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}

/// Text color for a status chip.
pub fn status_color(status: &PropertyStatus) -> &'static str {
    match status {
        PropertyStatus::Available => "text-green-600",
        PropertyStatus::Sold => "text-red-600",
        PropertyStatus::Rented => "text-amber-500",
        PropertyStatus::Other(_) => "text-slate-600",
    }
}
