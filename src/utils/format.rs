//! Formatting utilities for display values.

/// Strip the final extension from a file name (e.g., "trip.mov" -> "trip").
///
/// An extension is a dot followed by at least one character that is neither
/// a dot nor a slash. A bare dot-file like ".png" strips to "".
pub fn strip_extension(name: &str) -> &str {
    match name.rfind('.') {
        Some(idx) => {
            let ext = &name[idx + 1..];
            if ext.is_empty() || ext.contains('/') {
                name
            } else {
                &name[..idx]
            }
        }
        None => name,
    }
}

/// Uppercase initials of each word (e.g., "Vaibhav Kadam" -> "VK").
pub fn initials(name: &str) -> String {
    name.split_whitespace()
        .filter_map(|word| word.chars().next())
        .flat_map(char::to_uppercase)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strip_extension() {
        assert_eq!(strip_extension("trip.mov"), "trip");
        assert_eq!(strip_extension("holiday.trip.jpg"), "holiday.trip");
        assert_eq!(strip_extension("noext"), "noext");
        assert_eq!(strip_extension(".png"), "");
        assert_eq!(strip_extension("trailing."), "trailing.");
        assert_eq!(strip_extension("dir.v2/file"), "dir.v2/file");
    }

    #[test]
    fn test_initials() {
        assert_eq!(initials("Vaibhav Kadam"), "VK");
        assert_eq!(initials("  ada   lovelace "), "AL");
        assert_eq!(initials(""), "");
    }
}
