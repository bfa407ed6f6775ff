//! Small text formatting helpers shared by the storefront.

/// Format a count with a pluralized noun, e.g. "1 Color" / "3 Colors".
///
/// Singular only when the count is exactly one; zero pluralizes
/// ("0 Colors").
pub fn pluralize(noun: &str, count: u32) -> String {
    if count == 1 {
        format!("1 {}", noun)
    } else {
        format!("{} {}s", count, noun)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_singular() {
        assert_eq!(pluralize("Color", 1), "1 Color");
    }

    #[test]
    fn test_plural() {
        assert_eq!(pluralize("Color", 3), "3 Colors");
    }

    #[test]
    fn test_zero_is_plural() {
        assert_eq!(pluralize("Color", 0), "0 Colors");
    }
}
