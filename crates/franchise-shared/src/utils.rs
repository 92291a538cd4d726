//! Utility functions

/// Trims `value` and returns it, or `None` when it is absent or whitespace-only.
pub fn non_blank(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}

pub fn is_blank(value: Option<&str>) -> bool {
    non_blank(value).is_none()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_non_blank_trims() {
        assert_eq!(non_blank(Some("  Centro ")), Some("Centro"));
    }

    #[test]
    fn test_blank_values() {
        assert!(is_blank(None));
        assert!(is_blank(Some("")));
        assert!(is_blank(Some(" \t\n ")));
        assert!(!is_blank(Some("x")));
    }
}
