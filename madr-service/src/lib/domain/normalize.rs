/// Canonical form for author names, book titles and their search filters.
///
/// Trims, lowercases, and collapses every internal whitespace run to a single
/// space, so `"  The   Hobbit "` and `"the hobbit"` compare equal.
pub fn normalize_name(raw: &str) -> String {
    raw.split_whitespace()
        .map(str::to_lowercase)
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trims_and_lowercases() {
        assert_eq!(normalize_name("  Book Title "), "book title");
    }

    #[test]
    fn test_collapses_internal_whitespace() {
        assert_eq!(normalize_name("The\t Lord   of\nthe Rings"), "the lord of the rings");
    }

    #[test]
    fn test_blank_input_is_empty() {
        assert_eq!(normalize_name("   "), "");
        assert_eq!(normalize_name(""), "");
    }
}
