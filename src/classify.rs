//! Keyword heuristics for telling industry-affiliated authors apart from
//! academic ones.
//!
//! Matching is case-sensitive substring containment. An author counts as
//! non-academic only when the affiliation text contains at least one
//! industry keyword and none of the academic ones, so
//! "Acme Institute of Technologies" stays academic even though
//! "Technologies" matches.

use crate::NOT_AVAILABLE;

/// Substrings that mark an affiliation as industry
pub const COMPANY_KEYWORDS: [&str; 7] = [
    "Inc.",
    "Ltd.",
    "Pharma",
    "Biotech",
    "Corporation",
    "Technologies",
    "Research",
];

/// Substrings that mark an affiliation as academic
pub const ACADEMIC_KEYWORDS: [&str; 7] = [
    "University",
    "College",
    "Institute",
    "Hospital",
    "School",
    "Academy",
    "Lab",
];

/// Whether a single affiliation string reads as an industry affiliation
pub fn is_industry_affiliation(affiliation: &str) -> bool {
    COMPANY_KEYWORDS.iter().any(|kw| affiliation.contains(kw))
        && !ACADEMIC_KEYWORDS.iter().any(|kw| affiliation.contains(kw))
}

/// Pick out the non-academic authors from positionally paired author and
/// affiliation sequences.
///
/// Returns two comma-joined strings: the matched authors and their
/// affiliations, or the ("N/A", "N/A") sentinel pair when nothing matches
/// or either input is empty. Sequences of different lengths are truncated
/// to the shorter one; trailing unpaired entries are dropped.
pub fn extract_non_academic_authors(
    authors: &[String],
    affiliations: &[String],
) -> (String, String) {
    let mut non_academic_authors: Vec<&str> = Vec::new();
    let mut company_affiliations: Vec<&str> = Vec::new();

    for (author, affiliation) in authors.iter().zip(affiliations.iter()) {
        if is_industry_affiliation(affiliation) {
            non_academic_authors.push(author);
            company_affiliations.push(affiliation);
        }
    }

    if non_academic_authors.is_empty() {
        (NOT_AVAILABLE.to_string(), NOT_AVAILABLE.to_string())
    } else {
        (
            non_academic_authors.join(", "),
            company_affiliations.join(", "),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn strings(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_industry_author_selected_academic_excluded() {
        let (authors, affiliations) = extract_non_academic_authors(
            &strings(&["A", "B"]),
            &strings(&["Acme Inc.", "Stanford University"]),
        );

        assert_eq!(authors, "A");
        assert_eq!(affiliations, "Acme Inc.");
    }

    #[test]
    fn test_academic_keyword_vetoes_industry_match() {
        // "Institute" outweighs "Technologies"
        let (authors, affiliations) = extract_non_academic_authors(
            &strings(&["C"]),
            &strings(&["Acme Institute of Technologies"]),
        );

        assert_eq!(authors, "N/A");
        assert_eq!(affiliations, "N/A");
    }

    #[test]
    fn test_multiple_matches_are_comma_joined() {
        let (authors, affiliations) = extract_non_academic_authors(
            &strings(&["A", "B", "C"]),
            &strings(&[
                "Genentech Inc., South San Francisco",
                "Harvard Medical School, Boston",
                "Novo Pharma Ltd., Copenhagen",
            ]),
        );

        assert_eq!(authors, "A, C");
        assert_eq!(
            affiliations,
            "Genentech Inc., South San Francisco, Novo Pharma Ltd., Copenhagen"
        );
    }

    #[test]
    fn test_empty_inputs_yield_sentinel_pair() {
        assert_eq!(
            extract_non_academic_authors(&[], &[]),
            ("N/A".to_string(), "N/A".to_string())
        );
        assert_eq!(
            extract_non_academic_authors(&strings(&["A"]), &[]),
            ("N/A".to_string(), "N/A".to_string())
        );
    }

    #[test]
    fn test_length_mismatch_truncates_silently() {
        // Third author has no paired affiliation and is dropped
        let (authors, _) = extract_non_academic_authors(
            &strings(&["A", "B", "C"]),
            &strings(&["Acme Inc.", "Vertex Biotech"]),
        );

        assert_eq!(authors, "A, B");
    }

    #[rstest]
    #[case("Acme Inc., Cambridge, MA", true)]
    #[case("Moderna Therapeutics Ltd.", true)]
    #[case("Roche Pharma Division", true)]
    #[case("Stanford University, CA", false)]
    #[case("Cold Spring Harbor Lab", false)]
    #[case("Acme Institute of Technologies", false)]
    // case-sensitive: lowercase "pharma" does not match
    #[case("initech pharma", false)]
    #[case("", false)]
    fn test_is_industry_affiliation(#[case] affiliation: &str, #[case] expected: bool) {
        assert_eq!(is_industry_affiliation(affiliation), expected);
    }
}
