use crate::faq_groups;
use agency_domain::content::Faq;
use tracing::debug;

/// Every FAQ of every group, group by group in declaration order.
pub fn all_faqs() -> Vec<&'static Faq> {
    faq_groups().iter().flat_map(|group| group.faqs.iter()).collect()
}

/// Case-insensitive substring search over FAQ questions and answers.
///
/// Scans every group in declaration order and every FAQ within it; a FAQ
/// matches when either field contains `keyword`. No ranking, deduplication or
/// limit is applied, and an empty keyword matches everything.
pub fn search_faqs(keyword: &str) -> Vec<&'static Faq> {
    let needle = keyword.to_lowercase();
    let matches: Vec<&'static Faq> = faq_groups()
        .iter()
        .flat_map(|group| group.faqs.iter())
        .filter(|faq| matches_keyword(faq, &needle))
        .collect();

    debug!(keyword, matches = matches.len(), "FAQ search");
    matches
}

fn matches_keyword(faq: &Faq, needle: &str) -> bool {
    faq.question.to_lowercase().contains(needle) || faq.answer.to_lowercase().contains(needle)
}

#[cfg(test)]
mod tests {
    use super::*;

    const FAQ: Faq = Faq { question: "Is MOBILE supported?", answer: "Yes, on every device." };

    #[test]
    fn matching_ignores_case_on_both_fields() {
        assert!(matches_keyword(&FAQ, "mobile"));
        assert!(matches_keyword(&FAQ, "every device"));
        assert!(!matches_keyword(&FAQ, "desktop"));
    }

    #[test]
    fn empty_needle_matches() {
        assert!(matches_keyword(&FAQ, ""));
    }
}
