//! Heuristic lead scoring.
//!
//! Rules are additive and evaluated independently. The reason list keeps
//! rule order:
//!
//! | rule | condition                         | score | label             |
//! |------|-----------------------------------|-------|-------------------|
//! | 1    | location is a strong market       | +2    | `Strong Market`   |
//! | 2    | industry is a target industry     | +2    | `Target Industry` |
//! | 3    | website contains `.ai`            |       | `AI-Focused`      |
//! | 4    | website contains `.io` or `.ai`   | +2    |                   |
//! | 5    | name longer than 8 characters     | +1    | `Brand Depth`     |
//!
//! Rules 3 and 4 deliberately disagree: a `.io` site earns the bonus but no
//! label.

use crate::types::CompanyRecord;

/// Locations worth the market bonus.
pub const STRONG_MARKETS: &[&str] = &["USA", "UK"];

/// Industries worth the industry bonus.
pub const TARGET_INDUSTRIES: &[&str] = &["Fintech", "CRM Software", "SaaS"];

/// Highest score the current rule set can produce.
pub const MAX_SCORE: u8 = 7;

/// Scale the dashboard displays scores against.
pub const DISPLAY_SCALE: u8 = 10;

/// Reason reported when no labelled rule triggers.
pub const GENERAL_REASON: &str = "General";

const NAME_DEPTH_CHARS: usize = 8;

fn is_strong_market(record: &CompanyRecord) -> bool {
    STRONG_MARKETS.contains(&record.location.as_str())
}

fn is_target_industry(record: &CompanyRecord) -> bool {
    TARGET_INDUSTRIES.contains(&record.industry.as_str())
}

fn is_ai_domain(record: &CompanyRecord) -> bool {
    record.website.contains(".ai")
}

fn is_startup_domain(record: &CompanyRecord) -> bool {
    record.website.contains(".io") || record.website.contains(".ai")
}

fn has_brand_depth(record: &CompanyRecord) -> bool {
    record.name.chars().count() > NAME_DEPTH_CHARS
}

/// Lead score of a record, in `[0, MAX_SCORE]`.
pub fn score(record: &CompanyRecord) -> u8 {
    let mut score = 0;
    if is_strong_market(record) {
        score += 2;
    }
    if is_target_industry(record) {
        score += 2;
    }
    if is_startup_domain(record) {
        score += 2;
    }
    if has_brand_depth(record) {
        score += 1;
    }
    score
}

/// Triggered rule labels joined with ", ", or [`GENERAL_REASON`].
pub fn reason(record: &CompanyRecord) -> String {
    let mut reasons = Vec::new();
    if is_strong_market(record) {
        reasons.push("Strong Market");
    }
    if is_target_industry(record) {
        reasons.push("Target Industry");
    }
    if is_ai_domain(record) {
        reasons.push("AI-Focused");
    }
    if has_brand_depth(record) {
        reasons.push("Brand Depth");
    }

    if reasons.is_empty() {
        GENERAL_REASON.to_string()
    } else {
        reasons.join(", ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(name: &str, website: &str, industry: &str, location: &str) -> CompanyRecord {
        CompanyRecord {
            name: name.to_string(),
            website: website.to_string(),
            industry: industry.to_string(),
            location: location.to_string(),
        }
    }

    #[test]
    fn test_no_rules_is_general() {
        let r = record("Acme", "acme.com", "Retail", "Germany");
        assert_eq!(score(&r), 0);
        assert_eq!(reason(&r), "General");
    }

    #[test]
    fn test_all_rules() {
        let r = record("Quantifyer", "quantifyer.ai", "SaaS", "USA");
        assert_eq!(score(&r), MAX_SCORE);
        assert_eq!(
            reason(&r),
            "Strong Market, Target Industry, AI-Focused, Brand Depth"
        );
    }

    #[test]
    fn test_io_scores_without_label() {
        // Guards the .ai/.io asymmetry between score and reason.
        let r = record("Acme", "acme.io", "Retail", "Germany");
        assert_eq!(score(&r), 2);
        assert_eq!(reason(&r), "General");
    }

    #[test]
    fn test_ai_scores_once_with_label() {
        let r = record("Acme", "https://acme.ai", "Retail", "Germany");
        assert_eq!(score(&r), 2);
        assert_eq!(reason(&r), "AI-Focused");
    }

    #[test]
    fn test_ai_substring_anywhere_in_website() {
        let r = record("Acme", "acme.aim.com", "Retail", "France");
        assert_eq!(score(&r), 2);
        assert_eq!(reason(&r), "AI-Focused");
    }

    #[test]
    fn test_membership_is_exact() {
        let r = record("Acme", "acme.com", "fintech", "usa");
        assert_eq!(score(&r), 0);
        assert_eq!(reason(&r), "General");

        let r = record("Acme", "acme.com", "CRM Software", "UK");
        assert_eq!(score(&r), 4);
        assert_eq!(reason(&r), "Strong Market, Target Industry");
    }

    #[test]
    fn test_brand_depth_threshold() {
        let eight = record("Abcdefgh", "x.com", "Retail", "Peru");
        let nine = record("Abcdefghi", "x.com", "Retail", "Peru");
        assert_eq!(score(&eight), 0);
        assert_eq!(score(&nine), 1);
        assert_eq!(reason(&nine), "Brand Depth");
    }

    #[test]
    fn test_brand_depth_counts_characters_not_bytes() {
        // 8 characters, 10 bytes.
        let r = record("Zürich Ö", "x.com", "Retail", "Peru");
        assert_eq!(r.name.chars().count(), 8);
        assert_eq!(score(&r), 0);
    }

    #[test]
    fn test_score_is_sum_of_bonuses() {
        let websites = ["a.com", "a.io", "a.ai"];
        let industries = ["Fintech", "Retail"];
        let locations = ["UK", "Peru"];
        let names = ["Short", "Much Longer Name"];

        for website in websites {
            for industry in industries {
                for location in locations {
                    for name in names {
                        let r = record(name, website, industry, location);
                        let mut expected = 0;
                        if location == "UK" {
                            expected += 2;
                        }
                        if industry == "Fintech" {
                            expected += 2;
                        }
                        if website != "a.com" {
                            expected += 2;
                        }
                        if name.len() > 8 {
                            expected += 1;
                        }
                        assert_eq!(score(&r), expected, "{r:?}");
                        assert!(score(&r) <= MAX_SCORE);
                    }
                }
            }
        }
    }

    #[test]
    fn test_deterministic() {
        let r = record("Finlytics Ltd", "finlytics.io", "Fintech", "UK");
        assert_eq!(score(&r), score(&r.clone()));
        assert_eq!(reason(&r), reason(&r.clone()));
    }
}
