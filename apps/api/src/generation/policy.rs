//! Fallback policies: each "match the campaign field, else randomize" decision
//! the generator makes, as a standalone function.
//!
//! None of these fail. A missing or unrecognized campaign field always degrades
//! to a uniform draw from the matching catalog table.

use rand::distributions::{Distribution, WeightedIndex};
use rand::seq::SliceRandom;
use rand::{Rng, RngCore};

use crate::generation::catalog::{Catalog, TagVocabulary};
use crate::models::campaign::Campaign;

pub const MIN_EXPERIENCE: f64 = 1.0;
pub const MAX_EXPERIENCE: f64 = 15.0;
const SENIOR_FLOOR: f64 = 5.0;
const JUNIOR_CAP: f64 = 4.0;

/// Whole-word markers; multi-word markers match consecutive words.
const SENIOR_MARKERS: &[&str] = &["senior", "sr", "lead", "principal", "staff", "head of"];
const JUNIOR_MARKERS: &[&str] = &["junior", "jr", "entry", "intern", "graduate", "associate"];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Seniority {
    Junior,
    Mid,
    Senior,
}

impl Seniority {
    /// "Staffing Coordinator" and "Internal Tools Engineer" are mid-level:
    /// markers never match inside a longer word.
    pub fn from_title(title: &str) -> Self {
        let title = title.to_lowercase();
        let words: Vec<&str> = title
            .split(|c: char| !c.is_alphanumeric())
            .filter(|w| !w.is_empty())
            .collect();
        let has_any = |markers: &[&str]| markers.iter().any(|m| contains_phrase(&words, m));

        if has_any(SENIOR_MARKERS) {
            Seniority::Senior
        } else if has_any(JUNIOR_MARKERS) {
            Seniority::Junior
        } else {
            Seniority::Mid
        }
    }

    /// Inclusive experience window in years.
    pub fn experience_range(self) -> (f64, f64) {
        match self {
            Seniority::Senior => (SENIOR_FLOOR, MAX_EXPERIENCE),
            Seniority::Junior => (MIN_EXPERIENCE, JUNIOR_CAP),
            Seniority::Mid => (MIN_EXPERIENCE, MAX_EXPERIENCE),
        }
    }
}

fn contains_phrase(words: &[&str], phrase: &str) -> bool {
    let phrase: Vec<&str> = phrase.split(' ').collect();
    words.windows(phrase.len()).any(|w| w == phrase.as_slice())
}

/// Outcome of a tag policy. `matched` is false when the label came from the
/// uniform fallback rather than a campaign keyword.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedTag {
    pub label: String,
    pub matched: bool,
}

/// Canonical role for the campaign's role title, or a uniform pick when the
/// title is absent. An unrecognized title is kept as written.
pub fn normalize_role(catalog: &Catalog, campaign: &Campaign, rng: &mut dyn RngCore) -> String {
    let Some(title) = campaign.role() else {
        return catalog.roles.choose(rng).cloned().unwrap_or_default();
    };
    let lower = title.to_lowercase();
    catalog
        .roles
        .iter()
        .find(|role| {
            let role = role.to_lowercase();
            lower.contains(&role) || role.contains(&lower)
        })
        .cloned()
        .unwrap_or_else(|| title.to_string())
}

/// Campaign industry when declared, else the role's domain table, else the
/// default domain list.
pub fn resolve_domain(
    catalog: &Catalog,
    campaign: &Campaign,
    role: &str,
    rng: &mut dyn RngCore,
) -> String {
    let industries = campaign.industry_list();
    let pool = if !industries.is_empty() {
        &industries
    } else {
        match catalog.role_domains.get(role) {
            Some(domains) if !domains.is_empty() => domains,
            _ => &catalog.default_domains,
        }
    };
    pool.choose(rng).cloned().unwrap_or_default()
}

/// 60% driven by where the score sits in its band, 40% pure noise, snapped to
/// the nearest half year.
pub fn experience_years(score: u8, seniority: Seniority, rng: &mut dyn RngCore) -> f32 {
    let (min, max) = seniority.experience_range();
    let score_frac = crate::generation::match_score::band_fraction(score);
    let blend = 0.6 * score_frac + 0.4 * rng.gen::<f64>();
    let raw = min + blend * (max - min);
    let snapped = ((raw * 2.0).round() / 2.0).clamp(min, max);
    snapped as f32
}

const EDUCATION_LEVELS: [&str; 5] = [
    "PhD",
    "Master's Degree",
    "Bachelor's Degree",
    "Bootcamp Graduate",
    "Self-taught",
];

/// Weights line up with `EDUCATION_LEVELS`.
fn education_weights(experience: f32) -> [f64; 5] {
    if experience > 8.0 {
        [0.15, 0.35, 0.40, 0.05, 0.05]
    } else if experience < 3.0 {
        [0.0, 0.10, 0.40, 0.30, 0.20]
    } else {
        [0.05, 0.25, 0.50, 0.10, 0.10]
    }
}

pub fn pick_education(experience: f32, rng: &mut dyn RngCore) -> String {
    let level = match WeightedIndex::new(education_weights(experience)) {
        Ok(dist) => EDUCATION_LEVELS[dist.sample(rng)],
        Err(_) => EDUCATION_LEVELS[2],
    };
    level.to_string()
}

pub fn resolve_stage_tag(
    catalog: &Catalog,
    campaign: &Campaign,
    rng: &mut dyn RngCore,
) -> ResolvedTag {
    resolve_tag(&catalog.stage_tags, campaign.stage(), rng)
}

pub fn resolve_culture_tag(
    catalog: &Catalog,
    campaign: &Campaign,
    rng: &mut dyn RngCore,
) -> ResolvedTag {
    let joined = campaign.culture_values.join(", ");
    let text = Some(joined.trim()).filter(|t| !t.is_empty());
    resolve_tag(&catalog.culture_tags, text, rng)
}

pub fn resolve_industry_tag(
    catalog: &Catalog,
    campaign: &Campaign,
    rng: &mut dyn RngCore,
) -> ResolvedTag {
    // Padded so whole-word keywords such as " ai" can match at the edges.
    let padded = campaign
        .industry
        .as_deref()
        .map(str::trim)
        .filter(|i| !i.is_empty())
        .map(|i| format!(" {i} "));
    resolve_tag(&catalog.industry_tags, padded.as_deref(), rng)
}

fn resolve_tag(
    vocabulary: &TagVocabulary,
    text: Option<&str>,
    rng: &mut dyn RngCore,
) -> ResolvedTag {
    if let Some(rule) = text.and_then(|t| vocabulary.match_text(t)) {
        if let Some(label) = rule.labels.choose(rng) {
            return ResolvedTag {
                label: label.clone(),
                matched: true,
            };
        }
    }
    let labels = vocabulary.all_labels();
    ResolvedTag {
        label: labels.choose(rng).map(|l| l.to_string()).unwrap_or_default(),
        matched: false,
    }
}

/// True when the role title, business stage or industry mentions a startup keyword.
pub fn is_startup_focused(catalog: &Catalog, campaign: &Campaign) -> bool {
    [
        campaign.role(),
        campaign.stage(),
        campaign.industry.as_deref(),
    ]
    .into_iter()
    .flatten()
    .map(str::to_lowercase)
    .any(|text| {
        catalog
            .startup_keywords
            .iter()
            .any(|k| text.contains(&k.to_lowercase()))
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generation::random::{highest, lowest};
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn campaign() -> Campaign {
        Campaign {
            id: "c1".to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn test_seniority_from_title() {
        assert_eq!(Seniority::from_title("Senior Backend Engineer"), Seniority::Senior);
        assert_eq!(Seniority::from_title("Lead Designer"), Seniority::Senior);
        assert_eq!(Seniority::from_title("Principal PM"), Seniority::Senior);
        assert_eq!(Seniority::from_title("Junior Frontend Engineer"), Seniority::Junior);
        assert_eq!(Seniority::from_title("Backend Engineer"), Seniority::Mid);
        assert_eq!(Seniority::from_title("Sr. Data Scientist"), Seniority::Senior);
        assert_eq!(Seniority::from_title("Head of Growth"), Seniority::Senior);
        assert_eq!(Seniority::from_title("Entry-level Analyst"), Seniority::Junior);
    }

    #[test]
    fn test_seniority_markers_match_whole_words() {
        assert_eq!(Seniority::from_title("Internal Tools Engineer"), Seniority::Mid);
        assert_eq!(Seniority::from_title("International Sales Manager"), Seniority::Mid);
        assert_eq!(Seniority::from_title("Staffing Coordinator"), Seniority::Mid);
        assert_eq!(Seniority::from_title("Leadership Coach"), Seniority::Mid);
        assert_eq!(Seniority::from_title("Forehead of Marketing"), Seniority::Mid);
        assert_eq!(Seniority::from_title("Staff Engineer"), Seniority::Senior);
        assert_eq!(Seniority::from_title("Design Intern"), Seniority::Junior);
    }

    #[test]
    fn test_misleading_titles_keep_full_experience_range() {
        for title in ["Internal Tools Engineer", "International Sales Manager", "Staffing Coordinator"] {
            let top = experience_years(95, Seniority::from_title(title), &mut highest());
            let bottom = experience_years(78, Seniority::from_title(title), &mut lowest());
            assert!(top > 4.0, "{title}: {top}");
            assert!(bottom < 5.0, "{title}: {bottom}");
        }
    }

    #[test]
    fn test_normalize_role_by_substring() {
        let catalog = Catalog::builtin();
        let mut rng = lowest();
        let c = Campaign {
            role_title: Some("Senior Backend Engineer".to_string()),
            ..campaign()
        };
        assert_eq!(normalize_role(&catalog, &c, &mut rng), "Backend Engineer");
    }

    #[test]
    fn test_normalize_role_keeps_unknown_title() {
        let catalog = Catalog::builtin();
        let mut rng = lowest();
        let c = Campaign {
            role_title: Some("Chief of Staff".to_string()),
            ..campaign()
        };
        assert_eq!(normalize_role(&catalog, &c, &mut rng), "Chief of Staff");
    }

    #[test]
    fn test_normalize_role_random_when_absent() {
        let catalog = Catalog::builtin();
        let mut rng = lowest();
        assert_eq!(normalize_role(&catalog, &campaign(), &mut rng), catalog.roles[0]);
    }

    #[test]
    fn test_domain_prefers_campaign_industry() {
        let catalog = Catalog::builtin();
        let c = Campaign {
            industry: Some("Fintech, Insurtech".to_string()),
            ..campaign()
        };
        assert_eq!(resolve_domain(&catalog, &c, "Backend Engineer", &mut lowest()), "Fintech");
        let mut rng = StdRng::seed_from_u64(12);
        for _ in 0..20 {
            let domain = resolve_domain(&catalog, &c, "Backend Engineer", &mut rng);
            assert!(domain == "Fintech" || domain == "Insurtech", "got {domain}");
        }
    }

    #[test]
    fn test_domain_falls_back_to_role_table_when_industry_blank() {
        let catalog = Catalog::builtin();
        let mut rng = lowest();
        let c = Campaign {
            industry: Some(" , ".to_string()),
            ..campaign()
        };
        let domain = resolve_domain(&catalog, &c, "Backend Engineer", &mut rng);
        assert_eq!(domain, catalog.role_domains["Backend Engineer"][0]);
    }

    #[test]
    fn test_domain_for_unknown_role_uses_defaults() {
        let catalog = Catalog::builtin();
        let mut rng = lowest();
        let domain = resolve_domain(&catalog, &campaign(), "Chief of Staff", &mut rng);
        assert_eq!(domain, catalog.default_domains[0]);
    }

    #[test]
    fn test_senior_experience_floor() {
        let mut rng = lowest();
        let years = experience_years(78, Seniority::Senior, &mut rng);
        assert!(years >= 5.0, "got {years}");
    }

    #[test]
    fn test_junior_experience_cap() {
        let years = experience_years(95, Seniority::Junior, &mut highest());
        assert!(years <= 4.0, "got {years}");
    }

    #[test]
    fn test_experience_snaps_to_half_years() {
        let mut rng = StdRng::seed_from_u64(137);
        for score in [78, 83, 90, 95] {
            let years = experience_years(score, Seniority::Mid, &mut rng);
            assert_eq!((years * 2.0).fract(), 0.0, "got {years}");
            assert!((1.0..=15.0).contains(&years));
        }
    }

    #[test]
    fn test_experience_tracks_score() {
        assert!(
            experience_years(95, Seniority::Mid, &mut lowest())
                > experience_years(78, Seniority::Mid, &mut lowest())
        );
    }

    #[test]
    fn test_education_never_phd_for_early_career() {
        let mut rng = lowest();
        assert_ne!(pick_education(1.5, &mut rng), "PhD");
    }

    #[test]
    fn test_education_high_roll_is_self_taught() {
        assert_eq!(pick_education(5.0, &mut highest()), "Self-taught");
    }

    #[test]
    fn test_education_always_a_known_level() {
        let mut rng = StdRng::seed_from_u64(31);
        for years in [1.0, 4.5, 12.0] {
            for _ in 0..50 {
                let level = pick_education(years, &mut rng);
                assert!(EDUCATION_LEVELS.contains(&level.as_str()), "got {level}");
            }
        }
    }

    #[test]
    fn test_stage_tag_matches_seed() {
        let catalog = Catalog::builtin();
        let c = Campaign {
            business_stage: Some("Seed".to_string()),
            ..campaign()
        };
        let first = resolve_stage_tag(&catalog, &c, &mut lowest());
        assert!(first.matched);
        assert_eq!(first.label, "Seed-stage Fit");

        let mut rng = StdRng::seed_from_u64(2);
        let labels: Vec<String> = (0..50)
            .map(|_| resolve_stage_tag(&catalog, &c, &mut rng).label)
            .collect();
        assert!(labels.iter().any(|l| l == "Post-Launch Optimizer"));
        assert!(labels
            .iter()
            .all(|l| l == "Seed-stage Fit" || l == "Post-Launch Optimizer"));
    }

    #[test]
    fn test_stage_tag_falls_back_to_vocabulary() {
        let catalog = Catalog::builtin();
        let c = Campaign {
            business_stage: Some("Bootstrapped".to_string()),
            ..campaign()
        };
        let mut rng = StdRng::seed_from_u64(40);
        let tag = resolve_stage_tag(&catalog, &c, &mut rng);
        assert!(!tag.matched);
        assert!(catalog.stage_tags.all_labels().contains(&tag.label.as_str()));
    }

    #[test]
    fn test_culture_tag_matches_any_value() {
        let catalog = Catalog::builtin();
        let c = Campaign {
            culture_values: vec!["Transparency".to_string(), "Remote-first".to_string()],
            ..campaign()
        };
        let mut rng = lowest();
        let tag = resolve_culture_tag(&catalog, &c, &mut rng);
        assert!(tag.matched);
        assert_eq!(tag.label, "Remote-first Collaborator");
    }

    #[test]
    fn test_culture_tag_without_values_is_random() {
        let catalog = Catalog::builtin();
        let mut rng = lowest();
        let tag = resolve_culture_tag(&catalog, &campaign(), &mut rng);
        assert!(!tag.matched);
        assert_eq!(tag.label, catalog.culture_tags.all_labels()[0]);
    }

    #[test]
    fn test_industry_tag_matches_standalone_ai() {
        let catalog = Catalog::builtin();
        let c = Campaign {
            industry: Some("AI".to_string()),
            ..campaign()
        };
        let mut rng = lowest();
        let tag = resolve_industry_tag(&catalog, &c, &mut rng);
        assert!(tag.matched);
        assert_eq!(tag.label, "AI-native Builder");
    }

    #[test]
    fn test_industry_tag_ignores_ai_inside_words() {
        let catalog = Catalog::builtin();
        let c = Campaign {
            industry: Some("Supply chain".to_string()),
            ..campaign()
        };
        let mut rng = lowest();
        assert!(!resolve_industry_tag(&catalog, &c, &mut rng).matched);
    }

    #[test]
    fn test_startup_focus_detection() {
        let catalog = Catalog::builtin();
        let startup = Campaign {
            business_stage: Some("Series A".to_string()),
            ..campaign()
        };
        let founding = Campaign {
            role_title: Some("Founding Engineer".to_string()),
            ..campaign()
        };
        let enterprise = Campaign {
            role_title: Some("Backend Engineer".to_string()),
            industry: Some("Banking".to_string()),
            ..campaign()
        };
        assert!(is_startup_focused(&catalog, &startup));
        assert!(is_startup_focused(&catalog, &founding));
        assert!(!is_startup_focused(&catalog, &enterprise));
    }
}
