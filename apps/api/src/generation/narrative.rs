//! Narrative text: the templated summary and the context-fit blurb.

use rand::seq::SliceRandom;
use rand::{Rng, RngCore};

use crate::generation::catalog::{Catalog, RoleCategory};
use crate::generation::policy::{is_startup_focused, ResolvedTag};
use crate::models::campaign::Campaign;

const FALLBACK_ACTION: &str = "Delivered";
const BONUS_CHANCE: f64 = 0.5;
const CULTURE_TRAIT_CHANCE: f64 = 0.5;
/// Scores above this always get a startup accomplishment line.
const STARTUP_SCORE_THRESHOLD: u8 = 85;

/// [Action] + [Product] + [Outcome] + [Trait] + jargon.
pub fn build_summary(
    catalog: &Catalog,
    category: RoleCategory,
    culture: &ResolvedTag,
    domain: &str,
    rng: &mut dyn RngCore,
) -> String {
    let action = match catalog.action_phrases.get(&category) {
        Some(phrases) => phrases.choose(rng).map_or(FALLBACK_ACTION, String::as_str),
        None => FALLBACK_ACTION,
    };
    let product = pick(&catalog.products, rng);
    let outcome = pick(&catalog.outcomes, rng);
    let trait_clause = if rng.gen_bool(CULTURE_TRAIT_CHANCE) {
        pick(&catalog.culture_traits, rng).replace("{culture}", &culture.label)
    } else {
        pick(&catalog.domain_traits, rng).replace("{domain}", domain)
    };
    let jargon = pick(&catalog.jargon, rng);

    format!("{action} {product} {outcome}, {trait_clause} {jargon}.")
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchReason {
    Skill,
    Experience,
    Industry,
    Culture,
}

/// What the candidate brings, as seen by the context-fit writer.
pub struct FitSignals<'a> {
    pub score: u8,
    pub skills: &'a [String],
    pub experience: f32,
    pub domain: &'a str,
    pub culture: &'a ResolvedTag,
}

/// Weighs each reason in `[0, 1]` and returns them strongest first. Ties keep
/// declaration order.
pub fn rank_match_reasons(campaign: &Campaign, signals: &FitSignals<'_>) -> Vec<(MatchReason, f64)> {
    let wanted: Vec<String> = campaign
        .primary_skill_list()
        .into_iter()
        .chain(campaign.secondary_skill_list())
        .collect();
    let skill_weight = if wanted.is_empty() {
        0.3
    } else {
        let overlap = signals
            .skills
            .iter()
            .filter(|s| wanted.iter().any(|w| w.eq_ignore_ascii_case(s)))
            .count();
        overlap as f64 / wanted.len() as f64
    };

    let industry_weight = if campaign
        .industry_list()
        .iter()
        .any(|i| i.eq_ignore_ascii_case(signals.domain))
    {
        1.0
    } else {
        0.3
    };

    let culture_weight = if signals.culture.matched { 0.8 } else { 0.2 };

    let mut reasons = vec![
        (MatchReason::Skill, skill_weight),
        (
            MatchReason::Experience,
            (signals.experience as f64 / crate::generation::policy::MAX_EXPERIENCE).min(1.0),
        ),
        (MatchReason::Industry, industry_weight),
        (MatchReason::Culture, culture_weight),
    ];
    reasons.sort_by(|a, b| b.1.total_cmp(&a.1));
    reasons
}

pub fn build_context_fit(
    catalog: &Catalog,
    campaign: &Campaign,
    signals: &FitSignals<'_>,
    rng: &mut dyn RngCore,
) -> String {
    if signals.score > STARTUP_SCORE_THRESHOLD || is_startup_focused(catalog, campaign) {
        return pick(&catalog.startup_accomplishments, rng).to_string();
    }

    let reasons = rank_match_reasons(campaign, signals);
    let phrases: Vec<String> = reasons
        .iter()
        .take(2)
        .map(|(reason, _)| reason_phrase(*reason, signals))
        .collect();
    let mut parts = vec![format!("Stands out for {}.", phrases.join(" and "))];

    if rng.gen_bool(BONUS_CHANCE) {
        let from: u32 = rng.gen_range(2..=5);
        let to = from + rng.gen_range(5..=20);
        parts.push(
            pick(&catalog.bonus_claims, rng)
                .replace("{from}", &from.to_string())
                .replace("{to}", &to.to_string()),
        );
    }

    if let Some(stage) = campaign.stage() {
        parts.push(format!("Comfortable operating at the {stage} stage."));
    }

    parts.join(" ")
}

fn reason_phrase(reason: MatchReason, signals: &FitSignals<'_>) -> String {
    match reason {
        MatchReason::Skill => {
            let top: Vec<&str> = signals.skills.iter().take(2).map(String::as_str).collect();
            format!("hands-on {} experience", top.join(" and "))
        }
        MatchReason::Experience => {
            format!("{} years in similar roles", format_years(signals.experience))
        }
        MatchReason::Industry => format!("a background in {}", signals.domain),
        MatchReason::Culture => format!("a strong {} streak", signals.culture.label),
    }
}

/// Catalog tables are validated non-empty at startup; an empty one yields "".
fn pick<'a>(table: &'a [String], rng: &mut dyn RngCore) -> &'a str {
    table.choose(rng).map_or("", String::as_str)
}

/// `7.0` → `"7"`, `7.5` → `"7.5"`.
pub fn format_years(years: f32) -> String {
    if years.fract() == 0.0 {
        format!("{}", years as u32)
    } else {
        format!("{years:.1}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generation::random::{highest, lowest};
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn tag(label: &str, matched: bool) -> ResolvedTag {
        ResolvedTag {
            label: label.to_string(),
            matched,
        }
    }

    fn skills() -> Vec<String> {
        vec!["Node.js".to_string(), "PostgreSQL".to_string(), "Redis".to_string()]
    }

    #[test]
    fn test_summary_composition() {
        let catalog = Catalog::builtin();
        let culture = tag("Team Player", true);
        let summary =
            build_summary(&catalog, RoleCategory::Engineering, &culture, "Fintech", &mut lowest());
        assert_eq!(
            summary,
            "Architected and shipped a B2B analytics platform that grew monthly active users 3x, \
             bringing a Team Player mindset to every team during MVP phase."
        );
    }

    #[test]
    fn test_summary_uses_both_trait_kinds() {
        let catalog = Catalog::builtin();
        let culture = tag("Team Player", true);
        let mut rng = StdRng::seed_from_u64(6);
        let summaries: Vec<String> = (0..40)
            .map(|_| build_summary(&catalog, RoleCategory::Engineering, &culture, "Fintech", &mut rng))
            .collect();
        assert!(summaries.iter().any(|s| s.contains("Team Player")));
        assert!(summaries.iter().any(|s| s.contains("Fintech")));
        assert!(summaries.iter().all(|s| !s.contains('{') && s.ends_with('.')));
    }

    #[test]
    fn test_summary_culture_trait_branch() {
        let catalog = Catalog::builtin();
        let culture = tag("Async Communicator", true);
        let summary = build_summary(&catalog, RoleCategory::Design, &culture, "Health", &mut lowest());
        assert!(summary.starts_with("Designed end-to-end"));
        assert!(summary.contains("Async Communicator"));
        assert!(summary.ends_with('.'));
    }

    #[test]
    fn test_high_score_gets_startup_line() {
        let catalog = Catalog::builtin();
        let campaign = Campaign::default();
        let s = skills();
        let culture = tag("Team Player", false);
        let signals = FitSignals {
            score: 90,
            skills: &s,
            experience: 6.0,
            domain: "SaaS",
            culture: &culture,
        };
        let mut rng = lowest();
        let fit = build_context_fit(&catalog, &campaign, &signals, &mut rng);
        assert_eq!(fit, catalog.startup_accomplishments[0]);
    }

    #[test]
    fn test_startup_campaign_gets_startup_line_at_any_score() {
        let catalog = Catalog::builtin();
        let campaign = Campaign {
            business_stage: Some("Seed".to_string()),
            ..Default::default()
        };
        let s = skills();
        let culture = tag("Team Player", false);
        let signals = FitSignals {
            score: 78,
            skills: &s,
            experience: 2.0,
            domain: "SaaS",
            culture: &culture,
        };
        let mut rng = lowest();
        let fit = build_context_fit(&catalog, &campaign, &signals, &mut rng);
        assert!(catalog.startup_accomplishments.contains(&fit));
    }

    #[test]
    fn test_reasons_ranked_by_weight() {
        let campaign = Campaign {
            primary_skills: Some("Node.js,PostgreSQL".to_string()),
            industry: Some("Fintech".to_string()),
            ..Default::default()
        };
        let s = skills();
        let culture = tag("Team Player", false);
        let signals = FitSignals {
            score: 80,
            skills: &s,
            experience: 1.5,
            domain: "Fintech",
            culture: &culture,
        };
        let ranked = rank_match_reasons(&campaign, &signals);
        assert_eq!(ranked[0].0, MatchReason::Skill);
        assert_eq!(ranked[1].0, MatchReason::Industry);
        assert_eq!(ranked[3].0, MatchReason::Experience);
    }

    #[test]
    fn test_reasons_sentence_with_bonus_and_stage() {
        let catalog = Catalog::builtin();
        let campaign = Campaign {
            primary_skills: Some("Node.js".to_string()),
            industry: Some("Banking".to_string()),
            business_stage: Some("Bootstrapped".to_string()),
            ..Default::default()
        };
        let s = skills();
        let culture = tag("High Ownership", true);
        let signals = FitSignals {
            score: 80,
            skills: &s,
            experience: 4.5,
            domain: "Banking",
            culture: &culture,
        };
        // lowest draws take the bonus, then from=2, to=2+5, claim[0]
        let mut rng = lowest();
        let fit = build_context_fit(&catalog, &campaign, &signals, &mut rng);
        assert_eq!(
            fit,
            "Stands out for hands-on Node.js and PostgreSQL experience and a background in Banking. \
             Grew the team from 2 to 7 people. \
             Comfortable operating at the Bootstrapped stage."
        );
    }

    #[test]
    fn test_reasons_sentence_without_bonus() {
        let catalog = Catalog::builtin();
        let campaign = Campaign::default();
        let s = skills();
        let culture = tag("Growth Mindset", true);
        let signals = FitSignals {
            score: 79,
            skills: &s,
            experience: 7.5,
            domain: "Edtech",
            culture: &culture,
        };
        // the only draw here is the bonus coin
        let fit = build_context_fit(&catalog, &campaign, &signals, &mut highest());
        assert_eq!(
            fit,
            "Stands out for a strong Growth Mindset streak and 7.5 years in similar roles."
        );
    }

    #[test]
    fn test_format_years() {
        assert_eq!(format_years(7.0), "7");
        assert_eq!(format_years(7.5), "7.5");
    }
}
