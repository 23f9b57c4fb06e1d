//! Skill selection: campaign skills first, scaled by match score, topped up
//! from the role skill bank and then the general bank.

use rand::seq::SliceRandom;
use rand::{Rng, RngCore};

use crate::generation::catalog::Catalog;
use crate::generation::match_score::band_fraction;
use crate::models::campaign::Campaign;

pub const MIN_SKILLS: usize = 3;
pub const MAX_SKILLS: usize = 5;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkillSelection {
    pub skills: Vec<String>,
    pub standout: Vec<String>,
}

/// How many campaign skills a candidate at `score` should carry.
///
/// Primary skills: at least half the list, rising to all of it at the top of
/// the band. Secondary skills: none at the floor, up to half at the top.
pub fn desired_counts(score: u8, primary_len: usize, secondary_len: usize) -> (usize, usize) {
    let frac = band_fraction(score);
    let primary = (primary_len as f64 * (0.5 + 0.5 * frac)).ceil() as usize;
    let secondary = (secondary_len as f64 * 0.5 * frac).round() as usize;
    (primary.min(primary_len), secondary.min(secondary_len))
}

pub fn select_skills(
    catalog: &Catalog,
    campaign: &Campaign,
    role: &str,
    score: u8,
    rng: &mut dyn RngCore,
) -> SkillSelection {
    let target = rng.gen_range(MIN_SKILLS..=MAX_SKILLS);

    let mut primary = campaign.primary_skill_list();
    let mut secondary = campaign.secondary_skill_list();
    primary.shuffle(rng);
    secondary.shuffle(rng);
    let (want_primary, want_secondary) = desired_counts(score, primary.len(), secondary.len());

    let mut skills: Vec<String> = Vec::with_capacity(target);
    fill(&mut skills, &primary, want_primary.min(target));
    let cap = (skills.len() + want_secondary).min(target);
    fill(&mut skills, &secondary, cap);

    if skills.len() < target {
        let mut bank = catalog.role_skills.get(role).cloned().unwrap_or_default();
        bank.shuffle(rng);
        fill(&mut skills, &bank, target);
    }
    if skills.len() < target {
        let mut general = catalog.general_skills.clone();
        general.shuffle(rng);
        fill(&mut skills, &general, target);
    }

    let standout_count = rng.gen_range(1..=2);
    let standout = skills
        .choose_multiple(rng, standout_count)
        .cloned()
        .collect();

    SkillSelection { skills, standout }
}

/// Appends from `source` until `skills` holds `cap` entries, skipping
/// case-insensitive duplicates.
fn fill(skills: &mut Vec<String>, source: &[String], cap: usize) {
    for skill in source {
        if skills.len() >= cap {
            break;
        }
        if !skills.iter().any(|s| s.eq_ignore_ascii_case(skill)) {
            skills.push(skill.clone());
        }
    }
}
