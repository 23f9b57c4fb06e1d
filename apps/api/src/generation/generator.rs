//! Candidate generation: orchestrates the full per-candidate pipeline.
//!
//! Flow per candidate: score → identity → role & domain → experience →
//! education → skills → context tags → summary → context fit → projects →
//! verifications → location/salary/availability.
//!
//! The batch is sorted by match score and handed to the storage manager under
//! the campaign id. Generation itself never fails.

use std::sync::Arc;
use std::time::Duration;

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, RngCore, SeedableRng};
use tracing::{debug, info, warn};

use crate::generation::catalog::{Catalog, RoleCategory};
use crate::generation::compensation::build_salary;
use crate::generation::match_score::score_for_position;
use crate::generation::narrative::{build_context_fit, build_summary, FitSignals};
use crate::generation::policy::{
    experience_years, normalize_role, pick_education, resolve_culture_tag, resolve_domain,
    resolve_industry_tag, resolve_stage_tag, Seniority,
};
use crate::generation::portfolio::{build_projects, build_verifications};
use crate::generation::random::random_uuid;
use crate::generation::skills::select_skills;
use crate::models::campaign::Campaign;
use crate::models::candidate::{Candidate, CandidateStatus, ContextTags};
use crate::storage::StorageManager;

pub const DEFAULT_BATCH_SIZE: usize = 5;

/// Chance a title carries its domain as a prefix ("Fintech Backend Engineer").
const DOMAIN_PREFIX_CHANCE: f64 = 0.3;

pub struct CandidateGenerator {
    catalog: Arc<Catalog>,
    /// Artificial latency applied before each batch.
    delay: Duration,
}

impl CandidateGenerator {
    pub fn new(catalog: Arc<Catalog>, delay: Duration) -> Self {
        Self { catalog, delay }
    }

    #[cfg(test)]
    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Generates, sorts and persists a batch for `campaign`.
    ///
    /// The store's result is logged, never surfaced: callers always get the
    /// freshly generated batch.
    pub async fn generate_for_campaign(
        &self,
        store: &StorageManager,
        campaign: &Campaign,
        count: usize,
    ) -> Vec<Candidate> {
        info!(
            "Generating {count} candidates for campaign '{}' (role: {:?})",
            campaign.id, campaign.role_title
        );

        if !self.delay.is_zero() {
            tokio::time::sleep(self.delay).await;
        }

        let mut rng = StdRng::from_entropy();
        let candidates = self.generate_batch(campaign, count, &mut rng);

        if !store
            .store_candidates_for_campaign(&campaign.id, &candidates)
            .await
        {
            warn!(
                "Candidates for campaign '{}' were generated but not persisted",
                campaign.id
            );
        }

        info!(
            "Generated {} candidates for campaign '{}' (top score: {:?})",
            candidates.len(),
            campaign.id,
            candidates.first().map(|c| c.match_score)
        );
        candidates
    }

    /// Builds `count` candidates and sorts them by match score, highest first.
    pub fn generate_batch(
        &self,
        campaign: &Campaign,
        count: usize,
        rng: &mut dyn RngCore,
    ) -> Vec<Candidate> {
        let mut batch: Vec<Candidate> = (0..count)
            .map(|i| self.generate_candidate(campaign, i, count, rng))
            .collect();
        batch.sort_by(|a, b| b.match_score.cmp(&a.match_score));
        batch
    }

    /// Builds the candidate at position `index` of a batch of `count`.
    pub fn generate_candidate(
        &self,
        campaign: &Campaign,
        index: usize,
        count: usize,
        rng: &mut dyn RngCore,
    ) -> Candidate {
        let catalog = self.catalog.as_ref();

        let match_score = score_for_position(index, count, rng);
        let name = self.pick_name(rng);

        let role = normalize_role(catalog, campaign, rng);
        let domain = resolve_domain(catalog, campaign, &role, rng);
        let title = build_title(campaign.role().unwrap_or(&role), &domain, rng);
        let category = RoleCategory::from_role(&role);

        let seniority = Seniority::from_title(campaign.role().unwrap_or(&role));
        let experience = experience_years(match_score, seniority, rng);
        let education = pick_education(experience, rng);

        let selection = select_skills(catalog, campaign, &role, match_score, rng);

        let stage = resolve_stage_tag(catalog, campaign, rng);
        let culture = resolve_culture_tag(catalog, campaign, rng);
        let industry_tag = resolve_industry_tag(catalog, campaign, rng);

        let summary = build_summary(catalog, category, &culture, &domain, rng);
        let context_fit = build_context_fit(
            catalog,
            campaign,
            &FitSignals {
                score: match_score,
                skills: &selection.skills,
                experience,
                domain: &domain,
                culture: &culture,
            },
            rng,
        );

        let projects = build_projects(catalog, category, &name, rng);
        let verifications = build_verifications(catalog, match_score, rng);

        let location = catalog.locations.choose(rng).cloned().unwrap_or_default();
        let availability = catalog.availability.choose(rng).cloned().unwrap_or_default();
        let industry = catalog.industries.choose(rng).cloned().unwrap_or_default();
        let salary = build_salary(catalog, campaign, experience, rng);

        debug!("Candidate {index}/{count}: {name} ({title}) score={match_score}");

        Candidate {
            id: random_uuid(rng),
            name,
            title,
            match_score,
            skills: selection.skills,
            standout_skills: selection.standout,
            experience,
            education,
            // The 3–5 retention window always covers all three categories.
            context_tags: ContextTags {
                stage: Some(stage.label),
                culture: Some(culture.label),
                industry: Some(industry_tag.label),
            },
            summary,
            context_fit,
            projects,
            verifications,
            location,
            salary,
            availability,
            industry,
            status: CandidateStatus::New,
        }
    }

    /// First and last name from the same region's slice of the shared tables.
    fn pick_name(&self, rng: &mut dyn RngCore) -> String {
        let catalog = self.catalog.as_ref();
        let Some(region) = catalog.regions.choose(rng) else {
            return String::new();
        };
        let firsts = catalog
            .first_names
            .get(region.first_names.clone())
            .unwrap_or_default();
        let lasts = catalog
            .last_names
            .get(region.last_names.clone())
            .unwrap_or_default();
        let first = firsts.choose(rng).map_or("", String::as_str);
        let last = lasts.choose(rng).map_or("", String::as_str);
        format!("{first} {last}")
    }
}

fn build_title(base: &str, domain: &str, rng: &mut dyn RngCore) -> String {
    let already_prefixed = base.to_lowercase().contains(&domain.to_lowercase());
    if !already_prefixed && rng.gen_bool(DOMAIN_PREFIX_CHANCE) {
        format!("{domain} {base}")
    } else {
        base.to_string()
    }
}
