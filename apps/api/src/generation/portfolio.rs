//! Portfolio links and verification badges.

use rand::seq::SliceRandom;
use rand::{Rng, RngCore};

use crate::generation::catalog::{Catalog, RoleCategory};
use crate::models::candidate::Project;

const MIN_VERIFICATIONS: usize = 2;

/// 3–4 synthetic projects hosted on platforms typical for the role family.
pub fn build_projects(
    catalog: &Catalog,
    category: RoleCategory,
    name: &str,
    rng: &mut dyn RngCore,
) -> Vec<Project> {
    let (Some(types), Some(platforms)) = (
        catalog.project_types.get(&category),
        catalog.platforms.get(&category),
    ) else {
        return Vec::new();
    };
    let count = rng.gen_range(3..=4);
    let owner = slugify(name);
    let titles: Vec<&String> = types.choose_multiple(rng, count).collect();

    let mut projects = Vec::with_capacity(titles.len());
    for title in titles {
        let Some(platform) = platforms.choose(rng) else {
            break;
        };
        projects.push(Project {
            platform: platform.name.clone(),
            title: title.clone(),
            url: format!("https://{}/{}/{}", platform.host, owner, slugify(title)),
        });
    }
    projects
}

/// `floor(score / 35) + 1`, never below two.
pub fn verification_count(score: u8) -> usize {
    (score as usize / 35 + 1).max(MIN_VERIFICATIONS)
}

pub fn build_verifications(catalog: &Catalog, score: u8, rng: &mut dyn RngCore) -> Vec<String> {
    catalog
        .verifications
        .choose_multiple(rng, verification_count(score))
        .cloned()
        .collect()
}

/// Lowercase ASCII alphanumerics joined by single hyphens.
pub fn slugify(text: &str) -> String {
    let mut slug = String::with_capacity(text.len());
    for c in text.chars() {
        if c.is_ascii_alphanumeric() {
            slug.push(c.to_ascii_lowercase());
        } else if !slug.ends_with('-') {
            slug.push('-');
        }
    }
    slug.trim_matches('-').to_string()
}
