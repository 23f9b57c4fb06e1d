//! Catalog: the immutable lookup tables the generator composes candidates from.
//!
//! Built in by default (`Catalog::builtin`), optionally replaced by a JSON file.
//! Validated once at startup so every draw during generation is over a
//! non-empty table.

use std::collections::BTreeMap;
use std::ops::Range;
use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Coarse role family. Drives narrative phrasing and portfolio platforms.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RoleCategory {
    Engineering,
    Design,
    Marketing,
    Product,
    Operations,
}

impl RoleCategory {
    pub const ALL: [RoleCategory; 5] = [
        RoleCategory::Engineering,
        RoleCategory::Design,
        RoleCategory::Marketing,
        RoleCategory::Product,
        RoleCategory::Operations,
    ];

    /// Substring match on the role string. Design is checked before product so
    /// "Product Designer" reads as design.
    pub fn from_role(role: &str) -> Self {
        let role = role.to_lowercase();
        let has = |needles: &[&str]| needles.iter().any(|n| role.contains(n));

        if has(&["engineer", "developer", "scientist", "devops", "architect"]) {
            RoleCategory::Engineering
        } else if has(&["design", "ux", "ui "]) {
            RoleCategory::Design
        } else if has(&["market", "growth", "content", "seo", "brand"]) {
            RoleCategory::Marketing
        } else if has(&["product"]) {
            RoleCategory::Product
        } else {
            RoleCategory::Operations
        }
    }
}

/// A cultural grouping of names: contiguous index ranges into the shared tables.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NameRegion {
    pub name: String,
    pub first_names: Range<usize>,
    pub last_names: Range<usize>,
}

/// Keyword-triggered pair of near-synonym labels.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TagRule {
    pub keywords: Vec<String>,
    pub labels: Vec<String>,
}

/// Controlled vocabulary for one context-tag category.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TagVocabulary {
    pub rules: Vec<TagRule>,
}

impl TagVocabulary {
    /// Every label across all rules, for the uniform fallback draw.
    pub fn all_labels(&self) -> Vec<&str> {
        self.rules
            .iter()
            .flat_map(|r| r.labels.iter().map(String::as_str))
            .collect()
    }

    /// First rule with a keyword contained in `text` (case-insensitive).
    pub fn match_text(&self, text: &str) -> Option<&TagRule> {
        let text = text.to_lowercase();
        self.rules
            .iter()
            .find(|r| r.keywords.iter().any(|k| text.contains(&k.to_lowercase())))
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Platform {
    pub name: String,
    pub host: String,
}

/// Compensation band for a job type. Hourly bands are in dollars per hour.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SalaryBand {
    pub job_type: String,
    pub min: f64,
    pub max: f64,
    pub hourly: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Catalog {
    pub first_names: Vec<String>,
    pub last_names: Vec<String>,
    pub regions: Vec<NameRegion>,

    pub roles: Vec<String>,
    pub role_domains: BTreeMap<String, Vec<String>>,
    pub default_domains: Vec<String>,
    pub role_skills: BTreeMap<String, Vec<String>>,
    pub general_skills: Vec<String>,

    pub stage_tags: TagVocabulary,
    pub culture_tags: TagVocabulary,
    pub industry_tags: TagVocabulary,

    pub action_phrases: BTreeMap<RoleCategory, Vec<String>>,
    pub products: Vec<String>,
    pub outcomes: Vec<String>,
    /// Templates; `{culture}` and `{domain}` are substituted.
    pub culture_traits: Vec<String>,
    pub domain_traits: Vec<String>,
    pub jargon: Vec<String>,

    pub startup_accomplishments: Vec<String>,
    /// Templates; `{from}` and `{to}` are substituted with random head counts.
    pub bonus_claims: Vec<String>,
    pub startup_keywords: Vec<String>,

    pub platforms: BTreeMap<RoleCategory, Vec<Platform>>,
    pub project_types: BTreeMap<RoleCategory, Vec<String>>,
    pub verifications: Vec<String>,

    pub locations: Vec<String>,
    pub availability: Vec<String>,
    pub industries: Vec<String>,
    pub salary_bands: Vec<SalaryBand>,
}

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("catalog table '{0}' is empty")]
    EmptyTable(String),

    #[error("region '{region}' has an empty or out-of-bounds {table} range")]
    BadRegion { region: String, table: &'static str },

    #[error("catalog needs at least {needed} entries in '{table}', found {found}")]
    TooSmall {
        table: &'static str,
        needed: usize,
        found: usize,
    },

    #[error("failed to read catalog: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse catalog: {0}")]
    Parse(#[from] serde_json::Error),
}

impl Catalog {
    /// Loads and validates a JSON catalog.
    pub fn from_json_file(path: &Path) -> Result<Self, CatalogError> {
        let raw = std::fs::read_to_string(path)?;
        let catalog: Catalog = serde_json::from_str(&raw)?;
        catalog.validate()?;
        Ok(catalog)
    }

    pub fn salary_band(&self, job_type: &str) -> Option<&SalaryBand> {
        self.salary_bands
            .iter()
            .find(|b| b.job_type.eq_ignore_ascii_case(job_type))
    }

    #[cfg(test)]
    pub fn region_of(&self, first: &str, last: &str) -> Option<&NameRegion> {
        self.regions.iter().find(|r| {
            self.first_names[r.first_names.clone()]
                .iter()
                .any(|n| n == first)
                && self.last_names[r.last_names.clone()]
                    .iter()
                    .any(|n| n == last)
        })
    }

    pub fn validate(&self) -> Result<(), CatalogError> {
        let flat = [
            ("first_names", self.first_names.len()),
            ("last_names", self.last_names.len()),
            ("regions", self.regions.len()),
            ("roles", self.roles.len()),
            ("default_domains", self.default_domains.len()),
            ("stage_tags", self.stage_tags.all_labels().len()),
            ("culture_tags", self.culture_tags.all_labels().len()),
            ("industry_tags", self.industry_tags.all_labels().len()),
            ("products", self.products.len()),
            ("outcomes", self.outcomes.len()),
            ("culture_traits", self.culture_traits.len()),
            ("domain_traits", self.domain_traits.len()),
            ("jargon", self.jargon.len()),
            ("startup_accomplishments", self.startup_accomplishments.len()),
            ("bonus_claims", self.bonus_claims.len()),
            ("locations", self.locations.len()),
            ("availability", self.availability.len()),
            ("industries", self.industries.len()),
            ("salary_bands", self.salary_bands.len()),
            ("startup_keywords", self.startup_keywords.len()),
        ];
        for (table, len) in flat {
            if len == 0 {
                return Err(CatalogError::EmptyTable(table.to_string()));
            }
        }

        for rule in self
            .stage_tags
            .rules
            .iter()
            .chain(&self.culture_tags.rules)
            .chain(&self.industry_tags.rules)
        {
            if rule.labels.is_empty() {
                return Err(CatalogError::EmptyTable(format!(
                    "tag labels for {:?}",
                    rule.keywords
                )));
            }
        }

        // Skill top-up must always be able to reach five distinct skills.
        if self.general_skills.len() < 5 {
            return Err(CatalogError::TooSmall {
                table: "general_skills",
                needed: 5,
                found: self.general_skills.len(),
            });
        }
        if self.verifications.len() < 2 {
            return Err(CatalogError::TooSmall {
                table: "verifications",
                needed: 2,
                found: self.verifications.len(),
            });
        }

        for region in &self.regions {
            if !range_ok(&region.first_names, self.first_names.len()) {
                return Err(CatalogError::BadRegion {
                    region: region.name.clone(),
                    table: "first_names",
                });
            }
            if !range_ok(&region.last_names, self.last_names.len()) {
                return Err(CatalogError::BadRegion {
                    region: region.name.clone(),
                    table: "last_names",
                });
            }
        }

        for category in RoleCategory::ALL {
            let tables = [
                ("action_phrases", self.action_phrases.get(&category).map(Vec::len)),
                ("platforms", self.platforms.get(&category).map(Vec::len)),
                ("project_types", self.project_types.get(&category).map(Vec::len)),
            ];
            for (table, len) in tables {
                if len.unwrap_or(0) == 0 {
                    return Err(CatalogError::EmptyTable(format!("{table}.{category:?}")));
                }
            }
        }

        // Four projects need four distinct project types per category.
        if let Some(types) = self.project_types.values().find(|t| t.len() < 4) {
            return Err(CatalogError::TooSmall {
                table: "project_types",
                needed: 4,
                found: types.len(),
            });
        }

        Ok(())
    }
}

fn range_ok(range: &Range<usize>, len: usize) -> bool {
    range.start < range.end && range.end <= len
}
