use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A hiring request as authored by the campaign wizard.
///
/// Every descriptive field is optional; the generator falls back to
/// randomized defaults for anything missing. Fields the wizard sends that this
/// struct does not model are kept in `metadata` untouched.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Campaign {
    #[serde(default)]
    pub id: String,
    pub role_title: Option<String>,
    pub business_stage: Option<String>,
    /// Comma-separated industries.
    pub industry: Option<String>,
    #[serde(default)]
    pub culture_values: Vec<String>,
    /// Comma-separated.
    pub primary_skills: Option<String>,
    /// Comma-separated.
    pub secondary_skills: Option<String>,
    pub hiring_timeline: Option<String>,
    /// full-time | part-time | contract | freelance
    pub job_type: Option<String>,
    #[serde(flatten)]
    pub metadata: HashMap<String, Value>,
}

impl Campaign {
    pub fn primary_skill_list(&self) -> Vec<String> {
        parse_list(self.primary_skills.as_deref())
    }

    pub fn secondary_skill_list(&self) -> Vec<String> {
        parse_list(self.secondary_skills.as_deref())
    }

    pub fn industry_list(&self) -> Vec<String> {
        parse_list(self.industry.as_deref())
    }

    /// Role title, trimmed, or None when blank.
    pub fn role(&self) -> Option<&str> {
        non_blank(self.role_title.as_deref())
    }

    /// Business stage, trimmed, or None when blank.
    pub fn stage(&self) -> Option<&str> {
        non_blank(self.business_stage.as_deref())
    }
}

/// Splits a comma-separated field into trimmed, non-empty items.
///
/// This is the only place campaign list fields are parsed.
pub fn parse_list(raw: Option<&str>) -> Vec<String> {
    raw.map(|s| {
        s.split(',')
            .map(str::trim)
            .filter(|item| !item.is_empty())
            .map(str::to_string)
            .collect()
    })
    .unwrap_or_default()
}

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}
