use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Pipeline position of a candidate. Generated candidates always start at `New`;
/// every later transition is driven by a recruiter action.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CandidateStatus {
    #[default]
    New,
    Contacted,
    InAssessment,
    Interviewed,
    Hired,
    Rejected,
}

/// Contextual-fit labels, at most one per category.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContextTags {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stage: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub culture: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub industry: Option<String>,
}

#[cfg(test)]
impl ContextTags {
    pub fn len(&self) -> usize {
        [&self.stage, &self.culture, &self.industry]
            .iter()
            .filter(|t| t.is_some())
            .count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// A synthetic portfolio link.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Project {
    pub platform: String,
    pub title: String,
    pub url: String,
}

/// A generated candidate profile.
///
/// Everything except `status` is fixed at generation time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Candidate {
    pub id: Uuid,
    pub name: String,
    pub title: String,
    pub match_score: u8,
    pub skills: Vec<String>,
    pub standout_skills: Vec<String>,
    /// Years, half-year resolution.
    pub experience: f32,
    pub education: String,
    pub context_tags: ContextTags,
    pub summary: String,
    pub context_fit: String,
    pub projects: Vec<Project>,
    pub verifications: Vec<String>,
    pub location: String,
    pub salary: String,
    pub availability: String,
    pub industry: String,
    #[serde(default)]
    pub status: CandidateStatus,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_serializes_snake_case() {
        let json = serde_json::to_string(&CandidateStatus::InAssessment).unwrap();
        assert_eq!(json, r#""in_assessment""#);
        let parsed: CandidateStatus = serde_json::from_str(r#""hired""#).unwrap();
        assert_eq!(parsed, CandidateStatus::Hired);
    }

    #[test]
    fn test_status_defaults_to_new() {
        assert_eq!(CandidateStatus::default(), CandidateStatus::New);
    }

    #[test]
    fn test_context_tags_len_counts_filled_slots() {
        let mut tags = ContextTags::default();
        assert!(tags.is_empty());
        tags.stage = Some("Seed-stage Fit".to_string());
        tags.industry = Some("Fintech Savvy".to_string());
        assert_eq!(tags.len(), 2);
    }

    #[test]
    fn test_context_tags_skip_empty_slots_in_json() {
        let tags = ContextTags {
            stage: None,
            culture: Some("Async Communicator".to_string()),
            industry: None,
        };
        let value = serde_json::to_value(&tags).unwrap();
        let obj = value.as_object().unwrap();
        assert_eq!(obj.len(), 1);
        assert_eq!(obj["culture"], "Async Communicator");
    }
}
