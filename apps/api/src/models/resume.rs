use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use sqlx::FromRow;
use uuid::Uuid;

use crate::models::lenient;

/// A stored resume document. `data` holds the builder's JSON record as written by the form layer.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct ResumeRow {
    pub id: Uuid,
    pub user_id: Uuid,
    pub title: String,
    pub data: Value,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl ResumeRow {
    pub fn record(&self) -> Option<ResumeRecord> {
        ResumeRecord::from_json(&self.data)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SkillLevel {
    Beginner,
    Intermediate,
    Advanced,
    Expert,
}

/// Resume record as produced by the builder UI. Every field may be absent.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResumeRecord {
    #[serde(default, deserialize_with = "lenient::value")]
    pub personal: Option<PersonalDetails>,
    #[serde(default, deserialize_with = "lenient::string")]
    pub professional_summary: Option<String>,
    #[serde(default, deserialize_with = "lenient::seq")]
    pub experience: Option<Vec<ExperienceEntry>>,
    #[serde(default, deserialize_with = "lenient::seq")]
    pub education: Option<Vec<EducationEntry>>,
    #[serde(default, deserialize_with = "lenient::seq")]
    pub skills: Option<Vec<SkillEntry>>,
    #[serde(default, deserialize_with = "lenient::seq")]
    pub certifications: Option<Vec<CertificationEntry>>,
    #[serde(default, deserialize_with = "lenient::seq")]
    pub projects: Option<Vec<ProjectEntry>>,
    #[serde(default, deserialize_with = "lenient::seq")]
    pub achievements: Option<Vec<AchievementEntry>>,
    #[serde(default, deserialize_with = "lenient::seq")]
    pub hobbies: Option<Vec<HobbyEntry>>,
    #[serde(default, deserialize_with = "lenient::seq")]
    pub custom_sections: Option<Vec<CustomSection>>,
    #[serde(default, deserialize_with = "lenient::seq")]
    pub social_links: Option<Vec<SocialLink>>,
}

impl ResumeRecord {
    /// Reads a record from arbitrary JSON. Anything other than an object is "no record".
    pub fn from_json(value: &Value) -> Option<Self> {
        if !value.is_object() {
            return None;
        }
        serde_json::from_value(value.clone()).ok()
    }

    pub fn experience(&self) -> &[ExperienceEntry] {
        self.experience.as_deref().unwrap_or_default()
    }

    pub fn education(&self) -> &[EducationEntry] {
        self.education.as_deref().unwrap_or_default()
    }

    pub fn skills(&self) -> &[SkillEntry] {
        self.skills.as_deref().unwrap_or_default()
    }

    pub fn social_links(&self) -> &[SocialLink] {
        self.social_links.as_deref().unwrap_or_default()
    }

    pub fn summary(&self) -> &str {
        text(&self.professional_summary)
    }

    /// Number of non-empty sections among certifications, projects, achievements and hobbies.
    pub fn additional_section_count(&self) -> usize {
        [
            self.certifications.as_ref().map_or(0, Vec::len),
            self.projects.as_ref().map_or(0, Vec::len),
            self.achievements.as_ref().map_or(0, Vec::len),
            self.hobbies.as_ref().map_or(0, Vec::len),
        ]
        .iter()
        .filter(|&&n| n > 0)
        .count()
    }
}

/// A string field counts as filled in when it is non-empty.
pub fn present(field: &Option<String>) -> bool {
    field.as_deref().is_some_and(|s| !s.is_empty())
}

/// The field's text, or `""` when absent.
pub fn text(field: &Option<String>) -> &str {
    field.as_deref().unwrap_or_default()
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PersonalDetails {
    #[serde(default, deserialize_with = "lenient::string")]
    pub first_name: Option<String>,
    #[serde(default, deserialize_with = "lenient::string")]
    pub last_name: Option<String>,
    #[serde(default, deserialize_with = "lenient::string")]
    pub email: Option<String>,
    #[serde(default, deserialize_with = "lenient::string")]
    pub phone: Option<String>,
    #[serde(default, deserialize_with = "lenient::string")]
    pub job_title: Option<String>,
    #[serde(default, deserialize_with = "lenient::string")]
    pub city: Option<String>,
    #[serde(default, deserialize_with = "lenient::string")]
    pub country: Option<String>,
    #[serde(default, deserialize_with = "lenient::string")]
    pub address: Option<String>,
    #[serde(default, deserialize_with = "lenient::string")]
    pub postal_code: Option<String>,
    #[serde(default, deserialize_with = "lenient::string")]
    pub photo: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExperienceEntry {
    #[serde(default, deserialize_with = "lenient::string")]
    pub job_title: Option<String>,
    #[serde(default, deserialize_with = "lenient::string")]
    pub employer: Option<String>,
    #[serde(default, deserialize_with = "lenient::string")]
    pub description: Option<String>,
    #[serde(default, deserialize_with = "lenient::string")]
    pub start_date: Option<String>,
    #[serde(default, deserialize_with = "lenient::string")]
    pub end_date: Option<String>,
    #[serde(default, deserialize_with = "lenient::flag")]
    pub current: bool,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EducationEntry {
    #[serde(default, deserialize_with = "lenient::string")]
    pub degree: Option<String>,
    #[serde(default, deserialize_with = "lenient::string")]
    pub school: Option<String>,
    #[serde(default, deserialize_with = "lenient::string")]
    pub description: Option<String>,
    #[serde(default, deserialize_with = "lenient::string")]
    pub start_date: Option<String>,
    #[serde(default, deserialize_with = "lenient::string")]
    pub end_date: Option<String>,
    #[serde(default, deserialize_with = "lenient::flag")]
    pub current: bool,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SkillEntry {
    #[serde(default, deserialize_with = "lenient::string")]
    pub name: Option<String>,
    #[serde(default, deserialize_with = "lenient::value")]
    pub level: Option<SkillLevel>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CertificationEntry {
    #[serde(default, deserialize_with = "lenient::string")]
    pub name: Option<String>,
    #[serde(default, deserialize_with = "lenient::string")]
    pub issuer: Option<String>,
    #[serde(default, deserialize_with = "lenient::string")]
    pub date: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectEntry {
    #[serde(default, deserialize_with = "lenient::string")]
    pub name: Option<String>,
    #[serde(default, deserialize_with = "lenient::string")]
    pub description: Option<String>,
    #[serde(default, deserialize_with = "lenient::string")]
    pub url: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AchievementEntry {
    #[serde(default, deserialize_with = "lenient::string")]
    pub title: Option<String>,
    #[serde(default, deserialize_with = "lenient::string")]
    pub description: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct HobbyEntry {
    #[serde(default, deserialize_with = "lenient::string")]
    pub name: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CustomSection {
    #[serde(default, deserialize_with = "lenient::string")]
    pub title: Option<String>,
    #[serde(default, deserialize_with = "lenient::string")]
    pub content: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SocialLink {
    #[serde(default, deserialize_with = "lenient::string")]
    pub platform: Option<String>,
    #[serde(default, deserialize_with = "lenient::string")]
    pub url: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_full_record_deserializes() {
        let record = ResumeRecord::from_json(&json!({
            "personal": {"firstName": "Ada", "lastName": "Lovelace", "email": "ada@example.com"},
            "professionalSummary": "Analyst",
            "experience": [{"jobTitle": "Engineer", "employer": "Acme", "current": true}],
            "skills": [{"name": "Rust", "level": "expert"}, {"name": "Go", "level": "guru"}],
            "hobbies": [{"name": "Chess"}]
        }))
        .unwrap();

        let personal = record.personal.as_ref().unwrap();
        assert_eq!(personal.first_name.as_deref(), Some("Ada"));
        assert!(record.experience()[0].current);
        assert_eq!(record.skills()[0].level, Some(SkillLevel::Expert));
        assert_eq!(record.skills()[1].level, None);
        assert_eq!(record.additional_section_count(), 1);
    }

    #[test]
    fn test_non_object_is_no_record() {
        assert!(ResumeRecord::from_json(&json!(null)).is_none());
        assert!(ResumeRecord::from_json(&json!("resume")).is_none());
        assert!(ResumeRecord::from_json(&json!([1, 2])).is_none());
    }

    #[test]
    fn test_malformed_sections_degrade() {
        let record = ResumeRecord::from_json(&json!({
            "personal": "nobody",
            "experience": {"jobTitle": "not a list"},
            "skills": null
        }))
        .unwrap();
        assert!(record.personal.is_none());
        assert!(record.experience.is_none());
        assert!(record.experience().is_empty());
        assert!(record.skills().is_empty());
    }

    #[test]
    fn test_present_requires_non_empty() {
        assert!(present(&Some("x".to_string())));
        assert!(!present(&Some(String::new())));
        assert!(!present(&None));
    }

    #[test]
    fn test_empty_sections_do_not_count_as_additional() {
        let record = ResumeRecord::from_json(&json!({
            "certifications": [],
            "projects": [{"name": "Compiler"}],
            "achievements": []
        }))
        .unwrap();
        assert_eq!(record.additional_section_count(), 1);
    }
}
