//! Resume feedback panel rules.
//!
//! Produces prioritized findings for the standalone feedback view. Priorities
//! are fixed per rule and only drive display order; the panel's headline number
//! comes from `score_feedback_severity`.

use crate::feedback::severity::{FeedbackItem, Severity};
use crate::models::resume::{present, text, ResumeRecord};

const SHORT_SUMMARY_CHARS: usize = 100;
const LONG_SUMMARY_CHARS: usize = 600;
const SOLID_EXPERIENCE_ENTRIES: usize = 3;
const MIN_SKILLS: usize = 5;

const VAGUE_VERBS: &[&str] = &[
    "improved",
    "enhanced",
    "helped",
    "worked on",
    "assisted",
    "supported",
    "participated",
    "involved",
    "responsible for",
];

/// Runs every feedback rule and returns the findings, most urgent first.
/// Rules with equal priority keep their evaluation order.
pub fn generate_feedback(resume: Option<&ResumeRecord>) -> Vec<FeedbackItem> {
    let empty = ResumeRecord::default();
    let resume = resume.unwrap_or(&empty);

    let mut items = Vec::new();
    personal_rules(resume, &mut items);
    summary_rules(resume, &mut items);
    experience_rules(resume, &mut items);
    education_rules(resume, &mut items);
    skills_rules(resume, &mut items);
    link_rules(resume, &mut items);

    items.sort_by(|a, b| b.priority.cmp(&a.priority));
    items
}

fn personal_rules(resume: &ResumeRecord, items: &mut Vec<FeedbackItem>) {
    let personal = resume.personal.clone().unwrap_or_default();

    if !present(&personal.first_name) || !present(&personal.last_name) {
        items.push(
            FeedbackItem::new("missing-name", Severity::Error, "personal", 10, "Your full name is missing")
                .with_suggestion("Add both first and last name at the top of the resume"),
        );
    }
    if !present(&personal.email) {
        items.push(
            FeedbackItem::new("missing-email", Severity::Error, "personal", 9, "No email address")
                .with_suggestion("Add a professional email address recruiters can reply to"),
        );
    }
    if !present(&personal.phone) {
        items.push(
            FeedbackItem::new("missing-phone", Severity::Warning, "personal", 7, "No phone number")
                .with_suggestion("Add a phone number for interview scheduling"),
        );
    }
}

fn summary_rules(resume: &ResumeRecord, items: &mut Vec<FeedbackItem>) {
    let len = resume.summary().chars().count();
    let item = match len {
        0 => FeedbackItem::new(
            "missing-summary",
            Severity::Error,
            "summary",
            9,
            "Professional summary is empty",
        )
        .with_suggestion("Summarize your experience and strengths in two or three sentences"),
        n if n < SHORT_SUMMARY_CHARS => FeedbackItem::new(
            "short-summary",
            Severity::Warning,
            "summary",
            6,
            format!("Professional summary is short ({n} characters)"),
        )
        .with_suggestion(format!(
            "Expand it to at least {SHORT_SUMMARY_CHARS} characters with your key achievements"
        )),
        n if n > LONG_SUMMARY_CHARS => FeedbackItem::new(
            "long-summary",
            Severity::Info,
            "summary",
            3,
            format!("Professional summary is long ({n} characters)"),
        )
        .with_suggestion("Trim it to the most relevant highlights"),
        _ => FeedbackItem::new(
            "strong-summary",
            Severity::Success,
            "summary",
            1,
            "Professional summary has a good length",
        ),
    };
    items.push(item);
}

fn experience_rules(resume: &ResumeRecord, items: &mut Vec<FeedbackItem>) {
    let experience = resume.experience();
    if experience.is_empty() {
        items.push(
            FeedbackItem::new("no-experience", Severity::Error, "experience", 9, "No work experience listed")
                .with_suggestion("Add jobs, internships or volunteer roles"),
        );
        return;
    }

    let unquantified = experience
        .iter()
        .filter(|exp| !is_quantified(text(&exp.description)))
        .count();
    if unquantified > 0 {
        items.push(
            FeedbackItem::new(
                "unquantified-experience",
                Severity::Warning,
                "experience",
                6,
                format!("{unquantified} experience entries have no measurable results"),
            )
            .with_suggestion("Add numbers: percentages, revenue, time saved or team size"),
        );
    }

    let vague: Vec<&str> = VAGUE_VERBS
        .iter()
        .copied()
        .filter(|verb| {
            experience
                .iter()
                .any(|exp| text(&exp.description).to_lowercase().contains(*verb))
        })
        .collect();
    if !vague.is_empty() {
        items.push(
            FeedbackItem::new(
                "vague-verbs",
                Severity::Info,
                "experience",
                4,
                format!("Descriptions use weak verbs: {}", vague.join(", ")),
            )
            .with_suggestion("Start bullets with strong action verbs such as built, led or reduced"),
        );
    }

    if experience.len() >= SOLID_EXPERIENCE_ENTRIES {
        items.push(FeedbackItem::new(
            "solid-experience",
            Severity::Success,
            "experience",
            1,
            "Experience section shows a solid work history",
        ));
    }
}

fn education_rules(resume: &ResumeRecord, items: &mut Vec<FeedbackItem>) {
    if resume.education().is_empty() {
        items.push(
            FeedbackItem::new("no-education", Severity::Warning, "education", 5, "No education listed")
                .with_suggestion("Add your highest degree, school or relevant training"),
        );
    }
}

fn skills_rules(resume: &ResumeRecord, items: &mut Vec<FeedbackItem>) {
    match resume.skills().len() {
        0 => items.push(
            FeedbackItem::new("no-skills", Severity::Error, "skills", 8, "No skills listed")
                .with_suggestion(format!("List at least {MIN_SKILLS} relevant skills")),
        ),
        n if n < MIN_SKILLS => items.push(
            FeedbackItem::new(
                "few-skills",
                Severity::Warning,
                "skills",
                5,
                format!("Only {n} skills listed"),
            )
            .with_suggestion(format!("List at least {MIN_SKILLS} relevant skills")),
        ),
        _ => {}
    }
}

fn link_rules(resume: &ResumeRecord, items: &mut Vec<FeedbackItem>) {
    if !resume.social_links().iter().any(|l| present(&l.url)) {
        items.push(
            FeedbackItem::new("no-social-links", Severity::Info, "links", 2, "No professional profile links")
                .with_suggestion("Add a LinkedIn profile or portfolio link"),
        );
    }
}

/// A description counts as quantified if it has a digit, a percent sign or a currency sign.
fn is_quantified(description: &str) -> bool {
    description
        .chars()
        .any(|c| c.is_ascii_digit() || matches!(c, '%' | '$' | '€' | '£'))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::feedback::severity::score_feedback_severity;
    use serde_json::json;

    fn record(value: serde_json::Value) -> ResumeRecord {
        ResumeRecord::from_json(&value).unwrap()
    }

    fn ids(items: &[FeedbackItem]) -> Vec<&str> {
        items.iter().map(|i| i.id.as_str()).collect()
    }

    fn polished() -> ResumeRecord {
        record(json!({
            "personal": {
                "firstName": "Noor", "lastName": "Haddad", "email": "noor@example.com",
                "phone": "555 0100", "jobTitle": "Backend Engineer"
            },
            "professionalSummary": "Backend engineer with six years of experience designing payment APIs, \
                                    leading migrations and mentoring engineers across three teams.",
            "experience": [
                {"description": "Cut p99 latency by 40% across the payments API."},
                {"description": "Migrated 12 services to Kubernetes with zero downtime."},
                {"description": "Saved $200k per year by consolidating queues."}
            ],
            "education": [{"degree": "BSc", "school": "AUB"}],
            "skills": [{"name": "Rust"}, {"name": "Go"}, {"name": "SQL"}, {"name": "Kafka"}, {"name": "AWS"}],
            "socialLinks": [{"platform": "LinkedIn", "url": "https://linkedin.com/in/noor"}]
        }))
    }

    #[test]
    fn test_polished_resume_only_successes() {
        let items = generate_feedback(Some(&polished()));
        assert_eq!(ids(&items), ["strong-summary", "solid-experience"]);
        assert_eq!(score_feedback_severity(&items), 100);
    }

    #[test]
    fn test_sorted_by_descending_priority() {
        let items = generate_feedback(None);
        assert!(items.windows(2).all(|w| w[0].priority >= w[1].priority));
        assert_eq!(items[0].id, "missing-name");
    }

    #[test]
    fn test_empty_resume_findings() {
        let items = generate_feedback(None);
        assert_eq!(
            ids(&items),
            [
                "missing-name",
                "missing-email",
                "missing-summary",
                "no-experience",
                "no-skills",
                "missing-phone",
                "no-education",
                "no-social-links"
            ]
        );
        // 5 errors, 2 warnings, 1 info
        assert_eq!(score_feedback_severity(&items), 14);
    }

    #[test]
    fn test_unquantified_and_vague_descriptions() {
        let mut resume = polished();
        resume.experience = Some(vec![
            crate::models::resume::ExperienceEntry {
                description: Some("Helped the team and improved onboarding".to_string()),
                ..Default::default()
            },
            crate::models::resume::ExperienceEntry {
                description: Some("Reduced build time by 3x".to_string()),
                ..Default::default()
            },
        ]);
        let items = generate_feedback(Some(&resume));

        let unquantified = items.iter().find(|i| i.id == "unquantified-experience").unwrap();
        assert!(unquantified.message.starts_with("1 "));

        let vague = items.iter().find(|i| i.id == "vague-verbs").unwrap();
        assert_eq!(vague.severity, Severity::Info);
        assert!(vague.message.contains("improved"));
        assert!(vague.message.contains("helped"));
        assert!(!ids(&items).contains(&"solid-experience"));
    }

    #[test]
    fn test_summary_length_bands() {
        let mut resume = polished();
        resume.professional_summary = Some("Engineer.".to_string());
        assert!(ids(&generate_feedback(Some(&resume))).contains(&"short-summary"));

        resume.professional_summary = Some("word ".repeat(130));
        assert!(ids(&generate_feedback(Some(&resume))).contains(&"long-summary"));
    }

    #[test]
    fn test_few_skills_warning_not_error() {
        let mut resume = polished();
        resume.skills = Some(vec![Default::default(), Default::default()]);
        let items = generate_feedback(Some(&resume));
        let few = items.iter().find(|i| i.id == "few-skills").unwrap();
        assert_eq!(few.severity, Severity::Warning);
        assert!(!ids(&items).contains(&"no-skills"));
    }

    #[test]
    fn test_social_link_without_url_does_not_count() {
        let mut resume = polished();
        resume.social_links = Some(vec![crate::models::resume::SocialLink {
            platform: Some("GitHub".to_string()),
            url: None,
        }]);
        assert!(ids(&generate_feedback(Some(&resume))).contains(&"no-social-links"));
    }

    #[test]
    fn test_quantification_markers() {
        assert!(is_quantified("Grew revenue 20%"));
        assert!(is_quantified("Managed a €1M budget"));
        assert!(!is_quantified("Led the migration"));
        assert!(!is_quantified(""));
    }
}
