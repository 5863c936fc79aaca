//! ATS Compatibility Checker: fixed rules approximating applicant tracking system parsers.
//!
//! Rules run in a fixed order and fire independently. A missing `personal`
//! block is not special-cased: it simply fails the contact and job-title rules.

use crate::feedback::severity::{FeedbackItem, Severity};
use crate::models::resume::{present, ResumeRecord};

const MIN_SUMMARY_CHARS: usize = 50;
const MIN_DESCRIPTION_CHARS: usize = 50;
const MIN_SKILLS: usize = 5;

pub fn check_ats_compatibility(resume: Option<&ResumeRecord>) -> Vec<FeedbackItem> {
    let empty = ResumeRecord::default();
    let resume = resume.unwrap_or(&empty);
    let personal = resume.personal.clone().unwrap_or_default();

    let mut issues = vec![FeedbackItem::new(
        "file-format",
        Severity::Success,
        "format",
        1,
        "PDF export uses a standard, text-based layout that ATS parsers can read",
    )];

    if present(&personal.photo) {
        issues.push(
            FeedbackItem::new(
                "has-photo",
                Severity::Warning,
                "personal",
                6,
                "Resume includes a photo, which many ATS parsers ignore or reject",
            )
            .with_suggestion("Remove the photo when applying through online job portals"),
        );
    }

    if !present(&personal.email) || !present(&personal.phone) {
        issues.push(
            FeedbackItem::new(
                "missing-contact",
                Severity::Error,
                "personal",
                10,
                "Contact information is incomplete",
            )
            .with_suggestion("Add both an email address and a phone number"),
        );
    }

    if !present(&personal.job_title) {
        issues.push(
            FeedbackItem::new(
                "missing-job-title",
                Severity::Warning,
                "personal",
                7,
                "No target job title set",
            )
            .with_suggestion("Add a job title that matches the roles you are applying for"),
        );
    }

    if resume.summary().chars().count() < MIN_SUMMARY_CHARS {
        issues.push(
            FeedbackItem::new(
                "weak-summary",
                Severity::Warning,
                "summary",
                6,
                "Professional summary is missing or too short",
            )
            .with_suggestion(format!(
                "Write at least {MIN_SUMMARY_CHARS} characters that include keywords from the job description"
            )),
        );
    }

    let weak_entries = resume
        .experience()
        .iter()
        .filter(|exp| {
            exp.description
                .as_deref()
                .map_or(true, |d| d.chars().count() < MIN_DESCRIPTION_CHARS)
        })
        .count();
    if weak_entries > 0 {
        issues.push(
            FeedbackItem::new(
                "weak-experience",
                Severity::Warning,
                "experience",
                7,
                format!("{weak_entries} experience entries have short or missing descriptions"),
            )
            .with_suggestion("Describe responsibilities and results using keywords from the posting"),
        );
    }

    if resume.experience.is_none() {
        issues.push(
            FeedbackItem::new(
                "missing-experience",
                Severity::Warning,
                "experience",
                8,
                "No work experience section found",
            )
            .with_suggestion("Add an experience section, even for internships or volunteer work"),
        );
    }

    if resume.skills().len() < MIN_SKILLS {
        issues.push(
            FeedbackItem::new(
                "few-skills",
                Severity::Warning,
                "skills",
                5,
                format!("Fewer than {MIN_SKILLS} skills listed"),
            )
            .with_suggestion("List the hard skills named in the job description"),
        );
    }

    issues
}
