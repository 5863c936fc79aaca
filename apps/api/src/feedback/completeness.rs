use serde::{Deserialize, Serialize};

use crate::models::resume::{present, ResumeRecord};

/// Structural completeness of a resume. Distinct from the severity score.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreResult {
    pub score: u32,
    pub suggestions: Vec<String>,
}

const PERSONAL_POINTS: f64 = 20.0;
const SUMMARY_POINTS: f64 = 15.0;
const EXPERIENCE_POINTS: f64 = 25.0;
const EDUCATION_POINTS: f64 = 15.0;
const SKILLS_POINTS: f64 = 15.0;
const ADDITIONAL_POINTS: f64 = 10.0;

const STRONG_SUMMARY_CHARS: usize = 50;
const EXPERIENCE_TARGET: usize = 3;
const EDUCATION_TARGET: usize = 2;
const SKILLS_TARGET: usize = 5;
const ADDITIONAL_SECTIONS: usize = 4;

/// Weighted completeness score in 0–100 plus suggestions for each unmet section.
///
/// Each term is bounded by its weight, so the sum never leaves 0–100.
pub fn score_completeness(resume: Option<&ResumeRecord>) -> ScoreResult {
    let empty = ResumeRecord::default();
    let resume = resume.unwrap_or(&empty);

    let total = personal_points(resume)
        + summary_points(resume)
        + capped_fraction(resume.experience().len(), EXPERIENCE_TARGET) * EXPERIENCE_POINTS
        + capped_fraction(resume.education().len(), EDUCATION_TARGET) * EDUCATION_POINTS
        + capped_fraction(resume.skills().len(), SKILLS_TARGET) * SKILLS_POINTS
        + resume.additional_section_count() as f64 / ADDITIONAL_SECTIONS as f64 * ADDITIONAL_POINTS;

    ScoreResult {
        score: total.round() as u32,
        suggestions: suggestions(resume),
    }
}

fn personal_points(resume: &ResumeRecord) -> f64 {
    let Some(p) = &resume.personal else {
        return 0.0;
    };
    let fields = [&p.first_name, &p.last_name, &p.email, &p.phone, &p.job_title];
    let filled = fields.iter().filter(|f| present(f)).count();
    filled as f64 / fields.len() as f64 * PERSONAL_POINTS
}

fn summary_points(resume: &ResumeRecord) -> f64 {
    match resume.summary().chars().count() {
        0 => 0.0,
        n if n > STRONG_SUMMARY_CHARS => SUMMARY_POINTS,
        _ => SUMMARY_POINTS / 2.0,
    }
}

fn capped_fraction(count: usize, target: usize) -> f64 {
    count.min(target) as f64 / target as f64
}

fn suggestions(resume: &ResumeRecord) -> Vec<String> {
    let has_job_title = resume
        .personal
        .as_ref()
        .is_some_and(|p| present(&p.job_title));

    let mut out = Vec::new();
    if !has_job_title {
        out.push("Add a job title so recruiters see your target role at a glance".to_string());
    }
    if resume.summary().chars().count() <= STRONG_SUMMARY_CHARS {
        out.push(format!(
            "Write a professional summary of more than {STRONG_SUMMARY_CHARS} characters"
        ));
    }
    if resume.experience().is_empty() {
        out.push("Add at least one work experience entry".to_string());
    }
    if resume.education().is_empty() {
        out.push("Add your education history".to_string());
    }
    if resume.skills().len() < SKILLS_TARGET {
        out.push(format!("List at least {SKILLS_TARGET} skills"));
    }
    if resume.additional_section_count() == 0 {
        out.push(
            "Add certifications, projects, achievements or hobbies to stand out".to_string(),
        );
    }
    out
}
