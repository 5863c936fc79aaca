//! Resume Text Flattener: projects a resume record into one searchable string.

use crate::models::resume::{text, ResumeRecord};

/// Space-joins, in order: name and job title, summary, each experience (title, employer,
/// description), each education (degree, school, description), each skill name.
/// Absent fields contribute empty strings; no record yields `""`.
pub fn flatten_resume_text(resume: Option<&ResumeRecord>) -> String {
    let Some(resume) = resume else {
        return String::new();
    };

    let mut parts: Vec<&str> = Vec::new();

    match &resume.personal {
        Some(p) => parts.extend([text(&p.first_name), text(&p.last_name), text(&p.job_title)]),
        None => parts.extend(["", "", ""]),
    }

    parts.push(resume.summary());

    for exp in resume.experience() {
        parts.extend([text(&exp.job_title), text(&exp.employer), text(&exp.description)]);
    }

    for edu in resume.education() {
        parts.extend([text(&edu.degree), text(&edu.school), text(&edu.description)]);
    }

    parts.extend(resume.skills().iter().map(|s| text(&s.name)));

    parts.join(" ")
}
