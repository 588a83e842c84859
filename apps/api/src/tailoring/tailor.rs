//! Resume tailoring: keyword extraction → section split → rewrite → reassembly.

use serde::Serialize;
use tracing::debug;

use crate::tailoring::keywords::{extract_keywords, KeywordEntry};
use crate::tailoring::rewrite::{
    emphasize_relevant_experience, generate_summary, highlight_relevant_skills,
};
use crate::tailoring::sections::{parse_resume, SectionKind};

pub const SUMMARY_HEADING: &str = "PROFESSIONAL SUMMARY";
pub const SKILLS_HEADING: &str = "KEY SKILLS";
pub const EXPERIENCE_HEADING: &str = "PROFESSIONAL EXPERIENCE";
pub const EDUCATION_HEADING: &str = "EDUCATION";
pub const PROJECTS_HEADING: &str = "PROJECTS";

/// Output of the tailoring pipeline.
#[derive(Debug, Clone, Serialize)]
pub struct TailoredResume {
    pub text: String,
    /// Keywords the rewrite was optimised for, most frequent first.
    pub keywords: Vec<KeywordEntry>,
}

/// Rewrites a plain-text resume around the keywords of a job description.
///
/// Summary and skills blocks are always emitted, so the result is never empty.
/// Experience, education and projects appear only when the resume has them.
/// The header block (name, contact) is not carried over.
pub fn tailor_resume(resume_text: &str, job_description: &str) -> TailoredResume {
    let keywords = extract_keywords(job_description);
    let sections = parse_resume(resume_text);
    debug!(
        keyword_count = keywords.len(),
        has_experience = sections.get(SectionKind::Experience).is_some(),
        "Tailoring resume"
    );

    let mut text = String::new();

    push_block(&mut text, SUMMARY_HEADING, &generate_summary(&keywords));
    push_block(
        &mut text,
        SKILLS_HEADING,
        &highlight_relevant_skills(sections.get(SectionKind::Skills).unwrap_or(""), &keywords),
    );
    if let Some(experience) = sections.get(SectionKind::Experience) {
        push_block(
            &mut text,
            EXPERIENCE_HEADING,
            &emphasize_relevant_experience(experience, &keywords),
        );
    }
    if let Some(education) = sections.get(SectionKind::Education) {
        push_block(&mut text, EDUCATION_HEADING, education);
    }
    if let Some(projects) = sections.get(SectionKind::Projects) {
        push_block(&mut text, PROJECTS_HEADING, projects);
    }

    TailoredResume { text, keywords }
}

fn push_block(out: &mut String, heading: &str, body: &str) {
    out.push_str(heading);
    out.push('\n');
    out.push_str(body);
    out.push_str("\n\n");
}
