//! Section rewriters: summary template, skill reordering, experience emphasis.

use crate::tailoring::keywords::{mentions_any, KeywordEntry};

/// Keywords woven into the generated summary.
const SUMMARY_KEYWORDS: usize = 5;

/// Maximum number of skills rendered in the KEY SKILLS block.
pub const MAX_SKILLS: usize = 12;

/// Marker appended to experience bullets that mention a JD keyword.
const EMPHASIS_MARKER: &str = "⭐";

/// Builds the professional summary from the top JD keywords.
pub fn generate_summary(keywords: &[KeywordEntry]) -> String {
    let expertise = keywords
        .iter()
        .take(SUMMARY_KEYWORDS)
        .map(|k| k.keyword.as_str())
        .collect::<Vec<_>>()
        .join(", ");

    format!(
        "Results-driven professional with expertise in {expertise}. \
         Proven track record of delivering high-quality solutions and driving business success. \
         Strong technical skills combined with excellent problem-solving abilities and team collaboration."
    )
}

/// Splits a skills block into individual skills and lists keyword matches first.
///
/// Separators are `,`, newlines, `•` and `-`. Both groups keep their input
/// order and the combined list is capped at [`MAX_SKILLS`].
pub fn highlight_relevant_skills(skills_text: &str, keywords: &[KeywordEntry]) -> String {
    let skills = skills_text
        .split(|c: char| matches!(c, ',' | '\n' | '•' | '-'))
        .map(str::trim)
        .filter(|s| !s.is_empty());

    let (relevant, other): (Vec<&str>, Vec<&str>) =
        skills.partition(|skill| mentions_any(skill, keywords));

    relevant
        .into_iter()
        .chain(other)
        .take(MAX_SKILLS)
        .map(|skill| format!("• {skill}"))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Converts `-` bullets that mention a JD keyword into starred `•` bullets.
/// Every other line passes through unchanged.
pub fn emphasize_relevant_experience(experience_text: &str, keywords: &[KeywordEntry]) -> String {
    experience_text
        .split('\n')
        .map(|line| {
            let trimmed = line.trim();
            match trimmed.strip_prefix('-') {
                Some(rest) if mentions_any(line, keywords) => {
                    format!("• {} {EMPHASIS_MARKER}", rest.trim())
                }
                _ => line.to_string(),
            }
        })
        .collect::<Vec<_>>()
        .join("\n")
}
