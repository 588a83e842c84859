//! Naive resume section splitter.
//!
//! Any line mentioning a section word is treated as a heading. Heading lines
//! themselves are discarded; everything between two headings becomes the body
//! of the earlier one.

use std::collections::HashMap;

use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SectionKind {
    /// Content before the first recognised heading (name, contact details).
    Header,
    Experience,
    Education,
    Skills,
    Projects,
}

impl SectionKind {
    /// Classifies a line as a heading. Checks run in a fixed order, so a line
    /// like "Project Experience" is an experience heading.
    fn from_heading(line: &str) -> Option<Self> {
        let lower = line.trim().to_lowercase();
        if lower.contains("experience") || lower.contains("employment") {
            Some(SectionKind::Experience)
        } else if lower.contains("education") {
            Some(SectionKind::Education)
        } else if lower.contains("skill") {
            Some(SectionKind::Skills)
        } else if lower.contains("project") {
            Some(SectionKind::Projects)
        } else {
            None
        }
    }
}

/// Section bodies keyed by kind. A later section of the same kind replaces an
/// earlier one.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResumeSections {
    bodies: HashMap<SectionKind, String>,
}

impl ResumeSections {
    /// Returns the trimmed body of a section, or `None` if it is missing or blank.
    pub fn get(&self, kind: SectionKind) -> Option<&str> {
        self.bodies
            .get(&kind)
            .map(String::as_str)
            .filter(|body| !body.is_empty())
    }

    fn store(&mut self, kind: SectionKind, content: &str) {
        if !content.is_empty() {
            self.bodies.insert(kind, content.trim().to_string());
        }
    }
}

pub fn parse_resume(resume_text: &str) -> ResumeSections {
    let mut sections = ResumeSections::default();
    let mut current = SectionKind::Header;
    let mut content = String::new();

    for line in resume_text.split('\n') {
        match SectionKind::from_heading(line) {
            Some(next) => {
                sections.store(current, &content);
                current = next;
                content.clear();
            }
            None => {
                content.push_str(line);
                content.push('\n');
            }
        }
    }
    sections.store(current, &content);

    sections
}
