//! Résumé parser: turns extracted plain text into a `ResumeRecord` with a single
//! pass over the non-blank lines.
//!
//! - `name` is the first non-blank line, verbatim.
//! - `email` and `phone` are the first regex matches in the raw, unsplit text.
//! - Section bodies collect every line after a heading and before the next heading.
//!   Heading lines themselves are never collected, and lines before the first heading
//!   are dropped.
//!
//! Parsing never fails. Missing fields fall back to the placeholders in
//! `crate::models::resume`.

pub mod fields;
pub mod sections;

use crate::models::resume::{ResumeRecord, NOT_FOUND, UNKNOWN_NAME};
use fields::{find_email, find_phone};
use sections::{classify_heading, Section, SectionBodies};

pub fn parse_resume(text: &str) -> ResumeRecord {
    let lines: Vec<&str> = text
        .split('\n')
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect();

    let name = lines.first().copied().unwrap_or(UNKNOWN_NAME);
    let email = find_email(text).unwrap_or(NOT_FOUND);
    let phone = find_phone(text).unwrap_or(NOT_FOUND);

    let mut bodies = SectionBodies::default();
    let mut current: Option<Section> = None;
    for line in &lines {
        if let Some(section) = classify_heading(line) {
            current = Some(section);
            continue;
        }
        if let Some(section) = current {
            bodies.push(section, line);
        }
    }
    let [education, work_experience, leadership_experience, skills] = bodies.finish();

    ResumeRecord {
        name: name.to_string(),
        email: email.to_string(),
        phone: phone.to_string(),
        education,
        work_experience,
        leadership_experience,
        skills,
    }
}
