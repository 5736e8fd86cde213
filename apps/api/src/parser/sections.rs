//! Section headings and the line classifier.

/// The résumé categories whose bodies are accumulated from the text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Section {
    Education,
    WorkExperience,
    LeadershipExperience,
    Skills,
}

/// Heading keywords in priority order. The first entry whose keyword occurs in the
/// upper-cased line wins, so a line mentioning both EDUCATION and SKILLS is Education.
const HEADINGS: &[(&str, Section)] = &[
    ("EDUCATION", Section::Education),
    ("WORK EXPERIENCE", Section::WorkExperience),
    ("LEADERSHIP EXPERIENCE", Section::LeadershipExperience),
    ("CERTIFICATIONS & SKILLS", Section::Skills),
    ("SKILLS", Section::Skills),
];

/// Returns the section a line opens, if it is a heading.
///
/// Matching is case-insensitive substring containment, not equality: prose that
/// happens to contain a keyword also starts a new section.
pub fn classify_heading(line: &str) -> Option<Section> {
    let upper = line.to_uppercase();
    HEADINGS
        .iter()
        .find(|(keyword, _)| upper.contains(keyword))
        .map(|&(_, section)| section)
}

/// Per-section text accumulators for a single pass over the lines.
#[derive(Debug, Default)]
pub struct SectionBodies {
    education: String,
    work_experience: String,
    leadership_experience: String,
    skills: String,
}

impl SectionBodies {
    /// Appends a body line followed by a single space.
    pub fn push(&mut self, section: Section, line: &str) {
        let body = match section {
            Section::Education => &mut self.education,
            Section::WorkExperience => &mut self.work_experience,
            Section::LeadershipExperience => &mut self.leadership_experience,
            Section::Skills => &mut self.skills,
        };
        body.push_str(line);
        body.push(' ');
    }

    /// Consumes the accumulators, trimming the trailing separator from each.
    pub fn finish(self) -> [String; 4] {
        [
            self.education,
            self.work_experience,
            self.leadership_experience,
            self.skills,
        ]
        .map(|body| body.trim().to_string())
    }
}
