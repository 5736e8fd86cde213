use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Placeholder for `name` when the document has no non-blank line.
pub const UNKNOWN_NAME: &str = "Unknown";
/// Placeholder for `email` and `phone` when no match is found.
pub const NOT_FOUND: &str = "Not found";

/// Structured fields pulled from one résumé's text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResumeRecord {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub education: String,
    pub work_experience: String,
    pub leadership_experience: String,
    pub skills: String,
}

impl Default for ResumeRecord {
    fn default() -> Self {
        Self {
            name: UNKNOWN_NAME.to_string(),
            email: NOT_FOUND.to_string(),
            phone: NOT_FOUND.to_string(),
            education: String::new(),
            work_experience: String::new(),
            leadership_experience: String::new(),
            skills: String::new(),
        }
    }
}

/// A persisted record together with its generated id. Serializes flat.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StoredResume {
    pub id: i64,
    #[serde(flatten)]
    pub record: ResumeRecord,
}

#[derive(Debug, Clone, FromRow)]
pub struct ResumeRow {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub education: String,
    pub work_experience: String,
    pub leadership_experience: String,
    pub skills: String,
}

impl From<ResumeRow> for StoredResume {
    fn from(row: ResumeRow) -> Self {
        StoredResume {
            id: row.id,
            record: ResumeRecord {
                name: row.name,
                email: row.email,
                phone: row.phone,
                education: row.education,
                work_experience: row.work_experience,
                leadership_experience: row.leadership_experience,
                skills: row.skills,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_record_uses_placeholders() {
        let record = ResumeRecord::default();
        assert_eq!(record.name, "Unknown");
        assert_eq!(record.email, "Not found");
        assert_eq!(record.phone, "Not found");
        assert!(record.education.is_empty());
        assert!(record.skills.is_empty());
    }

    #[test]
    fn test_stored_resume_serializes_flat() {
        let stored = StoredResume {
            id: 7,
            record: ResumeRecord {
                name: "Jane Roe".to_string(),
                ..ResumeRecord::default()
            },
        };
        let value = serde_json::to_value(&stored).unwrap();
        assert_eq!(value["id"], 7);
        assert_eq!(value["name"], "Jane Roe");
        assert_eq!(value["email"], "Not found");
        assert!(value.get("record").is_none());
    }
}
