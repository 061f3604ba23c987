use serde::{Deserialize, Serialize};

/// CSV header row, in field order.
pub const CANDIDATE_CSV_HEADER: [&str; 5] = ["Name", "Email", "Phone", "Skills", "Filename"];

/// One parsed resume. Every field is always present; `""` means "not found".
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct CandidateRecord {
    pub name: String,
    pub email: String,
    pub phone: String,
    /// Comma-separated, deduplicated skill terms.
    pub skills: String,
    pub filename: String,
}

impl CandidateRecord {
    pub fn as_csv_row(&self) -> [&str; 5] {
        [
            &self.name,
            &self.email,
            &self.phone,
            &self.skills,
            &self.filename,
        ]
    }
}
