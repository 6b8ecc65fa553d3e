use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// Structured output of the external resume-parsing service.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ParsedResume {
    pub status: String,
    pub message: String,
    pub candidate_id: String,
    pub candidate_info: CandidateInfo,
    pub sections: ResumeSections,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CandidateInfo {
    pub candidate_id: String,
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub skills: Vec<String>,
    #[serde(default)]
    pub experience_years: f64,
    #[serde(default)]
    pub work_experiences: Vec<WorkExperience>,
    #[serde(default)]
    pub location: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WorkExperience {
    pub company_name: String,
    pub job_title: String,
    #[serde(default)]
    pub start_date: String,
    #[serde(default)]
    pub end_date: String,
    #[serde(default)]
    pub duration_years: f64,
    #[serde(default)]
    pub is_current: bool,
    #[serde(default)]
    pub description: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResumeSections {
    #[serde(default)]
    pub summary: String,
    #[serde(default)]
    pub experience: String,
    #[serde(default)]
    pub education: String,
    #[serde(default)]
    pub skills: String,
    #[serde(default)]
    pub projects: String,
    #[serde(default)]
    pub certifications: String,
}

/// Persisted analysis: candidate identity columns for listing plus the full
/// parser payload as JSON.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct ResumeAnalysisRow {
    pub id: Uuid,
    pub candidate_id: String,
    pub candidate_name: String,
    pub candidate_email: String,
    pub data: serde_json::Value,
    pub created_at: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parsed_resume_decodes_minimal_payload() {
        let payload = r#"{
            "status": "success",
            "message": "parsed",
            "candidate_id": "cand-42",
            "candidate_info": {
                "candidate_id": "cand-42",
                "name": "Sam Okafor",
                "email": "sam@example.com"
            },
            "sections": { "summary": "Backend engineer." }
        }"#;

        let parsed: ParsedResume = serde_json::from_str(payload).unwrap();
        assert_eq!(parsed.candidate_info.name, "Sam Okafor");
        assert!(parsed.candidate_info.skills.is_empty());
        assert_eq!(parsed.sections.summary, "Backend engineer.");
        assert_eq!(parsed.sections.education, "");
    }
}
