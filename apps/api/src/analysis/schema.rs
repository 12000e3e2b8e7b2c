//! Opt-in structural check of the model's report (enabled by `STRICT_SCHEMA`).
//!
//! Kept apart from JSON parsing so "not JSON" and "JSON of the wrong shape"
//! stay distinguishable failures. The typed report mirrors the example
//! schema embedded in the system prompt.

use serde::Deserialize;
use serde_json::Value;
use thiserror::Error;

#[derive(Debug, Error)]
#[error("Model response does not match the analysis schema")]
pub struct SchemaMismatch(#[source] pub serde_json::Error);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    High,
    Medium,
    Low,
}

// Report types are decoded to check shape; their fields are never read.
#[allow(dead_code)]
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct AnalysisReport {
    pub overall_match: f64, // 0 – 100
    pub missing_skills: Vec<String>,
    pub required_skills: RequiredSkills,
    pub preferred_skills: Vec<PreferredSkill>,
    pub ats_keywords: AtsKeywords,
    pub points_to_add: Vec<PointToAdd>,
    pub points_to_remove: Vec<PointToRemove>,
    pub key_insights: Vec<String>,
    pub interview_questions: Vec<InterviewQuestion>,
}

#[allow(dead_code)]
#[derive(Debug, Deserialize)]
pub struct RequiredSkills {
    pub missing: Vec<String>,
    pub present: Vec<String>,
}

#[allow(dead_code)]
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PreferredSkill {
    pub skill: String,
    pub in_resume: bool,
    pub benefit: String,
    pub priority: Priority,
}

#[allow(dead_code)]
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AtsKeywords {
    pub must_have: Vec<String>,
    pub replace_with: Vec<Replacement>,
    pub exact_phrases: Vec<String>,
    pub action_verbs: Vec<String>,
}

#[allow(dead_code)]
#[derive(Debug, Deserialize)]
pub struct Replacement {
    pub current: String,
    pub better: String,
}

#[allow(dead_code)]
#[derive(Debug, Deserialize)]
pub struct PointToAdd {
    pub suggestion: String,
    pub reason: String,
    pub priority: Priority,
}

#[allow(dead_code)]
#[derive(Debug, Deserialize)]
pub struct PointToRemove {
    pub content: String,
    pub reason: String,
}

#[allow(dead_code)]
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InterviewQuestion {
    pub question: String,
    /// technical | behavioral | scenario (free text; models vary the wording)
    #[serde(rename = "type")]
    pub question_type: String,
    pub reason: String,
    pub sample_answer: String,
}

/// Checks `value` against the report shape. The caller keeps returning the
/// original value, so key order and number formatting are untouched.
pub fn validate_report(value: &Value) -> Result<(), SchemaMismatch> {
    AnalysisReport::deserialize(value)
        .map(|_| ())
        .map_err(SchemaMismatch)
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use serde_json::json;

    pub(crate) fn conforming_report() -> Value {
        json!({
            "overallMatch": 75,
            "missingSkills": ["Python", "Docker"],
            "requiredSkills": {"missing": ["Python"], "present": ["Git"]},
            "preferredSkills": [{
                "skill": "TypeScript",
                "inResume": false,
                "benefit": "Adding TypeScript could boost your match by 8 percent",
                "priority": "medium"
            }],
            "atsKeywords": {
                "mustHave": ["microservices"],
                "replaceWith": [{"current": "team player", "better": "cross-functional collaboration"}],
                "exactPhrases": ["5+ years experience"],
                "actionVerbs": ["architected"]
            },
            "pointsToAdd": [{
                "suggestion": "Led migration to microservices",
                "reason": "JD emphasizes microservices",
                "priority": "high"
            }],
            "pointsToRemove": [{
                "content": "Managed social media accounts",
                "reason": "Irrelevant to backend role"
            }],
            "keyInsights": ["Reframe full stack work toward backend"],
            "interviewQuestions": [{
                "question": "Walk me through a microservice you built",
                "type": "technical",
                "reason": "Gap in resume",
                "sampleAnswer": "I built an order service in Rust."
            }]
        })
    }

    #[test]
    fn test_conforming_report_passes() {
        assert!(validate_report(&conforming_report()).is_ok());

        let report = AnalysisReport::deserialize(&conforming_report()).unwrap();
        assert_eq!(report.overall_match, 75.0);
        assert_eq!(report.preferred_skills[0].priority, Priority::Medium);
        assert_eq!(report.interview_questions[0].question_type, "technical");
    }

    #[test]
    fn test_partial_report_is_rejected() {
        let err = validate_report(&json!({"overallMatch": 75})).unwrap_err();
        assert_eq!(
            err.to_string(),
            "Model response does not match the analysis schema"
        );
    }

    #[test]
    fn test_unknown_priority_is_rejected() {
        let mut value = conforming_report();
        value["pointsToAdd"][0]["priority"] = json!("urgent");
        assert!(validate_report(&value).is_err());
    }

    #[test]
    fn test_unexpected_top_level_field_is_rejected() {
        let mut value = conforming_report();
        value["commentary"] = json!("extra prose");
        assert!(validate_report(&value).is_err());
    }

    #[test]
    fn test_non_object_is_rejected() {
        assert!(validate_report(&json!([1, 2, 3])).is_err());
    }
}
