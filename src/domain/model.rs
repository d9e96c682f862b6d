use serde::{Deserialize, Deserializer, Serialize};

pub type QuestionId = i64;

/// Number of questions every interest area is scored from.
pub const QUESTIONS_PER_AREA: usize = 5;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Question {
    pub id: QuestionId,
    pub text: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InterestArea {
    pub name: String,
    pub question_ids: [QuestionId; QUESTIONS_PER_AREA],
}

/// A single rating. `value` is expected in [-2, 2] but is not checked here.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Answer {
    pub question_id: QuestionId,
    pub value: i64,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubmitRequest {
    #[serde(default, deserialize_with = "null_as_empty")]
    pub answers: Vec<Answer>,
}

/// `"answers": null` means no answers were given.
fn null_as_empty<'de, D>(deserializer: D) -> Result<Vec<Answer>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<Vec<Answer>>::deserialize(deserializer)?.unwrap_or_default())
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Classification {
    #[serde(rename = "интерес ярко выражен")]
    StronglyExpressed,
    #[serde(rename = "интерес средне выражен")]
    ModeratelyExpressed,
    #[serde(rename = "слабо выраженный интерес")]
    WeaklyExpressed,
    #[serde(rename = "интерес отрицается")]
    Denied,
    #[serde(rename = "интерес явно отрицается")]
    ClearlyDenied,
    #[serde(rename = "не определено")]
    Undetermined,
}

impl Classification {
    pub fn label(&self) -> &'static str {
        match self {
            Classification::StronglyExpressed => "интерес ярко выражен",
            Classification::ModeratelyExpressed => "интерес средне выражен",
            Classification::WeaklyExpressed => "слабо выраженный интерес",
            Classification::Denied => "интерес отрицается",
            Classification::ClearlyDenied => "интерес явно отрицается",
            Classification::Undetermined => "не определено",
        }
    }
}

impl std::fmt::Display for Classification {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AreaResult {
    pub area: String,
    pub score: i64,
    pub result: Classification,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TestData {
    pub instruction: String,
    pub interest_areas: Vec<InterestArea>,
    pub questions: Vec<Question>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_submit_request_field_names() {
        let request: SubmitRequest =
            serde_json::from_str(r#"{"answers": [{"questionId": 7, "value": -2}]}"#).unwrap();
        assert_eq!(
            request.answers,
            vec![Answer {
                question_id: 7,
                value: -2
            }]
        );
    }

    #[test]
    fn test_submit_request_without_answers_is_empty() {
        let request: SubmitRequest = serde_json::from_str(r#"{"extra": true}"#).unwrap();
        assert!(request.answers.is_empty());
    }

    #[test]
    fn test_submit_request_null_answers_is_empty() {
        let request: SubmitRequest = serde_json::from_str(r#"{"answers": null}"#).unwrap();
        assert!(request.answers.is_empty());
    }

    #[test]
    fn test_submit_request_rejects_fractional_values() {
        let parsed: serde_json::Result<SubmitRequest> =
            serde_json::from_str(r#"{"answers": [{"questionId": 1, "value": 1.5}]}"#);
        assert!(parsed.is_err());
    }

    #[test]
    fn test_area_result_serializes_label() {
        let result = AreaResult {
            area: "Физика".to_string(),
            score: 8,
            result: Classification::StronglyExpressed,
        };
        let json = serde_json::to_value(&result).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"area": "Физика", "score": 8, "result": "интерес ярко выражен"})
        );
    }

    #[test]
    fn test_interest_area_uses_camel_case() {
        let area = InterestArea {
            name: "Музыка".to_string(),
            question_ids: [28, 57, 86, 115, 144],
        };
        let json = serde_json::to_value(&area).unwrap();
        assert_eq!(json["questionIds"], serde_json::json!([28, 57, 86, 115, 144]));
    }

    #[test]
    fn test_label_matches_serialized_form() {
        for classification in [
            Classification::StronglyExpressed,
            Classification::ModeratelyExpressed,
            Classification::WeaklyExpressed,
            Classification::Denied,
            Classification::ClearlyDenied,
            Classification::Undetermined,
        ] {
            let json = serde_json::to_value(classification).unwrap();
            assert_eq!(json, serde_json::Value::String(classification.label().to_string()));
        }
    }
}
