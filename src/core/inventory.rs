use crate::core::ranking::rank;
use crate::core::scoring::score;
use crate::domain::catalog::{interest_areas, INSTRUCTION};
use crate::domain::model::{Answer, AreaResult, Question, QuestionId, SubmitRequest, TestData};
use crate::domain::ports::QuestionSource;
use crate::utils::error::{InventoryError, Result};
use std::collections::HashSet;

const MIN_RATING: i64 = -2;
const MAX_RATING: i64 = 2;

/// The questionnaire served by the API. Built once at startup and shared
/// read-only between requests.
#[derive(Debug, Clone)]
pub struct Inventory {
    test_data: TestData,
    strict_answers: bool,
}

impl Inventory {
    pub fn new(questions: Vec<Question>) -> Self {
        Self {
            test_data: TestData {
                instruction: INSTRUCTION.to_string(),
                interest_areas: interest_areas(),
                questions,
            },
            strict_answers: false,
        }
    }

    pub async fn from_source<S: QuestionSource>(source: &S) -> Result<Self> {
        let questions = source.load_questions().await?;
        tracing::debug!("Loaded {} questions", questions.len());
        Ok(Self::new(questions))
    }

    /// Rejects out-of-range ratings and unknown question ids on submit
    /// instead of scoring them as given.
    pub fn with_strict_answers(mut self, strict: bool) -> Self {
        self.strict_answers = strict;
        self
    }

    pub fn strict_answers(&self) -> bool {
        self.strict_answers
    }

    pub fn test_data(&self) -> &TestData {
        &self.test_data
    }

    pub fn submit(&self, request: &SubmitRequest) -> Result<Vec<AreaResult>> {
        if self.strict_answers {
            self.check_answers(&request.answers)?;
        }

        let results = score(&self.test_data.interest_areas, &request.answers);
        Ok(rank(results))
    }

    /// Parses and scores a raw submit body. A JSON `null` body is treated
    /// as a request without answers.
    pub fn submit_json(&self, body: &[u8]) -> Result<Vec<AreaResult>> {
        let request: SubmitRequest = serde_json::from_slice::<Option<SubmitRequest>>(body)
            .map_err(|e| InventoryError::MalformedRequest {
                message: e.to_string(),
            })?
            .unwrap_or_default();
        tracing::debug!("Scoring {} answers", request.answers.len());
        self.submit(&request)
    }

    fn check_answers(&self, answers: &[Answer]) -> Result<()> {
        let known: HashSet<QuestionId> = self.test_data.questions.iter().map(|q| q.id).collect();

        for answer in answers {
            if !(MIN_RATING..=MAX_RATING).contains(&answer.value) {
                return Err(InventoryError::ValidationError {
                    message: format!(
                        "value {} for question {} must be between {} and {}",
                        answer.value, answer.question_id, MIN_RATING, MAX_RATING
                    ),
                });
            }
            if !known.contains(&answer.question_id) {
                return Err(InventoryError::ValidationError {
                    message: format!("unknown question {}", answer.question_id),
                });
            }
        }

        Ok(())
    }
}
