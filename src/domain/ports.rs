use crate::domain::model::Question;
use crate::utils::error::Result;

/// Produces the ordered question catalog served with the test definition.
pub trait QuestionSource: Send + Sync {
    fn load_questions(&self) -> impl std::future::Future<Output = Result<Vec<Question>>> + Send;
}
