pub mod inventory;
pub mod ranking;
pub mod scoring;

pub use crate::domain::model::{Answer, AreaResult, Classification, SubmitRequest, TestData};
pub use crate::domain::ports::QuestionSource;
pub use crate::utils::error::Result;
