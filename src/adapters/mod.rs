// Adapters layer: concrete implementations of the domain ports.

pub mod question_file;

pub use question_file::{parse_questions, FileQuestionSource};
