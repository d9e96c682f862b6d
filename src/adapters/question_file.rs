use crate::domain::model::Question;
use crate::domain::ports::QuestionSource;
use crate::utils::error::{InventoryError, Result};
use regex::Regex;
use std::path::PathBuf;
use std::sync::LazyLock;

// "1. Знакомиться с жизнью растений и животных."
static QUESTION_LINE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(\d+)\.\s*(.+)$").expect("question line pattern is valid"));

/// Parses `<number>. <text>` lines. Blank lines are ignored; anything else
/// that does not match is logged and skipped.
pub fn parse_questions(content: &str) -> Vec<Question> {
    let mut questions = Vec::new();

    for (index, raw) in content.lines().enumerate() {
        let line = raw.trim();
        if line.is_empty() {
            continue;
        }

        let Some(caps) = QUESTION_LINE.captures(line) else {
            tracing::warn!("Line {} does not match question format: {:?}", index + 1, line);
            continue;
        };

        match caps[1].parse() {
            Ok(id) => questions.push(Question {
                id,
                text: caps[2].to_string(),
            }),
            Err(e) => {
                tracing::warn!("Line {}: invalid question number {:?}: {}", index + 1, &caps[1], e);
            }
        }
    }

    questions
}

#[derive(Debug, Clone)]
pub struct FileQuestionSource {
    path: PathBuf,
}

impl FileQuestionSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl QuestionSource for FileQuestionSource {
    async fn load_questions(&self) -> Result<Vec<Question>> {
        tracing::debug!("Reading question catalog from {}", self.path.display());
        let content = tokio::fs::read_to_string(&self.path)
            .await
            .map_err(|source| InventoryError::CatalogError {
                path: self.path.display().to_string(),
                source,
            })?;

        Ok(parse_questions(&content))
    }
}
