use crate::domain::model::{Answer, AreaResult, Classification, InterestArea, QuestionId};
use std::collections::HashMap;

/// Inclusive score ranges checked in order; the first match wins.
/// The ranges are kept exactly as published with the questionnaire.
const THRESHOLDS: [(i64, i64, Classification); 5] = [
    (7, 10, Classification::StronglyExpressed),
    (4, 6, Classification::ModeratelyExpressed),
    (1, 3, Classification::WeaklyExpressed),
    (-4, 0, Classification::Denied),
    (-10, -5, Classification::ClearlyDenied),
];

pub fn classify(sum: i64) -> Classification {
    THRESHOLDS
        .iter()
        .find(|(low, high, _)| (*low..=*high).contains(&sum))
        .map(|(_, _, classification)| *classification)
        .unwrap_or(Classification::Undetermined)
}

/// Question id to rating. A repeated id keeps the rating given last.
pub fn answer_map(answers: &[Answer]) -> HashMap<QuestionId, i64> {
    answers
        .iter()
        .map(|answer| (answer.question_id, answer.value))
        .collect()
}

/// Sums each area's ratings, counting unanswered questions as 0, and
/// classifies the sum. Results keep the order of `areas`.
pub fn score(areas: &[InterestArea], answers: &[Answer]) -> Vec<AreaResult> {
    let ratings = answer_map(answers);

    areas
        .iter()
        .map(|area| {
            let sum = area
                .question_ids
                .iter()
                .map(|id| ratings.get(id).copied().unwrap_or(0))
                .fold(0i64, i64::saturating_add);

            AreaResult {
                area: area.name.clone(),
                score: sum,
                result: classify(sum),
            }
        })
        .collect()
}
