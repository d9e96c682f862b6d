use crate::domain::model::AreaResult;

/// Orders results by score, highest first. The sort is stable, so areas with
/// equal scores keep their relative input order.
pub fn rank(mut results: Vec<AreaResult>) -> Vec<AreaResult> {
    results.sort_by(|a, b| b.score.cmp(&a.score));
    results
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::scoring::classify;

    fn result(area: &str, score: i64) -> AreaResult {
        AreaResult {
            area: area.to_string(),
            score,
            result: classify(score),
        }
    }

    #[test]
    fn test_rank_descending() {
        let ranked = rank(vec![result("a", -3), result("b", 9), result("c", 2)]);
        let scores: Vec<i64> = ranked.iter().map(|r| r.score).collect();
        assert_eq!(scores, vec![9, 2, -3]);
    }

    #[test]
    fn test_rank_keeps_input_order_for_ties() {
        let ranked = rank(vec![
            result("first", 0),
            result("top", 5),
            result("second", 0),
            result("third", 0),
        ]);
        let names: Vec<&str> = ranked.iter().map(|r| r.area.as_str()).collect();
        assert_eq!(names, vec!["top", "first", "second", "third"]);
    }

    #[test]
    fn test_rank_empty() {
        assert!(rank(Vec::new()).is_empty());
    }
}
