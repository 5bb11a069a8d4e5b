use std::collections::BTreeMap;

use entity::sea_orm_active_enums::{MatchStatus, WinnerSide};
use serde::Deserialize;
use serde_json::Value;

/// One match as delivered by the upstream score feed. The per-set scores
/// are not fixed columns: the current feed revision sends
/// `player1_set1_score` / `player1_set1_tiebreak` pairs, the older one
/// bare `player1_set1` values plus a `player1` aggregate. Both land in the
/// flattened `scores` map and are picked apart by the accessors below.
#[derive(Debug, Clone, Deserialize)]
pub struct MatchRow {
    pub match_id: i32,
    pub tournament_name: Option<String>,
    pub category_slug: Option<String>,
    pub tournament_type: Option<String>,
    pub round_name: Option<String>,
    pub round_type: Option<String>,
    pub status_type: String,
    pub status_description: Option<String>,
    pub start_timestamp: i64,
    pub winner_code: Option<i32>,
    pub player1_id: i32,
    pub player1_name: Option<String>,
    pub player2_id: i32,
    pub player2_name: Option<String>,
    #[serde(flatten)]
    scores: BTreeMap<String, Value>,
}

impl MatchRow {
    pub fn status(&self) -> MatchStatus {
        match self.status_type.as_str() {
            "finished" => MatchStatus::Finished,
            "inprogress" => MatchStatus::InProgress,
            _ => MatchStatus::NotStarted,
        }
    }

    pub fn winner(&self) -> Option<WinnerSide> {
        // The feed uses 1 for the first-listed player; anything else that
        // is present means the second.
        self.winner_code.map(|code| {
            if code == 1 {
                WinnerSide::Home
            } else {
                WinnerSide::Away
            }
        })
    }

    /// Current feed schema: indexed set score, e.g. `player1_set2_score`.
    pub fn set_games(&self, prefix: &str, n: usize) -> Option<i32> {
        self.int_field(&format!("{prefix}_set{n}_score"))
    }

    /// Set score regardless of schema: the current `_score` key when the
    /// row carries it, otherwise the legacy bare key. This is what gets
    /// persisted, so legacy rows land in the same columns as current ones.
    pub fn set_score(&self, prefix: &str, n: usize) -> Option<i32> {
        self.set_games(prefix, n)
            .or_else(|| self.keyed_set(prefix, n).map(|v| v as i32))
    }

    /// Current feed schema: tiebreak points for a set, if it had one.
    pub fn set_tiebreak(&self, prefix: &str, n: usize) -> Option<i32> {
        self.int_field(&format!("{prefix}_set{n}_tiebreak"))
    }

    /// Legacy feed schema: bare keyed set score, e.g. `player1_set2`.
    pub fn keyed_set(&self, prefix: &str, n: usize) -> Option<i64> {
        self.scores.get(&format!("{prefix}_set{n}")).and_then(Value::as_i64)
    }

    /// Legacy feed schema: single aggregate score per player.
    pub fn aggregate_score(&self, prefix: &str) -> Option<String> {
        match self.scores.get(prefix)? {
            Value::String(s) => Some(s.clone()),
            Value::Number(n) => Some(n.to_string()),
            _ => None,
        }
    }

    fn int_field(&self, key: &str) -> Option<i32> {
        self.scores.get(key).and_then(Value::as_i64).map(|v| v as i32)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_current_feed_schema() {
        let row: MatchRow = serde_json::from_str(
            r#"{
                "match_id": 12710662,
                "tournament_name": "Wimbledon",
                "category_slug": "atp",
                "tournament_type": "grandslam",
                "round_name": "Final",
                "round_type": "final",
                "status_type": "finished",
                "status_description": "Ended",
                "start_timestamp": 1720960200,
                "winner_code": 2,
                "player1_id": 10,
                "player1_name": "N. Djokovic",
                "player2_id": 20,
                "player2_name": "C. Alcaraz",
                "player1_set1_score": 2,
                "player2_set1_score": 6,
                "player1_set2_score": 6,
                "player1_set2_tiebreak": 4,
                "player2_set2_score": 7,
                "player2_set2_tiebreak": 7
            }"#,
        )
        .unwrap();

        assert_eq!(row.status(), MatchStatus::Finished);
        assert_eq!(row.winner(), Some(WinnerSide::Away));
        assert_eq!(row.set_games("player1", 1), Some(2));
        assert_eq!(row.set_games("player1", 3), None);
        assert_eq!(row.set_tiebreak("player2", 2), Some(7));
        assert_eq!(row.set_tiebreak("player2", 1), None);
    }

    #[test]
    fn legacy_rows_keep_their_set_scores() {
        let row: MatchRow = serde_json::from_str(
            r#"{
                "match_id": 5,
                "status_type": "finished",
                "start_timestamp": 1720960200,
                "winner_code": 1,
                "player1_id": 1,
                "player2_id": 2,
                "player1_set1": 6,
                "player1_set2": 7,
                "player2_set1": 4,
                "player2_set2": 5
            }"#,
        )
        .unwrap();

        // The legacy shape has no `_score` keys at all.
        for n in 1..=5 {
            assert_eq!(row.set_games("player1", n), None);
        }
        // But the persisted accessor still sees the sets.
        assert_eq!(row.set_score("player1", 1), Some(6));
        assert_eq!(row.set_score("player1", 2), Some(7));
        assert_eq!(row.set_score("player1", 3), None);
        assert_eq!(row.set_score("player2", 1), Some(4));
        assert_eq!(row.set_score("player2", 2), Some(5));
    }

    #[test]
    fn current_schema_wins_when_both_keys_exist() {
        let row: MatchRow = serde_json::from_str(
            r#"{
                "match_id": 6,
                "status_type": "finished",
                "start_timestamp": 1720960200,
                "player1_id": 1,
                "player2_id": 2,
                "player1_set1_score": 6,
                "player1_set1": 3
            }"#,
        )
        .unwrap();
        assert_eq!(row.set_score("player1", 1), Some(6));
    }

    #[test]
    fn parses_legacy_feed_schema() {
        let row: MatchRow = serde_json::from_str(
            r#"{
                "match_id": 99,
                "status_type": "notstarted",
                "start_timestamp": 1720960200,
                "player1_id": 1,
                "player2_id": 2,
                "player1_set1": 6,
                "player1": "1"
            }"#,
        )
        .unwrap();

        assert_eq!(row.status(), MatchStatus::NotStarted);
        assert_eq!(row.winner(), None);
        assert_eq!(row.keyed_set("player1", 1), Some(6));
        assert_eq!(row.keyed_set("player2", 1), None);
        assert_eq!(row.aggregate_score("player1").as_deref(), Some("1"));
    }
}
