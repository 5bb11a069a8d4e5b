//! Set-score string building. Two schemas are in circulation: the match
//! table stores one column per set and side, while the upstream feed's
//! older revision keys scores as `{player}_set{n}` with a single aggregate
//! fallback. Both formats are kept; which one applies is decided by the
//! shape of the row being formatted.

use entity::tennis_match;

use super::MatchRow;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayerSlot {
    Home,
    Away,
}

impl PlayerSlot {
    /// Key prefix used by the feed's keyed score schema.
    pub fn feed_prefix(self) -> &'static str {
        match self {
            PlayerSlot::Home => "player1",
            PlayerSlot::Away => "player2",
        }
    }
}

/// Formats the per-set columns of a stored match: set scores in order,
/// tiebreaks as superscripts, joined with spaces. A match with no set data
/// yields the empty string.
pub fn set_line(m: &tennis_match::Model, slot: PlayerSlot) -> String {
    let mut sets = Vec::new();
    for (games, tiebreak) in side_sets(m, slot) {
        if let Some(games) = games {
            match tiebreak {
                Some(tb) => sets.push(format!("{games}{}", superscript(tb))),
                None => sets.push(games.to_string()),
            }
        }
    }
    sets.join(" ")
}

/// Formats a feed row in the legacy keyed schema: `set1, set2, ...` scanned
/// while present and joined with a comma. Rows without per-set data fall
/// back to the aggregate per-player score, and `"0"` if even that is gone.
pub fn keyed_line(row: &MatchRow, slot: PlayerSlot) -> String {
    let prefix = slot.feed_prefix();
    let mut sets = Vec::new();
    let mut n = 1;
    while let Some(score) = row.keyed_set(prefix, n) {
        sets.push(score.to_string());
        n += 1;
    }
    if sets.is_empty() {
        return row.aggregate_score(prefix).unwrap_or_else(|| "0".to_string());
    }
    sets.join(", ")
}

fn side_sets(m: &tennis_match::Model, slot: PlayerSlot) -> [(Option<i32>, Option<i32>); 5] {
    match slot {
        PlayerSlot::Home => [
            (m.home_set1_score, m.home_set1_tiebreak),
            (m.home_set2_score, m.home_set2_tiebreak),
            (m.home_set3_score, m.home_set3_tiebreak),
            (m.home_set4_score, m.home_set4_tiebreak),
            (m.home_set5_score, m.home_set5_tiebreak),
        ],
        PlayerSlot::Away => [
            (m.away_set1_score, m.away_set1_tiebreak),
            (m.away_set2_score, m.away_set2_tiebreak),
            (m.away_set3_score, m.away_set3_tiebreak),
            (m.away_set4_score, m.away_set4_tiebreak),
            (m.away_set5_score, m.away_set5_tiebreak),
        ],
    }
}

fn superscript(value: i32) -> String {
    const DIGITS: [char; 10] = ['⁰', '¹', '²', '³', '⁴', '⁵', '⁶', '⁷', '⁸', '⁹'];
    value
        .to_string()
        .chars()
        .map(|c| match c.to_digit(10) {
            Some(d) => DIGITS[d as usize],
            None => c,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_util::blank_match;

    #[test]
    fn set_line_joins_sets_with_spaces() {
        let mut m = blank_match();
        m.home_set1_score = Some(6);
        m.home_set2_score = Some(4);
        m.home_set3_score = Some(6);
        assert_eq!(set_line(&m, PlayerSlot::Home), "6 4 6");
        assert_eq!(set_line(&m, PlayerSlot::Away), "");
    }

    #[test]
    fn tiebreaks_become_superscripts() {
        let mut m = blank_match();
        m.home_set1_score = Some(7);
        m.home_set1_tiebreak = Some(10);
        m.home_set2_score = Some(6);
        assert_eq!(set_line(&m, PlayerSlot::Home), "7¹⁰ 6");
    }

    #[test]
    fn formatting_is_idempotent() {
        let mut m = blank_match();
        m.away_set1_score = Some(6);
        m.away_set1_tiebreak = Some(3);
        let first = set_line(&m, PlayerSlot::Away);
        assert_eq!(set_line(&m, PlayerSlot::Away), first);
    }

    #[test]
    fn keyed_line_joins_with_commas() {
        let row: MatchRow = serde_json::from_str(
            r#"{
                "match_id": 1,
                "player1_id": 10,
                "player2_id": 20,
                "status_type": "finished",
                "start_timestamp": 0,
                "player1_set1": 6,
                "player1_set2": 7,
                "player1_set3": 6
            }"#,
        )
        .unwrap();
        assert_eq!(keyed_line(&row, PlayerSlot::Home), "6, 7, 6");
    }

    #[test]
    fn keyed_line_falls_back_to_aggregate_then_zero() {
        let with_aggregate: MatchRow = serde_json::from_str(
            r#"{
                "match_id": 1,
                "player1_id": 10,
                "player2_id": 20,
                "status_type": "finished",
                "start_timestamp": 0,
                "player2": "2"
            }"#,
        )
        .unwrap();
        assert_eq!(keyed_line(&with_aggregate, PlayerSlot::Away), "2");

        let bare: MatchRow = serde_json::from_str(
            r#"{
                "match_id": 1,
                "player1_id": 10,
                "player2_id": 20,
                "status_type": "finished",
                "start_timestamp": 0
            }"#,
        )
        .unwrap();
        assert_eq!(keyed_line(&bare, PlayerSlot::Home), "0");
    }
}
