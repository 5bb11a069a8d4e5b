//! Pure aggregation over rows already fetched from the store. Nothing in
//! here touches the database; the query layer feeds these functions and
//! turns their output into view-models.

use std::collections::{HashMap, HashSet};

use entity::{match_points, points_reference, team, tennis_match};
use itertools::Itertools;

use crate::dto::Standing;

/// A player's team affiliation as resolved from the membership join table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TeamRef {
    pub team_id: i32,
    pub team_name: String,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PlayerTotals {
    pub points: i32,
    pub matches: usize,
}

/// Builds the player id -> team lookup. A player missing from the result is
/// a free agent. If the join table holds more than one row for a player the
/// last row processed wins, matching how the table has always been read.
pub fn membership_index<I>(rows: I) -> HashMap<i32, TeamRef>
where
    I: IntoIterator<Item = (i32, i32, String)>,
{
    let mut index = HashMap::new();
    for (player_id, team_id, team_name) in rows {
        index.insert(player_id, TeamRef { team_id, team_name });
    }
    index
}

/// Sums points earned per player and counts the distinct matches those
/// points came from. A duplicate (match, player) row still adds its points
/// but never bumps the match count twice.
pub fn player_totals(rows: &[match_points::Model]) -> HashMap<i32, PlayerTotals> {
    let mut totals: HashMap<i32, PlayerTotals> = HashMap::new();
    let mut seen: HashMap<i32, HashSet<i32>> = HashMap::new();
    for row in rows {
        let entry = totals.entry(row.player_id).or_default();
        entry.points += row.points_earned.unwrap_or(0);
        if seen.entry(row.player_id).or_default().insert(row.match_id) {
            entry.matches += 1;
        }
    }
    totals
}

/// Per-(match, player) points earned, for score cards of finished matches.
pub fn match_points_map(rows: &[match_points::Model]) -> HashMap<(i32, i32), i32> {
    rows.iter()
        .map(|row| ((row.match_id, row.player_id), row.points_earned.unwrap_or(0)))
        .collect()
}

/// Points available for winning a match of a given shape, keyed on the
/// exact (category, tournament type, round name, round type) tuple.
pub struct StakeTable(HashMap<(String, String, String, String), i32>);

impl StakeTable {
    pub fn from_rows(rows: &[points_reference::Model]) -> Self {
        Self(
            rows.iter()
                .map(|row| {
                    (
                        (
                            row.category_slug.clone(),
                            row.tournament_type.clone(),
                            row.round_name.clone(),
                            row.round_type.clone(),
                        ),
                        row.points_for_win,
                    )
                })
                .collect(),
        )
    }

    /// All four fields must match exactly; anything else is worth 0.
    pub fn points_for_match(&self, m: &tennis_match::Model) -> i32 {
        let (Some(category), Some(tournament_type), Some(round_name), Some(round_type)) = (
            m.category_slug.as_ref(),
            m.tournament_type.as_ref(),
            m.round_name.as_ref(),
            m.round_type.as_ref(),
        ) else {
            return 0;
        };
        self.0
            .get(&(
                category.clone(),
                tournament_type.clone(),
                round_name.clone(),
                round_type.clone(),
            ))
            .copied()
            .unwrap_or(0)
    }
}

/// Orders teams by points, best first, and assigns 1-based positional
/// ranks. The sort is stable so teams on equal points keep the order the
/// store returned them in.
pub fn rank_teams(teams: Vec<team::Model>) -> Vec<Standing> {
    let mut teams = teams;
    teams.sort_by_key(|t| std::cmp::Reverse(t.current_points));
    teams
        .into_iter()
        .enumerate()
        .map(|(i, t)| Standing {
            rank: i as u32 + 1,
            team_id: t.id,
            name: t.name,
            points: t.current_points,
        })
        .collect_vec()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_util::blank_match;

    fn points_row(id: i32, match_id: i32, player_id: i32, points: i32) -> match_points::Model {
        match_points::Model {
            id,
            match_id,
            player_id,
            points_earned: Some(points),
        }
    }

    fn team_row(id: i32, name: &str, points: i32) -> team::Model {
        team::Model {
            id,
            name: name.to_string(),
            owner: format!("owner-{id}"),
            current_points: points,
        }
    }

    #[test]
    fn totals_sum_points_and_count_distinct_matches() {
        let rows = vec![
            points_row(1, 1, 7, 10),
            points_row(2, 1, 7, 5),
            points_row(3, 2, 7, 20),
        ];
        let totals = player_totals(&rows);
        let a = totals[&7];
        assert_eq!(a.points, 35);
        assert_eq!(a.matches, 2);
    }

    #[test]
    fn player_without_rows_is_simply_absent() {
        let totals = player_totals(&[]);
        assert_eq!(totals.get(&42).copied().unwrap_or_default(), PlayerTotals::default());
    }

    #[test]
    fn missing_points_value_counts_as_zero() {
        let rows = vec![match_points::Model {
            id: 1,
            match_id: 9,
            player_id: 3,
            points_earned: None,
        }];
        let totals = player_totals(&rows);
        assert_eq!(totals[&3].points, 0);
        assert_eq!(totals[&3].matches, 1);
    }

    #[test]
    fn membership_index_last_row_wins() {
        let index = membership_index(vec![
            (1, 10, "Aces".to_string()),
            (2, 10, "Aces".to_string()),
            (1, 20, "Breakers".to_string()),
        ]);
        assert_eq!(index[&1].team_id, 20);
        assert_eq!(index[&1].team_name, "Breakers");
        assert_eq!(index[&2].team_id, 10);
    }

    #[test]
    fn empty_membership_means_everyone_is_a_free_agent() {
        let index = membership_index(Vec::new());
        assert!(index.get(&1).is_none());
    }

    #[test]
    fn stake_lookup_requires_all_four_fields() {
        let refs = vec![points_reference::Model {
            id: 1,
            category_slug: "atp".to_string(),
            tournament_type: "grandslam".to_string(),
            round_name: "Final".to_string(),
            round_type: "final".to_string(),
            points_for_win: 2000,
        }];
        let table = StakeTable::from_rows(&refs);

        let mut m = blank_match();
        assert_eq!(table.points_for_match(&m), 0);

        m.category_slug = Some("atp".to_string());
        m.tournament_type = Some("grandslam".to_string());
        m.round_name = Some("Final".to_string());
        m.round_type = Some("final".to_string());
        assert_eq!(table.points_for_match(&m), 2000);

        m.round_name = Some("Semifinal".to_string());
        assert_eq!(table.points_for_match(&m), 0);
    }


    #[test]
    fn ranking_is_stable_for_equal_points() {
        let standings = rank_teams(vec![
            team_row(1, "First In", 50),
            team_row(2, "Second In", 50),
            team_row(3, "Winner", 80),
        ]);
        assert_eq!(
            standings.iter().map(|s| s.team_id).collect::<Vec<_>>(),
            vec![3, 1, 2]
        );
        assert_eq!(
            standings.iter().map(|s| s.rank).collect::<Vec<_>>(),
            vec![1, 2, 3]
        );
    }
}
