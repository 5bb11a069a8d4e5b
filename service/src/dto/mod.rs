mod feed_row;
pub mod filter;
mod ranking_row;
pub mod score;

pub use feed_row::MatchRow;
pub use filter::MatchFilter;
pub use ranking_row::{RankingFeed, RankingRow};

use entity::sea_orm_active_enums;
use rocket::serde::{Deserialize, Serialize};
use rocket_okapi::okapi::schemars::{self, JsonSchema};
use sea_orm::prelude::DateTimeWithTimeZone;

use crate::scoring::{StakeTable, TeamRef};
use entity::tennis_match;
use std::collections::HashMap;

#[derive(Serialize, Deserialize, JsonSchema, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Gender {
    M,
    F,
}

impl From<sea_orm_active_enums::Gender> for Gender {
    fn from(g: sea_orm_active_enums::Gender) -> Self {
        match g {
            sea_orm_active_enums::Gender::M => Gender::M,
            sea_orm_active_enums::Gender::F => Gender::F,
        }
    }
}

#[derive(Serialize, Deserialize, JsonSchema, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    Home,
    Away,
}

impl From<sea_orm_active_enums::WinnerSide> for Side {
    fn from(side: sea_orm_active_enums::WinnerSide) -> Self {
        match side {
            sea_orm_active_enums::WinnerSide::Home => Side::Home,
            sea_orm_active_enums::WinnerSide::Away => Side::Away,
        }
    }
}

/// One row of the player rankings board.
#[derive(Serialize, Deserialize, JsonSchema, Debug, Clone, PartialEq)]
pub struct PlayerRow {
    pub player_id: i32,
    pub name: String,
    pub gender: Gender,
    pub team: String,
    pub team_id: Option<i32>,
    pub points: i32,
    pub matches: usize,
}

/// One row of the team leaderboard. Rank is purely positional.
#[derive(Serialize, Deserialize, JsonSchema, Debug, Clone, PartialEq)]
pub struct Standing {
    pub rank: u32,
    pub team_id: i32,
    pub name: String,
    pub points: i32,
}

#[derive(Serialize, Deserialize, JsonSchema, Debug, Clone, PartialEq)]
pub struct MatchSide {
    pub player_id: i32,
    pub name: String,
    pub team_id: Option<i32>,
    pub team_name: Option<String>,
    /// Formatted set scores, only present for finished matches.
    pub score: Option<String>,
    pub points: i32,
}

/// Display-ready match, normalized from the stored row. Both players carry
/// their team affiliation so the filters can work on the card alone.
#[derive(Serialize, Deserialize, JsonSchema, Debug, Clone, PartialEq)]
pub struct MatchCard {
    pub id: i32,
    pub tournament: String,
    pub round: String,
    pub starts_at: DateTimeWithTimeZone,
    pub home: MatchSide,
    pub away: MatchSide,
    pub points_at_stake: i32,
    pub winner: Option<Side>,
    pub status_description: Option<String>,
}

impl MatchCard {
    /// Card for a match that has not been played yet: no scores, but the
    /// points the winner would take from the reference table.
    pub fn upcoming(
        m: &tennis_match::Model,
        teams: &HashMap<i32, TeamRef>,
        stakes: &StakeTable,
    ) -> Self {
        Self {
            points_at_stake: stakes.points_for_match(m),
            ..Self::base(m, teams)
        }
    }

    /// Card for a finished match: formatted set scores per side and the
    /// points each player actually earned.
    pub fn recent(
        m: &tennis_match::Model,
        teams: &HashMap<i32, TeamRef>,
        points: &HashMap<(i32, i32), i32>,
    ) -> Self {
        let mut card = Self::base(m, teams);
        card.home.score = Some(score::set_line(m, score::PlayerSlot::Home));
        card.away.score = Some(score::set_line(m, score::PlayerSlot::Away));
        card.home.points = points.get(&(m.id, m.home_player_id)).copied().unwrap_or(0);
        card.away.points = points.get(&(m.id, m.away_player_id)).copied().unwrap_or(0);
        card.winner = m.winner.map(Side::from);
        card
    }

    fn base(m: &tennis_match::Model, teams: &HashMap<i32, TeamRef>) -> Self {
        Self {
            id: m.id,
            tournament: m
                .tournament_name
                .clone()
                .unwrap_or_else(|| "Unknown Tournament".to_string()),
            round: m.round_name.clone().unwrap_or_else(|| "TBD".to_string()),
            starts_at: m.starts_at,
            home: Self::side(m.home_player_id, m.home_player_name.as_deref(), teams),
            away: Self::side(m.away_player_id, m.away_player_name.as_deref(), teams),
            points_at_stake: 0,
            winner: None,
            status_description: m.status_description.clone(),
        }
    }

    fn side(player_id: i32, name: Option<&str>, teams: &HashMap<i32, TeamRef>) -> MatchSide {
        let team = teams.get(&player_id);
        MatchSide {
            player_id,
            name: name.unwrap_or("Unknown Player").to_string(),
            team_id: team.map(|t| t.team_id),
            team_name: team.map(|t| t.team_name.clone()),
            score: None,
            points: 0,
        }
    }
}

/// A player on someone's roster, as shown on the team page.
#[derive(Serialize, Deserialize, JsonSchema, Debug, Clone, PartialEq)]
pub struct RosterEntry {
    pub player_id: i32,
    pub name: String,
    pub gender: Gender,
    pub added_at: DateTimeWithTimeZone,
}

#[derive(Serialize, Deserialize, JsonSchema, Debug, Clone, PartialEq)]
pub struct TeamRoster {
    pub team_id: i32,
    pub name: String,
    pub current_points: i32,
    pub players: Vec<RosterEntry>,
}

#[derive(Serialize, Deserialize, JsonSchema, Debug, Clone, PartialEq)]
pub struct TeamInfo {
    pub id: i32,
    pub name: String,
    pub current_points: i32,
}

impl From<entity::team::Model> for TeamInfo {
    fn from(t: entity::team::Model) -> Self {
        Self {
            id: t.id,
            name: t.name,
            current_points: t.current_points,
        }
    }
}

#[derive(Deserialize, JsonSchema, Debug, Clone)]
pub struct CreateTeam {
    pub name: String,
}
