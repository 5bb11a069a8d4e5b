use rocket::serde::{Deserialize, Serialize};
use rocket_okapi::okapi::schemars::{self, JsonSchema};
use strum_macros::{Display, EnumString};

use super::MatchCard;

/// The four match-list filters the UI offers.
#[derive(
    Serialize, Deserialize, JsonSchema, Debug, Clone, Copy, PartialEq, Eq, Display, EnumString,
)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum MatchFilter {
    All,
    MyTeam,
    HeadToHead,
    AnyTeam,
}

impl MatchFilter {
    /// Unrecognized filter names fall back to showing everything rather
    /// than failing the request.
    pub fn from_name(name: &str) -> Self {
        name.parse().unwrap_or(MatchFilter::All)
    }

    /// Applies the filter to a list of cards. `own_team` is the caller's
    /// team id; a caller without a team sees the unfiltered list for
    /// `myteam` (long-standing behaviour the UI relies on).
    pub fn apply(self, own_team: Option<i32>, matches: Vec<MatchCard>) -> Vec<MatchCard> {
        match self {
            MatchFilter::All => matches,
            MatchFilter::MyTeam => match own_team {
                None => matches,
                Some(team_id) => matches
                    .into_iter()
                    .filter(|m| {
                        m.home.team_id == Some(team_id) || m.away.team_id == Some(team_id)
                    })
                    .collect(),
            },
            MatchFilter::HeadToHead => matches
                .into_iter()
                .filter(|m| {
                    m.home.team_id.is_some()
                        && m.away.team_id.is_some()
                        && m.home.team_id != m.away.team_id
                })
                .collect(),
            MatchFilter::AnyTeam => matches
                .into_iter()
                .filter(|m| m.home.team_id.is_some() || m.away.team_id.is_some())
                .collect(),
        }
    }
}
