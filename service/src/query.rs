use std::cmp::Reverse;

use entity::prelude::*;
use entity::sea_orm_active_enums::MatchStatus;
use entity::*;

use itertools::Itertools;
use log::error;

use sea_orm::entity::prelude::*;
use sea_orm::{Order, QueryOrder, QuerySelect};

use crate::dto::{MatchCard, MatchFilter, PlayerRow, RosterEntry, Standing, TeamRoster};
use crate::error::{GenericError, TeamError};
use crate::scoring;

/// The original clients cap every match list at this many rows.
const MATCH_LIST_LIMIT: u64 = 50;

pub async fn get_players(db: &impl ConnectionTrait) -> Result<Vec<player::Model>, GenericError> {
    Player::find().all(db).await.map_err(|e| {
        error!("Error while getting players: {:#?}", e);
        GenericError::DatabaseError("Unable to load players")
    })
}

/// Membership rows as (player id, team id, team name) triples. Rows whose
/// team has vanished still count as rostered, with a placeholder name.
pub async fn membership_rows(
    db: &impl ConnectionTrait,
) -> Result<Vec<(i32, i32, String)>, GenericError> {
    let rows = TeamPlayer::find()
        .find_also_related(Team)
        .all(db)
        .await
        .map_err(|e| {
            error!("Error while getting memberships: {:#?}", e);
            GenericError::DatabaseError("Unable to load team memberships")
        })?;

    Ok(rows
        .into_iter()
        .map(|(membership, team)| {
            (
                membership.player_id,
                membership.team_id,
                team.map(|t| t.name).unwrap_or_else(|| "Unknown Team".to_string()),
            )
        })
        .collect_vec())
}

/// The rankings board: every known player with their team affiliation,
/// total points earned and distinct matches played, best first. Players
/// without any points rows show up with zeros, not gaps.
pub async fn get_player_board(db: &impl ConnectionTrait) -> Result<Vec<PlayerRow>, GenericError> {
    let players = get_players(db).await?;
    let teams = scoring::membership_index(membership_rows(db).await?);
    let points = MatchPoints::find().all(db).await.map_err(|e| {
        error!("Error while getting match points: {:#?}", e);
        GenericError::DatabaseError("Unable to load match points")
    })?;
    let totals = scoring::player_totals(&points);

    let mut rows = players
        .into_iter()
        .map(|p| {
            let team = teams.get(&p.player_id);
            let total = totals.get(&p.player_id).copied().unwrap_or_default();
            PlayerRow {
                player_id: p.player_id,
                name: p.name,
                gender: p.gender.into(),
                team: team
                    .map(|t| t.team_name.clone())
                    .unwrap_or_else(|| "Free Agent".to_string()),
                team_id: team.map(|t| t.team_id),
                points: total.points,
                matches: total.matches,
            }
        })
        .collect_vec();
    rows.sort_by_key(|r| Reverse(r.points));
    Ok(rows)
}

pub async fn get_teams(db: &impl ConnectionTrait) -> Result<Vec<team::Model>, GenericError> {
    Team::find()
        .order_by_desc(team::Column::CurrentPoints)
        .all(db)
        .await
        .map_err(|e| {
            error!("Error while getting teams: {:#?}", e);
            GenericError::DatabaseError("Unable to load teams")
        })
}

/// Teams ranked by their current points. Ties keep the store's order.
pub async fn get_leaderboard(db: &impl ConnectionTrait) -> Result<Vec<Standing>, GenericError> {
    Ok(scoring::rank_teams(get_teams(db).await?))
}

pub async fn get_points_reference(
    db: &impl ConnectionTrait,
) -> Result<Vec<points_reference::Model>, GenericError> {
    PointsReference::find().all(db).await.map_err(|e| {
        error!("Error while getting points reference: {:#?}", e);
        GenericError::DatabaseError("Unable to load points reference")
    })
}

pub async fn get_points_earned(
    db: &impl ConnectionTrait,
    match_ids: Vec<i32>,
) -> Result<Vec<match_points::Model>, GenericError> {
    MatchPoints::find()
        .filter(match_points::Column::MatchId.is_in(match_ids))
        .all(db)
        .await
        .map_err(|e| {
            error!("Error while getting match points: {:#?}", e);
            GenericError::DatabaseError("Unable to load match points")
        })
}

pub async fn get_team_of_user(
    db: &impl ConnectionTrait,
    owner: &str,
) -> Result<Option<team::Model>, GenericError> {
    Team::find()
        .filter(team::Column::Owner.eq(owner))
        .one(db)
        .await
        .map_err(|e| {
            error!("Error while getting team of user: {:#?}", e);
            GenericError::DatabaseError("Unable to load team")
        })
}

pub async fn get_team_roster(
    db: &impl ConnectionTrait,
    team_id: i32,
) -> Result<TeamRoster, GenericError> {
    let team = Team::find_by_id(team_id)
        .one(db)
        .await
        .map_err(|_| GenericError::DatabaseError("Unable to load team"))?
        .ok_or(TeamError::NotFound("Team not found"))?;

    let members = TeamPlayer::find()
        .filter(team_player::Column::TeamId.eq(team_id))
        .find_also_related(Player)
        .all(db)
        .await
        .map_err(|e| {
            error!("Error while getting roster: {:#?}", e);
            GenericError::DatabaseError("Unable to load roster")
        })?;

    let players = members
        .into_iter()
        .filter_map(|(membership, player)| {
            player.map(|p| RosterEntry {
                player_id: p.player_id,
                name: p.name,
                gender: p.gender.into(),
                added_at: membership.added_at,
            })
        })
        .collect_vec();

    Ok(TeamRoster {
        team_id: team.id,
        name: team.name,
        current_points: team.current_points,
        players,
    })
}

/// Matches that have not started yet, soonest first, annotated with the
/// points at stake from the reference table.
pub async fn get_upcoming_matches(
    db: &impl ConnectionTrait,
    own_team: Option<i32>,
    filter: MatchFilter,
) -> Result<Vec<MatchCard>, GenericError> {
    let matches =
        find_matches_with_rostered_players(db, MatchStatus::NotStarted, Order::Asc).await?;
    if matches.is_empty() {
        return Ok(Vec::new());
    }

    let references = get_points_reference(db).await?;
    let stakes = scoring::StakeTable::from_rows(&references);
    let teams = scoring::membership_index(membership_rows(db).await?);

    let cards = matches
        .iter()
        .map(|m| MatchCard::upcoming(m, &teams, &stakes))
        .collect_vec();
    Ok(filter.apply(own_team, cards))
}

/// Finished matches, latest first, with formatted set scores and the
/// points each player took home.
pub async fn get_recent_matches(
    db: &impl ConnectionTrait,
    own_team: Option<i32>,
    filter: MatchFilter,
) -> Result<Vec<MatchCard>, GenericError> {
    let matches = find_matches_with_rostered_players(db, MatchStatus::Finished, Order::Desc).await?;
    if matches.is_empty() {
        return Ok(Vec::new());
    }

    let match_ids = matches.iter().map(|m| m.id).collect_vec();
    let points_rows = get_points_earned(db, match_ids).await?;
    let points = scoring::match_points_map(&points_rows);
    let teams = scoring::membership_index(membership_rows(db).await?);

    let cards = matches
        .iter()
        .map(|m| MatchCard::recent(m, &teams, &points))
        .collect_vec();
    Ok(filter.apply(own_team, cards))
}

/// Both match lists only ever show matches involving at least one player
/// who is on a team; the rest of the tour is noise here.
async fn find_matches_with_rostered_players(
    db: &impl ConnectionTrait,
    status: MatchStatus,
    order: Order,
) -> Result<Vec<tennis_match::Model>, GenericError> {
    let rostered = TeamPlayer::find().all(db).await.map_err(|e| {
        error!("Error while getting team players: {:#?}", e);
        GenericError::DatabaseError("Unable to load team players")
    })?;
    let player_ids = rostered.iter().map(|m| m.player_id).collect_vec();
    if player_ids.is_empty() {
        return Ok(Vec::new());
    }

    let query = TennisMatch::find()
        .filter(tennis_match::Column::Status.eq(status))
        .filter(
            tennis_match::Column::HomePlayerId
                .is_in(player_ids.clone())
                .or(tennis_match::Column::AwayPlayerId.is_in(player_ids)),
        )
        .order_by(tennis_match::Column::StartsAt, order)
        .limit(MATCH_LIST_LIMIT);

    query.all(db).await.map_err(|e| {
        error!("Error while getting matches: {:#?}", e);
        GenericError::DatabaseError("Unable to load matches")
    })
}
