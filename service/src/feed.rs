use entity::prelude::*;
use entity::sea_orm_active_enums::{MatchStatus, WinnerSide};
use entity::*;

use chrono::DateTime;
use itertools::Itertools;
use log::{error, info, warn};

use sea_orm::entity::prelude::*;
use sea_orm::sea_query::OnConflict;
use sea_orm::ActiveValue::Set;
use sea_orm::{DatabaseConnection, DbErr, NotSet, TransactionTrait};

use crate::dto::score::PlayerSlot;
use crate::dto::{MatchRow, RankingFeed};
use crate::error::GenericError;
use crate::query::membership_rows;
use crate::scoring;

/// Pulls the current match list from the external feed and mirrors it
/// into the store. Finished matches with a known winner also get their
/// points awarded, and team totals are refreshed afterwards.
pub async fn sync_matches(db: &DatabaseConnection, url: &str) -> Result<usize, GenericError> {
    let rows: Vec<MatchRow> = reqwest::get(url)
        .await
        .map_err(|e| {
            error!("Error while fetching match feed: {:#?}", e);
            GenericError::FeedError("Unable to reach match feed")
        })?
        .json()
        .await
        .map_err(|e| {
            error!("Error while decoding match feed: {:#?}", e);
            GenericError::FeedError("Match feed returned malformed data")
        })?;

    let txn = db.begin().await.map_err(|e| {
        error!("Error while starting feed transaction: {:#?}", e);
        GenericError::DatabaseError("Unable to save matches")
    })?;

    let mut synced = 0;
    for row in &rows {
        let Some(starts_at) = DateTime::from_timestamp(row.start_timestamp, 0) else {
            warn!(
                "Skipping match {} with invalid start timestamp {}",
                row.match_id, row.start_timestamp
            );
            continue;
        };
        upsert_match(&txn, row, starts_at.fixed_offset()).await?;
        synced += 1;
    }

    award_points(&txn).await?;
    refresh_team_points(&txn).await?;

    txn.commit().await.map_err(|e| {
        error!("Error while committing feed sync: {:#?}", e);
        GenericError::DatabaseError("Unable to save matches")
    })?;
    info!("Synced {} matches from feed", synced);
    Ok(synced)
}

/// The ranking lists the upstream publishes, one endpoint per tour.
const TOURS: [&str; 2] = ["atp", "wta"];

/// Mirrors the upstream ranking lists into the players table. This is the
/// only write path for players: every player the app knows about arrives
/// through a ranking list, complete with rank and ranking points.
pub async fn sync_players(db: &DatabaseConnection, base_url: &str) -> Result<usize, GenericError> {
    let mut synced = 0;
    for tour in TOURS {
        let feed: RankingFeed = reqwest::get(format!("{base_url}/{tour}"))
            .await
            .map_err(|e| {
                error!("Error while fetching {} rankings: {:#?}", tour, e);
                GenericError::FeedError("Unable to reach rankings feed")
            })?
            .json()
            .await
            .map_err(|e| {
                error!("Error while decoding {} rankings: {:#?}", tour, e);
                GenericError::FeedError("Rankings feed returned malformed data")
            })?;

        for row in &feed.rankings {
            let model = player::ActiveModel {
                player_id: Set(row.player.id),
                name: Set(row.player.name.clone()),
                gender: Set(row.gender(tour)),
                rank: Set(Some(row.ranking)),
                ranking_points: Set(row.points),
                country: Set(row.country()),
                tour: Set(Some(tour.to_string())),
            };
            Player::insert(model)
                .on_conflict(
                    OnConflict::column(player::Column::PlayerId)
                        .update_columns([
                            player::Column::Name,
                            player::Column::Gender,
                            player::Column::Rank,
                            player::Column::RankingPoints,
                            player::Column::Country,
                            player::Column::Tour,
                        ])
                        .to_owned(),
                )
                .exec(db)
                .await
                .map_err(|e| {
                    error!("Error while upserting player {}: {:#?}", row.player.id, e);
                    GenericError::DatabaseError("Unable to save player")
                })?;
            synced += 1;
        }
    }
    info!("Synced {} ranked players from feed", synced);
    Ok(synced)
}

async fn upsert_match(
    db: &impl ConnectionTrait,
    row: &MatchRow,
    starts_at: DateTimeWithTimeZone,
) -> Result<(), GenericError> {
    use tennis_match::Column;

    let home = PlayerSlot::Home.feed_prefix();
    let away = PlayerSlot::Away.feed_prefix();
    let model = tennis_match::ActiveModel {
        id: Set(row.match_id),
        tournament_name: Set(row.tournament_name.clone()),
        category_slug: Set(row.category_slug.clone()),
        tournament_type: Set(row.tournament_type.clone()),
        round_name: Set(row.round_name.clone()),
        round_type: Set(row.round_type.clone()),
        starts_at: Set(starts_at),
        status: Set(row.status()),
        status_description: Set(row.status_description.clone()),
        winner: Set(row.winner()),
        home_player_id: Set(row.player1_id),
        home_player_name: Set(row.player1_name.clone()),
        away_player_id: Set(row.player2_id),
        away_player_name: Set(row.player2_name.clone()),
        home_set1_score: Set(row.set_score(home, 1)),
        home_set2_score: Set(row.set_score(home, 2)),
        home_set3_score: Set(row.set_score(home, 3)),
        home_set4_score: Set(row.set_score(home, 4)),
        home_set5_score: Set(row.set_score(home, 5)),
        home_set1_tiebreak: Set(row.set_tiebreak(home, 1)),
        home_set2_tiebreak: Set(row.set_tiebreak(home, 2)),
        home_set3_tiebreak: Set(row.set_tiebreak(home, 3)),
        home_set4_tiebreak: Set(row.set_tiebreak(home, 4)),
        home_set5_tiebreak: Set(row.set_tiebreak(home, 5)),
        away_set1_score: Set(row.set_score(away, 1)),
        away_set2_score: Set(row.set_score(away, 2)),
        away_set3_score: Set(row.set_score(away, 3)),
        away_set4_score: Set(row.set_score(away, 4)),
        away_set5_score: Set(row.set_score(away, 5)),
        away_set1_tiebreak: Set(row.set_tiebreak(away, 1)),
        away_set2_tiebreak: Set(row.set_tiebreak(away, 2)),
        away_set3_tiebreak: Set(row.set_tiebreak(away, 3)),
        away_set4_tiebreak: Set(row.set_tiebreak(away, 4)),
        away_set5_tiebreak: Set(row.set_tiebreak(away, 5)),
    };

    TennisMatch::insert(model)
        .on_conflict(
            OnConflict::column(Column::Id)
                .update_columns([
                    Column::TournamentName,
                    Column::CategorySlug,
                    Column::TournamentType,
                    Column::RoundName,
                    Column::RoundType,
                    Column::StartsAt,
                    Column::Status,
                    Column::StatusDescription,
                    Column::Winner,
                    Column::HomePlayerName,
                    Column::AwayPlayerName,
                    Column::HomeSet1Score,
                    Column::HomeSet2Score,
                    Column::HomeSet3Score,
                    Column::HomeSet4Score,
                    Column::HomeSet5Score,
                    Column::HomeSet1Tiebreak,
                    Column::HomeSet2Tiebreak,
                    Column::HomeSet3Tiebreak,
                    Column::HomeSet4Tiebreak,
                    Column::HomeSet5Tiebreak,
                    Column::AwaySet1Score,
                    Column::AwaySet2Score,
                    Column::AwaySet3Score,
                    Column::AwaySet4Score,
                    Column::AwaySet5Score,
                    Column::AwaySet1Tiebreak,
                    Column::AwaySet2Tiebreak,
                    Column::AwaySet3Tiebreak,
                    Column::AwaySet4Tiebreak,
                    Column::AwaySet5Tiebreak,
                ])
                .to_owned(),
        )
        .exec(db)
        .await
        .map_err(|e| {
            error!("Error while upserting match {}: {:#?}", row.match_id, e);
            GenericError::DatabaseError("Unable to save match")
        })?;
    Ok(())
}

/// Awards points for every finished match with a decided winner. Awards
/// are idempotent, a match pays out to a player at most once.
async fn award_points(db: &impl ConnectionTrait) -> Result<(), GenericError> {
    let references = crate::query::get_points_reference(db).await?;
    let stakes = scoring::StakeTable::from_rows(&references);

    let finished = TennisMatch::find()
        .filter(
            tennis_match::Column::Status
                .eq(MatchStatus::Finished)
                .and(tennis_match::Column::Winner.is_not_null()),
        )
        .all(db)
        .await
        .map_err(|e| {
            error!("Error while getting finished matches: {:#?}", e);
            GenericError::DatabaseError("Unable to load matches")
        })?;

    for m in finished {
        let winner_id = match m.winner {
            Some(WinnerSide::Home) => m.home_player_id,
            Some(WinnerSide::Away) => m.away_player_id,
            None => continue,
        };
        let award = match_points::ActiveModel {
            id: NotSet,
            match_id: Set(m.id),
            player_id: Set(winner_id),
            points_earned: Set(Some(stakes.points_for_match(&m))),
        };
        let res = MatchPoints::insert(award)
            .on_conflict(
                OnConflict::columns([
                    match_points::Column::MatchId,
                    match_points::Column::PlayerId,
                ])
                .do_nothing()
                .to_owned(),
            )
            .exec(db)
            .await;
        match res {
            Ok(_) | Err(DbErr::RecordNotInserted) => (),
            Err(e) => {
                error!("Error while awarding points for match {}: {:#?}", m.id, e);
                return Err(GenericError::DatabaseError("Unable to award points"));
            }
        }
    }
    Ok(())
}

/// Recomputes every team's running total from the points its rostered
/// players have earned so far.
async fn refresh_team_points(db: &impl ConnectionTrait) -> Result<(), GenericError> {
    let teams = scoring::membership_index(membership_rows(db).await?);
    let points = MatchPoints::find().all(db).await.map_err(|e| {
        error!("Error while getting match points: {:#?}", e);
        GenericError::DatabaseError("Unable to load match points")
    })?;
    let totals = scoring::player_totals(&points);

    let mut team_totals: std::collections::HashMap<i32, i32> = std::collections::HashMap::new();
    for (player_id, team) in &teams {
        let total = totals.get(player_id).copied().unwrap_or_default();
        *team_totals.entry(team.team_id).or_default() += total.points;
    }

    for team in Team::find().all(db).await.map_err(|e| {
        error!("Error while getting teams: {:#?}", e);
        GenericError::DatabaseError("Unable to load teams")
    })? {
        let current = team_totals.get(&team.id).copied().unwrap_or(0);
        if current != team.current_points {
            let mut active: team::ActiveModel = team.into();
            active.current_points = Set(current);
            active.update(db).await.map_err(|e| {
                error!("Error while updating team points: {:#?}", e);
                GenericError::DatabaseError("Unable to update team points")
            })?;
        }
    }
    Ok(())
}
