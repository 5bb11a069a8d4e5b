use entity::prelude::*;
use entity::*;

use chrono::Utc;
use log::error;

use sea_orm::entity::prelude::*;
use sea_orm::ActiveValue::Set;
use sea_orm::{DatabaseConnection, NotSet, PaginatorTrait, SqlErr, TransactionTrait};

use crate::dto::CreateTeam;
use crate::error::{GenericError, RosterError, TeamError};

/// A roster never holds more than this many players.
pub const ROSTER_CAP: u64 = 10;

impl CreateTeam {
    /// Creates a team for the given user. The owner column is unique, so a
    /// second attempt by the same user fails cleanly instead of doubling up.
    pub async fn insert(
        self,
        db: &DatabaseConnection,
        owner: &str,
    ) -> Result<team::Model, GenericError> {
        let team = team::ActiveModel {
            id: NotSet,
            name: Set(self.name),
            owner: Set(owner.to_string()),
            current_points: Set(0),
        };
        team.insert(db).await.map_err(|e| {
            if matches!(e.sql_err(), Some(SqlErr::UniqueConstraintViolation(_))) {
                TeamError::AlreadyOwnsTeam("User already owns a team").into()
            } else {
                error!("Error while creating team: {:#?}", e);
                GenericError::DatabaseError("Unable to create team")
            }
        })
    }
}

/// Adds a player to a team's roster. The cap and duplicate checks run
/// inside one transaction so concurrent adds cannot slip past the limit,
/// and the unique index on (team, player) backstops the duplicate check.
pub async fn add_to_roster(
    db: &DatabaseConnection,
    team_id: i32,
    player_id: i32,
) -> Result<(), GenericError> {
    let txn = db.begin().await.map_err(|e| {
        error!("Error while starting transaction: {:#?}", e);
        GenericError::DatabaseError("Unable to update roster")
    })?;

    Player::find_by_id(player_id)
        .one(&txn)
        .await
        .map_err(|e| {
            error!("Error while checking player: {:#?}", e);
            GenericError::DatabaseError("Unable to update roster")
        })?
        .ok_or(RosterError::PlayerNotFound("Player not found"))?;

    let roster_size = TeamPlayer::find()
        .filter(team_player::Column::TeamId.eq(team_id))
        .count(&txn)
        .await
        .map_err(|e| {
            error!("Error while counting roster: {:#?}", e);
            GenericError::DatabaseError("Unable to update roster")
        })?;
    if roster_size >= ROSTER_CAP {
        return Err(RosterError::TeamFull("Team roster is full").into());
    }

    let membership = team_player::ActiveModel {
        id: NotSet,
        team_id: Set(team_id),
        player_id: Set(player_id),
        added_at: Set(Utc::now().fixed_offset()),
    };
    membership.insert(&txn).await.map_err(|e| {
        if matches!(e.sql_err(), Some(SqlErr::UniqueConstraintViolation(_))) {
            RosterError::AlreadyRostered("Player is already on the roster").into()
        } else {
            error!("Error while adding to roster: {:#?}", e);
            GenericError::DatabaseError("Unable to update roster")
        }
    })?;

    txn.commit().await.map_err(|e| {
        error!("Error while committing roster change: {:#?}", e);
        GenericError::DatabaseError("Unable to update roster")
    })
}

/// Drops a player from a team's roster. Removing a player who is not on
/// the roster is a no-op.
pub async fn remove_from_roster(
    db: &impl ConnectionTrait,
    team_id: i32,
    player_id: i32,
) -> Result<(), GenericError> {
    TeamPlayer::delete_many()
        .filter(
            team_player::Column::TeamId
                .eq(team_id)
                .and(team_player::Column::PlayerId.eq(player_id)),
        )
        .exec(db)
        .await
        .map_err(|e| {
            error!("Error while removing from roster: {:#?}", e);
            GenericError::DatabaseError("Unable to update roster")
        })?;
    Ok(())
}
