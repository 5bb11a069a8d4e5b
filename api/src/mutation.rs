use rocket::serde::json::Json;
use rocket::State;
use rocket_okapi::openapi;

use sea_orm::DatabaseConnection;

use service::dto::{CreateTeam, TeamInfo};
use service::error::{GenericError, TeamError};

use crate::guard::UserId;

#[openapi(tag = "Teams")]
#[post("/team", format = "json", data = "<team>")]
pub(crate) async fn create_team(
    db: &State<DatabaseConnection>,
    user: UserId,
    team: Json<CreateTeam>,
) -> Result<Json<TeamInfo>, GenericError> {
    let team = team.into_inner().insert(db.inner(), &user.0).await?;
    Ok(Json(team.into()))
}

#[openapi(tag = "Teams")]
#[put("/team/roster/<player_id>")]
pub(crate) async fn add_to_roster(
    db: &State<DatabaseConnection>,
    user: UserId,
    player_id: i32,
) -> Result<(), GenericError> {
    let team = own_team(db.inner(), &user).await?;
    service::mutation::add_to_roster(db.inner(), team, player_id).await
}

#[openapi(tag = "Teams")]
#[delete("/team/roster/<player_id>")]
pub(crate) async fn remove_from_roster(
    db: &State<DatabaseConnection>,
    user: UserId,
    player_id: i32,
) -> Result<(), GenericError> {
    let team = own_team(db.inner(), &user).await?;
    service::mutation::remove_from_roster(db.inner(), team, player_id).await
}

async fn own_team(db: &DatabaseConnection, user: &UserId) -> Result<i32, GenericError> {
    service::query::get_team_of_user(db, &user.0)
        .await?
        .map(|t| t.id)
        .ok_or_else(|| TeamError::NotFound("You do not have a team yet").into())
}
