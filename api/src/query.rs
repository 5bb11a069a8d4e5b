use rocket::serde::json::Json;
use rocket::State;
use rocket_okapi::openapi;

use sea_orm::DatabaseConnection;

use service::dto::{MatchCard, MatchFilter, PlayerRow, Standing, TeamRoster};
use service::error::{GenericError, TeamError};

use crate::guard::UserId;

/// Every known player with team affiliation and point totals, best first.
#[openapi(tag = "Players")]
#[get("/players")]
pub(crate) async fn get_players(
    db: &State<DatabaseConnection>,
) -> Result<Json<Vec<PlayerRow>>, GenericError> {
    service::query::get_player_board(db.inner()).await.map(Json)
}

#[openapi(tag = "Teams")]
#[get("/leaderboard")]
pub(crate) async fn get_leaderboard(
    db: &State<DatabaseConnection>,
) -> Result<Json<Vec<Standing>>, GenericError> {
    service::query::get_leaderboard(db.inner()).await.map(Json)
}

#[openapi(tag = "Matches")]
#[get("/matches/upcoming?<filter>")]
pub(crate) async fn get_upcoming_matches(
    db: &State<DatabaseConnection>,
    user: Option<UserId>,
    filter: Option<String>,
) -> Result<Json<Vec<MatchCard>>, GenericError> {
    let own_team = own_team_id(db.inner(), user.as_ref()).await?;
    let filter = MatchFilter::from_name(filter.as_deref().unwrap_or("all"));
    service::query::get_upcoming_matches(db.inner(), own_team, filter)
        .await
        .map(Json)
}

#[openapi(tag = "Matches")]
#[get("/matches/recent?<filter>")]
pub(crate) async fn get_recent_matches(
    db: &State<DatabaseConnection>,
    user: Option<UserId>,
    filter: Option<String>,
) -> Result<Json<Vec<MatchCard>>, GenericError> {
    let own_team = own_team_id(db.inner(), user.as_ref()).await?;
    let filter = MatchFilter::from_name(filter.as_deref().unwrap_or("all"));
    service::query::get_recent_matches(db.inner(), own_team, filter)
        .await
        .map(Json)
}

/// The caller's own team with its full roster.
#[openapi(tag = "Teams")]
#[get("/my-team")]
pub(crate) async fn get_my_team(
    db: &State<DatabaseConnection>,
    user: UserId,
) -> Result<Json<TeamRoster>, GenericError> {
    let team = service::query::get_team_of_user(db.inner(), &user.0)
        .await?
        .ok_or(TeamError::NotFound("You do not have a team yet"))?;
    service::query::get_team_roster(db.inner(), team.id)
        .await
        .map(Json)
}

/// Anonymous callers simply have no team; the filters treat that the
/// same way as a signed-in user who has not created one.
async fn own_team_id(
    db: &DatabaseConnection,
    user: Option<&UserId>,
) -> Result<Option<i32>, GenericError> {
    match user {
        Some(user) => Ok(service::query::get_team_of_user(db, &user.0)
            .await?
            .map(|t| t.id)),
        None => Ok(None),
    }
}
