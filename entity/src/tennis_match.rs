use super::sea_orm_active_enums::{MatchStatus, WinnerSide};
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "tennis_matches")]
pub struct Model {
    /// Upstream match id.
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: i32,
    pub tournament_name: Option<String>,
    pub category_slug: Option<String>,
    pub tournament_type: Option<String>,
    pub round_name: Option<String>,
    pub round_type: Option<String>,
    pub starts_at: DateTimeWithTimeZone,
    pub status: MatchStatus,
    pub status_description: Option<String>,
    pub winner: Option<WinnerSide>,
    pub home_player_id: i32,
    pub home_player_name: Option<String>,
    pub away_player_id: i32,
    pub away_player_name: Option<String>,
    pub home_set1_score: Option<i32>,
    pub home_set1_tiebreak: Option<i32>,
    pub home_set2_score: Option<i32>,
    pub home_set2_tiebreak: Option<i32>,
    pub home_set3_score: Option<i32>,
    pub home_set3_tiebreak: Option<i32>,
    pub home_set4_score: Option<i32>,
    pub home_set4_tiebreak: Option<i32>,
    pub home_set5_score: Option<i32>,
    pub home_set5_tiebreak: Option<i32>,
    pub away_set1_score: Option<i32>,
    pub away_set1_tiebreak: Option<i32>,
    pub away_set2_score: Option<i32>,
    pub away_set2_tiebreak: Option<i32>,
    pub away_set3_score: Option<i32>,
    pub away_set3_tiebreak: Option<i32>,
    pub away_set4_score: Option<i32>,
    pub away_set4_tiebreak: Option<i32>,
    pub away_set5_score: Option<i32>,
    pub away_set5_tiebreak: Option<i32>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::match_points::Entity")]
    MatchPoints,
}

impl Related<super::match_points::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::MatchPoints.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
