use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "match_points")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub match_id: i32,
    pub player_id: i32,
    pub points_earned: Option<i32>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::player::Entity",
        from = "Column::PlayerId",
        to = "super::player::Column::PlayerId",
        on_update = "NoAction",
        on_delete = "Cascade"
    )]
    Player,
    #[sea_orm(
        belongs_to = "super::tennis_match::Entity",
        from = "Column::MatchId",
        to = "super::tennis_match::Column::Id",
        on_update = "NoAction",
        on_delete = "Cascade"
    )]
    TennisMatch,
}

impl Related<super::player::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Player.def()
    }
}

impl Related<super::tennis_match::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::TennisMatch.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
