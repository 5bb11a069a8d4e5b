use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "points_reference")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub category_slug: String,
    pub tournament_type: String,
    pub round_name: String,
    pub round_type: String,
    pub points_for_win: i32,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
