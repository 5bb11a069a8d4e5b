pub mod prelude;

pub mod match_points;
pub mod player;
pub mod points_reference;
pub mod sea_orm_active_enums;
pub mod team;
pub mod team_player;
pub mod tennis_match;
