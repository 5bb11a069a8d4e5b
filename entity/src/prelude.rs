pub use super::match_points::Entity as MatchPoints;
pub use super::player::Entity as Player;
pub use super::points_reference::Entity as PointsReference;
pub use super::team::Entity as Team;
pub use super::team_player::Entity as TeamPlayer;
pub use super::tennis_match::Entity as TennisMatch;
