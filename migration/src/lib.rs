pub use sea_orm_migration::prelude::*;
mod enums;
mod m20250301_000001_create_players_and_teams;
mod m20250301_000002_create_matches_and_points;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20250301_000001_create_players_and_teams::Migration),
            Box::new(m20250301_000002_create_matches_and_points::Migration),
        ]
    }
}
