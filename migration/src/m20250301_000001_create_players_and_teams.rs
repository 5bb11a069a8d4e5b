use crate::enums::*;
use sea_orm::Iterable;
use sea_orm_migration::prelude::*;

use crate::extension::postgres::Type;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_type(
                Type::create()
                    .as_enum(Gender::Table)
                    .values(Gender::iter().skip(1))
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(Player::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Player::PlayerId)
                            .integer()
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Player::Name).string().not_null())
                    .col(
                        ColumnDef::new(Player::Gender)
                            .enumeration(Gender::Table, Gender::iter().skip(1))
                            .not_null(),
                    )
                    .col(ColumnDef::new(Player::Rank).integer())
                    .col(ColumnDef::new(Player::RankingPoints).integer())
                    .col(ColumnDef::new(Player::Country).string())
                    .col(ColumnDef::new(Player::Tour).string())
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(Team::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Team::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Team::Name).string().not_null())
                    // One team per user.
                    .col(ColumnDef::new(Team::Owner).string().unique_key().not_null())
                    .col(
                        ColumnDef::new(Team::CurrentPoints)
                            .integer()
                            .not_null()
                            .default(0),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(TeamPlayer::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(TeamPlayer::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(TeamPlayer::TeamId).integer().not_null())
                    .col(ColumnDef::new(TeamPlayer::PlayerId).integer().not_null())
                    .col(
                        ColumnDef::new(TeamPlayer::AddedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_team_players_team")
                            .from(TeamPlayer::Table, TeamPlayer::TeamId)
                            .to(Team::Table, Team::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_team_players_player")
                            .from(TeamPlayer::Table, TeamPlayer::PlayerId)
                            .to(Player::Table, Player::PlayerId)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // Backstop for the roster add transaction: a player can only appear
        // once per team no matter how the insert races.
        manager
            .create_index(
                Index::create()
                    .name("idx_team_players_team_player")
                    .table(TeamPlayer::Table)
                    .col(TeamPlayer::TeamId)
                    .col(TeamPlayer::PlayerId)
                    .unique()
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(TeamPlayer::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Team::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Player::Table).to_owned())
            .await?;
        manager
            .drop_type(Type::drop().name(Gender::Table).to_owned())
            .await?;
        Ok(())
    }
}
