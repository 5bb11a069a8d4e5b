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
                    .as_enum(MatchStatus::Table)
                    .values(MatchStatus::iter().skip(1))
                    .to_owned(),
            )
            .await?;

        manager
            .create_type(
                Type::create()
                    .as_enum(WinnerSide::Table)
                    .values(WinnerSide::iter().skip(1))
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(TennisMatch::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(TennisMatch::Id)
                            .integer()
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(TennisMatch::TournamentName).string())
                    .col(ColumnDef::new(TennisMatch::CategorySlug).string())
                    .col(ColumnDef::new(TennisMatch::TournamentType).string())
                    .col(ColumnDef::new(TennisMatch::RoundName).string())
                    .col(ColumnDef::new(TennisMatch::RoundType).string())
                    .col(
                        ColumnDef::new(TennisMatch::StartsAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(TennisMatch::Status)
                            .enumeration(MatchStatus::Table, MatchStatus::iter().skip(1))
                            .not_null(),
                    )
                    .col(ColumnDef::new(TennisMatch::StatusDescription).string())
                    .col(
                        ColumnDef::new(TennisMatch::Winner)
                            .enumeration(WinnerSide::Table, WinnerSide::iter().skip(1)),
                    )
                    .col(ColumnDef::new(TennisMatch::HomePlayerId).integer().not_null())
                    .col(ColumnDef::new(TennisMatch::HomePlayerName).string())
                    .col(ColumnDef::new(TennisMatch::AwayPlayerId).integer().not_null())
                    .col(ColumnDef::new(TennisMatch::AwayPlayerName).string())
                    .col(ColumnDef::new(TennisMatch::HomeSet1Score).integer())
                    .col(ColumnDef::new(TennisMatch::HomeSet1Tiebreak).integer())
                    .col(ColumnDef::new(TennisMatch::HomeSet2Score).integer())
                    .col(ColumnDef::new(TennisMatch::HomeSet2Tiebreak).integer())
                    .col(ColumnDef::new(TennisMatch::HomeSet3Score).integer())
                    .col(ColumnDef::new(TennisMatch::HomeSet3Tiebreak).integer())
                    .col(ColumnDef::new(TennisMatch::HomeSet4Score).integer())
                    .col(ColumnDef::new(TennisMatch::HomeSet4Tiebreak).integer())
                    .col(ColumnDef::new(TennisMatch::HomeSet5Score).integer())
                    .col(ColumnDef::new(TennisMatch::HomeSet5Tiebreak).integer())
                    .col(ColumnDef::new(TennisMatch::AwaySet1Score).integer())
                    .col(ColumnDef::new(TennisMatch::AwaySet1Tiebreak).integer())
                    .col(ColumnDef::new(TennisMatch::AwaySet2Score).integer())
                    .col(ColumnDef::new(TennisMatch::AwaySet2Tiebreak).integer())
                    .col(ColumnDef::new(TennisMatch::AwaySet3Score).integer())
                    .col(ColumnDef::new(TennisMatch::AwaySet3Tiebreak).integer())
                    .col(ColumnDef::new(TennisMatch::AwaySet4Score).integer())
                    .col(ColumnDef::new(TennisMatch::AwaySet4Tiebreak).integer())
                    .col(ColumnDef::new(TennisMatch::AwaySet5Score).integer())
                    .col(ColumnDef::new(TennisMatch::AwaySet5Tiebreak).integer())
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_tennis_matches_status_starts_at")
                    .table(TennisMatch::Table)
                    .col(TennisMatch::Status)
                    .col(TennisMatch::StartsAt)
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(MatchPoints::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(MatchPoints::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(MatchPoints::MatchId).integer().not_null())
                    .col(ColumnDef::new(MatchPoints::PlayerId).integer().not_null())
                    .col(ColumnDef::new(MatchPoints::PointsEarned).integer())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_match_points_match")
                            .from(MatchPoints::Table, MatchPoints::MatchId)
                            .to(TennisMatch::Table, TennisMatch::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_match_points_player")
                            .from(MatchPoints::Table, MatchPoints::PlayerId)
                            .to(Player::Table, Player::PlayerId)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // A player earns points at most once per match.
        manager
            .create_index(
                Index::create()
                    .name("idx_match_points_match_player")
                    .table(MatchPoints::Table)
                    .col(MatchPoints::MatchId)
                    .col(MatchPoints::PlayerId)
                    .unique()
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(PointsReference::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(PointsReference::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(PointsReference::CategorySlug).string().not_null())
                    .col(ColumnDef::new(PointsReference::TournamentType).string().not_null())
                    .col(ColumnDef::new(PointsReference::RoundName).string().not_null())
                    .col(ColumnDef::new(PointsReference::RoundType).string().not_null())
                    .col(ColumnDef::new(PointsReference::PointsForWin).integer().not_null())
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_points_reference_shape")
                    .table(PointsReference::Table)
                    .col(PointsReference::CategorySlug)
                    .col(PointsReference::TournamentType)
                    .col(PointsReference::RoundName)
                    .col(PointsReference::RoundType)
                    .unique()
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(PointsReference::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(MatchPoints::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(TennisMatch::Table).to_owned())
            .await?;
        manager
            .drop_type(Type::drop().name(WinnerSide::Table).to_owned())
            .await?;
        manager
            .drop_type(Type::drop().name(MatchStatus::Table).to_owned())
            .await?;
        Ok(())
    }
}
