use sea_orm::EnumIter;
use sea_orm_migration::prelude::*;

#[derive(DeriveIden)]
pub(crate) enum Player {
    #[sea_orm(iden = "players")]
    Table,
    PlayerId,
    Name,
    Gender,
    Rank,
    RankingPoints,
    Country,
    Tour,
}

#[derive(Iden, EnumIter)]
pub(crate) enum Gender {
    Table,
    #[iden = "M"]
    M,
    #[iden = "F"]
    F,
}

#[derive(DeriveIden)]
pub(crate) enum Team {
    #[sea_orm(iden = "teams")]
    Table,
    Id,
    Name,
    Owner,
    CurrentPoints,
}

#[derive(DeriveIden)]
pub(crate) enum TeamPlayer {
    #[sea_orm(iden = "team_players")]
    Table,
    Id,
    TeamId,
    PlayerId,
    AddedAt,
}

#[derive(DeriveIden)]
pub(crate) enum TennisMatch {
    #[sea_orm(iden = "tennis_matches")]
    Table,
    Id,
    TournamentName,
    CategorySlug,
    TournamentType,
    RoundName,
    RoundType,
    StartsAt,
    Status,
    StatusDescription,
    Winner,
    HomePlayerId,
    HomePlayerName,
    AwayPlayerId,
    AwayPlayerName,
    HomeSet1Score,
    HomeSet1Tiebreak,
    HomeSet2Score,
    HomeSet2Tiebreak,
    HomeSet3Score,
    HomeSet3Tiebreak,
    HomeSet4Score,
    HomeSet4Tiebreak,
    HomeSet5Score,
    HomeSet5Tiebreak,
    AwaySet1Score,
    AwaySet1Tiebreak,
    AwaySet2Score,
    AwaySet2Tiebreak,
    AwaySet3Score,
    AwaySet3Tiebreak,
    AwaySet4Score,
    AwaySet4Tiebreak,
    AwaySet5Score,
    AwaySet5Tiebreak,
}

#[derive(Iden, EnumIter)]
pub(crate) enum MatchStatus {
    Table,
    #[iden = "not_started"]
    NotStarted,
    #[iden = "in_progress"]
    InProgress,
    #[iden = "finished"]
    Finished,
}

#[derive(Iden, EnumIter)]
pub(crate) enum WinnerSide {
    Table,
    #[iden = "home"]
    Home,
    #[iden = "away"]
    Away,
}

#[derive(DeriveIden)]
pub(crate) enum MatchPoints {
    #[sea_orm(iden = "match_points")]
    Table,
    Id,
    MatchId,
    PlayerId,
    PointsEarned,
}

#[derive(DeriveIden)]
pub(crate) enum PointsReference {
    #[sea_orm(iden = "points_reference")]
    Table,
    Id,
    CategorySlug,
    TournamentType,
    RoundName,
    RoundType,
    PointsForWin,
}
