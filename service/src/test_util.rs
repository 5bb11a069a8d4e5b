use entity::sea_orm_active_enums::MatchStatus;
use entity::tennis_match;

pub(crate) fn blank_match() -> tennis_match::Model {
    tennis_match::Model {
        id: 0,
        tournament_name: None,
        category_slug: None,
        tournament_type: None,
        round_name: None,
        round_type: None,
        starts_at: chrono::DateTime::from_timestamp(0, 0)
            .expect("epoch is valid")
            .fixed_offset(),
        status: MatchStatus::NotStarted,
        status_description: None,
        winner: None,
        home_player_id: 0,
        home_player_name: None,
        away_player_id: 0,
        away_player_name: None,
        home_set1_score: None,
        home_set1_tiebreak: None,
        home_set2_score: None,
        home_set2_tiebreak: None,
        home_set3_score: None,
        home_set3_tiebreak: None,
        home_set4_score: None,
        home_set4_tiebreak: None,
        home_set5_score: None,
        home_set5_tiebreak: None,
        away_set1_score: None,
        away_set1_tiebreak: None,
        away_set2_score: None,
        away_set2_tiebreak: None,
        away_set3_score: None,
        away_set3_tiebreak: None,
        away_set4_score: None,
        away_set4_tiebreak: None,
        away_set5_score: None,
        away_set5_tiebreak: None,
    }
}
