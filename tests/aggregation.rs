use std::collections::HashMap;

use entity::sea_orm_active_enums::{Gender, MatchStatus, WinnerSide};
use entity::{match_points, player, points_reference, team, tennis_match};

use service::dto::score::{keyed_line, set_line, PlayerSlot};
use service::dto::{MatchCard, MatchFilter, MatchRow};
use service::scoring::{self, StakeTable, TeamRef};

fn blank_match(id: i32, home: i32, away: i32) -> tennis_match::Model {
    tennis_match::Model {
        id,
        tournament_name: Some("Umag Open".to_string()),
        category_slug: Some("atp".to_string()),
        tournament_type: Some("atp250".to_string()),
        round_name: Some("Final".to_string()),
        round_type: Some("final".to_string()),
        starts_at: chrono::DateTime::from_timestamp(1_735_689_600, 0)
            .expect("valid timestamp")
            .fixed_offset(),
        status: MatchStatus::NotStarted,
        status_description: None,
        winner: None,
        home_player_id: home,
        home_player_name: Some(format!("Home {home}")),
        away_player_id: away,
        away_player_name: Some(format!("Away {away}")),
        home_set1_score: None,
        home_set2_score: None,
        home_set3_score: None,
        home_set4_score: None,
        home_set5_score: None,
        home_set1_tiebreak: None,
        home_set2_tiebreak: None,
        home_set3_tiebreak: None,
        home_set4_tiebreak: None,
        home_set5_tiebreak: None,
        away_set1_score: None,
        away_set2_score: None,
        away_set3_score: None,
        away_set4_score: None,
        away_set5_score: None,
        away_set1_tiebreak: None,
        away_set2_tiebreak: None,
        away_set3_tiebreak: None,
        away_set4_tiebreak: None,
        away_set5_tiebreak: None,
    }
}

fn points_row(id: i32, match_id: i32, player_id: i32, points: i32) -> match_points::Model {
    match_points::Model {
        id,
        match_id,
        player_id,
        points_earned: Some(points),
    }
}

fn teams_of(pairs: &[(i32, i32, &str)]) -> HashMap<i32, TeamRef> {
    scoring::membership_index(
        pairs
            .iter()
            .map(|(player, team, name)| (*player, *team, name.to_string())),
    )
}

#[test]
fn player_board_totals_flow_into_cards() {
    let points = vec![
        points_row(1, 100, 7, 20),
        points_row(2, 101, 7, 15),
        points_row(3, 100, 8, 5),
    ];
    let totals = scoring::player_totals(&points);
    assert_eq!(totals[&7].points, 35);
    assert_eq!(totals[&7].matches, 2);
    assert_eq!(totals[&8].points, 5);

    let per_match = scoring::match_points_map(&points);
    let teams = teams_of(&[(7, 1, "Baseline Bandits")]);

    let mut m = blank_match(100, 7, 8);
    m.status = MatchStatus::Finished;
    m.winner = Some(WinnerSide::Home);
    m.home_set1_score = Some(6);
    m.home_set2_score = Some(7);
    m.home_set2_tiebreak = Some(10);
    m.away_set1_score = Some(4);
    m.away_set2_score = Some(6);
    m.away_set2_tiebreak = Some(8);

    let card = MatchCard::recent(&m, &teams, &per_match);
    assert_eq!(card.home.points, 20);
    assert_eq!(card.away.points, 5);
    assert_eq!(card.home.score.as_deref(), Some("6 7¹⁰"));
    assert_eq!(card.away.score.as_deref(), Some("4 6⁸"));
    assert_eq!(card.home.team_name.as_deref(), Some("Baseline Bandits"));
    assert_eq!(card.away.team_name, None);
}

#[test]
fn upcoming_cards_carry_the_stake() {
    let references = vec![points_reference::Model {
        id: 1,
        category_slug: "atp".to_string(),
        tournament_type: "atp250".to_string(),
        round_name: "Final".to_string(),
        round_type: "final".to_string(),
        points_for_win: 250,
    }];
    let stakes = StakeTable::from_rows(&references);
    let teams = teams_of(&[]);

    let card = MatchCard::upcoming(&blank_match(1, 7, 8), &teams, &stakes);
    assert_eq!(card.points_at_stake, 250);

    let mut unknown = blank_match(2, 7, 8);
    unknown.round_name = Some("Quarterfinal".to_string());
    let card = MatchCard::upcoming(&unknown, &teams, &stakes);
    assert_eq!(card.points_at_stake, 0);
}

#[test]
fn filters_agree_on_the_same_card_list() {
    let teams = teams_of(&[(1, 10, "Aces"), (2, 20, "Slices"), (3, 10, "Aces")]);
    let stakes = StakeTable::from_rows(&[]);

    // 1v2 crosses teams, 1v3 is same-team, 4v5 is free agents only.
    let cards: Vec<MatchCard> = [(1, 1, 2), (2, 1, 3), (3, 4, 5)]
        .iter()
        .map(|(id, h, a)| MatchCard::upcoming(&blank_match(*id, *h, *a), &teams, &stakes))
        .collect();

    let all = MatchFilter::All.apply(Some(10), cards.clone());
    assert_eq!(all.len(), 3);

    let mine = MatchFilter::MyTeam.apply(Some(10), cards.clone());
    assert_eq!(mine.iter().map(|c| c.id).collect::<Vec<_>>(), vec![1, 2]);

    let h2h = MatchFilter::HeadToHead.apply(Some(10), cards.clone());
    assert_eq!(h2h.iter().map(|c| c.id).collect::<Vec<_>>(), vec![1]);

    let any = MatchFilter::AnyTeam.apply(Some(10), cards.clone());
    assert_eq!(any.iter().map(|c| c.id).collect::<Vec<_>>(), vec![1, 2]);

    // Head-to-head results always appear in the any-team list.
    for card in &h2h {
        assert!(any.iter().any(|c| c.id == card.id));
    }

    // Without a team of your own, my-team shows everything.
    let fallback = MatchFilter::MyTeam.apply(None, cards.clone());
    assert_eq!(fallback.len(), 3);
    let h2h_none = MatchFilter::HeadToHead.apply(None, cards);
    assert!(h2h_none.is_empty());
}

#[test]
fn anyteam_over_free_agents_is_empty() {
    let teams = teams_of(&[]);
    let stakes = StakeTable::from_rows(&[]);
    let cards = vec![MatchCard::upcoming(&blank_match(1, 4, 5), &teams, &stakes)];
    assert!(MatchFilter::AnyTeam.apply(None, cards).is_empty());
}

#[test]
fn leaderboard_ranks_follow_points() {
    let mk = |id: i32, name: &str, points: i32| team::Model {
        id,
        name: name.to_string(),
        owner: format!("user-{id}"),
        current_points: points,
    };
    let standings = scoring::rank_teams(vec![
        mk(1, "Aces", 40),
        mk(2, "Slices", 90),
        mk(3, "Lobs", 40),
    ]);
    let ranked: Vec<(u32, i32)> = standings.iter().map(|s| (s.rank, s.team_id)).collect();
    assert_eq!(ranked, vec![(1, 2), (2, 1), (3, 3)]);
}

#[test]
fn legacy_feed_rows_format_like_the_detailed_schema() {
    let row: MatchRow = serde_json::from_str(
        r#"{
            "match_id": 9,
            "status_type": "finished",
            "start_timestamp": 1735689600,
            "winner_code": 1,
            "player1_id": 7,
            "player1_name": "Home",
            "player2_id": 8,
            "player2_name": "Away",
            "player1_set1": 6,
            "player1_set2": 7,
            "player2_set1": 4,
            "player2_set2": 6
        }"#,
    )
    .expect("feed row parses");

    assert_eq!(row.status(), MatchStatus::Finished);
    assert_eq!(row.winner(), Some(WinnerSide::Home));
    assert_eq!(keyed_line(&row, PlayerSlot::Home), "6, 7");
    assert_eq!(keyed_line(&row, PlayerSlot::Away), "4, 6");
}

#[test]
fn detailed_schema_line_is_empty_before_play() {
    let m = blank_match(1, 7, 8);
    assert_eq!(set_line(&m, PlayerSlot::Home), "");
    assert_eq!(set_line(&m, PlayerSlot::Away), "");
}

#[test]
fn free_agents_show_on_the_player_board_shape() {
    let p = player::Model {
        player_id: 7,
        name: "Iga".to_string(),
        gender: Gender::F,
        rank: Some(1),
        ranking_points: Some(9000),
        country: Some("POL".to_string()),
        tour: Some("wta".to_string()),
    };
    let teams = teams_of(&[]);
    assert!(teams.get(&p.player_id).is_none());
}
