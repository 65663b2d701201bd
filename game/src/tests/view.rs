use super::*;
use crate::session::Match;
use crate::state::*;
use crate::view::{CardView, MatchView, PhaseView};
use infl_battle::round::{MatchResult, Side};

#[test]
fn test_idle_view_is_empty() {
    let view = Match::from_seed(1).view();
    assert_eq!(view.phase, PhaseView::Idle);
    assert!(view.pool.is_empty());
    assert!(view.player_hand.is_empty());
    assert_eq!(view.on_the_clock, None);
    assert_eq!(view.result, None);
}

#[test]
fn test_draft_view_shows_pool_and_turn() {
    let mut game = Match::from_seed(11);
    game.start_loading().unwrap();
    game.begin_draft(&create_roster(3)).unwrap();

    let view = game.view();
    assert_eq!(view.phase, PhaseView::Draft);
    assert_eq!(view.pool.len(), POOL_SIZE);
    assert_eq!(view.draft_step, 0);
    assert_eq!(view.on_the_clock, Some(Side::Player));
    assert_eq!(view.upcoming_picks.len(), POOL_SIZE);
    assert_eq!(view.active_domain, None);

    let id = view.pool[0].id;
    game.player_draft_pick(id).unwrap();
    let view = game.view();
    assert_eq!(view.draft_step, 3);
    assert_eq!(view.pool.len(), POOL_SIZE - 3);
    assert_eq!(view.player_hand.len(), 1);
    assert_eq!(view.ai_hand.len(), 2);
    assert_eq!(view.upcoming_picks[0], Side::Player);
}

#[test]
fn test_battle_and_result_views() {
    let mut game = Match::from_seed(31);
    game.start_loading().unwrap();
    game.begin_draft(&create_roster(4)).unwrap();
    while let Some(id) = game.view().pool.first().map(|c| c.id) {
        game.player_draft_pick(id).unwrap();
    }

    let view = game.view();
    assert_eq!(view.phase, PhaseView::Battle);
    assert_eq!(view.player_hand.len(), HAND_SIZE);
    assert_eq!(view.upcoming_domains.len(), ROUNDS_PER_MATCH - 1);
    assert!(view.active_domain.is_some());

    let id = view.player_hand[0].id;
    game.play_card(id).unwrap();
    let view = game.view();
    assert_eq!(view.phase, PhaseView::Revealing);
    assert_eq!(view.history.len(), 1);
    assert_eq!(view.round, 1);

    game.continue_after_reveal().unwrap();
    while let Some(id) = game.view().player_hand.first().map(|c| c.id) {
        game.play_card(id).unwrap();
        game.continue_after_reveal().unwrap();
    }

    let view = game.view();
    assert_eq!(view.phase, PhaseView::Result);
    assert_eq!(view.history.len(), ROUNDS_PER_MATCH);
    let expected = infl_battle::round::final_result(view.player_points, view.ai_points);
    assert_eq!(view.result, Some(expected));
    assert!(matches!(
        expected,
        MatchResult::Victory | MatchResult::Defeat | MatchResult::Draw
    ));
}

#[test]
fn test_view_serializes_camel_case() {
    let mut game = Match::from_seed(2);
    game.start_loading().unwrap();
    game.begin_draft(&create_roster(3)).unwrap();

    let json = serde_json::to_value(game.view()).unwrap();
    assert_eq!(json["phase"], "draft");
    assert_eq!(json["onTheClock"], "player");
    assert_eq!(json["draftStep"], 0);
    assert_eq!(json["pool"].as_array().unwrap().len(), POOL_SIZE);

    let back: MatchView = serde_json::from_value(json).unwrap();
    assert_eq!(back, game.view());
}

#[test]
fn test_card_view_keeps_display_fields() {
    let card = create_card(9, Tier::A, [1, 2, 3, 4, 5, 6])
        .with_profile("Physicist", "Polish")
        .with_portrait("curie.png");
    let view = CardView::from(&card);
    assert_eq!(view.id, PersonaId(9));
    assert_eq!(view.tier, Tier::A);
    assert_eq!(view.portrait, "curie.png");
    assert_eq!(view.influence.faith, 6);
}
