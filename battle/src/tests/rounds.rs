use super::*;
use crate::round::{final_result, resolve_round, MatchResult, Side};

#[test]
fn test_higher_score_takes_the_point() {
    let player = create_card(1, Tier::E, [9, 0, 0, 0, 0, 0]);
    let ai = create_card(2, Tier::S, [4, 10, 10, 10, 10, 10]);

    let verdict = resolve_round(Domain::Science, &player, &ai);

    assert_eq!(verdict.player_score, 9);
    assert_eq!(verdict.ai_score, 4);
    assert_eq!((verdict.player_points, verdict.ai_points), (1, 0));
    assert!(!verdict.is_tiebreak, "tier must not matter when scores differ");
    assert_eq!(verdict.winner(), Some(Side::Player));
}

#[test]
fn test_equal_score_breaks_on_tier() {
    let s_card = flat_card(1, Tier::S, 6);
    let d_card = flat_card(2, Tier::D, 6);

    let verdict = resolve_round(Domain::Arts, &s_card, &d_card);
    assert_eq!((verdict.player_points, verdict.ai_points), (1, 0));
    assert!(verdict.is_tiebreak);

    let verdict = resolve_round(Domain::Arts, &d_card, &s_card);
    assert_eq!((verdict.player_points, verdict.ai_points), (0, 1));
    assert!(verdict.is_tiebreak);
    assert_eq!(verdict.winner(), Some(Side::Ai));
}

#[test]
fn test_double_tie_is_a_wash() {
    let a = flat_card(1, Tier::B, 5);
    let b = flat_card(2, Tier::B, 5);

    let verdict = resolve_round(Domain::Faith, &a, &b);

    assert_eq!((verdict.player_points, verdict.ai_points), (0, 0));
    assert!(verdict.is_tiebreak);
    assert_eq!(verdict.winner(), None);
}

#[test]
fn test_double_tie_ignores_ability_block() {
    let strong = flat_card(1, Tier::C, 4).with_abilities(AbilityBlock::new(100, 100, 100, 100));
    let weak = flat_card(2, Tier::C, 4).with_abilities(AbilityBlock::new(0, 0, 0, 0));

    let verdict = resolve_round(Domain::Science, &strong, &weak);
    assert_eq!((verdict.player_points, verdict.ai_points), (0, 0));
}

#[test]
fn test_resolution_is_side_symmetric() {
    let cards = [
        create_card(1, Tier::S, [3, 7, 9, 1, 0, 5]),
        create_card(2, Tier::D, [3, 2, 9, 8, 10, 5]),
        create_card(3, Tier::D, [4, 7, 1, 8, 0, 6]),
        create_card(4, Tier::A, [0, 0, 0, 0, 0, 0]),
    ];

    for domain in Domain::ALL {
        for x in &cards {
            for y in &cards {
                let forward = resolve_round(domain, x, y);
                let backward = resolve_round(domain, y, x);
                assert_eq!(forward, backward.mirrored(), "{domain} {} vs {}", x.id, y.id);
            }
        }
    }
}

#[test]
fn test_final_result_by_totals() {
    assert_eq!(final_result(4, 2), MatchResult::Victory);
    assert_eq!(final_result(1, 5), MatchResult::Defeat);
    assert_eq!(final_result(3, 3), MatchResult::Draw);
    assert_eq!(final_result(0, 0), MatchResult::Draw);
}

#[test]
fn test_side_opponent() {
    assert_eq!(Side::Player.opponent(), Side::Ai);
    assert_eq!(Side::Ai.opponent(), Side::Player);
}
