use super::*;
use crate::draft::{DraftState, SNAKE_ORDER};
use crate::pool::build_draft_pool;
use crate::state::{HAND_SIZE, POOL_SIZE};
use crate::strategist::draft_pick;
use alloc::collections::BTreeSet;
use infl_battle::error::GameError;
use infl_battle::rng::{MatchRng, XorShiftRng};
use infl_battle::round::Side;
use proptest::prelude::*;

fn full_pool(seed: u64) -> Vec<PersonaCard> {
    build_draft_pool(&create_roster(4), &mut XorShiftRng::seed_from_u64(seed))
}

/// Run a whole draft, the player taking `choose(pool)` each time.
fn run_draft(pool: Vec<PersonaCard>, mut choose: impl FnMut(&[PersonaCard]) -> usize) -> DraftState {
    let mut draft = DraftState::new(pool);
    while let Some(side) = draft.on_the_clock() {
        match side {
            Side::Player => {
                let index = choose(draft.pool());
                let id = draft.pool()[index].id;
                draft.pick(Side::Player, id).expect("player pick is legal");
            }
            Side::Ai => {
                draft.ai_pick().expect("ai pick is legal");
            }
        }
    }
    draft
}

fn assert_hands_partition_pool(draft: DraftState, pool: &[PersonaCard]) {
    assert!(draft.pool().is_empty());
    let (player, ai) = draft.into_hands();
    assert_eq!(player.len(), HAND_SIZE);
    assert_eq!(ai.len(), HAND_SIZE);

    let player_ids: BTreeSet<PersonaId> = player.ids().into_iter().collect();
    let ai_ids: BTreeSet<PersonaId> = ai.ids().into_iter().collect();
    assert!(player_ids.is_disjoint(&ai_ids));

    let union: BTreeSet<PersonaId> = player_ids.union(&ai_ids).copied().collect();
    let original: BTreeSet<PersonaId> = ids(pool).into_iter().collect();
    assert_eq!(union, original);
}

#[test]
fn test_snake_order_is_balanced() {
    let player_picks = SNAKE_ORDER.iter().filter(|s| **s == Side::Player).count();
    assert_eq!(player_picks, POOL_SIZE / 2);
    assert_eq!(SNAKE_ORDER[0], Side::Player);
    assert_eq!(SNAKE_ORDER[POOL_SIZE - 1], Side::Player);
}

#[test]
fn test_full_draft_partitions_pool() {
    let pool = full_pool(11);
    let draft = run_draft(pool.clone(), |_| 0);

    let sides: Vec<Side> = draft.picks().iter().map(|p| p.side).collect();
    assert_eq!(sides, SNAKE_ORDER.to_vec());
    assert_eq!(draft.step(), POOL_SIZE);
    assert!(draft.is_complete());

    assert_hands_partition_pool(draft, &pool);
}

#[test]
fn test_wrong_side_is_rejected_without_change() {
    let mut draft = DraftState::new(full_pool(5));
    let id = draft.pool()[0].id;
    let before = draft.clone();

    assert_eq!(draft.pick(Side::Ai, id), Err(GameError::NotYourTurn));
    assert_eq!(draft, before);
}

#[test]
fn test_card_outside_pool_is_rejected_without_change() {
    let mut draft = DraftState::new(full_pool(5));
    let before = draft.clone();

    let missing = PersonaId(9_999);
    assert_eq!(
        draft.pick(Side::Player, missing),
        Err(GameError::CardNotInPool { id: missing })
    );
    assert_eq!(draft, before);
}

#[test]
fn test_picked_card_cannot_be_picked_again() {
    let mut draft = DraftState::new(full_pool(5));
    let id = draft.pool()[3].id;
    draft.pick(Side::Player, id).unwrap();
    draft.run_ai_turns().unwrap();

    assert_eq!(
        draft.pick(Side::Player, id),
        Err(GameError::CardNotInPool { id })
    );
}

#[test]
fn test_pick_after_completion_fails() {
    let mut draft = run_draft(full_pool(8), |pool| pool.len() - 1);
    assert_eq!(draft.on_the_clock(), None);
    assert_eq!(
        draft.pick(Side::Player, PersonaId(1)),
        Err(GameError::DraftComplete)
    );
    assert_eq!(draft.ai_pick(), Err(GameError::DraftComplete));
}

#[test]
fn test_ai_drafts_greedily() {
    let pool = vec![
        create_card(1, Tier::S, [1, 1, 1, 1, 1, 1]),
        create_card(2, Tier::E, [10, 10, 10, 0, 0, 0]),
        create_card(3, Tier::A, [5, 5, 5, 5, 5, 4]),
        create_card(4, Tier::B, [5, 5, 5, 5, 5, 5]),
    ];
    assert_eq!(draft_pick(&pool), Some(PersonaId(2)));

    let mut draft = DraftState::new(pool);
    draft.pick(Side::Player, PersonaId(2)).unwrap();
    let picks = draft.run_ai_turns().unwrap();

    // 30 points each for cards 2 and 4; with 2 gone the AI takes 4, then 3.
    let taken: Vec<PersonaId> = picks.iter().map(|p| p.card).collect();
    assert_eq!(taken, vec![PersonaId(4), PersonaId(3)]);
}

#[test]
fn test_ai_draft_ties_go_to_earliest_card() {
    let pool = vec![
        create_card(5, Tier::E, [5, 5, 5, 5, 5, 5]),
        create_card(6, Tier::S, [10, 10, 10, 0, 0, 0]),
    ];
    assert_eq!(draft_pick(&pool), Some(PersonaId(5)));
    assert_eq!(draft_pick(&[]), None);
}

proptest! {
    #[test]
    fn prop_any_player_choices_partition_pool(seed in any::<u64>(), choice_seed in any::<u32>()) {
        let pool = full_pool(seed);
        let mut chooser = XorShiftRng::seed_from_u32(choice_seed);
        let draft = run_draft(pool.clone(), |p| chooser.gen_range(p.len()));
        assert_hands_partition_pool(draft, &pool);
    }
}
