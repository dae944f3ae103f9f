//! Full-session workflows: submitting rounds, the retroactive toggle state
//! machine, distribution capture, cancellation, and winner declaration.

use card_tally::{
    CreditMap, EditState, GameError, GameSession, GameVariant, PlayerId, ToggleOutcome,
};

fn alice_bob_carol() -> GameSession {
    GameSession::new(
        GameVariant::ThreeTwoFive,
        vec!["Alice".into(), "Bob".into(), "Carol".into()],
    )
    .unwrap()
}

fn credits(pairs: &[(u8, u64)]) -> CreditMap {
    pairs.iter().map(|&(p, a)| (PlayerId::new(p), a)).collect()
}

/// Scenario: Alice makes her 3, Bob and Carol fail. Totals mirror the raw
/// scores and both failures surface distribution requests.
#[test]
fn test_round_with_failures() {
    let mut session = alice_bob_carol();

    let outcome = session
        .submit_round(&[Some(3), Some(-2), Some(-5)])
        .unwrap();

    assert_eq!(outcome.round, 0);
    assert_eq!(outcome.totals[PlayerId::new(0)], 3);
    assert_eq!(outcome.totals[PlayerId::new(1)], -2);
    assert_eq!(outcome.totals[PlayerId::new(2)], -5);

    let requests = &outcome.distribution_requests;
    assert_eq!(requests.len(), 2);
    assert_eq!((requests[0].player, requests[0].target), (PlayerId::new(1), 2));
    assert_eq!((requests[1].player, requests[1].target), (PlayerId::new(2), 5));
    assert_eq!(
        requests[1].eligible_others,
        vec![PlayerId::new(0), PlayerId::new(1)]
    );
}

/// Scenario: toggle Alice's +3 to -3, over-allocate (rejected), then
/// credit Bob 2 so Alice keeps 1 self-made.
#[test]
fn test_toggle_save_distribution_flow() {
    let mut session = alice_bob_carol();
    session.submit_round(&[Some(3), Some(2), Some(5)]).unwrap();

    let alice = PlayerId::new(0);
    let outcome = session.toggle_cell(0, alice).unwrap();

    match &outcome {
        ToggleOutcome::DistributionNeeded { request, totals } => {
            assert_eq!(request.target, 3);
            assert_eq!(
                request.eligible_others,
                vec![PlayerId::new(1), PlayerId::new(2)]
            );
            // Raw totals already show the flip.
            assert_eq!(totals[alice], -3);
        }
        other => panic!("expected DistributionNeeded, got {other:?}"),
    }
    assert!(session.edit_state().is_pending());

    // 5 > 3: rejected, still awaiting the same cell.
    let result = session.save_distribution(0, alice, &credits(&[(1, 5)]));
    assert_eq!(
        result,
        Err(GameError::OverAllocation { target: 3, allocated: 5 })
    );
    assert!(session.edit_state().is_pending());

    let totals = session.save_distribution(0, alice, &credits(&[(1, 2)])).unwrap();
    assert_eq!(session.edit_state(), EditState::Stable);
    assert_eq!(totals[alice], -3);

    let entry = session.attribution_entry(0, alice);
    assert!(entry.failed);
    assert_eq!(entry.credit_for(PlayerId::new(1)), 2);
    assert_eq!(entry.credit_for(alice), 1); // self-made remainder
    assert_eq!(entry.credited_total(), 3);
}

/// Scenario: cancel instead of saving. The score reverts to +3, no
/// attribution changes, and the session is byte-for-byte what it was.
#[test]
fn test_cancel_restores_exact_state() {
    let mut session = alice_bob_carol();
    session.submit_round(&[Some(3), Some(2), Some(5)]).unwrap();

    let alice = PlayerId::new(0);
    let before = session.clone();

    session.toggle_cell(0, alice).unwrap();
    let totals = session.cancel_edit(0, alice);

    assert_eq!(session, before);
    assert_eq!(totals[alice], 3);
    assert_eq!(session.round(0).score(alice), 3);
}

#[test]
fn test_suspended_toggle_reads_as_uncollected_failure() {
    let mut session = alice_bob_carol();
    session.submit_round(&[Some(3), Some(2), Some(5)]).unwrap();

    let alice = PlayerId::new(0);
    session.toggle_cell(0, alice).unwrap();

    // Mid-edit the entry is a failed target with nothing credited yet.
    let entry = session.attribution_entry(0, alice);
    assert!(entry.failed);
    assert_eq!(entry.target, 3);
    assert_eq!(entry.credited_total(), 0);

    // Cancelling puts the self-credit default back.
    session.cancel_edit(0, alice);
    let entry = session.attribution_entry(0, alice);
    assert!(!entry.failed);
    assert_eq!(entry.credit_for(alice), 3);
}

#[test]
fn test_pending_edit_blocks_conflicting_operations() {
    let mut session = alice_bob_carol();
    session.submit_round(&[Some(3), Some(2), Some(5)]).unwrap();
    session.toggle_cell(0, PlayerId::new(0)).unwrap();

    assert_eq!(
        session.submit_round(&[Some(3), Some(2), Some(5)]),
        Err(GameError::EditInProgress)
    );
    assert_eq!(
        session.toggle_cell(0, PlayerId::new(1)),
        Err(GameError::EditInProgress)
    );
}

#[test]
fn test_toggle_back_to_positive_completes_directly() {
    let mut session = alice_bob_carol();
    session.submit_round(&[Some(3), Some(-2), Some(-5)]).unwrap();

    // Bob's -2 was wrong; he actually made it. No distribution step.
    let bob = PlayerId::new(1);
    let outcome = session.toggle_cell(0, bob).unwrap();

    match outcome {
        ToggleOutcome::Completed { totals } => assert_eq!(totals[bob], 2),
        other => panic!("expected Completed, got {other:?}"),
    }
    assert_eq!(session.edit_state(), EditState::Stable);

    let entry = session.attribution_entry(0, bob);
    assert!(!entry.failed);
    assert_eq!(entry.credit_for(bob), 2);
}

#[test]
fn test_toggle_back_discards_saved_distribution() {
    let mut session = alice_bob_carol();
    session.submit_round(&[Some(-3), Some(2), Some(5)]).unwrap();
    session
        .save_distribution(0, PlayerId::new(0), &credits(&[(1, 3)]))
        .unwrap();

    let outcome = session.toggle_cell(0, PlayerId::new(0)).unwrap();
    assert!(matches!(outcome, ToggleOutcome::Completed { .. }));

    let entry = session.attribution_entry(0, PlayerId::new(0));
    assert!(!entry.failed);
    assert_eq!(entry.credit_for(PlayerId::new(0)), 3);
    assert_eq!(entry.credit_for(PlayerId::new(1)), 0);
}

#[test]
fn test_submitted_failure_distribution_without_edit() {
    // Distribution capture straight after a round submission: no toggle,
    // no pending edit, the entry is already failed.
    let mut session = alice_bob_carol();
    session.submit_round(&[Some(3), Some(-2), Some(-5)]).unwrap();

    let carol = PlayerId::new(2);
    let totals = session
        .save_distribution(0, carol, &credits(&[(0, 4)]))
        .unwrap();

    assert_eq!(totals[carol], -5); // totals never read attribution
    let entry = session.attribution_entry(0, carol);
    assert_eq!(entry.credit_for(PlayerId::new(0)), 4);
    assert_eq!(entry.credit_for(carol), 1);
}

#[test]
fn test_plus_minus_toggle_never_awaits() {
    let mut session = GameSession::new(
        GameVariant::PlusMinus,
        vec!["A".into(), "B".into(), "C".into(), "D".into()],
    )
    .unwrap();
    session
        .submit_round(&[Some(2), Some(2), Some(2), Some(4)])
        .unwrap();

    // Flipping to negative completes directly: no attribution concept.
    let outcome = session.toggle_cell(0, PlayerId::new(3)).unwrap();
    match outcome {
        ToggleOutcome::Completed { totals } => assert_eq!(totals[PlayerId::new(3)], -4),
        other => panic!("expected Completed, got {other:?}"),
    }
    assert_eq!(session.edit_state(), EditState::Stable);

    // And flipping back restores the original totals.
    let outcome = session.toggle_cell(0, PlayerId::new(3)).unwrap();
    assert_eq!(outcome.totals()[PlayerId::new(3)], 4);
}

#[test]
fn test_winner_single_and_tied() {
    let mut session = alice_bob_carol();
    session.submit_round(&[Some(3), Some(2), Some(5)]).unwrap();
    session.submit_round(&[Some(5), Some(2), Some(3)]).unwrap();

    let winner = session.compute_winner();
    assert_eq!(winner.names, ["Alice", "Carol"]);
    assert_eq!(winner.score, 8);

    session.submit_round(&[Some(-3), Some(2), Some(5)]).unwrap();
    let winner = session.compute_winner();
    assert_eq!(winner.names, ["Carol"]);
    assert_eq!(winner.players, [PlayerId::new(2)]);
    assert_eq!(winner.score, 13);
}

#[test]
fn test_winner_on_empty_ledger_is_everyone_at_zero() {
    let session = alice_bob_carol();
    let winner = session.compute_winner();

    assert_eq!(winner.names, ["Alice", "Bob", "Carol"]);
    assert_eq!(winner.score, 0);
}

#[test]
fn test_totals_track_multiple_edits() {
    let mut session = GameSession::new(
        GameVariant::PlusMinus,
        vec!["A".into(), "B".into(), "C".into()],
    )
    .unwrap();
    session
        .submit_round(&[Some(5), Some(3), Some(2)])
        .unwrap();
    session
        .submit_round(&[Some(2), Some(6), Some(2)])
        .unwrap();

    session.toggle_cell(0, PlayerId::new(0)).unwrap();
    session.toggle_cell(1, PlayerId::new(1)).unwrap();
    let totals = session.totals();

    assert_eq!(totals[PlayerId::new(0)], -3); // -5 + 2
    assert_eq!(totals[PlayerId::new(1)], -3); // 3 - 6
    assert_eq!(totals[PlayerId::new(2)], 4);
}
