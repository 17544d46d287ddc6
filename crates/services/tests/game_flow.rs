use hcf_core::model::DropOutcome;
use hcf_core::time::{fixed_clock, fixed_now};
use services::{GameLoopService, GameSession, QuestionGenerator};

#[test]
fn five_rounds_play_to_fifty() {
    let session = GameSession::new(QuestionGenerator::with_seed(7), fixed_clock());
    let mut game = GameLoopService::new(session);

    let first = game.start().unwrap();
    assert_eq!(first.index, 1);
    assert!(first.collected.is_empty());

    for round in 1..=5_u32 {
        for factor in game.hint().unwrap() {
            game.begin_drag(factor);
            let report = game.drop_current().unwrap().expect("a tile was dragged");
            assert_eq!(report.outcome, DropOutcome::Accepted);
        }

        let progress = game.progress();
        assert_eq!(progress.score, round * 10);
        assert_eq!(progress.rounds_completed, round);

        let next = game.next_round().unwrap();
        if round < 5 {
            let snapshot = next.expect("another round follows");
            assert_eq!(snapshot.index, round + 1);
        } else {
            assert!(next.is_none());
        }
    }

    let summary = game.summary().unwrap();
    assert_eq!(summary.score(), 50);
    assert_eq!(summary.rounds_completed(), 5);
    assert_eq!(summary.max_score(), 50);
    assert_eq!(summary.completed_at(), fixed_now());
}

#[test]
fn restart_after_completion_begins_fresh() {
    let session =
        GameSession::new(QuestionGenerator::with_seed(21), fixed_clock()).with_total_rounds(2);
    let mut game = GameLoopService::new(session);
    game.start().unwrap();

    for _ in 0..2 {
        for factor in game.hint().unwrap() {
            let report = game.drop_factor(factor).unwrap();
            assert_eq!(report.outcome, DropOutcome::Accepted);
        }
        game.next_round().unwrap();
    }
    assert!(game.progress().is_complete);
    assert_eq!(game.summary().unwrap().score(), 20);

    let snapshot = game.restart().unwrap();

    assert_eq!(snapshot.index, 1);
    assert!(snapshot.collected.is_empty());
    let progress = game.progress();
    assert_eq!(progress.score, 0);
    assert_eq!(progress.rounds_completed, 0);
    assert!(!progress.is_complete);
}

#[test]
fn wrong_drops_cost_nothing_and_round_still_completes() {
    let session = GameSession::new(QuestionGenerator::with_seed(33), fixed_clock());
    let mut game = GameLoopService::new(session);
    game.start().unwrap();

    let report = game.drop_factor(103).unwrap();
    assert_eq!(report.outcome, DropOutcome::Rejected);
    assert_eq!(report.score, 0);

    for factor in game.hint().unwrap() {
        game.drop_factor(factor).unwrap();
    }
    assert_eq!(game.progress().score, 10);
}
