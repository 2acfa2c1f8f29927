//! End-to-end engine flows: store seeding, question/answer lifecycle,
//! score windows and the lecturer gate, run against real temp-file stores.

use std::fs;
use std::path::PathBuf;

use rand::SeedableRng;
use rand::rngs::StdRng;

use drillr_common::network::subnet::{self, Subnet};
use drillr_core::access::AdminGate;
use drillr_core::score::{Outcome, ScoreAggregator};
use drillr_core::session::{QuizError, QuizSession};
use drillr_core::store::{PrefixStore, StoreError};

fn temp_store_path(tag: &str) -> PathBuf {
    let name = format!("drillr-integration-{}-{tag}.json", std::process::id());
    let path = std::env::temp_dir().join(name);
    let _ = fs::remove_file(&path);
    path
}

fn unlocked_gate() -> AdminGate {
    let mut gate = AdminGate::new();
    assert!(gate.attempt_unlock("admin123"), "shared secret rejected");
    gate
}

/// A full ten-question window answered by a student who derives every
/// answer correctly: draw, grade, tally, report.
#[test]
fn perfect_window_reports_ten_correct() {
    let path = temp_store_path("perfect-window");
    let store = PrefixStore::open(&path).expect("open and seed store");
    assert!(!store.is_empty(), "fresh store must be seeded");

    let mut rng = StdRng::seed_from_u64(1234);
    let mut session = QuizSession::new();
    let mut scores = ScoreAggregator::new(10);
    let mut report = None;

    for round in 1..=10 {
        let prefix = session.next(&store, &mut rng).expect("draw question").to_string();
        let truth: Subnet = subnet::parse_and_derive(&prefix).expect("seeded prefix parses");

        let result = session
            .grade(
                &truth.network_address.to_string(),
                &truth.broadcast_address.to_string(),
                &truth.netmask.to_string(),
            )
            .expect("grade");
        assert!(result.all_correct(), "round {round} on {prefix} graded wrong");

        let emitted = scores.record(Outcome::Correct);
        if round < 10 {
            assert!(emitted.is_none(), "report emitted early at round {round}");
        } else {
            report = emitted;
        }
    }

    let report = report.expect("tenth answer must emit a report");
    assert_eq!(report.correct, 10);
    assert_eq!(report.incorrect, 0);
    assert_eq!(scores.total(), 0, "window must reset after the report");
}

/// Wrong answers are counted per question, not per field, and the report
/// totals the whole window.
#[test]
fn mixed_window_totals_correct_plus_incorrect() {
    let path = temp_store_path("mixed-window");
    let store = PrefixStore::open(&path).unwrap();

    let mut rng = StdRng::seed_from_u64(99);
    let mut session = QuizSession::new();
    let mut scores = ScoreAggregator::new(10);
    let mut report = None;

    for round in 1..=10 {
        let prefix = session.next(&store, &mut rng).unwrap().to_string();
        let truth = subnet::parse_and_derive(&prefix).unwrap();

        // Every odd round misses the broadcast address.
        let broadcast = if round % 2 == 0 {
            truth.broadcast_address.to_string()
        } else {
            String::from("0.0.0.0")
        };
        let result = session
            .grade(
                &truth.network_address.to_string(),
                &broadcast,
                &truth.netmask.to_string(),
            )
            .unwrap();
        assert_eq!(result.all_correct(), round % 2 == 0);

        let outcome = if result.all_correct() {
            Outcome::Correct
        } else {
            Outcome::Incorrect
        };
        report = scores.record(outcome);
    }

    let report = report.expect("window of ten must report");
    assert_eq!(report.correct, 5);
    assert_eq!(report.incorrect, 5);
    assert_eq!(report.total(), 10);
}

/// Lecturer curation survives a process restart: mutations are visible
/// after reopening the store, and deleted ids stay retired.
#[test]
fn curation_round_trip_across_reopen() {
    let path = temp_store_path("curation");
    let gate = unlocked_gate();

    let (added_id, seeded_len) = {
        let mut store = PrefixStore::open(&path).unwrap();
        let seeded_len = store.len();
        let id = store.insert(&gate, "192.168.77.0/24").unwrap();
        (id, seeded_len)
    };

    {
        let mut store = PrefixStore::open(&path).unwrap();
        assert_eq!(store.len(), seeded_len + 1);
        let listed = store.list_all(&gate).unwrap();
        assert_eq!(listed.last().unwrap().prefix, "192.168.77.0/24");

        store.update(&gate, added_id, "192.168.88.0/25").unwrap();
        store.delete(&gate, 1).unwrap();
    }

    let mut store = PrefixStore::open(&path).unwrap();
    let records = store.list_all(&gate).unwrap();
    assert!(!records.iter().any(|r| r.id == 1), "deleted record came back");
    assert!(
        records.iter().any(|r| r.id == added_id && r.prefix == "192.168.88.0/25"),
        "update lost across reopen"
    );

    let next_id = store.insert(&gate, "10.99.0.0/16").unwrap();
    assert!(next_id > added_id, "surrogate ids must keep growing");
}

/// The quiz path never needs the gate; the curation path never works
/// without it.
#[test]
fn gate_splits_quiz_and_curation_paths() {
    let path = temp_store_path("gate-split");
    let mut store = PrefixStore::open(&path).unwrap();

    let mut locked = AdminGate::new();
    assert!(!locked.attempt_unlock("letmein"));
    assert!(matches!(
        store.insert(&locked, "10.1.0.0/16"),
        Err(StoreError::Unauthorized(_))
    ));
    assert!(matches!(store.list_all(&locked), Err(StoreError::Unauthorized(_))));

    // Drilling proceeds regardless of the gate.
    let mut rng = StdRng::seed_from_u64(5);
    let mut session = QuizSession::new();
    assert!(session.next(&store, &mut rng).is_ok());

    // Relocking an unlocked gate shuts the surface again.
    let mut gate = unlocked_gate();
    assert!(store.list_all(&gate).is_ok());
    gate.lock();
    assert!(matches!(store.list_all(&gate), Err(StoreError::Unauthorized(_))));
}

/// Deleting every record mid-session makes the next draw fail with the
/// distinct empty-repository error rather than a parse error.
#[test]
fn drained_store_is_reported_distinctly() {
    let path = temp_store_path("drained");
    fs::write(
        &path,
        r#"{ "next_id": 2, "records": [ { "id": 1, "prefix": "10.0.0.0/8" } ] }"#,
    )
    .unwrap();

    let mut store = PrefixStore::open(&path).unwrap();
    let gate = unlocked_gate();
    store.delete(&gate, 1).unwrap();

    let mut rng = StdRng::seed_from_u64(6);
    let mut session = QuizSession::new();
    assert!(matches!(
        session.next(&store, &mut rng),
        Err(QuizError::EmptyRepository)
    ));
}
