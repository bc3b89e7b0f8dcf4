//! End-to-end session flows through the public API: record observations,
//! compare the groups, export CSV, and reset for the next participant run.

use coldpress::comparison::{self, InsufficientDataError};
use coldpress::csv_export;
use coldpress::observation::{Group, ValidationError};
use coldpress::store::ObservationStore;

// ============================================================================
// Recording and Comparison
// ============================================================================

#[test]
fn test_two_by_two_session_produces_welch_result() {
    // Smallest viable session: two observations per group
    let mut store = ObservationStore::new();
    store.append("Group A", 45.0).unwrap();
    store.append("Group A", 50.0).unwrap();
    store.append("Group B", 80.0).unwrap();
    store.append("Group B", 90.0).unwrap();

    let result = comparison::compute(store.snapshot()).unwrap();

    let stats_a = &result.per_group[&Group::A];
    let stats_b = &result.per_group[&Group::B];
    assert_eq!(stats_a.count, 2);
    assert_eq!(stats_b.count, 2);
    assert_eq!(stats_a.mean, 47.5);
    assert_eq!(stats_b.mean, 85.0);

    assert!(result.t_statistic < 0.0);
    assert!(result.t_statistic.is_finite());
    assert!(result.p_value > 0.0 && result.p_value <= 1.0);
    assert!(result.degrees_of_freedom > 1.0 && result.degrees_of_freedom < 2.0);
}

#[test]
fn test_comparison_tracks_store_contents() {
    // The comparison is recomputed from the snapshot, so appending more
    // observations changes the next result
    let mut store = ObservationStore::new();
    store.append("Group A", 45.0).unwrap();
    store.append("Group A", 50.0).unwrap();
    store.append("Group B", 80.0).unwrap();
    store.append("Group B", 90.0).unwrap();

    let before = comparison::compute(store.snapshot()).unwrap();

    store.append("Group A", 48.0).unwrap();
    let after = comparison::compute(store.snapshot()).unwrap();

    assert_eq!(after.per_group[&Group::A].count, 3);
    assert_eq!(after.per_group[&Group::B].count, 2);
    assert_ne!(before.t_statistic, after.t_statistic);
}

#[test]
fn test_single_observation_reports_too_few() {
    let mut store = ObservationStore::new();
    store.append("Group A", 45.0).unwrap();

    let err = comparison::compute(store.snapshot()).unwrap_err();
    assert_eq!(err, InsufficientDataError::TooFewObservations { total: 1 });
}

#[test]
fn test_one_sided_session_reports_missing_group() {
    let mut store = ObservationStore::new();
    store.append("Group A", 45.0).unwrap();
    store.append("Group A", 50.0).unwrap();

    let err = comparison::compute(store.snapshot()).unwrap_err();
    assert_eq!(err, InsufficientDataError::MissingGroup(Group::B));
}

#[test]
fn test_rejected_values_leave_session_intact() {
    let mut store = ObservationStore::new();
    store.append("Group A", 45.0).unwrap();

    // Out-of-range and malformed submissions are rejected without side effects
    assert_eq!(
        store.append("Group A", 301.0).unwrap_err(),
        ValidationError::ValueOutOfRange { value: 301.0 }
    );
    assert_eq!(
        store.append("Group A", -0.5).unwrap_err(),
        ValidationError::ValueOutOfRange { value: -0.5 }
    );
    assert_eq!(store.append("", 45.0).unwrap_err(), ValidationError::EmptyGroup);
    assert_eq!(
        store.append("Group C", 45.0).unwrap_err(),
        ValidationError::UnrecognizedGroup {
            label: "Group C".to_string()
        }
    );

    assert_eq!(store.len(), 1);

    // The next accepted observation continues the id sequence with no gaps
    let second = store.append("Group B", 60.0).unwrap();
    assert_eq!(second.id, 2);
}

// ============================================================================
// Reset
// ============================================================================

#[test]
fn test_clear_starts_a_fresh_session() {
    let mut store = ObservationStore::new();
    store.append("Group A", 45.0).unwrap();
    store.append("Group B", 80.0).unwrap();
    store.append("Group A", 50.0).unwrap();

    store.clear();
    assert!(store.is_empty());
    assert_eq!(
        comparison::compute(store.snapshot()).unwrap_err(),
        InsufficientDataError::TooFewObservations { total: 0 }
    );

    // Identifier numbering restarts at 1
    let first = store.append("Group B", 72.5).unwrap();
    assert_eq!(first.id, 1);
}

// ============================================================================
// Export and Serialization
// ============================================================================

#[test]
fn test_csv_export_matches_recorded_table() {
    let mut store = ObservationStore::new();
    store.append("Group A", 45.0).unwrap();
    store.append("Group B", 80.5).unwrap();
    store.append("Group A", 50.0).unwrap();

    let csv = csv_export::to_csv(store.snapshot());
    let lines: Vec<&str> = csv.lines().collect();

    assert_eq!(lines[0], "id,group,value");
    assert_eq!(lines[1], "1,Group A,45");
    assert_eq!(lines[2], "2,Group B,80.5");
    assert_eq!(lines[3], "3,Group A,50");
    assert_eq!(lines.len(), 4);
}

#[test]
fn test_comparison_result_serializes_for_charts() {
    let mut store = ObservationStore::new();
    store.append("Group A", 45.0).unwrap();
    store.append("Group A", 50.0).unwrap();
    store.append("Group B", 80.0).unwrap();
    store.append("Group B", 90.0).unwrap();

    let result = comparison::compute(store.snapshot()).unwrap();
    let json = serde_json::to_value(&result).unwrap();

    // Chart collaborators key everything by the display label
    assert_eq!(json["per_group"]["Group A"]["mean"].as_f64(), Some(47.5));
    assert_eq!(json["per_group"]["Group B"]["count"].as_u64(), Some(2));
    assert_eq!(
        json["raw_values"]["Group B"]
            .as_array()
            .map(|values| values.len()),
        Some(2)
    );
    assert!(json["t_statistic"].is_f64());
    assert!(json["p_value"].is_f64());
    assert!(json["degrees_of_freedom"].is_f64());
}

#[test]
fn test_observation_rows_serialize_with_labels() {
    let mut store = ObservationStore::new();
    let recorded = store.append("Group B", 113.25).unwrap();

    let json = serde_json::to_value(&recorded).unwrap();
    assert_eq!(json["id"].as_u64(), Some(1));
    assert_eq!(json["group"].as_str(), Some("Group B"));
    assert_eq!(json["value"].as_f64(), Some(113.25));
}
