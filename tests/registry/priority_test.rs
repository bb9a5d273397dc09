/*!
 * Lowest-Priority-Out Policy Tests
 */

use crate::common::{ids, new_registry, TestProcess};
use pretty_assertions::assert_eq;
use process_registry::{AdmissionPolicy, Priority, Registry, RegistryError, SortOrder};

#[test]
fn test_priority_zero_capacity_is_invalid() {
    assert!(matches!(
        Registry::priority(0),
        Err(RegistryError::InvalidConfiguration(_))
    ));
}

#[test]
fn test_higher_priority_evicts_lower() {
    let (registry, processes) =
        new_registry(1, AdmissionPolicy::LowestPriorityOut, &[Priority::Low]);
    let high = TestProcess::new("high", Priority::High);

    registry.add(high.clone()).unwrap();

    assert_eq!(processes[0].kill_count(), 1);
    assert_eq!(ids(&registry.list(SortOrder::ByIdAscending)), vec!["high"]);
}

#[test]
fn test_lower_priority_is_declined_silently() {
    let (registry, processes) =
        new_registry(1, AdmissionPolicy::LowestPriorityOut, &[Priority::High]);
    let medium = TestProcess::new("medium", Priority::Medium);

    registry.add(medium.clone()).unwrap();

    assert_eq!(ids(&registry.list(SortOrder::ByIdAscending)), vec!["p00"]);
    assert!(!processes[0].was_killed());
    assert!(!medium.was_killed());
}

#[test]
fn test_equal_priority_is_declined() {
    let (registry, processes) =
        new_registry(1, AdmissionPolicy::LowestPriorityOut, &[Priority::High]);

    registry.add(TestProcess::new("other", Priority::High)).unwrap();

    assert_eq!(ids(&registry.list(SortOrder::ByIdAscending)), vec!["p00"]);
    assert!(!processes[0].was_killed());
}

#[test]
fn test_evicts_oldest_among_lowest() {
    let (registry, processes) = new_registry(
        2,
        AdmissionPolicy::LowestPriorityOut,
        &[Priority::Low, Priority::Low],
    );

    registry.add(TestProcess::new("high", Priority::High)).unwrap();

    assert!(processes[0].was_killed());
    assert!(!processes[1].was_killed());
    assert_eq!(
        ids(&registry.list(SortOrder::ByEntryTimeAscending)),
        vec!["p01", "high"]
    );
}

#[test]
fn test_victim_is_lowest_not_oldest() {
    let (registry, processes) = new_registry(
        3,
        AdmissionPolicy::LowestPriorityOut,
        &[Priority::Medium, Priority::High, Priority::Low],
    );

    registry.add(TestProcess::new("new", Priority::Medium)).unwrap();

    assert!(!processes[0].was_killed());
    assert!(!processes[1].was_killed());
    assert!(processes[2].was_killed());
    assert_eq!(
        ids(&registry.list(SortOrder::ByEntryTimeAscending)),
        vec!["p00", "p01", "new"]
    );
}

#[test]
fn test_declined_candidate_keeps_its_position() {
    let (registry, _) = new_registry(
        2,
        AdmissionPolicy::LowestPriorityOut,
        &[Priority::Medium, Priority::High],
    );
    let before = ids(&registry.list(SortOrder::ByEntryTimeAscending));

    registry.add(TestProcess::new("low", Priority::Low)).unwrap();
    registry.add(TestProcess::new("medium", Priority::Medium)).unwrap();

    assert_eq!(ids(&registry.list(SortOrder::ByEntryTimeAscending)), before);
}

#[test]
fn test_under_capacity_admits_any_priority() {
    let (registry, _) = new_registry(2, AdmissionPolicy::LowestPriorityOut, &[Priority::High]);

    registry.add(TestProcess::new("low", Priority::Low)).unwrap();

    assert_eq!(registry.len(), 2);
    assert!(registry.contains("low"));
}

#[test]
fn test_eviction_survives_failed_terminate() {
    let registry = Registry::priority(1).unwrap();
    let stubborn = TestProcess::failing("stubborn", Priority::Low);
    registry.add(stubborn.clone()).unwrap();

    registry.add(TestProcess::new("high", Priority::High)).unwrap();

    assert_eq!(stubborn.kill_count(), 1);
    assert!(!registry.contains("stubborn"));
    assert_eq!(ids(&registry.list(SortOrder::ByIdAscending)), vec!["high"]);
}
