/*!
 * Listing Tests
 * Sort orders and read-only views
 */

use crate::common::{ids, new_registry};
use pretty_assertions::assert_eq;
use process_registry::{
    AdmissionPolicy, Priority, ProcessHandle, Registry, RegistryError, SortOrder,
};

const MIXED: [Priority; 5] = [
    Priority::High,
    Priority::Low,
    Priority::Medium,
    Priority::High,
    Priority::Low,
];

#[test]
fn test_list_empty_registry() {
    let registry = Registry::new(3).unwrap();
    assert!(registry.list(SortOrder::ByIdAscending).is_empty());
}

#[test]
fn test_list_by_entry_time() {
    let (registry, processes) = new_registry(5, AdmissionPolicy::Reject, &MIXED);
    let admitted: Vec<String> = processes.iter().map(|p| p.id().to_string()).collect();

    assert_eq!(
        ids(&registry.list(SortOrder::ByEntryTimeAscending)),
        admitted
    );

    let mut reversed = admitted.clone();
    reversed.reverse();
    assert_eq!(
        ids(&registry.list(SortOrder::ByEntryTimeDescending)),
        reversed
    );
}

#[test]
fn test_list_by_id() {
    let registry = Registry::new(3).unwrap();
    for id in ["m", "z", "a"] {
        registry
            .add(crate::common::TestProcess::new(id, Priority::Low))
            .unwrap();
    }

    assert_eq!(
        ids(&registry.list(SortOrder::ByIdAscending)),
        vec!["a", "m", "z"]
    );
    assert_eq!(
        ids(&registry.list(SortOrder::ByIdDescending)),
        vec!["z", "m", "a"]
    );
}

#[test]
fn test_list_by_priority() {
    let (registry, _) = new_registry(5, AdmissionPolicy::LowestPriorityOut, &MIXED);

    let ascending: Vec<Priority> = registry
        .list(SortOrder::ByPriorityAscending)
        .iter()
        .map(|v| v.priority())
        .collect();
    assert_eq!(
        ascending,
        vec![
            Priority::Low,
            Priority::Low,
            Priority::Medium,
            Priority::High,
            Priority::High
        ]
    );

    // equal priorities keep admission order
    assert_eq!(
        ids(&registry.list(SortOrder::ByPriorityDescending)),
        vec!["p00", "p03", "p02", "p01", "p04"]
    );
}

#[test]
fn test_views_refuse_terminate() {
    let (registry, processes) = new_registry(3, AdmissionPolicy::Reject, &MIXED[..3]);

    for view in registry.list(SortOrder::ByIdAscending) {
        let err = view.terminate().unwrap_err();
        assert!(matches!(err, RegistryError::UnsupportedOperation(_)));
    }

    assert_eq!(registry.len(), 3);
    assert!(processes.iter().all(|p| !p.was_killed()));
}
