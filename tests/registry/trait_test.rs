/*!
 * ProcessRegistry Trait Tests
 * Every operation driven through a trait object
 */

use crate::common::{ids, TestProcess};
use pretty_assertions::assert_eq;
use process_registry::{
    AdmissionPolicy, Priority, ProcessRegistry, Registry, RegistryError, SequentialClock,
    SortOrder,
};
use std::sync::Arc;

fn dyn_registry(capacity: usize, policy: AdmissionPolicy) -> Arc<dyn ProcessRegistry> {
    Arc::new(Registry::with_clock(capacity, policy, Arc::new(SequentialClock::new())).unwrap())
}

#[test]
fn test_operations_through_trait_object() {
    let registry = dyn_registry(3, AdmissionPolicy::Reject);
    let a = TestProcess::new("a", Priority::Low);
    let b = TestProcess::new("b", Priority::Medium);
    let c = TestProcess::new("c", Priority::Low);

    registry.add(a.clone()).unwrap();
    registry.add(b.clone()).unwrap();
    registry.add(c.clone()).unwrap();
    assert_eq!(
        registry.add(TestProcess::new("d", Priority::High)),
        Err(RegistryError::CapacityExceeded { capacity: 3 })
    );
    assert_eq!(
        ids(&registry.list(SortOrder::ByEntryTimeDescending)),
        vec!["c", "b", "a"]
    );

    registry.kill_by_id("b").unwrap();
    assert_eq!(
        registry.kill_by_id("b"),
        Err(RegistryError::NotFound("b".to_string()))
    );
    assert_eq!(b.kill_count(), 1);

    assert_eq!(registry.kill_by_priority(Priority::Low), 2);
    assert_eq!(a.kill_count(), 1);
    assert_eq!(c.kill_count(), 1);

    registry.add(TestProcess::new("e", Priority::High)).unwrap();
    assert_eq!(registry.kill_all(), 1);
    assert!(registry.list(SortOrder::ByIdAscending).is_empty());
}

#[test]
fn test_trait_object_shared_across_threads() {
    let registry = dyn_registry(2, AdmissionPolicy::OldestOut);

    let handles: Vec<_> = (0..4)
        .map(|t| {
            let registry = Arc::clone(&registry);
            std::thread::spawn(move || {
                registry
                    .add(TestProcess::new(&format!("t{}", t), Priority::Medium))
                    .unwrap();
            })
        })
        .collect();
    for handle in handles {
        handle.join().unwrap();
    }

    assert_eq!(registry.list(SortOrder::ByIdAscending).len(), 2);
}
