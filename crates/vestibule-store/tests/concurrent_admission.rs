//! Linearizability of the admission counter under contention.

use vestibule_core::{Scope, Visitor, VisitorStoreEffects};
use vestibule_store::MemoryVisitorStore;

#[tokio::test(flavor = "multi_thread", worker_threads = 8)]
async fn concurrent_admissions_respect_the_limit() {
    const LIMIT: u32 = 10;
    const ATTEMPTS: usize = 64;

    let store = MemoryVisitorStore::new();
    let visitor = Visitor::new("fred@example.com", Scope::new("foo").expect("valid scope tag"))
        .with_max_visits(LIMIT)
        .expect("positive cap");
    let id = visitor.id;
    store.insert_visitor(visitor);

    let mut tasks = Vec::with_capacity(ATTEMPTS);
    for _ in 0..ATTEMPTS {
        let store = store.clone();
        tasks.push(tokio::spawn(
            async move { store.admit_visit(&id).await },
        ));
    }

    let mut admitted = 0u32;
    for task in tasks {
        let outcome = task
            .await
            .expect("task not cancelled")
            .expect("store up");
        if outcome.is_admitted() {
            admitted += 1;
        }
    }

    assert_eq!(admitted, LIMIT);
    assert_eq!(store.visitor(&id).map(|v| v.visits), Some(LIMIT));
}

#[tokio::test(flavor = "multi_thread", worker_threads = 8)]
async fn unlimited_visitor_counts_every_concurrent_admission() {
    const ATTEMPTS: u32 = 64;

    let store = MemoryVisitorStore::new();
    let visitor = Visitor::new("fred@example.com", Scope::any());
    let id = visitor.id;
    store.insert_visitor(visitor);

    let mut tasks = Vec::with_capacity(ATTEMPTS as usize);
    for _ in 0..ATTEMPTS {
        let store = store.clone();
        tasks.push(tokio::spawn(
            async move { store.admit_visit(&id).await },
        ));
    }
    for task in tasks {
        task.await
            .expect("task not cancelled")
            .expect("store up");
    }

    assert_eq!(store.visitor(&id).map(|v| v.visits), Some(ATTEMPTS));
}
