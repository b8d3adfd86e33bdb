//! UserStore mutation tests
//!
//! The store is only ever touched after a remote call succeeds; these tests
//! cover the load annotation rules and the four mutation operations.

mod common;

use common::{draft, init_logging, raw_user};
use roster_client::store::UserStore;
use roster_model::{RawUser, DEFAULT_DEPARTMENT};

fn loaded_store(count: u64) -> UserStore {
    let mut store = UserStore::new();
    let raw: Vec<RawUser> = (1..=count)
        .map(|i| raw_user(i, &format!("First{i} Last{i}"), &format!("u{i}@corp.com")))
        .collect();
    store.load(raw);
    store
}

#[test]
fn load_annotates_names_and_departments() {
    init_logging();
    let mut store = UserStore::new();
    store.load(vec![
        raw_user(1, "Leanne Graham", "leanne@corp.com"),
        raw_user(2, "Clementine Bauch Sr.", "clem@corp.com"),
        raw_user(3, "Prince", "prince@corp.com"),
    ]);

    let users = store.users();
    assert_eq!(users[0].first_name, "Leanne");
    assert_eq!(users[0].last_name, "Graham");
    assert_eq!(users[0].department, DEFAULT_DEPARTMENT);

    // Split happens on the first space only.
    assert_eq!(users[1].first_name, "Clementine");
    assert_eq!(users[1].last_name, "Bauch Sr.");

    // No space: everything is the first name.
    assert_eq!(users[2].first_name, "Prince");
    assert_eq!(users[2].last_name, "");
}

#[test]
fn load_replaces_previous_contents() {
    let mut store = loaded_store(5);
    store.load(vec![raw_user(9, "Solo User", "solo@corp.com")]);
    assert_eq!(store.len(), 1);
    assert!(store.get(1).is_none());
    assert!(store.get(9).is_some());
}

#[test]
fn append_created_prefers_the_server_id() {
    let mut store = loaded_store(3);
    let id = store.append_created(&draft("Nia", "North", "nia@corp.com", "Sales"), Some(42));
    assert_eq!(id, 42);
    assert_eq!(store.get(42).unwrap().first_name, "Nia");
    assert_eq!(store.users().last().unwrap().id, 42);
}

#[test]
fn append_created_fallback_stays_unique_after_deletions() {
    let mut store = loaded_store(3);
    store.remove_by_id(2);
    // A length-based fallback would reuse id 3 here.
    let id = store.append_created(&draft("Nia", "North", "nia@corp.com", "Sales"), None);
    assert_eq!(id, 4);

    let mut ids: Vec<u64> = store.users().iter().map(|u| u.id).collect();
    ids.sort_unstable();
    ids.dedup();
    assert_eq!(ids.len(), store.len());
}

#[test]
fn append_created_fallback_on_empty_store_starts_at_one() {
    let mut store = UserStore::new();
    let id = store.append_created(&draft("Nia", "North", "nia@corp.com", "Sales"), None);
    assert_eq!(id, 1);
}

#[test]
fn update_in_place_merges_draft_fields() {
    let mut store = loaded_store(3);
    let updated = store.update_in_place(2, &draft("New", "Name", "new@corp.com", "Support"));
    assert!(updated);

    let user = store.get(2).unwrap();
    assert_eq!(user.first_name, "New");
    assert_eq!(user.email, "new@corp.com");
    assert_eq!(user.department, "Support");
    // Identity and position are untouched.
    assert_eq!(store.users()[1].id, 2);
    assert_eq!(store.len(), 3);
}

#[test]
fn update_in_place_is_a_no_op_for_unknown_ids() {
    let mut store = loaded_store(3);
    let before: Vec<_> = store.users().to_vec();
    assert!(!store.update_in_place(99, &draft("X", "Y", "x@y.co", "Z")));
    assert_eq!(store.users(), &before[..]);
}

#[test]
fn remove_by_id_drops_exactly_one_record() {
    let mut store = loaded_store(10);
    assert!(store.remove_by_id(5));
    assert_eq!(store.len(), 9);
    assert!(store.get(5).is_none());

    // Removing again is a no-op.
    assert!(!store.remove_by_id(5));
    assert_eq!(store.len(), 9);
}

#[test]
fn clear_empties_the_collection() {
    let mut store = loaded_store(4);
    store.clear();
    assert!(store.is_empty());
    assert_eq!(store.len(), 0);
}
