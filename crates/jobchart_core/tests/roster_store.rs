use jobchart_core::db::{open_db, open_db_in_memory};
use jobchart_core::{
    KeyValueStore, MemoryKeyValueStore, Roster, RosterPair, RosterStore, SqliteKeyValueStore,
    ROSTER_STORAGE_KEY,
};

fn pair(third: &[&str], second: &[&str]) -> RosterPair {
    RosterPair::new(
        Roster::from_names(third.iter().copied()),
        Roster::from_names(second.iter().copied()),
    )
}

#[test]
fn load_without_record_returns_empty_rosters() {
    let store = RosterStore::new(MemoryKeyValueStore::new());
    assert_eq!(store.load().unwrap(), RosterPair::default());
}

#[test]
fn load_recovers_from_invalid_json() {
    let backend = MemoryKeyValueStore::new();
    backend.set(ROSTER_STORAGE_KEY, "{third: [oops").unwrap();
    let store = RosterStore::new(&backend);

    assert_eq!(store.load().unwrap(), RosterPair::default());
}

#[test]
fn load_defaults_only_the_field_that_is_not_an_array() {
    let backend = MemoryKeyValueStore::new();
    backend
        .set(
            ROSTER_STORAGE_KEY,
            r#"{"third":"not-an-array","second":["X"]}"#,
        )
        .unwrap();
    let store = RosterStore::new(&backend);

    assert_eq!(store.load().unwrap(), pair(&[], &["X"]));
}

#[test]
fn save_then_load_round_trip_keeps_order_and_duplicates() {
    let store = RosterStore::new(MemoryKeyValueStore::new());
    let rosters = pair(&["Ann", "Bo", "Ann"], &["Cy"]);
    store.save(&rosters).unwrap();
    assert_eq!(store.load().unwrap(), rosters);
}

#[test]
fn saving_identical_rosters_twice_is_idempotent() {
    let store = RosterStore::new(MemoryKeyValueStore::new());
    let rosters = pair(&["Ann"], &["Cy", "Di"]);

    store.save(&rosters).unwrap();
    let first = store.backend().get(ROSTER_STORAGE_KEY).unwrap();
    store.save(&rosters).unwrap();
    let second = store.backend().get(ROSTER_STORAGE_KEY).unwrap();

    assert_eq!(first, second);
    assert_eq!(store.backend().len(), 1);
}

#[test]
fn clear_removes_the_record() {
    let conn = open_db_in_memory().unwrap();
    let store = RosterStore::new(SqliteKeyValueStore::try_new(&conn).unwrap());
    store.save(&pair(&["Ann"], &["Cy"])).unwrap();

    store.clear().unwrap();

    assert_eq!(store.backend().get(ROSTER_STORAGE_KEY).unwrap(), None);
    assert_eq!(store.load().unwrap(), RosterPair::default());
}

#[test]
fn rosters_survive_reopening_the_database_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("jobchart.sqlite3");
    let rosters = pair(&["Ann", "Bo"], &["Cy"]);

    {
        let conn = open_db(&path).unwrap();
        let store = RosterStore::new(SqliteKeyValueStore::try_new(&conn).unwrap());
        store.save(&rosters).unwrap();
    }

    let conn = open_db(&path).unwrap();
    let store = RosterStore::new(SqliteKeyValueStore::try_new(&conn).unwrap());
    assert_eq!(store.load().unwrap(), rosters);
}

#[test]
fn load_shows_numeric_entries_as_names() {
    let backend = MemoryKeyValueStore::new();
    backend
        .set(ROSTER_STORAGE_KEY, r#"{"third":[7,"Ann"],"second":["Cy"]}"#)
        .unwrap();
    let store = RosterStore::new(&backend);

    assert_eq!(store.load().unwrap(), pair(&["7", "Ann"], &["Cy"]));
}
