use std::cell::Cell;
use std::collections::HashMap;

use super::*;

// =============================================================
// Fakes
// =============================================================

#[derive(Default)]
struct MemoryStore {
    values: HashMap<String, String>,
    read_error: Option<StorageError>,
    write_error: Option<StorageError>,
    reads: Cell<usize>,
    writes: usize,
}

impl MemoryStore {
    fn with(key: &str, value: &str) -> Self {
        let mut store = Self::default();
        store.values.insert(key.to_owned(), value.to_owned());
        store
    }
}

impl PreferenceStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        self.reads.set(self.reads.get() + 1);
        if let Some(err) = &self.read_error {
            return Err(err.clone());
        }
        Ok(self.values.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        self.writes += 1;
        if let Some(err) = &self.write_error {
            return Err(err.clone());
        }
        self.values.insert(key.to_owned(), value.to_owned());
        Ok(())
    }
}

struct FixedProbe(Option<bool>);

impl ColorSchemeProbe for FixedProbe {
    fn prefers_dark(&self) -> Option<bool> {
        self.0
    }
}

#[derive(Default)]
struct RecordingRoot {
    dark: Option<bool>,
    applied: usize,
}

impl DocumentRoot for RecordingRoot {
    fn set_dark(&mut self, dark: bool) {
        self.dark = Some(dark);
        self.applied += 1;
    }
}

fn controller(store: MemoryStore, os_dark: Option<bool>) -> DisplayModeController<MemoryStore, FixedProbe, RecordingRoot> {
    DisplayModeController::new(store, FixedProbe(os_dark), RecordingRoot::default())
}

// =============================================================
// resolve_initial
// =============================================================

#[test]
fn no_stored_value_and_os_dark_resolves_dark_and_sets_root_flag() {
    let mut ctrl = controller(MemoryStore::default(), Some(true));
    assert_eq!(ctrl.resolve_initial(), DisplayMode::Dark);
    assert_eq!(ctrl.root().dark, Some(true));
    assert_eq!(ctrl.root().applied, 1);
    assert_eq!(ctrl.preference(), DisplayModePreference::System);
}

#[test]
fn no_stored_value_and_no_os_preference_defaults_light() {
    let mut ctrl = controller(MemoryStore::default(), None);
    assert_eq!(ctrl.resolve_initial(), DisplayMode::Light);
    assert_eq!(ctrl.root().dark, Some(false));
}

#[test]
fn stored_value_wins_over_os_preference() {
    let mut ctrl = controller(MemoryStore::with(STORAGE_KEY, "false"), Some(true));
    assert_eq!(ctrl.resolve_initial(), DisplayMode::Light);
    assert_eq!(ctrl.preference(), DisplayModePreference::Light);

    let mut ctrl = controller(MemoryStore::with(STORAGE_KEY, "true"), Some(false));
    assert_eq!(ctrl.resolve_initial(), DisplayMode::Dark);
}

#[test]
fn stored_system_value_follows_os() {
    let mut ctrl = controller(MemoryStore::with(STORAGE_KEY, "system"), Some(true));
    assert_eq!(ctrl.resolve_initial(), DisplayMode::Dark);
    assert_eq!(ctrl.preference(), DisplayModePreference::System);
}

#[test]
fn unrecognized_stored_value_is_treated_as_absent() {
    let mut ctrl = controller(MemoryStore::with(STORAGE_KEY, "purple"), Some(true));
    assert_eq!(ctrl.resolve_initial(), DisplayMode::Dark);
    assert_eq!(ctrl.persistence(), Persistence::Durable);
}

#[test]
fn resolve_initial_is_idempotent() {
    let mut ctrl = controller(MemoryStore::with(STORAGE_KEY, "true"), Some(false));
    let first = ctrl.resolve_initial();
    let second = ctrl.resolve_initial();
    assert_eq!(first, second);
    assert_eq!(ctrl.store().writes, 0);
}

#[test]
fn resolve_initial_never_writes_storage() {
    let mut ctrl = controller(MemoryStore::default(), Some(true));
    ctrl.resolve_initial();
    assert_eq!(ctrl.store().writes, 0);
    assert!(ctrl.store().values.is_empty());
}

// =============================================================
// toggle
// =============================================================

#[test]
fn toggle_then_storage_read_returns_new_value() {
    let mut ctrl = controller(MemoryStore::default(), Some(false));
    ctrl.resolve_initial();
    let next = ctrl.toggle();
    assert_eq!(next, DisplayMode::Dark);
    let stored = ctrl.store().get(STORAGE_KEY).unwrap();
    assert_eq!(stored.as_deref().and_then(DisplayModePreference::parse), Some(DisplayModePreference::Dark));
    assert_eq!(ctrl.root().dark, Some(true));
}

#[test]
fn toggle_twice_returns_to_original_mode() {
    let mut ctrl = controller(MemoryStore::default(), Some(true));
    let initial = ctrl.resolve_initial();
    ctrl.toggle();
    assert_eq!(ctrl.toggle(), initial);
    assert_eq!(ctrl.store().get(STORAGE_KEY).unwrap().as_deref(), Some("true"));
}

#[test]
fn first_toggle_pins_system_preference() {
    let mut ctrl = controller(MemoryStore::default(), Some(true));
    ctrl.resolve_initial();
    assert_eq!(ctrl.preference(), DisplayModePreference::System);
    ctrl.toggle();
    assert_eq!(ctrl.preference(), DisplayModePreference::Light);
}

#[test]
fn toggle_before_resolve_resolves_first() {
    let mut ctrl = controller(MemoryStore::default(), Some(true));
    assert_eq!(ctrl.toggle(), DisplayMode::Light);
}

// =============================================================
// Storage failures
// =============================================================

#[test]
fn read_failure_falls_back_to_os_and_goes_memory_only() {
    let store = MemoryStore { read_error: Some(StorageError::PermissionDenied), ..MemoryStore::default() };
    let mut ctrl = controller(store, Some(true));
    assert_eq!(ctrl.resolve_initial(), DisplayMode::Dark);
    assert_eq!(ctrl.persistence(), Persistence::MemoryOnly);
}

#[test]
fn read_failure_keeps_resolution_idempotent_without_rereading() {
    let store = MemoryStore { read_error: Some(StorageError::Unavailable), ..MemoryStore::default() };
    let mut ctrl = controller(store, Some(false));
    let first = ctrl.resolve_initial();
    let second = ctrl.resolve_initial();
    assert_eq!(first, second);
    assert_eq!(ctrl.store().reads.get(), 1);
}

#[test]
fn write_failure_still_toggles_in_memory() {
    let store = MemoryStore { write_error: Some(StorageError::QuotaExceeded), ..MemoryStore::default() };
    let mut ctrl = controller(store, Some(false));
    ctrl.resolve_initial();
    assert_eq!(ctrl.toggle(), DisplayMode::Dark);
    assert_eq!(ctrl.mode(), DisplayMode::Dark);
    assert_eq!(ctrl.root().dark, Some(true));
    assert_eq!(ctrl.persistence(), Persistence::MemoryOnly);
}

#[test]
fn after_write_failure_storage_is_not_touched_again() {
    let store = MemoryStore { write_error: Some(StorageError::Backend("boom".to_owned())), ..MemoryStore::default() };
    let mut ctrl = controller(store, Some(false));
    ctrl.resolve_initial();
    ctrl.toggle();
    ctrl.toggle();
    ctrl.toggle();
    assert_eq!(ctrl.store().writes, 1);
    assert_eq!(ctrl.mode(), DisplayMode::Dark);
}

#[test]
fn memory_only_resolution_keeps_toggled_preference() {
    let store = MemoryStore { write_error: Some(StorageError::QuotaExceeded), ..MemoryStore::default() };
    let mut ctrl = controller(store, Some(false));
    ctrl.resolve_initial();
    ctrl.toggle();
    assert_eq!(ctrl.resolve_initial(), DisplayMode::Dark);
}

// =============================================================
// Value parsing
// =============================================================

#[test]
fn preference_parses_flag_and_named_values() {
    assert_eq!(DisplayModePreference::parse("true"), Some(DisplayModePreference::Dark));
    assert_eq!(DisplayModePreference::parse("false"), Some(DisplayModePreference::Light));
    assert_eq!(DisplayModePreference::parse("dark"), Some(DisplayModePreference::Dark));
    assert_eq!(DisplayModePreference::parse(" light "), Some(DisplayModePreference::Light));
    assert_eq!(DisplayModePreference::parse("system"), Some(DisplayModePreference::System));
    assert_eq!(DisplayModePreference::parse(""), None);
}

#[test]
fn stored_values_parse_back_to_same_preference() {
    for pref in [DisplayModePreference::Light, DisplayModePreference::Dark, DisplayModePreference::System] {
        assert_eq!(DisplayModePreference::parse(pref.as_stored()), Some(pref));
    }
}

#[test]
fn storage_error_messages_are_readable() {
    assert_eq!(StorageError::QuotaExceeded.to_string(), "storage quota exceeded");
    assert_eq!(StorageError::Backend("x".to_owned()).to_string(), "storage backend error: x");
}
