//! Site navigation entries and active-route matching.
//!
//! DESIGN
//! ======
//! Matching is a pure function of `(entries, current_path)` so the header can
//! derive per-entry flags from the router without owning any route state.
//! At most one entry is active for any path, regardless of match mode.

#[cfg(test)]
#[path = "nav_test.rs"]
mod nav_test;

/// One link in the primary site navigation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NavigationEntry {
    pub label: &'static str,
    pub path: &'static str,
}

impl NavigationEntry {
    pub const fn new(label: &'static str, path: &'static str) -> Self {
        Self { label, path }
    }
}

/// Primary navigation shared by the header and the footer.
pub const NAV_ENTRIES: &[NavigationEntry] = &[
    NavigationEntry::new("About", "/about"),
    NavigationEntry::new("Projects", "/projects"),
    NavigationEntry::new("Ideas", "/ideas"),
    NavigationEntry::new("Apply", "/apply"),
];

/// Path of the landing page. The header hides its home logo here.
pub const HOME_PATH: &str = "/";

/// How an entry's path is compared against the current route.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ActiveMatch {
    /// Entry path must equal the current path.
    #[default]
    Exact,
    /// Entry path may also be a segment-aligned prefix (`/projects` matches
    /// `/projects/pictopy`). The longest matching path wins.
    Prefix,
}

impl ActiveMatch {
    fn matches(self, entry_path: &str, current_path: &str) -> bool {
        match self {
            Self::Exact => entry_path == current_path,
            Self::Prefix => is_segment_prefix(entry_path, current_path),
        }
    }
}

fn is_segment_prefix(entry_path: &str, current_path: &str) -> bool {
    let entry_path = entry_path.trim_end_matches('/');
    if entry_path.is_empty() {
        // The root only ever matches itself.
        return current_path == HOME_PATH;
    }
    match current_path.strip_prefix(entry_path) {
        Some(rest) => rest.is_empty() || rest.starts_with('/'),
        None => false,
    }
}

/// Return the entry whose path equals `current_path`, if any.
///
/// No match is a valid state (home page, unknown routes).
pub fn compute_active_entry<'a>(
    entries: &'a [NavigationEntry],
    current_path: &str,
) -> Option<&'a NavigationEntry> {
    compute_active_entry_with(entries, current_path, ActiveMatch::Exact)
}

/// Like [`compute_active_entry`] with an explicit match mode.
pub fn compute_active_entry_with<'a>(
    entries: &'a [NavigationEntry],
    current_path: &str,
    mode: ActiveMatch,
) -> Option<&'a NavigationEntry> {
    match mode {
        ActiveMatch::Exact => entries.iter().find(|e| mode.matches(e.path, current_path)),
        ActiveMatch::Prefix => entries
            .iter()
            .filter(|e| mode.matches(e.path, current_path))
            .max_by_key(|e| e.path.trim_end_matches('/').len()),
    }
}

/// Per-entry active flags, aligned with `entries`. At most one is `true`.
pub fn active_flags(entries: &[NavigationEntry], current_path: &str, mode: ActiveMatch) -> Vec<bool> {
    let active = compute_active_entry_with(entries, current_path, mode);
    entries
        .iter()
        .map(|e| active.is_some_and(|a| std::ptr::eq(a, e)))
        .collect()
}

/// Whether the home logo should be shown for `current_path`.
pub fn shows_home_logo(current_path: &str) -> bool {
    current_path != HOME_PATH
}
