//! Light/dark display-mode preference and its controller.
//!
//! DESIGN
//! ======
//! The controller owns the preference and talks to three injected
//! collaborators: a key/value [`PreferenceStore`], an OS [`ColorSchemeProbe`],
//! and the [`DocumentRoot`] style scope. Browser implementations live in
//! `util::dark_mode`; tests use in-memory fakes.
//!
//! ERROR HANDLING
//! ==============
//! Storage failures are logged and swallowed. After the first failure the
//! controller stops touching storage and keeps the preference in memory for
//! the rest of the session.

#[cfg(test)]
#[path = "display_mode_test.rs"]
mod display_mode_test;

/// Storage key for the persisted preference.
pub const STORAGE_KEY: &str = "isDarkMode";

/// Failure reported by a [`PreferenceStore`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StorageError {
    #[error("storage is unavailable")]
    Unavailable,
    #[error("storage quota exceeded")]
    QuotaExceeded,
    #[error("storage access denied")]
    PermissionDenied,
    #[error("storage backend error: {0}")]
    Backend(String),
}

/// Key/value persistence for the preference (`localStorage` in the browser).
pub trait PreferenceStore {
    /// Read `key`, `Ok(None)` when absent.
    ///
    /// # Errors
    ///
    /// Returns a [`StorageError`] when the backend cannot be read.
    fn get(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Write `value` under `key`.
    ///
    /// # Errors
    ///
    /// Returns a [`StorageError`] when the backend rejects the write.
    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError>;
}

/// OS-level colour scheme preference. `None` when it cannot be queried.
pub trait ColorSchemeProbe {
    fn prefers_dark(&self) -> Option<bool>;
}

/// Root style scope that carries the dark-mode flag.
pub trait DocumentRoot {
    fn set_dark(&mut self, dark: bool);
}

/// Effective mode the page is rendered in.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum DisplayMode {
    #[default]
    Light,
    Dark,
}

impl DisplayMode {
    #[must_use]
    pub fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    pub fn is_dark(self) -> bool {
        self == Self::Dark
    }
}

/// What the user asked for. `System` follows the OS until the first toggle.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum DisplayModePreference {
    Light,
    Dark,
    #[default]
    System,
}

impl DisplayModePreference {
    /// Parse a stored value. Accepts the `"true"`/`"false"` flag format as
    /// well as `dark`, `light` and `system`.
    pub fn parse(raw: &str) -> Option<Self> {
        match raw.trim() {
            "true" | "dark" => Some(Self::Dark),
            "false" | "light" => Some(Self::Light),
            "system" => Some(Self::System),
            _ => None,
        }
    }

    /// Value written to storage.
    pub fn as_stored(self) -> &'static str {
        match self {
            Self::Dark => "true",
            Self::Light => "false",
            Self::System => "system",
        }
    }
}

impl From<DisplayMode> for DisplayModePreference {
    fn from(mode: DisplayMode) -> Self {
        match mode {
            DisplayMode::Light => Self::Light,
            DisplayMode::Dark => Self::Dark,
        }
    }
}

/// Whether the preference still reaches storage.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Persistence {
    Durable,
    MemoryOnly,
}

/// Resolves, toggles and persists the display mode.
#[derive(Debug)]
pub struct DisplayModeController<S, P, R> {
    store: S,
    probe: P,
    root: R,
    preference: DisplayModePreference,
    mode: DisplayMode,
    persistence: Persistence,
    resolved: bool,
}

impl<S, P, R> DisplayModeController<S, P, R>
where
    S: PreferenceStore,
    P: ColorSchemeProbe,
    R: DocumentRoot,
{
    pub fn new(store: S, probe: P, root: R) -> Self {
        Self {
            store,
            probe,
            root,
            preference: DisplayModePreference::System,
            mode: DisplayMode::Light,
            persistence: Persistence::Durable,
            resolved: false,
        }
    }

    /// Resolve the mode at mount: stored preference, then the OS preference,
    /// then light. Applies the root flag; never writes storage.
    pub fn resolve_initial(&mut self) -> DisplayMode {
        self.preference = self.read_stored().unwrap_or_default();
        self.mode = self.effective(self.preference);
        self.root.set_dark(self.mode.is_dark());
        self.resolved = true;
        self.mode
    }

    /// Flip between light and dark, apply it, and persist it.
    ///
    /// A `System` preference is pinned to the concrete mode it resolved to.
    pub fn toggle(&mut self) -> DisplayMode {
        if !self.resolved {
            self.resolve_initial();
        }
        let next = self.mode.toggled();
        self.mode = next;
        self.preference = next.into();
        self.root.set_dark(next.is_dark());
        self.persist(self.preference);
        next
    }

    pub fn mode(&self) -> DisplayMode {
        self.mode
    }

    pub fn preference(&self) -> DisplayModePreference {
        self.preference
    }

    pub fn persistence(&self) -> Persistence {
        self.persistence
    }

    #[cfg(test)]
    pub(crate) fn store(&self) -> &S {
        &self.store
    }

    #[cfg(test)]
    pub(crate) fn root(&self) -> &R {
        &self.root
    }

    fn effective(&self, preference: DisplayModePreference) -> DisplayMode {
        match preference {
            DisplayModePreference::Light => DisplayMode::Light,
            DisplayModePreference::Dark => DisplayMode::Dark,
            DisplayModePreference::System => match self.probe.prefers_dark() {
                Some(true) => DisplayMode::Dark,
                Some(false) | None => DisplayMode::Light,
            },
        }
    }

    fn read_stored(&mut self) -> Option<DisplayModePreference> {
        if self.persistence == Persistence::MemoryOnly {
            return Some(self.preference);
        }
        match self.store.get(STORAGE_KEY) {
            Ok(Some(raw)) => {
                let parsed = DisplayModePreference::parse(&raw);
                if parsed.is_none() {
                    leptos::logging::warn!("ignoring unrecognized display mode value {raw:?}");
                }
                parsed
            }
            Ok(None) => None,
            Err(e) => {
                self.degrade(&e);
                None
            }
        }
    }

    fn persist(&mut self, preference: DisplayModePreference) {
        if self.persistence == Persistence::MemoryOnly {
            return;
        }
        if let Err(e) = self.store.set(STORAGE_KEY, preference.as_stored()) {
            self.degrade(&e);
        }
    }

    fn degrade(&mut self, error: &StorageError) {
        leptos::logging::warn!("display mode storage failed, keeping preference in memory: {error}");
        self.persistence = Persistence::MemoryOnly;
    }
}
