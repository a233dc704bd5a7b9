//! Theme preference store.
//!
//! A tri-state persisted preference (`light`/`dark`/`system`) resolved
//! against the OS dark-mode signal at apply time. `system` is not a third
//! rendered appearance; it resolves to light or dark whenever the theme is
//! applied, while the stored preference itself stays `system`.
//!
//! The store is an explicit context object: the platform layer constructs
//! it once at startup with its storage, scheme source and appearance sink,
//! forwards OS scheme changes to it while the process lives, and calls
//! [`ThemeStore::close`] on the way out.

use std::fmt;
use std::io;
use std::path::PathBuf;

/// Storage key the preference is persisted under.
pub const THEME_PREF_KEY: &str = "theme-mode";

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum ThemeMode {
    Light,
    Dark,
    #[default]
    System,
}

impl ThemeMode {
    pub fn as_str(self) -> &'static str {
        match self {
            ThemeMode::Light => "light",
            ThemeMode::Dark => "dark",
            ThemeMode::System => "system",
        }
    }

    /// Parse a stored token. Anything that is not one of the three valid
    /// tokens (corrupted storage, pre-migration values) silently falls back
    /// to `System`.
    pub fn parse(token: &str) -> ThemeMode {
        match token {
            "light" => ThemeMode::Light,
            "dark" => ThemeMode::Dark,
            _ => ThemeMode::System,
        }
    }

    /// Fixed cycle: light -> dark -> system -> light.
    pub fn next(self) -> ThemeMode {
        match self {
            ThemeMode::Light => ThemeMode::Dark,
            ThemeMode::Dark => ThemeMode::System,
            ThemeMode::System => ThemeMode::Light,
        }
    }
}

impl fmt::Display for ThemeMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A resolved visual appearance, the only observable output of the store.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Appearance {
    Light,
    Dark,
}

impl Appearance {
    pub fn as_str(self) -> &'static str {
        match self {
            Appearance::Light => "light",
            Appearance::Dark => "dark",
        }
    }
}

/// Durable key/value storage for UI preferences (the localStorage seam).
pub trait PreferenceStore {
    fn read(&self, key: &str) -> io::Result<Option<String>>;
    fn write(&mut self, key: &str, value: &str) -> io::Result<()>;
}

/// File-backed preference storage: one file per key under a directory.
#[derive(Debug, Clone)]
pub struct FilePreferenceStore {
    dir: PathBuf,
}

impl FilePreferenceStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }
}

impl PreferenceStore for FilePreferenceStore {
    fn read(&self, key: &str) -> io::Result<Option<String>> {
        match std::fs::read_to_string(self.dir.join(key)) {
            Ok(value) => Ok(Some(value.trim_end().to_string())),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e),
        }
    }

    fn write(&mut self, key: &str, value: &str) -> io::Result<()> {
        std::fs::create_dir_all(&self.dir)?;
        std::fs::write(self.dir.join(key), value)
    }
}

/// The OS dark-mode signal (the `prefers-color-scheme` seam).
pub trait SystemScheme {
    fn prefers_dark(&self) -> bool;
}

/// Scheme source for the headless shell: honors the `QUESTEDIT_COLOR_SCHEME`
/// environment variable (`dark` means dark, anything else light).
#[derive(Debug, Clone, Copy, Default)]
pub struct EnvScheme;

impl SystemScheme for EnvScheme {
    fn prefers_dark(&self) -> bool {
        std::env::var("QUESTEDIT_COLOR_SCHEME")
            .map(|v| v.eq_ignore_ascii_case("dark"))
            .unwrap_or(false)
    }
}

/// Receiver of the applied appearance attribute (the DOM attribute seam).
pub trait AppearanceSink {
    fn apply(&mut self, appearance: Appearance);
}

pub struct ThemeStore<P, S, A> {
    mode: ThemeMode,
    prefs: P,
    scheme: S,
    sink: A,
}

impl<P, S, A> ThemeStore<P, S, A>
where
    P: PreferenceStore,
    S: SystemScheme,
    A: AppearanceSink,
{
    /// Read the stored preference (absent or invalid values become
    /// `System`), write the normalized token back so storage never keeps
    /// a corrupt value past startup, and immediately apply the resolved
    /// appearance.
    pub fn init(prefs: P, scheme: S, sink: A) -> io::Result<Self> {
        let mode = prefs
            .read(THEME_PREF_KEY)?
            .map(|token| ThemeMode::parse(&token))
            .unwrap_or_default();
        let mut store = Self {
            mode,
            prefs,
            scheme,
            sink,
        };
        store.prefs.write(THEME_PREF_KEY, mode.as_str())?;
        store.apply();
        Ok(store)
    }

    pub fn mode(&self) -> ThemeMode {
        self.mode
    }

    /// The appearance the current mode resolves to right now.
    pub fn resolved(&self) -> Appearance {
        match self.mode {
            ThemeMode::Light => Appearance::Light,
            ThemeMode::Dark => Appearance::Dark,
            ThemeMode::System => {
                if self.scheme.prefers_dark() {
                    Appearance::Dark
                } else {
                    Appearance::Light
                }
            }
        }
    }

    fn apply(&mut self) {
        let appearance = self.resolved();
        self.sink.apply(appearance);
    }

    /// Set the stored preference unconditionally, persist it and re-apply.
    pub fn set(&mut self, mode: ThemeMode) -> io::Result<()> {
        self.mode = mode;
        self.apply();
        self.prefs.write(THEME_PREF_KEY, mode.as_str())
    }

    /// Advance through the fixed light -> dark -> system cycle.
    pub fn cycle(&mut self) -> io::Result<ThemeMode> {
        let next = self.mode.next();
        self.set(next)?;
        Ok(next)
    }

    /// The platform layer calls this whenever the OS scheme flips. Only a
    /// stored `System` preference re-resolves; explicit light/dark ignore
    /// the signal.
    pub fn system_scheme_changed(&mut self) {
        if self.mode == ThemeMode::System {
            self.apply();
        }
    }

    /// Explicit teardown. The platform layer must stop forwarding scheme
    /// changes once the store is closed; the preference itself stays on
    /// disk.
    pub fn close(self) -> A {
        self.sink
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::{Cell, RefCell};
    use std::rc::Rc;
    use tempfile::TempDir;

    #[derive(Clone, Default)]
    struct TestScheme(Rc<Cell<bool>>);

    impl SystemScheme for TestScheme {
        fn prefers_dark(&self) -> bool {
            self.0.get()
        }
    }

    #[derive(Clone, Default)]
    struct TestSink(Rc<RefCell<Vec<Appearance>>>);

    impl AppearanceSink for TestSink {
        fn apply(&mut self, appearance: Appearance) {
            self.0.borrow_mut().push(appearance);
        }
    }

    fn store_in(
        dir: &TempDir,
        scheme: TestScheme,
        sink: TestSink,
    ) -> ThemeStore<FilePreferenceStore, TestScheme, TestSink> {
        ThemeStore::init(FilePreferenceStore::new(dir.path()), scheme, sink).unwrap()
    }

    #[test]
    fn cycle_returns_to_start_after_three_steps() {
        for start in [ThemeMode::Light, ThemeMode::Dark, ThemeMode::System] {
            assert_eq!(start.next().next().next(), start);
        }
    }

    #[test]
    fn initial_mode_defaults_to_system() {
        let dir = TempDir::new().unwrap();
        let store = store_in(&dir, TestScheme::default(), TestSink::default());
        assert_eq!(store.mode(), ThemeMode::System);
    }

    #[test]
    fn preference_round_trips_across_restart() {
        let dir = TempDir::new().unwrap();
        for mode in [ThemeMode::Light, ThemeMode::Dark, ThemeMode::System] {
            {
                let mut store = store_in(&dir, TestScheme::default(), TestSink::default());
                store.set(mode).unwrap();
            }
            // simulated restart: fresh store over the same directory
            let store = store_in(&dir, TestScheme::default(), TestSink::default());
            assert_eq!(store.mode(), mode);
        }
    }

    #[test]
    fn invalid_stored_token_normalizes_to_system() {
        let dir = TempDir::new().unwrap();
        std::fs::write(dir.path().join(THEME_PREF_KEY), "solarized").unwrap();
        let store = store_in(&dir, TestScheme::default(), TestSink::default());
        assert_eq!(store.mode(), ThemeMode::System);
    }

    #[test]
    fn init_rewrites_the_stored_token_in_place() {
        let dir = TempDir::new().unwrap();
        let pref_file = dir.path().join(THEME_PREF_KEY);
        std::fs::write(&pref_file, "solarized").unwrap();
        store_in(&dir, TestScheme::default(), TestSink::default());
        // the corrupt token must not survive startup
        assert_eq!(std::fs::read_to_string(&pref_file).unwrap(), "system");

        // a fresh directory gets the default written out too
        let dir = TempDir::new().unwrap();
        store_in(&dir, TestScheme::default(), TestSink::default());
        assert_eq!(
            std::fs::read_to_string(dir.path().join(THEME_PREF_KEY)).unwrap(),
            "system"
        );
    }

    #[test]
    fn init_applies_the_resolved_appearance() {
        let dir = TempDir::new().unwrap();
        let scheme = TestScheme::default();
        scheme.0.set(true);
        let sink = TestSink::default();
        let applied = sink.0.clone();
        let store = store_in(&dir, scheme, sink);
        assert_eq!(*applied.borrow(), vec![Appearance::Dark]);
        assert_eq!(store.resolved(), Appearance::Dark);
    }

    #[test]
    fn system_mode_follows_the_os_signal() {
        let dir = TempDir::new().unwrap();
        let scheme = TestScheme::default();
        let sink = TestSink::default();
        let applied = sink.0.clone();
        let mut store = store_in(&dir, scheme.clone(), sink);
        assert_eq!(applied.borrow().last(), Some(&Appearance::Light));

        scheme.0.set(true);
        store.system_scheme_changed();
        assert_eq!(applied.borrow().last(), Some(&Appearance::Dark));

        scheme.0.set(false);
        store.system_scheme_changed();
        assert_eq!(applied.borrow().last(), Some(&Appearance::Light));
    }

    #[test]
    fn explicit_modes_ignore_the_os_signal() {
        let dir = TempDir::new().unwrap();
        let scheme = TestScheme::default();
        let sink = TestSink::default();
        let applied = sink.0.clone();
        let mut store = store_in(&dir, scheme.clone(), sink);

        store.set(ThemeMode::Dark).unwrap();
        let count = applied.borrow().len();
        scheme.0.set(true);
        store.system_scheme_changed();
        scheme.0.set(false);
        store.system_scheme_changed();
        // no re-application happened
        assert_eq!(applied.borrow().len(), count);
        assert_eq!(applied.borrow().last(), Some(&Appearance::Dark));
    }

    #[test]
    fn set_overwrites_any_prior_mode_and_reapplies() {
        let dir = TempDir::new().unwrap();
        let sink = TestSink::default();
        let applied = sink.0.clone();
        let mut store = store_in(&dir, TestScheme::default(), sink);

        store.set(ThemeMode::Dark).unwrap();
        store.set(ThemeMode::Light).unwrap();
        assert_eq!(store.mode(), ThemeMode::Light);
        assert_eq!(
            *applied.borrow(),
            vec![Appearance::Light, Appearance::Dark, Appearance::Light]
        );
    }

    #[test]
    fn cycle_persists_each_step() {
        let dir = TempDir::new().unwrap();
        let mut store = store_in(&dir, TestScheme::default(), TestSink::default());
        assert_eq!(store.cycle().unwrap(), ThemeMode::Light);
        assert_eq!(store.cycle().unwrap(), ThemeMode::Dark);

        let store = store_in(&dir, TestScheme::default(), TestSink::default());
        assert_eq!(store.mode(), ThemeMode::Dark);
    }
}
