pub mod locale;
pub mod session;
pub mod theme;

use clap::Parser;
use locale::Locale;
use quest_data::catalog::Enemy;
use quest_data::SerDeFile as _;
use serde::{Deserialize, Serialize};
use session::Session;
use theme::{Appearance, AppearanceSink, EnvScheme, FilePreferenceStore, ThemeMode, ThemeStore};

#[derive(Serialize, Deserialize)]
#[serde(default)]
struct Settings {
    prefs_dir: String,
    log_dir: String,
    file_log_level: log::LevelFilter,
    console_log_level: log::LevelFilter,
    catalog_dir: Option<String>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            prefs_dir: String::from("prefs"),
            log_dir: String::from("logs"),
            file_log_level: log::LevelFilter::Info,
            console_log_level: log::LevelFilter::Debug,
            catalog_dir: None,
        }
    }
}

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Location of the settings file
    #[arg(long)]
    settings_file: Option<String>,
    /// Don't create settings file if it doesn't exist
    #[arg(long, default_value_t = false)]
    dont_create_settings: bool,
    /// Location of the preferences directory
    #[arg(long)]
    prefs_dir: Option<String>,
    /// Location of the logs directory
    #[arg(long)]
    log_dir: Option<String>,
    /// Log level of log files
    #[arg(long)]
    file_log_level: Option<log::LevelFilter>,
    /// Log level of console
    #[arg(long)]
    console_log_level: Option<log::LevelFilter>,
    /// Location of the compiled catalogs (items.json, enemies.json)
    #[arg(long)]
    catalog_dir: Option<String>,

    /// Create a default quest file at this path
    #[arg(short, long)]
    new: Option<String>,
    /// Quest level for --new (★1..★9 in the editor)
    #[arg(short, long, default_value_t = 1)]
    level: u32,
    /// Stage code for --new (st401, st001, st101, st201, st301)
    #[arg(short, long, default_value = "st401")]
    stage: String,
    /// Number of monsters to seed for --new
    #[arg(short, long, default_value_t = 0)]
    monsters: u32,
    /// Print a summary of an existing quest file
    #[arg(long)]
    show: Option<String>,
    /// Set the theme preference (light|dark|system)
    #[arg(short, long)]
    theme: Option<String>,
    /// Advance the theme preference one step (light -> dark -> system)
    #[arg(long, default_value_t = false)]
    cycle_theme: bool,
}

macro_rules! args_to_settings {
    ($arg:expr => $set:expr) => {
        if let Some(x) = $arg {
            $set = x;
        }
    };
}

impl Settings {
    fn load(path: &str, args: &mut Args) -> Result<Settings, Error> {
        let path = args.settings_file.as_deref().unwrap_or(path);
        let mut settings = match std::fs::read_to_string(path) {
            Ok(s) => toml::from_str(&s)?,
            Err(_) => {
                let settings = Settings::default();
                if !args.dont_create_settings {
                    std::fs::write(path, toml::to_string_pretty(&settings)?)?;
                }
                settings
            }
        };
        args_to_settings!(args.prefs_dir.take() => settings.prefs_dir);
        args_to_settings!(args.log_dir.take() => settings.log_dir);
        args_to_settings!(args.file_log_level.take() => settings.file_log_level);
        args_to_settings!(args.console_log_level.take() => settings.console_log_level);
        settings.catalog_dir = args.catalog_dir.take().or(settings.catalog_dir);
        Ok(settings)
    }
}

#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("Unknown stage code: {0}")]
    UnknownStage(String),
    #[error("Invalid theme mode: {0}")]
    InvalidThemeMode(String),
    #[error("IO error: {0}")]
    IOError(#[from] std::io::Error),
    #[error(transparent)]
    DataError(#[from] quest_data::Error),
    #[error("TOML Serialization error: {0}")]
    TomlSerError(#[from] toml::ser::Error),
    #[error("TOML Deserialization error: {0}")]
    TomlDeError(#[from] toml::de::Error),
}

/// Appearance sink of the headless shell: the applied attribute only shows
/// up in the log. A rendering front end would swap in its own sink here.
struct LogSink;

impl AppearanceSink for LogSink {
    fn apply(&mut self, appearance: Appearance) {
        log::debug!("Applied appearance: {}", appearance.as_str());
    }
}

pub fn run() -> Result<(), Error> {
    let mut args = Args::parse();
    let settings = Settings::load("questedit.toml", &mut args)?;
    // setup logging
    {
        use simplelog::*;
        let _ = std::fs::create_dir_all(&settings.log_dir);
        let mut path = std::path::PathBuf::from(&settings.log_dir);
        path.push(format!(
            "questedit_{}.log",
            std::time::SystemTime::now()
                .duration_since(std::time::UNIX_EPOCH)
                .unwrap()
                .as_secs()
        ));
        let log_file = std::fs::File::create(path)?;
        CombinedLogger::init(vec![
            TermLogger::new(
                settings.console_log_level,
                Config::default(),
                TerminalMode::Mixed,
                ColorChoice::Auto,
            ),
            WriteLogger::new(settings.file_log_level, Config::default(), log_file),
        ])
        .unwrap();
    }
    log::info!("Starting quest editor (locale: {})", Locale::from_env().as_str());

    let mut theme_store =
        ThemeStore::init(FilePreferenceStore::new(&settings.prefs_dir), EnvScheme, LogSink)?;
    if let Some(token) = &args.theme {
        // explicit --theme must not silently normalize a typo the way
        // stored preferences do
        match token.as_str() {
            "light" | "dark" | "system" => theme_store.set(ThemeMode::parse(token))?,
            _ => return Err(Error::InvalidThemeMode(token.clone())),
        }
        log::info!("Theme preference set to {}", theme_store.mode());
    }
    if args.cycle_theme {
        let mode = theme_store.cycle()?;
        log::info!("Theme preference cycled to {mode}");
    }

    if let Some(dir) = &settings.catalog_dir {
        let mut enemies_file = std::path::PathBuf::from(dir);
        enemies_file.push("enemies.json");
        if enemies_file.is_file() {
            match Vec::<Enemy>::load_from_json_file(&enemies_file) {
                Ok(enemies) => log::info!("Loaded {} enemy catalog entries", enemies.len()),
                Err(e) => log::warn!("Failed to load enemy catalog: {e}"),
            }
        }
    }

    if let Some(path) = &args.new {
        let mut session = Session::new();
        session.set_quest_level(args.level);
        session.set_stage(&args.stage)?;
        session.add_monsters(args.monsters);
        session.save(path)?;
        log::info!("Created {path}: {}", session.summary());
    }

    if let Some(path) = &args.show {
        let session = Session::open(path)?;
        println!("{}", session.summary());
    }

    theme_store.close();
    Ok(())
}
