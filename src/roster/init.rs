use crate::api::RosterApi;
use crate::config::RosterConfig;
use crate::error::Result;
use crate::model::CurrentUser;
use crate::store::memory::InMemoryStore;
use directories::ProjectDirs;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Overrides the platform config directory.
pub const CONFIG_DIR_ENV: &str = "ROSTER_CONFIG_DIR";

pub struct RosterContext {
    pub api: RosterApi<InMemoryStore>,
    pub config: RosterConfig,
    pub user: CurrentUser,
}

/// Where `config.json` is looked up when no explicit file is given:
/// `$ROSTER_CONFIG_DIR`, else the platform config dir. `None` when neither
/// can be determined (no home directory).
pub fn config_dir() -> Option<PathBuf> {
    if let Some(dir) = std::env::var_os(CONFIG_DIR_ENV) {
        return Some(PathBuf::from(dir));
    }
    ProjectDirs::from("com", "roster", "roster").map(|dirs| dirs.config_dir().to_path_buf())
}

pub fn load_config(explicit: Option<&Path>) -> Result<RosterConfig> {
    match explicit {
        Some(path) => RosterConfig::load_file(path),
        None => match config_dir() {
            Some(dir) => RosterConfig::load(dir),
            None => {
                debug!("no config directory available, using defaults");
                Ok(RosterConfig::default())
            }
        },
    }
}

/// Builds the store once for the whole session and hands it to the API.
pub fn initialize(config: RosterConfig) -> RosterContext {
    let store = if config.seed_sample_data {
        InMemoryStore::seeded()
    } else {
        InMemoryStore::new()
    };
    info!(
        students = store.len(),
        courses = config.courses.len(),
        "roster session initialized"
    );

    let api = RosterApi::new(store, config.catalog());
    let user = config.current_user();
    RosterContext { api, config, user }
}
