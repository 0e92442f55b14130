use crate::catalog::{default_courses, CourseCatalog};
use crate::error::{Result, RosterError};
use crate::model::{Course, CurrentUser};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

pub const CONFIG_FILENAME: &str = "config.json";
const DEFAULT_STATUS: &str = "active";
const DEFAULT_USER_NAME: &str = "Test User";

/// Session configuration, read from `config.json` in the roster config dir.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub struct RosterConfig {
    /// Course catalog offered to the session
    #[serde(default = "default_course_list")]
    pub courses: Vec<Course>,

    /// Start the session with the sample student
    #[serde(default = "default_seed")]
    pub seed_sample_data: bool,

    /// Status given to new students that were added without one
    #[serde(default = "default_status")]
    pub default_status: String,

    /// Name shown for the (unauthenticated) current user
    #[serde(default = "default_user_name")]
    pub user_name: String,
}

fn default_course_list() -> Vec<Course> {
    default_courses().to_vec()
}

fn default_seed() -> bool {
    true
}

fn default_status() -> String {
    DEFAULT_STATUS.to_string()
}

fn default_user_name() -> String {
    DEFAULT_USER_NAME.to_string()
}

impl Default for RosterConfig {
    fn default() -> Self {
        Self {
            courses: default_course_list(),
            seed_sample_data: default_seed(),
            default_status: default_status(),
            user_name: default_user_name(),
        }
    }
}

impl RosterConfig {
    /// Load config from the given directory, or return defaults if not found
    pub fn load<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        Self::load_file(config_dir.as_ref().join(CONFIG_FILENAME))
    }

    /// Load config from an explicit file, or return defaults if it does not exist
    pub fn load_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path)?;
        let config: RosterConfig = serde_json::from_str(&content)?;
        config.check()?;
        Ok(config)
    }

    pub fn catalog(&self) -> CourseCatalog {
        CourseCatalog::new(self.courses.clone())
    }

    pub fn current_user(&self) -> CurrentUser {
        CurrentUser {
            name: self.user_name.clone(),
        }
    }

    fn check(&self) -> Result<()> {
        for (i, course) in self.courses.iter().enumerate() {
            if self.courses[..i]
                .iter()
                .any(|c| c.id == course.id || c.name == course.name)
            {
                return Err(RosterError::Config(format!(
                    "duplicate course in catalog: {} ({})",
                    course.name, course.id
                )));
            }
        }
        Ok(())
    }
}
