//! Property-name mapping for the source database schema.
//!
//! The backing database is human-named, so the property that holds each
//! activity field is deployment-specific. Defaults match the reference
//! database; any name can be overridden via environment variable.

use std::env;

/// Names of the database properties each activity field is read from.
#[derive(Debug, Clone)]
pub struct SchemaConfig {
    /// Activity date (date property)
    pub date: String,
    /// Distance in kilometers (number property)
    pub distance: String,
    /// Duration as "H:M:S" text (rich-text property)
    pub duration: String,
    /// Average-pace display label (rich-text property)
    pub avg_pace: String,
    /// Average heart rate in bpm (number property)
    pub heart_rate: String,
    /// Completion status (select property)
    pub status: String,
    /// Weather during the run (select property)
    pub weather: String,
}

impl Default for SchemaConfig {
    fn default() -> Self {
        Self {
            date: "Date".to_string(),
            distance: "Distance (km)".to_string(),
            duration: "Duration".to_string(),
            avg_pace: "Avg Pace".to_string(),
            heart_rate: "Heart Rate".to_string(),
            status: "Status".to_string(),
            weather: "Weather".to_string(),
        }
    }
}

impl SchemaConfig {
    /// Load the property mapping from environment variables.
    ///
    /// Unset variables fall back to the defaults above. A variable that
    /// is set but blank is a configuration error rather than a silent
    /// fallback, since every record lookup under that name would miss.
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok(); // Load .env file if present

        let defaults = Self::default();
        Ok(Self {
            date: prop_name("RUNLOG_PROP_DATE", defaults.date)?,
            distance: prop_name("RUNLOG_PROP_DISTANCE", defaults.distance)?,
            duration: prop_name("RUNLOG_PROP_DURATION", defaults.duration)?,
            avg_pace: prop_name("RUNLOG_PROP_AVG_PACE", defaults.avg_pace)?,
            heart_rate: prop_name("RUNLOG_PROP_HEART_RATE", defaults.heart_rate)?,
            status: prop_name("RUNLOG_PROP_STATUS", defaults.status)?,
            weather: prop_name("RUNLOG_PROP_WEATHER", defaults.weather)?,
        })
    }
}

/// Read one property name from the environment, falling back to the
/// built-in default when the variable is unset.
fn prop_name(var: &'static str, default: String) -> Result<String, ConfigError> {
    match env::var(var) {
        Ok(value) if value.trim().is_empty() => Err(ConfigError::Blank(var)),
        Ok(value) => Ok(value.trim().to_string()),
        Err(_) => Ok(default),
    }
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Environment variable {0} is set but blank")]
    Blank(&'static str),
}
