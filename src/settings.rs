use std::path::PathBuf;

use chrono_tz::Tz;
use config::builder::DefaultState;
use config::{Config, ConfigBuilder, Environment, File};
use serde::Deserialize;

use crate::error::Error;

pub const DEFAULT_TIMEZONE: &str = "Europe/Zurich";
pub const DEFAULT_KANTON: &str = "SO";
pub const DEFAULT_SOURCE: &str = "kirchenblatt";

/// Per-edition settings: defaults, then `kirchenblatt.toml`, then `KIRCHENBLATT_*` env vars.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Settings {
    pub timezone: String,
    pub kanton: String,
    pub source: String,
    #[serde(default)]
    pub output: Option<PathBuf>,
}

impl Default for Settings {
    fn default() -> Self {
        Settings {
            timezone: DEFAULT_TIMEZONE.to_string(),
            kanton: DEFAULT_KANTON.to_string(),
            source: DEFAULT_SOURCE.to_string(),
            output: None,
        }
    }
}

impl Settings {
    fn with_defaults() -> Result<ConfigBuilder<DefaultState>, Error> {
        Ok(Config::builder()
            .set_default("timezone", DEFAULT_TIMEZONE)?
            .set_default("kanton", DEFAULT_KANTON)?
            .set_default("source", DEFAULT_SOURCE)?)
    }

    pub fn load() -> Result<Self, Error> {
        let settings = Self::with_defaults()?
            .add_source(File::with_name("kirchenblatt").required(false))
            .add_source(Environment::with_prefix("KIRCHENBLATT"))
            .build()?;
        Ok(settings.try_deserialize()?)
    }

    pub fn tz(&self) -> Result<Tz, Error> {
        self.timezone.parse::<Tz>().map_err(|e| Error::Timezone {
            name: self.timezone.clone(),
            reason: e.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_solothurn() {
        let s = Settings::default();
        assert_eq!(s.kanton, "SO");
        assert_eq!(s.source, "kirchenblatt");
        assert_eq!(s.tz().unwrap(), chrono_tz::Europe::Zurich);
    }

    #[test]
    fn builder_defaults_deserialize() {
        let s: Settings = Settings::with_defaults()
            .unwrap()
            .build()
            .unwrap()
            .try_deserialize()
            .unwrap();
        assert_eq!(s, Settings::default());
    }

    #[test]
    fn unknown_timezone_is_an_error() {
        let s = Settings {
            timezone: "Europe/Atlantis".into(),
            ..Settings::default()
        };
        assert!(matches!(s.tz(), Err(Error::Timezone { .. })));
    }
}
