use serde::{Deserialize, Serialize};
use shared::Result;
use tracing::debug;

use crate::storage::{LocalStore, KEY_DARK_MODE, KEY_UNIT};

/// Denomination balances are displayed in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DisplayUnit {
    Xmr,
    Piconero,
}

impl DisplayUnit {
    pub fn as_str(&self) -> &'static str {
        match self {
            DisplayUnit::Xmr => "xmr",
            DisplayUnit::Piconero => "piconero",
        }
    }

    fn from_stored(s: &str) -> Option<Self> {
        match s {
            "xmr" => Some(DisplayUnit::Xmr),
            "piconero" => Some(DisplayUnit::Piconero),
            _ => None,
        }
    }
}

/// Persisted user preferences, hydrated once at startup and mutated only
/// through the setters, which write through to the store.
#[derive(Debug, Clone, PartialEq)]
pub struct Settings {
    pub unit: DisplayUnit,
    pub dark_mode: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            unit: DisplayUnit::Xmr,
            dark_mode: false,
        }
    }
}

impl Settings {
    /// Hydrate from the store. An absent or unrecognized stored unit keeps
    /// the default; dark mode is on only for the stored string "true".
    pub fn load(store: &LocalStore) -> Self {
        let mut settings = Settings::default();

        if let Some(unit) = store.get(KEY_UNIT).and_then(DisplayUnit::from_stored) {
            settings.unit = unit;
        }
        if store.get(KEY_DARK_MODE) == Some("true") {
            settings.dark_mode = true;
        }

        debug!(
            "Loaded settings: unit={} dark_mode={}",
            settings.unit.as_str(),
            settings.dark_mode
        );

        settings
    }

    pub fn set_unit(&mut self, store: &mut LocalStore, unit: DisplayUnit) -> Result<()> {
        store.set(KEY_UNIT, unit.as_str())?;
        self.unit = unit;
        Ok(())
    }

    pub fn set_dark_mode(&mut self, store: &mut LocalStore, dark_mode: bool) -> Result<()> {
        store.set(KEY_DARK_MODE, if dark_mode { "true" } else { "false" })?;
        self.dark_mode = dark_mode;
        Ok(())
    }
}
