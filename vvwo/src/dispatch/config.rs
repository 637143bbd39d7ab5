//! Dispatch configuration.

use std::collections::BTreeSet;

use crate::domain::TransportMode;

/// Stop used when the user names none, or says "here".
const DEFAULT_STOP: &str = "Sächsische Staats- und Unibibliothek";

/// Landmark a "home" destination resolves to.
const DEFAULT_HOME_LANDMARK: &str = "Albertplatz";

/// Locale words and fallbacks used when turning slots into queries.
///
/// The defaults are the German (Dresden) demo values.
#[derive(Debug, Clone)]
pub struct DispatchConfig {
    /// Stop used for missing locations and for the "here" word.
    pub default_stop: String,

    /// Where a "home" destination goes.
    pub home_landmark: String,

    /// Spoken word meaning "where I am" (origin side and departures only).
    pub here_token: String,

    /// Spoken word meaning "home" (route destination only).
    pub home_token: String,

    /// Vehicle words that select trams only.
    pub tram_words: Vec<String>,

    /// Vehicle word that selects the bus family.
    pub bus_word: String,
}

impl DispatchConfig {
    /// Create a config with the given fallbacks and the default German words.
    pub fn new(default_stop: impl Into<String>, home_landmark: impl Into<String>) -> Self {
        Self {
            default_stop: default_stop.into(),
            home_landmark: home_landmark.into(),
            here_token: "hier".to_string(),
            home_token: "hause".to_string(),
            tram_words: vec![
                "tram".to_string(),
                "bahn".to_string(),
                "straßenbahn".to_string(),
            ],
            bus_word: "bus".to_string(),
        }
    }

    /// Set the "here" word.
    pub fn with_here_token(mut self, token: impl Into<String>) -> Self {
        self.here_token = token.into();
        self
    }

    /// Set the "home" word.
    pub fn with_home_token(mut self, token: impl Into<String>) -> Self {
        self.home_token = token.into();
        self
    }

    /// Returns true if `value` is the "here" word (case-insensitive).
    pub fn is_here(&self, value: &str) -> bool {
        same_word(value, &self.here_token)
    }

    /// Returns true if `value` is the "home" word (case-insensitive).
    pub fn is_home(&self, value: &str) -> bool {
        same_word(value, &self.home_token)
    }

    /// Modes selected by a spoken vehicle word.
    ///
    /// Tram words give trams only, the bus word gives all bus kinds, and
    /// anything else (or nothing) gives every known mode.
    pub fn modes_for(&self, vehicle: Option<&str>) -> BTreeSet<TransportMode> {
        match vehicle {
            Some(word) if self.tram_words.iter().any(|t| same_word(word, t)) => {
                [TransportMode::Tram].into_iter().collect()
            }
            Some(word) if same_word(word, &self.bus_word) => TransportMode::buses(),
            _ => TransportMode::all_known(),
        }
    }
}

impl Default for DispatchConfig {
    fn default() -> Self {
        Self::new(DEFAULT_STOP, DEFAULT_HOME_LANDMARK)
    }
}

/// Case-insensitive comparison that handles non-ASCII letters (ß, ä, ...).
fn same_word(a: &str, b: &str) -> bool {
    a.trim().to_lowercase() == b.trim().to_lowercase()
}
