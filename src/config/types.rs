use serde::{Deserialize, Serialize};

/// Root configuration container.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub ui: UiSettings,
    /// The slide deck, shown in declaration order.
    #[serde(default = "default_slides")]
    pub slides: Vec<SlideConfig>,
}

/// Timing settings for the event loop.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UiSettings {
    /// Tick interval in milliseconds (default: 250).
    #[serde(default = "default_tick_rate_ms")]
    pub tick_rate_ms: u64,
}

/// One slide of the deck.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SlideConfig {
    /// Short heading shown above the body.
    pub title: String,
    /// Main slide text.
    pub body: String,
    /// Optional byline shown under the body.
    #[serde(default)]
    pub attribution: Option<String>,
}

fn default_tick_rate_ms() -> u64 {
    250
}

fn default_slides() -> Vec<SlideConfig> {
    vec![
        SlideConfig {
            title: "A radically simple bank".to_string(),
            body: "Everything in one clean dashboard. No branches, no paperwork, \
                   no hidden fees."
                .to_string(),
            attribution: Some("Jess M.".to_string()),
        },
        SlideConfig {
            title: "Support that actually helps".to_string(),
            body: "A real human answered in under a minute and sorted my card \
                   on the spot."
                .to_string(),
            attribution: Some("Diego R.".to_string()),
        },
        SlideConfig {
            title: "Saving on autopilot".to_string(),
            body: "Round-ups and scheduled transfers quietly built my emergency \
                   fund while I got on with life."
                .to_string(),
            attribution: Some("Priya K.".to_string()),
        },
    ]
}

impl Default for UiSettings {
    fn default() -> Self {
        Self {
            tick_rate_ms: default_tick_rate_ms(),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            ui: UiSettings::default(),
            slides: default_slides(),
        }
    }
}
