//! Construction-time carousel options.

use serde::{Deserialize, Serialize};

pub const DEFAULT_AUTOPLAY_INTERVAL_MS: u32 = 5000;
pub const DEFAULT_TRANSITION_OUT_MS: u32 = 500;

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CarouselConfig {
    pub autoplay: bool,
    pub autoplay_interval_ms: u32,
    /// Delay between an exit/complete trigger and the host navigation.
    pub transition_out_ms: u32,
    /// Extra CSS class for the carousel root. Cosmetic only.
    pub class_name: Option<String>,
}

impl Default for CarouselConfig {
    fn default() -> Self {
        Self {
            autoplay: false,
            autoplay_interval_ms: DEFAULT_AUTOPLAY_INTERVAL_MS,
            transition_out_ms: DEFAULT_TRANSITION_OUT_MS,
            class_name: None,
        }
    }
}

impl CarouselConfig {
    #[must_use]
    pub fn with_autoplay(mut self, interval_ms: u32) -> Self {
        self.autoplay = true;
        self.autoplay_interval_ms = interval_ms;
        self
    }

    #[must_use]
    pub fn with_transition_out(mut self, delay_ms: u32) -> Self {
        self.transition_out_ms = delay_ms;
        self
    }

    #[must_use]
    pub fn with_class_name(mut self, class_name: impl Into<String>) -> Self {
        self.class_name = Some(class_name.into());
        self
    }

    /// Autoplay period in milliseconds, never zero.
    #[must_use]
    pub fn effective_interval_ms(&self) -> u64 {
        u64::from(self.autoplay_interval_ms.max(1))
    }
}
