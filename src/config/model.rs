use serde::{Deserialize, Serialize};

use crate::session::TransientTimings;

/// User-configurable CLI preferences and effect durations.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormConfig {
    /// How long a success banner stays visible, in milliseconds.
    #[serde(default = "FormConfig::default_message_ttl_ms")]
    pub message_ttl_ms: u64,
    /// How long the rejected-field shake cue stays active, in milliseconds.
    #[serde(default = "FormConfig::default_shake_ttl_ms")]
    pub shake_ttl_ms: u64,
    #[serde(default = "FormConfig::default_ui_color_enabled")]
    pub ui_color_enabled: bool,
    #[serde(default)]
    pub quiet_mode: bool,
}

impl FormConfig {
    fn default_message_ttl_ms() -> u64 {
        TransientTimings::DEFAULT_MESSAGE_MS
    }

    fn default_shake_ttl_ms() -> u64 {
        TransientTimings::DEFAULT_SHAKE_MS
    }

    fn default_ui_color_enabled() -> bool {
        true
    }

    /// Effect durations to hand to a [`crate::session::FormSession`].
    pub fn timings(&self) -> TransientTimings {
        TransientTimings::from_millis(self.message_ttl_ms, self.shake_ttl_ms)
    }
}

impl Default for FormConfig {
    fn default() -> Self {
        Self {
            message_ttl_ms: Self::default_message_ttl_ms(),
            shake_ttl_ms: Self::default_shake_ttl_ms(),
            ui_color_enabled: Self::default_ui_color_enabled(),
            quiet_mode: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_keys_fall_back_to_defaults() {
        let cfg: FormConfig = serde_json::from_str(r#"{"quiet_mode": true}"#).unwrap();
        assert!(cfg.quiet_mode);
        assert_eq!(cfg.message_ttl_ms, 3000);
        assert_eq!(cfg.shake_ttl_ms, 500);
        assert!(cfg.ui_color_enabled);
    }
}
