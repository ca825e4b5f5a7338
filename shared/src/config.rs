use serde::{Deserialize, Serialize};

use crate::constants::*;
use crate::error::ConfigError;
use crate::shared_wheel_game::{default_segments, Segment, WheelConfiguration};

/// Spin animation tuning
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WheelTiming {
    pub duration_ms: u32,
    pub min_spins: f64,
    pub max_spins: f64,
    pub result_delay_ms: u32,
}

impl Default for WheelTiming {
    fn default() -> Self {
        Self {
            duration_ms: SPIN_DURATION_MS,
            min_spins: MIN_SPINS,
            max_spins: MAX_SPINS,
            result_delay_ms: RESULT_DELAY_MS,
        }
    }
}

impl WheelTiming {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(self.min_spins >= 0.0 && self.min_spins < self.max_spins) {
            return Err(ConfigError::InvalidSpinRange);
        }
        Ok(())
    }
}

/// Delays between a modal request and its visual completion
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ModalTiming {
    pub show_delay_ms: u32,
    pub hide_delay_ms: u32,
}

impl Default for ModalTiming {
    fn default() -> Self {
        Self {
            show_delay_ms: MODAL_SHOW_DELAY_MS,
            hide_delay_ms: MODAL_HIDE_DELAY_MS,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PromoConfig {
    pub auto_open_delay_ms: u32,
    pub session_key: String,
    pub reset_delay_after_submit_ms: u32,
}

impl Default for PromoConfig {
    fn default() -> Self {
        Self {
            auto_open_delay_ms: AUTO_OPEN_DELAY_MS,
            session_key: PROMO_SESSION_KEY.to_string(),
            reset_delay_after_submit_ms: RESET_AFTER_SUBMIT_MS,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ConfettiConfig {
    pub count: usize,
    pub min_duration_ms: u32,
    pub max_extra_duration_ms: u32,
}

impl Default for ConfettiConfig {
    fn default() -> Self {
        Self {
            count: CONFETTI_COUNT,
            min_duration_ms: CONFETTI_MIN_DURATION_MS,
            max_extra_duration_ms: CONFETTI_EXTRA_DURATION_MS,
        }
    }
}

impl ConfettiConfig {
    /// The burst must stay small and every fall must end within
    /// `CONFETTI_MAX_DURATION_MS`.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let longest = self.min_duration_ms.checked_add(self.max_extra_duration_ms);
        match longest {
            Some(ms) if ms <= CONFETTI_MAX_DURATION_MS && self.count <= CONFETTI_MAX_COUNT => Ok(()),
            _ => Err(ConfigError::InvalidConfetti),
        }
    }
}

/// Everything the page may tune, read once at startup.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    pub wheel: WheelTiming,
    pub modal: ModalTiming,
    pub promo: PromoConfig,
    pub confetti: ConfettiConfig,
    pub segments: Vec<Segment>,
    pub header_offset_px: f64,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            wheel: WheelTiming::default(),
            modal: ModalTiming::default(),
            promo: PromoConfig::default(),
            confetti: ConfettiConfig::default(),
            segments: default_segments(),
            header_offset_px: HEADER_OFFSET_PX,
        }
    }
}

impl SiteConfig {
    /// Replace any section that cannot be used with its default.
    pub fn sanitized(mut self) -> Self {
        if let Err(err) = self.wheel.validate() {
            log::warn!("ignoring wheel timing: {}", err);
            self.wheel = WheelTiming::default();
        }
        if let Err(err) = self.confetti.validate() {
            log::warn!("ignoring confetti: {}", err);
            self.confetti = ConfettiConfig::default();
        }
        if self.segments.is_empty() {
            log::warn!("ignoring segments: {}", ConfigError::EmptyWheel);
            self.segments = default_segments();
        }
        self
    }

    pub fn wheel_configuration(&self) -> Result<WheelConfiguration, ConfigError> {
        WheelConfiguration::new(self.segments.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared_wheel_game::ColorToken;

    #[test]
    fn test_partial_json_keeps_defaults() {
        let json = r#"{ "wheel": { "duration_ms": 2500 }, "promo": { "auto_open_delay_ms": 0 } }"#;
        let config: SiteConfig = serde_json::from_str(json).unwrap();
        assert_eq!(config.wheel.duration_ms, 2500);
        assert_eq!(config.wheel.min_spins, MIN_SPINS);
        assert_eq!(config.promo.auto_open_delay_ms, 0);
        assert_eq!(config.promo.session_key, "wheelShown");
        assert_eq!(config.modal, ModalTiming::default());
        assert_eq!(config.segments.len(), 8);
    }

    #[test]
    fn test_custom_segments() {
        let json = r#"{ "segments": [
            { "label": "free", "color": "orange", "value": 100 },
            { "label": "none", "color": "navy", "value": 0 }
        ] }"#;
        let config: SiteConfig = serde_json::from_str(json).unwrap();
        let wheel = config.wheel_configuration().unwrap();
        assert_eq!(wheel.len(), 2);
        assert_eq!(wheel.segment(0).unwrap().color, ColorToken::Orange);
    }

    #[test]
    fn test_sanitized_restores_unusable_sections() {
        let mut config = SiteConfig::default();
        config.wheel.min_spins = 12.0;
        config.segments.clear();

        let config = config.sanitized();
        assert_eq!(config.wheel, WheelTiming::default());
        assert_eq!(config.segments, default_segments());
    }

    #[test]
    fn test_sanitized_restores_confetti() {
        let json = r#"{ "confetti": { "min_duration_ms": 4294967295 } }"#;
        let config: SiteConfig = serde_json::from_str(json).unwrap();
        assert_eq!(config.confetti.validate(), Err(ConfigError::InvalidConfetti));

        let config = config.sanitized();
        assert_eq!(config.confetti, ConfettiConfig::default());

        let json = r#"{ "confetti": { "count": 1000000 } }"#;
        let config = serde_json::from_str::<SiteConfig>(json).unwrap().sanitized();
        assert_eq!(config.confetti.count, CONFETTI_COUNT);

        let json = r#"{ "confetti": { "count": 10, "min_duration_ms": 500 } }"#;
        let config = serde_json::from_str::<SiteConfig>(json).unwrap().sanitized();
        assert_eq!(config.confetti.count, 10);
        assert_eq!(config.confetti.min_duration_ms, 500);
    }
}
