use crate::config::PromoConfig;
use crate::constants::PROMO_SHOWN_VALUE;

/// Decides whether the promotional wheel opens on its own.
pub struct AutoOpenPolicy<'a> {
    config: &'a PromoConfig,
}

impl<'a> AutoOpenPolicy<'a> {
    pub fn new(config: &'a PromoConfig) -> Self {
        Self { config }
    }

    pub fn storage_key(&self) -> &str {
        &self.config.session_key
    }

    pub fn delay_ms(&self) -> u32 {
        self.config.auto_open_delay_ms
    }

    /// `flag` is the current session value under [`Self::storage_key`].
    /// An empty value counts as unset.
    pub fn should_schedule(&self, flag: Option<&str>) -> bool {
        flag.map_or(true, str::is_empty)
    }

    pub fn shown_value(&self) -> &'static str {
        PROMO_SHOWN_VALUE
    }
}
