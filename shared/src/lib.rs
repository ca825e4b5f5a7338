pub mod carousel;
pub mod config;
pub mod confetti;
pub mod constants;
pub mod error;
pub mod faq;
pub mod price_calculator;
pub mod promo;
pub mod scroll;
pub mod shared_modal;
pub mod shared_wheel_game;

pub use config::SiteConfig;
pub use error::{ConfigError, GuardError};
