// Spin timing
pub const SPIN_DURATION_MS: u32 = 4000;
pub const MIN_SPINS: f64 = 5.0;
pub const MAX_SPINS: f64 = 10.0;
pub const RESULT_DELAY_MS: u32 = 500;

// Modal transitions, matched to the CSS transition on `.modal`
pub const MODAL_SHOW_DELAY_MS: u32 = 10;
pub const MODAL_HIDE_DELAY_MS: u32 = 300;

// Promotion
pub const AUTO_OPEN_DELAY_MS: u32 = 10_000;
pub const PROMO_SESSION_KEY: &str = "wheelShown";
pub const PROMO_SHOWN_VALUE: &str = "true";
pub const RESET_AFTER_SUBMIT_MS: u32 = 500;

// Wheel drawing
pub const WHEEL_RIM_MARGIN: f64 = 10.0;
pub const WEDGE_OUTLINE_COLOR: &str = "#fff";
pub const WEDGE_OUTLINE_WIDTH: f64 = 3.0;
pub const LABEL_COLOR: &str = "#fff";
pub const LABEL_FONT: &str = "bold 24px Arial";
pub const LABEL_RADIUS_RATIO: f64 = 0.65;
pub const LABEL_BASELINE_OFFSET: f64 = 10.0;
pub const CENTER_CAP_RADIUS: f64 = 30.0;
pub const CENTER_CAP_FILL: &str = "#fff";
pub const CENTER_CAP_STROKE: &str = "#667eea";

// Winner resolution: slots this close to an integer count as the boundary itself
pub const BOUNDARY_EPSILON: f64 = 1e-9;

// Confetti
pub const CONFETTI_COUNT: usize = 50;
pub const CONFETTI_MIN_DURATION_MS: u32 = 2000;
pub const CONFETTI_EXTRA_DURATION_MS: u32 = 1000;
pub const CONFETTI_MAX_COUNT: usize = 500;
pub const CONFETTI_MAX_DURATION_MS: u32 = 60_000;
pub const CONFETTI_COLORS: [&str; 5] = ["#667eea", "#764ba2", "#f093fb", "#f5576c", "#4facfe"];

// Page
pub const HEADER_OFFSET_PX: f64 = 80.0;
pub const HEADER_SHADOW: &str = "0 2px 10px rgba(0, 0, 0, 0.1)";
