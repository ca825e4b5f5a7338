// Dialogs
pub const MODAL_ACTIVE: &str = "active";
pub const MODAL_OVERLAY: &str = "modal-overlay";
pub const MODAL_CONTENT: &str = "modal-content";
pub const MODAL_CLOSE: &str = "modal-close";
pub const MODAL_TITLE: &str = "modal-title";
pub const MODAL_SUBTITLE: &str = "modal-subtitle";
pub const MODAL_FORM: &str = "modal-form";
pub const FORM_INPUT: &str = "form-input";
pub const BUTTON_PRIMARY: &str = "btn btn-primary";

// Wheel
pub const WHEEL_CONTENT: &str = "wheel-modal-content";
pub const WHEEL_WRAPPER: &str = "wheel-wrapper";
pub const WHEEL_POINTER: &str = "wheel-pointer";
pub const WHEEL_CANVAS: &str = "wheel-canvas";
pub const SPIN_BUTTON: &str = "btn btn-primary spin-button";
pub const SPIN_BUTTON_BUSY: &str = "spinning";
pub const WHEEL_RESULT: &str = "wheel-result";
pub const DISCOUNT_VALUE: &str = "discount-value";

// Page
pub const VISIBLE: &str = "visible";
pub const FAQ_ACTIVE: &str = "active";

// Confetti pieces are created outside any stylesheet
pub const CONFETTI_STYLE: &str = "position: fixed; width: 10px; height: 10px; top: -10px; opacity: 1; pointer-events: none; z-index: 99999; border-radius: 50%;";
pub const CONFETTI_EASING: &str = "cubic-bezier(0.25, 0.46, 0.45, 0.94)";
