pub mod modal;

pub use modal::{ModalHandle, ModalShell};
