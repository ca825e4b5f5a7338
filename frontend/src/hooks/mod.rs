pub mod use_spin_view;

pub use use_spin_view::use_spin_view;
