pub mod contact;
pub mod home;
pub mod wheel_game;
