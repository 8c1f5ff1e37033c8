pub mod config;
pub mod forgot_password;
pub mod login;
pub mod orders;
pub mod register;
pub mod token;
pub mod update_profile;
