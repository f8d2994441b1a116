pub mod account;
pub mod config;
pub mod i18n;
pub mod navigation;
pub mod retry;
pub mod security;
pub mod signup;
