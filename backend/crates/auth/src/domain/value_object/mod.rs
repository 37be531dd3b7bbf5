//! Value Object Module

pub mod email;
pub mod token_secret;
pub mod user_name;
pub mod user_password;
