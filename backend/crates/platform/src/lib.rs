//! Platform Crate - Technical Infrastructure
//!
//! This crate provides shared technical foundations:
//! - Cryptographic utilities (SHA-256, Base64, OS randomness)
//! - Password hashing (Argon2id)
//! - Bearer credential parsing

pub mod bearer;
pub mod crypto;
pub mod password;
