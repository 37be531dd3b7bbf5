//! Entity Module

pub mod owner;
pub mod post;
