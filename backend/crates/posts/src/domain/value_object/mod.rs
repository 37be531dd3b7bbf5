//! Value Object Module

pub mod post_content;
pub mod post_title;
