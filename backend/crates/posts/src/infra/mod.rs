//! Infrastructure Layer
//!
//! Post storage and the owner directory over the auth user table.

pub mod memory;
pub mod owners;
pub mod postgres;

pub use memory::MemoryPostRepository;
pub use postgres::PgPostRepository;
