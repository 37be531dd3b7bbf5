//! Application Layer
//!
//! Use cases and application services.

pub mod config;
pub mod credentials;
pub mod sign_in;
pub mod sign_out;
pub mod sign_up;
pub mod token_authority;

// Re-exports
pub use config::AuthConfig;
pub use credentials::{CredentialStore, NewUserInput};
pub use sign_in::{SignInInput, SignInOutput, SignInUseCase};
pub use sign_out::SignOutUseCase;
pub use sign_up::{SignUpOutput, SignUpUseCase};
pub use token_authority::{AuthContext, TokenAuthority};
