//! Application Layer
//!
//! Use cases, the token codec and access control.

pub mod access_control;
pub mod authenticate;
pub mod bootstrap;
pub mod config;
pub mod register;
pub mod token;
pub mod user_command;
pub mod user_query;

// Re-exports
pub use access_control::{AccessControl, Identity};
pub use authenticate::{AuthenticateInput, AuthenticateUseCase};
pub use bootstrap::{AdminSeed, ensure_admin};
pub use config::AuthConfig;
pub use register::{RegisterInput, RegisterUseCase};
pub use token::{Claims, TokenCodec};
pub use user_command::{CreateUserInput, UpdateUserInput, UserCommandUseCase};
pub use user_query::UserQueryUseCase;
