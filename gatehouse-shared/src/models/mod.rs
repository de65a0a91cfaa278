//! Request and response models for the `/api/users/*` endpoints.

pub mod envelope;
pub mod user;

pub use envelope::{LoginResponse, LogoutResponse, MeResponse, SignupResponse};
pub use user::{CreateUserRequest, CurrentUser, LoginRequest};
