//! Authentication and authorization middleware.
//!
//! 1. Client sends `Authorization: Bearer <token>`
//! 2. [`auth::AuthUser`] validates the JWT and exposes the claims
//! 3. [`role`] gates reject requests whose role is outside the allowed set
//! 4. Handlers needing identity (ownership checks, progress rows) extract
//!    [`auth::AuthUser`] directly

pub mod auth;
pub mod role;
