//! Configuration modules for the Quran Academy API.
//!
//! Each submodule handles one aspect of configuration, loaded from
//! environment variables at startup. [`crate::config::jwt::JwtConfig`] is
//! the only one that can refuse to load: a missing `JWT_SECRET` aborts
//! startup instead of degrading to a default key.

pub mod assistant;
pub mod cors;
pub mod database;
pub mod jwt;
pub mod uploads;
