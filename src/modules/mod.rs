//! Feature modules. Each one keeps its routes, handlers, data access
//! and types together under controller / service / model / router.

pub mod assistant;
pub mod auth;
pub mod blogs;
pub mod categories;
pub mod courses;
pub mod lessons;
pub mod messages;
pub mod progress;
pub mod users;
