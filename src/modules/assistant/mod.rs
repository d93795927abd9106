pub mod cache;
pub mod controller;
pub mod generator;
pub mod model;
pub mod router;
pub mod service;
