//! # nutrilens
//!
//! Client core for the nutrilens food scanner: session handling, the auth
//! routing guard, the backend client and the state behind each screen.
//! A UI shell (or the bundled CLI) drives it.

pub mod api;
pub mod app;
pub mod auth;
pub mod config;
pub mod error;
pub mod logger;
pub mod model;
pub mod routes;
pub mod screens;

pub use app::App;
