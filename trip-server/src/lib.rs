//! Trip discovery server.
//!
//! Fetches a trip catalog once from a backend service and lets visitors
//! search, filter and sort it, as an HTML page or a JSON API.

pub mod auth;
pub mod catalog;
pub mod config;
pub mod discovery;
pub mod domain;
pub mod web;
