//! Portfolio Site - a single-profile personal portfolio.
//!
//! Serves one profile record as JSON, proxies image uploads to a hosted
//! image service, renders the portfolio page, and ships a seed tool that
//! populates the profile from local images.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
pub mod telemetry;
