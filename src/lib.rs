//! puckfeed: hockey league data from SHL, SDHL and CHL behind one model,
//! one cache and one HTTP surface.

pub mod cache;
pub mod config;
pub mod derived;
pub mod error;
pub mod http_retry;
pub mod metrics;
pub mod model;
pub mod provider;
pub mod server;
pub mod service;
pub mod translate;
pub mod wire;
