// SPDX-License-Identifier: GPL-3.0-only

//! Plant Monitor - A capture dashboard for the COSMIC desktop environment
//!
//! This library provides the core functionality for the Plant Monitor
//! application, a front end for a small plant camera server that takes
//! pictures on a timer.
//!
//! # Architecture
//!
//! The crate is organized into several modules:
//!
//! - [`app`]: Main application logic and UI
//! - [`api`]: HTTP client for the plant monitor server
//! - [`config`]: User configuration handling
//!
//! # Example
//!
//! ```ignore
//! // This is a GUI application, typically run via:
//! // plant-monitor
//! ```

pub mod api;
pub mod app;
pub mod config;
pub mod constants;
pub mod i18n;

// Re-export commonly used types
pub use api::{ApiClient, CaptureStatus, LatestImage};
pub use app::{AppModel, Message};
pub use config::Config;
