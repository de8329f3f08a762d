// SPDX-License-Identifier: GPL-3.0-only

//! CLI commands against the plant monitor server
//!
//! This module provides command-line functionality for:
//! - Showing the background capture status
//! - Toggling background capture
//! - Printing the newest capture URL

use cosmic::Application;
use plant_monitor::api::{ApiClient, CaptureStatus};
use plant_monitor::app::AppModel;
use plant_monitor::config::Config;

/// Show whether background capture is running
pub fn show_status(server: Option<String>) -> Result<(), Box<dyn std::error::Error>> {
    let api = client_for(server);

    let rt = tokio::runtime::Runtime::new()?;
    let status = rt.block_on(api.capture_status())?;

    print_status(&status);
    Ok(())
}

/// Flip background capture on the server and report the new state
pub fn toggle_capture(server: Option<String>) -> Result<(), Box<dyn std::error::Error>> {
    let api = client_for(server);

    let rt = tokio::runtime::Runtime::new()?;
    let status = rt.block_on(api.toggle_capture())?;

    print_status(&status);
    Ok(())
}

/// Print the URL of the newest capture
pub fn show_latest_image(server: Option<String>) -> Result<(), Box<dyn std::error::Error>> {
    let api = client_for(server);

    let rt = tokio::runtime::Runtime::new()?;
    let latest = rt.block_on(api.latest_image())?;

    if latest.url.is_empty() {
        println!("No capture yet.");
    } else {
        println!("{}", latest.url);
    }

    Ok(())
}

/// Build a client for the given server, falling back to the saved configuration
fn client_for(server: Option<String>) -> ApiClient {
    let base_url = server.unwrap_or_else(|| Config::load(AppModel::APP_ID).1.server_url);
    ApiClient::new(&base_url)
}

fn print_status(status: &CaptureStatus) {
    if status.active {
        println!("Background capture: active");
        if let Some(minutes) = status.next_in {
            println!("Next capture in {} minutes", minutes);
        }
    } else {
        println!("Background capture: inactive");
    }
}
