//! Shared test utilities and mock infrastructure.

#![allow(dead_code, unused_imports)]

pub mod mock_backend;

use plate_finder::config::{ApiConfig, Config, UiConfig};
use plate_finder::ui::app::{App, UiCommand};
use plate_finder::ui::render::draw;
use ratatui::backend::TestBackend;
use ratatui::Terminal;
use std::path::PathBuf;
use tempfile::TempDir;
use tokio::sync::mpsc;

/// Body returned by a healthy detection service.
pub const SAMPLE_RESPONSE: &str = r#"{
    "image_filename": "car1.jpg",
    "annotated_img": "http://x/a.png",
    "plate_imgs": ["http://x/p1.png"],
    "confidences": ["0.87"],
    "plate_detected": true,
    "address": {
        "street_address": "1 Main St",
        "city": "Springfield",
        "state": "IL",
        "zip_code": "62701"
    },
    "lat": 39.78,
    "lon": -89.65
}"#;

/// A well-formed response with a given filename and coordinates.
pub fn response_json(image_filename: &str, lat: f64, lon: f64) -> String {
    format!(
        r#"{{
            "image_filename": "{image_filename}",
            "annotated_img": "http://x/a.png",
            "plate_imgs": [],
            "confidences": [],
            "plate_detected": false,
            "address": {{
                "street_address": "9 Elm Rd",
                "city": "Shelbyville",
                "state": "IL",
                "zip_code": "62565"
            }},
            "lat": {lat},
            "lon": {lon}
        }}"#
    )
}

pub fn api_config(base_url: &str) -> ApiConfig {
    ApiConfig {
        base_url: base_url.to_string(),
        connect_timeout_seconds: 2,
        request_timeout_seconds: Some(5),
    }
}

/// Create a temporary config file with the given TOML content.
pub fn temp_config(content: &str) -> (TempDir, PathBuf) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let config_path = temp_dir.path().join("config.toml");
    std::fs::write(&config_path, content).expect("Failed to write config");
    (temp_dir, config_path)
}

// -- App helpers --------------------------------------------------------------

/// An `App` wired to a command channel the test reads from.
pub fn make_app() -> (App, mpsc::Receiver<UiCommand>) {
    let (tx, rx) = mpsc::channel(8);
    let mut app = App::new(&UiConfig::default());
    app.set_command_sender(tx);
    (app, rx)
}

/// Renders the app into an off-screen buffer and returns its rows as text.
pub fn render_rows(app: &App, width: u16, height: u16) -> Vec<String> {
    let backend = TestBackend::new(width, height);
    let mut terminal = Terminal::new(backend).expect("test terminal");
    terminal.draw(|frame| draw(frame, app)).expect("draw");
    let buffer = terminal.backend().buffer();
    (0..height)
        .map(|y| {
            (0..width)
                .map(|x| buffer[(x, y)].symbol().to_string())
                .collect::<String>()
        })
        .collect()
}

pub fn screen_contains(rows: &[String], needle: &str) -> bool {
    rows.iter().any(|row| row.contains(needle))
}

pub fn default_config() -> Config {
    Config::default()
}
