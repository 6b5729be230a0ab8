//! Integration tests for the `weather-tool` binary
//!
//! The binary is pointed at a wiremock server through a temporary config
//! file, so no test touches the real Open-Meteo API.

#![allow(clippy::panic)] // Allow panic! in tests for clear failure messages

use std::{io::Write, process::Output};

use serde_json::json;
use tokio::process::Command;
use wiremock::{
    Mock, MockServer, ResponseTemplate,
    matchers::{method, path, query_param},
};

fn write_config(base_url: &str) -> tempfile::NamedTempFile {
    let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
    writeln!(
        file,
        "[weather]\ngeocoding_base_url = \"{base_url}\"\nforecast_base_url = \"{base_url}\"\ntimeout_secs = 5"
    )
    .unwrap();
    file
}

async fn run_cli(config: &tempfile::NamedTempFile, args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_weather-tool"))
        .arg("--config")
        .arg(config.path())
        .args(args)
        .env_remove("RUST_LOG")
        .output()
        .await
        .unwrap()
}

fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

#[tokio::test]
async fn lookup_prints_report() {
    let mock_server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/search"))
        .and(query_param("name", "New York"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "results": [{
                "name": "New York",
                "latitude": 40.71,
                "longitude": -74.01,
                "country": "United States"
            }]
        })))
        .mount(&mock_server)
        .await;
    Mock::given(method("GET"))
        .and(path("/forecast"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "current": {
                "temperature_2m": 24.0,
                "relative_humidity_2m": 60,
                "apparent_temperature": 25.1,
                "precipitation": 0.0,
                "weather_code": 1,
                "wind_speed_10m": 14.8
            }
        })))
        .mount(&mock_server)
        .await;

    let config = write_config(&mock_server.uri());
    let output = run_cli(&config, &["lookup", "New", "York"]).await;

    assert!(output.status.success());
    assert_eq!(
        stdout(&output),
        "Weather for New York, United States:\n\
         - Condition: Mainly clear\n\
         - Temperature: 24.0°C\n\
         - Feels like: 25.1°C\n\
         - Humidity: 60%\n\
         - Wind Speed: 14.8 km/h\n\
         - Precipitation: 0.0 mm\n"
    );
}

#[tokio::test]
async fn lookup_not_found_still_exits_successfully() {
    let mock_server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/search"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({})))
        .mount(&mock_server)
        .await;

    let config = write_config(&mock_server.uri());
    let output = run_cli(&config, &["lookup", "Qwxyzzy"]).await;

    assert!(output.status.success());
    assert_eq!(stdout(&output), "Could not find location: Qwxyzzy\n");
}

#[tokio::test]
async fn describe_prints_tool_definition() {
    let config = write_config("http://127.0.0.1:9");
    let output = run_cli(&config, &["describe"]).await;

    assert!(output.status.success());
    let definition: serde_json::Value = serde_json::from_str(&stdout(&output)).unwrap();
    assert_eq!(definition["name"], "Weather Tool");
    assert_eq!(definition["parameters"]["required"], json!(["location"]));
}

#[tokio::test]
async fn invalid_config_fails() {
    let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
    writeln!(file, "[weather]\ntimeout_secs = 0").unwrap();

    let output = run_cli(&file, &["describe"]).await;

    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("timeout_secs"));
}
