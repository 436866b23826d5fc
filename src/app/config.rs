//! Runtime settings, read from an optional `visualizer.json` next to the page.

use std::str::FromStr;

use serde::Deserialize;

use super::error::ConfigError;

/// Path the config is fetched from, relative to the page.
pub const CONFIG_PATH: &str = "visualizer.json";

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct VisualizerConfig {
    /// Degrees per tick when the page loads.
    pub initial_speed: f64,
    pub speed_min: f64,
    pub speed_max: f64,
    pub speed_step: f64,
    /// FPS readout refresh cadence, in frames.
    pub fps_sample_frames: u32,
    /// How long the startup error message stays on screen.
    pub error_display_ms: u32,
    pub log_level: String,
}

impl Default for VisualizerConfig {
    fn default() -> Self {
        Self {
            initial_speed: 1.0,
            speed_min: 0.1,
            speed_max: 5.0,
            speed_step: 0.1,
            fps_sample_frames: 60,
            error_display_ms: 5000,
            log_level: "info".to_string(),
        }
    }
}

impl VisualizerConfig {
    /// Parse and validate a JSON document. Missing fields take defaults.
    pub fn from_json(text: &str) -> Result<Self, ConfigError> {
        let config: VisualizerConfig = serde_json::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(self.speed_min.is_finite() && self.speed_max.is_finite()) {
            return Err(ConfigError::invalid("speed_min", "speed range must be finite"));
        }
        if self.speed_min >= self.speed_max {
            return Err(ConfigError::invalid(
                "speed_max",
                format!("{} is not above speed_min {}", self.speed_max, self.speed_min),
            ));
        }
        if !(self.speed_step > 0.0) {
            return Err(ConfigError::invalid("speed_step", "must be positive"));
        }
        if !(self.speed_min..=self.speed_max).contains(&self.initial_speed) {
            return Err(ConfigError::invalid(
                "initial_speed",
                format!("{} is outside {}..={}", self.initial_speed, self.speed_min, self.speed_max),
            ));
        }
        if self.fps_sample_frames == 0 {
            return Err(ConfigError::invalid("fps_sample_frames", "must be at least 1"));
        }
        self.level()?;
        Ok(())
    }

    pub fn level(&self) -> Result<log::Level, ConfigError> {
        log::Level::from_str(&self.log_level)
            .map_err(|_| ConfigError::invalid("log_level", format!("unknown level '{}'", self.log_level)))
    }
}

/// Fetch the config file. A missing or broken file is not fatal: the caller
/// gets defaults and a warning is logged.
#[cfg(target_arch = "wasm32")]
pub async fn load_config() -> VisualizerConfig {
    match fetch_config().await {
        Ok(config) => config,
        Err(e) => {
            log::warn!("{}: {}; using defaults", CONFIG_PATH, e);
            VisualizerConfig::default()
        }
    }
}

#[cfg(target_arch = "wasm32")]
async fn fetch_config() -> Result<VisualizerConfig, String> {
    let response = gloo_net::http::Request::get(CONFIG_PATH)
        .send()
        .await
        .map_err(|e| e.to_string())?;
    if !response.ok() {
        return Err(format!("HTTP status {}", response.status()));
    }
    let text = response.text().await.map_err(|e| e.to_string())?;
    VisualizerConfig::from_json(&text).map_err(|e| e.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_valid() {
        let config = VisualizerConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.level().unwrap(), log::Level::Info);
    }

    #[test]
    fn empty_object_gives_defaults() {
        assert_eq!(VisualizerConfig::from_json("{}").unwrap(), VisualizerConfig::default());
    }

    #[test]
    fn partial_override() {
        let config = VisualizerConfig::from_json(r#"{"initial_speed": 2.5, "log_level": "debug"}"#).unwrap();
        assert_eq!(config.initial_speed, 2.5);
        assert_eq!(config.level().unwrap(), log::Level::Debug);
        assert_eq!(config.speed_max, 5.0);
    }

    #[test]
    fn malformed_json_is_parse_error() {
        assert!(matches!(VisualizerConfig::from_json("{"), Err(ConfigError::Parse(_))));
        assert!(matches!(
            VisualizerConfig::from_json(r#"{"initial_speed": "fast"}"#),
            Err(ConfigError::Parse(_))
        ));
        assert!(matches!(VisualizerConfig::from_json(r#"{"speed": 1}"#), Err(ConfigError::Parse(_))));
    }

    #[test]
    fn rejects_inconsistent_values() {
        let cases = [
            (r#"{"speed_min": 5.0, "speed_max": 1.0}"#, "speed_max"),
            (r#"{"speed_step": 0}"#, "speed_step"),
            (r#"{"initial_speed": 9.0}"#, "initial_speed"),
            (r#"{"fps_sample_frames": 0}"#, "fps_sample_frames"),
            (r#"{"log_level": "loud"}"#, "log_level"),
        ];
        for (json, expected_field) in cases {
            match VisualizerConfig::from_json(json) {
                Err(ConfigError::Invalid { field, .. }) => assert_eq!(field, expected_field, "{}", json),
                other => panic!("{} should be invalid, got {:?}", json, other),
            }
        }
    }
}
