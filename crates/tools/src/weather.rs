//! Mock weather lookup backed by a static JSON document.
use std::collections::HashMap;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::Error;

pub const NAME: &str = "get_weather";
pub const DESCRIPTION: &str = "Fetches current weather information for a given location. \
    This is a mocked version backed by static data.";

const BUNDLED: &str = include_str!("../data/mock_india_weather_data.json");

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct WeatherReport {
    pub summary: String,
    /// Whatever else the data file records for the location.
    #[serde(flatten)]
    pub details: serde_json::Map<String, serde_json::Value>,
}

#[derive(Debug, Clone, Default)]
pub struct WeatherTool {
    reports: HashMap<String, WeatherReport>,
}

fn normalize(location: &str) -> String {
    location.trim().to_lowercase()
}

impl WeatherTool {
    /// The data set compiled into the crate.
    pub fn bundled() -> Result<Self, Error> {
        Self::from_json(BUNDLED)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, Error> {
        let path = path.as_ref();
        tracing::debug!("loading weather data from {}", path.display());
        Self::from_json(&std::fs::read_to_string(path)?)
    }

    pub fn from_json(json: &str) -> Result<Self, Error> {
        let raw: HashMap<String, WeatherReport> = serde_json::from_str(json)?;
        let reports = raw
            .into_iter()
            .map(|(location, report)| (normalize(&location), report))
            .collect();
        Ok(Self { reports })
    }

    pub fn get_weather(&self, location: &str) -> Result<&WeatherReport, Error> {
        self.reports
            .get(&normalize(location))
            .ok_or_else(|| Error::UnknownLocation(location.to_string()))
    }

    pub fn locations(&self) -> Vec<&str> {
        let mut locations: Vec<&str> = self.reports.keys().map(String::as_str).collect();
        locations.sort_unstable();
        locations
    }

    /// Function-calling description of the tool.
    pub fn definition() -> serde_json::Value {
        serde_json::json!({
            "name": NAME,
            "description": DESCRIPTION,
            "parameters": {
                "type": "object",
                "properties": {
                    "location": {
                        "type": "string",
                        "description": "The name of the city or region for which to get the weather."
                    }
                },
                "required": ["location"]
            }
        })
    }
}
