use serde::{Deserialize, Serialize};

use crate::error::WindowError;

/// Ett værvindu for turen: timesverdier, alle serier indeks-justert
/// (indeks i beskriver samme time i alle seriene).
///
/// Numeriske verdier kan mangle (`null` fra API-et) og hoppes da over i statistikken.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct WeatherWindow {
    #[serde(default)]
    pub temperature: Vec<Option<f64>>, // °C
    #[serde(default)]
    pub windspeed: Vec<Option<f64>>, // km/h, middelvind
    #[serde(default)]
    pub windgusts: Vec<Option<f64>>, // km/h, vindkast
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub winddirection: Option<Vec<Option<f64>>>, // grader [0, 360)
    #[serde(default)]
    pub precipitation: Vec<Option<f64>>, // mm
    #[serde(default)]
    pub precipitation_probability: Vec<Option<f64>>, // %
    #[serde(default)]
    pub weathercode: Vec<Option<i32>>, // WMO-kode
    #[serde(default)]
    pub time: Vec<String>, // ISO-8601, én per time
}

impl WeatherWindow {
    /// Antall timer i vinduet (lengden på `time`).
    pub fn hours(&self) -> usize {
        self.time.len()
    }

    pub fn is_empty(&self) -> bool {
        self.time.is_empty()
    }

    /// Sjekker at alle serier har samme lengde som `time`.
    pub fn validate(&self) -> Result<(), WindowError> {
        let expected = self.time.len();
        if expected == 0 {
            return Err(WindowError::Empty);
        }

        let mut lengths = vec![
            ("temperature", self.temperature.len()),
            ("windspeed", self.windspeed.len()),
            ("windgusts", self.windgusts.len()),
            ("precipitation", self.precipitation.len()),
            ("precipitation_probability", self.precipitation_probability.len()),
            ("weathercode", self.weathercode.len()),
        ];
        if let Some(dirs) = &self.winddirection {
            lengths.push(("winddirection", dirs.len()));
        }

        match lengths.into_iter().find(|(_, len)| *len != expected) {
            Some((series, found)) => Err(WindowError::Misaligned {
                series,
                expected,
                found,
            }),
            None => Ok(()),
        }
    }

    /// Ett-times utsnitt av vinduet (brukt av tidslinjen).
    /// Returnerer None hvis `index` ligger utenfor `time`.
    pub fn hour(&self, index: usize) -> Option<WeatherWindow> {
        let time = self.time.get(index)?.clone();
        let pick = |xs: &[Option<f64>]| vec![xs.get(index).copied().flatten()];

        Some(WeatherWindow {
            temperature: pick(&self.temperature),
            windspeed: pick(&self.windspeed),
            windgusts: pick(&self.windgusts),
            winddirection: self.winddirection.as_deref().map(|d| pick(d)),
            precipitation: pick(&self.precipitation),
            precipitation_probability: pick(&self.precipitation_probability),
            weathercode: vec![self.weathercode.get(index).copied().flatten()],
            time: vec![time],
        })
    }
}

/// `hourly`-blokken fra Open-Meteo /v1/forecast.
/// Godtar både gamle (windspeed_10m) og nye (wind_speed_10m) feltnavn.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct HourlyForecast {
    pub time: Vec<String>,
    #[serde(default)]
    pub temperature_2m: Vec<Option<f64>>,
    #[serde(default)]
    pub precipitation_probability: Vec<Option<f64>>,
    #[serde(default)]
    pub precipitation: Vec<Option<f64>>,
    #[serde(default, alias = "wind_speed_10m")]
    pub windspeed_10m: Vec<Option<f64>>,
    #[serde(default, alias = "wind_gusts_10m")]
    pub windgusts_10m: Vec<Option<f64>>,
    #[serde(default, alias = "wind_direction_10m", skip_serializing_if = "Option::is_none")]
    pub winddirection_10m: Option<Vec<Option<f64>>>,
    #[serde(default, alias = "weather_code")]
    pub weathercode: Vec<Option<i32>>,
}

/// Hele API-svaret; vi bryr oss bare om `hourly`.
#[derive(Debug, Clone, Deserialize)]
pub struct ForecastResponse {
    pub hourly: HourlyForecast,
}
