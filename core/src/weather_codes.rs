use std::collections::HashMap;

use once_cell::sync::Lazy;
use serde::Serialize;

/// Beskrivelse + ikon for en WMO-værkode (Open-Meteo).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct WeatherInfo {
    pub description: &'static str,
    pub icon: &'static str,
}

pub const UNKNOWN_WEATHER: WeatherInfo = WeatherInfo {
    description: "Inconnu",
    icon: "❓",
};

static WEATHER_CODES: Lazy<HashMap<i32, WeatherInfo>> = Lazy::new(|| {
    let entries: [(i32, &'static str, &'static str); 21] = [
        (0, "Ciel dégagé", "☀️"),
        (1, "Principalement dégagé", "🌤️"),
        (2, "Partiellement nuageux", "⛅"),
        (3, "Couvert", "☁️"),
        (45, "Brouillard", "🌫️"),
        (48, "Brouillard givrant", "🌫️"),
        (51, "Bruine légère", "🌦️"),
        (53, "Bruine modérée", "🌦️"),
        (55, "Bruine dense", "🌧️"),
        (61, "Pluie légère", "🌧️"),
        (63, "Pluie modérée", "🌧️"),
        (65, "Pluie forte", "⛈️"),
        (71, "Neige légère", "🌨️"),
        (73, "Neige modérée", "❄️"),
        (75, "Neige forte", "❄️"),
        (80, "Averses légères", "🌦️"),
        (81, "Averses modérées", "🌧️"),
        (82, "Averses violentes", "⛈️"),
        (95, "Orage", "⛈️"),
        (96, "Orage avec grêle légère", "⛈️"),
        (99, "Orage avec grêle forte", "⛈️"),
    ];
    entries
        .into_iter()
        .map(|(code, description, icon)| (code, WeatherInfo { description, icon }))
        .collect()
});

/// Ukjent kode → `UNKNOWN_WEATHER`.
pub fn weather_info(code: i32) -> WeatherInfo {
    WEATHER_CODES.get(&code).copied().unwrap_or(UNKNOWN_WEATHER)
}

const CARDINALS: [&str; 8] = ["N", "NE", "E", "SE", "S", "SO", "O", "NO"];

/// 8-punkts kompass (fransk: O = ouest). Hver sektor er 45° sentrert på retningen.
pub fn cardinal_direction(degrees: f64) -> &'static str {
    let norm = degrees.rem_euclid(360.0);
    let idx = ((norm + 22.5) / 45.0).floor() as usize % CARDINALS.len();
    CARDINALS[idx]
}
