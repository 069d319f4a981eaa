use serde::{Deserialize, Serialize};

use crate::verdict::Verdict;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TemperatureReport {
    pub min: i64, // °C, avrundet
    pub max: i64,
    pub avg: i64,
    pub min_verdict: Verdict,
    pub max_verdict: Verdict,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WindReport {
    pub avg: i64, // km/h
    pub max: i64,
    /// Snitt vindretning (grader), kun når vinduet har retning.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub direction: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cardinal: Option<String>,
    pub verdict: Verdict,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GustsReport {
    pub max: i64, // km/h
    pub verdict: Verdict,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PrecipitationReport {
    pub probability: i64, // %, maks i vinduet
    pub amount: f64,      // mm, maks, én desimal
    pub probability_verdict: Verdict,
    /// Verdikt for nedbørsmengde.
    pub verdict: Verdict,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Conditions {
    pub temperature: TemperatureReport,
    pub wind: WindReport,
    pub gusts: GustsReport,
    pub precipitation: PrecipitationReport,
    /// Koden for første time i vinduet (ikke den hyppigste).
    #[serde(rename = "weatherCode")]
    pub weather_code: i32,
}

/// Resultatet av `analyze`: samlet verdikt + detaljer per kriterium.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConditionsReport {
    pub verdict: Verdict,
    pub conditions: Conditions,
}

/// Én time i tidslinjen.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HourVerdict {
    pub time: String,
    pub verdict: Verdict,
    pub temperature: Option<i64>,
    pub windspeed: Option<i64>,
    pub precipitation_probability: Option<f64>,
}
