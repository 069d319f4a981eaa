use ordered_float::OrderedFloat;
use serde::{Deserialize, Serialize};

/// Min/maks/snitt over én serie i værvinduet.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Stats {
    pub min: f64,
    pub max: f64,
    pub avg: f64,
}

/// Statistikk over gyldige verdier (None og NaN hoppes over).
/// Tom serie → {0, 0, 0}, ikke feil.
pub fn calculate_stats(values: &[Option<f64>]) -> Stats {
    let valid: Vec<f64> = values
        .iter()
        .filter_map(|v| *v)
        .filter(|v| !v.is_nan())
        .collect();

    if valid.is_empty() {
        return Stats::default();
    }

    let min = valid.iter().copied().map(OrderedFloat).min().map_or(0.0, |m| m.0);
    let max = valid.iter().copied().map(OrderedFloat).max().map_or(0.0, |m| m.0);
    let avg = valid.iter().sum::<f64>() / valid.len() as f64;

    Stats { min, max, avg }
}

/// Statistikk for alle seriene i ett vindu.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct WindowStats {
    pub temperature: Stats,
    pub windspeed: Stats,
    pub windgusts: Stats,
    pub precipitation: Stats,
    pub precipitation_probability: Stats,
    /// Kun når vinduet har vindretning.
    pub winddirection: Option<Stats>,
}

impl WindowStats {
    pub fn from_window(window: &crate::models::WeatherWindow) -> Self {
        Self {
            temperature: calculate_stats(&window.temperature),
            windspeed: calculate_stats(&window.windspeed),
            windgusts: calculate_stats(&window.windgusts),
            precipitation: calculate_stats(&window.precipitation),
            precipitation_probability: calculate_stats(&window.precipitation_probability),
            winddirection: window.winddirection.as_deref().map(direction_stats),
        }
    }
}

/// Sirkulært snitt av retninger i grader, normalisert til [0, 360).
/// None når serien ikke har gyldige verdier.
pub fn circular_mean_deg(values: &[Option<f64>]) -> Option<f64> {
    let (mut sin_sum, mut cos_sum, mut n) = (0.0f64, 0.0f64, 0usize);
    for d in values.iter().filter_map(|v| *v).filter(|v| !v.is_nan()) {
        let r = d.to_radians();
        sin_sum += r.sin();
        cos_sum += r.cos();
        n += 1;
    }
    if n == 0 {
        return None;
    }
    let deg = sin_sum.atan2(cos_sum).to_degrees().rem_euclid(360.0);
    // rem_euclid kan gi nøyaktig 360.0 for små negative verdier
    Some(if deg >= 360.0 { deg - 360.0 } else { deg })
}

/// Min/maks som for andre serier, men snittet er sirkulært (350° og 10° → 0°).
fn direction_stats(values: &[Option<f64>]) -> Stats {
    let mut stats = calculate_stats(values);
    if let Some(avg) = circular_mean_deg(values) {
        stats.avg = avg;
    }
    stats
}

// --- RoundTo trait ---
pub trait RoundTo {
    fn round_to(self, dp: u32) -> f64;
}

impl RoundTo for f64 {
    #[inline]
    fn round_to(self, dp: u32) -> f64 {
        // Halve rundes mot +∞ (-2.5 → -2), samme som visningen i appen
        if dp == 0 { return (self + 0.5).floor(); }
        let factor = 10_f64.powi(dp as i32);
        (self * factor + 0.5).floor() / factor
    }
}
