//! RideOrNot core: GO / RISKY / NO_GO for en sykkeltur ut fra timesvær og terskler.

pub mod counters;
pub mod engine;
pub mod error;
pub mod metrics;
pub mod models;
pub mod storage;
pub mod thresholds;
pub mod types;
pub mod verdict;
pub mod weather_codes;
pub mod window;

#[cfg(feature = "python")]
mod py;

pub use counters::Metrics;
pub use engine::{
    analyze, analyze_hours, analyze_hours_json, analyze_hours_json_stored, analyze_json,
    analyze_json_stored, analyze_observed, analyze_with_defaults,
};
pub use error::{InputError, StorageError, WindowError};
pub use metrics::{calculate_stats, circular_mean_deg, RoundTo, Stats, WindowStats};
pub use models::{ForecastResponse, HourlyForecast, WeatherWindow};
pub use storage::ThresholdStore;
pub use thresholds::{
    Comparison, Criterion, CriterionResult, Threshold, ThresholdConfig, CRITERIA,
    DEFAULT_THRESHOLDS,
};
pub use types::{ConditionsReport, HourVerdict};
pub use verdict::{describe_verdict, describe_verdict_str, Verdict, VerdictInfo};
pub use weather_codes::{cardinal_direction, weather_info, WeatherInfo};
pub use window::{current_hour_index, extract_window, extract_window_now};
