use chrono::{Local, NaiveDateTime};

use crate::error::WindowError;
use crate::models::{HourlyForecast, WeatherWindow};

/// Gyldig turlengde i timer (samme som varighetsvelgeren).
pub const MIN_DURATION_HOURS: u32 = 1;
pub const MAX_DURATION_HOURS: u32 = 12;

/// Første indeks i `times` som ligger i samme time som `at`.
/// Sammenligner på "YYYY-MM-DDTHH"-prefiks; Open-Meteo leverer lokal tid uten offset.
pub fn current_hour_index(times: &[String], at: NaiveDateTime) -> Option<usize> {
    let prefix = at.format("%Y-%m-%dT%H").to_string();
    times.iter().position(|t| t.starts_with(&prefix))
}

fn check_len<T>(series: &'static str, xs: &[T], expected: usize) -> Result<(), WindowError> {
    if xs.len() == expected {
        Ok(())
    } else {
        Err(WindowError::Misaligned {
            series,
            expected,
            found: xs.len(),
        })
    }
}

fn slice<T: Clone>(xs: &[T], start: usize, end: usize) -> Vec<T> {
    xs[start..end].to_vec()
}

/// Klipper ut turvinduet fra en full timesprognose.
///
/// - `duration_hours` klemmes til 1..=12
/// - vinduet starter i timen `start` faller i
/// - vinduet kuttes ved slutten av prognosen
pub fn extract_window(
    forecast: &HourlyForecast,
    start: NaiveDateTime,
    duration_hours: u32,
) -> Result<WeatherWindow, WindowError> {
    let n = forecast.time.len();
    if n == 0 {
        return Err(WindowError::Empty);
    }
    check_len("temperature_2m", &forecast.temperature_2m, n)?;
    check_len("precipitation_probability", &forecast.precipitation_probability, n)?;
    check_len("precipitation", &forecast.precipitation, n)?;
    check_len("windspeed_10m", &forecast.windspeed_10m, n)?;
    check_len("windgusts_10m", &forecast.windgusts_10m, n)?;
    check_len("weathercode", &forecast.weathercode, n)?;
    if let Some(dirs) = &forecast.winddirection_10m {
        check_len("winddirection_10m", dirs, n)?;
    }

    let start_idx = current_hour_index(&forecast.time, start).ok_or_else(|| {
        WindowError::StartNotFound(start.format("%Y-%m-%dT%H:00").to_string())
    })?;

    let duration = duration_hours.clamp(MIN_DURATION_HOURS, MAX_DURATION_HOURS) as usize;
    if duration as u32 != duration_hours {
        log::debug!("extract_window: varighet {duration_hours} t klemt til {duration} t");
    }
    let end = (start_idx + duration).min(n);
    if end - start_idx < duration {
        log::warn!(
            "extract_window: prognosen dekker bare {} av {} timer fra {}",
            end - start_idx,
            duration,
            forecast.time[start_idx]
        );
    }

    Ok(WeatherWindow {
        temperature: slice(&forecast.temperature_2m, start_idx, end),
        windspeed: slice(&forecast.windspeed_10m, start_idx, end),
        windgusts: slice(&forecast.windgusts_10m, start_idx, end),
        winddirection: forecast
            .winddirection_10m
            .as_deref()
            .map(|d| slice(d, start_idx, end)),
        precipitation: slice(&forecast.precipitation, start_idx, end),
        precipitation_probability: slice(&forecast.precipitation_probability, start_idx, end),
        weathercode: slice(&forecast.weathercode, start_idx, end),
        time: slice(&forecast.time, start_idx, end),
    })
}

/// Som `extract_window`, med start i inneværende lokale time.
pub fn extract_window_now(
    forecast: &HourlyForecast,
    duration_hours: u32,
) -> Result<WeatherWindow, WindowError> {
    extract_window(forecast, Local::now().naive_local(), duration_hours)
}
