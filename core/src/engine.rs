use serde::de::DeserializeOwned;

use crate::counters::Metrics;
use crate::error::InputError;
use crate::metrics::{RoundTo, WindowStats};
use crate::models::WeatherWindow;
use crate::storage::ThresholdStore;
use crate::thresholds::{evaluate_all, Criterion, CriterionResult, ThresholdConfig, DEFAULT_THRESHOLDS};
use crate::types::{
    Conditions, ConditionsReport, GustsReport, HourVerdict, PrecipitationReport, TemperatureReport,
    WindReport,
};
use crate::verdict::Verdict;
use crate::weather_codes::cardinal_direction;

/// Heltall for visning; halve rundes mot +∞ (-2.5 → -2).
#[inline]
fn round_i(x: f64) -> i64 {
    x.round_to(0) as i64
}

fn verdict_of(results: &[CriterionResult], criterion: Criterion) -> Verdict {
    results
        .iter()
        .find(|r| r.criterion == criterion)
        .map(|r| r.verdict)
        .unwrap_or_default()
}

/// Hovedmotoren: statistikk over vinduet → seks kriterier → samlet verdikt.
///
/// Ren funksjon: endrer ikke vinduet og husker ingenting mellom kall.
/// Tomme serier gir nuller i statistikken (ikke feil); vinduets justering
/// er kallerens ansvar (se `WeatherWindow::validate`).
pub fn analyze(window: &WeatherWindow, thresholds: &ThresholdConfig) -> ConditionsReport {
    let stats = WindowStats::from_window(window);
    let results = evaluate_all(&stats, thresholds);
    let verdict = Verdict::most_severe(results.iter().map(|r| r.verdict));

    log::debug!(
        "analyze: {} timer, verdikt={} [{}]",
        window.hours(),
        verdict,
        results
            .iter()
            .map(|r| format!("{}={:.1}:{}", r.criterion.as_str(), r.value, r.verdict))
            .collect::<Vec<_>>()
            .join(", ")
    );

    // Representativ kode = første time, ikke et aggregat
    let weather_code = window.weathercode.first().copied().flatten().unwrap_or(0);

    let direction = stats.winddirection.map(|s| s.avg);

    ConditionsReport {
        verdict,
        conditions: Conditions {
            temperature: TemperatureReport {
                min: round_i(stats.temperature.min),
                max: round_i(stats.temperature.max),
                avg: round_i(stats.temperature.avg),
                min_verdict: verdict_of(&results, Criterion::TemperatureMin),
                max_verdict: verdict_of(&results, Criterion::TemperatureMax),
            },
            wind: WindReport {
                avg: round_i(stats.windspeed.avg),
                max: round_i(stats.windspeed.max),
                direction: direction.map(|d| round_i(d).rem_euclid(360)),
                cardinal: direction.map(|d| cardinal_direction(d).to_string()),
                verdict: verdict_of(&results, Criterion::Wind),
            },
            gusts: GustsReport {
                max: round_i(stats.windgusts.max),
                verdict: verdict_of(&results, Criterion::Gusts),
            },
            precipitation: PrecipitationReport {
                probability: round_i(stats.precipitation_probability.max),
                amount: stats.precipitation.max.round_to(1),
                probability_verdict: verdict_of(&results, Criterion::PrecipitationProbability),
                verdict: verdict_of(&results, Criterion::Precipitation),
            },
            weather_code,
        },
    }
}

/// `analyze` med innebygde standardterskler.
pub fn analyze_with_defaults(window: &WeatherWindow) -> ConditionsReport {
    analyze(window, &DEFAULT_THRESHOLDS)
}

/// `analyze` + telling av verdikt i `metrics`.
pub fn analyze_observed(
    window: &WeatherWindow,
    thresholds: &ThresholdConfig,
    metrics: &Metrics,
) -> ConditionsReport {
    let report = analyze(window, thresholds);
    metrics.record_evaluation(report.verdict);
    report
}

/// Tidslinje: hver time vurdert som sitt eget ett-times vindu.
pub fn analyze_hours(window: &WeatherWindow, thresholds: &ThresholdConfig) -> Vec<HourVerdict> {
    (0..window.hours())
        .filter_map(|i| window.hour(i))
        .map(|hour| {
            let report = analyze(&hour, thresholds);
            HourVerdict {
                verdict: report.verdict,
                temperature: hour.temperature[0].map(round_i),
                windspeed: hour.windspeed[0].map(round_i),
                precipitation_probability: hour.precipitation_probability[0],
                time: hour.time.into_iter().next().unwrap_or_default(),
            }
        })
        .collect()
}

fn parse_json<T: DeserializeOwned>(what: &'static str, s: &str) -> Result<T, InputError> {
    let de = &mut serde_json::Deserializer::from_str(s);
    serde_path_to_error::deserialize(de).map_err(|e| InputError::Json {
        what,
        path: e.path().to_string(),
        source: e.into_inner(),
    })
}

fn parse_inputs(
    window_json: &str,
    thresholds_json: Option<&str>,
    fallback: impl FnOnce() -> ThresholdConfig,
) -> Result<(WeatherWindow, ThresholdConfig), InputError> {
    let window = parse_json("window", window_json)?;
    let thresholds = match thresholds_json {
        Some(t) => parse_json("thresholds", t)?,
        None => fallback(),
    };
    Ok((window, thresholds))
}

/// JSON inn / JSON ut. Uten terskler brukes standardverdiene.
pub fn analyze_json(window_json: &str, thresholds_json: Option<&str>) -> Result<String, InputError> {
    let (window, thresholds) = parse_inputs(window_json, thresholds_json, || DEFAULT_THRESHOLDS)?;
    Ok(serde_json::to_string(&analyze(&window, &thresholds))?)
}

/// Tidslinjen som JSON.
pub fn analyze_hours_json(window_json: &str, thresholds_json: Option<&str>) -> Result<String, InputError> {
    let (window, thresholds) = parse_inputs(window_json, thresholds_json, || DEFAULT_THRESHOLDS)?;
    Ok(serde_json::to_string(&analyze_hours(&window, &thresholds))?)
}

/// Som `analyze_json`, men uten terskler leses brukerens lagrede terskler
/// fra `store` (standardverdier hvis filen mangler eller er ugyldig).
pub fn analyze_json_stored(
    window_json: &str,
    thresholds_json: Option<&str>,
    store: &ThresholdStore,
) -> Result<String, InputError> {
    let (window, thresholds) = parse_inputs(window_json, thresholds_json, || store.load())?;
    Ok(serde_json::to_string(&analyze(&window, &thresholds))?)
}

/// Tidslinjen som JSON, med lagrede terskler som utgangspunkt.
pub fn analyze_hours_json_stored(
    window_json: &str,
    thresholds_json: Option<&str>,
    store: &ThresholdStore,
) -> Result<String, InputError> {
    let (window, thresholds) = parse_inputs(window_json, thresholds_json, || store.load())?;
    Ok(serde_json::to_string(&analyze_hours(&window, &thresholds))?)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn w(temp: &[f64], wind: &[f64], gusts: &[f64], pp: &[f64], precip: &[f64]) -> WeatherWindow {
        let n = temp.len();
        let some = |xs: &[f64]| xs.iter().copied().map(Some).collect::<Vec<_>>();
        WeatherWindow {
            temperature: some(temp),
            windspeed: some(wind),
            windgusts: some(gusts),
            winddirection: None,
            precipitation: some(precip),
            precipitation_probability: some(pp),
            weathercode: vec![Some(3); n],
            time: (0..n).map(|h| format!("2024-05-01T{:02}:00", 8 + h)).collect(),
        }
    }

    #[test]
    fn report_rounds_like_display() {
        let win = w(&[9.6, 17.5], &[14.4, 15.2], &[19.6, 20.4], &[4.6, 5.4], &[0.0, 0.04]);
        let r = analyze(&win, &DEFAULT_THRESHOLDS);
        assert_eq!(r.conditions.temperature.min, 10);
        assert_eq!(r.conditions.temperature.max, 18);
        assert_eq!(r.conditions.wind.avg, 15);
        assert_eq!(r.conditions.gusts.max, 20);
        assert_eq!(r.conditions.precipitation.probability, 5);
        assert_eq!(r.conditions.precipitation.amount, 0.0);
        assert_eq!(r.conditions.weather_code, 3);
    }

    #[test]
    fn precipitation_amount_keeps_one_decimal() {
        let win = w(&[12.0], &[5.0], &[10.0], &[10.0], &[1.26]);
        let r = analyze(&win, &DEFAULT_THRESHOLDS);
        assert_eq!(r.conditions.precipitation.amount, 1.3);
        assert_eq!(r.conditions.precipitation.verdict, Verdict::Risky);
        assert_eq!(r.verdict, Verdict::Risky);
    }

    #[test]
    fn missing_weathercode_defaults_to_zero() {
        let mut win = w(&[12.0], &[5.0], &[10.0], &[10.0], &[0.0]);
        win.weathercode = vec![None];
        assert_eq!(analyze(&win, &DEFAULT_THRESHOLDS).conditions.weather_code, 0);
        win.weathercode.clear();
        assert_eq!(analyze(&win, &DEFAULT_THRESHOLDS).conditions.weather_code, 0);
    }

    #[test]
    fn wind_direction_is_optional() {
        let mut win = w(&[12.0, 12.0], &[5.0, 5.0], &[10.0, 10.0], &[0.0, 0.0], &[0.0, 0.0]);
        let r = analyze(&win, &DEFAULT_THRESHOLDS);
        assert_eq!(r.conditions.wind.direction, None);
        assert_eq!(r.conditions.wind.cardinal, None);

        win.winddirection = Some(vec![Some(260.0), Some(280.0)]);
        let r = analyze(&win, &DEFAULT_THRESHOLDS);
        assert_eq!(r.conditions.wind.direction, Some(270));
        assert_eq!(r.conditions.wind.cardinal.as_deref(), Some("O"));

        // snitt over nord: 350° og 10° er nordavind, ikke sønnavind
        win.winddirection = Some(vec![Some(350.0), Some(10.0)]);
        let r = analyze(&win, &DEFAULT_THRESHOLDS);
        assert_eq!(r.conditions.wind.direction, Some(0));
        assert_eq!(r.conditions.wind.cardinal.as_deref(), Some("N"));

        win.winddirection = Some(vec![Some(355.0), Some(359.0)]);
        assert_eq!(analyze(&win, &DEFAULT_THRESHOLDS).conditions.wind.direction, Some(357));
    }

    #[test]
    fn negative_halves_round_up_like_display() {
        let win = w(&[-2.5, -0.5], &[5.0, 5.0], &[10.0, 10.0], &[0.0, 0.0], &[0.0, 0.0]);
        let r = analyze(&win, &DEFAULT_THRESHOLDS);
        assert_eq!(r.conditions.temperature.min, -2);
        assert_eq!(r.conditions.temperature.max, 0);
        assert_eq!(r.conditions.temperature.avg, -1);

        let hours = analyze_hours(&win, &DEFAULT_THRESHOLDS);
        assert_eq!(hours[0].temperature, Some(-2));
        assert_eq!(hours[1].temperature, Some(0));
    }

    #[test]
    fn hours_are_judged_individually() {
        // time 2 har vindkast over NO_GO-grensen
        let win = w(
            &[12.0, 12.0, 12.0],
            &[10.0, 10.0, 10.0],
            &[20.0, 40.0, 60.0],
            &[0.0, 0.0, 0.0],
            &[0.0, 0.0, 0.0],
        );
        let hours = analyze_hours(&win, &DEFAULT_THRESHOLDS);
        let verdicts: Vec<_> = hours.iter().map(|h| h.verdict).collect();
        assert_eq!(verdicts, vec![Verdict::Go, Verdict::Risky, Verdict::NoGo]);
        assert_eq!(hours[1].time, "2024-05-01T09:00");
        assert_eq!(hours[0].temperature, Some(12));
        assert_eq!(analyze(&win, &DEFAULT_THRESHOLDS).verdict, Verdict::NoGo);
    }

    #[test]
    fn json_entrypoint_reports_bad_path() {
        let err = analyze_json(r#"{"temperature": [1.0, "x"]}"#, None).unwrap_err();
        match err {
            InputError::Json { what, path, .. } => {
                assert_eq!(what, "window");
                assert_eq!(path, "temperature[1]");
            }
            other => panic!("uventet feil: {other:?}"),
        }
    }

    #[test]
    fn json_entrypoint_uses_given_thresholds() {
        let win = serde_json::to_string(&w(&[12.0], &[25.0], &[10.0], &[0.0], &[0.0])).unwrap();
        let out: serde_json::Value = serde_json::from_str(&analyze_json(&win, None).unwrap()).unwrap();
        assert_eq!(out["verdict"], "RISKY");
        assert_eq!(out["conditions"]["weatherCode"], 3);

        let mut cfg = DEFAULT_THRESHOLDS;
        cfg.wind.go = 30.0;
        let cfg = serde_json::to_string(&cfg).unwrap();
        let out: serde_json::Value =
            serde_json::from_str(&analyze_json(&win, Some(&cfg)).unwrap()).unwrap();
        assert_eq!(out["verdict"], "GO");
    }
}
