// core/tests/test_storage.rs
use rideornot_core::{
    analyze_hours_json_stored, analyze_json_stored, Metrics, Threshold, ThresholdConfig,
    ThresholdStore, DEFAULT_THRESHOLDS,
};
use std::fs;

fn custom() -> ThresholdConfig {
    ThresholdConfig {
        wind: Threshold::new(15.0, 30.0),
        gusts: Threshold::new(30.0, 45.0),
        precipitation_probability: Threshold::new(10.0, 40.0),
        precipitation: Threshold::new(0.2, 1.5),
        temperature_min: Threshold::new(8.0, 2.0),
        temperature_max: Threshold::new(28.0, 34.0),
    }
}

#[test]
fn test_save_and_load_thresholds() {
    let path = "tests/tmp_thresholds_roundtrip.json";
    let _ = fs::remove_file(path);
    let store = ThresholdStore::new(path);

    store.save(&custom()).expect("kunne ikke lagre terskler");
    let loaded = store.load();
    assert_eq!(loaded, custom());

    // rydde opp
    fs::remove_file(path).ok();
}

#[test]
fn test_reset_returns_defaults_and_removes_file() {
    let path = "tests/tmp_thresholds_reset.json";
    let store = ThresholdStore::new(path);

    store.save(&custom()).expect("save failed");
    let reset = store.reset().expect("reset failed");
    assert_eq!(reset, DEFAULT_THRESHOLDS);
    assert!(!store.path().exists());
    assert_eq!(store.load(), DEFAULT_THRESHOLDS);

    // reset uten fil er ok
    assert_eq!(store.reset().expect("second reset"), DEFAULT_THRESHOLDS);
}

#[test]
fn test_missing_file_falls_back_to_defaults() {
    let store = ThresholdStore::new("tests/does_not_exist_thresholds.json");
    assert_eq!(store.load(), DEFAULT_THRESHOLDS);
}

#[test]
fn test_corrupt_file_falls_back_and_is_counted() {
    let path = "tests/tmp_thresholds_corrupt.json";
    // mangler temperature_max og har tekst der et tall skal stå
    fs::write(path, r#"{"wind": {"go": "twenty", "risky": 35}}"#).unwrap();

    let metrics = Metrics::new().unwrap();
    let store = ThresholdStore::new(path);
    assert_eq!(store.load_observed(&metrics), DEFAULT_THRESHOLDS);
    assert_eq!(metrics.threshold_fallbacks_total(), 1);

    fs::write(path, "not json at all").unwrap();
    assert_eq!(store.load(), DEFAULT_THRESHOLDS);

    let _ = fs::remove_file(path);
}

#[test]
fn test_inverted_bounds_are_kept_as_stored() {
    let path = "tests/tmp_thresholds_inverted.json";
    let mut cfg = DEFAULT_THRESHOLDS;
    cfg.gusts = Threshold::new(50.0, 35.0);

    let store = ThresholdStore::new(path);
    store.save(&cfg).unwrap();
    let loaded = store.load();
    assert_eq!(loaded.gusts, Threshold::new(50.0, 35.0));
    assert_eq!(loaded.inverted_bounds().len(), 1);

    let _ = fs::remove_file(path);
}

#[test]
fn test_file_is_flat_json_object() {
    let path = "tests/tmp_thresholds_shape.json";
    let store = ThresholdStore::new(path);
    store.save(&DEFAULT_THRESHOLDS).unwrap();

    let raw = fs::read_to_string(path).unwrap();
    let v: serde_json::Value = serde_json::from_str(&raw).unwrap();
    assert_eq!(v["wind"]["go"], 20.0);
    assert_eq!(v["temperature_min"]["risky"], 0.0);
    assert_eq!(v.as_object().unwrap().len(), 6);

    let _ = fs::remove_file(path);
}

#[test]
fn test_json_analysis_without_thresholds_uses_stored_file() {
    let path = "tests/tmp_thresholds_json_entry.json";
    let store = ThresholdStore::new(path);
    store.save(&custom()).unwrap();

    // 18 km/h: GO med standardverdier, RISKY med lagret wind.go = 15
    let window = serde_json::json!({
        "temperature": [14.0], "windspeed": [18.0], "windgusts": [20.0],
        "precipitation": [0.0], "precipitation_probability": [0.0],
        "weathercode": [1], "time": ["2024-05-01T08:00"]
    })
    .to_string();

    let out: serde_json::Value =
        serde_json::from_str(&analyze_json_stored(&window, None, &store).unwrap()).unwrap();
    assert_eq!(out["verdict"], "RISKY");

    let hours: serde_json::Value =
        serde_json::from_str(&analyze_hours_json_stored(&window, None, &store).unwrap()).unwrap();
    assert_eq!(hours[0]["verdict"], "RISKY");

    // eksplisitte terskler går foran filen
    let given = serde_json::to_string(&DEFAULT_THRESHOLDS).unwrap();
    let out: serde_json::Value =
        serde_json::from_str(&analyze_json_stored(&window, Some(&given), &store).unwrap()).unwrap();
    assert_eq!(out["verdict"], "GO");

    // uten fil: standardverdier
    let _ = fs::remove_file(path);
    let out: serde_json::Value =
        serde_json::from_str(&analyze_json_stored(&window, None, &store).unwrap()).unwrap();
    assert_eq!(out["verdict"], "GO");
}
