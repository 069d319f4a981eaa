use prometheus::{Encoder, IntCounter, IntCounterVec, Opts, Registry, TextEncoder};

use crate::verdict::Verdict;

/// Prometheus-tellere for motoren. Eget `Registry` per instans, så tester
/// og flere apper i samme prosess ikke kolliderer.
#[derive(Clone)]
pub struct Metrics {
    registry: Registry,
    evaluations: IntCounterVec,
    threshold_fallbacks: IntCounter,
}

impl Metrics {
    pub fn new() -> Result<Self, prometheus::Error> {
        let registry = Registry::new();

        let evaluations = IntCounterVec::new(
            Opts::new(
                "rideornot_evaluations_total",
                "Antall analyser, fordelt på samlet verdikt",
            ),
            &["verdict"],
        )?;
        let threshold_fallbacks = IntCounter::new(
            "rideornot_threshold_fallback_total",
            "Antall ganger lagrede terskler manglet/var korrupte og standardverdier ble brukt",
        )?;

        registry.register(Box::new(evaluations.clone()))?;
        registry.register(Box::new(threshold_fallbacks.clone()))?;

        Ok(Self {
            registry,
            evaluations,
            threshold_fallbacks,
        })
    }

    pub fn registry(&self) -> &Registry {
        &self.registry
    }

    pub fn record_evaluation(&self, verdict: Verdict) {
        self.evaluations.with_label_values(&[verdict.as_str()]).inc();
    }

    pub fn record_threshold_fallback(&self) {
        self.threshold_fallbacks.inc();
    }

    pub fn evaluations_total(&self, verdict: Verdict) -> u64 {
        self.evaluations.with_label_values(&[verdict.as_str()]).get()
    }

    pub fn threshold_fallbacks_total(&self) -> u64 {
        self.threshold_fallbacks.get()
    }

    /// Tekstformat for /metrics o.l.
    pub fn render(&self) -> String {
        let mut buf = Vec::new();
        if let Err(e) = TextEncoder::new().encode(&self.registry.gather(), &mut buf) {
            log::warn!("kunne ikke kode metrics: {e}");
            return String::new();
        }
        String::from_utf8(buf).unwrap_or_default()
    }
}

impl std::fmt::Debug for Metrics {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Metrics").finish_non_exhaustive()
    }
}
