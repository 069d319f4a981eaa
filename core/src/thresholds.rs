use serde::{Deserialize, Serialize};

use crate::metrics::WindowStats;
use crate::verdict::Verdict;

/// Ett grensepar. Tolkningen avhenger av `Comparison` for kriteriet.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Threshold {
    pub go: f64,
    pub risky: f64,
}

impl Threshold {
    pub const fn new(go: f64, risky: f64) -> Self {
        Self { go, risky }
    }
}

/// Alle seks terskler. Lagres som ett flatt JSON-objekt (hel erstatning ved lagring).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ThresholdConfig {
    pub wind: Threshold,
    pub gusts: Threshold,
    pub precipitation_probability: Threshold,
    pub precipitation: Threshold,
    pub temperature_min: Threshold,
    pub temperature_max: Threshold,
}

pub const DEFAULT_THRESHOLDS: ThresholdConfig = ThresholdConfig {
    wind: Threshold::new(20.0, 35.0),                     // km/h snitt
    gusts: Threshold::new(35.0, 50.0),                    // km/h maks
    precipitation_probability: Threshold::new(20.0, 50.0), // %
    precipitation: Threshold::new(0.0, 2.0),              // mm
    temperature_min: Threshold::new(5.0, 0.0),            // °C, synkende
    temperature_max: Threshold::new(32.0, 38.0),          // °C
};

impl Default for ThresholdConfig {
    fn default() -> Self {
        DEFAULT_THRESHOLDS
    }
}

impl ThresholdConfig {
    pub fn get(&self, criterion: Criterion) -> Threshold {
        match criterion {
            Criterion::Wind => self.wind,
            Criterion::Gusts => self.gusts,
            Criterion::PrecipitationProbability => self.precipitation_probability,
            Criterion::Precipitation => self.precipitation,
            Criterion::TemperatureMin => self.temperature_min,
            Criterion::TemperatureMax => self.temperature_max,
        }
    }

    /// Kriterier der grensene ligger i "feil" rekkefølge for sin sammenligning
    /// (go > risky for stigende, go < risky for synkende). Evalueringen bruker dem
    /// likevel uendret; dette er kun til varsling.
    pub fn inverted_bounds(&self) -> Vec<Criterion> {
        CRITERIA
            .iter()
            .filter(|spec| {
                let t = self.get(spec.criterion);
                match spec.comparison {
                    Comparison::Ascending => t.go > t.risky,
                    Comparison::Descending => t.go < t.risky,
                }
            })
            .map(|spec| spec.criterion)
            .collect()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Criterion {
    Wind,
    Gusts,
    PrecipitationProbability,
    Precipitation,
    TemperatureMin,
    TemperatureMax,
}

impl Criterion {
    pub fn as_str(self) -> &'static str {
        match self {
            Criterion::Wind => "wind",
            Criterion::Gusts => "gusts",
            Criterion::PrecipitationProbability => "precipitation_probability",
            Criterion::Precipitation => "precipitation",
            Criterion::TemperatureMin => "temperature_min",
            Criterion::TemperatureMax => "temperature_max",
        }
    }
}

/// Sammenligningsform.
/// Ascending: lavere er tryggere (vind, nedbør, varme).
/// Descending: høyere er tryggere (minimumstemperatur).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Comparison {
    Ascending,
    Descending,
}

impl Comparison {
    /// Grensene er inkluderende i begge retninger.
    pub fn evaluate(self, value: f64, threshold: Threshold) -> Verdict {
        let within = |bound: f64| match self {
            Comparison::Ascending => value <= bound,
            Comparison::Descending => value >= bound,
        };
        if within(threshold.go) {
            Verdict::Go
        } else if within(threshold.risky) {
            Verdict::Risky
        } else {
            Verdict::NoGo
        }
    }
}

/// Hvilken serie og hvilken statistikk et kriterium leser.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Statistic {
    WindAvg,
    GustsMax,
    PrecipitationProbabilityMax,
    PrecipitationMax,
    TemperatureMin,
    TemperatureMax,
}

impl Statistic {
    pub fn pick(self, stats: &WindowStats) -> f64 {
        match self {
            Statistic::WindAvg => stats.windspeed.avg,
            Statistic::GustsMax => stats.windgusts.max,
            Statistic::PrecipitationProbabilityMax => stats.precipitation_probability.max,
            Statistic::PrecipitationMax => stats.precipitation.max,
            Statistic::TemperatureMin => stats.temperature.min,
            Statistic::TemperatureMax => stats.temperature.max,
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub struct CriterionSpec {
    pub criterion: Criterion,
    pub statistic: Statistic,
    pub comparison: Comparison,
}

/// Tabellen som driver hele evalueringen.
pub const CRITERIA: [CriterionSpec; 6] = [
    CriterionSpec {
        criterion: Criterion::Wind,
        statistic: Statistic::WindAvg,
        comparison: Comparison::Ascending,
    },
    CriterionSpec {
        criterion: Criterion::Gusts,
        statistic: Statistic::GustsMax,
        comparison: Comparison::Ascending,
    },
    CriterionSpec {
        criterion: Criterion::PrecipitationProbability,
        statistic: Statistic::PrecipitationProbabilityMax,
        comparison: Comparison::Ascending,
    },
    CriterionSpec {
        criterion: Criterion::Precipitation,
        statistic: Statistic::PrecipitationMax,
        comparison: Comparison::Ascending,
    },
    CriterionSpec {
        criterion: Criterion::TemperatureMin,
        statistic: Statistic::TemperatureMin,
        comparison: Comparison::Descending,
    },
    CriterionSpec {
        criterion: Criterion::TemperatureMax,
        statistic: Statistic::TemperatureMax,
        comparison: Comparison::Ascending,
    },
];

/// Resultat for ett kriterium.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CriterionResult {
    pub criterion: Criterion,
    pub value: f64,
    pub verdict: Verdict,
}

/// Kjører alle seks kriteriene mot statistikken, i tabellrekkefølge.
pub fn evaluate_all(stats: &WindowStats, thresholds: &ThresholdConfig) -> [CriterionResult; 6] {
    CRITERIA.map(|spec| {
        let value = spec.statistic.pick(stats);
        CriterionResult {
            criterion: spec.criterion,
            value,
            verdict: spec.comparison.evaluate(value, thresholds.get(spec.criterion)),
        }
    })
}
