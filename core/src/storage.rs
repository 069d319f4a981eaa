use std::path::{Path, PathBuf};

use crate::counters::Metrics;
use crate::error::StorageError;
use crate::thresholds::{ThresholdConfig, DEFAULT_THRESHOLDS};

/// Miljøvariabel som overstyrer plasseringen av terskelfilen.
pub const THRESHOLDS_ENV: &str = "RIDEORNOT_THRESHOLDS";
/// Standard filnavn (den ene "nøkkelen" terskler lagres under).
pub const DEFAULT_THRESHOLDS_FILE: &str = "rideornot_thresholds.json";

/// Brukerens terskler, lagret som én JSON-fil. Hele objektet erstattes ved lagring.
#[derive(Debug, Clone)]
pub struct ThresholdStore {
    path: PathBuf,
}

enum Loaded {
    Stored(ThresholdConfig),
    Fallback,
}

impl ThresholdStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// `$RIDEORNOT_THRESHOLDS` hvis satt, ellers `rideornot_thresholds.json` i arbeidskatalogen.
    pub fn default_location() -> Self {
        match std::env::var_os(THRESHOLDS_ENV) {
            Some(p) if !p.is_empty() => Self::new(p),
            _ => Self::new(DEFAULT_THRESHOLDS_FILE),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read(&self) -> Loaded {
        let contents = match std::fs::read_to_string(&self.path) {
            Ok(c) => c,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                log::debug!(
                    "Fant ikke terskler på {}, bruker standardverdier",
                    self.path.display()
                );
                return Loaded::Fallback;
            }
            Err(e) => {
                log::warn!(
                    "Kunne ikke lese terskler fra {}: {e}; bruker standardverdier",
                    self.path.display()
                );
                return Loaded::Fallback;
            }
        };

        let de = &mut serde_json::Deserializer::from_str(&contents);
        match serde_path_to_error::deserialize::<_, ThresholdConfig>(de) {
            Ok(cfg) => {
                for criterion in cfg.inverted_bounds() {
                    log::warn!(
                        "Terskel '{}' har go/risky i omvendt rekkefølge; brukes uendret",
                        criterion.as_str()
                    );
                }
                log::debug!("Terskler lastet fra {}", self.path.display());
                Loaded::Stored(cfg)
            }
            Err(e) => {
                log::warn!(
                    "Korrupt terskelfil {} (ved '{}'): {}; bruker standardverdier",
                    self.path.display(),
                    e.path(),
                    e.inner()
                );
                Loaded::Fallback
            }
        }
    }

    /// Sist lagrede terskler, eller standardverdiene hvis filen mangler eller er korrupt.
    /// Feiler aldri.
    pub fn load(&self) -> ThresholdConfig {
        match self.read() {
            Loaded::Stored(cfg) => cfg,
            Loaded::Fallback => DEFAULT_THRESHOLDS,
        }
    }

    /// Som `load`, men teller fallback i `metrics`.
    pub fn load_observed(&self, metrics: &Metrics) -> ThresholdConfig {
        match self.read() {
            Loaded::Stored(cfg) => cfg,
            Loaded::Fallback => {
                metrics.record_threshold_fallback();
                DEFAULT_THRESHOLDS
            }
        }
    }

    /// Lagrer tersklene (pretty-print JSON), erstatter hele filen.
    pub fn save(&self, thresholds: &ThresholdConfig) -> Result<(), StorageError> {
        let json = serde_json::to_string_pretty(thresholds)?;
        std::fs::write(&self.path, json).map_err(|source| StorageError::Io {
            path: self.path.display().to_string(),
            source,
        })?;
        log::info!("Terskler lagret til {}", self.path.display());
        Ok(())
    }

    /// Sletter lagrede terskler og returnerer standardverdiene.
    /// Manglende fil er ikke en feil.
    pub fn reset(&self) -> Result<ThresholdConfig, StorageError> {
        match std::fs::remove_file(&self.path) {
            Ok(()) => log::info!("Terskler tilbakestilt ({} slettet)", self.path.display()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {}
            Err(source) => {
                return Err(StorageError::Io {
                    path: self.path.display().to_string(),
                    source,
                })
            }
        }
        Ok(DEFAULT_THRESHOLDS)
    }
}
