use thiserror::Error;

/// Feil ved lagring/sletting av terskelfilen.
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("I/O-feil mot {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("kunne ikke serialisere terskler: {0}")]
    Json(#[from] serde_json::Error),
}

/// Feil ved utsnitt av værvindu fra en timesprognose.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum WindowError {
    #[error("fant ikke starttimen {0} i prognosen")]
    StartNotFound(String),
    #[error("serien '{series}' har lengde {found}, forventet {expected}")]
    Misaligned {
        series: &'static str,
        expected: usize,
        found: usize,
    },
    #[error("værvinduet er tomt")]
    Empty,
}

/// Feil i JSON-inngangene (analyze_json o.l.); `path` peker på feltet som feilet.
#[derive(Debug, Error)]
pub enum InputError {
    #[error("ugyldig JSON i {what} ved '{path}': {source}")]
    Json {
        what: &'static str,
        path: String,
        #[source]
        source: serde_json::Error,
    },
    #[error("kunne ikke serialisere resultat: {0}")]
    Output(#[from] serde_json::Error),
}
