use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Tre-delt anbefaling. Rekkefølgen på variantene ER alvorlighetsgraden:
/// Go < Risky < NoGo, så `max()` gir samlet verdikt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize)]
pub enum Verdict {
    #[default]
    #[serde(rename = "GO")]
    Go,
    #[serde(rename = "RISKY")]
    Risky,
    #[serde(rename = "NO_GO")]
    NoGo,
}

impl Verdict {
    pub const ALL: [Verdict; 3] = [Verdict::Go, Verdict::Risky, Verdict::NoGo];

    pub fn as_str(self) -> &'static str {
        match self {
            Verdict::Go => "GO",
            Verdict::Risky => "RISKY",
            Verdict::NoGo => "NO_GO",
        }
    }

    /// 0 = GO, 1 = RISKY, 2 = NO_GO
    pub fn severity_rank(self) -> u8 {
        self as u8
    }

    /// Mest alvorlige verdikt; tom liste gir GO.
    pub fn most_severe<I: IntoIterator<Item = Verdict>>(verdicts: I) -> Verdict {
        verdicts.into_iter().max().unwrap_or_default()
    }
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Verdict {
    type Err = String;

    /// Kun de eksakte navnene fra JSON ("GO", "RISKY", "NO_GO").
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Verdict::ALL
            .into_iter()
            .find(|v| v.as_str() == s)
            .ok_or_else(|| format!("ukjent verdikt: {s}"))
    }
}

/// Presentasjonsdata for et verdikt (emoji, tittel, melding, farge).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct VerdictInfo {
    pub verdict: Verdict,
    pub emoji: &'static str,
    pub title: &'static str,
    pub message: &'static str,
    pub color: &'static str,
    pub severity_rank: u8,
}

const VERDICT_TABLE: [VerdictInfo; 3] = [
    VerdictInfo {
        verdict: Verdict::Go,
        emoji: "✅",
        title: "GO !",
        message: "Conditions optimales",
        color: "green",
        severity_rank: 0,
    },
    VerdictInfo {
        verdict: Verdict::Risky,
        emoji: "⚠️",
        title: "RISQUÉ",
        message: "Faisable mais prudence",
        color: "orange",
        severity_rank: 1,
    },
    VerdictInfo {
        verdict: Verdict::NoGo,
        emoji: "❌",
        title: "NO GO",
        message: "Reste au chaud",
        color: "red",
        severity_rank: 2,
    },
];

pub fn describe_verdict(verdict: Verdict) -> VerdictInfo {
    VERDICT_TABLE[verdict.severity_rank() as usize]
}

/// Som `describe_verdict`, men fra tekst. Ukjent verdi → GO-oppføringen.
pub fn describe_verdict_str(verdict: &str) -> VerdictInfo {
    match verdict.parse::<Verdict>() {
        Ok(v) => describe_verdict(v),
        Err(_) => {
            log::debug!("describe_verdict: ukjent verdi {verdict:?}, bruker GO");
            describe_verdict(Verdict::Go)
        }
    }
}
