//! Fixed selection lists offered to the user: governing law and arbitration seat.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Error, Debug, PartialEq, Eq)]
#[error("unknown {kind}: {value:?}")]
pub struct ParseOptionError {
    pub kind: &'static str,
    pub value: String,
}

/// Legal system whose substantive law governs interpretation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Jurisdiction {
    Uncitral,
    #[default]
    India,
    Singapore,
    UnitedKingdom,
    UnitedStates,
    Uae,
    Indonesia,
    Australia,
    Germany,
    SouthAfrica,
    HongKong,
}

impl Jurisdiction {
    pub const ALL: [Jurisdiction; 11] = [
        Self::Uncitral,
        Self::India,
        Self::Singapore,
        Self::UnitedKingdom,
        Self::UnitedStates,
        Self::Uae,
        Self::Indonesia,
        Self::Australia,
        Self::Germany,
        Self::SouthAfrica,
        Self::HongKong,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Self::Uncitral => "Global Standards (UNCITRAL)",
            Self::India => "India (Contract Act, 1872)",
            Self::Singapore => "Singapore (Contract Law)",
            Self::UnitedKingdom => "UK (English Common Law)",
            Self::UnitedStates => "USA (Uniform Commercial Code)",
            Self::Uae => "UAE (DIFC / ADGM Common Law)",
            Self::Indonesia => "Indonesia (Civil Code Book III)",
            Self::Australia => "Australia (Contract Law)",
            Self::Germany => "Germany (BGB Civil Code)",
            Self::SouthAfrica => "South Africa (Contract Law)",
            Self::HongKong => "Hong Kong (Common Law)",
        }
    }

    pub fn slug(&self) -> &'static str {
        match self {
            Self::Uncitral => "uncitral",
            Self::India => "india",
            Self::Singapore => "singapore",
            Self::UnitedKingdom => "uk",
            Self::UnitedStates => "usa",
            Self::Uae => "uae",
            Self::Indonesia => "indonesia",
            Self::Australia => "australia",
            Self::Germany => "germany",
            Self::SouthAfrica => "south-africa",
            Self::HongKong => "hong-kong",
        }
    }
}

impl fmt::Display for Jurisdiction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Jurisdiction {
    type Err = ParseOptionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        lookup(&Self::ALL, s, |j| [j.slug(), j.label()]).ok_or_else(|| ParseOptionError {
            kind: "jurisdiction",
            value: s.to_string(),
        })
    }
}

/// Institutional seat governing dispute-resolution procedure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum ArbitrationSeat {
    #[default]
    Siac,
    Lcia,
    Diac,
    AaaIcdr,
    Mcia,
    Hkiac,
}

impl ArbitrationSeat {
    pub const ALL: [ArbitrationSeat; 6] = [
        Self::Siac,
        Self::Lcia,
        Self::Diac,
        Self::AaaIcdr,
        Self::Mcia,
        Self::Hkiac,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Self::Siac => "Singapore (SIAC)",
            Self::Lcia => "UK (LCIA)",
            Self::Diac => "UAE (DIAC)",
            Self::AaaIcdr => "USA (AAA/ICDR)",
            Self::Mcia => "India (MCIA)",
            Self::Hkiac => "Hong Kong (HKIAC)",
        }
    }

    pub fn slug(&self) -> &'static str {
        match self {
            Self::Siac => "siac",
            Self::Lcia => "lcia",
            Self::Diac => "diac",
            Self::AaaIcdr => "icdr",
            Self::Mcia => "mcia",
            Self::Hkiac => "hkiac",
        }
    }
}

impl fmt::Display for ArbitrationSeat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for ArbitrationSeat {
    type Err = ParseOptionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        lookup(&Self::ALL, s, |seat| [seat.slug(), seat.label()]).ok_or_else(|| {
            ParseOptionError {
                kind: "arbitration seat",
                value: s.to_string(),
            }
        })
    }
}

fn lookup<T: Copy>(all: &[T], s: &str, names: impl Fn(&T) -> [&'static str; 2]) -> Option<T> {
    let s = s.trim();
    all.iter()
        .find(|item| names(item).iter().any(|n| n.eq_ignore_ascii_case(s)))
        .copied()
}
