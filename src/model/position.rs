use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

/// Roster position abbreviation
///
/// Decoding never fails: standard abbreviations are matched ignoring case and any other code
/// the backend sends is kept as [`Position::Other`].
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Position {
    C,
    Cb,
    De,
    Dt,
    Fb,
    K,
    Lb,
    Og,
    Ot,
    P,
    Qb,
    Rb,
    S,
    Te,
    Wr,
    /// Code outside the standard abbreviations, as received
    Other(String),
}

impl Position {
    pub const ALL: [Position; 15] = [
        Self::C,
        Self::Cb,
        Self::De,
        Self::Dt,
        Self::Fb,
        Self::K,
        Self::Lb,
        Self::Og,
        Self::Ot,
        Self::P,
        Self::Qb,
        Self::Rb,
        Self::S,
        Self::Te,
        Self::Wr,
    ];

    pub fn as_str(&self) -> &str {
        match self {
            Self::C => "C",
            Self::Cb => "CB",
            Self::De => "DE",
            Self::Dt => "DT",
            Self::Fb => "FB",
            Self::K => "K",
            Self::Lb => "LB",
            Self::Og => "OG",
            Self::Ot => "OT",
            Self::P => "P",
            Self::Qb => "QB",
            Self::Rb => "RB",
            Self::S => "S",
            Self::Te => "TE",
            Self::Wr => "WR",
            Self::Other(code) => code,
        }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Strict parse, only the standard abbreviations are accepted
impl FromStr for Position {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|p| p.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| format!("Unknown position: {}", s))
    }
}

impl From<String> for Position {
    fn from(code: String) -> Self {
        code.parse()
            .unwrap_or_else(|_| Self::Other(code.trim().to_string()))
    }
}

impl From<Position> for String {
    fn from(position: Position) -> Self {
        match position {
            Position::Other(code) => code,
            known => known.as_str().to_string(),
        }
    }
}
