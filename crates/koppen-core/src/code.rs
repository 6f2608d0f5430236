//! Köppen–Geiger code model.
//!
//! Each main group carries only the letters that are meaningful for it, so a
//! `KoppenCode` value is always one of `A[fmw]`, `B[WS]`, `C[swf][abc]`,
//! `D[swf][abcd]` or `E[TF]`.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use thiserror::Error;

// ── Letters ──────────────────────────────────────────────────────────────────

/// First letter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MainGroup {
    Tropical,
    Arid,
    Temperate,
    Continental,
    Polar,
}

impl MainGroup {
    pub fn letter(self) -> char {
        match self {
            MainGroup::Tropical => 'A',
            MainGroup::Arid => 'B',
            MainGroup::Temperate => 'C',
            MainGroup::Continental => 'D',
            MainGroup::Polar => 'E',
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            MainGroup::Tropical => "tropical",
            MainGroup::Arid => "arid",
            MainGroup::Temperate => "temperate",
            MainGroup::Continental => "continental",
            MainGroup::Polar => "polar",
        }
    }
}

/// Second letter of group A.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TropicalPattern {
    /// `f`: every month at least 60 mm.
    Rainforest,
    /// `m`: short dry season offset by a wet year.
    Monsoon,
    /// `w`: pronounced dry season.
    Savanna,
}

/// Second letter of group B.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AridPattern {
    /// `W`
    Desert,
    /// `S`
    Steppe,
}

/// Second letter of groups C and D.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SeasonalPattern {
    /// `s`
    DrySummer,
    /// `w`
    DryWinter,
    /// `f`
    FullyHumid,
}

/// Third letter of groups C and D. `ExtremelyColdWinter` is D-only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TemperatureLevel {
    /// `a`
    HotSummer,
    /// `b`
    WarmSummer,
    /// `c`
    ColdSummer,
    /// `d`
    ExtremelyColdWinter,
}

/// Second letter of group E.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PolarType {
    /// `T`
    Tundra,
    /// `F`
    IceCap,
}

impl TropicalPattern {
    pub fn letter(self) -> char {
        match self {
            TropicalPattern::Rainforest => 'f',
            TropicalPattern::Monsoon => 'm',
            TropicalPattern::Savanna => 'w',
        }
    }

    fn meaning(self) -> &'static str {
        match self {
            TropicalPattern::Rainforest => "rainforest",
            TropicalPattern::Monsoon => "monsoon",
            TropicalPattern::Savanna => "savanna",
        }
    }
}

impl AridPattern {
    pub fn letter(self) -> char {
        match self {
            AridPattern::Desert => 'W',
            AridPattern::Steppe => 'S',
        }
    }
}

impl SeasonalPattern {
    pub fn letter(self) -> char {
        match self {
            SeasonalPattern::DrySummer => 's',
            SeasonalPattern::DryWinter => 'w',
            SeasonalPattern::FullyHumid => 'f',
        }
    }

    fn meaning(self) -> &'static str {
        match self {
            SeasonalPattern::DrySummer => "dry summers",
            SeasonalPattern::DryWinter => "dry winters",
            SeasonalPattern::FullyHumid => "no dry season",
        }
    }
}

impl TemperatureLevel {
    pub fn letter(self) -> char {
        match self {
            TemperatureLevel::HotSummer => 'a',
            TemperatureLevel::WarmSummer => 'b',
            TemperatureLevel::ColdSummer => 'c',
            TemperatureLevel::ExtremelyColdWinter => 'd',
        }
    }

    fn meaning(self) -> &'static str {
        match self {
            TemperatureLevel::HotSummer => "hot summers",
            TemperatureLevel::WarmSummer => "warm summers",
            TemperatureLevel::ColdSummer => "short cool summers",
            TemperatureLevel::ExtremelyColdWinter => "extremely cold winters",
        }
    }
}

impl PolarType {
    pub fn letter(self) -> char {
        match self {
            PolarType::Tundra => 'T',
            PolarType::IceCap => 'F',
        }
    }
}

// ── Code ─────────────────────────────────────────────────────────────────────

/// A complete classification result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KoppenCode {
    Tropical(TropicalPattern),
    Arid(AridPattern),
    Temperate(SeasonalPattern, TemperatureLevel),
    Continental(SeasonalPattern, TemperatureLevel),
    Polar(PolarType),
}

impl KoppenCode {
    pub fn main_group(&self) -> MainGroup {
        match self {
            KoppenCode::Tropical(_) => MainGroup::Tropical,
            KoppenCode::Arid(_) => MainGroup::Arid,
            KoppenCode::Temperate(..) => MainGroup::Temperate,
            KoppenCode::Continental(..) => MainGroup::Continental,
            KoppenCode::Polar(_) => MainGroup::Polar,
        }
    }

    /// Second letter (every group has one).
    pub fn precipitation_letter(&self) -> char {
        match self {
            KoppenCode::Tropical(p) => p.letter(),
            KoppenCode::Arid(p) => p.letter(),
            KoppenCode::Temperate(p, _) | KoppenCode::Continental(p, _) => p.letter(),
            KoppenCode::Polar(p) => p.letter(),
        }
    }

    /// Third letter, present for C and D only.
    pub fn temperature_letter(&self) -> Option<char> {
        match self {
            KoppenCode::Temperate(_, t) | KoppenCode::Continental(_, t) => Some(t.letter()),
            _ => None,
        }
    }

    /// Plain-English reading of the code, e.g. "continental climate with no
    /// dry season and warm summers".
    pub fn description(&self) -> String {
        match self {
            KoppenCode::Tropical(p) => format!("tropical {} climate", p.meaning()),
            KoppenCode::Arid(AridPattern::Desert) => "arid desert climate".to_string(),
            KoppenCode::Arid(AridPattern::Steppe) => "semi-arid steppe climate".to_string(),
            KoppenCode::Temperate(p, t) | KoppenCode::Continental(p, t) => format!(
                "{} climate with {} and {}",
                self.main_group().name(),
                p.meaning(),
                t.meaning()
            ),
            KoppenCode::Polar(PolarType::Tundra) => "polar tundra climate".to_string(),
            KoppenCode::Polar(PolarType::IceCap) => "polar ice cap climate".to_string(),
        }
    }
}

impl fmt::Display for KoppenCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.main_group().letter(), self.precipitation_letter())?;
        if let Some(t) = self.temperature_letter() {
            write!(f, "{t}")?;
        }
        Ok(())
    }
}

// ── Parsing ──────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid Köppen code {0:?}")]
pub struct ParseCodeError(pub String);

impl FromStr for KoppenCode {
    type Err = ParseCodeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let chars: Vec<char> = s.chars().collect();
        let code = match chars.as_slice() {
            ['A', p] => KoppenCode::Tropical(match p {
                'f' => TropicalPattern::Rainforest,
                'm' => TropicalPattern::Monsoon,
                'w' => TropicalPattern::Savanna,
                _ => return Err(ParseCodeError(s.to_string())),
            }),
            ['B', p] => KoppenCode::Arid(match p {
                'W' => AridPattern::Desert,
                'S' => AridPattern::Steppe,
                _ => return Err(ParseCodeError(s.to_string())),
            }),
            ['E', p] => KoppenCode::Polar(match p {
                'T' => PolarType::Tundra,
                'F' => PolarType::IceCap,
                _ => return Err(ParseCodeError(s.to_string())),
            }),
            [g @ ('C' | 'D'), p, t] => {
                let pattern = match p {
                    's' => SeasonalPattern::DrySummer,
                    'w' => SeasonalPattern::DryWinter,
                    'f' => SeasonalPattern::FullyHumid,
                    _ => return Err(ParseCodeError(s.to_string())),
                };
                let level = match (g, t) {
                    (_, 'a') => TemperatureLevel::HotSummer,
                    (_, 'b') => TemperatureLevel::WarmSummer,
                    (_, 'c') => TemperatureLevel::ColdSummer,
                    ('D', 'd') => TemperatureLevel::ExtremelyColdWinter,
                    _ => return Err(ParseCodeError(s.to_string())),
                };
                if *g == 'C' {
                    KoppenCode::Temperate(pattern, level)
                } else {
                    KoppenCode::Continental(pattern, level)
                }
            }
            _ => return Err(ParseCodeError(s.to_string())),
        };
        Ok(code)
    }
}

impl Serialize for KoppenCode {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for KoppenCode {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}
