//! Closed attribute enumerations shared by missing-person and homeless
//! records.
//!
//! Each enumeration carries:
//! - its wire value (the snake_case string used in fixtures and by the API)
//! - a `FromStr` impl that rejects anything outside the closed set
//! - Portuguese and English display labels for the UI layer
//! - an `ALL` constant for enumerating the options behind select controls

use crate::error::RegistryError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Display language for attribute labels
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Lang {
    #[default]
    Pt,
    En,
}

// =============================================================================
// Gender
// =============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Gender {
    Male,
    Female,
}

impl Gender {
    pub const ALL: [Gender; 2] = [Gender::Male, Gender::Female];

    /// Wire value used in fixtures and filter criteria
    pub fn as_str(&self) -> &'static str {
        match self {
            Gender::Male => "male",
            Gender::Female => "female",
        }
    }

    pub fn label(&self, lang: Lang) -> &'static str {
        match (self, lang) {
            (Gender::Male, Lang::Pt) => "Masculino",
            (Gender::Male, Lang::En) => "Male",
            (Gender::Female, Lang::Pt) => "Feminino",
            (Gender::Female, Lang::En) => "Female",
        }
    }
}

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Gender {
    type Err = RegistryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "male" => Ok(Gender::Male),
            "female" => Ok(Gender::Female),
            _ => Err(RegistryError::InvalidValue {
                field: "gender",
                value: s.to_string(),
            }),
        }
    }
}

// =============================================================================
// EyeColor
// =============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EyeColor {
    Green,
    Blue,
    Brown,
    Black,
    DarkBrown,
}

impl EyeColor {
    pub const ALL: [EyeColor; 5] = [
        EyeColor::Green,
        EyeColor::Blue,
        EyeColor::Brown,
        EyeColor::Black,
        EyeColor::DarkBrown,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            EyeColor::Green => "green",
            EyeColor::Blue => "blue",
            EyeColor::Brown => "brown",
            EyeColor::Black => "black",
            EyeColor::DarkBrown => "dark_brown",
        }
    }

    pub fn label(&self, lang: Lang) -> &'static str {
        match (self, lang) {
            (EyeColor::Green, Lang::Pt) => "Verde",
            (EyeColor::Green, Lang::En) => "Green",
            (EyeColor::Blue, Lang::Pt) => "Azul",
            (EyeColor::Blue, Lang::En) => "Blue",
            (EyeColor::Brown, Lang::Pt) => "Castanho",
            (EyeColor::Brown, Lang::En) => "Brown",
            (EyeColor::Black, Lang::Pt) => "Pretos",
            (EyeColor::Black, Lang::En) => "Black",
            (EyeColor::DarkBrown, Lang::Pt) => "Castanho Escuro",
            (EyeColor::DarkBrown, Lang::En) => "Dark Brown",
        }
    }
}

impl fmt::Display for EyeColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for EyeColor {
    type Err = RegistryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "green" => Ok(EyeColor::Green),
            "blue" => Ok(EyeColor::Blue),
            "brown" => Ok(EyeColor::Brown),
            "black" => Ok(EyeColor::Black),
            "dark_brown" => Ok(EyeColor::DarkBrown),
            _ => Err(RegistryError::InvalidValue {
                field: "eyes",
                value: s.to_string(),
            }),
        }
    }
}

// =============================================================================
// HairColor
// =============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HairColor {
    Black,
    Brown,
    Redhead,
    Blond,
}

impl HairColor {
    pub const ALL: [HairColor; 4] = [
        HairColor::Black,
        HairColor::Brown,
        HairColor::Redhead,
        HairColor::Blond,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            HairColor::Black => "black",
            HairColor::Brown => "brown",
            HairColor::Redhead => "redhead",
            HairColor::Blond => "blond",
        }
    }

    pub fn label(&self, lang: Lang) -> &'static str {
        match (self, lang) {
            (HairColor::Black, Lang::Pt) => "Preto",
            (HairColor::Black, Lang::En) => "Black",
            (HairColor::Brown, Lang::Pt) => "Castanho",
            (HairColor::Brown, Lang::En) => "Brown",
            (HairColor::Redhead, Lang::Pt) => "Ruivo",
            (HairColor::Redhead, Lang::En) => "Redhead",
            (HairColor::Blond, Lang::Pt) => "Loiro",
            (HairColor::Blond, Lang::En) => "Blond",
        }
    }
}

impl fmt::Display for HairColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for HairColor {
    type Err = RegistryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "black" => Ok(HairColor::Black),
            "brown" => Ok(HairColor::Brown),
            "redhead" => Ok(HairColor::Redhead),
            "blond" => Ok(HairColor::Blond),
            _ => Err(RegistryError::InvalidValue {
                field: "hair",
                value: s.to_string(),
            }),
        }
    }
}

// =============================================================================
// SkinColor
// =============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SkinColor {
    White,
    Brown,
    Black,
    Yellow,
}

impl SkinColor {
    pub const ALL: [SkinColor; 4] = [
        SkinColor::White,
        SkinColor::Brown,
        SkinColor::Black,
        SkinColor::Yellow,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            SkinColor::White => "white",
            SkinColor::Brown => "brown",
            SkinColor::Black => "black",
            SkinColor::Yellow => "yellow",
        }
    }

    pub fn label(&self, lang: Lang) -> &'static str {
        match (self, lang) {
            (SkinColor::White, Lang::Pt) => "Branca",
            (SkinColor::White, Lang::En) => "White",
            (SkinColor::Brown, Lang::Pt) => "Parda",
            (SkinColor::Brown, Lang::En) => "Brown",
            (SkinColor::Black, Lang::Pt) => "Negra",
            (SkinColor::Black, Lang::En) => "Black",
            (SkinColor::Yellow, Lang::Pt) => "Amarela",
            (SkinColor::Yellow, Lang::En) => "Yellow",
        }
    }
}

impl fmt::Display for SkinColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SkinColor {
    type Err = RegistryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "white" => Ok(SkinColor::White),
            "brown" => Ok(SkinColor::Brown),
            "black" => Ok(SkinColor::Black),
            "yellow" => Ok(SkinColor::Yellow),
            _ => Err(RegistryError::InvalidValue {
                field: "skin",
                value: s.to_string(),
            }),
        }
    }
}

// =============================================================================
// CaseStatus
// =============================================================================

/// Current status of a missing-person case
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CaseStatus {
    Disappeared,
    Found,
}

impl CaseStatus {
    pub const ALL: [CaseStatus; 2] = [CaseStatus::Disappeared, CaseStatus::Found];

    pub fn as_str(&self) -> &'static str {
        match self {
            CaseStatus::Disappeared => "disappeared",
            CaseStatus::Found => "found",
        }
    }

    pub fn label(&self, lang: Lang) -> &'static str {
        match (self, lang) {
            (CaseStatus::Disappeared, Lang::Pt) => "Desaparecido",
            (CaseStatus::Disappeared, Lang::En) => "Missing",
            (CaseStatus::Found, Lang::Pt) => "Encontrado",
            (CaseStatus::Found, Lang::En) => "Found",
        }
    }
}

impl fmt::Display for CaseStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CaseStatus {
    type Err = RegistryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "disappeared" => Ok(CaseStatus::Disappeared),
            "found" => Ok(CaseStatus::Found),
            _ => Err(RegistryError::InvalidValue {
                field: "status",
                value: s.to_string(),
            }),
        }
    }
}
