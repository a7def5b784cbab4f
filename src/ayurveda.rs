use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

/// Ayurvedic body type. Declaration order is the canonical display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Dosha {
    Vata,
    Pitta,
    Kapha,
}

impl Dosha {
    pub const ALL: [Dosha; 3] = [Dosha::Vata, Dosha::Pitta, Dosha::Kapha];

    pub fn as_str(&self) -> &'static str {
        match self {
            Dosha::Vata => "Vata",
            Dosha::Pitta => "Pitta",
            Dosha::Kapha => "Kapha",
        }
    }

    /// Form stored in `users.prakriti`.
    pub fn db_value(&self) -> &'static str {
        match self {
            Dosha::Vata => "VATA",
            Dosha::Pitta => "PITTA",
            Dosha::Kapha => "KAPHA",
        }
    }
}

impl fmt::Display for Dosha {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown dosha {0:?}")]
pub struct UnknownDosha(pub String);

impl FromStr for Dosha {
    type Err = UnknownDosha;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "vata" => Ok(Dosha::Vata),
            "pitta" => Ok(Dosha::Pitta),
            "kapha" => Ok(Dosha::Kapha),
            _ => Err(UnknownDosha(s.to_string())),
        }
    }
}

/// Three-way food quality used by the meal scanner and the food log.
/// Deserializes through `FromStr`, so JSON accepts the same spellings as the form fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String")]
pub enum FoodQuality {
    Satvik,
    Rajasic,
    Tamasic,
}

impl FoodQuality {
    pub fn as_str(&self) -> &'static str {
        match self {
            FoodQuality::Satvik => "Satvik",
            FoodQuality::Rajasic => "Rajasic",
            FoodQuality::Tamasic => "Tamasic",
        }
    }
}

impl fmt::Display for FoodQuality {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FoodQuality {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "satvik" | "sattvic" => Ok(FoodQuality::Satvik),
            "rajasic" => Ok(FoodQuality::Rajasic),
            "tamasic" => Ok(FoodQuality::Tamasic),
            _ => Err(format!("unknown food category {s:?}")),
        }
    }
}

impl TryFrom<String> for FoodQuality {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}
