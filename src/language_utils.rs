use anyhow::{Result, anyhow};
use serde::{Deserialize, Serialize};

/// Language utilities for translation targets
///
/// This module provides the fixed table of language codes the translator
/// accepts, together with the human-readable names substituted into prompt
/// templates. The table is static and immutable at runtime.
/// Target or source language of a translation request
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Language {
    #[serde(rename = "CHS")]
    ChineseSimplified,
    #[serde(rename = "CHT")]
    ChineseTraditional,
    #[serde(rename = "CSY")]
    Czech,
    #[serde(rename = "NLD")]
    Dutch,
    #[serde(rename = "ENG")]
    English,
    #[serde(rename = "FRA")]
    French,
    #[serde(rename = "DEU")]
    German,
    #[serde(rename = "HUN")]
    Hungarian,
    #[serde(rename = "ITA")]
    Italian,
    #[serde(rename = "JPN")]
    Japanese,
    #[serde(rename = "KOR")]
    Korean,
    #[serde(rename = "PLK")]
    Polish,
    #[serde(rename = "PTB")]
    Portuguese,
    #[serde(rename = "ROM")]
    Romanian,
    #[serde(rename = "RUS")]
    Russian,
    #[serde(rename = "ESP")]
    Spanish,
    #[serde(rename = "TRK")]
    Turkish,
    #[serde(rename = "UKR")]
    Ukrainian,
    #[serde(rename = "VIN")]
    Vietnamese,
    #[serde(rename = "CNR")]
    Montenegrin,
    #[serde(rename = "SRP")]
    Serbian,
    #[serde(rename = "HRV")]
    Croatian,
    #[serde(rename = "ARA")]
    Arabic,
    #[serde(rename = "THA")]
    Thai,
    #[serde(rename = "IND")]
    Indonesian,
}

impl Language {
    /// All supported languages
    pub const ALL: [Language; 25] = [
        Self::ChineseSimplified,
        Self::ChineseTraditional,
        Self::Czech,
        Self::Dutch,
        Self::English,
        Self::French,
        Self::German,
        Self::Hungarian,
        Self::Italian,
        Self::Japanese,
        Self::Korean,
        Self::Polish,
        Self::Portuguese,
        Self::Romanian,
        Self::Russian,
        Self::Spanish,
        Self::Turkish,
        Self::Ukrainian,
        Self::Vietnamese,
        Self::Montenegrin,
        Self::Serbian,
        Self::Croatian,
        Self::Arabic,
        Self::Thai,
        Self::Indonesian,
    ];

    /// Short code used in configuration and pipeline interfaces
    pub fn code(&self) -> &'static str {
        match self {
            Self::ChineseSimplified => "CHS",
            Self::ChineseTraditional => "CHT",
            Self::Czech => "CSY",
            Self::Dutch => "NLD",
            Self::English => "ENG",
            Self::French => "FRA",
            Self::German => "DEU",
            Self::Hungarian => "HUN",
            Self::Italian => "ITA",
            Self::Japanese => "JPN",
            Self::Korean => "KOR",
            Self::Polish => "PLK",
            Self::Portuguese => "PTB",
            Self::Romanian => "ROM",
            Self::Russian => "RUS",
            Self::Spanish => "ESP",
            Self::Turkish => "TRK",
            Self::Ukrainian => "UKR",
            Self::Vietnamese => "VIN",
            Self::Montenegrin => "CNR",
            Self::Serbian => "SRP",
            Self::Croatian => "HRV",
            Self::Arabic => "ARA",
            Self::Thai => "THA",
            Self::Indonesian => "IND",
        }
    }

    /// Human-readable name substituted into prompt templates
    pub fn name(&self) -> &'static str {
        match self {
            Self::ChineseSimplified => "Simplified Chinese",
            Self::ChineseTraditional => "Traditional Chinese",
            Self::Czech => "Czech",
            Self::Dutch => "Dutch",
            Self::English => "English",
            Self::French => "French",
            Self::German => "German",
            Self::Hungarian => "Hungarian",
            Self::Italian => "Italian",
            Self::Japanese => "Japanese",
            Self::Korean => "Korean",
            Self::Polish => "Polish",
            Self::Portuguese => "Portuguese",
            Self::Romanian => "Romanian",
            Self::Russian => "Russian",
            Self::Spanish => "Spanish",
            Self::Turkish => "Turkish",
            Self::Ukrainian => "Ukrainian",
            Self::Vietnamese => "Vietnamese",
            Self::Montenegrin => "Montenegrin",
            Self::Serbian => "Serbian",
            Self::Croatian => "Croatian",
            Self::Arabic => "Arabic",
            Self::Thai => "Thai",
            Self::Indonesian => "Indonesian",
        }
    }
}

impl std::fmt::Display for Language {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.code())
    }
}

impl std::str::FromStr for Language {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        let code = s.trim().to_uppercase();
        Self::ALL
            .iter()
            .find(|lang| lang.code() == code)
            .copied()
            .ok_or_else(|| anyhow!("Invalid language code: {}", s))
    }
}
