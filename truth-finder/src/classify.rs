//! Score classification for report presentation
//!
//! Maps the numeric scores returned by the analysis service to display tiers.
//! The two axes read in opposite directions: a high trust score is good, a
//! high sensationalism score is bad. Thresholds are applied to the raw value,
//! so out-of-range scores still land in the outermost tier instead of being
//! clamped away.

use serde::Serialize;

/// Tier on the trust axis (higher score is better)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TrustTier {
    Good,
    Fair,
    Poor,
    Bad,
}

/// Tier on the sensationalism axis (higher score is worse)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SensationalismTier {
    Low,
    Medium,
    High,
    Severe,
}

/// Severity colour shared by both axes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Green,
    Yellow,
    Orange,
    Red,
}

/// Icon state shown next to the trust score
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TrustIcon {
    Confirmed,
    Cautionary,
    Warning,
}

/// Classify a trust score
pub fn trust_tier(score: f64) -> TrustTier {
    if score >= 8.0 {
        TrustTier::Good
    } else if score >= 6.0 {
        TrustTier::Fair
    } else if score >= 4.0 {
        TrustTier::Poor
    } else {
        TrustTier::Bad
    }
}

/// Classify a sensationalism score
pub fn sensationalism_tier(score: f64) -> SensationalismTier {
    if score <= 3.0 {
        SensationalismTier::Low
    } else if score <= 6.0 {
        SensationalismTier::Medium
    } else if score <= 8.0 {
        SensationalismTier::High
    } else {
        SensationalismTier::Severe
    }
}

/// Width of a score bar as a percentage. Not clamped to [0, 100].
pub fn score_width_percent(score: f64) -> f64 {
    score * 10.0
}

impl TrustTier {
    pub fn severity(self) -> Severity {
        match self {
            Self::Good => Severity::Green,
            Self::Fair => Severity::Yellow,
            Self::Poor => Severity::Orange,
            Self::Bad => Severity::Red,
        }
    }

    pub fn icon(self) -> TrustIcon {
        match self {
            Self::Good => TrustIcon::Confirmed,
            Self::Fair => TrustIcon::Cautionary,
            Self::Poor | Self::Bad => TrustIcon::Warning,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Good => "Good",
            Self::Fair => "Fair",
            Self::Poor => "Poor",
            Self::Bad => "Bad",
        }
    }
}

impl SensationalismTier {
    pub fn severity(self) -> Severity {
        match self {
            Self::Low => Severity::Green,
            Self::Medium => Severity::Yellow,
            Self::High => Severity::Orange,
            Self::Severe => Severity::Red,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Low => "Low",
            Self::Medium => "Medium",
            Self::High => "High",
            Self::Severe => "Severe",
        }
    }
}

impl TrustIcon {
    /// Terminal glyph for the icon
    pub fn glyph(self) -> &'static str {
        match self {
            Self::Confirmed => "✅",
            Self::Cautionary => "👁️ ",
            Self::Warning => "⚠️ ",
        }
    }
}
