use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::ServiceError;

/// League format the pick was made in
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum LeagueType {
    #[default]
    #[serde(rename = "redraft")]
    Redraft,
    #[serde(rename = "dynasty")]
    Dynasty,
    #[serde(rename = "best ball")]
    BestBall,
}

impl LeagueType {
    pub fn as_str(&self) -> &'static str {
        match self {
            LeagueType::Redraft => "redraft",
            LeagueType::Dynasty => "dynasty",
            LeagueType::BestBall => "best ball",
        }
    }

    /// Display form used in embeds ("Best Ball")
    pub fn title(&self) -> &'static str {
        match self {
            LeagueType::Redraft => "Redraft",
            LeagueType::Dynasty => "Dynasty",
            LeagueType::BestBall => "Best Ball",
        }
    }
}

impl fmt::Display for LeagueType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Incoming draft pick, one per webhook call
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DraftPickEvent {
    pub pick_number: u32,
    pub player: String,
    pub position: String,
    pub adp: f64,
    pub team: String,

    /// Requested commentator; config default when absent
    #[serde(default)]
    pub persona: Option<String>,

    /// "roast" | "serious" | "balanced"
    #[serde(default)]
    pub tone: Option<String>,

    #[serde(default)]
    pub league_type: LeagueType,
}

impl DraftPickEvent {
    /// Boundary checks that serde can't express
    pub fn validate(&self) -> Result<(), ServiceError> {
        if self.pick_number < 1 {
            return Err(ServiceError::InvalidEvent(
                "pickNumber must be >= 1".to_string(),
            ));
        }
        if self.player.trim().is_empty() {
            return Err(ServiceError::InvalidEvent(
                "player must not be empty".to_string(),
            ));
        }
        if !self.adp.is_finite() {
            return Err(ServiceError::InvalidEvent("adp must be a number".to_string()));
        }
        Ok(())
    }

    pub fn is_quarterback(&self) -> bool {
        self.position.trim().eq_ignore_ascii_case("QB")
    }

    pub fn tone_or_default(&self) -> &str {
        self.tone
            .as_deref()
            .filter(|t| !t.trim().is_empty())
            .unwrap_or(crate::constants::voice::DEFAULT_TONE)
    }
}

/// Success body returned to the webhook caller
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PickResponse {
    pub ok: bool,
    pub responded: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub persona: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub posted: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
}

impl PickResponse {
    pub fn skipped(reason: impl Into<String>) -> Self {
        Self {
            ok: true,
            responded: false,
            persona: None,
            posted: Some(false),
            reason: Some(reason.into()),
        }
    }

    pub fn posted(persona: impl Into<String>, reason: Option<String>) -> Self {
        Self {
            ok: true,
            responded: true,
            persona: Some(persona.into()),
            posted: Some(true),
            reason,
        }
    }
}
