//! Application-wide constants and magic numbers
//!
//! This module centralizes all hardcoded values to improve maintainability
//! and make the service easier to tune.

use std::time::Duration;

/// Completion service constants
pub mod llm {
    use super::*;

    pub const DEFAULT_BASE_URL: &str = "https://api.openai.com/v1";
    pub const DEFAULT_MODEL: &str = "gpt-4o-mini";
    pub const DEFAULT_MAX_TOKENS: u32 = 280;
    pub const DEFAULT_TEMPERATURE: f32 = 0.9;

    /// Per-call timeout for either protocol
    pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

    pub const RESPONSES_PATH: &str = "/responses";
    pub const CHAT_COMPLETIONS_PATH: &str = "/chat/completions";
}

/// Discord webhook constants
pub mod discord {
    use super::*;

    /// Per-attempt timeout
    pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(15);

    /// Hard cap on retries after a 429
    pub const MAX_RATE_LIMIT_RETRIES: u32 = 3;

    /// Wait used when neither the header nor the body carries a hint
    pub const DEFAULT_RETRY_AFTER_SECS: f64 = 1.0;

    /// Longest single wait honored from a rate-limit hint
    pub const MAX_RETRY_AFTER_SECS: f64 = 60.0;

    pub const RATE_LIMIT_STATUS: u16 = 429;

    /// Value shipped in sample configs; never a real destination
    pub const PLACEHOLDER_WEBHOOK: &str = "https://discord.com/api/webhooks/...";

    pub const EMBED_DESCRIPTION_LIMIT: usize = 4096;
    pub const EMBED_FIELD_VALUE_LIMIT: usize = 1024;
}

/// Persona names and colors
pub mod personas {
    pub const MEL: &str = "Mel";
    pub const MCSHAY: &str = "McShay";
    pub const DEFAULT: &str = "Default";

    pub const MEL_COLOR: u32 = 0xFF6B35;
    pub const MCSHAY_COLOR: u32 = 0x1E88E5;
    pub const DEFAULT_COLOR: u32 = 0x7B68EE;
}

/// Decision-layer tuning
pub mod voice {
    pub const DEFAULT_RESPOND_PROBABILITY: f64 = 0.4;

    /// |delta| at which persona choice stops being a coin flip
    pub const DEFAULT_PERSONA_SWING: f64 = 5.0;

    /// Deltas below this are "within noise" and get the persona's own color
    pub const SIGNATURE_COLOR_BAND: f64 = 1.0;

    pub const DEFAULT_PRIORITY_PLAYER: &str = "Shedeur Sanders";
    pub const DEFAULT_TONE: &str = "roast";
}

/// Logging event names for structured logging
pub mod events {
    pub const PICK_RECEIVED: &str = "pick_received";
    pub const PICK_SKIPPED: &str = "pick_skipped";
    pub const CANNED_REACTION: &str = "canned_reaction";
    pub const PROTOCOL_FALLBACK: &str = "protocol_fallback";
    pub const RATE_LIMITED: &str = "rate_limited";
    pub const WEBHOOK_FALLBACK: &str = "webhook_fallback";
    pub const PICK_POSTED: &str = "pick_posted";
}
