use serde::Deserialize;
use std::collections::HashMap;
use std::fs;
use tracing::warn;
use url::Url;

use crate::constants::{discord, llm, personas, voice};
use crate::error::{ConfigError, ServiceError};

#[derive(Clone, Debug, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub bind_addr: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_addr: "0.0.0.0:3000".to_string(),
        }
    }
}

#[derive(Clone, Debug, Deserialize)]
#[serde(default)]
pub struct LlmConfig {
    pub api_key: Option<String>,
    pub base_url: String,
    pub model: String,
    pub max_tokens: u32,
    pub temperature: f32,
}

impl Default for LlmConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            base_url: llm::DEFAULT_BASE_URL.to_string(),
            model: llm::DEFAULT_MODEL.to_string(),
            max_tokens: llm::DEFAULT_MAX_TOKENS,
            temperature: llm::DEFAULT_TEMPERATURE,
        }
    }
}

#[derive(Clone, Debug, Default, Deserialize)]
#[serde(default)]
pub struct WebhookConfig {
    /// Used when a persona has no usable webhook of its own
    pub default: Option<String>,
    pub personas: HashMap<String, String>,
}

/// How the service decides whether to speak
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ResponseMode {
    /// Every pick gets a generated blurb from the requested persona
    Always,
    /// QB alerts, random eligibility, canned reactions
    #[default]
    Probabilistic,
}

#[derive(Clone, Debug, Deserialize)]
#[serde(default)]
pub struct VoiceConfig {
    pub mode: ResponseMode,
    pub default_persona: String,
    pub respond_probability: f64,
    pub persona_swing: f64,
    pub high_energy_persona: String,
    pub analytic_persona: String,
    /// Personas eligible for the uniform draw on middling picks
    pub rotation: Vec<String>,
    /// The QB the meltdown catalogue is about
    pub priority_player: String,
}

impl Default for VoiceConfig {
    fn default() -> Self {
        Self {
            mode: ResponseMode::default(),
            default_persona: personas::MEL.to_string(),
            respond_probability: voice::DEFAULT_RESPOND_PROBABILITY,
            persona_swing: voice::DEFAULT_PERSONA_SWING,
            high_energy_persona: personas::MEL.to_string(),
            analytic_persona: personas::MCSHAY.to_string(),
            rotation: vec![personas::MEL.to_string(), personas::MCSHAY.to_string()],
            priority_player: voice::DEFAULT_PRIORITY_PLAYER.to_string(),
        }
    }
}

#[derive(Clone, Debug, Default, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub server: ServerConfig,
    pub llm: LlmConfig,
    pub webhooks: WebhookConfig,
    pub voice: VoiceConfig,
}

/// Where a pick for a given persona gets posted
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Destination {
    pub url: String,
    /// True when the persona had no webhook and the default was used
    pub fell_back: bool,
}

impl AppConfig {
    /// Load `config.yaml` (or `$ROAST_CONFIG`) and apply env overrides.
    /// A missing file is fine; everything has a default except the API key.
    pub fn load() -> Result<Self, ConfigError> {
        let config_path =
            std::env::var("ROAST_CONFIG").unwrap_or_else(|_| "config.yaml".to_string());

        let mut config = match fs::read_to_string(&config_path) {
            Ok(content) => Self::from_yaml_str(&content)?,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                warn!("⚠️ [CONFIG] {} not found, using defaults + environment", config_path);
                Self::default()
            }
            Err(source) => {
                return Err(ConfigError::Read {
                    path: config_path,
                    source,
                })
            }
        };

        config.apply_env(|key| std::env::var(key).ok())?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_yaml_str(content: &str) -> Result<Self, ConfigError> {
        // Strip BOM if present
        let content = content.strip_prefix('\u{feff}').unwrap_or(content);
        if content.trim().is_empty() {
            return Ok(Self::default());
        }
        Ok(serde_yaml::from_str(content)?)
    }

    /// Overlay environment variables. `lookup` is injectable so tests don't
    /// have to touch the process environment.
    pub fn apply_env<F>(&mut self, lookup: F) -> Result<(), ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        if let Some(v) = get("OPENAI_API_KEY") {
            self.llm.api_key = Some(v);
        }
        if let Some(v) = get("OPENAI_BASE_URL") {
            self.llm.base_url = v;
        }
        if let Some(v) = get("OPENAI_MODEL") {
            self.llm.model = v;
        }
        if let Some(v) = get("MAX_TOKENS") {
            self.llm.max_tokens = v.trim().parse().map_err(|_| ConfigError::Invalid {
                name: "MAX_TOKENS",
                reason: format!("'{}' is not a positive integer", v),
            })?;
        }
        if let Some(v) = get("BIND_ADDR") {
            self.server.bind_addr = v;
        }
        if let Some(v) = get("DISCORD_WEBHOOK_DEFAULT") {
            self.webhooks.default = Some(v);
        }
        if let Some(v) = get("DISCORD_WEBHOOK_MEL") {
            self.webhooks.personas.insert(personas::MEL.to_string(), v);
        }
        if let Some(v) = get("DISCORD_WEBHOOK_MCSHAY") {
            self.webhooks.personas.insert(personas::MCSHAY.to_string(), v);
        }
        Ok(())
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.llm.api_key.as_deref().map_or(true, |k| k.trim().is_empty()) {
            return Err(ConfigError::Missing {
                name: "OPENAI_API_KEY",
            });
        }
        if self.llm.max_tokens == 0 {
            return Err(ConfigError::Invalid {
                name: "llm.max_tokens",
                reason: "must be greater than zero".to_string(),
            });
        }
        let p = self.voice.respond_probability;
        if !(0.0..=1.0).contains(&p) {
            return Err(ConfigError::Invalid {
                name: "voice.respond_probability",
                reason: format!("{} is outside [0, 1]", p),
            });
        }
        if self.voice.rotation.is_empty() {
            return Err(ConfigError::Invalid {
                name: "voice.rotation",
                reason: "needs at least one persona".to_string(),
            });
        }
        if !self.voice.persona_swing.is_finite() || self.voice.persona_swing < 0.0 {
            return Err(ConfigError::Invalid {
                name: "voice.persona_swing",
                reason: format!("{} must be a non-negative number", self.voice.persona_swing),
            });
        }
        Ok(())
    }

    /// Resolve the webhook for `persona`, degrading to the default webhook
    /// when the persona's entry is missing, a placeholder, or not a URL.
    pub fn resolve_destination(&self, persona: &str) -> Result<Destination, ServiceError> {
        let own = self
            .webhooks
            .personas
            .iter()
            .find(|(name, _)| name.eq_ignore_ascii_case(persona))
            .map(|(_, url)| url.as_str())
            .filter(|url| is_usable_webhook(url));

        if let Some(url) = own {
            return Ok(Destination {
                url: url.to_string(),
                fell_back: false,
            });
        }

        match self.webhooks.default.as_deref().filter(|url| is_usable_webhook(url)) {
            Some(url) => Ok(Destination {
                url: url.to_string(),
                fell_back: true,
            }),
            None => Err(no_destination()),
        }
    }

    /// Fails only when neither the default nor any persona webhook is usable.
    pub fn ensure_any_destination(&self) -> Result<(), ServiceError> {
        let usable = self
            .webhooks
            .default
            .iter()
            .chain(self.webhooks.personas.values())
            .any(|url| is_usable_webhook(url));
        if usable {
            Ok(())
        } else {
            Err(no_destination())
        }
    }
}

fn no_destination() -> ServiceError {
    ServiceError::Config("No webhook configured for this persona/default.".to_string())
}

/// A webhook is usable when it parses as http(s) and isn't the sample placeholder
pub fn is_usable_webhook(raw: &str) -> bool {
    let raw = raw.trim();
    if raw.is_empty() || raw == discord::PLACEHOLDER_WEBHOOK || raw.ends_with("/...") {
        return false;
    }
    match Url::parse(raw) {
        Ok(url) => matches!(url.scheme(), "http" | "https") && url.host().is_some(),
        Err(_) => false,
    }
}
