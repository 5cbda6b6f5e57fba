//! Tone intensity and the decision layer: who speaks, and whether the
//! language model gets called at all.
//!
//! Everything here is pure. Randomness comes in through [`Draws`] so the
//! same inputs always produce the same decision.

use rand::Rng;

use crate::config::{ResponseMode, VoiceConfig};
use crate::events::DraftPickEvent;
use crate::services::reactions::{draw_index, Catalogue};

/// Tone intensity, ordered from harshest to happiest
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ToneBucket {
    SavageRoast,
    Roast,
    Critical,
    Praiseworthy,
    Enthusiastic,
    Celebration,
}

impl ToneBucket {
    pub const ALL: [ToneBucket; 6] = [
        ToneBucket::SavageRoast,
        ToneBucket::Roast,
        ToneBucket::Critical,
        ToneBucket::Praiseworthy,
        ToneBucket::Enthusiastic,
        ToneBucket::Celebration,
    ];

    /// Half-open buckets: (-inf,-5) [-5,-2) [-2,0) [0,3) [3,8) [8,inf)
    pub fn from_delta(delta: f64) -> Self {
        if delta.is_nan() {
            ToneBucket::Critical
        } else if delta < -5.0 {
            ToneBucket::SavageRoast
        } else if delta < -2.0 {
            ToneBucket::Roast
        } else if delta < 0.0 {
            ToneBucket::Critical
        } else if delta < 3.0 {
            ToneBucket::Praiseworthy
        } else if delta < 8.0 {
            ToneBucket::Enthusiastic
        } else {
            ToneBucket::Celebration
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ToneBucket::SavageRoast => "savage roast",
            ToneBucket::Roast => "roast",
            ToneBucket::Critical => "critical",
            ToneBucket::Praiseworthy => "praiseworthy",
            ToneBucket::Enthusiastic => "enthusiastic",
            ToneBucket::Celebration => "celebration",
        }
    }

    pub fn instruction(&self) -> &'static str {
        match self {
            ToneBucket::SavageRoast => {
                "Intensity: SAVAGE. This is a massive reach. Tear the pick apart, no mercy."
            }
            ToneBucket::Roast => "Intensity: roast. Clear reach; mock it, but keep it playful.",
            ToneBucket::Critical => {
                "Intensity: critical. Slightly early; raise an eyebrow and name the concern."
            }
            ToneBucket::Praiseworthy => {
                "Intensity: praiseworthy. Fair price; give credit with a small caveat."
            }
            ToneBucket::Enthusiastic => {
                "Intensity: enthusiastic. Real value here; hype the patience."
            }
            ToneBucket::Celebration => {
                "Intensity: CELEBRATION. Highway robbery; treat it like the steal of the draft."
            }
        }
    }

    /// Embed color tier
    pub fn color(&self) -> u32 {
        match self {
            ToneBucket::SavageRoast => 0x8B0000,
            ToneBucket::Roast => 0xE74C3C,
            ToneBucket::Critical => 0xE67E22,
            ToneBucket::Praiseworthy => 0x9ACD32,
            ToneBucket::Enthusiastic => 0x2ECC71,
            ToneBucket::Celebration => 0xF1C40F,
        }
    }
}

/// Style line for the caller's requested tone
pub fn tone_style_line(tone: &str) -> &'static str {
    match tone.trim().to_ascii_lowercase().as_str() {
        "roast" => "Tone: savagely roast, no holds barred.",
        "serious" => "Tone: serious, concise scouting evaluation.",
        "balanced" => "Tone: balanced - one praise, one concern, a final verdict.",
        _ => "Tone: comically roasty but light-hearted.",
    }
}

/// Uniform draws in [0, 1) consumed by one decision
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Draws {
    /// Eligibility check for non-QB picks
    pub respond: f64,
    /// Persona choice on middling picks
    pub persona: f64,
    /// Canned-reaction check
    pub reaction: f64,
    /// Which line from the catalogue
    pub pick: f64,
}

impl Draws {
    pub fn sample<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Self {
            respond: rng.gen(),
            persona: rng.gen(),
            reaction: rng.gen(),
            pick: rng.gen(),
        }
    }
}

/// Why the service is speaking
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Trigger {
    /// QB taken; high-energy persona forced
    Quarterback,
    /// Eligibility draw passed
    Drawn,
    /// Always-respond mode
    Always,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CannedReaction {
    pub catalogue: Catalogue,
    pub text: &'static str,
}

#[derive(Clone, Debug, PartialEq)]
pub struct ResponseDecision {
    pub should_respond: bool,
    pub persona: Option<String>,
    pub trigger: Option<Trigger>,
    pub canned: Option<CannedReaction>,
}

impl ResponseDecision {
    pub fn silent() -> Self {
        Self {
            should_respond: false,
            persona: None,
            trigger: None,
            canned: None,
        }
    }

    pub fn use_canned_reaction(&self) -> bool {
        self.canned.is_some()
    }
}

/// Full decision for one pick: eligibility, persona, then canned reaction.
pub fn decide(
    event: &DraftPickEvent,
    delta: f64,
    voice: &VoiceConfig,
    draws: &Draws,
) -> ResponseDecision {
    if voice.mode == ResponseMode::Always {
        let persona = event
            .persona
            .clone()
            .filter(|p| !p.trim().is_empty())
            .unwrap_or_else(|| voice.default_persona.clone());
        return ResponseDecision {
            should_respond: true,
            persona: Some(persona),
            trigger: Some(Trigger::Always),
            canned: None,
        };
    }

    let Some((persona, trigger)) = choose_responder(event, delta, voice, draws) else {
        return ResponseDecision::silent();
    };
    let canned = choose_reaction(event, delta, trigger, voice, draws);

    ResponseDecision {
        should_respond: true,
        persona: Some(persona),
        trigger: Some(trigger),
        canned,
    }
}

/// Eligibility and persona, in priority order. `None` means stay quiet.
pub fn choose_responder(
    event: &DraftPickEvent,
    delta: f64,
    voice: &VoiceConfig,
    draws: &Draws,
) -> Option<(String, Trigger)> {
    if event.is_quarterback() {
        return Some((voice.high_energy_persona.clone(), Trigger::Quarterback));
    }

    if draws.respond >= voice.respond_probability {
        return None;
    }

    let persona = if delta <= -voice.persona_swing {
        voice.high_energy_persona.clone()
    } else if delta >= voice.persona_swing {
        voice.analytic_persona.clone()
    } else if voice.rotation.is_empty() {
        voice.default_persona.clone()
    } else {
        voice.rotation[draw_index(draws.persona, voice.rotation.len())].clone()
    };

    Some((persona, Trigger::Drawn))
}

/// Canned line instead of a generated blurb, if one applies.
pub fn choose_reaction(
    event: &DraftPickEvent,
    delta: f64,
    trigger: Trigger,
    voice: &VoiceConfig,
    draws: &Draws,
) -> Option<CannedReaction> {
    if trigger == Trigger::Quarterback && !is_priority_player(&event.player, voice) {
        return Some(CannedReaction {
            catalogue: Catalogue::Meltdown,
            text: Catalogue::Meltdown.pick(draws.pick),
        });
    }

    if draws.reaction >= reaction_probability(delta) {
        return None;
    }

    let catalogue = if delta < 0.0 {
        Catalogue::Reach
    } else {
        Catalogue::Value
    };
    Some(CannedReaction {
        catalogue,
        text: catalogue.pick(draws.pick),
    })
}

/// Chance of a one-liner for a given delta. Big swings earn quick takes.
pub fn reaction_probability(delta: f64) -> f64 {
    if delta < -10.0 {
        0.40
    } else if delta < -5.0 {
        0.30
    } else if delta < -2.0 {
        0.20
    } else if delta >= 10.0 {
        0.25
    } else if delta >= 5.0 {
        0.15
    } else {
        0.0
    }
}

fn is_priority_player(player: &str, voice: &VoiceConfig) -> bool {
    let priority = voice.priority_player.trim();
    !priority.is_empty() && player.trim().eq_ignore_ascii_case(priority)
}
