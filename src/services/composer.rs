//! Prompt assembly, grade/verdict parsing, and the Discord embed.

use chrono::Utc;
use regex::Regex;
use std::sync::LazyLock;

use crate::constants::{discord, voice as voice_consts};
use crate::discord::embed::{truncate_chars, Embed, EmbedField, EmbedFooter, WebhookPayload};
use crate::events::DraftPickEvent;
use crate::personas::{persona_for, Persona};
use crate::services::value::describe_delta;
use crate::services::voice::{tone_style_line, ToneBucket};

/// Closing token the model is told to emit. `extract_grade_and_verdict`
/// parses it back out.
pub const GRADE_CONTRACT: &str = "Grade: <A-F><+/-|none> | VERDICT: <3-6 UPPERCASE WORDS>";

static GRADE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)\bgrade\s*:\s*([A-F](?:[+-]|\b))(?:\s*\|)?").expect("valid regex")
});

static VERDICT_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)(?:\|\s*)?\bverdict\s*:\s*([A-Z][A-Z'\-]*(?: +[A-Z][A-Z'\-]*)*)[.!]*")
        .expect("valid regex")
});

/// The two prompts handed to the completion service
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Instructions {
    pub system: String,
    pub user: String,
}

pub fn build_instructions(
    persona: &dyn Persona,
    tone: &str,
    bucket: ToneBucket,
    event: &DraftPickEvent,
    delta: f64,
) -> Instructions {
    let system = format!(
        "{voice}\n\
         {style}\n\
         {intensity}\n\
         League context: {league}.\n\
         Rules:\n\
         - End with a quick pick grade (A-F, optional +/-) and a 3-6 word verdict tag in ALL CAPS, exactly in this form: {contract}\n\
         - Example ending: Grade: B | VERDICT: VALUE WITH RISK\n\
         - Mention ADP context briefly if relevant.",
        voice = persona.voice(),
        style = tone_style_line(tone),
        intensity = bucket.instruction(),
        league = event.league_type,
        contract = GRADE_CONTRACT,
    );

    let user = format!(
        "Draft pick context:\n\
         - Pick #: {pick}\n\
         - Player: {player}\n\
         - Position: {position}\n\
         - Selecting Team: {team}\n\
         - Player ADP: {adp}\n\
         - Pick vs ADP: {delta}\n\n\
         Write the analyst blurb now.",
        pick = event.pick_number,
        player = event.player,
        position = event.position,
        team = event.team,
        adp = event.adp,
        delta = describe_delta(delta),
    );

    Instructions { system, user }
}

/// Grade and verdict pulled out of a blurb, plus what's left to display
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Assessment {
    pub grade: Option<String>,
    pub verdict: Option<String>,
    pub body: String,
}

/// Split the grade/verdict tail off generated text. Markers match in any
/// case and come back uppercased. A verdict runs to the end of its line or
/// the first sentence terminator. Missing markers just come back as `None`;
/// the body is then the input, trimmed.
pub fn extract_grade_and_verdict(text: &str) -> Assessment {
    let grade = GRADE_RE
        .captures(text)
        .and_then(|c| c.get(1))
        .map(|m| m.as_str().to_uppercase());
    let verdict = VERDICT_RE
        .captures(text)
        .and_then(|c| c.get(1))
        .map(|m| m.as_str().trim().to_uppercase());

    let mut body = text.to_string();
    if grade.is_some() {
        body = GRADE_RE.replace_all(&body, "").into_owned();
    }
    if verdict.is_some() {
        body = VERDICT_RE.replace_all(&body, "").into_owned();
    }

    Assessment {
        grade,
        verdict,
        body: body.trim().to_string(),
    }
}

/// Delta tier color, or the persona's own color when the pick is on ADP.
pub fn embed_color(delta: f64, persona: &dyn Persona) -> u32 {
    if delta.abs() < voice_consts::SIGNATURE_COLOR_BAND {
        persona.signature_color()
    } else {
        ToneBucket::from_delta(delta).color()
    }
}

pub fn build_display_payload(
    event: &DraftPickEvent,
    delta: f64,
    assessment: &Assessment,
    persona_name: &str,
    tone: &str,
) -> WebhookPayload {
    let persona = persona_for(persona_name);

    let mut fields = vec![EmbedField {
        name: "📊 Pick Info".to_string(),
        value: truncate_chars(
            &format!(
                "**Pick #{}** • **Team:** {}\n**ADP:** {} • **Pick vs ADP:** {}\n**Position:** {} • **League:** {}",
                event.pick_number,
                event.team,
                event.adp,
                describe_delta(delta),
                event.position,
                event.league_type.title(),
            ),
            discord::EMBED_FIELD_VALUE_LIMIT,
        ),
        inline: false,
    }];

    let assessment_lines: Vec<String> = [
        assessment.grade.as_ref().map(|g| format!("**Grade:** {}", g)),
        assessment.verdict.as_ref().map(|v| format!("**Verdict:** {}", v)),
    ]
    .into_iter()
    .flatten()
    .collect();

    if !assessment_lines.is_empty() {
        fields.push(EmbedField {
            name: "📈 Final Assessment".to_string(),
            value: assessment_lines.join("\n"),
            inline: true,
        });
    }

    let embed = Embed {
        title: Some(format!("🏈 Draft Analysis: {}", event.player)),
        description: truncate_chars(&assessment.body, discord::EMBED_DESCRIPTION_LIMIT),
        color: embed_color(delta, persona),
        fields,
        footer: Some(EmbedFooter {
            text: format!("Analysis by {} • {} tone", persona_name, title_case(tone)),
        }),
        timestamp: Some(Utc::now().to_rfc3339()),
    };

    WebhookPayload {
        embeds: vec![embed],
    }
}

fn title_case(s: &str) -> String {
    s.split_whitespace()
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => {
                    first.to_uppercase().collect::<String>() + &chars.as_str().to_lowercase()
                }
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}
