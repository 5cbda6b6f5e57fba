//! One draft pick, start to finish: decide, write (or grab a canned line),
//! format, post.

use std::sync::Arc;
use tracing::{info, warn};

use crate::config::{AppConfig, Destination};
use crate::constants::{events, personas};
use crate::discord::Deliverer;
use crate::error::{DeliveryError, ServiceError};
use crate::events::{DraftPickEvent, PickResponse};
use crate::llm::Generator;
use crate::personas::{is_known, persona_for};
use crate::services::composer::{build_display_payload, build_instructions, extract_grade_and_verdict};
use crate::services::value::compute_delta;
use crate::services::voice::{decide, Draws, ToneBucket};

pub struct PickPipeline {
    config: Arc<AppConfig>,
    generator: Arc<dyn Generator>,
    deliverer: Arc<dyn Deliverer>,
}

impl PickPipeline {
    pub fn new(
        config: Arc<AppConfig>,
        generator: Arc<dyn Generator>,
        deliverer: Arc<dyn Deliverer>,
    ) -> Self {
        Self {
            config,
            generator,
            deliverer,
        }
    }

    /// Handle a pick with fresh random draws.
    pub async fn handle(&self, event: &DraftPickEvent) -> Result<PickResponse, ServiceError> {
        let draws = Draws::sample(&mut rand::thread_rng());
        self.handle_with(event, draws).await
    }

    /// Handle a pick with the given draws. Deterministic apart from the
    /// upstream calls.
    pub async fn handle_with(
        &self,
        event: &DraftPickEvent,
        draws: Draws,
    ) -> Result<PickResponse, ServiceError> {
        self.config.ensure_any_destination()?;

        let delta = compute_delta(event.pick_number, event.adp);
        info!(
            event = events::PICK_RECEIVED,
            "🏈 [PIPELINE] Pick #{} {} ({}) by {}: ADP {}, delta {:+.1}",
            event.pick_number,
            event.player,
            event.position,
            event.team,
            event.adp,
            delta
        );

        let decision = decide(event, delta, &self.config.voice, &draws);
        let persona = match decision.persona.clone() {
            Some(p) if decision.should_respond => p,
            _ => {
                info!(event = events::PICK_SKIPPED, "🤫 [PIPELINE] Sitting this pick out");
                return Ok(PickResponse::skipped("not_selected"));
            }
        };

        let destination = self.destination_for(&persona)?;
        let tone = event.tone_or_default();
        let (text, reason) = match &decision.canned {
            Some(canned) => {
                info!(
                    event = events::CANNED_REACTION,
                    catalogue = canned.catalogue.as_str(),
                    "🎤 [PIPELINE] {} goes with a canned {} line",
                    persona,
                    canned.catalogue.as_str()
                );
                (
                    canned.text.to_string(),
                    Some(format!("canned_{}", canned.catalogue.as_str())),
                )
            }
            None => {
                if !is_known(&persona) {
                    info!("🎙️ [PIPELINE] No voice for {}, using the generic analyst", persona);
                }
                let bucket = ToneBucket::from_delta(delta);
                let instructions =
                    build_instructions(persona_for(&persona), tone, bucket, event, delta);
                info!(
                    "🤖 [PIPELINE] Asking {} for a {} take",
                    persona,
                    bucket.label()
                );
                let text = self
                    .generator
                    .generate(&instructions.system, &instructions.user)
                    .await?;
                (text, None)
            }
        };

        let assessment = extract_grade_and_verdict(&text);
        let payload = build_display_payload(event, delta, &assessment, &persona, tone);

        let response = self.deliverer.deliver(&destination.url, &payload).await?;
        if !response.is_success() {
            return Err(DeliveryError::Rejected {
                status: response.status,
                body: response.body,
            }
            .into());
        }

        info!(
            event = events::PICK_POSTED,
            "📨 [PIPELINE] {} posted on pick #{}",
            persona,
            event.pick_number
        );
        Ok(PickResponse::posted(persona, reason))
    }

    fn destination_for(&self, persona: &str) -> Result<Destination, ServiceError> {
        let destination = self.config.resolve_destination(persona)?;
        if destination.fell_back && !persona.eq_ignore_ascii_case(personas::DEFAULT) {
            warn!(
                event = events::WEBHOOK_FALLBACK,
                "⚠️ [PIPELINE] Using Default webhook for {} (persona webhook incomplete)",
                persona
            );
        }
        Ok(destination)
    }
}
