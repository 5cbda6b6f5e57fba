//! Unit tests for tone bucketing and the response decision layer.

#[cfg(test)]
mod voice_tests {
    use crate::config::{ResponseMode, VoiceConfig};
    use crate::events::{DraftPickEvent, LeagueType};
    use crate::services::reactions::Catalogue;
    use crate::services::value::compute_delta;
    use crate::services::voice::*;

    fn event(position: &str, player: &str, pick_number: u32, adp: f64) -> DraftPickEvent {
        DraftPickEvent {
            pick_number,
            player: player.to_string(),
            position: position.to_string(),
            adp,
            team: "X".to_string(),
            persona: None,
            tone: None,
            league_type: LeagueType::Redraft,
        }
    }

    fn draws(respond: f64, persona: f64, reaction: f64, pick: f64) -> Draws {
        Draws {
            respond,
            persona,
            reaction,
            pick,
        }
    }

    // ============= Tone Bucket Tests =============

    #[test]
    fn test_bucket_boundaries() {
        let cases = [
            (-6.0, ToneBucket::SavageRoast),
            (-5.0, ToneBucket::Roast),
            (-3.0, ToneBucket::Roast),
            (-2.0, ToneBucket::Critical),
            (-1.0, ToneBucket::Critical),
            (0.0, ToneBucket::Praiseworthy),
            (1.0, ToneBucket::Praiseworthy),
            (3.0, ToneBucket::Enthusiastic),
            (4.0, ToneBucket::Enthusiastic),
            (8.0, ToneBucket::Celebration),
            (9.0, ToneBucket::Celebration),
        ];
        for (delta, expected) in cases {
            assert_eq!(ToneBucket::from_delta(delta), expected, "delta {}", delta);
        }
    }

    #[test]
    fn test_buckets_are_monotonic() {
        let mut last = ToneBucket::from_delta(-100.0);
        let mut delta = -100.0;
        while delta <= 100.0 {
            let bucket = ToneBucket::from_delta(delta);
            assert!(bucket >= last, "bucket went down at {}", delta);
            last = bucket;
            delta += 0.25;
        }
        assert_eq!(last, ToneBucket::Celebration);
    }

    #[test]
    fn test_every_bucket_has_distinct_instruction_and_color() {
        for (i, a) in ToneBucket::ALL.iter().enumerate() {
            for b in &ToneBucket::ALL[i + 1..] {
                assert_ne!(a.instruction(), b.instruction());
                assert_ne!(a.color(), b.color());
            }
        }
    }

    #[test]
    fn test_bucket_sign_matches_delta_convention() {
        // Drafted way before ADP: harsh. Way after: happy.
        assert!(ToneBucket::from_delta(compute_delta(5, 40.0)) < ToneBucket::Praiseworthy);
        assert!(ToneBucket::from_delta(compute_delta(40, 5.0)) > ToneBucket::Critical);
    }

    #[test]
    fn test_tone_style_line_fallback() {
        assert!(tone_style_line("SERIOUS").contains("scouting"));
        assert!(tone_style_line("balanced").contains("final verdict"));
        assert!(tone_style_line("unhinged").contains("light-hearted"));
    }

    // ============= Eligibility Tests =============

    #[test]
    fn test_qb_always_responds_with_high_energy_persona() {
        let voice = VoiceConfig::default();
        let qb = event("QB", "Jane Doe", 12, 30.0);
        let delta = compute_delta(qb.pick_number, qb.adp);

        for respond in [0.0, 0.39, 0.4, 0.99] {
            let d = decide(&qb, delta, &voice, &draws(respond, 0.5, 0.99, 0.1));
            assert!(d.should_respond);
            assert_eq!(d.persona.as_deref(), Some("Mel"));
            assert_eq!(d.trigger, Some(Trigger::Quarterback));
        }
    }

    #[test]
    fn test_qb_position_is_case_insensitive() {
        let voice = VoiceConfig::default();
        let qb = event(" qb ", "Jane Doe", 12, 30.0);
        let d = decide(&qb, -18.0, &voice, &draws(0.99, 0.5, 0.99, 0.1));
        assert_eq!(d.trigger, Some(Trigger::Quarterback));
    }

    #[test]
    fn test_non_qb_failed_draw_is_silent() {
        let voice = VoiceConfig::default();
        let rb = event("RB", "Someone", 20, 20.0);

        let d = decide(&rb, 0.0, &voice, &draws(0.4, 0.0, 0.0, 0.0));
        assert_eq!(d, ResponseDecision::silent());
        assert!(!d.use_canned_reaction());
    }

    #[test]
    fn test_persona_by_delta_magnitude() {
        let voice = VoiceConfig::default();
        let wr = event("WR", "Someone", 10, 10.0);
        let pass = draws(0.1, 0.99, 0.99, 0.0);

        let (reach_persona, _) = choose_responder(&wr, -7.0, &voice, &pass).unwrap();
        assert_eq!(reach_persona, "Mel");

        let (value_persona, _) = choose_responder(&wr, 7.0, &voice, &pass).unwrap();
        assert_eq!(value_persona, "McShay");
    }

    #[test]
    fn test_middling_delta_uses_rotation_draw() {
        let voice = VoiceConfig::default();
        let te = event("TE", "Someone", 10, 10.0);

        let (low, trigger) = choose_responder(&te, 1.0, &voice, &draws(0.1, 0.1, 0.0, 0.0)).unwrap();
        let (high, _) = choose_responder(&te, 1.0, &voice, &draws(0.1, 0.9, 0.0, 0.0)).unwrap();

        assert_eq!(trigger, Trigger::Drawn);
        assert_eq!(low, voice.rotation[0]);
        assert_eq!(high, voice.rotation[1]);
    }

    #[test]
    fn test_zero_probability_never_responds_for_non_qb() {
        let voice = VoiceConfig {
            respond_probability: 0.0,
            ..VoiceConfig::default()
        };
        let k = event("K", "Someone", 150, 180.0);
        assert!(!decide(&k, -30.0, &voice, &draws(0.0, 0.0, 0.0, 0.0)).should_respond);
    }

    // ============= Canned Reaction Tests =============

    #[test]
    fn test_qb_not_priority_player_melts_down() {
        let voice = VoiceConfig::default();
        let qb = event("QB", "Jane Doe", 12, 30.0);

        for pick in [0.0, 0.5, 0.99] {
            let d = decide(&qb, -18.0, &voice, &draws(0.9, 0.9, 0.99, pick));
            let canned = d.canned.expect("meltdown expected");
            assert_eq!(canned.catalogue, Catalogue::Meltdown);
            assert!(Catalogue::Meltdown.lines().contains(&canned.text));
        }
    }

    #[test]
    fn test_priority_qb_falls_through_to_probability_table() {
        let voice = VoiceConfig::default();
        let qb = event("QB", &voice.priority_player.to_uppercase(), 30, 30.0);

        // delta 0 -> probability 0 -> always generate
        let d = decide(&qb, 0.0, &voice, &draws(0.9, 0.9, 0.0, 0.0));
        assert!(d.should_respond);
        assert_eq!(d.canned, None);
    }

    #[test]
    fn test_reaction_probability_table() {
        assert_eq!(reaction_probability(-11.0), 0.40);
        assert_eq!(reaction_probability(-10.0), 0.30);
        assert_eq!(reaction_probability(-6.0), 0.30);
        assert_eq!(reaction_probability(-5.0), 0.20);
        assert_eq!(reaction_probability(-2.5), 0.20);
        assert_eq!(reaction_probability(-2.0), 0.0);
        assert_eq!(reaction_probability(0.0), 0.0);
        assert_eq!(reaction_probability(4.9), 0.0);
        assert_eq!(reaction_probability(5.0), 0.15);
        assert_eq!(reaction_probability(10.0), 0.25);
    }

    #[test]
    fn test_reaction_catalogue_follows_delta_sign() {
        let voice = VoiceConfig::default();
        let rb = event("RB", "Someone", 10, 10.0);

        let reach = choose_reaction(&rb, -12.0, Trigger::Drawn, &voice, &draws(0.0, 0.0, 0.39, 0.0));
        assert_eq!(reach.map(|r| r.catalogue), Some(Catalogue::Reach));

        let value = choose_reaction(&rb, 12.0, Trigger::Drawn, &voice, &draws(0.0, 0.0, 0.24, 0.0));
        assert_eq!(value.map(|r| r.catalogue), Some(Catalogue::Value));

        let generated = choose_reaction(&rb, 12.0, Trigger::Drawn, &voice, &draws(0.0, 0.0, 0.25, 0.0));
        assert_eq!(generated, None);
    }

    // ============= Always Mode Tests =============

    #[test]
    fn test_always_mode_uses_requested_persona() {
        let voice = VoiceConfig {
            mode: ResponseMode::Always,
            ..VoiceConfig::default()
        };
        let mut qb = event("QB", "Jane Doe", 1, 40.0);
        qb.persona = Some("McShay".to_string());

        let d = decide(&qb, -39.0, &voice, &draws(0.99, 0.99, 0.0, 0.0));
        assert!(d.should_respond);
        assert_eq!(d.persona.as_deref(), Some("McShay"));
        assert_eq!(d.trigger, Some(Trigger::Always));
        assert!(!d.use_canned_reaction());
    }

    #[test]
    fn test_always_mode_defaults_persona() {
        let voice = VoiceConfig {
            mode: ResponseMode::Always,
            ..VoiceConfig::default()
        };
        let d = decide(&event("RB", "Someone", 5, 5.0), 0.0, &voice, &draws(0.9, 0.9, 0.9, 0.9));
        assert_eq!(d.persona, Some(voice.default_persona.clone()));
    }

    #[test]
    fn test_sampled_draws_are_in_unit_interval() {
        let mut rng = rand::thread_rng();
        for _ in 0..100 {
            let d = Draws::sample(&mut rng);
            for v in [d.respond, d.persona, d.reaction, d.pick] {
                assert!((0.0..1.0).contains(&v));
            }
        }
    }
}
