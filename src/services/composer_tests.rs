//! Unit tests for prompt assembly, grade/verdict parsing and embed building.

#[cfg(test)]
mod composer_tests {
    use crate::constants::personas as persona_consts;
    use crate::events::{DraftPickEvent, LeagueType};
    use crate::personas::persona_for;
    use crate::services::composer::*;
    use crate::services::voice::ToneBucket;

    fn pick(pick_number: u32, adp: f64) -> DraftPickEvent {
        DraftPickEvent {
            pick_number,
            player: "Bijan Robinson".to_string(),
            position: "RB".to_string(),
            adp,
            team: "Team Taco".to_string(),
            persona: None,
            tone: None,
            league_type: LeagueType::Dynasty,
        }
    }

    // ============= Instruction Tests =============

    #[test]
    fn test_system_instruction_carries_grade_contract() {
        let event = pick(3, 5.0);
        let ins = build_instructions(persona_for("Mel"), "roast", ToneBucket::Critical, &event, -2.0);

        assert!(ins.system.contains(GRADE_CONTRACT));
        assert!(ins.system.contains("Mel Kiper"));
        assert!(ins.system.contains("League context: dynasty."));
        assert!(ins.system.contains(ToneBucket::Critical.instruction()));
        assert!(ins.system.contains("savagely roast"));
    }

    #[test]
    fn test_user_instruction_lists_pick_facts() {
        let event = pick(12, 30.0);
        let ins = build_instructions(persona_for("McShay"), "serious", ToneBucket::SavageRoast, &event, -18.0);

        assert!(ins.user.contains("- Pick #: 12"));
        assert!(ins.user.contains("- Player: Bijan Robinson"));
        assert!(ins.user.contains("- Position: RB"));
        assert!(ins.user.contains("- Selecting Team: Team Taco"));
        assert!(ins.user.contains("- Player ADP: 30"));
        assert!(ins.user.contains("-18.0 (reach)"));
        assert!(ins.user.ends_with("Write the analyst blurb now."));
    }

    #[test]
    fn test_unknown_persona_uses_generic_voice() {
        let event = pick(40, 40.0);
        let ins = build_instructions(persona_for("Nobody"), "whatever", ToneBucket::Praiseworthy, &event, 0.0);
        assert!(ins.system.starts_with("You are an NFL Draft analyst."));
        assert!(ins.system.contains("light-hearted"));
    }

    // ============= Grade / Verdict Extraction Tests =============

    #[test]
    fn test_extract_grade_and_verdict() {
        let a = extract_grade_and_verdict("...blah blah Grade: B+ | VERDICT: SOLID VALUE PICK");

        assert_eq!(a.grade.as_deref(), Some("B+"));
        assert_eq!(a.verdict.as_deref(), Some("SOLID VALUE PICK"));
        assert_eq!(a.body, "...blah blah");
        assert!(!a.body.to_lowercase().contains("grade"));
        assert!(!a.body.to_lowercase().contains("verdict"));
    }

    #[test]
    fn test_extract_without_markers_leaves_body() {
        let text = "Bold. Wrong, but bold.";
        let a = extract_grade_and_verdict(text);

        assert_eq!(a.grade, None);
        assert_eq!(a.verdict, None);
        assert_eq!(a.body, text);
    }

    #[test]
    fn test_extract_is_case_insensitive_on_labels() {
        let a = extract_grade_and_verdict("Great patience.\ngrade: A- | verdict: STEAL OF THE ROUND.");

        assert_eq!(a.grade.as_deref(), Some("A-"));
        assert_eq!(a.verdict.as_deref(), Some("STEAL OF THE ROUND"));
        assert_eq!(a.body, "Great patience.");
    }

    #[test]
    fn test_extract_mixed_case_verdict() {
        let a = extract_grade_and_verdict("Nice pick. Grade: B | Verdict: Solid value pick");

        assert_eq!(a.grade.as_deref(), Some("B"));
        assert_eq!(a.verdict.as_deref(), Some("SOLID VALUE PICK"));
        assert_eq!(a.body, "Nice pick.");
    }

    #[test]
    fn test_extract_lowercase_grade() {
        let a = extract_grade_and_verdict("Nice pick. grade: b+ | VERDICT: SOLID VALUE");

        assert_eq!(a.grade.as_deref(), Some("B+"));
        assert_eq!(a.verdict.as_deref(), Some("SOLID VALUE"));
        assert_eq!(a.body, "Nice pick.");
    }

    #[test]
    fn test_verdict_stops_at_line_end_and_terminator() {
        let a = extract_grade_and_verdict("Verdict: Reach of the year\nStill, the tape is fun.");
        assert_eq!(a.verdict.as_deref(), Some("REACH OF THE YEAR"));
        assert_eq!(a.body, "Still, the tape is fun.");

        let a = extract_grade_and_verdict("Grade: d | Verdict: Too early! Sorry, fans.");
        assert_eq!(a.grade.as_deref(), Some("D"));
        assert_eq!(a.verdict.as_deref(), Some("TOO EARLY"));
        assert_eq!(a.body, "Sorry, fans.");
    }

    #[test]
    fn test_extract_grade_only() {
        let a = extract_grade_and_verdict("He can fly. Grade: C");
        assert_eq!(a.grade.as_deref(), Some("C"));
        assert_eq!(a.verdict, None);
        assert_eq!(a.body, "He can fly.");
    }

    #[test]
    fn test_extract_verdict_only() {
        let a = extract_grade_and_verdict("Nobody saw that coming. VERDICT: WHO IS THIS GUY");
        assert_eq!(a.grade, None);
        assert_eq!(a.verdict.as_deref(), Some("WHO IS THIS GUY"));
        assert_eq!(a.body, "Nobody saw that coming.");
    }

    #[test]
    fn test_upgrade_is_not_a_grade_marker() {
        let a = extract_grade_and_verdict("Massive upgrade: A real RB1.");
        assert_eq!(a.grade, None);
        assert_eq!(a.body, "Massive upgrade: A real RB1.");
    }

    // ============= Color Tests =============

    #[test]
    fn test_color_uses_persona_signature_near_adp() {
        assert_eq!(embed_color(0.5, persona_for("Mel")), persona_consts::MEL_COLOR);
        assert_eq!(embed_color(-0.9, persona_for("McShay")), persona_consts::MCSHAY_COLOR);
        assert_eq!(embed_color(0.0, persona_for("???")), persona_consts::DEFAULT_COLOR);
    }

    #[test]
    fn test_color_follows_tone_bucket_otherwise() {
        assert_eq!(embed_color(-12.0, persona_for("Mel")), ToneBucket::SavageRoast.color());
        assert_eq!(embed_color(-1.0, persona_for("Mel")), ToneBucket::Critical.color());
        assert_eq!(embed_color(1.0, persona_for("Mel")), ToneBucket::Praiseworthy.color());
        assert_eq!(embed_color(9.0, persona_for("Mel")), ToneBucket::Celebration.color());
    }

    #[test]
    fn test_reach_and_value_never_share_a_color() {
        for reach in [-20.0, -6.0, -3.0, -1.5] {
            for value in [1.5, 4.0, 12.0] {
                assert_ne!(
                    embed_color(reach, persona_for("Mel")),
                    embed_color(value, persona_for("Mel"))
                );
            }
        }
    }

    // ============= Payload Tests =============

    #[test]
    fn test_payload_with_assessment() {
        let event = pick(30, 12.0);
        let a = extract_grade_and_verdict("Fell right into their lap. Grade: A | VERDICT: HIGHWAY ROBBERY");
        let payload = build_display_payload(&event, 18.0, &a, "McShay", "balanced");

        assert_eq!(payload.embeds.len(), 1);
        let embed = &payload.embeds[0];
        assert_eq!(embed.title.as_deref(), Some("🏈 Draft Analysis: Bijan Robinson"));
        assert_eq!(embed.description, "Fell right into their lap.");
        assert_eq!(embed.color, ToneBucket::Celebration.color());
        assert_eq!(embed.fields.len(), 2);
        assert!(embed.fields[0].value.contains("**Pick #30**"));
        assert!(embed.fields[0].value.contains("**League:** Dynasty"));
        assert!(embed.fields[0].value.contains("+18.0 (value)"));
        assert_eq!(embed.fields[1].value, "**Grade:** A\n**Verdict:** HIGHWAY ROBBERY");
        assert!(embed.fields[1].inline);
        assert_eq!(
            embed.footer.as_ref().map(|f| f.text.as_str()),
            Some("Analysis by McShay • Balanced tone")
        );
        assert!(embed.timestamp.is_some());
    }

    #[test]
    fn test_payload_without_assessment_has_only_pick_info() {
        let event = pick(3, 5.0);
        let a = extract_grade_and_verdict("Way too early. ADP is a suggestion, but come on.");
        let payload = build_display_payload(&event, -2.0, &a, "Mel", "roast");

        let embed = &payload.embeds[0];
        assert_eq!(embed.fields.len(), 1);
        assert_eq!(embed.fields[0].name, "📊 Pick Info");
        assert_eq!(embed.description, "Way too early. ADP is a suggestion, but come on.");
    }

    #[test]
    fn test_payload_truncates_long_description() {
        let event = pick(3, 5.0);
        let a = Assessment {
            grade: None,
            verdict: None,
            body: "x".repeat(5000),
        };
        let payload = build_display_payload(&event, -2.0, &a, "Mel", "roast");
        assert_eq!(payload.embeds[0].description.chars().count(), 4096);
    }
}
