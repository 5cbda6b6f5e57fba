//! Pick value relative to market expectation.
//!
//! `delta = pick_number - adp`. Positive means the player went later than
//! ADP said he would (value); negative means he went early (reach). Every
//! other module reads the sign this way.

/// Signed distance between where a player went and where ADP had him.
pub fn compute_delta(pick_number: u32, adp: f64) -> f64 {
    f64::from(pick_number) - adp
}

/// True when the pick came before ADP
pub fn is_reach(delta: f64) -> bool {
    delta < 0.0
}

/// Short reading of the delta for prompts and embeds, e.g. "+4.5 (value)"
pub fn describe_delta(delta: f64) -> String {
    let label = if is_reach(delta) { "reach" } else { "value" };
    format!("{:+.1} ({})", delta, label)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_late_pick_is_value() {
        let delta = compute_delta(30, 12.0);
        assert_eq!(delta, 18.0);
        assert!(!is_reach(delta));
    }

    #[test]
    fn test_early_pick_is_reach() {
        let delta = compute_delta(12, 30.0);
        assert_eq!(delta, -18.0);
        assert!(is_reach(delta));
    }

    #[test]
    fn test_delta_is_deterministic() {
        for (pick, adp) in [(1, 1.0), (7, 3.5), (150, 212.25)] {
            assert_eq!(compute_delta(pick, adp), compute_delta(pick, adp));
        }
    }

    #[test]
    fn test_describe_delta() {
        assert_eq!(describe_delta(4.5), "+4.5 (value)");
        assert_eq!(describe_delta(-3.0), "-3.0 (reach)");
        assert_eq!(describe_delta(0.0), "+0.0 (value)");
    }
}
