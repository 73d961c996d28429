// Discovery progress helpers

/// Minimum answered questions before offering "generate now"
pub const GATE_MIN_ANSWERED: u32 = 3;

/// Returns the completion percentage (0-100), 0 when there is nothing to answer
pub fn calculate_progress(answered: u32, total: u32) -> u8 {
    if total == 0 {
        return 0;
    }

    let pct = (100.0 * answered as f64 / total as f64).round();
    pct.clamp(0.0, 100.0) as u8
}

/// Whether to offer the "continue answering vs. generate now" choice.
///
/// Shown once the user has engaged with a few questions but before every
/// question is answered.
pub fn should_show_gate(answered: u32, total: u32) -> bool {
    answered >= GATE_MIN_ANSWERED && answered < total
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_calculate_progress() {
        assert_eq!(calculate_progress(3, 6), 50);
        assert_eq!(calculate_progress(0, 0), 0);
        assert_eq!(calculate_progress(1, 3), 33);
        assert_eq!(calculate_progress(2, 3), 67);
        assert_eq!(calculate_progress(1, 8), 13);
        assert_eq!(calculate_progress(5, 5), 100);
    }

    #[test]
    fn test_calculate_progress_clamps_overflow() {
        assert_eq!(calculate_progress(9, 6), 100);
        assert_eq!(calculate_progress(4, 0), 0);
    }

    #[test]
    fn test_should_show_gate() {
        assert!(!should_show_gate(2, 6));
        assert!(should_show_gate(3, 6));
        assert!(should_show_gate(5, 6));
        assert!(!should_show_gate(6, 6));
        assert!(!should_show_gate(3, 3));
    }
}
