//! Tests for payout phases: standard rewards, baseline reset, bonus impacts

#[cfg(test)]
mod tests {
    use indexmap::IndexSet;
    use scratchgrid::GameConfig;
    use scratchgrid::algorithm::matching::WinCombinationMap;
    use scratchgrid::algorithm::payout::{AppliedCombinations, compute_payout};
    use scratchgrid::io::error::{ErrorKind, GameError};
    use serde_json::json;

    fn payout_config() -> GameConfig {
        let document = json!({
            "rows": 3,
            "columns": 3,
            "symbols": {
                "A": { "type": "standard", "reward_multiplier": 5 },
                "B": { "type": "standard", "reward_multiplier": 3 },
                "F": { "type": "standard", "reward_multiplier": 1 },
                "10x": { "type": "bonus", "impact": "multiply_reward", "reward_multiplier": 10 },
                "2x": { "type": "bonus", "impact": "multiply_reward", "reward_multiplier": 2 },
                "+50": { "type": "bonus", "impact": "extra_bonus", "extra": 50 },
                "MISS": { "type": "bonus", "impact": "miss" }
            },
            "probabilities": { "standard_symbols": [] },
            "win_combinations": {
                "same_symbol_3_times": { "reward_multiplier": 1 },
                "same_symbol_4_times": { "reward_multiplier": 1.5 },
                "same_symbol_5_times": { "reward_multiplier": 0.5 },
                "same_symbols_horizontally": {
                    "reward_multiplier": 2,
                    "covered_areas": [["0:0", "0:1", "0:2"]]
                }
            }
        });
        GameConfig::from_json_str(&document.to_string()).unwrap()
    }

    fn combinations(entries: &[(&str, &[&str])]) -> WinCombinationMap {
        entries
            .iter()
            .map(|(symbol, patterns)| {
                let set: IndexSet<String> = patterns.iter().map(ToString::to_string).collect();
                ((*symbol).to_string(), set)
            })
            .collect()
    }

    fn assert_amount(actual: f64, expected: f64) {
        assert!(
            (actual - expected).abs() < 1e-9,
            "expected payout {expected}, got {actual}"
        );
    }

    // Tests reward is bet x symbol multiplier x every pattern multiplier
    // Verified by applying only the first pattern multiplier
    #[test]
    fn test_standard_reward_multiplies_pattern_chain() {
        let config = payout_config();
        let map = combinations(&[("A", &["same_symbol_3_times", "same_symbols_horizontally"])]);

        let outcome = compute_payout(100, &map, &config).unwrap();

        assert_amount(outcome.total, 100.0 * 5.0 * 1.0 * 2.0);
        assert!(outcome.applied.standard.contains_key("A"));
        assert!(outcome.applied.bonus.is_empty());
    }

    // Tests rewards of several standard symbols are summed
    // Verified by keeping only the last symbol's reward
    #[test]
    fn test_standard_rewards_are_summed() {
        let config = payout_config();
        let map = combinations(&[
            ("A", &["same_symbol_3_times"]),
            ("B", &["same_symbol_4_times"]),
        ]);

        let outcome = compute_payout(10, &map, &config).unwrap();

        assert_amount(outcome.total, 10.0 * 5.0 + 10.0 * 3.0 * 1.5);
        assert_eq!(outcome.applied.standard.len(), 2);
    }

    // Tests symbols without matches pay nothing and are not applied
    // Verified by recording every standard symbol
    #[test]
    fn test_unmatched_standard_symbol_is_not_applied() {
        let config = payout_config();
        let map = combinations(&[("A", &[]), ("B", &["same_symbol_3_times"])]);

        let outcome = compute_payout(10, &map, &config).unwrap();

        assert_amount(outcome.total, 30.0);
        assert!(!outcome.applied.standard.contains_key("A"));
    }

    // Tests a payout exactly equal to the wager resets to zero
    // Verified by removing the baseline reset
    #[test]
    fn test_payout_equal_to_bet_resets_to_zero() {
        let config = payout_config();
        let map = combinations(&[("F", &["same_symbol_3_times"])]);

        let outcome = compute_payout(100, &map, &config).unwrap();

        assert_amount(outcome.total, 0.0);
        assert!(
            outcome.applied.standard.contains_key("F"),
            "matched patterns stay listed for traceability"
        );
    }

    // Tests multiply_reward scales the running total
    // Verified by adding instead of multiplying
    #[test]
    fn test_multiply_reward_bonus() {
        let config = payout_config();
        let map = combinations(&[("A", &["same_symbol_3_times"]), ("10x", &[])]);

        let outcome = compute_payout(10, &map, &config).unwrap();

        assert_amount(outcome.total, 500.0);
        assert_eq!(outcome.applied.bonus_label(), "10x");
    }

    // Tests extra_bonus requires the total to exceed the wager strictly
    // Verified by comparing with greater-or-equal
    #[test]
    fn test_extra_bonus_requires_total_above_bet() {
        let config = payout_config();

        let above = combinations(&[("A", &["same_symbol_3_times"]), ("+50", &[])]);
        let outcome = compute_payout(10, &above, &config).unwrap();
        assert_amount(outcome.total, 100.0);
        assert_eq!(outcome.applied.bonus_label(), "+50");

        let below = combinations(&[("F", &["same_symbol_5_times"]), ("+50", &[])]);
        let outcome = compute_payout(100, &below, &config).unwrap();
        assert_amount(outcome.total, 50.0);
        assert!(outcome.applied.bonus.is_empty());

        // 100 x 1 x 0.5 doubled lands exactly on the wager
        let equal = combinations(&[
            ("F", &["same_symbol_5_times"]),
            ("2x", &[]),
            ("+50", &[]),
        ]);
        let outcome = compute_payout(100, &equal, &config).unwrap();
        assert_amount(outcome.total, 100.0);
        assert_eq!(outcome.applied.bonus_label(), "2x");
    }

    // Tests extra_bonus on a zero payout has no effect
    // Verified by applying extra_bonus unconditionally
    #[test]
    fn test_extra_bonus_without_win() {
        let config = payout_config();
        let map = combinations(&[("A", &[]), ("+50", &[])]);

        let outcome = compute_payout(100, &map, &config).unwrap();

        assert_amount(outcome.total, 0.0);
        assert!(outcome.applied.bonus.is_empty());
        assert!(outcome.applied.standard.is_empty());
    }

    // Tests bonus symbols are dropped from the applied set when the total is zero
    // Verified by recording contributing symbols regardless of total
    #[test]
    fn test_multiplier_on_zero_total_is_not_reported() {
        let config = payout_config();
        let map = combinations(&[("A", &[]), ("10x", &[]), ("MISS", &[])]);

        let outcome = compute_payout(100, &map, &config).unwrap();

        assert_amount(outcome.total, 0.0);
        assert_eq!(outcome.applied, AppliedCombinations::default());
    }

    // Tests bonus symbols apply in map order
    // Verified by applying all multipliers before additions
    #[test]
    fn test_bonus_order_follows_map_order() {
        let config = payout_config();

        let multiply_first = combinations(&[
            ("A", &["same_symbol_3_times"]),
            ("10x", &[]),
            ("+50", &[]),
        ]);
        let outcome = compute_payout(10, &multiply_first, &config).unwrap();
        assert_amount(outcome.total, 550.0);
        assert_eq!(outcome.applied.bonus_label(), "10x,+50");

        let extra_first = combinations(&[
            ("A", &["same_symbol_3_times"]),
            ("+50", &[]),
            ("10x", &[]),
        ]);
        let outcome = compute_payout(10, &extra_first, &config).unwrap();
        assert_amount(outcome.total, 1000.0);
        assert_eq!(outcome.applied.bonus_label(), "+50,10x");
    }

    // Tests miss impact has no effect and is never reported
    // Verified by treating miss as a contributing symbol
    #[test]
    fn test_miss_bonus_has_no_effect() {
        let config = payout_config();
        let map = combinations(&[("A", &["same_symbol_3_times"]), ("MISS", &[])]);

        let outcome = compute_payout(10, &map, &config).unwrap();

        assert_amount(outcome.total, 50.0);
        assert!(outcome.applied.bonus.is_empty());
    }

    // Tests decimal multipliers do not break the wager equality check
    // Verified by comparing raw floating point values
    #[test]
    fn test_fractional_chain_equal_to_bet_resets() {
        let document = json!({
            "rows": 1,
            "columns": 1,
            "symbols": { "X": { "type": "standard", "reward_multiplier": 0.1 } },
            "probabilities": { "standard_symbols": [] },
            "win_combinations": {
                "same_symbol_1_times": { "reward_multiplier": 10 }
            }
        });
        let config = GameConfig::from_json_str(&document.to_string()).unwrap();
        let map = combinations(&[("X", &["same_symbol_1_times"])]);

        // 3 x 0.1 x 10 is not exactly 3.0 in binary floating point
        let outcome = compute_payout(3, &map, &config).unwrap();

        assert_amount(outcome.total, 0.0);
    }

    // Tests the reward chain is multiplied out before rounding
    // Verified by rounding after every multiplier in the chain
    #[test]
    fn test_reward_chain_rounded_once() {
        let chain = |symbol_multiplier: f64| {
            let document = json!({
                "rows": 1,
                "columns": 1,
                "symbols": { "X": { "type": "standard", "reward_multiplier": symbol_multiplier } },
                "probabilities": { "standard_symbols": [] },
                "win_combinations": {
                    "same_symbol_1_times": { "reward_multiplier": 1_000_000 }
                }
            });
            GameConfig::from_json_str(&document.to_string()).unwrap()
        };
        let map = combinations(&[("X", &["same_symbol_1_times"])]);

        let outcome = compute_payout(1, &map, &chain(0.000_001_5)).unwrap();
        assert_amount(outcome.total, 1.5);

        let outcome = compute_payout(1, &map, &chain(0.000_000_4)).unwrap();
        assert_amount(outcome.total, 0.4);
    }

    // Tests unknown symbols and pattern names are configuration errors
    // Verified by skipping unknown entries
    #[test]
    fn test_unknown_references_fail() {
        let config = payout_config();

        let unknown_symbol = combinations(&[("Z", &[])]);
        let error = compute_payout(10, &unknown_symbol, &config).unwrap_err();
        assert_eq!(error.kind(), ErrorKind::Configuration);
        assert!(matches!(error, GameError::UnknownSymbol { .. }));

        let unknown_pattern = combinations(&[("A", &["same_symbol_99_times"])]);
        let error = compute_payout(10, &unknown_pattern, &config).unwrap_err();
        assert!(matches!(error, GameError::UnknownPattern { .. }));
    }
}
