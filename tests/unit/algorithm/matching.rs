//! Tests for count and linear win pattern detection

#[cfg(test)]
mod tests {
    use scratchgrid::GameConfig;
    use scratchgrid::algorithm::matching::{WinCombinationMap, find_win_combinations};
    use scratchgrid::spatial::{Coordinate, Grid};
    use serde_json::json;

    fn pattern_config() -> GameConfig {
        let document = json!({
            "rows": 3,
            "columns": 3,
            "symbols": {
                "A": { "type": "standard", "reward_multiplier": 5 },
                "B": { "type": "standard", "reward_multiplier": 3 },
                "C": { "type": "standard", "reward_multiplier": 1 },
                "5x": { "type": "bonus", "impact": "multiply_reward", "reward_multiplier": 5 }
            },
            "probabilities": { "standard_symbols": [] },
            "win_combinations": {
                "same_symbol_3_times": { "reward_multiplier": 1 },
                "same_symbol_4_times": { "reward_multiplier": 1.5 },
                "same_symbols_horizontally": {
                    "reward_multiplier": 2,
                    "covered_areas": [["0:0", "0:1", "0:2"], ["1:0", "1:1", "1:2"], ["2:0", "2:1", "2:2"]]
                },
                "same_symbols_diagonally_left_to_right": {
                    "reward_multiplier": 5,
                    "covered_areas": [["0:0", "1:1", "2:2"]]
                }
            }
        });
        GameConfig::from_json_str(&document.to_string()).unwrap()
    }

    fn grid(rows: &[[&str; 3]; 3]) -> Grid {
        let rows: Vec<Vec<&str>> = rows.iter().map(|row| row.to_vec()).collect();
        Grid::from_rows(&rows).unwrap()
    }

    fn names(map: &WinCombinationMap, symbol: &str) -> Vec<String> {
        map.get(symbol)
            .map(|set| set.iter().cloned().collect())
            .unwrap_or_default()
    }

    // Tests count pattern requires the exact occurrence count
    // Verified by matching counts with greater-or-equal
    #[test]
    fn test_count_pattern_matches_exact_occurrences_only() {
        let config = pattern_config();
        let grid = grid(&[["A", "B", "A"], ["C", "A", "B"], ["B", "C", "B"]]);

        let map = find_win_combinations(&grid, &config);

        assert_eq!(names(&map, "A"), vec!["same_symbol_3_times"]);
        assert_eq!(names(&map, "B"), vec!["same_symbol_4_times"]);
        assert!(names(&map, "C").is_empty());
    }

    // Tests a full row satisfies the horizontal pattern
    // Verified by requiring every covered area to match
    #[test]
    fn test_linear_pattern_matches_single_area() {
        let config = pattern_config();
        let grid = grid(&[["B", "C", "C"], ["A", "A", "A"], ["B", "C", "B"]]);

        let map = find_win_combinations(&grid, &config);

        assert_eq!(
            names(&map, "A"),
            vec!["same_symbol_3_times", "same_symbols_horizontally"]
        );
    }

    // Tests one mismatched cell in every area removes the linear pattern
    // Verified by counting partial area matches
    #[test]
    fn test_linear_pattern_requires_full_area() {
        let config = pattern_config();
        let grid = grid(&[["A", "A", "B"], ["A", "B", "A"], ["B", "A", "A"]]);

        let map = find_win_combinations(&grid, &config);

        let a = names(&map, "A");
        assert!(!a.contains(&"same_symbols_horizontally".to_string()));
        assert!(!a.contains(&"same_symbols_diagonally_left_to_right".to_string()));
    }

    // Tests the diagonal area is checked independently of rows
    // Verified by reading areas as rows only
    #[test]
    fn test_diagonal_pattern() {
        let config = pattern_config();
        let grid = grid(&[["C", "A", "B"], ["B", "C", "A"], ["A", "B", "C"]]);

        let map = find_win_combinations(&grid, &config);

        assert_eq!(
            names(&map, "C"),
            vec!["same_symbol_3_times", "same_symbols_diagonally_left_to_right"]
        );
    }

    // Tests unmatched and bonus symbols still receive entries in first-appearance order
    // Verified by dropping symbols with empty sets
    #[test]
    fn test_every_symbol_gets_an_entry() {
        let config = pattern_config();
        let grid = grid(&[["5x", "A", "B"], ["B", "C", "C"], ["A", "B", "B"]]);

        let map = find_win_combinations(&grid, &config);

        let symbols: Vec<&str> = map.keys().map(String::as_str).collect();
        assert_eq!(symbols, vec!["5x", "A", "B", "C"]);
        assert!(names(&map, "5x").is_empty());
        assert_eq!(names(&map, "B"), vec!["same_symbol_4_times"]);
    }

    // Tests repeated matching on the same grid is deterministic
    // Verified by iterating symbols from a hash map
    #[test]
    fn test_matching_is_deterministic() {
        let config = pattern_config();
        let grid = grid(&[["A", "B", "C"], ["A", "B", "C"], ["A", "B", "C"]]);

        let first = find_win_combinations(&grid, &config);
        for _ in 0..10 {
            assert_eq!(find_win_combinations(&grid, &config), first);
        }
    }

    // Tests unassigned cells are not reported as symbols
    // Verified by counting unassigned cells as a symbol
    #[test]
    fn test_unassigned_cells_are_ignored() {
        let config = pattern_config();
        let mut partial = Grid::new(3, 3);
        for column in 0..3 {
            partial.assign(Coordinate::new(0, column), "A");
        }

        let map = find_win_combinations(&partial, &config);

        assert_eq!(map.len(), 1);
        assert_eq!(
            names(&map, "A"),
            vec!["same_symbol_3_times", "same_symbols_horizontally"]
        );
    }
}
