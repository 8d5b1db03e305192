// File: crates/dashboard-core/tests/properties.rs
// Purpose: Property checks for summation, cash flow and color parsing.

use dashboard_core::{cumulative_cash_flow, hex_to_rgb, sum, to_rgba, Rgb};
use proptest::prelude::*;

proptest! {
    #[test]
    fn sum_ignores_order(mut values in prop::collection::vec(-1_000_000i32..1_000_000, 0..64)) {
        let forward: Vec<f64> = values.iter().map(|&v| v as f64).collect();
        values.reverse();
        let backward: Vec<f64> = values.iter().map(|&v| v as f64).collect();
        prop_assert_eq!(sum(&forward), sum(&backward));
    }

    #[test]
    fn cash_flow_steps_equal_net(
        pairs in prop::collection::vec((0i32..1_000_000, 0i32..1_000_000), 1..48)
    ) {
        let revenue: Vec<f64> = pairs.iter().map(|p| p.0 as f64).collect();
        let expenses: Vec<f64> = pairs.iter().map(|p| p.1 as f64).collect();
        let flow = cumulative_cash_flow(&revenue, &expenses).unwrap();
        prop_assert_eq!(flow.len(), revenue.len());
        prop_assert_eq!(flow[0], revenue[0] - expenses[0]);
        for i in 1..flow.len() {
            prop_assert_eq!(flow[i] - flow[i - 1], revenue[i] - expenses[i]);
        }
    }

    #[test]
    fn hex_parse_inverts_formatting(r: u8, g: u8, b: u8, upper: bool, hash: bool) {
        let rgb = Rgb::new(r, g, b);
        let mut hex = rgb.to_hex();
        if upper { hex = hex.to_uppercase(); }
        if !hash { hex.remove(0); }
        prop_assert_eq!(hex_to_rgb(&hex).unwrap(), rgb);
        prop_assert_eq!(to_rgba(&hex, 0.5), format!("rgba({r}, {g}, {b}, 0.5)"));
    }

    #[test]
    fn non_six_digit_strings_never_parse(s in "#?[0-9a-f]{0,5}|#?[0-9a-f]{7,9}") {
        prop_assert!(hex_to_rgb(&s).is_err());
        prop_assert_eq!(to_rgba(&s, 0.3), s);
    }
}
