use crate::pricing::constants::BULK_DISCOUNT_TIERS;

/// Bulk discount multiplier for a usage count.
///
/// Step function over BULK_DISCOUNT_TIERS; a count of 1 (or 0) earns no
/// discount. The multiplier never exceeds 1.0 and never increases as the
/// usage count grows.
pub fn bulk_multiplier(usage: u32) -> f64 {
    for (min_usage, multiplier) in BULK_DISCOUNT_TIERS {
        if usage >= *min_usage {
            return *multiplier;
        }
    }
    1.0
}

/// Estimated (total cost, savings) for an ingredient.
///
/// Baseline is usage x unit price; the bulk multiplier discounts it and the
/// difference is the savings. Savings are always >= 0.
pub fn estimate_cost(usage: u32, unit_price: f64) -> (f64, f64) {
    let baseline = unit_price * usage as f64;
    let total = baseline * bulk_multiplier(usage);
    (total, baseline - total)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_multiplier_steps() {
        assert_eq!(bulk_multiplier(0), 1.0);
        assert_eq!(bulk_multiplier(1), 1.0);
        assert_eq!(bulk_multiplier(2), 0.85);
        assert_eq!(bulk_multiplier(3), 0.75);
        assert_eq!(bulk_multiplier(4), 0.75);
        assert_eq!(bulk_multiplier(5), 0.65);
        assert_eq!(bulk_multiplier(6), 0.65);
        assert_eq!(bulk_multiplier(7), 0.55);
        assert_eq!(bulk_multiplier(100), 0.55);
    }

    #[test]
    fn test_multiplier_is_monotonic() {
        let mut prev = bulk_multiplier(0);
        for usage in 1..20 {
            let mult = bulk_multiplier(usage);
            assert!(mult <= prev);
            assert!(mult > 0.0 && mult <= 1.0);
            prev = mult;
        }
    }

    #[test]
    fn test_cost_and_savings() {
        // 3 meals of a $1.00 ingredient: 3 * 1.00 * 0.75 = $2.25, save $0.75
        let (total, savings) = estimate_cost(3, 1.0);
        assert!((total - 2.25).abs() < 0.001);
        assert!((savings - 0.75).abs() < 0.001);
    }

    #[test]
    fn test_single_use_saves_nothing() {
        let (total, savings) = estimate_cost(1, 4.99);
        assert!((total - 4.99).abs() < 0.001);
        assert_eq!(savings, 0.0);
    }
}
