//! Price Calculator
//!
//! Quotes unit prices from pricing rules. Uses rust_decimal for the
//! arithmetic, returns f64 rounded to cents for storage.

use shared::models::PricingRule;
use shared::order::money::{MoneyError, mul_money};
use shared::order::Priority;

/// Unit price for a rule at a reservation priority: `base_price × multiplier`
pub fn quote(rule: &PricingRule, priority: Priority) -> Result<f64, MoneyError> {
    let multiplier = match priority {
        Priority::Standard => 1.0,
        other => rule.multiplier(other),
    };
    mul_money(rule.base_price, multiplier)
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::order::{ItemType, ServiceLevel};

    fn rule(base_price: f64, express: f64, rush: f64) -> PricingRule {
        PricingRule {
            id: 1,
            service_level: ServiceLevel::WashFold,
            item_type: ItemType::Shirt,
            base_price,
            express_multiplier: express,
            rush_multiplier: rush,
            is_active: true,
            created_at: 0,
            updated_at: 0,
        }
    }

    #[test]
    fn test_quote_by_priority() {
        let r = rule(3.50, 1.5, 2.0);
        assert_eq!(quote(&r, Priority::Standard), Ok(3.50));
        assert_eq!(quote(&r, Priority::Express), Ok(5.25));
        assert_eq!(quote(&r, Priority::Rush), Ok(7.00));
    }

    #[test]
    fn test_quote_rounds_half_away_from_zero() {
        // 2.99 × 1.25 = 3.7375 → 3.74
        let r = rule(2.99, 1.25, 2.0);
        assert_eq!(quote(&r, Priority::Express), Ok(3.74));
        // 0.05 × 1.5 = 0.075 → 0.08
        let r = rule(0.05, 1.5, 2.0);
        assert_eq!(quote(&r, Priority::Express), Ok(0.08));
    }

    #[test]
    fn test_quote_reports_overflow() {
        // rows written before the bounds existed can still hold huge values
        let r = rule(7.0e28, 1.5, 2.0);
        assert_eq!(quote(&r, Priority::Express), Err(MoneyError::Overflow));
        assert!(quote(&r, Priority::Standard).is_ok());
    }
}
