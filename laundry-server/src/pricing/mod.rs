//! Pricing
//!
//! Resolves the unit price of a new order line from the active pricing rule
//! and the urgency of the order's reservation.

pub mod calculator;

use shared::error::ErrorCode;
use shared::models::Order;
use shared::order::{ItemType, Priority, ServiceLevel};
use sqlx::SqlitePool;

use crate::db::repository::{pricing_rule, reservation};
use crate::utils::{AppError, AppResult};

pub use calculator::quote;

/// Priority of the order's reservation; `Standard` when there is none
pub async fn order_priority(pool: &SqlitePool, order: &Order) -> AppResult<Priority> {
    let Some(reservation_id) = order.reservation_id else {
        return Ok(Priority::Standard);
    };
    let priority = reservation::find_by_id(pool, reservation_id)
        .await?
        .map(|r| r.priority)
        .unwrap_or_default();
    Ok(priority)
}

/// Quote the unit price for a line on `order`
///
/// Fails with `NoApplicablePrice` when no active rule covers the pair.
pub async fn quote_unit_price(
    pool: &SqlitePool,
    order: &Order,
    service_level: ServiceLevel,
    item_type: ItemType,
) -> AppResult<f64> {
    let rule = pricing_rule::find_active(pool, service_level, item_type)
        .await?
        .ok_or_else(|| {
            AppError::with_message(
                ErrorCode::NoApplicablePrice,
                format!("No active price for {service_level} / {item_type}; unit_price is required"),
            )
            .with_detail("service_level", service_level.as_str())
            .with_detail("item_type", item_type.as_str())
        })?;
    let priority = order_priority(pool, order).await?;
    let price = quote(&rule, priority)?;
    tracing::debug!(
        order_id = order.id,
        rule_id = rule.id,
        priority = priority.as_str(),
        price,
        "Quoted unit price"
    );
    Ok(price)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::repository::order;
    use crate::db::testing::{insert_reservation, insert_user, pool};
    use shared::models::{OrderCreate, PricingRuleCreate};

    async fn seed_rule(pool: &SqlitePool) {
        pricing_rule::create(
            pool,
            PricingRuleCreate {
                service_level: ServiceLevel::DryClean,
                item_type: ItemType::Dress,
                base_price: 10.00,
                express_multiplier: Some(1.5),
                rush_multiplier: Some(2.0),
            },
            0,
        )
        .await
        .unwrap();
    }

    #[tokio::test]
    async fn test_quote_uses_reservation_priority() {
        let pool = pool().await;
        seed_rule(&pool).await;
        let user = insert_user(&pool, "alice", false).await;
        let rush = insert_reservation(&pool, user, Priority::Rush).await;

        let plain = order::create(&pool, user, OrderCreate::default(), 0).await.unwrap();
        let urgent = order::create(
            &pool,
            user,
            OrderCreate {
                reservation_id: Some(rush),
                ..Default::default()
            },
            0,
        )
        .await
        .unwrap();

        let price = quote_unit_price(&pool, &plain, ServiceLevel::DryClean, ItemType::Dress)
            .await
            .unwrap();
        assert_eq!(price, 10.00);
        let price = quote_unit_price(&pool, &urgent, ServiceLevel::DryClean, ItemType::Dress)
            .await
            .unwrap();
        assert_eq!(price, 20.00);
    }

    #[tokio::test]
    async fn test_quote_without_rule() {
        let pool = pool().await;
        let user = insert_user(&pool, "bob", false).await;
        let order = order::create(&pool, user, OrderCreate::default(), 0).await.unwrap();

        let err = quote_unit_price(&pool, &order, ServiceLevel::PressOnly, ItemType::Towel)
            .await
            .unwrap_err();
        assert_eq!(err.code, ErrorCode::NoApplicablePrice);
    }
}
