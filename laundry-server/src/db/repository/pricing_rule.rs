//! Pricing Rule Repository

use super::{RepoError, RepoResult};
use shared::models::{
    DEFAULT_EXPRESS_MULTIPLIER, DEFAULT_RUSH_MULTIPLIER, PricingRule, PricingRuleCreate,
    PricingRuleUpdate,
};
use shared::order::{ItemType, ServiceLevel};
use sqlx::SqlitePool;

const COLUMNS: &str = "id, service_level, item_type, base_price, express_multiplier, rush_multiplier, is_active, created_at, updated_at";

pub async fn find_all(pool: &SqlitePool) -> RepoResult<Vec<PricingRule>> {
    let rules = sqlx::query_as::<_, PricingRule>(&format!(
        "SELECT {COLUMNS} FROM pricing_rule ORDER BY service_level, item_type"
    ))
    .fetch_all(pool)
    .await?;
    Ok(rules)
}

pub async fn find_by_id(pool: &SqlitePool, id: i64) -> RepoResult<Option<PricingRule>> {
    let rule = sqlx::query_as::<_, PricingRule>(&format!(
        "SELECT {COLUMNS} FROM pricing_rule WHERE id = ?"
    ))
    .bind(id)
    .fetch_optional(pool)
    .await?;
    Ok(rule)
}

/// Active rule for a (service level, item type) pair
pub async fn find_active(
    pool: &SqlitePool,
    service_level: ServiceLevel,
    item_type: ItemType,
) -> RepoResult<Option<PricingRule>> {
    let rule = sqlx::query_as::<_, PricingRule>(&format!(
        "SELECT {COLUMNS} FROM pricing_rule WHERE service_level = ? AND item_type = ? AND is_active = 1"
    ))
    .bind(service_level)
    .bind(item_type)
    .fetch_optional(pool)
    .await?;
    Ok(rule)
}

pub async fn create(pool: &SqlitePool, data: PricingRuleCreate, now: i64) -> RepoResult<PricingRule> {
    let id = sqlx::query_scalar::<_, i64>(
        "INSERT INTO pricing_rule (service_level, item_type, base_price, express_multiplier, rush_multiplier, is_active, created_at, updated_at) VALUES (?1, ?2, ?3, ?4, ?5, 1, ?6, ?6) RETURNING id",
    )
    .bind(data.service_level)
    .bind(data.item_type)
    .bind(data.base_price)
    .bind(data.express_multiplier.unwrap_or(DEFAULT_EXPRESS_MULTIPLIER))
    .bind(data.rush_multiplier.unwrap_or(DEFAULT_RUSH_MULTIPLIER))
    .bind(now)
    .fetch_one(pool)
    .await
    .map_err(|e| match RepoError::from(e) {
        RepoError::Duplicate(_) => RepoError::PricingRuleExists(format!(
            "{} / {}",
            data.service_level, data.item_type
        )),
        other => other,
    })?;
    find_by_id(pool, id)
        .await?
        .ok_or_else(|| RepoError::Database("Failed to create pricing rule".into()))
}

pub async fn update(
    pool: &SqlitePool,
    id: i64,
    data: PricingRuleUpdate,
    now: i64,
) -> RepoResult<PricingRule> {
    let rows = sqlx::query(
        "UPDATE pricing_rule SET base_price = COALESCE(?1, base_price), express_multiplier = COALESCE(?2, express_multiplier), rush_multiplier = COALESCE(?3, rush_multiplier), is_active = COALESCE(?4, is_active), updated_at = ?5 WHERE id = ?6",
    )
    .bind(data.base_price)
    .bind(data.express_multiplier)
    .bind(data.rush_multiplier)
    .bind(data.is_active)
    .bind(now)
    .bind(id)
    .execute(pool)
    .await?;
    if rows.rows_affected() == 0 {
        return Err(RepoError::PricingRuleNotFound(id));
    }
    find_by_id(pool, id)
        .await?
        .ok_or(RepoError::PricingRuleNotFound(id))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::testing::pool;

    fn dry_clean_jacket(base_price: f64) -> PricingRuleCreate {
        PricingRuleCreate {
            service_level: ServiceLevel::DryClean,
            item_type: ItemType::Jacket,
            base_price,
            express_multiplier: None,
            rush_multiplier: None,
        }
    }

    #[tokio::test]
    async fn test_create_uses_default_multipliers() {
        let pool = pool().await;
        let rule = create(&pool, dry_clean_jacket(12.00), 5).await.unwrap();
        assert_eq!(rule.express_multiplier, 1.5);
        assert_eq!(rule.rush_multiplier, 2.0);
        assert!(rule.is_active);
        assert_eq!(rule.created_at, 5);
    }

    #[tokio::test]
    async fn test_pair_is_unique() {
        let pool = pool().await;
        create(&pool, dry_clean_jacket(12.00), 5).await.unwrap();
        let err = create(&pool, dry_clean_jacket(13.00), 6).await.unwrap_err();
        assert!(matches!(err, RepoError::PricingRuleExists(_)));
    }

    #[tokio::test]
    async fn test_find_active_skips_inactive() {
        let pool = pool().await;
        let rule = create(&pool, dry_clean_jacket(12.00), 5).await.unwrap();
        assert!(
            find_active(&pool, ServiceLevel::DryClean, ItemType::Jacket)
                .await
                .unwrap()
                .is_some()
        );

        let updated = update(
            &pool,
            rule.id,
            PricingRuleUpdate {
                is_active: Some(false),
                base_price: Some(14.00),
                ..Default::default()
            },
            9,
        )
        .await
        .unwrap();
        assert_eq!(updated.base_price, 14.00);
        assert_eq!(updated.updated_at, 9);
        assert!(
            find_active(&pool, ServiceLevel::DryClean, ItemType::Jacket)
                .await
                .unwrap()
                .is_none()
        );
    }

    #[tokio::test]
    async fn test_update_missing_rule() {
        let pool = pool().await;
        let err = update(&pool, 3, PricingRuleUpdate::default(), 1).await.unwrap_err();
        assert!(matches!(err, RepoError::PricingRuleNotFound(3)));
    }
}
