//! 统计
//!
//! - [`admin_summary`] - 用户/菜品/订单计数和总收入
//! - [`category_breakdown`] - 按菜品分类汇总已结算商品
//!
//! 聚合在 Rust 中完成，金额用 `Decimal` 计算

use std::collections::{BTreeMap, HashMap, HashSet};

use rust_decimal::Decimal;
use shared::models::{AdminStats, CategoryStat, MenuItem};
use shared::{AppError, AppResult};
use surrealdb::Surreal;
use surrealdb::engine::local::Db;

use crate::db::repository::{MenuRepository, PaymentRepository, UserRepository};
use crate::utils::money;

/// 管理后台概要
pub async fn admin_summary(db: &Surreal<Db>) -> AppResult<AdminStats> {
    let users = UserRepository::new(db.clone()).count().await?;
    let products = MenuRepository::new(db.clone()).count().await?;
    let payments = PaymentRepository::new(db.clone());
    let orders = payments.count().await?;
    let revenue = money::sum(payments.prices().await?)
        .ok_or_else(|| AppError::internal("revenue exceeds the decimal range"))?;

    Ok(AdminStats {
        users,
        products,
        orders,
        revenue: money::to_f64(revenue),
    })
}

/// 按分类汇总已结算的菜品
pub async fn category_breakdown(db: &Surreal<Db>) -> AppResult<Vec<CategoryStat>> {
    let menu = MenuRepository::new(db.clone()).find_all().await?;
    let settled = PaymentRepository::new(db.clone()).menu_item_lists().await?;
    summarize_categories(&menu, &settled)
}

/// 每笔支付内的菜品 id 去重后与菜单关联，按分类计数并累加菜单价格
///
/// 菜单中不存在的 id 被丢弃，结果按分类名排序
pub fn summarize_categories(
    menu: &[MenuItem],
    settled: &[Vec<String>],
) -> AppResult<Vec<CategoryStat>> {
    let catalog: HashMap<&str, &MenuItem> =
        menu.iter().map(|item| (item.id.as_str(), item)).collect();

    let mut groups: BTreeMap<&str, (u64, Decimal)> = BTreeMap::new();
    for menu_items in settled {
        let distinct: HashSet<&str> = menu_items.iter().map(String::as_str).collect();
        for id in distinct {
            let Some(item) = catalog.get(id) else {
                continue;
            };
            let entry = groups
                .entry(item.category.as_str())
                .or_insert((0, Decimal::ZERO));
            entry.0 += 1;
            let total = money::sum([item.price]).and_then(|price| entry.1.checked_add(price));
            entry.1 = total.ok_or_else(|| {
                AppError::internal(format!("{} total exceeds the decimal range", item.category))
            })?;
        }
    }

    Ok(groups
        .into_iter()
        .map(|(category, (count, total))| CategoryStat {
            category: category.to_string(),
            count,
            total: money::to_f64(total),
        })
        .collect())
}
