//! メニューカタログ
//!
//! 商品と (商品, サイズ) ごとの価格調整を保持する読み取り専用コレクション。
//! 注文ワークフローは存在確認・提供可否・価格参照のためにのみ使用する。

use std::collections::HashMap;

use crate::simple_types::{DrinkSize, MenuItemId, PriceModifier};

use super::menu_item::MenuItem;
use super::size_pricing::SizePricing;

// =============================================================================
// MenuCatalog
// =============================================================================

/// メニューカタログ
///
/// 商品 ID から [`MenuItem`] へのマッピングと、(商品 ID, サイズ) から
/// 価格調整へのマッピングを管理する。構築は `with_*` メソッドの連鎖で行い、
/// 構築後は読み取り専用として扱う。
///
/// # 使用例
///
/// ```
/// use cafe_ordering::catalog::{MenuCatalog, MenuCategory, MenuItem, SizePricing};
/// use cafe_ordering::simple_types::{DrinkSize, MenuItemId, Price, PriceModifier, String50};
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
/// use uuid::Uuid;
///
/// let latte_id = MenuItemId::from_uuid(Uuid::from_u128(1));
/// let latte = MenuItem::new(
///     latte_id,
///     MenuCategory::Coffee,
///     String50::create("Name", "Caffè Latte").unwrap(),
///     Price::create(Decimal::from_str("4.50").unwrap()).unwrap(),
///     true,
///     true,
///     true,
///     3,
///     1,
/// );
///
/// let catalog = MenuCatalog::new().with_item(latte).with_size_pricing(SizePricing::new(
///     latte_id,
///     DrinkSize::Large,
///     PriceModifier::create(Decimal::from_str("1.00").unwrap()).unwrap(),
/// ));
///
/// assert!(catalog.find_item(&latte_id).is_some());
/// assert!(catalog.size_modifier(&latte_id, DrinkSize::Large).is_some());
/// assert!(catalog.size_modifier(&latte_id, DrinkSize::Small).is_none());
/// ```
#[derive(Clone, Debug, Default)]
pub struct MenuCatalog {
    items: HashMap<MenuItemId, MenuItem>,
    size_pricing: HashMap<(MenuItemId, DrinkSize), PriceModifier>,
}

impl MenuCatalog {
    /// 空のカタログを作成する
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// 商品を追加したカタログを返す
    ///
    /// 同じ ID の商品が既に存在する場合は置き換える。
    ///
    /// # Arguments
    ///
    /// * `item` - 追加する商品
    #[must_use]
    pub fn with_item(mut self, item: MenuItem) -> Self {
        self.items.insert(item.id(), item);
        self
    }

    /// 価格調整を追加したカタログを返す
    ///
    /// 同じ (商品, サイズ) の調整が既に存在する場合は置き換える。
    ///
    /// # Arguments
    ///
    /// * `row` - 追加する価格調整
    #[must_use]
    pub fn with_size_pricing(mut self, row: SizePricing) -> Self {
        self.size_pricing
            .insert((row.menu_item_id(), row.size()), row.modifier());
        self
    }

    /// 指定した ID の商品を返す
    #[must_use]
    pub fn find_item(&self, menu_item_id: &MenuItemId) -> Option<&MenuItem> {
        self.items.get(menu_item_id)
    }

    /// 指定した (商品, サイズ) の価格調整を返す
    ///
    /// 調整が設定されていない場合は `None` を返す。
    #[must_use]
    pub fn size_modifier(
        &self,
        menu_item_id: &MenuItemId,
        size: DrinkSize,
    ) -> Option<PriceModifier> {
        self.size_pricing.get(&(*menu_item_id, size)).copied()
    }

    /// 登録されている商品数を返す
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// カタログが空かどうかを返す
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// 登録されている商品のイテレータを返す
    pub fn items(&self) -> impl Iterator<Item = &MenuItem> {
        self.items.values()
    }
}

// =============================================================================
// Tests
// =============================================================================
