//! 依存オブジェクトの束
//!
//! ワークフローに注入する依存（カタログ・ストア・決済ゲートウェイ）を
//! まとめて保持する。`demo()` は開発・デモ用に固定のメニューを
//! シードした構成を返す。本番ではデータベース実装に置き換える。

use std::str::FromStr;
use std::sync::Arc;

use rust_decimal::Decimal;
use uuid::Uuid;

use crate::catalog::{MenuCatalog, MenuCategory, MenuItem, SizePricing};
use crate::payment::{PaymentGateway, StubPaymentGateway};
use crate::simple_types::{DrinkSize, MenuItemId, Price, PriceModifier, String50};
use crate::store::{InMemoryOrderStore, OrderStore};

// =============================================================================
// Dependencies
// =============================================================================

/// ワークフローに注入する依存オブジェクトの束
///
/// # Examples
///
/// ```
/// use cafe_ordering::api::Dependencies;
///
/// let dependencies = Dependencies::demo();
/// assert!(!dependencies.catalog().is_empty());
/// ```
#[derive(Clone)]
pub struct Dependencies {
    catalog: Arc<MenuCatalog>,
    store: Arc<dyn OrderStore>,
    gateway: Arc<dyn PaymentGateway>,
}

impl Dependencies {
    /// 依存オブジェクトを指定して生成する
    ///
    /// # Arguments
    ///
    /// * `catalog` - メニューカタログ
    /// * `store` - 注文ストア
    /// * `gateway` - 決済ゲートウェイ
    #[must_use]
    pub fn new(
        catalog: Arc<MenuCatalog>,
        store: Arc<dyn OrderStore>,
        gateway: Arc<dyn PaymentGateway>,
    ) -> Self {
        Self {
            catalog,
            store,
            gateway,
        }
    }

    /// デモ用のメニューをシードした構成を返す
    ///
    /// カタログの内容は固定 UUID を使用するため、起動のたびに同じ
    /// 商品 ID で注文を送信できる。
    #[must_use]
    pub fn demo() -> Self {
        Self::new(
            Arc::new(demo_catalog()),
            Arc::new(InMemoryOrderStore::new()),
            Arc::new(StubPaymentGateway::new()),
        )
    }

    /// メニューカタログへの参照を返す
    #[must_use]
    pub fn catalog(&self) -> &MenuCatalog {
        &self.catalog
    }

    /// 注文ストアへの参照を返す
    #[must_use]
    pub fn store(&self) -> &dyn OrderStore {
        self.store.as_ref()
    }

    /// 決済ゲートウェイへの参照を返す
    #[must_use]
    pub fn gateway(&self) -> &dyn PaymentGateway {
        self.gateway.as_ref()
    }
}

// =============================================================================
// demo_catalog
// =============================================================================

/// デモ用メニュー商品の定義
///
/// (固定 UUID, カテゴリ, 名前, 基本価格, サイズ可, ミルク可, ショット上限, 表示順)
const DEMO_ITEMS: [(u128, MenuCategory, &str, &str, bool, bool, u32, u32); 5] = [
    (1, MenuCategory::Coffee, "Espresso", "3.00", false, false, 2, 1),
    (2, MenuCategory::Coffee, "Caffè Latte", "4.50", true, true, 3, 2),
    (3, MenuCategory::Coffee, "Cappuccino", "4.25", true, true, 3, 3),
    (4, MenuCategory::Tea, "Matcha Latte", "5.00", true, true, 0, 1),
    (5, MenuCategory::Pastry, "Butter Croissant", "3.50", false, false, 0, 1),
];

/// デモ用のサイズ価格調整の定義
///
/// (商品 UUID, サイズ, 調整額)
const DEMO_SIZE_PRICING: [(u128, DrinkSize, &str); 6] = [
    (2, DrinkSize::Small, "-0.50"),
    (2, DrinkSize::Large, "1.00"),
    (3, DrinkSize::Small, "-0.50"),
    (3, DrinkSize::Large, "1.00"),
    (4, DrinkSize::Small, "-0.75"),
    (4, DrinkSize::Large, "1.25"),
];

/// デモ用のメニューカタログを構築する
#[must_use]
pub fn demo_catalog() -> MenuCatalog {
    let with_items = DEMO_ITEMS.iter().fold(
        MenuCatalog::new(),
        |catalog,
         (id, category, name, base_price, has_size_options, has_milk_options, max_extra_shots, sort_order)| {
            catalog.with_item(MenuItem::new(
                MenuItemId::from_uuid(Uuid::from_u128(*id)),
                *category,
                String50::create("Name", name)
                    .unwrap_or_else(|error| panic!("Invalid demo item name: {error}")),
                Price::create(
                    Decimal::from_str(base_price).expect("Valid decimal literal"),
                )
                .unwrap_or_else(|error| panic!("Invalid demo base price: {error}")),
                true,
                *has_size_options,
                *has_milk_options,
                *max_extra_shots,
                *sort_order,
            ))
        },
    );

    DEMO_SIZE_PRICING
        .iter()
        .fold(with_items, |catalog, (id, size, modifier)| {
            catalog.with_size_pricing(SizePricing::new(
                MenuItemId::from_uuid(Uuid::from_u128(*id)),
                *size,
                PriceModifier::create(
                    Decimal::from_str(modifier).expect("Valid decimal literal"),
                )
                .unwrap_or_else(|error| panic!("Invalid demo size modifier: {error}")),
            ))
        })
}

// =============================================================================
// Tests
// =============================================================================
