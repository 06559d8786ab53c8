//! `PlaceOrder` ワークフロー
//!
//! ワークフロー全体を統合する。
//!
//! # 設計原則
//!
//! - 依存性注入: 全ての外部依存（カタログ参照・永続化）を関数引数として受け取る
//! - エラーハンドリング: `Result` と `?` による逐次的なエラー伝播
//! - 原子性: バリデーションと価格計算が全て成功した場合のみ永続化を呼び出す
//!
//! # 機能一覧
//!
//! - [`place_order`] - `PlaceOrder` ワークフローの実行

use chrono::Utc;

use crate::catalog::MenuItem;
use crate::simple_types::{DrinkSize, MenuItemId, OrderId, OrderNumber, PriceModifier};
use crate::store::PersistenceError;
use crate::workflow::error_types::PlaceOrderError;
use crate::workflow::placed_types::PlacedOrder;
use crate::workflow::pricing::price_order;
use crate::workflow::unvalidated_types::UnvalidatedOrder;
use crate::workflow::validation::validate_order;

// =============================================================================
// place_order
// =============================================================================

/// `PlaceOrder` ワークフロー全体を統合する関数
///
/// 未検証注文を受け取り、検証・価格計算・永続化を順次実行して
/// 永続化された注文またはエラーを返す。
///
/// # 処理フロー
///
/// 1. `validate_order` - 未検証注文を検証（エラー: Validation / NotFound /
///    Unavailable / LimitExceeded）
/// 2. `price_order` - 価格計算（エラー: Pricing）
/// 3. 注文 ID・注文番号・タイムスタンプを生成し、`pending` 状態の
///    [`PlacedOrder`] を組み立てる
/// 4. `insert_order` - 注文と明細を単一の原子的な書き込みで永続化
///    （エラー: Persistence）
///
/// 途中でエラーになった場合、永続化は一切行われない。
///
/// # Type Parameters
///
/// * `LookupMenuItem` - 商品参照関数型
/// * `LookupSizeModifier` - サイズ価格参照関数型
/// * `InsertOrder` - 注文永続化関数型
///
/// # Arguments
///
/// * `lookup_menu_item` - 商品 ID から商品を解決する関数
/// * `lookup_size_modifier` - (商品, サイズ) の価格調整を解決する関数
/// * `insert_order` - 注文と明細を原子的に書き込む関数
/// * `unvalidated_order` - 未検証注文
///
/// # Returns
///
/// * `Ok(PlacedOrder)` - 永続化された注文（生成された ID・注文番号・
///   計算済みの合計金額を含む）
/// * `Err(PlaceOrderError)` - 検証・価格計算・永続化のいずれかの失敗
///
/// # Errors
///
/// [`PlaceOrderError`] の各バリアントを参照。
///
/// # Examples
///
/// ```
/// use cafe_ordering::catalog::{MenuCatalog, MenuCategory, MenuItem};
/// use cafe_ordering::simple_types::{MenuItemId, OrderStatus, Price, String50};
/// use cafe_ordering::store::{InMemoryOrderStore, OrderStore};
/// use cafe_ordering::workflow::{place_order, UnvalidatedOrder, UnvalidatedOrderLine};
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
/// use uuid::Uuid;
///
/// let espresso_id = MenuItemId::from_uuid(Uuid::from_u128(1));
/// let catalog = MenuCatalog::new().with_item(MenuItem::new(
///     espresso_id,
///     MenuCategory::Coffee,
///     String50::create("Name", "Espresso").unwrap(),
///     Price::create(Decimal::from_str("3.00").unwrap()).unwrap(),
///     true,
///     false,
///     false,
///     2,
///     1,
/// ));
/// let store = InMemoryOrderStore::new();
///
/// let order = UnvalidatedOrder::new(
///     String::new(),
///     String::new(),
///     String::new(),
///     "cash".to_string(),
///     vec![UnvalidatedOrderLine::new(
///         espresso_id.value().to_string(),
///         1,
///         String::new(),
///         String::new(),
///         0,
///         String::new(),
///     )],
/// );
///
/// let placed = place_order(
///     &|id| catalog.find_item(id).cloned(),
///     &|id, size| catalog.size_modifier(id, size),
///     &|order| store.insert(order),
///     &order,
/// )
/// .unwrap();
///
/// assert_eq!(placed.status(), OrderStatus::Pending);
/// assert_eq!(store.count(), 1);
/// ```
pub fn place_order<LookupMenuItem, LookupSizeModifier, InsertOrder>(
    lookup_menu_item: &LookupMenuItem,
    lookup_size_modifier: &LookupSizeModifier,
    insert_order: &InsertOrder,
    unvalidated_order: &UnvalidatedOrder,
) -> Result<PlacedOrder, PlaceOrderError>
where
    LookupMenuItem: Fn(&MenuItemId) -> Option<MenuItem>,
    LookupSizeModifier: Fn(&MenuItemId, DrinkSize) -> Option<PriceModifier>,
    InsertOrder: Fn(&PlacedOrder) -> Result<(), PersistenceError>,
{
    // Step 1: バリデーション
    let validated_order = validate_order(lookup_menu_item, unvalidated_order)?;

    // Step 2: 価格計算
    let priced_order = price_order(lookup_size_modifier, &validated_order)?;

    // Step 3: 永続化する形に組み立てる
    let placed_order = PlacedOrder::from_priced_order(
        &priced_order,
        OrderId::generate(),
        OrderNumber::generate(),
        Utc::now(),
    );

    // Step 4: 原子的な書き込み
    insert_order(&placed_order)?;

    Ok(placed_order)
}
