//! カフェ注文ドメインで使用する基本型（Simple Types）
//!
//! Smart Constructor パターンを Rust の newtype パターンで実現し、
//! バリデーション済みの値のみを保持することを保証する。
//!
//! # 型カテゴリ
//!
//! - **文字列制約型**: `String50`, `PhoneNumber`, `SpecialInstructions`
//! - **ID 型**: `MenuItemId`, `OrderId`, `OrderNumber`
//! - **数量型**: `OrderQuantity`, `ExtraShots`
//! - **金額型**: `Price`, `PriceModifier`, `BillingAmount`
//! - **列挙型**: `DrinkSize`, `MilkType`, `PaymentMethod`, `PaymentStatus`, `OrderStatus`
//!
//! # 使用例
//!
//! ```
//! use cafe_ordering::simple_types::{OrderQuantity, Price, String50};
//! use rust_decimal::Decimal;
//! use std::str::FromStr;
//!
//! // 商品名の生成（バリデーション付き）
//! let name = String50::create("Name", "Cappuccino").unwrap();
//! assert_eq!(name.value(), "Cappuccino");
//!
//! // 数量と価格の生成
//! let quantity = OrderQuantity::create("Quantity", 2).unwrap();
//! let price = Price::create(Decimal::from_str("4.50").unwrap()).unwrap();
//! assert_eq!(quantity.as_decimal() * price.value(), Decimal::from_str("9.00").unwrap());
//! ```

pub mod constrained_type;
mod error;
mod identifier_types;
mod misc_types;
mod price_types;
mod quantity_types;
mod string_types;

// =============================================================================
// 型の再エクスポート
// =============================================================================

// エラー型
pub use error::ValidationError;

// 文字列型
pub use string_types::{PhoneNumber, SpecialInstructions, String50};

// ID 型
pub use identifier_types::{MenuItemId, OrderId, OrderNumber};

// 数量型
pub use quantity_types::{ExtraShots, OrderQuantity};

// 金額型
pub use price_types::{BillingAmount, Price, PriceModifier};

// 列挙型
pub use misc_types::{DrinkSize, MilkType, OrderStatus, PaymentMethod, PaymentStatus};
