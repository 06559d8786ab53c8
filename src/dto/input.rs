//! 入力 DTO
//!
//! API リクエストのデシリアライズに使用する DTO 型を定義する。
//!
//! # 型一覧
//!
//! - [`OrderFormLineDto`] - 注文明細 DTO
//! - [`OrderFormDto`] - 注文フォーム DTO
//! - [`StatusUpdateDto`] - ステータス更新 DTO

use serde::{Deserialize, Serialize};

use crate::workflow::{UnvalidatedOrder, UnvalidatedOrderLine};

// =============================================================================
// OrderFormLineDto
// =============================================================================

/// 注文明細 DTO
///
/// API から受け取るカート明細をデシリアライズするための型。
/// オプショナルなカスタマイズは省略可能で、省略時は空文字列または 0 になる。
///
/// # Examples
///
/// ```
/// use cafe_ordering::dto::OrderFormLineDto;
///
/// let json = r#"{
///     "menu_item_id": "9b2cbc6e-3cb1-4b8c-9c2a-5f8d7a0e4b10",
///     "quantity": 2,
///     "size": "large",
///     "extra_shots": 1
/// }"#;
///
/// let dto: OrderFormLineDto = serde_json::from_str(json).unwrap();
/// assert_eq!(dto.quantity, 2);
/// assert_eq!(dto.milk_type, "");
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderFormLineDto {
    /// 商品 ID
    pub menu_item_id: String,
    /// 数量
    pub quantity: u32,
    /// サイズ（省略可）
    #[serde(default)]
    pub size: String,
    /// ミルクの種類（省略可）
    #[serde(default)]
    pub milk_type: String,
    /// エクストラショット数（省略可、既定値 0）
    #[serde(default)]
    pub extra_shots: u32,
    /// 明細ごとの指示（省略可）
    #[serde(default)]
    pub special_instructions: String,
}

impl OrderFormLineDto {
    /// `UnvalidatedOrderLine` に変換する
    ///
    /// 純粋関数としてドメイン型に変換する。バリデーションは行わない。
    #[must_use]
    pub fn to_unvalidated_line(&self) -> UnvalidatedOrderLine {
        UnvalidatedOrderLine::new(
            self.menu_item_id.clone(),
            self.quantity,
            self.size.clone(),
            self.milk_type.clone(),
            self.extra_shots,
            self.special_instructions.clone(),
        )
    }
}

// =============================================================================
// OrderFormDto
// =============================================================================

/// 注文フォーム DTO
///
/// API から受け取る注文全体をデシリアライズするための型。
///
/// # Examples
///
/// ```
/// use cafe_ordering::dto::OrderFormDto;
///
/// let json = r#"{
///     "customer_name": "Aiko",
///     "payment_method": "cash",
///     "lines": [
///         {"menu_item_id": "9b2cbc6e-3cb1-4b8c-9c2a-5f8d7a0e4b10", "quantity": 1}
///     ]
/// }"#;
///
/// let dto: OrderFormDto = serde_json::from_str(json).unwrap();
/// assert_eq!(dto.lines.len(), 1);
/// assert_eq!(dto.customer_phone, "");
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderFormDto {
    /// 顧客名（省略可）
    #[serde(default)]
    pub customer_name: String,
    /// 顧客電話番号（省略可）
    #[serde(default)]
    pub customer_phone: String,
    /// 注文全体の指示（省略可）
    #[serde(default)]
    pub special_instructions: String,
    /// 支払い方法
    pub payment_method: String,
    /// カート明細
    pub lines: Vec<OrderFormLineDto>,
}

impl OrderFormDto {
    /// `UnvalidatedOrder` に変換する
    ///
    /// 純粋関数としてドメイン型に変換する。バリデーションは行わない。
    ///
    /// # Examples
    ///
    /// ```
    /// use cafe_ordering::dto::{OrderFormDto, OrderFormLineDto};
    ///
    /// let dto = OrderFormDto {
    ///     customer_name: "Aiko".to_string(),
    ///     customer_phone: String::new(),
    ///     special_instructions: String::new(),
    ///     payment_method: "cash".to_string(),
    ///     lines: vec![],
    /// };
    ///
    /// let unvalidated = dto.to_unvalidated_order();
    /// assert_eq!(unvalidated.customer_name(), "Aiko");
    /// ```
    #[must_use]
    pub fn to_unvalidated_order(&self) -> UnvalidatedOrder {
        UnvalidatedOrder::new(
            self.customer_name.clone(),
            self.customer_phone.clone(),
            self.special_instructions.clone(),
            self.payment_method.clone(),
            self.lines
                .iter()
                .map(OrderFormLineDto::to_unvalidated_line)
                .collect(),
        )
    }
}

// =============================================================================
// StatusUpdateDto
// =============================================================================

/// ステータス更新 DTO
///
/// # Examples
///
/// ```
/// use cafe_ordering::dto::StatusUpdateDto;
///
/// let dto: StatusUpdateDto = serde_json::from_str(r#"{"status": "confirmed"}"#).unwrap();
/// assert_eq!(dto.status, "confirmed");
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusUpdateDto {
    /// 要求するステータス
    pub status: String,
}
