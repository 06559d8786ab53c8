//! ワークフローエラー型
//!
//! `PlaceOrder` ワークフローで発生するエラーを型安全に表現する。
//!
//! # 型一覧
//!
//! - [`PricingError`] - 価格計算時のエラー
//! - [`PlaceOrderError`] - ワークフロー全体のエラー

use thiserror::Error;

use crate::simple_types::{MenuItemId, ValidationError};
use crate::store::PersistenceError;

// =============================================================================
// PricingError
// =============================================================================

/// 価格計算時のエラー
///
/// 計算結果が金額型の範囲外になった場合などに使用する。
///
/// # Examples
///
/// ```
/// use cafe_ordering::workflow::PricingError;
///
/// let error = PricingError::new("BillingAmount: Must not be greater than 100000.00");
/// assert!(error.message().contains("100000.00"));
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Error)]
#[error("Pricing error: {message}")]
pub struct PricingError {
    message: String,
}

impl PricingError {
    /// 新しい `PricingError` を生成する
    ///
    /// # Arguments
    ///
    /// * `message` - エラーメッセージ
    #[must_use]
    pub fn new(message: &str) -> Self {
        Self {
            message: message.to_string(),
        }
    }

    /// エラーメッセージへの参照を返す
    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }
}

// =============================================================================
// PlaceOrderError
// =============================================================================

/// `PlaceOrder` ワークフロー全体のエラー
///
/// バリデーションエラーはユーザー向けメッセージを組み立てられるだけの
/// コンテキスト（商品名・上限値など）を保持する。永続化エラーは
/// ストレージ層の詳細を持つが、API 境界では不透明なメッセージに変換される。
///
/// # Examples
///
/// ```
/// use cafe_ordering::workflow::PlaceOrderError;
///
/// let error = PlaceOrderError::unavailable("Caffè Latte");
/// assert!(error.is_unavailable());
/// assert_eq!(error.to_string(), "Menu item is not available: Caffè Latte");
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum PlaceOrderError {
    /// 入力値の検証エラー
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    /// 参照された商品が存在しない
    #[error("Menu item not found: {menu_item_id}")]
    NotFound {
        /// 見つからなかった商品 ID
        menu_item_id: String,
    },

    /// 商品は存在するが現在注文できない
    #[error("Menu item is not available: {name}")]
    Unavailable {
        /// 商品名
        name: String,
    },

    /// エクストラショット数が商品の上限を超えている
    #[error("Extra shot limit exceeded for {name}: maximum is {max_extra_shots}")]
    LimitExceeded {
        /// 商品名
        name: String,
        /// 商品に設定された上限
        max_extra_shots: u32,
    },

    /// 価格計算時のエラー
    #[error("Pricing error: {0}")]
    Pricing(#[from] PricingError),

    /// ストレージ層のエラー
    #[error("Persistence error: {0}")]
    Persistence(#[from] PersistenceError),
}

impl PlaceOrderError {
    /// `NotFound` エラーを生成する
    ///
    /// # Arguments
    ///
    /// * `menu_item_id` - 見つからなかった商品 ID
    #[must_use]
    pub fn not_found(menu_item_id: &MenuItemId) -> Self {
        Self::NotFound {
            menu_item_id: menu_item_id.value().to_string(),
        }
    }

    /// `Unavailable` エラーを生成する
    ///
    /// # Arguments
    ///
    /// * `name` - 商品名
    #[must_use]
    pub fn unavailable(name: &str) -> Self {
        Self::Unavailable {
            name: name.to_string(),
        }
    }

    /// `LimitExceeded` エラーを生成する
    ///
    /// # Arguments
    ///
    /// * `name` - 商品名
    /// * `max_extra_shots` - 商品に設定された上限
    #[must_use]
    pub fn limit_exceeded(name: &str, max_extra_shots: u32) -> Self {
        Self::LimitExceeded {
            name: name.to_string(),
            max_extra_shots,
        }
    }

    /// バリデーションエラーかどうかを返す
    #[must_use]
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }

    /// `NotFound` エラーかどうかを返す
    #[must_use]
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }

    /// `Unavailable` エラーかどうかを返す
    #[must_use]
    pub fn is_unavailable(&self) -> bool {
        matches!(self, Self::Unavailable { .. })
    }

    /// `LimitExceeded` エラーかどうかを返す
    #[must_use]
    pub fn is_limit_exceeded(&self) -> bool {
        matches!(self, Self::LimitExceeded { .. })
    }

    /// 永続化エラーかどうかを返す
    #[must_use]
    pub fn is_persistence(&self) -> bool {
        matches!(self, Self::Persistence(_))
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use uuid::Uuid;

    #[rstest]
    fn test_not_found_carries_item_id() {
        let id = MenuItemId::from_uuid(Uuid::from_u128(7));
        let error = PlaceOrderError::not_found(&id);

        assert!(error.is_not_found());
        assert!(error.to_string().contains(&id.value().to_string()));
    }

    #[rstest]
    fn test_limit_exceeded_carries_context() {
        let error = PlaceOrderError::limit_exceeded("Caffè Latte", 3);

        assert!(error.is_limit_exceeded());
        assert_eq!(
            error.to_string(),
            "Extra shot limit exceeded for Caffè Latte: maximum is 3"
        );
    }

    #[rstest]
    fn test_validation_error_converts_via_from() {
        let error: PlaceOrderError = ValidationError::new("Quantity", "Must not be less than 1").into();

        assert!(error.is_validation());
    }

    #[rstest]
    fn test_persistence_error_converts_via_from() {
        let error: PlaceOrderError =
            PersistenceError::duplicate_order_number("ORD-20260101000000-AAAAAA").into();

        assert!(error.is_persistence());
    }
}
