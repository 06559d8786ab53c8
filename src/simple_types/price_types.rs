//! 金額型の定義
//!
//! `Price`, `PriceModifier`, `BillingAmount` を定義する。

use rust_decimal::Decimal;
use std::str::FromStr;

use super::constrained_type;
use super::error::ValidationError;

// =============================================================================
// Price
// =============================================================================

/// 単価を表す小数型
///
/// 0.00から1000.00の範囲に制約される。
///
/// # Examples
///
/// ```
/// use cafe_ordering::simple_types::Price;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let price = Price::create(Decimal::from_str("4.50").unwrap()).unwrap();
/// assert_eq!(price.value(), Decimal::from_str("4.50").unwrap());
///
/// // 範囲外はエラー
/// assert!(Price::create(Decimal::from_str("-0.01").unwrap()).is_err());
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Price(Decimal);

impl Price {
    /// Price のフィールド名
    const FIELD_NAME: &'static str = "Price";

    /// Price の最小値を取得する
    fn min_value() -> Decimal {
        Decimal::ZERO
    }

    /// Price の最大値を取得する
    fn max_value() -> Decimal {
        Decimal::from_str("1000.00").expect("Valid decimal literal")
    }

    /// 小数から Price を生成する
    ///
    /// # Arguments
    ///
    /// * `value` - 入力小数
    ///
    /// # Errors
    ///
    /// 値が 0.00 未満または 1000.00 を超える場合に `ValidationError` を返す。
    pub fn create(value: Decimal) -> Result<Self, ValidationError> {
        constrained_type::create_decimal(
            Self::FIELD_NAME,
            Price,
            Self::min_value(),
            Self::max_value(),
            value,
        )
    }

    /// バリデーションなしで Price を生成する
    ///
    /// 値が有効であることが確実な場合のみ使用する。
    ///
    /// # Panics
    ///
    /// 範囲外の値が渡された場合に panic する。
    #[must_use]
    pub fn unsafe_create(value: Decimal) -> Self {
        Self::create(value)
            .unwrap_or_else(|error| panic!("Not expecting Price to be out of bounds: {error}"))
    }

    /// 内部の小数値を返す
    #[must_use]
    pub const fn value(&self) -> Decimal {
        self.0
    }
}

// =============================================================================
// PriceModifier
// =============================================================================

/// サイズによる価格調整額を表す符号付き小数型
///
/// -100.00から100.00の範囲に制約される。
/// 負の値は割引（small など）、正の値は割増（large など）を表す。
///
/// # Examples
///
/// ```
/// use cafe_ordering::simple_types::PriceModifier;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let discount = PriceModifier::create(Decimal::from_str("-0.50").unwrap()).unwrap();
/// assert_eq!(discount.value(), Decimal::from_str("-0.50").unwrap());
///
/// let surcharge = PriceModifier::create(Decimal::from_str("2.00").unwrap()).unwrap();
/// assert_eq!(surcharge.value(), Decimal::from_str("2.00").unwrap());
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct PriceModifier(Decimal);

impl PriceModifier {
    /// `PriceModifier` のフィールド名
    const FIELD_NAME: &'static str = "PriceModifier";

    /// `PriceModifier` の最小値を取得する
    fn min_value() -> Decimal {
        Decimal::from_str("-100.00").expect("Valid decimal literal")
    }

    /// `PriceModifier` の最大値を取得する
    fn max_value() -> Decimal {
        Decimal::from_str("100.00").expect("Valid decimal literal")
    }

    /// 小数から `PriceModifier` を生成する
    ///
    /// # Arguments
    ///
    /// * `value` - 入力小数
    ///
    /// # Errors
    ///
    /// 値が -100.00 未満または 100.00 を超える場合に `ValidationError` を返す。
    pub fn create(value: Decimal) -> Result<Self, ValidationError> {
        constrained_type::create_decimal(
            Self::FIELD_NAME,
            PriceModifier,
            Self::min_value(),
            Self::max_value(),
            value,
        )
    }

    /// バリデーションなしで `PriceModifier` を生成する
    ///
    /// # Panics
    ///
    /// 範囲外の値が渡された場合に panic する。
    #[must_use]
    pub fn unsafe_create(value: Decimal) -> Self {
        Self::create(value).unwrap_or_else(|error| {
            panic!("Not expecting PriceModifier to be out of bounds: {error}")
        })
    }

    /// 内部の小数値を返す
    #[must_use]
    pub const fn value(&self) -> Decimal {
        self.0
    }
}

// =============================================================================
// BillingAmount
// =============================================================================

/// 請求金額を表す小数型
///
/// 0.00から100000.00の範囲に制約される。
/// 明細行の合計金額、および注文全体の小計・税額・合計に使用する。
///
/// # Examples
///
/// ```
/// use cafe_ordering::simple_types::BillingAmount;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let amount = BillingAmount::create(Decimal::from_str("19.50").unwrap()).unwrap();
/// assert_eq!(amount.value(), Decimal::from_str("19.50").unwrap());
///
/// // 範囲外はエラー
/// assert!(BillingAmount::create(Decimal::from_str("-1.00").unwrap()).is_err());
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct BillingAmount(Decimal);

impl BillingAmount {
    /// `BillingAmount` のフィールド名
    const FIELD_NAME: &'static str = "BillingAmount";

    /// `BillingAmount` の最小値を取得する
    fn min_value() -> Decimal {
        Decimal::ZERO
    }

    /// `BillingAmount` の最大値を取得する
    fn max_value() -> Decimal {
        Decimal::from_str("100000.00").expect("Valid decimal literal")
    }

    /// 小数から `BillingAmount` を生成する
    ///
    /// # Arguments
    ///
    /// * `value` - 入力小数
    ///
    /// # Errors
    ///
    /// 値が 0.00 未満または 100000.00 を超える場合に `ValidationError` を返す。
    pub fn create(value: Decimal) -> Result<Self, ValidationError> {
        constrained_type::create_decimal(
            Self::FIELD_NAME,
            BillingAmount,
            Self::min_value(),
            Self::max_value(),
            value,
        )
    }

    /// バリデーションなしで `BillingAmount` を生成する
    ///
    /// # Panics
    ///
    /// 範囲外の値が渡された場合に panic する。
    #[must_use]
    pub fn unsafe_create(value: Decimal) -> Self {
        Self::create(value).unwrap_or_else(|error| {
            panic!("Not expecting BillingAmount to be out of bounds: {error}")
        })
    }

    /// `BillingAmount` のスライスを合計して新しい `BillingAmount` を生成する
    ///
    /// # Arguments
    ///
    /// * `amounts` - `BillingAmount` のスライス
    ///
    /// # Errors
    ///
    /// 合計が 100000.00 を超える場合に `ValidationError` を返す。
    ///
    /// # Examples
    ///
    /// ```
    /// use cafe_ordering::simple_types::BillingAmount;
    /// use rust_decimal::Decimal;
    /// use std::str::FromStr;
    ///
    /// let amounts = vec![
    ///     BillingAmount::create(Decimal::from_str("5.00").unwrap()).unwrap(),
    ///     BillingAmount::create(Decimal::from_str("14.50").unwrap()).unwrap(),
    /// ];
    /// let total = BillingAmount::sum(&amounts).unwrap();
    /// assert_eq!(total.value(), Decimal::from_str("19.50").unwrap());
    /// ```
    pub fn sum(amounts: &[Self]) -> Result<Self, ValidationError> {
        let total = amounts
            .iter()
            .fold(Decimal::ZERO, |accumulator, amount| {
                accumulator + amount.value()
            });

        Self::create(total)
    }

    /// 内部の小数値を返す
    #[must_use]
    pub const fn value(&self) -> Decimal {
        self.0
    }
}

// =============================================================================
// Tests
// =============================================================================
