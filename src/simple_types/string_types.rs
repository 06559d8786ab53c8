//! 文字列制約型の定義
//!
//! `String50`, `PhoneNumber`, `SpecialInstructions` を定義する。

use regex::Regex;
use std::sync::LazyLock;

use super::constrained_type;
use super::error::ValidationError;

// =============================================================================
// String50
// =============================================================================

/// 最大50文字の文字列型
///
/// 商品名や顧客名など、短い表示用文字列に使用する。
///
/// # Examples
///
/// ```
/// use cafe_ordering::simple_types::String50;
///
/// let name = String50::create("Name", "Caffè Latte").unwrap();
/// assert_eq!(name.value(), "Caffè Latte");
///
/// // 空文字列はエラー
/// assert!(String50::create("Name", "").is_err());
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct String50(String);

/// `String50` の最大文字数
const STRING50_MAX_LENGTH: usize = 50;

impl String50 {
    /// 文字列から `String50` を生成する
    ///
    /// # Arguments
    ///
    /// * `field_name` - エラーメッセージに使用するフィールド名
    /// * `value` - 入力文字列
    ///
    /// # Errors
    ///
    /// 空文字列または50文字を超える場合に `ValidationError` を返す。
    pub fn create(field_name: &str, value: &str) -> Result<Self, ValidationError> {
        constrained_type::create_string(field_name, String50, STRING50_MAX_LENGTH, value)
    }

    /// 空文字列の場合は None を返し、それ以外はバリデーションを行う
    ///
    /// オプショナルなフィールドに使用する。
    ///
    /// # Arguments
    ///
    /// * `field_name` - エラーメッセージに使用するフィールド名
    /// * `value` - 入力文字列
    ///
    /// # Errors
    ///
    /// 50文字を超える場合に `ValidationError` を返す。
    pub fn create_option(field_name: &str, value: &str) -> Result<Option<Self>, ValidationError> {
        constrained_type::create_string_option(field_name, String50, STRING50_MAX_LENGTH, value)
    }

    /// 内部の文字列値への参照を返す
    #[must_use]
    pub fn value(&self) -> &str {
        &self.0
    }
}

// =============================================================================
// PhoneNumber
// =============================================================================

/// 電話番号パターン（先頭に任意の + 、数字・スペース・ハイフンで7〜20文字）
static PHONE_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\+?[0-9][0-9 \-]{6,19}$").expect("Invalid phone regex pattern"));

/// 電話番号を表す文字列型
///
/// 数字・スペース・ハイフンと先頭の `+` のみを受け入れる。
///
/// # Examples
///
/// ```
/// use cafe_ordering::simple_types::PhoneNumber;
///
/// let phone = PhoneNumber::create("Phone", "090-1234-5678").unwrap();
/// assert_eq!(phone.value(), "090-1234-5678");
///
/// // 形式が不正な場合はエラー
/// assert!(PhoneNumber::create("Phone", "not-a-phone").is_err());
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct PhoneNumber(String);

impl PhoneNumber {
    /// 文字列から `PhoneNumber` を生成する
    ///
    /// # Arguments
    ///
    /// * `field_name` - エラーメッセージに使用するフィールド名
    /// * `value` - 入力文字列
    ///
    /// # Errors
    ///
    /// 電話番号パターンに一致しない場合に `ValidationError` を返す。
    pub fn create(field_name: &str, value: &str) -> Result<Self, ValidationError> {
        constrained_type::create_like(field_name, PhoneNumber, &PHONE_PATTERN, value)
    }

    /// 空文字列の場合は None を返し、それ以外はバリデーションを行う
    ///
    /// # Arguments
    ///
    /// * `field_name` - エラーメッセージに使用するフィールド名
    /// * `value` - 入力文字列
    ///
    /// # Errors
    ///
    /// 空でない入力が電話番号パターンに一致しない場合に `ValidationError` を返す。
    pub fn create_option(field_name: &str, value: &str) -> Result<Option<Self>, ValidationError> {
        if value.is_empty() {
            Ok(None)
        } else {
            Self::create(field_name, value).map(Some)
        }
    }

    /// 内部の電話番号文字列への参照を返す
    #[must_use]
    pub fn value(&self) -> &str {
        &self.0
    }
}

// =============================================================================
// SpecialInstructions
// =============================================================================

/// 注文・明細に添える自由記述の指示
///
/// 最大500文字。注文全体と明細行の両方で使用する。
///
/// # Examples
///
/// ```
/// use cafe_ordering::simple_types::SpecialInstructions;
///
/// let note = SpecialInstructions::create("SpecialInstructions", "Extra hot, no foam").unwrap();
/// assert_eq!(note.value(), "Extra hot, no foam");
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct SpecialInstructions(String);

/// `SpecialInstructions` の最大文字数
const SPECIAL_INSTRUCTIONS_MAX_LENGTH: usize = 500;

impl SpecialInstructions {
    /// 文字列から `SpecialInstructions` を生成する
    ///
    /// # Arguments
    ///
    /// * `field_name` - エラーメッセージに使用するフィールド名
    /// * `value` - 入力文字列
    ///
    /// # Errors
    ///
    /// 空文字列または500文字を超える場合に `ValidationError` を返す。
    pub fn create(field_name: &str, value: &str) -> Result<Self, ValidationError> {
        constrained_type::create_string(
            field_name,
            SpecialInstructions,
            SPECIAL_INSTRUCTIONS_MAX_LENGTH,
            value,
        )
    }

    /// 空文字列の場合は None を返し、それ以外はバリデーションを行う
    ///
    /// # Arguments
    ///
    /// * `field_name` - エラーメッセージに使用するフィールド名
    /// * `value` - 入力文字列
    ///
    /// # Errors
    ///
    /// 500文字を超える場合に `ValidationError` を返す。
    pub fn create_option(field_name: &str, value: &str) -> Result<Option<Self>, ValidationError> {
        constrained_type::create_string_option(
            field_name,
            SpecialInstructions,
            SPECIAL_INSTRUCTIONS_MAX_LENGTH,
            value,
        )
    }

    /// 内部の文字列値への参照を返す
    #[must_use]
    pub fn value(&self) -> &str {
        &self.0
    }
}

// =============================================================================
// Tests
// =============================================================================
