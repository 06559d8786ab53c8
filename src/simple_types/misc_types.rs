//! 列挙型の定義
//!
//! `DrinkSize`, `MilkType`, `PaymentMethod`, `PaymentStatus`,
//! `OrderStatus` を定義する。

use super::error::ValidationError;

// =============================================================================
// DrinkSize
// =============================================================================

/// ドリンクのサイズを表す列挙型
///
/// # Examples
///
/// ```
/// use cafe_ordering::simple_types::DrinkSize;
///
/// let size = DrinkSize::create("Size", "medium").unwrap();
/// assert_eq!(size, DrinkSize::Medium);
///
/// // 無効な値はエラー
/// assert!(DrinkSize::create("Size", "grande").is_err());
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum DrinkSize {
    /// スモール
    Small,
    /// ミディアム
    Medium,
    /// ラージ
    Large,
}

impl DrinkSize {
    /// 文字列から `DrinkSize` を生成する
    ///
    /// "small", "Small", "medium", "Medium", "large", "Large" を受け入れる。
    ///
    /// # Arguments
    ///
    /// * `field_name` - エラーメッセージに使用するフィールド名
    /// * `value` - 入力文字列
    ///
    /// # Errors
    ///
    /// 受け入れ可能な表記以外の場合に `ValidationError` を返す。
    pub fn create(field_name: &str, value: &str) -> Result<Self, ValidationError> {
        match value {
            "small" | "Small" => Ok(Self::Small),
            "medium" | "Medium" => Ok(Self::Medium),
            "large" | "Large" => Ok(Self::Large),
            _ => Err(ValidationError::new(
                field_name,
                "Must be one of 'small', 'medium', 'large'",
            )),
        }
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
    /// 空でない入力が受け入れ可能な表記以外の場合に `ValidationError` を返す。
    pub fn create_option(field_name: &str, value: &str) -> Result<Option<Self>, ValidationError> {
        if value.is_empty() {
            Ok(None)
        } else {
            Self::create(field_name, value).map(Some)
        }
    }

    /// `DrinkSize` を文字列として返す
    #[must_use]
    pub const fn value(&self) -> &'static str {
        match self {
            Self::Small => "small",
            Self::Medium => "medium",
            Self::Large => "large",
        }
    }
}

// =============================================================================
// MilkType
// =============================================================================

/// ミルクの種類を表す列挙型
///
/// # Examples
///
/// ```
/// use cafe_ordering::simple_types::MilkType;
///
/// let milk = MilkType::create("MilkType", "oat").unwrap();
/// assert_eq!(milk, MilkType::Oat);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum MilkType {
    /// 牛乳
    Whole,
    /// 無脂肪乳
    Skim,
    /// オーツミルク
    Oat,
    /// 豆乳
    Soy,
    /// アーモンドミルク
    Almond,
}

impl MilkType {
    /// 文字列から `MilkType` を生成する
    ///
    /// "whole", "skim", "oat", "soy", "almond"（および先頭大文字）を受け入れる。
    ///
    /// # Arguments
    ///
    /// * `field_name` - エラーメッセージに使用するフィールド名
    /// * `value` - 入力文字列
    ///
    /// # Errors
    ///
    /// 受け入れ可能な表記以外の場合に `ValidationError` を返す。
    pub fn create(field_name: &str, value: &str) -> Result<Self, ValidationError> {
        match value {
            "whole" | "Whole" => Ok(Self::Whole),
            "skim" | "Skim" => Ok(Self::Skim),
            "oat" | "Oat" => Ok(Self::Oat),
            "soy" | "Soy" => Ok(Self::Soy),
            "almond" | "Almond" => Ok(Self::Almond),
            _ => Err(ValidationError::new(
                field_name,
                "Must be one of 'whole', 'skim', 'oat', 'soy', 'almond'",
            )),
        }
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
    /// 空でない入力が受け入れ可能な表記以外の場合に `ValidationError` を返す。
    pub fn create_option(field_name: &str, value: &str) -> Result<Option<Self>, ValidationError> {
        if value.is_empty() {
            Ok(None)
        } else {
            Self::create(field_name, value).map(Some)
        }
    }

    /// `MilkType` を文字列として返す
    #[must_use]
    pub const fn value(&self) -> &'static str {
        match self {
            Self::Whole => "whole",
            Self::Skim => "skim",
            Self::Oat => "oat",
            Self::Soy => "soy",
            Self::Almond => "almond",
        }
    }
}

// =============================================================================
// PaymentMethod
// =============================================================================

/// 支払い方法を表す列挙型
///
/// # Examples
///
/// ```
/// use cafe_ordering::simple_types::PaymentMethod;
///
/// let method = PaymentMethod::create("PaymentMethod", "cash").unwrap();
/// assert_eq!(method, PaymentMethod::Cash);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PaymentMethod {
    /// 現金
    Cash,
    /// QR コード決済
    QrCode,
    /// クレジットカード
    CreditCard,
    /// モバイルウォレット
    MobileWallet,
}

impl PaymentMethod {
    /// 文字列から `PaymentMethod` を生成する
    ///
    /// "cash", "qr_code", "credit_card", "mobile_wallet" を受け入れる。
    ///
    /// # Arguments
    ///
    /// * `field_name` - エラーメッセージに使用するフィールド名
    /// * `value` - 入力文字列
    ///
    /// # Errors
    ///
    /// 受け入れ可能な表記以外の場合に `ValidationError` を返す。
    pub fn create(field_name: &str, value: &str) -> Result<Self, ValidationError> {
        match value {
            "cash" | "Cash" => Ok(Self::Cash),
            "qr_code" | "QrCode" => Ok(Self::QrCode),
            "credit_card" | "CreditCard" => Ok(Self::CreditCard),
            "mobile_wallet" | "MobileWallet" => Ok(Self::MobileWallet),
            _ => Err(ValidationError::new(
                field_name,
                "Must be one of 'cash', 'qr_code', 'credit_card', 'mobile_wallet'",
            )),
        }
    }

    /// `PaymentMethod` を文字列として返す
    #[must_use]
    pub const fn value(&self) -> &'static str {
        match self {
            Self::Cash => "cash",
            Self::QrCode => "qr_code",
            Self::CreditCard => "credit_card",
            Self::MobileWallet => "mobile_wallet",
        }
    }
}

// =============================================================================
// PaymentStatus
// =============================================================================

/// 支払い処理の結果を表す列挙型
///
/// # Examples
///
/// ```
/// use cafe_ordering::simple_types::PaymentStatus;
///
/// assert_eq!(PaymentStatus::Completed.value(), "completed");
/// assert_eq!(PaymentStatus::Processing.value(), "processing");
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PaymentStatus {
    /// 決済完了
    Completed,
    /// 処理中
    Processing,
}

impl PaymentStatus {
    /// `PaymentStatus` を文字列として返す
    #[must_use]
    pub const fn value(&self) -> &'static str {
        match self {
            Self::Completed => "completed",
            Self::Processing => "processing",
        }
    }
}

// =============================================================================
// OrderStatus
// =============================================================================

/// 注文のライフサイクル状態を表す列挙型
///
/// 状態遷移は次の通り。`cancelled` は終端以外の全状態から到達できる。
///
/// ```text
/// pending -> confirmed -> preparing -> ready -> completed
///     \----------\-----------\----------\----> cancelled
/// ```
///
/// # Examples
///
/// ```
/// use cafe_ordering::simple_types::OrderStatus;
///
/// assert!(OrderStatus::Pending.can_transition_to(OrderStatus::Confirmed));
/// assert!(OrderStatus::Ready.can_transition_to(OrderStatus::Cancelled));
/// assert!(!OrderStatus::Completed.can_transition_to(OrderStatus::Cancelled));
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum OrderStatus {
    /// 受付済み（初期状態）
    Pending,
    /// 確認済み
    Confirmed,
    /// 調理中
    Preparing,
    /// 受け渡し可能
    Ready,
    /// 完了（終端）
    Completed,
    /// キャンセル（終端）
    Cancelled,
}

impl OrderStatus {
    /// 文字列から `OrderStatus` を生成する
    ///
    /// # Arguments
    ///
    /// * `field_name` - エラーメッセージに使用するフィールド名
    /// * `value` - 入力文字列
    ///
    /// # Errors
    ///
    /// 受け入れ可能な表記以外の場合に `ValidationError` を返す。
    pub fn create(field_name: &str, value: &str) -> Result<Self, ValidationError> {
        match value {
            "pending" | "Pending" => Ok(Self::Pending),
            "confirmed" | "Confirmed" => Ok(Self::Confirmed),
            "preparing" | "Preparing" => Ok(Self::Preparing),
            "ready" | "Ready" => Ok(Self::Ready),
            "completed" | "Completed" => Ok(Self::Completed),
            "cancelled" | "Cancelled" => Ok(Self::Cancelled),
            _ => Err(ValidationError::new(
                field_name,
                "Must be one of 'pending', 'confirmed', 'preparing', 'ready', 'completed', 'cancelled'",
            )),
        }
    }

    /// `OrderStatus` を文字列として返す
    #[must_use]
    pub const fn value(&self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Confirmed => "confirmed",
            Self::Preparing => "preparing",
            Self::Ready => "ready",
            Self::Completed => "completed",
            Self::Cancelled => "cancelled",
        }
    }

    /// 終端状態かどうかを返す
    #[must_use]
    pub const fn is_terminal(&self) -> bool {
        matches!(self, Self::Completed | Self::Cancelled)
    }

    /// `next` への遷移が許可されているかどうかを返す
    #[must_use]
    pub const fn can_transition_to(&self, next: Self) -> bool {
        match (self, next) {
            (Self::Pending, Self::Confirmed)
            | (Self::Confirmed, Self::Preparing)
            | (Self::Preparing, Self::Ready)
            | (Self::Ready, Self::Completed) => true,
            (current, Self::Cancelled) => !current.is_terminal(),
            _ => false,
        }
    }
}

// =============================================================================
// Tests
// =============================================================================
