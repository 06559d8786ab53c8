//! Payment authorization capability
//!
//! Payment happens after an order is created and is deliberately kept
//! behind a trait with a single operation, so that a real gateway
//! integration can replace the deterministic stub without touching the
//! order-pricing core.

use crate::simple_types::{PaymentMethod, PaymentStatus};
use crate::workflow::PlacedOrder;

// =============================================================================
// PaymentGateway
// =============================================================================

/// Trait for payment gateway implementations
///
/// Implementations must be thread-safe (`Send + Sync`).
pub trait PaymentGateway: Send + Sync {
    /// Authorizes payment for a placed order
    ///
    /// # Arguments
    ///
    /// * `order` - The order to authorize payment for
    ///
    /// # Returns
    ///
    /// The resulting [`PaymentStatus`]
    fn authorize(&self, order: &PlacedOrder) -> PaymentStatus;
}

// =============================================================================
// StubPaymentGateway
// =============================================================================

/// Deterministic stand-in for a real payment gateway
///
/// Settlement-free methods (cash, QR code) are immediately `completed`;
/// everything else is left `processing`, the way an asynchronous card
/// network would.
///
/// # Examples
///
/// ```
/// use cafe_ordering::payment::StubPaymentGateway;
///
/// let gateway = StubPaymentGateway::new();
/// ```
#[derive(Clone, Copy, Debug, Default)]
pub struct StubPaymentGateway;

impl StubPaymentGateway {
    /// Creates a new stub gateway
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl PaymentGateway for StubPaymentGateway {
    fn authorize(&self, order: &PlacedOrder) -> PaymentStatus {
        match order.payment_method() {
            PaymentMethod::Cash | PaymentMethod::QrCode => PaymentStatus::Completed,
            PaymentMethod::CreditCard | PaymentMethod::MobileWallet => PaymentStatus::Processing,
        }
    }
}
