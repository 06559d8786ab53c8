//! Size pricing record

use crate::simple_types::{DrinkSize, MenuItemId, PriceModifier};

// =============================================================================
// SizePricing
// =============================================================================

/// A configured price adjustment for one (menu item, size) pair
///
/// The modifier is a signed delta applied to the item's base price: a
/// negative modifier discounts (e.g. small), a positive one surcharges
/// (e.g. large). At most one row exists per (menu item, size).
///
/// # Examples
///
/// ```
/// use cafe_ordering::catalog::SizePricing;
/// use cafe_ordering::simple_types::{DrinkSize, MenuItemId, PriceModifier};
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
/// use uuid::Uuid;
///
/// let row = SizePricing::new(
///     MenuItemId::from_uuid(Uuid::from_u128(1)),
///     DrinkSize::Large,
///     PriceModifier::create(Decimal::from_str("2.00").unwrap()).unwrap(),
/// );
/// assert_eq!(row.size(), DrinkSize::Large);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SizePricing {
    menu_item_id: MenuItemId,
    size: DrinkSize,
    modifier: PriceModifier,
}

impl SizePricing {
    /// Creates a new `SizePricing` row
    ///
    /// # Arguments
    ///
    /// * `menu_item_id` - The item the adjustment belongs to
    /// * `size` - The size the adjustment applies to
    /// * `modifier` - Signed price delta
    #[must_use]
    pub const fn new(menu_item_id: MenuItemId, size: DrinkSize, modifier: PriceModifier) -> Self {
        Self {
            menu_item_id,
            size,
            modifier,
        }
    }

    /// Returns the item the adjustment belongs to
    #[must_use]
    pub const fn menu_item_id(&self) -> MenuItemId {
        self.menu_item_id
    }

    /// Returns the size the adjustment applies to
    #[must_use]
    pub const fn size(&self) -> DrinkSize {
        self.size
    }

    /// Returns the signed price delta
    #[must_use]
    pub const fn modifier(&self) -> PriceModifier {
        self.modifier
    }
}
