//! Menu item record

use crate::simple_types::{MenuItemId, Price, String50, ValidationError};

// =============================================================================
// MenuCategory
// =============================================================================

/// Menu category a menu item belongs to
///
/// # Examples
///
/// ```
/// use cafe_ordering::catalog::MenuCategory;
///
/// let category = MenuCategory::create("Category", "coffee").unwrap();
/// assert_eq!(category, MenuCategory::Coffee);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum MenuCategory {
    /// Espresso-based and filter coffee drinks
    Coffee,
    /// Tea and tea-based drinks
    Tea,
    /// Cold non-coffee drinks
    ColdDrink,
    /// Pastries and baked goods
    Pastry,
    /// Sandwiches and light meals
    Sandwich,
}

impl MenuCategory {
    /// Creates a `MenuCategory` from a string
    ///
    /// # Arguments
    ///
    /// * `field_name` - Field name used in error messages
    /// * `value` - Input string
    ///
    /// # Errors
    ///
    /// Returns `ValidationError` for an unknown category name.
    pub fn create(field_name: &str, value: &str) -> Result<Self, ValidationError> {
        match value {
            "coffee" | "Coffee" => Ok(Self::Coffee),
            "tea" | "Tea" => Ok(Self::Tea),
            "cold_drink" | "ColdDrink" => Ok(Self::ColdDrink),
            "pastry" | "Pastry" => Ok(Self::Pastry),
            "sandwich" | "Sandwich" => Ok(Self::Sandwich),
            _ => Err(ValidationError::new(
                field_name,
                "Must be one of 'coffee', 'tea', 'cold_drink', 'pastry', 'sandwich'",
            )),
        }
    }

    /// Returns the category as a string
    #[must_use]
    pub const fn value(&self) -> &'static str {
        match self {
            Self::Coffee => "coffee",
            Self::Tea => "tea",
            Self::ColdDrink => "cold_drink",
            Self::Pastry => "pastry",
            Self::Sandwich => "sandwich",
        }
    }
}

// =============================================================================
// MenuItem
// =============================================================================

/// A single orderable item in the menu catalog
///
/// Read-only input to the ordering workflow: the catalog owns these
/// records and the workflow never mutates them. `max_extra_shots` bounds
/// the extra-shot customization per line; `has_size_options` /
/// `has_milk_options` flag which customizations the item supports.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MenuItem {
    id: MenuItemId,
    category: MenuCategory,
    name: String50,
    base_price: Price,
    available: bool,
    has_size_options: bool,
    has_milk_options: bool,
    max_extra_shots: u32,
    sort_order: u32,
}

impl MenuItem {
    /// Creates a new `MenuItem`
    ///
    /// # Arguments
    ///
    /// * `id` - Catalog identifier
    /// * `category` - Menu category
    /// * `name` - Display name
    /// * `base_price` - Price before size/extra-shot adjustments
    /// * `available` - Whether the item can currently be ordered
    /// * `has_size_options` - Whether size selection applies
    /// * `has_milk_options` - Whether milk selection applies
    /// * `max_extra_shots` - Maximum extra espresso shots per line
    /// * `sort_order` - Display ordering within the category
    #[must_use]
    #[allow(clippy::too_many_arguments, clippy::fn_params_excessive_bools)]
    pub const fn new(
        id: MenuItemId,
        category: MenuCategory,
        name: String50,
        base_price: Price,
        available: bool,
        has_size_options: bool,
        has_milk_options: bool,
        max_extra_shots: u32,
        sort_order: u32,
    ) -> Self {
        Self {
            id,
            category,
            name,
            base_price,
            available,
            has_size_options,
            has_milk_options,
            max_extra_shots,
            sort_order,
        }
    }

    /// Returns the catalog identifier
    #[must_use]
    pub const fn id(&self) -> MenuItemId {
        self.id
    }

    /// Returns the menu category
    #[must_use]
    pub const fn category(&self) -> MenuCategory {
        self.category
    }

    /// Returns the display name
    #[must_use]
    pub const fn name(&self) -> &String50 {
        &self.name
    }

    /// Returns the base price
    #[must_use]
    pub const fn base_price(&self) -> Price {
        self.base_price
    }

    /// Returns whether the item can currently be ordered
    #[must_use]
    pub const fn available(&self) -> bool {
        self.available
    }

    /// Returns whether size selection applies to this item
    #[must_use]
    pub const fn has_size_options(&self) -> bool {
        self.has_size_options
    }

    /// Returns whether milk selection applies to this item
    #[must_use]
    pub const fn has_milk_options(&self) -> bool {
        self.has_milk_options
    }

    /// Returns the maximum number of extra shots per line
    #[must_use]
    pub const fn max_extra_shots(&self) -> u32 {
        self.max_extra_shots
    }

    /// Returns the display ordering within the category
    #[must_use]
    pub const fn sort_order(&self) -> u32 {
        self.sort_order
    }
}
