//! Menu item — the single record type served by the API.

use serde::{Deserialize, Serialize};

use crate::error::{QuickBiteError, ValidationError};
use crate::id::MenuItemId;
use crate::price::PriceInput;

/// A dish on the menu.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MenuItem {
    pub id: MenuItemId,
    pub title: String,
    pub price: f64,
    pub category: String,
    pub img: String,
    pub desc: String,
}

impl MenuItem {
    /// Attach a backend-assigned id to a creation payload.
    #[must_use]
    pub fn from_new(id: MenuItemId, item: NewMenuItem) -> Self {
        Self {
            id,
            title: item.title,
            price: item.price,
            category: item.category,
            img: item.img,
            desc: item.desc,
        }
    }

    /// Check domain invariants.
    ///
    /// # Errors
    ///
    /// Returns [`QuickBiteError::Validation`] when `title` is blank or
    /// `price` is not finite.
    pub fn validate(&self) -> Result<(), QuickBiteError> {
        validate_fields(&self.title, self.price)
    }
}

/// A menu item that has not been stored yet, so it has no id.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewMenuItem {
    pub title: String,
    pub price: f64,
    pub category: String,
    pub img: String,
    pub desc: String,
}

impl NewMenuItem {
    /// Create a builder for constructing a [`NewMenuItem`].
    #[must_use]
    pub fn builder() -> NewMenuItemBuilder {
        NewMenuItemBuilder::default()
    }

    /// Check domain invariants.
    ///
    /// # Errors
    ///
    /// Returns [`QuickBiteError::Validation`] when `title` is blank or
    /// `price` is not finite.
    pub fn validate(&self) -> Result<(), QuickBiteError> {
        validate_fields(&self.title, self.price)
    }
}

/// Drops the id, e.g. when re-inserting records into a store that assigns
/// its own identifiers.
impl From<MenuItem> for NewMenuItem {
    fn from(item: MenuItem) -> Self {
        Self {
            title: item.title,
            price: item.price,
            category: item.category,
            img: item.img,
            desc: item.desc,
        }
    }
}

fn validate_fields(title: &str, price: f64) -> Result<(), QuickBiteError> {
    if title.trim().is_empty() {
        return Err(ValidationError::EmptyTitle.into());
    }
    if !price.is_finite() {
        return Err(ValidationError::InvalidPrice(price.to_string()).into());
    }
    Ok(())
}

/// Step-by-step builder for [`NewMenuItem`].
///
/// `category`, `img` and `desc` default to empty strings.
#[derive(Debug, Default)]
pub struct NewMenuItemBuilder {
    title: Option<String>,
    price: Option<PriceInput>,
    category: Option<String>,
    img: Option<String>,
    desc: Option<String>,
}

impl NewMenuItemBuilder {
    #[must_use]
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    #[must_use]
    pub fn price(mut self, price: impl Into<PriceInput>) -> Self {
        self.price = Some(price.into());
        self
    }

    #[must_use]
    pub fn category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    #[must_use]
    pub fn img(mut self, img: impl Into<String>) -> Self {
        self.img = Some(img.into());
        self
    }

    #[must_use]
    pub fn desc(mut self, desc: impl Into<String>) -> Self {
        self.desc = Some(desc.into());
        self
    }

    /// Consume the builder, coerce the price, validate, and return a
    /// [`NewMenuItem`].
    ///
    /// # Errors
    ///
    /// Returns [`QuickBiteError::Validation`] if `title` is missing or blank,
    /// or if `price` is missing or cannot be coerced to a finite number.
    pub fn build(self) -> Result<NewMenuItem, QuickBiteError> {
        let price = self
            .price
            .ok_or(ValidationError::MissingPrice)?
            .into_price()?;
        let item = NewMenuItem {
            title: self.title.unwrap_or_default(),
            price,
            category: self.category.unwrap_or_default(),
            img: self.img.unwrap_or_default(),
            desc: self.desc.unwrap_or_default(),
        };
        item.validate()?;
        Ok(item)
    }
}

/// Partial update: only the fields that are `Some` replace the stored values.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MenuItemPatch {
    pub title: Option<String>,
    pub price: Option<PriceInput>,
    pub category: Option<String>,
    pub img: Option<String>,
    pub desc: Option<String>,
}

impl MenuItemPatch {
    /// Whether the patch leaves every field untouched.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.title.is_none()
            && self.price.is_none()
            && self.category.is_none()
            && self.img.is_none()
            && self.desc.is_none()
    }

    /// Coerce the price and check the supplied fields on their own.
    ///
    /// Applying the result to a valid item always yields a valid item, so
    /// stores that merge in place (e.g. a single SQL `UPDATE`) can check the
    /// patch before touching the stored record.
    ///
    /// # Errors
    ///
    /// Returns [`QuickBiteError::Validation`] if the title is blank or the
    /// price cannot be coerced.
    pub fn check(self) -> Result<MenuItemChanges, QuickBiteError> {
        if self.title.as_deref().is_some_and(|title| title.trim().is_empty()) {
            return Err(ValidationError::EmptyTitle.into());
        }
        let price = self.price.map(PriceInput::into_price).transpose()?;
        Ok(MenuItemChanges {
            title: self.title,
            price,
            category: self.category,
            img: self.img,
            desc: self.desc,
        })
    }

    /// Shallow-merge this patch over `item`. The id never changes.
    ///
    /// # Errors
    ///
    /// Returns [`QuickBiteError::Validation`] if the supplied price cannot be
    /// coerced, or if the merged item breaks an invariant.
    pub fn apply(self, item: MenuItem) -> Result<MenuItem, QuickBiteError> {
        let merged = self.check()?.apply(item);
        merged.validate()?;
        Ok(merged)
    }
}

/// A [`MenuItemPatch`] whose fields passed [`MenuItemPatch::check`].
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MenuItemChanges {
    pub title: Option<String>,
    pub price: Option<f64>,
    pub category: Option<String>,
    pub img: Option<String>,
    pub desc: Option<String>,
}

impl MenuItemChanges {
    /// Overwrite the fields of `item` that this change set carries.
    #[must_use]
    pub fn apply(self, mut item: MenuItem) -> MenuItem {
        if let Some(title) = self.title {
            item.title = title;
        }
        if let Some(price) = self.price {
            item.price = price;
        }
        if let Some(category) = self.category {
            item.category = category;
        }
        if let Some(img) = self.img {
            item.img = img;
        }
        if let Some(desc) = self.desc {
            item.desc = desc;
        }
        item
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn taco() -> MenuItem {
        MenuItem::from_new(
            MenuItemId::new(1),
            NewMenuItem::builder()
                .title("Taco")
                .price(9.5)
                .category("mexican")
                .img("x.png")
                .desc("spicy")
                .build()
                .unwrap(),
        )
    }

    #[test]
    fn should_build_new_item_with_coerced_price() {
        let item = NewMenuItem::builder()
            .title("Taco")
            .price("9.5")
            .build()
            .unwrap();
        assert!((item.price - 9.5).abs() < f64::EPSILON);
        assert_eq!(item.category, "");
        assert_eq!(item.desc, "");
    }

    #[test]
    fn should_return_validation_error_when_title_is_empty() {
        let result = NewMenuItem::builder().title("  ").price(1.0).build();
        assert!(matches!(
            result,
            Err(QuickBiteError::Validation(ValidationError::EmptyTitle))
        ));
    }

    #[test]
    fn should_return_validation_error_when_price_missing() {
        let result = NewMenuItem::builder().title("Soup").build();
        assert!(matches!(
            result,
            Err(QuickBiteError::Validation(ValidationError::MissingPrice))
        ));
    }

    #[test]
    fn should_only_change_supplied_fields_when_patching() {
        let patch = MenuItemPatch {
            price: Some(PriceInput::from("11")),
            ..MenuItemPatch::default()
        };
        let updated = patch.apply(taco()).unwrap();
        assert!((updated.price - 11.0).abs() < f64::EPSILON);
        assert_eq!(updated.title, "Taco");
        assert_eq!(updated.category, "mexican");
        assert_eq!(updated.img, "x.png");
        assert_eq!(updated.desc, "spicy");
        assert_eq!(updated.id, MenuItemId::new(1));
    }

    #[test]
    fn should_reject_patch_that_blanks_title() {
        let patch = MenuItemPatch {
            title: Some(String::new()),
            ..MenuItemPatch::default()
        };
        assert!(patch.apply(taco()).is_err());
    }

    #[test]
    fn should_coerce_price_when_checking_patch() {
        let patch = MenuItemPatch {
            price: Some(PriceInput::from(" 4.75 ")),
            ..MenuItemPatch::default()
        };
        let changes = patch.check().unwrap();
        assert_eq!(changes.price, Some(4.75));
        assert_eq!(changes.title, None);
    }

    #[test]
    fn should_reject_blank_title_when_checking_patch() {
        let patch = MenuItemPatch {
            title: Some("   ".to_string()),
            ..MenuItemPatch::default()
        };
        assert!(matches!(
            patch.check(),
            Err(QuickBiteError::Validation(ValidationError::EmptyTitle))
        ));
    }

    #[test]
    fn should_report_empty_patch() {
        assert!(MenuItemPatch::default().is_empty());
        let patch = MenuItemPatch {
            desc: Some("mild".into()),
            ..MenuItemPatch::default()
        };
        assert!(!patch.is_empty());
    }

    #[test]
    fn should_drop_id_when_converting_to_new_item() {
        let new_item = NewMenuItem::from(taco());
        assert_eq!(new_item.title, "Taco");
        let json = serde_json::to_value(&new_item).unwrap();
        assert!(json.get("id").is_none());
    }

    #[test]
    fn should_serialize_with_wire_field_names() {
        let json = serde_json::to_value(taco()).unwrap();
        assert_eq!(json["id"], 1);
        assert_eq!(json["title"], "Taco");
        assert_eq!(json["price"], 9.5);
        assert_eq!(json["desc"], "spicy");
    }
}
