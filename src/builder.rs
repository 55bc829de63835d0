//! Builder pattern with runtime validation.
//!
//! A fluent, single-use accumulator for [`Product`]. Each setter consumes
//! and returns the builder so calls chain; `build()` validates and moves the
//! finished value out. Because `build()` takes `self`, the builder is gone
//! once the product exists and a distributed `Product` can never be mutated
//! through a leftover builder handle.

use thiserror::Error;

use crate::product::{OptionValue, Product};

/// Error returned when finalizing an invalid builder.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum BuildError {
    #[error("product must have a name")]
    MissingName,
}

/// Contract for a construction process that assembles a value step by step.
///
/// [`ProductBuilder`] is the canonical implementor; the trait exists because
/// `Product` itself carries no validation, so a different implementor could
/// populate the same value type through another path.
pub trait Assemble: Sized {
    type Output;

    /// Overwrite the description; chainable.
    fn description(self, desc: impl Into<String>) -> Self;

    /// Insert or overwrite one option entry; chainable.
    fn option(self, key: impl Into<String>, value: impl Into<OptionValue>) -> Self;

    /// Validate and hand the finished value to the caller.
    fn build(self) -> Result<Self::Output, BuildError>;
}

/// Fluent accumulator wrapping exactly one [`Product`] under construction.
///
/// The builder maps 1:1 to the product it wraps, enforced by the type
/// system: `build()` consumes the builder, on failure as well as on success.
/// A missing name is only detectable at `build()` time because the name is
/// fixed at construction, so that failure is final for the instance.
#[must_use]
pub struct ProductBuilder {
    product: Product,
}

impl ProductBuilder {
    /// Start from a minimal, name-only product and configure incrementally.
    /// No validation happens here; an empty name is caught by `build()`.
    pub fn new(name: impl Into<String>) -> Self {
        ProductBuilder {
            product: Product::new(name.into()),
        }
    }

    /// Overwrite the product description. Later calls win.
    pub fn description(mut self, desc: impl Into<String>) -> Self {
        self.product.set_description(desc.into());
        self
    }

    /// Insert or overwrite the `(key, value)` option entry. Keys are not
    /// validated; the last write for a key wins.
    pub fn option(mut self, key: impl Into<String>, value: impl Into<OptionValue>) -> Self {
        self.product.insert_option(key.into(), value.into());
        self
    }

    /// Terminal operation: validate, then move the product out.
    pub fn build(self) -> Result<Product, BuildError> {
        if self.product.name().is_empty() {
            return Err(BuildError::MissingName);
        }
        Ok(self.product)
    }
}

impl Assemble for ProductBuilder {
    type Output = Product;

    fn description(self, desc: impl Into<String>) -> Self {
        ProductBuilder::description(self, desc)
    }

    fn option(self, key: impl Into<String>, value: impl Into<OptionValue>) -> Self {
        ProductBuilder::option(self, key, value)
    }

    fn build(self) -> Result<Product, BuildError> {
        ProductBuilder::build(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn name_only_build() {
        let product = ProductBuilder::new("Widget").build().unwrap();
        assert_eq!(product.name(), "Widget");
        assert_eq!(product.description(), None);
        assert!(product.options().is_empty());
    }

    #[test]
    fn empty_name_fails() {
        let result = ProductBuilder::new("").build();
        assert_eq!(result, Err(BuildError::MissingName));
    }

    #[test]
    fn error_message() {
        assert_eq!(
            BuildError::MissingName.to_string(),
            "product must have a name"
        );
    }

    #[test]
    fn description_last_write_wins() {
        let product = ProductBuilder::new("Widget")
            .description("first")
            .description("second")
            .build()
            .unwrap();
        assert_eq!(product.description(), Some("second"));
    }

    #[test]
    fn duplicate_key_keeps_second_value() {
        let product = ProductBuilder::new("Widget")
            .option("color", "red")
            .option("color", "blue")
            .build()
            .unwrap();
        assert_eq!(product.options().len(), 1);
        assert_eq!(
            product.options().get("color"),
            Some(&OptionValue::Text("blue".to_string()))
        );
    }

    #[test]
    fn option_order_is_irrelevant() {
        let forward = ProductBuilder::new("Widget")
            .option("color", "red")
            .option("size", "L")
            .build()
            .unwrap();
        let reversed = ProductBuilder::new("Widget")
            .option("size", "L")
            .option("color", "red")
            .build()
            .unwrap();
        assert_eq!(forward.options(), reversed.options());
    }

    #[test]
    fn worked_example() {
        let product = Product::builder("Widget")
            .description("A widget")
            .option("color", "red")
            .option("size", "L")
            .build()
            .unwrap();

        assert_eq!(product.name(), "Widget");
        assert_eq!(product.description(), Some("A widget"));
        assert_eq!(product.options().len(), 2);
        assert_eq!(
            product.options().get("color"),
            Some(&OptionValue::Text("red".to_string()))
        );
        assert_eq!(
            product.options().get("size"),
            Some(&OptionValue::Text("L".to_string()))
        );
    }

    #[test]
    fn heterogeneous_option_values() {
        let product = Product::builder("Widget")
            .option("color", "red")
            .option("count", 3i64)
            .option("gift_wrap", true)
            .build()
            .unwrap();

        assert_eq!(
            product.options().get("count"),
            Some(&OptionValue::Number(3.0))
        );
        assert_eq!(
            product.options().get("gift_wrap"),
            Some(&OptionValue::Bool(true))
        );
    }

    #[test]
    fn builds_through_the_trait() {
        fn assemble<B: Assemble>(builder: B) -> Result<B::Output, BuildError> {
            builder.description("via trait").option("size", "L").build()
        }

        let product = assemble(ProductBuilder::new("Widget")).unwrap();
        assert_eq!(product.description(), Some("via trait"));
    }
}
