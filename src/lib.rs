//! # Creational Patterns
//!
//! Runnable demonstrations of two creational design patterns:
//!
//! 1. **Builder** — fluent, single-use construction of a [`Product`] with
//!    runtime validation at `build()` time.
//! 2. **Singleton** — one shared [`Settings`] instance behind a global
//!    access point, lazily initialized with `OnceLock`.
//!
//! ```
//! use creational_patterns::Product;
//!
//! let product = Product::builder("Widget")
//!     .description("A widget")
//!     .option("color", "red")
//!     .option("size", "L")
//!     .build()?;
//!
//! assert_eq!(product.name(), "Widget");
//! # Ok::<(), creational_patterns::BuildError>(())
//! ```
//!
//! ## Running Examples
//!
//! ```bash
//! cargo run --bin p1_builder
//! cargo run --bin p2_singleton
//! ```

pub mod builder;
pub mod product;
pub mod singleton;

pub use builder::{Assemble, BuildError, ProductBuilder};
pub use product::{OptionValue, Product};
pub use singleton::Settings;
