//! Products domain module.
//!
//! This crate contains the business rules for the product catalog: the
//! `Product` aggregate and its `ProductId`/`ProductName` value objects,
//! implemented purely as deterministic domain logic (no IO, no HTTP, no
//! storage).

pub mod error;
pub mod name;
pub mod product;

pub use error::{CatalogError, CatalogResult, NameError, ProductError};
pub use name::ProductName;
pub use product::{Product, ProductId, ProductSnapshot};
