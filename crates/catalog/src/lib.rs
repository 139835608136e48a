//! Course catalog domain module.
//!
//! This crate contains the authoritative product records for the e-course
//! storefront, implemented purely as deterministic domain data (no IO, no
//! HTTP, no storage). The catalog is built once and never mutated; callers
//! get read-only access to the ordered product list.

mod data;
pub mod product;
pub mod store;

pub use product::{Price, Product, Specifications};
pub use store::Catalog;
