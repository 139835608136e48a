//! Read-only catalog store.

use std::sync::LazyLock;

use ecourses_core::{DomainError, DomainResult};
use ecourses_media::MediaResolver;

use crate::data;
use crate::product::Product;

/// Immutable, ordered collection of every course in the store.
///
/// Built once, never mutated afterwards, so sharing across threads needs no
/// locking. Searching, filtering and sorting belong to the presentation
/// layer; this type only exposes the full ordered list.
#[derive(Debug, Clone, PartialEq)]
pub struct Catalog {
    products: Vec<Product>,
}

impl Catalog {
    /// Build the catalog, deriving media URLs through the given resolver.
    ///
    /// Construction order equals display order. Infallible: the authored
    /// data is trusted, and [`Catalog::verify`] guards it in debug builds
    /// and tests.
    pub fn load(resolver: &MediaResolver) -> Self {
        let catalog = Self {
            products: data::course_entries(resolver),
        };
        debug_assert!(catalog.verify().is_ok(), "authored catalog data is inconsistent");
        tracing::debug!(products = catalog.len(), "catalog loaded");
        catalog
    }

    /// Process-wide catalog, built once from the environment configuration.
    pub fn shared() -> &'static Catalog {
        static CATALOG: LazyLock<Catalog> =
            LazyLock::new(|| Catalog::load(&MediaResolver::from_env()));
        &CATALOG
    }

    /// The full product list, in display order.
    pub fn products(&self) -> &[Product] {
        &self.products
    }

    pub fn iter(&self) -> core::slice::Iter<'_, Product> {
        self.products.iter()
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    /// Check the structural invariants of the authored data.
    ///
    /// Ids must be unique and strictly ascending from 1, required text must
    /// be non-empty, `images` must be non-empty and lead with `image`, and a
    /// present `videos` list must not be empty.
    pub fn verify(&self) -> DomainResult<()> {
        let mut expected_id = 1;
        for product in &self.products {
            if product.id.get() != expected_id {
                return Err(DomainError::invariant(format!(
                    "product ids must ascend densely from 1 (found {} where {} was expected)",
                    product.id, expected_id
                )));
            }
            expected_id += 1;

            if product.name.trim().is_empty() {
                return Err(DomainError::validation(format!(
                    "product {} has an empty name",
                    product.id
                )));
            }
            if product.description.trim().is_empty()
                || product.detailed_description.trim().is_empty()
            {
                return Err(DomainError::validation(format!(
                    "product {} has empty description text",
                    product.id
                )));
            }
            if product.images.is_empty() {
                return Err(DomainError::invariant(format!(
                    "product {} has no images",
                    product.id
                )));
            }
            if product.images[0] != product.image {
                return Err(DomainError::invariant(format!(
                    "product {} images must lead with the cover image",
                    product.id
                )));
            }
            if let Some(videos) = &product.videos {
                if videos.is_empty() {
                    return Err(DomainError::invariant(format!(
                        "product {} has an empty video bundle",
                        product.id
                    )));
                }
            }
        }
        Ok(())
    }
}

impl<'a> IntoIterator for &'a Catalog {
    type Item = &'a Product;
    type IntoIter = core::slice::Iter<'a, Product>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
