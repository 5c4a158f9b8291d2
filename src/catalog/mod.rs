use reqwest::Client;

use crate::domain::product::{NewProduct, Product};
use crate::domain::types::ProductId;

pub mod errors;
pub mod product;
#[cfg(test)]
pub mod test;

pub use errors::{CatalogError, CatalogResult};

/// Client for the remote product catalog REST API.
///
/// Holds a shared `reqwest::Client`, which is cheap to clone. There is no
/// caching and no retry; every call is a fresh round trip.
#[derive(Clone)]
pub struct RestCatalog {
    client: Client,
    base_url: String,
}

impl RestCatalog {
    /// Create a catalog client for the given API base URL.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    pub(crate) fn products_url(&self) -> String {
        format!("{}/products", self.base_url)
    }

    pub(crate) fn product_url(&self, id: ProductId) -> String {
        format!("{}/products/{id}", self.base_url)
    }
}

/// Read-only operations against the product catalog.
#[allow(async_fn_in_trait)]
pub trait ProductReader {
    /// Fetch the full product collection.
    async fn list_products(&self) -> CatalogResult<Vec<Product>>;
    /// Retrieve a product by its identifier, resolving to `None` when the
    /// catalog has no such product.
    async fn get_product_by_id(&self, id: ProductId) -> CatalogResult<Option<Product>>;
}

/// Write operations against the product catalog.
#[allow(async_fn_in_trait)]
pub trait ProductWriter {
    /// Submit a draft for creation, returning the stored product with its
    /// server-assigned identifier.
    async fn create_product(&self, draft: &NewProduct) -> CatalogResult<Product>;
}
