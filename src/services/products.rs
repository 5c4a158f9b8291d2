use crate::catalog::{ProductReader, ProductWriter};
use crate::domain::product::Product;
use crate::domain::types::ProductId;
use crate::forms::products::{CreateProductForm, CreateProductFormPayload};
use crate::pagination::{DEFAULT_ITEMS_PER_PAGE, Paginated};

use super::{ServiceError, ServiceResult};

/// Core business logic for the product list view.
///
/// Fetches the full collection from the catalog once and slices the requested
/// page out of it. Catalog errors are converted into `ServiceError` variants
/// so that the HTTP route can remain a thin wrapper.
pub async fn show_products<C>(page: usize, catalog: &C) -> ServiceResult<Paginated<Product>>
where
    C: ProductReader,
{
    let products = match catalog.list_products().await {
        Ok(products) => products,
        Err(e) => {
            log::error!("Failed to list products: {e}");
            return Err(ServiceError::Internal);
        }
    };

    Ok(Paginated::new(products, page, DEFAULT_ITEMS_PER_PAGE))
}

/// Core business logic for the product detail view.
///
/// A non-positive identifier and an empty catalog result both surface as
/// [`ServiceError::NotFound`]; transport failures become
/// [`ServiceError::Internal`].
pub async fn show_product<C>(id: i32, catalog: &C) -> ServiceResult<Product>
where
    C: ProductReader,
{
    let id = match ProductId::new(id) {
        Ok(id) => id,
        Err(_) => return Err(ServiceError::NotFound),
    };

    match catalog.get_product_by_id(id).await {
        Ok(Some(product)) => Ok(product),
        Ok(None) => Err(ServiceError::NotFound),
        Err(e) => {
            log::error!("Failed to get product {id}: {e}");
            Err(ServiceError::Internal)
        }
    }
}

/// Core business logic for the create view: validates the submitted form into
/// a typed draft and sends it to the catalog.
///
/// Rejected form input surfaces as [`ServiceError::Form`] with a
/// field-specific message; the draft never reaches the network in that case.
pub async fn create_product<C>(form: CreateProductForm, catalog: &C) -> ServiceResult<Product>
where
    C: ProductWriter,
{
    let payload = CreateProductFormPayload::try_from(form)?;
    let draft = payload.into_new_product();

    match catalog.create_product(&draft).await {
        Ok(product) => Ok(product),
        Err(e) => {
            log::error!("Failed to create product: {e}");
            Err(ServiceError::Internal)
        }
    }
}
