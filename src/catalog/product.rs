use reqwest::StatusCode;

use crate::catalog::{CatalogError, CatalogResult, ProductReader, ProductWriter, RestCatalog};
use crate::domain::product::{NewProduct, Product};
use crate::domain::types::ProductId;
use crate::models::product as wire;

impl ProductReader for RestCatalog {
    async fn list_products(&self) -> CatalogResult<Vec<Product>> {
        let response = self.client.get(self.products_url()).send().await?;
        if !response.status().is_success() {
            return Err(CatalogError::Status(response.status()));
        }

        let documents: Vec<wire::Product> = response.json().await?;
        documents
            .into_iter()
            .map(|document| Ok(document.try_into()?))
            .collect()
    }

    async fn get_product_by_id(&self, id: ProductId) -> CatalogResult<Option<Product>> {
        let response = self.client.get(self.product_url(id)).send().await?;
        if response.status() == StatusCode::NOT_FOUND {
            return Ok(None);
        }
        if !response.status().is_success() {
            return Err(CatalogError::Status(response.status()));
        }

        // The catalog answers 200 with an empty or `null` body for unknown
        // identifiers.
        let body = response.text().await?;
        let body = body.trim();
        if body.is_empty() || body == "null" {
            return Ok(None);
        }

        let document: wire::Product =
            serde_json::from_str(body).map_err(|e| CatalogError::Decode(e.to_string()))?;
        Ok(Some(document.try_into()?))
    }
}

impl ProductWriter for RestCatalog {
    async fn create_product(&self, draft: &NewProduct) -> CatalogResult<Product> {
        let payload = wire::NewProduct::from(draft);
        let response = self
            .client
            .post(self.products_url())
            .json(&payload)
            .send()
            .await?;
        if !response.status().is_success() {
            return Err(CatalogError::Status(response.status()));
        }

        let document: wire::Product = response.json().await?;
        Ok(document.try_into()?)
    }
}
