use crate::catalog::{CatalogError, CatalogResult, ProductReader, ProductWriter};
use crate::domain::product::{NewProduct, Product};
use crate::domain::types::ProductId;

/// Simple in-memory catalog used for unit tests.
#[derive(Default)]
pub struct TestCatalog {
    products: Vec<Product>,
    fail: bool,
}

impl TestCatalog {
    pub fn new(products: Vec<Product>) -> Self {
        Self {
            products,
            fail: false,
        }
    }

    /// A catalog whose every operation fails, standing in for a remote API
    /// that is unreachable or serving garbage.
    pub fn failing() -> Self {
        Self {
            products: vec![],
            fail: true,
        }
    }

    fn check(&self) -> CatalogResult<()> {
        if self.fail {
            Err(CatalogError::Decode("test catalog failure".to_string()))
        } else {
            Ok(())
        }
    }
}

impl ProductReader for TestCatalog {
    async fn list_products(&self) -> CatalogResult<Vec<Product>> {
        self.check()?;
        Ok(self.products.clone())
    }

    async fn get_product_by_id(&self, id: ProductId) -> CatalogResult<Option<Product>> {
        self.check()?;
        Ok(self.products.iter().find(|p| p.id == id).cloned())
    }
}

impl ProductWriter for TestCatalog {
    async fn create_product(&self, draft: &NewProduct) -> CatalogResult<Product> {
        self.check()?;
        let id = ProductId::new(self.products.len() as i32 + 1).unwrap();
        Ok(Product {
            id,
            title: draft.title.clone(),
            price: draft.price,
            description: draft.description.clone(),
            category: draft.category.clone(),
            image: draft.image.clone(),
        })
    }
}
