use serde::{Deserialize, Serialize};

use crate::domain::product::{NewProduct as DomainNewProduct, Product as DomainProduct};
use crate::domain::types::{
    CategoryName, ImageUrl, ProductDescription, ProductId, ProductPrice, ProductTitle,
    TypeConstraintError,
};

/// A product document exactly as the remote catalog serves it.
#[derive(Debug, Clone, Deserialize)]
pub struct Product {
    pub id: i32,
    pub title: String,
    pub price: f64,
    pub description: String,
    pub category: String,
    /// May be absent or empty for catalog entries without an image.
    #[serde(default)]
    pub image: String,
}

impl TryFrom<Product> for DomainProduct {
    type Error = TypeConstraintError;

    fn try_from(product: Product) -> Result<Self, Self::Error> {
        let image = match product.image.trim() {
            "" => None,
            url => Some(ImageUrl::new(url)?),
        };

        Ok(Self {
            id: ProductId::new(product.id)?,
            title: ProductTitle::new(product.title)?,
            price: ProductPrice::new(product.price)?,
            description: ProductDescription::new(product.description)?,
            category: CategoryName::new(product.category)?,
            image,
        })
    }
}

/// Body for `POST /products`: a draft in the catalog's wire format, without
/// an identifier.
#[derive(Debug, Clone, Serialize)]
pub struct NewProduct {
    pub title: String,
    pub price: f64,
    pub description: String,
    pub category: String,
    pub image: String,
}

impl From<&DomainNewProduct> for NewProduct {
    fn from(draft: &DomainNewProduct) -> Self {
        Self {
            title: draft.title.as_str().to_string(),
            price: draft.price.get(),
            description: draft.description.as_str().to_string(),
            category: draft.category.as_str().to_string(),
            image: draft
                .image
                .as_ref()
                .map(|url| url.as_str().to_string())
                .unwrap_or_default(),
        }
    }
}
