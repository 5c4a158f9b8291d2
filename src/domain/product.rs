use serde::{Deserialize, Serialize};

use crate::domain::types::{
    CategoryName, ImageUrl, ProductDescription, ProductId, ProductPrice, ProductTitle,
};

/// A product as served by the remote catalog.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Product {
    pub id: ProductId,
    pub title: ProductTitle,
    pub price: ProductPrice,
    pub description: ProductDescription,
    pub category: CategoryName,
    /// Absent when the catalog entry has no image; views substitute a
    /// placeholder.
    pub image: Option<ImageUrl>,
}

/// Information required to create a new [`Product`].
///
/// Carries no identifier; the catalog assigns one on creation.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct NewProduct {
    pub title: ProductTitle,
    pub price: ProductPrice,
    pub description: ProductDescription,
    pub category: CategoryName,
    pub image: Option<ImageUrl>,
}
