use serde::Serialize;

use crate::domain::product::Product;
use crate::domain::types::ImageUrl;

/// Image shown for products without one of their own.
pub const PLACEHOLDER_IMAGE: &str = "/static/placeholder.svg";

/// Template-facing projection of a [`Product`].
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProductDto {
    pub id: i32,
    pub title: String,
    /// Preformatted with exactly two decimal places.
    pub price: String,
    pub description: String,
    pub category: String,
    /// Always a usable URL; the placeholder is substituted here.
    pub image: String,
}

impl From<Product> for ProductDto {
    fn from(value: Product) -> Self {
        Self {
            id: value.id.get(),
            title: value.title.into_inner(),
            price: format!("{:.2}", value.price.get()),
            description: value.description.into_inner(),
            category: value.category.into_inner(),
            image: value
                .image
                .map(ImageUrl::into_inner)
                .unwrap_or_else(|| PLACEHOLDER_IMAGE.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::types::{
        CategoryName, ProductDescription, ProductId, ProductPrice, ProductTitle,
    };

    fn sample_product(price: f64, image: Option<&str>) -> Product {
        Product {
            id: ProductId::new(1).unwrap(),
            title: ProductTitle::new("Producto").unwrap(),
            price: ProductPrice::new(price).unwrap(),
            description: ProductDescription::new("descripción").unwrap(),
            category: CategoryName::new("ropa").unwrap(),
            image: image.map(|url| ImageUrl::new(url).unwrap()),
        }
    }

    #[test]
    fn price_always_renders_two_decimal_places() {
        assert_eq!(ProductDto::from(sample_product(19.9, None)).price, "19.90");
        assert_eq!(ProductDto::from(sample_product(7.0, None)).price, "7.00");
        assert_eq!(ProductDto::from(sample_product(5.678, None)).price, "5.68");
    }

    #[test]
    fn missing_image_falls_back_to_the_placeholder() {
        assert_eq!(
            ProductDto::from(sample_product(1.0, None)).image,
            PLACEHOLDER_IMAGE
        );
        assert_eq!(
            ProductDto::from(sample_product(1.0, Some("https://example.com/1.jpg"))).image,
            "https://example.com/1.jpg"
        );
    }
}
