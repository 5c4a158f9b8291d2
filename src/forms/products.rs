use serde::{Deserialize, Serialize};
use thiserror::Error;
use validator::{Validate, ValidationErrors};

use crate::domain::product::NewProduct;
use crate::domain::types::{
    CategoryName, ImageUrl, ProductDescription, ProductPrice, ProductTitle, TypeConstraintError,
};

/// Category choices offered by the create form, in display casing. The
/// submitted value is the lowercased form.
pub const CATEGORY_CHOICES: [&str; 8] = [
    "Electrónica",
    "Ropa",
    "Hogar y Cocina",
    "Libros",
    "Belleza",
    "Juguetes",
    "Deportes",
    "Automotriz",
];

/// Raw create-product form as posted by the browser. All five fields are
/// mandatory; `price` arrives as text and is parsed during conversion.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
pub struct CreateProductForm {
    #[validate(length(min = 1))]
    pub title: String,
    #[validate(length(min = 1))]
    pub price: String,
    #[validate(length(min = 1))]
    pub description: String,
    #[validate(length(min = 1))]
    pub category: String,
    #[validate(url)]
    pub image: String,
}

/// Validated, typed payload built from a [`CreateProductForm`].
#[derive(Debug, Clone, PartialEq)]
pub struct CreateProductFormPayload {
    pub title: ProductTitle,
    pub price: ProductPrice,
    pub description: ProductDescription,
    pub category: CategoryName,
    pub image: ImageUrl,
}

impl CreateProductFormPayload {
    pub fn into_new_product(self) -> NewProduct {
        NewProduct {
            title: self.title,
            price: self.price,
            description: self.description,
            category: self.category,
            image: Some(self.image),
        }
    }
}

#[derive(Debug, Error)]
pub enum CreateProductFormError {
    #[error("Create product form validation failed: {0}")]
    Validation(String),
    #[error("Create product form contains invalid data: {0}")]
    TypeConstraint(String),
    #[error("El precio debe ser un número válido y no negativo")]
    InvalidPrice,
    #[error("La categoría seleccionada no es válida")]
    UnknownCategory,
}

impl From<ValidationErrors> for CreateProductFormError {
    fn from(value: ValidationErrors) -> Self {
        Self::Validation(value.to_string())
    }
}

impl From<TypeConstraintError> for CreateProductFormError {
    fn from(value: TypeConstraintError) -> Self {
        Self::TypeConstraint(value.to_string())
    }
}

/// Parses the price text, rejecting anything that is not a finite,
/// non-negative number. `"NaN"` parses as a float but fails the constraint.
fn parse_price(value: &str) -> Result<ProductPrice, CreateProductFormError> {
    let parsed: f64 = value
        .trim()
        .parse()
        .map_err(|_| CreateProductFormError::InvalidPrice)?;
    ProductPrice::new(parsed).map_err(|_| CreateProductFormError::InvalidPrice)
}

impl TryFrom<CreateProductForm> for CreateProductFormPayload {
    type Error = CreateProductFormError;

    fn try_from(value: CreateProductForm) -> Result<Self, Self::Error> {
        value.validate()?;

        let price = parse_price(&value.price)?;
        let category = CategoryName::new(value.category)?;
        if !CATEGORY_CHOICES
            .iter()
            .any(|choice| choice.to_lowercase() == category.as_str())
        {
            return Err(CreateProductFormError::UnknownCategory);
        }

        Ok(Self {
            title: ProductTitle::new(value.title)?,
            price,
            description: ProductDescription::new(value.description)?,
            category,
            image: ImageUrl::new(value.image)?,
        })
    }
}
