//! Error conversion glue between layers.
//!
//! The domain layer must not depend on catalog/service error types, so the
//! cross-layer `From` impls live here.

use crate::catalog::CatalogError;
use crate::domain::types::TypeConstraintError;
use crate::forms::products::CreateProductFormError;
use crate::services::ServiceError;

impl From<TypeConstraintError> for CatalogError {
    fn from(val: TypeConstraintError) -> Self {
        CatalogError::Validation(val.to_string())
    }
}

impl From<CreateProductFormError> for ServiceError {
    fn from(val: CreateProductFormError) -> Self {
        ServiceError::Form(val.to_string())
    }
}
