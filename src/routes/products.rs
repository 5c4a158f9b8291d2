use actix_web::{Responder, get, post, web};
use actix_web_flash_messages::{FlashMessage, IncomingFlashMessages};
use serde::Deserialize;
use tera::Tera;

use crate::catalog::RestCatalog;
use crate::dto::products::ProductDto;
use crate::forms::products::{CATEGORY_CHOICES, CreateProductForm};
use crate::routes::{base_context, redirect, render_template};
use crate::services::ServiceError;
use crate::services::products::{
    create_product as create_product_service, show_product as show_product_service,
    show_products as show_products_service,
};

const LIST_ERROR_MESSAGE: &str = "Error al cargar los productos";
const DETAIL_ERROR_MESSAGE: &str = "Error al cargar el producto";
const CREATE_ERROR_MESSAGE: &str = "Error al crear el producto";
const CREATE_SUCCESS_MESSAGE: &str = "Producto creado correctamente";

#[derive(Deserialize)]
struct ProductsQueryParams {
    page: Option<usize>,
}

/// Category `(value, label)` pairs for the form's select control.
fn category_options() -> Vec<(String, &'static str)> {
    CATEGORY_CHOICES
        .iter()
        .map(|label| (label.to_lowercase(), *label))
        .collect()
}

#[get("/")]
pub async fn show_products(
    params: web::Query<ProductsQueryParams>,
    flash_messages: IncomingFlashMessages,
    catalog: web::Data<RestCatalog>,
    tera: web::Data<Tera>,
) -> impl Responder {
    let page = params.page.unwrap_or(1);
    let mut context = base_context(&flash_messages, "products");

    match show_products_service(page, catalog.get_ref()).await {
        Ok(paginated) => {
            context.insert("page_items", &paginated.page_items());
            context.insert("paginated", &paginated.map(ProductDto::from));
            render_template(&tera, "products/index.html", &context)
        }
        Err(e) => {
            log::error!("Failed to render product list: {e}");
            context.insert("error_message", &LIST_ERROR_MESSAGE);
            context.insert("retry_url", &list_url(page));
            render_template(&tera, "products/error.html", &context)
        }
    }
}

fn list_url(page: usize) -> String {
    if page > 1 {
        format!("/?page={page}")
    } else {
        "/".to_string()
    }
}

#[get("/product/{id}")]
pub async fn show_product(
    id: web::Path<i32>,
    flash_messages: IncomingFlashMessages,
    catalog: web::Data<RestCatalog>,
    tera: web::Data<Tera>,
) -> impl Responder {
    let id = id.into_inner();
    let mut context = base_context(&flash_messages, "products");

    match show_product_service(id, catalog.get_ref()).await {
        Ok(product) => {
            context.insert("product", &ProductDto::from(product));
            render_template(&tera, "products/show.html", &context)
        }
        Err(ServiceError::NotFound) => render_template(&tera, "products/not_found.html", &context),
        Err(e) => {
            log::error!("Failed to render product {id}: {e}");
            context.insert("error_message", &DETAIL_ERROR_MESSAGE);
            context.insert("retry_url", &format!("/product/{id}"));
            render_template(&tera, "products/error.html", &context)
        }
    }
}

#[get("/create")]
pub async fn new_product(
    flash_messages: IncomingFlashMessages,
    tera: web::Data<Tera>,
) -> impl Responder {
    render_form(&tera, &flash_messages, &CreateProductForm::default(), None)
}

#[post("/create")]
pub async fn create_product(
    form: web::Form<CreateProductForm>,
    flash_messages: IncomingFlashMessages,
    catalog: web::Data<RestCatalog>,
    tera: web::Data<Tera>,
) -> impl Responder {
    let form = form.into_inner();

    match create_product_service(form.clone(), catalog.get_ref()).await {
        Ok(product) => {
            log::info!("Created product {}", product.id);
            FlashMessage::success(CREATE_SUCCESS_MESSAGE).send();
            redirect("/")
        }
        // The form stays populated for correction in both failure cases.
        Err(ServiceError::Form(message)) => {
            render_form(&tera, &flash_messages, &form, Some(&message))
        }
        Err(e) => {
            log::error!("Failed to create product: {e}");
            render_form(&tera, &flash_messages, &form, Some(CREATE_ERROR_MESSAGE))
        }
    }
}

fn render_form(
    tera: &Tera,
    flash_messages: &IncomingFlashMessages,
    form: &CreateProductForm,
    error_message: Option<&str>,
) -> actix_web::HttpResponse {
    let mut context = base_context(flash_messages, "create");
    context.insert("categories", &category_options());
    context.insert("form", form);
    if let Some(message) = error_message {
        context.insert("error_message", &message);
    }
    render_template(tera, "products/new.html", &context)
}
