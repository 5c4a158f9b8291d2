use vitrina::forms::products::{
    CATEGORY_CHOICES, CreateProductForm, CreateProductFormError, CreateProductFormPayload,
};

fn filled_form() -> CreateProductForm {
    CreateProductForm {
        title: "Mochila Fjallraven".to_string(),
        price: "19.99".to_string(),
        description: "Para portátiles de hasta 15 pulgadas".to_string(),
        category: "ropa".to_string(),
        image: "https://example.com/mochila.jpg".to_string(),
    }
}

#[test]
fn a_populated_form_becomes_a_draft_with_a_float_price() {
    let payload = CreateProductFormPayload::try_from(filled_form()).expect("form should validate");

    assert_eq!(payload.price, 19.99);

    let draft = payload.into_new_product();
    assert_eq!(draft.title.as_str(), "Mochila Fjallraven");
    assert_eq!(draft.category.as_str(), "ropa");
    assert_eq!(
        draft.image.as_ref().map(|url| url.as_str()),
        Some("https://example.com/mochila.jpg")
    );
}

#[test]
fn every_offered_category_is_accepted_in_lowercase() {
    for choice in CATEGORY_CHOICES {
        let mut form = filled_form();
        form.category = choice.to_lowercase();

        let payload = CreateProductFormPayload::try_from(form)
            .unwrap_or_else(|e| panic!("category '{choice}' should be accepted: {e}"));
        assert_eq!(payload.category.as_str(), choice.to_lowercase());
    }
}

#[test]
fn display_cased_categories_normalize_to_lowercase() {
    let mut form = filled_form();
    form.category = "Electrónica".to_string();

    let payload = CreateProductFormPayload::try_from(form).expect("form should validate");

    assert_eq!(payload.category.as_str(), "electrónica");
}

#[test]
fn non_numeric_price_text_is_a_field_level_error() {
    let mut form = filled_form();
    form.price = "abc".to_string();

    let err = CreateProductFormPayload::try_from(form).expect_err("price should be rejected");

    assert!(matches!(err, CreateProductFormError::InvalidPrice));
}

#[test]
fn negative_and_non_finite_prices_are_rejected() {
    for price in ["-19.99", "NaN", "-inf", "inf"] {
        let mut form = filled_form();
        form.price = price.to_string();

        let result = CreateProductFormPayload::try_from(form);
        assert!(
            matches!(result, Err(CreateProductFormError::InvalidPrice)),
            "price '{price}' should be rejected"
        );
    }
}

#[test]
fn unknown_categories_are_rejected() {
    let mut form = filled_form();
    form.category = "electrodomésticos".to_string();

    let err = CreateProductFormPayload::try_from(form).expect_err("category should be rejected");

    assert!(matches!(err, CreateProductFormError::UnknownCategory));
}

#[test]
fn blank_mandatory_fields_are_rejected() {
    for blank in ["title", "price", "description", "category"] {
        let mut form = filled_form();
        match blank {
            "title" => form.title = String::new(),
            "price" => form.price = String::new(),
            "description" => form.description = String::new(),
            _ => form.category = String::new(),
        }

        assert!(
            CreateProductFormPayload::try_from(form).is_err(),
            "blank {blank} should be rejected"
        );
    }
}

#[test]
fn the_image_must_be_a_url() {
    let mut form = filled_form();
    form.image = "mochila.jpg".to_string();

    assert!(CreateProductFormPayload::try_from(form).is_err());
}
