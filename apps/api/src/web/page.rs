use super::base::{escape_html, render, Document, InsertPosition};
use super::form_add::create_form_add;
use super::header::create_header;
use crate::domain::product::Product;

fn product_list(products: &[Product]) -> String {
    if products.is_empty() {
        return r#"<p class="products__empty">No hay productos</p>"#.to_string();
    }

    let items: String = products
        .iter()
        .map(|p| {
            let promo = if p.has_promo {
                r#"<span class="product__promo">Promoción</span>"#
            } else {
                ""
            };
            format!(
                r#"<li class="product" data-id="{id}"><h2>{name}</h2><p>{description}</p><p class="product__price">{price}</p><p class="product__category">{category}</p>{promo}</li>"#,
                id = p.id,
                name = escape_html(&p.name),
                description = escape_html(&p.description),
                price = p.price,
                category = p.category,
            )
        })
        .collect();

    format!(r#"<ul class="products">{items}</ul>"#)
}

/// Full catalog page: header, product list and the add form
pub fn catalog_page(products: &[Product]) -> Document {
    let mut document = Document::new("Productos");
    create_header(&mut document);
    render(
        &mut document,
        "main",
        InsertPosition::AfterBegin,
        product_list(products),
    );
    create_form_add(&mut document, products);
    document
}
