use std::str::FromStr;

use rust_decimal::Decimal;
use serde::Deserialize;
use thiserror::Error;

use super::base::{escape_html, render, Document, InsertPosition};
use crate::domain::product::{Category, Product, ProductId};

/// Path the add form posts to
pub const FORM_ACTION: &str = "/products/add";

/// Raw values of the add form, as posted by the browser
///
/// An unchecked checkbox is not sent at all, so `has_promo` is only present
/// when the box was ticked. Missing text fields decode as empty and are
/// rejected by `FormAdd::submit`.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FormFields {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub price: String,
    #[serde(default)]
    pub has_promo: Option<String>,
    #[serde(default)]
    pub category: String,
}

#[derive(Debug, Error, PartialEq)]
pub enum FormError {
    #[error("Invalid price: {0}")]
    InvalidPrice(String),

    #[error("{0}")]
    InvalidCategory(String),
}

/// Receives the record assembled from a submitted form
pub trait SubmitHandler: Send + Sync {
    fn handle(&self, product: &Product);
}

impl<F> SubmitHandler for F
where
    F: Fn(&Product) + Send + Sync,
{
    fn handle(&self, product: &Product) {
        self(product)
    }
}

/// Default handler: logs the submitted record
#[derive(Debug, Default, Clone, Copy)]
pub struct LogSubmit;

impl SubmitHandler for LogSubmit {
    fn handle(&self, product: &Product) {
        tracing::info!(?product, "Form submitted:");
    }
}

/// The "add product" form
///
/// Collects field values into a `Product` and hands it to its submit
/// handler. It never stores anything itself.
pub struct FormAdd<H = LogSubmit> {
    next_id: ProductId,
    handler: H,
}

impl FormAdd<LogSubmit> {
    /// Form for a catalog currently holding `products`, logging submissions
    pub fn new(products: &[Product]) -> Self {
        Self::with_handler(products, LogSubmit)
    }
}

impl<H: SubmitHandler> FormAdd<H> {
    pub fn with_handler(products: &[Product], handler: H) -> Self {
        Self {
            next_id: products.len() as ProductId + 1,
            handler,
        }
    }

    /// Id the next submitted record receives
    pub fn next_id(&self) -> ProductId {
        self.next_id
    }

    /// Form markup
    pub fn template(&self) -> String {
        let options: String = Category::ALL
            .iter()
            .map(|c| format!(r#"<option value="{0}">{0}</option>"#, escape_html(c.as_str())))
            .collect();

        format!(
            r#"<form id="add" class="form-add" aria-label="add_form" method="post" action="{FORM_ACTION}">
<label for="name">Name</label>
<input id="name" name="name" type="text" required>
<label for="description">Description</label>
<textarea id="description" name="description"></textarea>
<label for="price">Price</label>
<input id="price" name="price" type="number" min="0" step="0.01" required>
<label for="hasPromo">Esta en promoción</label>
<input id="hasPromo" name="hasPromo" type="checkbox">
<label for="category">Category</label>
<select id="category" name="category">{options}</select>
<button type="submit">Crear</button>
</form>"#
        )
    }

    /// Renders the form at the end of the page's `main` element
    pub fn render(&self, document: &mut Document) {
        render(document, "main", InsertPosition::BeforeEnd, self.template());
    }

    /// Assembles the record from the submitted fields and passes it to the
    /// handler
    pub fn submit(&self, fields: FormFields) -> Result<Product, FormError> {
        let price = Decimal::from_str(fields.price.trim())
            .map_err(|_| FormError::InvalidPrice(fields.price.clone()))?;
        let category = fields
            .category
            .parse::<Category>()
            .map_err(FormError::InvalidCategory)?;

        let product = Product {
            id: self.next_id,
            name: fields.name,
            description: fields.description,
            price,
            has_promo: fields.has_promo.is_some(),
            category,
        };

        self.handler.handle(&product);
        Ok(product)
    }
}

/// Renders an add form for `products` into the document and returns it, ready
/// to receive a submission
pub fn create_form_add(document: &mut Document, products: &[Product]) -> FormAdd {
    let form = FormAdd::new(products);
    form.render(document);
    form
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::{Arc, Mutex};

    fn existing() -> Vec<Product> {
        vec![Product {
            id: 1,
            name: "Test".to_string(),
            description: "desc".to_string(),
            price: Decimal::from(10),
            has_promo: false,
            category: Category::Mobile,
        }]
    }

    fn filled() -> FormFields {
        FormFields {
            name: "Nuevo producto".to_string(),
            description: "Una descripción".to_string(),
            price: "100".to_string(),
            has_promo: Some("on".to_string()),
            category: "computer".to_string(),
        }
    }

    #[test]
    fn renders_every_labelled_field() {
        let mut doc = Document::new("Productos");
        create_form_add(&mut doc, &[]);
        let html = doc.to_html();

        assert!(html.contains(r#"aria-label="add_form""#));
        for label in ["Name", "Description", "Price", "Esta en promoción", "Category"] {
            assert!(html.contains(&format!(">{}</label>", label)), "missing {}", label);
        }
        assert!(html.contains(r#"<button type="submit">Crear</button>"#));
        for category in Category::ALL {
            assert!(html.contains(&format!(r#"<option value="{}">"#, category)));
        }
    }

    #[test]
    fn submit_passes_record_to_handler() {
        let seen = Arc::new(Mutex::new(None));
        let sink = seen.clone();
        let form = FormAdd::with_handler(&existing(), move |p: &Product| {
            *sink.lock().unwrap() = Some(p.clone());
        });

        let product = form.submit(filled()).unwrap();

        assert_eq!(
            product,
            Product {
                id: 2,
                name: "Nuevo producto".to_string(),
                description: "Una descripción".to_string(),
                price: Decimal::from(100),
                has_promo: true,
                category: Category::Computer,
            }
        );
        assert_eq!(seen.lock().unwrap().as_ref(), Some(&product));
    }

    #[test]
    fn empty_catalog_starts_at_one() {
        let form = FormAdd::new(&[]);
        assert_eq!(form.next_id(), 1);
        assert_eq!(form.submit(filled()).unwrap().id, 1);
    }

    #[test]
    fn unchecked_promo_is_false() {
        let form = FormAdd::new(&existing());
        let fields = FormFields {
            has_promo: None,
            ..filled()
        };

        assert!(!form.submit(fields).unwrap().has_promo);
    }

    #[test]
    fn invalid_values_are_rejected_before_the_handler_runs() {
        let calls = Arc::new(Mutex::new(0));
        let counter = calls.clone();
        let form = FormAdd::with_handler(&[], move |_: &Product| {
            *counter.lock().unwrap() += 1;
        });

        let bad_price = FormFields {
            price: "cien".to_string(),
            ..filled()
        };
        let bad_category = FormFields {
            category: "fridge".to_string(),
            ..filled()
        };

        assert_eq!(
            form.submit(bad_price),
            Err(FormError::InvalidPrice("cien".to_string()))
        );
        assert_eq!(
            form.submit(bad_category),
            Err(FormError::InvalidCategory("Unknown category: fridge".to_string()))
        );
        assert_eq!(*calls.lock().unwrap(), 0);
    }

    #[test]
    fn missing_fields_decode_as_empty_and_are_rejected() {
        let fields: FormFields = serde_urlencoded::from_str("name=X&category=mobile").unwrap();
        assert_eq!(fields.price, "");

        let form = FormAdd::new(&[]);
        assert_eq!(
            form.submit(fields),
            Err(FormError::InvalidPrice(String::new()))
        );

        let fields: FormFields = serde_urlencoded::from_str("name=X&price=10").unwrap();
        assert_eq!(
            form.submit(fields),
            Err(FormError::InvalidCategory("Unknown category: ".to_string()))
        );
    }
}
