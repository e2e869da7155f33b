// Server-rendered frontend
// Components insert HTML templates into a Document through `base::render`

pub mod base;
pub mod form_add;
pub mod header;
pub mod page;

pub use base::{render, Document, InsertPosition};
pub use form_add::{create_form_add, FormAdd, FormError, FormFields, LogSubmit, SubmitHandler};
pub use header::create_header;
pub use page::catalog_page;
