use super::base::{render, Document, InsertPosition};

const LOGO_SRC: &str = "/assets/logo.svg";

/// Static header markup: logo, title and the "Add" disclosure control
///
/// The `summary` toggles the add form natively; nothing here tracks state.
pub fn template() -> String {
    format!(
        r#"<header class="header">
<img class="header__logo" src="{LOGO_SRC}" alt="Logo de la empresa" width="48" height="48">
<h1 class="header__title">Productos</h1>
<details class="header__add">
<summary role="button" aria-expanded="false" aria-controls="add">Add</summary>
</details>
</header>"#
    )
}

/// Renders the header at the start of the page body
pub fn create_header(document: &mut Document) {
    render(document, "body", InsertPosition::AfterBegin, template());
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rendered() -> String {
        let mut doc = Document::new("Productos");
        create_header(&mut doc);
        doc.to_html()
    }

    #[test]
    fn renders_logo_title_and_button_once() {
        let html = rendered();

        assert_eq!(html.matches("<img").count(), 1);
        assert_eq!(html.matches(r#"alt="Logo de la empresa""#).count(), 1);
        assert_eq!(html.matches("<h1").count(), 1);
        assert!(html.to_lowercase().contains(">productos</h1>"));
        assert_eq!(html.matches(r#"role="button""#).count(), 1);
    }

    #[test]
    fn add_button_has_disclosure_attributes() {
        let html = rendered();

        assert!(html.contains(
            r#"<summary role="button" aria-expanded="false" aria-controls="add">Add</summary>"#
        ));
    }

    #[test]
    fn summary_lives_inside_details() {
        let html = rendered();
        let details = html.find("<details").unwrap();
        let summary = html.find("<summary").unwrap();
        let closing = html.find("</details>").unwrap();

        assert!(details < summary && summary < closing);
    }

    #[test]
    fn header_precedes_main() {
        let html = rendered();
        assert!(html.find("<header").unwrap() < html.find("<main>").unwrap());
    }
}
