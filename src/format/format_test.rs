/// Tests for the console and Markdown formatters

#[cfg(test)]
mod tests {
    use crate::format::{ConsoleFormatter, MarkdownFormatter, ReportFormatter};
    use crate::settings::Branding;

    #[test]
    fn test_markdown_primitives() {
        let md = MarkdownFormatter::default();
        assert_eq!(md.bold("URLs"), "**URLs**");
        assert_eq!(md.snippet("<img src=x>"), "`<img src=x>`");
        assert_eq!(md.link("https://a.example/", "docs"), "[docs](https://a.example/)");
        assert_eq!(md.list_item("item"), "* item");
        assert_eq!(md.heading("Failed instances", 4), "#### Failed instances");
        assert_eq!(md.heading("Scan", 1), "# Scan");
        assert_eq!(md.footer_separator(), "---");
        assert_eq!(md.section_separator(), "\n");
    }

    #[test]
    fn test_markdown_product_title() {
        let md = MarkdownFormatter::default();
        assert_eq!(
            md.product_title(),
            "![Accessibility Insights](https://accessibilityinsights.io/img/a11yinsights-blue.svg) Accessibility Insights Action"
        );

        let custom = MarkdownFormatter::new(Branding {
            brand: "Acme".to_string(),
            tool_name: "Acme Scanner".to_string(),
            logo_url: "logo.svg".to_string(),
        });
        assert_eq!(custom.product_title(), "![Acme](logo.svg) Acme Scanner");
    }

    #[test]
    fn test_markdown_image() {
        assert_eq!(MarkdownFormatter::image("alt", "https://a.example/i.png"), "![alt](https://a.example/i.png)");
    }

    #[test]
    fn test_markdown_escapes_every_angle_bracket() {
        let md = MarkdownFormatter::default();
        assert_eq!(md.escaped("<html> lang <b>"), "\\<html> lang \\<b>");
        assert_eq!(md.escaped("<<"), "\\<\\<");
        assert_eq!(md.escaped(""), "");
    }

    #[test]
    fn test_markdown_escaping_leaves_other_text_alone() {
        let md = MarkdownFormatter::default();
        for text in ["color-contrast", "Elements must have sufficient color contrast", "a > b", "**x**", "\\"] {
            assert_eq!(md.escaped(text), text);
            assert_eq!(md.escaped(&md.escaped(text)), text);
        }
    }

    #[test]
    fn test_console_drops_markup() {
        let console = ConsoleFormatter::default();
        assert_eq!(console.bold("URLs"), "URLs");
        assert_eq!(console.escaped("<html>"), "<html>");
        assert_eq!(console.snippet("<img>"), "<img>");
        assert_eq!(console.heading("Scan summary", 4), "Scan summary");
        assert_eq!(console.link("https://a.example/", "docs"), "docs (https://a.example/)");
        assert_eq!(console.list_item("item"), "* item");
        assert_eq!(console.product_title(), "Accessibility Insights Action");
        assert_eq!(console.footer_separator(), "-------------------");
        assert_eq!(console.section_separator(), "\n");
    }

    #[test]
    fn test_formatters_are_usable_as_trait_objects() {
        let formatters: Vec<Box<dyn ReportFormatter>> =
            vec![Box::new(ConsoleFormatter::default()), Box::new(MarkdownFormatter::default())];
        let bold: Vec<String> = formatters.iter().map(|f| f.bold("x")).collect();
        assert_eq!(bold, vec!["x".to_string(), "**x**".to_string()]);
    }
}
