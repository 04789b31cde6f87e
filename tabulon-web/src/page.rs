//! Declarative page assembly

use std::collections::HashSet;
use std::fmt;
use std::sync::Arc;

use tabulon_lib::output::ValueSource;

use crate::assets;
use crate::error::PageError;

// =============================================================================
// Head content
// =============================================================================

/// One entry in the page head.
#[derive(Debug, Clone, PartialEq)]
pub enum HeadContent {
    /// External module script include.
    ScriptModule { src: String },
    /// Inline module script.
    InlineScriptModule { body: String },
    /// Stylesheet link.
    Stylesheet { href: String },
}

impl HeadContent {
    /// Creates a `<script type="module" src=…>` include.
    pub fn script_module(src: impl Into<String>) -> Self {
        Self::ScriptModule { src: src.into() }
    }

    /// Creates an inline `<script type="module">` with the given body.
    pub fn inline_script_module(body: impl Into<String>) -> Self {
        Self::InlineScriptModule { body: body.into() }
    }

    /// Creates a `<link rel="stylesheet">` include.
    pub fn stylesheet(href: impl Into<String>) -> Self {
        Self::Stylesheet { href: href.into() }
    }

    fn to_html(&self) -> String {
        match self {
            Self::ScriptModule { src } => {
                format!("<script type=\"module\" src=\"{}\"></script>", src)
            }
            Self::InlineScriptModule { body } => {
                format!("<script type=\"module\">\n{}\n</script>", body)
            }
            Self::Stylesheet { href } => {
                format!("<link rel=\"stylesheet\" href=\"{}\">", href)
            }
        }
    }
}

// =============================================================================
// Controls
// =============================================================================

/// A labeled range control.
///
/// The control's current value is sent to every output endpoint under the
/// control's id, and the glue script re-renders all outputs on change.
#[derive(Debug, Clone, PartialEq)]
pub struct Slider {
    id: String,
    label: String,
    min: i64,
    max: i64,
    value: i64,
}

impl Slider {
    /// Creates a new slider with the initial value at `min`.
    pub fn new(id: impl Into<String>, label: impl Into<String>, min: i64, max: i64) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            min,
            max,
            value: min,
        }
    }

    /// Sets the initial value.
    pub fn value(mut self, value: i64) -> Self {
        self.value = value;
        self
    }

    /// Returns the control id.
    pub fn id(&self) -> &str {
        &self.id
    }

    fn to_html(&self) -> String {
        format!(
            "<div class=\"tabulon-control\">\
             <label for=\"{id}\">{label}: <span data-value-for=\"{id}\">{value}</span></label> \
             <input type=\"range\" id=\"{id}\" name=\"{id}\" min=\"{min}\" max=\"{max}\" value=\"{value}\">\
             </div>",
            id = self.id,
            label = self.label,
            min = self.min,
            max = self.max,
            value = self.value,
        )
    }
}

// =============================================================================
// Table output
// =============================================================================

/// A table output element bound to a value source.
///
/// Renders as a `div` the glue script mounts Tabulator on; the server
/// answers `/output/{id}` with one render cycle against the source.
pub struct TableOutput {
    id: String,
    height: String,
    bundled: bool,
    source: Arc<dyn ValueSource>,
}

impl TableOutput {
    /// Creates a new output with the default 200px height.
    pub fn new(id: impl Into<String>, source: impl ValueSource + 'static) -> Self {
        Self {
            id: id.into(),
            height: "200px".to_string(),
            bundled: false,
            source: Arc::new(source),
        }
    }

    /// Sets the CSS height of the output element.
    pub fn height(mut self, height: impl Into<String>) -> Self {
        self.height = height.into();
        self
    }

    /// Lets the output carry its own client-side dependencies.
    ///
    /// Building the page then registers the widget stylesheet and the glue
    /// script's asset route in the head, so the page author adds nothing.
    pub fn bundled_assets(mut self) -> Self {
        self.bundled = true;
        self
    }

    /// Returns the output id.
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Returns `true` if this output registers its own assets.
    pub fn uses_bundled_assets(&self) -> bool {
        self.bundled
    }

    /// Returns the value source behind this output.
    pub fn source(&self) -> &dyn ValueSource {
        self.source.as_ref()
    }

    fn to_html(&self) -> String {
        format!(
            "<div id=\"{}\" class=\"tabulon-output\" style=\"height: {}\"></div>",
            self.id, self.height
        )
    }
}

impl fmt::Debug for TableOutput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TableOutput")
            .field("id", &self.id)
            .field("height", &self.height)
            .field("bundled", &self.bundled)
            .finish_non_exhaustive()
    }
}

// =============================================================================
// Page
// =============================================================================

/// An assembled page: head includes, controls, and outputs.
#[derive(Debug)]
pub struct Page {
    title: String,
    head: Vec<HeadContent>,
    sliders: Vec<Slider>,
    outputs: Vec<TableOutput>,
}

impl Page {
    /// Starts building a page with the given title.
    pub fn builder(title: impl Into<String>) -> PageBuilder {
        PageBuilder {
            title: title.into(),
            head: Vec::new(),
            sliders: Vec::new(),
            outputs: Vec::new(),
        }
    }

    /// Returns the output with the given id, if registered.
    pub fn output(&self, id: &str) -> Option<&TableOutput> {
        self.outputs.iter().find(|o| o.id() == id)
    }

    /// Returns `true` if any output registered bundled assets.
    pub fn has_bundled_outputs(&self) -> bool {
        self.outputs.iter().any(TableOutput::uses_bundled_assets)
    }

    /// Renders the whole page as HTML.
    pub fn to_html(&self) -> String {
        let mut html = String::new();
        html.push_str("<!DOCTYPE html>\n<html>\n<head>\n");
        html.push_str("    <meta charset=\"utf-8\">\n");
        html.push_str(&format!("    <title>{}</title>\n", self.title));
        for content in &self.head {
            html.push_str(&format!("    {}\n", content.to_html()));
        }
        html.push_str("</head>\n<body>\n");
        for slider in &self.sliders {
            html.push_str(&format!("    {}\n", slider.to_html()));
        }
        for output in &self.outputs {
            html.push_str(&format!("    {}\n", output.to_html()));
        }
        html.push_str("</body>\n</html>\n");
        html
    }
}

/// Builder for [`Page`].
#[derive(Debug)]
pub struct PageBuilder {
    title: String,
    head: Vec<HeadContent>,
    sliders: Vec<Slider>,
    outputs: Vec<TableOutput>,
}

impl PageBuilder {
    /// Appends head content.
    pub fn head(mut self, content: HeadContent) -> Self {
        self.head.push(content);
        self
    }

    /// Appends a slider control.
    pub fn slider(mut self, slider: Slider) -> Self {
        self.sliders.push(slider);
        self
    }

    /// Appends a table output.
    pub fn output(mut self, output: TableOutput) -> Self {
        self.outputs.push(output);
        self
    }

    /// Assembles the page.
    ///
    /// When any output uses bundled assets, the widget stylesheet and the
    /// glue script route are appended to the head here.
    ///
    /// # Errors
    ///
    /// Returns [`PageError::DuplicateOutput`] when two outputs share an id.
    pub fn build(self) -> Result<Page, PageError> {
        let mut seen = HashSet::new();
        for output in &self.outputs {
            if !seen.insert(output.id().to_string()) {
                return Err(PageError::duplicate_output(output.id()));
            }
        }

        let mut head = self.head;
        if self.outputs.iter().any(TableOutput::uses_bundled_assets) {
            head.push(HeadContent::stylesheet(assets::TABULATOR_CSS_URL));
            head.push(HeadContent::script_module(assets::TABLE_OUTPUT_JS_ROUTE));
        }

        Ok(Page {
            title: self.title,
            head,
            sliders: self.sliders,
            outputs: self.outputs,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_head_content_html() {
        assert_eq!(
            HeadContent::stylesheet("https://example.com/a.css").to_html(),
            "<link rel=\"stylesheet\" href=\"https://example.com/a.css\">"
        );
        assert_eq!(
            HeadContent::script_module("/assets/x.js").to_html(),
            "<script type=\"module\" src=\"/assets/x.js\"></script>"
        );
    }

    #[test]
    fn test_inline_script_html_wraps_body() {
        let html = HeadContent::inline_script_module("console.log(1);").to_html();
        assert!(html.starts_with("<script type=\"module\">"));
        assert!(html.contains("console.log(1);"));
        assert!(html.ends_with("</script>"));
    }

    #[test]
    fn test_slider_html() {
        let html = Slider::new("n", "Rows", 1, 20).value(5).to_html();
        assert!(html.contains("id=\"n\""));
        assert!(html.contains("min=\"1\""));
        assert!(html.contains("max=\"20\""));
        assert!(html.contains("value=\"5\""));
        assert!(html.contains("data-value-for=\"n\""));
    }

    #[test]
    fn test_slider_defaults_to_min() {
        let html = Slider::new("n", "Rows", 3, 9).to_html();
        assert!(html.contains("value=\"3\""));
    }
}
