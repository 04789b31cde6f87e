//! Tests for page assembly.

use async_trait::async_trait;
use tabulon_lib::error::RenderError;
use tabulon_lib::output::{OutputValue, RenderContext, ValueSource};
use tabulon_web::assets;
use tabulon_web::error::PageError;
use tabulon_web::page::{HeadContent, Page, Slider, TableOutput};

struct NoData;

#[async_trait]
impl ValueSource for NoData {
    async fn resolve(&self, _ctx: &RenderContext) -> Result<Option<OutputValue>, RenderError> {
        Ok(None)
    }
}

#[test]
fn test_page_html_contains_slider_and_output() {
    let page = Page::builder("Demo")
        .slider(Slider::new("n", "Number of rows", 1, 20).value(5))
        .output(TableOutput::new("table1", NoData))
        .build()
        .unwrap();
    let html = page.to_html();

    assert!(html.starts_with("<!DOCTYPE html>"));
    assert!(html.contains("<title>Demo</title>"));
    assert!(html.contains("input type=\"range\""));
    assert!(html.contains("id=\"n\""));
    assert!(html.contains("<div id=\"table1\" class=\"tabulon-output\" style=\"height: 200px\">"));
}

#[test]
fn test_output_height_can_be_overridden() {
    let page = Page::builder("Demo")
        .output(TableOutput::new("t", NoData).height("320px"))
        .build()
        .unwrap();

    assert!(page.to_html().contains("height: 320px"));
}

#[test]
fn test_inline_head_includes_render_in_registration_order() {
    let page = Page::builder("Demo")
        .head(HeadContent::stylesheet(assets::TABULATOR_CSS_URL))
        .head(HeadContent::inline_script_module("console.log(1);"))
        .output(TableOutput::new("t", NoData))
        .build()
        .unwrap();
    let html = page.to_html();

    let css = html.find(assets::TABULATOR_CSS_URL).unwrap();
    let script = html.find("console.log(1);").unwrap();
    assert!(css < script);
}

#[test]
fn test_bundled_output_registers_widget_assets() {
    let page = Page::builder("Demo")
        .output(TableOutput::new("t", NoData).bundled_assets())
        .build()
        .unwrap();
    let html = page.to_html();

    assert!(html.contains(assets::TABULATOR_CSS_URL));
    assert!(html.contains(assets::TABLE_OUTPUT_JS_ROUTE));
}

#[test]
fn test_inline_page_does_not_register_asset_route() {
    let page = Page::builder("Demo")
        .head(HeadContent::inline_script_module(assets::TABLE_OUTPUT_JS))
        .output(TableOutput::new("t", NoData))
        .build()
        .unwrap();

    assert!(!page.has_bundled_outputs());
    assert!(
        !page
            .to_html()
            .contains(&format!("src=\"{}\"", assets::TABLE_OUTPUT_JS_ROUTE))
    );
}

#[test]
fn test_duplicate_output_id_rejected() {
    let err = Page::builder("Demo")
        .output(TableOutput::new("t", NoData))
        .output(TableOutput::new("t", NoData))
        .build()
        .unwrap_err();

    match err {
        PageError::DuplicateOutput { id } => assert_eq!(id, "t"),
    }
}

#[test]
fn test_output_lookup_by_id() {
    let page = Page::builder("Demo")
        .output(TableOutput::new("a", NoData))
        .output(TableOutput::new("b", NoData))
        .build()
        .unwrap();

    assert_eq!(page.output("b").unwrap().id(), "b");
    assert!(page.output("c").is_none());
}
