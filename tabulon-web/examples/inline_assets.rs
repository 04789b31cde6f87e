//! Tabulator output with inline page includes.
//!
//! The page head lists the widget stylesheet and embeds the glue script
//! directly; the output element itself registers nothing. See
//! `component_assets.rs` for the bundled variant.

use std::fs::File;
use std::path::Path;
use std::path::PathBuf;

use async_trait::async_trait;
use simplelog::{Config, LevelFilter, WriteLogger};
use tabulon_lib::error::RenderError;
use tabulon_lib::model::Frame;
use tabulon_lib::output::{OutputValue, RenderContext, ValueSource};
use tabulon_web::assets;
use tabulon_web::page::{HeadContent, Page, Slider, TableOutput};
use tabulon_web::server::Server;
use tokio_util::sync::CancellationToken;

/// Reads the demo dataset fresh on every render cycle, truncated to the
/// slider value.
struct MtcarsSource {
    path: PathBuf,
}

#[async_trait]
impl ValueSource for MtcarsSource {
    async fn resolve(&self, ctx: &RenderContext) -> Result<Option<OutputValue>, RenderError> {
        let n = ctx.inputs().get_usize("n")?;
        let frame = Frame::from_csv(&self.path)?;
        Ok(Some(frame.head(n).into()))
    }
}

#[tokio::main]
async fn main() {
    let log_file = File::create("inline_assets.log").expect("Failed to create log file");
    WriteLogger::init(LevelFilter::Debug, Config::default(), log_file)
        .expect("Failed to initialize logger");

    let data = Path::new(env!("CARGO_MANIFEST_DIR")).join("examples/data/mtcars.csv");

    let page = Page::builder("Motor Trend cars")
        .head(HeadContent::stylesheet(assets::TABULATOR_CSS_URL))
        .head(HeadContent::inline_script_module(assets::TABLE_OUTPUT_JS))
        .slider(Slider::new("n", "Number of rows", 1, 20).value(5))
        .output(TableOutput::new("mtcars", MtcarsSource { path: data }))
        .build()
        .expect("Failed to build page");

    let server = Server::bind("127.0.0.1:8000").await.expect("Failed to bind");
    let url = format!("http://{}/", server.local_addr());
    println!("Serving on {url}");
    let _ = open::that(&url);

    if let Err(e) = server.serve(page, CancellationToken::new()).await {
        eprintln!("Error: {}", e);
    }
}
