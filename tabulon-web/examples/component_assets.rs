//! Tabulator output with co-located component assets.
//!
//! The output declares its own client-side dependencies through
//! `bundled_assets()`; the server serves the glue script itself and the
//! page author adds no head content at all.

use std::fs::File;

use chrono::TimeZone;
use chrono::Utc;
use simplelog::{Config, LevelFilter, WriteLogger};
use tabulon_lib::error::FrameError;
use tabulon_lib::model::{Column, Frame, Scalar};
use tabulon_lib::output::{OutputValue, RenderContext, source_fn};
use tabulon_web::page::{Page, Slider, TableOutput};
use tabulon_web::server::Server;
use tokio_util::sync::CancellationToken;

/// Builds a small staff table covering every column type.
fn staff_frame() -> Result<Frame, FrameError> {
    let first_names = ["Alice", "Bob", "Charlie", "Diana", "Eve", "Frank", "Grace", "Henry"];
    let last_names = ["Smith", "Johnson", "Williams", "Brown", "Jones", "Garcia", "Miller"];
    let departments = ["Engineering", "Sales", "Marketing", "HR", "Finance"];

    let mut ids = Vec::new();
    let mut names = Vec::new();
    let mut depts = Vec::new();
    let mut salaries = Vec::new();
    let mut hired = Vec::new();
    let mut active = Vec::new();

    for i in 1..=40usize {
        let first = first_names[i % first_names.len()];
        let last = last_names[i % last_names.len()];

        ids.push(Scalar::from(i as i64));
        names.push(Scalar::from(format!("{} {}", first, last)));
        depts.push(Scalar::from(departments[i % departments.len()]));
        salaries.push(Scalar::from(48_000.0 + (i % 9) as f64 * 3_250.0));
        hired.push(Scalar::from(
            Utc.with_ymd_and_hms(
                2018 + (i % 6) as i32,
                ((i % 12) + 1) as u32,
                ((i % 28) + 1) as u32,
                9,
                0,
                0,
            )
            .unwrap(),
        ));
        active.push(Scalar::from(i % 7 != 0));
    }

    Frame::new(vec![
        Column::new("id", ids)?,
        Column::new("name", names)?,
        Column::new("department", depts)?,
        Column::new("salary", salaries)?,
        Column::new("hired", hired)?,
        Column::new("active", active)?,
    ])
}

#[tokio::main]
async fn main() {
    let log_file = File::create("component_assets.log").expect("Failed to create log file");
    WriteLogger::init(LevelFilter::Debug, Config::default(), log_file)
        .expect("Failed to initialize logger");

    let source = source_fn(|ctx: RenderContext| async move {
        let n = ctx.inputs().get_usize("n")?;
        let frame = staff_frame()?;
        let value: OutputValue = frame.head(n).into();
        Ok(Some(value))
    });

    let page = Page::builder("Staff directory")
        .slider(Slider::new("n", "Number of rows", 1, 40).value(10))
        .output(
            TableOutput::new("staff", source)
                .height("320px")
                .bundled_assets(),
        )
        .build()
        .expect("Failed to build page");

    let server = Server::bind("127.0.0.1:8001").await.expect("Failed to bind");
    let url = format!("http://{}/", server.local_addr());
    println!("Serving on {url}");
    let _ = open::that(&url);

    if let Err(e) = server.serve(page, CancellationToken::new()).await {
        eprintln!("Error: {}", e);
    }
}
