//! Embedded client-side assets

/// Route the bundled glue script is served from.
pub const TABLE_OUTPUT_JS_ROUTE: &str = "/assets/table-output.js";

/// The client glue script: mounts Tabulator on `.tabulon-output` divs,
/// re-fetches payloads when a control changes, and shows errors in place of
/// the table.
pub const TABLE_OUTPUT_JS: &str = include_str!("../assets/table-output.js");

/// Stylesheet of the pinned Tabulator release.
pub const TABULATOR_CSS_URL: &str =
    "https://unpkg.com/tabulator-tables@5.5.2/dist/css/tabulator.min.css";
