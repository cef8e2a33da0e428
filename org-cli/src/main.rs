//! Command-line interface for the org pipeline
//! This binary converts a single org document into an HTML body fragment,
//! or dumps the intermediate token stream / AST as JSON for inspection.
//!
//! Usage:
//!   org `<path>`                        - Render the HTML body fragment
//!   org `<path>` --format ast-json      - Dump the parsed tree as JSON
//!   org `<path>` --format token-json    - Dump the token stream as JSON

use clap::{Arg, Command};
use org_parser::DocumentLoader;

fn main() {
    let matches = Command::new("org")
        .version(env!("CARGO_PKG_VERSION"))
        .about("A tool for converting and inspecting org documents")
        .arg_required_else_help(true)
        .arg(
            Arg::new("path")
                .help("Path to the org file")
                .required(true)
                .index(1),
        )
        .arg(
            Arg::new("format")
                .long("format")
                .short('f')
                .help("Output format: html, ast-json, token-json")
                .default_value("html"),
        )
        .get_matches();

    let path = matches
        .get_one::<String>("path")
        .expect("path is a required argument");
    let format = matches
        .get_one::<String>("format")
        .expect("format has a default value");

    let loader = DocumentLoader::from_path(path).unwrap_or_else(|e| {
        eprintln!("Error reading {}: {}", path, e);
        std::process::exit(1);
    });

    let output = match format.as_str() {
        "html" => org_html::render_body(&loader.parse()),
        "ast-json" => serde_json::to_string_pretty(&loader.parse()).unwrap_or_else(|e| {
            eprintln!("Error formatting AST: {}", e);
            std::process::exit(1);
        }),
        "token-json" => serde_json::to_string_pretty(&loader.tokenize()).unwrap_or_else(|e| {
            eprintln!("Error formatting tokens: {}", e);
            std::process::exit(1);
        }),
        other => {
            eprintln!("Format '{}' not supported", other);
            eprintln!("Available formats: html, ast-json, token-json");
            std::process::exit(1);
        }
    };

    print!("{}", output);
}
