use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{CommandFactory, Parser};
use serde_json::{Map, Value};

use crate::config::EffectiveConfig;

#[derive(Debug, Parser)]
#[command(
    name = "wpreport",
    version,
    about = "Turn a WPScan JSON result into a static HTML report"
)]
pub struct Cli {
    #[arg(
        value_name = "JSON_FILE",
        help = "WPScan result produced with `--format json`"
    )]
    pub input: Option<PathBuf>,
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();

    let Some(input) = cli.input else {
        crate::ui::print_usage(&Cli::command().render_usage().to_string());
        return Err(crate::exit::invalid_args(
            "missing path to a WPScan JSON file",
        ));
    };

    let cfg = EffectiveConfig::default();
    let written = generate(&input, &cfg)?;
    crate::ui::print_generated(&written);
    Ok(())
}

pub fn generate(input: &Path, cfg: &EffectiveConfig) -> Result<PathBuf> {
    let output = crate::config::output_path(input, &cfg.output)?;
    let raw = load_scan(input).map_err(crate::exit::input_err)?;

    let report = crate::extract::extract(&raw);
    let html = crate::render::render_with(&report, &cfg.report);

    crate::render::write_html(&html, &output).map_err(crate::exit::output_err)
}

fn load_scan(path: &Path) -> Result<Map<String, Value>> {
    let s = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read scan result: {}", path.display()))?;
    let value: Value = serde_json::from_str(&s)
        .with_context(|| format!("failed to parse scan result as JSON: {}", path.display()))?;
    match value {
        Value::Object(map) => Ok(map),
        other => Err(anyhow::anyhow!(
            "scan result must be a JSON object, found {}: {}",
            json_kind(&other),
            path.display()
        )),
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
