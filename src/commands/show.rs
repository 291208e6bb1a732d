//! `windcfg show`: print the normalized record.

use crate::cli::ShowArgs;
use windcfg::config::BuildConfiguration;
use windcfg::error::Result;

pub fn run(args: &ShowArgs) -> Result<String> {
    let config =
        BuildConfiguration::load_with(&args.document.config, args.document.load_options())?;
    render(&config, args.json)
}

/// Render a record as YAML or JSON, newline-terminated.
pub(super) fn render(config: &BuildConfiguration, json: bool) -> Result<String> {
    let mut out = if json {
        config.to_json()?
    } else {
        config.to_yaml()?
    };
    if !out.ends_with('\n') {
        out.push('\n');
    }
    Ok(out)
}
