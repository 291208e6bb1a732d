//! `windcfg check`: load, validate, report.

use crate::cli::DocumentArgs;
use windcfg::config::BuildConfiguration;
use windcfg::error::Result;
use windcfg::variants::VariantPlan;

pub fn run(args: &DocumentArgs) -> Result<String> {
    let config = BuildConfiguration::load_with(&args.config, args.load_options())?;
    let result = config.validate();
    let plan = VariantPlan::resolve(&config)?;

    let mut out = result.format_report();
    out.push_str(&format!(
        "ok: {} (content globs: {}, plugins: {}, variant categories: {}, dark variants: {})\n",
        args.config.display(),
        config.content_globs().len(),
        config.plugins.len(),
        plan.categories().count(),
        plan.dark_selector().unwrap_or("off"),
    ));
    Ok(out)
}
