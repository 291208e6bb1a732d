//! `windcfg merge`: explicit merge of two independent documents.

use super::show::render;
use crate::cli::MergeArgs;
use windcfg::config::{BuildConfiguration, LoadOptions};
use windcfg::error::Result;

pub fn run(args: &MergeArgs) -> Result<String> {
    let options = LoadOptions { mode: args.mode };
    let first = BuildConfiguration::load_with(&args.first, options)?;
    let second = BuildConfiguration::load_with(&args.second, options)?;

    render(&first.merged_with(&second), args.json)
}
