//! `windcfg scan`: run the content scan a consuming build would run.

use crate::cli::ScanArgs;
use windcfg::config::BuildConfiguration;
use windcfg::error::Result;
use windcfg::scan::scan_content;

pub fn run(args: &ScanArgs) -> Result<String> {
    let config =
        BuildConfiguration::load_with(&args.document.config, args.document.load_options())?;
    let result = scan_content(&config, &args.root)?;

    let lines: Vec<&str> = if args.files {
        result.files.iter().map(String::as_str).collect()
    } else {
        result.candidates.iter().map(String::as_str).collect()
    };

    let mut out = String::new();
    for line in lines {
        out.push_str(line);
        out.push('\n');
    }
    Ok(out)
}
