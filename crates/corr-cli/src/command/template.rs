//! Template command: emit the example input file.

use std::{fs, path::PathBuf};

use anyhow::Context;
use clap::Args;
use corr_analysis::template::example_csv;
use corr_table::format::FormatOptions;

#[derive(Debug, Clone, Args)]
pub(crate) struct TemplateArg {
    /// Write the example file here instead of stdout
    #[arg(long)]
    pub output: Option<PathBuf>,
}

pub(crate) fn run(arg: &TemplateArg) -> anyhow::Result<()> {
    let text = example_csv(&FormatOptions::default());
    match &arg.output {
        Some(path) => {
            fs::write(path, &text)
                .with_context(|| format!("failed to write {}", path.display()))?;
            println!("Example file written to {}", path.display());
        }
        None => print!("{text}"),
    }
    Ok(())
}
