use clap::{Parser, Subcommand};

use self::{analyze::AnalyzeArg, template::TemplateArg};

mod analyze;
mod template;

#[derive(Debug, Clone, Parser)]
#[command(author, version, about, long_about = None)]
pub struct CommandArgs {
    #[command(subcommand)]
    mode: Mode,
}

#[derive(Debug, Clone, Subcommand)]
enum Mode {
    /// Run the correlation analysis pipeline over a delimited file
    Analyze(#[clap(flatten)] AnalyzeArg),
    /// Emit the two-column example file in the expected input format
    Template(#[clap(flatten)] TemplateArg),
}

pub fn run() -> anyhow::Result<()> {
    let args = CommandArgs::parse();
    match args.mode {
        Mode::Analyze(arg) => analyze::run(&arg)?,
        Mode::Template(arg) => template::run(&arg)?,
    }
    Ok(())
}
