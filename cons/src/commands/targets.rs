use clap::Args;
use eyre::Result;

use crate::reports::{Report, TargetsReport, TerminalOutput};

#[derive(Args)]
pub struct TargetsCommand {}

impl TargetsCommand {
    pub fn run(&self) -> Result<()> {
        TargetsReport::all().render(&mut TerminalOutput::new());
        Ok(())
    }
}
