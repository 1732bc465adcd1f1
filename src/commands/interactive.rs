use crate::{config::StarterConfig, display, display::print_info, form, Result};
use clap::Args;
use workbench_core::{CommandLayout, StartupGuide};

#[derive(Args)]
pub struct InteractiveArgs {
    /// Render the start command on a single line instead of the multi-line layout
    #[arg(long)]
    pub single_line: bool,
}

pub fn handle(args: InteractiveArgs, config: &StarterConfig) -> Result<()> {
    print_info("Answer the prompts to assemble your DL Workbench starting command.");
    let command_config = form::run_form()?;

    let layout = if args.single_line {
        CommandLayout::SingleLine
    } else {
        CommandLayout::MultiLine
    };
    let guide = StartupGuide::assemble(&command_config, config.defaults(), layout);

    println!();
    display::print_guide(&command_config, &guide);
    Ok(())
}
