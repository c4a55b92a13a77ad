use std::error::Error;

use bmi_cli::{
    args::{Cli, Command},
    terminal::TerminalView,
};
use bmi_form::{principles, ListView, RawForm, SubmitHandler};
use clap::Parser;
use log::info;

fn main() -> Result<(), Box<dyn Error>> {
    let cli = Cli::parse();
    log4rs::init_file(&cli.log_config, Default::default())?;

    match cli.command {
        Command::Evaluate {
            name,
            weight,
            height,
        } => {
            let mut handler = SubmitHandler::new(Box::new(TerminalView::stdio()));
            let form = RawForm {
                name,
                weight,
                height,
            };
            bmi_cli::evaluate(&mut handler, &form)?;
        }
        Command::Principles => {
            info!("Rendering {} principles", principles::DATA_PRINCIPLES.len());
            let mut view = TerminalView::stdio();
            principles::render_principles(Some(&mut view as &mut dyn ListView));
        }
    }

    Ok(())
}
