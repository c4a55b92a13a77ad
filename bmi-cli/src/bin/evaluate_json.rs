use std::{error::Error, fs::File, io::BufReader};

use bmi_cli::{args::BatchCli, batch, terminal::TerminalView};
use clap::Parser;
use log::info;

fn main() -> Result<(), Box<dyn Error>> {
    let cli = BatchCli::parse();
    log4rs::init_file(&cli.log_config, Default::default())?;

    info!("Reading forms from {}", cli.file.display());
    let file = File::open(&cli.file)?;
    let mut view = TerminalView::stdio();
    let summary = batch::evaluate_batch(BufReader::new(file), &mut view)?;
    summary.check()?;

    Ok(())
}
