mod cli;
mod error;
mod strip;

use std::io;

use color_eyre::Result;

use crate::cli::Args;

fn main() -> Result<()> {
    color_eyre::install()?;
    let args = match Args::parse(std::env::args()) {
        Ok(args) => args,
        // wrong argument count is a deliberate early exit, not a failure
        Err(usage) => {
            println!("{usage}");
            return Ok(());
        }
    };
    let stdout = io::stdout().lock();
    strip::strip_file(&args.file, stdout)?;
    Ok(())
}
