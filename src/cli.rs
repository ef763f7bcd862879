use std::path::PathBuf;

#[derive(Debug)]
pub struct Args {
    /// The path to the file to strip
    pub file: PathBuf,
}

impl Args {
    /// Builds `Args` from the raw argument list (program name first).
    ///
    /// Anything other than exactly one argument after the program name
    /// yields the usage message instead. The argument is taken verbatim as
    /// a path; there are no flags.
    pub fn parse<I>(mut argv: I) -> Result<Self, String>
    where
        I: Iterator<Item = String>,
    {
        let program = argv.next().unwrap_or_else(|| env!("CARGO_PKG_NAME").to_string());
        match (argv.next(), argv.next()) {
            (Some(file), None) => Ok(Self {
                file: PathBuf::from(file),
            }),
            _ => Err(format!("Usage: {program} filename")),
        }
    }
}
