use clap::Parser;
use color_eyre::eyre::Result;
use outform::formatter::FormatKind;
use outform::output::{output_path, write_format};
use std::path::PathBuf;
use std::process::ExitCode;

#[derive(Debug, Parser)]
#[clap(name = "outform", version)]
pub struct CLArgs {
    /// Payload rendered into every output format.
    #[clap(default_value = "Hello, World!")]
    pub payload: String,
    /// Directory the output files are written into.
    #[clap(long = "out-dir", default_value = ".")]
    pub out_dir: PathBuf,
}

fn main() -> ExitCode {
    outform_main().expect("Encountered an error!")
}

fn outform_main() -> Result<ExitCode> {
    color_eyre::install().expect("Can't fail at first call!");
    let args = CLArgs::parse();
    for kind in FormatKind::ALL {
        eprintln!("Writing {:?}...", output_path(&args.out_dir, kind));
        write_format(&args.out_dir, kind, &args.payload)?;
    }
    Ok(ExitCode::SUCCESS)
}
