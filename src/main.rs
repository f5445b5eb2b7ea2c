use std::{path::PathBuf, process::ExitCode};

use clap::Parser;
use tracing::{debug, error};

use exr2ldr::{ChannelMode, ConvertSettings, Converter};

/// Converts HDR OpenEXR images into 8-bit sRGB PNG images.
///
/// Pixel value [0.0, 1.0] in EXR is mapped to [0, 255] for the LDR image.
#[derive(Parser, Debug)]
#[command(name = "exr2ldr", version)]
struct Args {
    /// Input exr file, or a directory of exr files
    input: PathBuf,
    /// Output png file, or a directory to write png files into
    output: PathBuf,
    /// Output channels, `rgb` or `rgba`
    #[arg(default_value_t = ChannelMode::Rgba)]
    mode: ChannelMode,
}

fn main() -> ExitCode {
    let args = Args::parse();
    exr2ldr::initialize_logger();

    debug!("exr2ldr {}", exr2ldr::VERSION);

    let converter = Converter::with_settings(ConvertSettings { mode: args.mode });

    match converter.convert_path(&args.input, &args.output) {
        Ok(_) => ExitCode::SUCCESS,
        Err(err) => {
            error!("{}", err);
            ExitCode::FAILURE
        }
    }
}
