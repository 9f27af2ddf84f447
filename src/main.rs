//! picbraille CLI - Convert images to Unicode braille art

use clap::Parser;
use picbraille::{config, decode, BrailleError, Converter, RenderConfig};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "picbraille",
    about = "Convert images (PNG/JPG/WEBP) to Unicode braille art"
)]
struct Args {
    /// Input image path
    #[arg(short, long)]
    input: PathBuf,
    /// Output text file path (defaults to stdout)
    #[arg(short, long)]
    output: Option<PathBuf>,
    /// Output width in braille characters
    #[arg(short, long, default_value = "0")]
    width: u32,
    /// Output height in braille characters
    #[arg(short = 'H', long, default_value = "0")]
    height: u32,
    /// Brightness threshold (0.0-1.0)
    #[arg(short, long, default_value = "0.5")]
    threshold: f32,
    /// Invert black and white
    #[arg(short = 'v', long)]
    invert: bool,
}

fn run(args: Args) -> Result<(), BrailleError> {
    config::validate_input_path(&args.input)?;

    let render = RenderConfig::default()
        .with_width(args.width)
        .with_height(args.height)
        .with_threshold(args.threshold)
        .with_invert(args.invert);
    let converter = Converter::new(render)?;

    let image = decode::open(&args.input)?;

    match args.output {
        Some(path) => {
            converter.convert_to_file(&image, &path)?;
            println!("ASCII art saved to {}", path.display());
        }
        None => print!("{}", converter.convert(&image)?),
    }
    Ok(())
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    if let Err(e) = run(Args::parse()) {
        log::debug!("conversion failed: {:?}", e);
        eprintln!("{}", e);
        std::process::exit(1);
    }
}
