use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use pixel_quant::{PaletteBuilder, PixelArtRenderer};
use pixelize::codec;

#[derive(Parser)]
#[command(name = "pixelize")]
#[command(about = "Convert raster images into palette-quantized pixel art")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Convert an image to pixel art and write the result as PNG
    Convert {
        /// Input image (PNG)
        input: PathBuf,

        /// Output PNG file path
        output: PathBuf,

        /// Block edge length in pixels
        #[arg(short, long, default_value_t = 8)]
        pixel_size: usize,

        /// Number of palette colors to generate
        #[arg(short = 'c', long, default_value_t = 16)]
        palette_size: usize,

        /// Enable Floyd-Steinberg error diffusion
        #[arg(short, long)]
        dither: bool,
    },
    /// Print the palette that would be generated for an image
    Palette {
        /// Input image (PNG)
        input: PathBuf,

        /// Number of palette colors to generate
        #[arg(short = 'c', long, default_value_t = 16)]
        palette_size: usize,
    },
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "pixelize=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().without_time())
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Convert {
            input,
            output,
            pixel_size,
            palette_size,
            dither,
        } => run_convert(&input, &output, pixel_size, palette_size, dither),
        Commands::Palette {
            input,
            palette_size,
        } => run_palette(&input, palette_size),
    }
}

/// Decode, convert, encode.
fn run_convert(
    input: &PathBuf,
    output: &PathBuf,
    pixel_size: usize,
    palette_size: usize,
    dither: bool,
) -> anyhow::Result<()> {
    let source = codec::read_png(input)?;
    tracing::info!(
        width = source.width(),
        height = source.height(),
        "Loaded {}",
        input.display()
    );

    let art = PixelArtRenderer::new()
        .pixel_size(pixel_size)
        .palette_size(palette_size)
        .dither(dither)
        .render(&source)?;

    codec::write_png(output, &art)?;
    tracing::info!(pixel_size, palette_size, dither, "Wrote {}", output.display());
    Ok(())
}

/// Print the generated palette as one hex color per line.
fn run_palette(input: &PathBuf, palette_size: usize) -> anyhow::Result<()> {
    if palette_size == 0 {
        anyhow::bail!("palette size must be at least 1");
    }

    let source = codec::read_png(input)?;
    let palette = PaletteBuilder::new(palette_size).build(&source);

    for color in palette.colors() {
        println!("#{:02X}{:02X}{:02X}", color.r, color.g, color.b);
    }
    Ok(())
}
