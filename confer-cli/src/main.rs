use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use colored::*;
use confer_capture::{CaptureConfig, FileFrameGenerator, VideoFrameGenerator};
use std::path::PathBuf;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "confer")]
#[command(about = "Inspect and replay raw I420 frame sources")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show frame geometry and how many frames the source holds.
    Inspect {
        #[command(flatten)]
        source: SourceArgs,
    },
    /// Pull frames through the generator, wrapping around like a live feed.
    Frames {
        #[command(flatten)]
        source: SourceArgs,

        #[arg(short = 'n', long, default_value_t = 10)]
        count: usize,
    },
}

#[derive(Args)]
struct SourceArgs {
    /// JSON capture config; flags below override its fields.
    #[arg(long)]
    config: Option<PathBuf>,

    #[arg(short, long)]
    source: Option<PathBuf>,

    #[arg(long)]
    width: Option<u32>,

    #[arg(long)]
    height: Option<u32>,

    #[arg(long)]
    fps: Option<u32>,
}

impl SourceArgs {
    fn resolve(self) -> Result<CaptureConfig> {
        let mut config = match &self.config {
            Some(path) => CaptureConfig::from_json_file(path)
                .with_context(|| format!("Failed to load config {}", path.display()))?,
            None => CaptureConfig::default(),
        };

        if let Some(source) = self.source {
            config.source_path = source;
        }
        if let Some(width) = self.width {
            config.width = width;
        }
        if let Some(height) = self.height {
            config.height = height;
        }
        if let Some(fps) = self.fps {
            config.fps = fps;
        }

        config.validate().context("Invalid capture settings")?;
        info!(
            "Using {} at {}x{} @ {} fps",
            config.source_path.display(),
            config.width,
            config.height,
            config.fps
        );
        Ok(config)
    }
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Inspect { source } => inspect(source.resolve()?),
        Commands::Frames { source, count } => frames(source.resolve()?, count),
    }
}

fn inspect(config: CaptureConfig) -> Result<()> {
    let generator = FileFrameGenerator::from_config(&config);
    let geometry = generator.geometry();

    println!("{}", "📐 Frame geometry".cyan().bold());
    println!(
        "   {}x{} I420 @ {} fps",
        geometry.width,
        geometry.height,
        generator.fps()
    );
    println!(
        "   Y: {} bytes, U/V: {} bytes each, frame: {} bytes",
        geometry.luma_size(),
        geometry.chroma_size(),
        geometry.frame_size()
    );

    println!("{}", "📂 Source".cyan().bold());
    println!("   {}", generator.source_name());

    if !generator.is_available() {
        anyhow::bail!("Source {} could not be opened", generator.source_name());
    }

    match (
        generator.store_len(),
        generator.whole_frames(),
        generator.trailing_bytes(),
    ) {
        (Some(len), Some(frames), Some(trailing)) => {
            println!("   {} bytes, {} whole frame(s)", len, frames);
            if frames == 0 {
                println!("{}", "   ⚠️  Shorter than one frame".yellow());
            }
            if trailing > 0 {
                println!(
                    "{}",
                    format!("   ⚠️  {} trailing byte(s) are skipped on wraparound", trailing)
                        .yellow()
                );
            }
        }
        _ => println!("   length unknown"),
    }

    Ok(())
}

fn frames(config: CaptureConfig, count: usize) -> Result<()> {
    let mut generator = FileFrameGenerator::from_config(&config);
    let luma_size = generator.geometry().luma_size();

    println!(
        "{}",
        format!("🎞️  Generating {} frame(s) from {}", count, generator.source_name())
            .green()
            .bold()
    );

    for index in 0..count {
        let frame = generator
            .generate_next_frame()
            .with_context(|| format!("Frame {} failed", index))?;
        debug!("Frame {} of {} generated", index + 1, count);

        let luma = &frame[..luma_size];
        let mean = if luma.is_empty() {
            0.0
        } else {
            luma.iter().map(|&b| b as f64).sum::<f64>() / luma.len() as f64
        };

        println!(
            "   #{:<5} {} bytes, mean luma {:.1}",
            index,
            frame.len(),
            mean
        );
    }

    println!("{}", "✨ Done".green().bold());
    Ok(())
}
