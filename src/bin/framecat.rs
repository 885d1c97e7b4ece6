use std::{path::PathBuf, sync::Arc};

use clap::{CommandFactory, Parser, Subcommand};
use clap_complete::Shell;
use colored::Colorize;
use framecat::{
    ExtractOptions, GifProbe, OperationType, ProgressCallback, ProgressInfo, process_folder,
};
use indicatif::{ProgressBar, ProgressStyle};
use serde_json::json;

const CLI_AFTER_HELP: &str = "Examples:\n  framecat convert --out output_frames --sort --progress\n  framecat convert ./gifs --size 64 --min-frames 60\n  framecat probe input.gif --json\n  framecat completions zsh > _framecat";

#[derive(Debug, Parser)]
#[command(
    name = "framecat",
    version,
    about = "Flatten folders of animated GIFs into numbered JPEG frame sequences",
    after_help = CLI_AFTER_HELP
)]
struct Cli {
    #[command(flatten)]
    global: GlobalOptions,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Parser, Clone, Default)]
struct GlobalOptions {
    /// Show additional logging output.
    #[arg(long)]
    verbose: bool,

    /// Show a progress bar where supported.
    #[arg(long)]
    progress: bool,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Convert a folder of GIFs into one numbered frame sequence.
    #[command(
        about = "Convert GIFs to numbered JPEG frames",
        visible_alias = "run",
        after_help = "Examples:\n  framecat convert\n  framecat convert ./gifs --out frames --sort --progress"
    )]
    Convert {
        /// Input directory containing GIF files.
        #[arg(default_value = ".")]
        input: PathBuf,

        /// Output directory for the flattened frame sequence.
        #[arg(long, default_value = "./output_frames")]
        out: PathBuf,

        /// Output frame edge length in pixels (frames are square).
        #[arg(long, default_value_t = framecat::DEFAULT_FRAME_SIZE)]
        size: u32,

        /// Minimum frames per GIF; shorter animations loop up to this.
        #[arg(long, default_value_t = framecat::DEFAULT_MIN_FRAMES)]
        min_frames: u64,

        /// Sort matched GIF names before processing for deterministic
        /// output ordering.
        #[arg(long)]
        sort: bool,
    },

    /// Print metadata for a GIF file (alias: info).
    #[command(
        about = "Print GIF metadata",
        visible_alias = "info",
        after_help = "Examples:\n  framecat probe input.gif\n  framecat probe input.gif --json"
    )]
    Probe {
        /// Input GIF path.
        input: PathBuf,

        /// Output metadata as machine-readable JSON.
        #[arg(long)]
        json: bool,
    },

    /// Generate shell completion scripts.
    #[command(about = "Generate shell completions")]
    Completions {
        #[arg(value_enum)]
        shell: Shell,
    },
}

/// Drives an `indicatif` bar from folder-level progress callbacks.
struct TerminalProgress {
    bar: ProgressBar,
}

impl TerminalProgress {
    fn new() -> Result<Self, Box<dyn std::error::Error>> {
        let bar = ProgressBar::no_length();
        let style =
            ProgressStyle::with_template("{spinner:.green} {bar:40.cyan/blue} {pos}/{len} {msg}")?;
        bar.set_style(style.progress_chars("##-"));
        Ok(Self { bar })
    }

    fn finish(&self) {
        self.bar.finish_with_message("done");
    }
}

impl ProgressCallback for TerminalProgress {
    fn on_progress(&self, info: &ProgressInfo) {
        if info.operation != OperationType::FolderProcessing {
            return;
        }
        if let Some(total) = info.total {
            self.bar.set_length(total);
        }
        self.bar.set_position(info.current);
    }
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Convert {
            input,
            out,
            size,
            min_frames,
            sort,
        } => {
            let mut options = ExtractOptions::new()
                .with_frame_size(size, size)
                .with_min_frames(min_frames)
                .with_sorted(sort);

            let progress_bar = if cli.global.progress {
                let terminal = Arc::new(TerminalProgress::new()?);
                options = options.with_progress(terminal.clone());
                Some(terminal)
            } else {
                None
            };

            if cli.global.verbose {
                eprintln!("converting {} -> {}", input.display(), out.display());
            }

            let summary = process_folder(&input, &out, &options)?;

            if let Some(bar) = progress_bar {
                bar.finish();
            }

            println!("{} {}", "success:".green().bold(), summary.to_string().green());
        }
        Commands::Probe { input, json } => {
            let metadata = GifProbe::probe(&input)?;
            if json {
                let payload = json!({
                    "path": input.display().to_string(),
                    "frame_count": metadata.frame_count,
                    "width": metadata.width,
                    "height": metadata.height,
                    "file_size_bytes": metadata.file_size,
                });
                println!("{}", serde_json::to_string_pretty(&payload)?);
            } else {
                println!("File: {}", input.display());
                println!("Frames: {}", metadata.frame_count);
                println!("Canvas: {}x{}", metadata.width, metadata.height);
                println!("Size: {} bytes", metadata.file_size);
            }
        }
        Commands::Completions { shell } => {
            let mut command = Cli::command();
            clap_complete::generate(shell, &mut command, "framecat", &mut std::io::stdout());
        }
    }

    Ok(())
}

fn main() {
    if let Err(error) = run() {
        eprintln!("error: {error}");
        std::process::exit(1);
    }
}
