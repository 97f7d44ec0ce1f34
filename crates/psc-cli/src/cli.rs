use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

#[derive(Parser)]
#[command(author, version, about)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Write fixture object images for a layout into a directory.
    Seed(SeedArgs),

    /// Extract and print the stripes held by one object image.
    Extract(ExtractArgs),

    /// Reassemble all object images into the original file.
    Recover(RecoverArgs),
}

#[derive(Args, Debug, Clone)]
pub struct LayoutArgs {
    /// Number of objects the file is striped across.
    #[arg(long, env = "PSC_OBJECTS", default_value_t = 3)]
    pub objects: u64,

    /// Size of each stripe slot, in bytes.
    #[arg(long, env = "PSC_STRIPE_WIDTH", default_value_t = 5)]
    pub stripe_width: u64,

    /// Total size of the logical file, in bytes.
    #[arg(long, env = "PSC_FILE_SIZE", default_value_t = 39)]
    pub file_size: u64,
}

#[derive(Args)]
pub struct SeedArgs {
    #[command(flatten)]
    pub layout: LayoutArgs,

    /// Directory to write object images into.
    #[arg(long)]
    pub object_dir: PathBuf,
}

#[derive(Args)]
pub struct ExtractArgs {
    #[command(flatten)]
    pub layout: LayoutArgs,

    /// Directory holding the recovered object images.
    #[arg(long)]
    pub object_dir: PathBuf,

    /// Zero-based position of the object to extract.
    #[arg(long)]
    pub object: u64,
}

#[derive(Args)]
pub struct RecoverArgs {
    #[command(flatten)]
    pub layout: LayoutArgs,

    /// Directory holding the recovered object images.
    #[arg(long)]
    pub object_dir: PathBuf,

    /// Path to write the reassembled file to.
    #[arg(long)]
    pub output: PathBuf,
}
