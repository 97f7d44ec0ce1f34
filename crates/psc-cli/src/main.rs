mod cli;
mod fixture;

use anyhow::Result;
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use psc_rs::extract::extract_stripes;
use psc_rs::layout::StripeLayout;
use psc_rs::recover::{digest, reassemble};
use psc_rs::retention::object::ObjectFile;

use crate::cli::{Cli, Command, ExtractArgs, LayoutArgs, RecoverArgs, SeedArgs};
use crate::fixture::{object_path, seed_objects};

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive("info".parse()?))
        .init();

    let cli = Cli::parse();
    match cli.command {
        Command::Seed(args) => run_seed(&args),
        Command::Extract(args) => run_extract(&args),
        Command::Recover(args) => run_recover(&args),
    }
}

const fn layout_from(args: &LayoutArgs) -> StripeLayout {
    StripeLayout::new(args.objects, args.stripe_width, args.file_size)
}

fn run_seed(args: &SeedArgs) -> Result<()> {
    let layout = layout_from(&args.layout);
    let paths = seed_objects(&layout, &args.object_dir)?;
    for path in &paths {
        info!(path = %path.display(), "wrote object image");
    }
    info!(
        objects = layout.object_count(),
        stripe_width = layout.stripe_width(),
        file_size = layout.file_size(),
        "seeded fixture objects"
    );
    Ok(())
}

fn run_extract(args: &ExtractArgs) -> Result<()> {
    let layout = layout_from(&args.layout);
    let source = ObjectFile::open(object_path(&args.object_dir, args.object))?;
    let stripes = extract_stripes(args.object, &layout, &source)?;

    info!(
        object = args.object,
        stripes = stripes.len(),
        "extracted stripes"
    );
    for (index, data) in &stripes {
        println!("stripe {index}: {} bytes: {data}", data.len());
    }
    Ok(())
}

fn run_recover(args: &RecoverArgs) -> Result<()> {
    let layout = layout_from(&args.layout);

    let mut sources = Vec::new();
    for position in 0..layout.object_count() {
        sources.push(ObjectFile::open(object_path(&args.object_dir, position))?);
    }

    let file = reassemble(&layout, &sources)?;
    std::fs::write(&args.output, &file)?;
    info!(
        output = %args.output.display(),
        bytes = file.len(),
        sha256 = %digest(&file),
        "recovered file"
    );
    Ok(())
}
