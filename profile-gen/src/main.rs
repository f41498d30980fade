use std::path::PathBuf;

use clap::Parser;
use indicatif::{ProgressBar, ProgressIterator, ProgressStyle};
use profile_gen::{
    DEFAULT_COUNT, DEFAULT_OUTPUT, Error, Profile, ProfileGenerator, profile_count, write_profiles,
};
use rand::Rng;
use tracing::debug;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "profile-gen")]
#[command(about = "Generate synthetic user profiles and save them as JSON")]
struct Args {
    /// Number of profiles to generate
    #[arg(short = 'n', long, default_value_t = DEFAULT_COUNT as i64, allow_negative_numbers = true)]
    count: i64,

    /// Output JSON file
    #[arg(short, long, default_value = DEFAULT_OUTPUT)]
    output: PathBuf,

    /// Seed for reproducible output
    #[arg(long)]
    seed: Option<u64>,

    /// Fail instead of overwriting an existing output file
    #[arg(long)]
    no_clobber: bool,

    /// Show a progress bar while generating
    #[arg(long)]
    progress: bool,
}

fn collect<R: Rng>(generator: ProfileGenerator<R>, count: usize, progress: bool) -> Vec<Profile> {
    let progress_bar = if progress {
        let pb = ProgressBar::new(count as u64);
        pb.set_style(
            ProgressStyle::default_bar()
                .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) {msg}")
                .expect("Invalid progress bar template")
                .progress_chars("#>-"),
        );
        pb
    } else {
        ProgressBar::hidden()
    };

    let profiles = generator.take(count).progress_with(progress_bar.clone()).collect();
    progress_bar.finish_and_clear();
    profiles
}

fn main() -> Result<(), Error> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();
    let count = profile_count(args.count)?;

    if args.no_clobber && args.output.try_exists()? {
        return Err(Error::FileExists { path: args.output.clone() });
    }

    debug!(count, seed = ?args.seed, path = %args.output.display(), "generating profiles");

    let profiles = match args.seed {
        Some(seed) => collect(ProfileGenerator::seeded(seed), count, args.progress),
        None => collect(ProfileGenerator::thread_local(), count, args.progress),
    };

    write_profiles(&args.output, &profiles)?;

    println!("{} profiles saved to {}", profiles.len(), args.output.display());
    Ok(())
}
