use std::{path::PathBuf, process};

use anyhow::Result;
use clap::Parser;
use image_fetcher::{
    config,
    fetch::Fetcher,
    input::parse_url,
    io::{ensure_dir, prompt_line},
    outcome::{FetchError, FetchStatus},
};
use log::debug;

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();
    let config = config::load(args.config.as_deref(), args.dir.clone(), args.timeout)?;
    debug!("Starting with {config:#?}.");

    if let Err(err) = ensure_dir(&config.fetch_dir).await {
        println!("[Error] {}", FetchError::from(err));
        process::exit(FetchStatus::WriteError.exit_code());
    }

    let input = match args.url {
        Some(url) => url,
        None => prompt_line("Enter the image URL (http/https): ").await?,
    };
    let url = match parse_url(&input) {
        Ok(url) => url,
        Err(err) => {
            println!("{err}");
            process::exit(err.status().exit_code());
        }
    };

    println!("Downloading... this may take a few seconds.");
    let fetcher = Fetcher::new(config)?;
    let result = fetcher.download(&url).await;
    if let Some(path) = &result.path {
        println!("Image saved to: {}", path.display());
        println!(
            "You can share images from the {} folder later.",
            fetcher.config().fetch_dir.display()
        );
        return Ok(());
    }
    if let Some(detail) = &result.detail {
        println!("[Error] {detail}");
    }
    println!("Image download failed. See error message above.");
    process::exit(result.status.exit_code());
}

#[derive(Debug, Parser)]
#[clap(
    author,
    version,
    about = "Downloads one image from an HTTP or HTTPS URL.\n\
Prompts for the URL if it is not given and saves the image to `Fetched_Images/`,\n\
or another directory if specified."
)]
struct Args {
    #[clap(help = "The image URL. Prompted for if omitted.")]
    url: Option<String>,
    #[clap(short, long, help = "TOML file with fetch settings.")]
    config: Option<PathBuf>,
    #[clap(short, long, help = "Directory to save the image to.")]
    dir: Option<PathBuf>,
    #[clap(
        short,
        long,
        value_parser = clap::value_parser!(u64).range(1..),
        help = "Timeout for connecting and each read in seconds."
    )]
    timeout: Option<u64>,
}
