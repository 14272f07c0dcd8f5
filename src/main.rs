use clap::{Parser, Subcommand};
use recipe_site::publish::{self, PublishError, StoreSink};
use recipe_site::{config, generate, logging, output, scan};
use std::path::PathBuf;
use std::sync::Arc;

#[derive(Parser)]
#[command(name = "recipe-site")]
#[command(about = "Static site generator for a folder of markdown recipes")]
#[command(long_about = "\
Static site generator for a folder of markdown recipes

Every .md file becomes a page and the index lists them all. An element whose
entire text is another recipe's title (a list item reading \"Garlic Bread\")
links to that recipe.

Recipe structure:

  recipes/
  ├── config.toml          # Site config (optional)
  ├── README.md            # Ignored
  ├── garlic_bread.md      # → garlic_bread.html
  └── pasta.md             # → pasta.html

A recipe may start with a YAML frontmatter block:

  ---
  title: Pasta
  tags: [italian, dinner]
  ---

Title resolution (last available wins):
  slug with _ → space, then the first '# ' heading, then frontmatter title

With --bucket the finished site is uploaded to that S3 bucket. Credentials
come from AWS_ACCESS_KEY_ID / AWS_SECRET_ACCESS_KEY / AWS_REGION.

Run 'recipe-site gen-config' to generate a documented config.toml.")]
#[command(version)]
struct Cli {
    /// Recipes directory
    #[arg(long, default_value = "recipes", global = true)]
    recipes: PathBuf,

    /// Output directory
    #[arg(long, default_value = "dist", global = true)]
    output: PathBuf,

    /// S3 bucket to publish to (empty = no publish)
    #[arg(long, default_value = "", global = true)]
    bucket: String,

    /// Show debug logs
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Only show errors
    #[arg(short, long, global = true)]
    quiet: bool,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// Generate the site, then publish it when --bucket is set (default)
    Build,
    /// Validate the recipes directory without writing anything
    Check,
    /// Print a stock config.toml with all options documented
    GenConfig,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    logging::init(cli.verbose, cli.quiet)?;

    match cli.command {
        None | Some(Command::Build) => build(&cli)?,
        Some(Command::Check) => {
            println!("==> Checking {}", cli.recipes.display());
            config::load_config(&cli.recipes)?;
            let site = scan::scan(&cli.recipes)?;
            output::print_scan_output(&site);
            println!("==> Recipes are valid");
        }
        Some(Command::GenConfig) => {
            print!("{}", config::stock_config_toml());
        }
    }

    Ok(())
}

fn build(cli: &Cli) -> Result<(), Box<dyn std::error::Error>> {
    let site_config = config::load_config(&cli.recipes)?;

    // Credentials are checked before anything is written.
    let sink = if cli.bucket.is_empty() {
        None
    } else {
        let sink = StoreSink::s3(&cli.bucket, &site_config.publish).map_err(PublishError::from)?;
        Some(Arc::new(sink))
    };

    println!(
        "==> Stage 1: Scanning {} → {}",
        cli.recipes.display(),
        cli.output.display()
    );
    let site = generate::build(&cli.recipes, &cli.output, &site_config)?;
    output::print_scan_output(&site);

    println!("==> Stage 2: Generating HTML → {}", cli.output.display());
    output::print_generate_output(&site);

    if let Some(sink) = sink {
        println!("==> Stage 3: Publishing to s3://{}", cli.bucket);
        let runtime = tokio::runtime::Builder::new_multi_thread()
            .enable_all()
            .build()?;
        let report = runtime.block_on(publish::publish(
            &cli.output,
            sink,
            site_config.publish.workers,
        ))?;
        output::print_publish_report(&report);
    }

    println!("==> Build complete: {}", cli.output.display());
    Ok(())
}
