use clap::{Parser, Subcommand};
use curriculum_site::{config, curriculum, generate, output};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "curriculum-site")]
#[command(about = "Static site generator for day-by-day curricula")]
#[command(long_about = "\
Static site generator for day-by-day curricula

One markdown file describes the whole curriculum. Phase headings group the
days; each table row below a heading becomes one page.

Source format:

  ### 🟢 Phase 1: The Metal
  | Day | Topic | Senior Exercise |
  |-----|-------|-----------------|
  | **1** | Linux Kernel | **The Inode Explosion:** Explore inode limits |

Phase headings: ### 🟢 Phase 1:  ### 🔵 Phase 2:  ### 🟠 Phase 3:
                ### 🟣 Phase 4:  ### ⚫ Phase 5:

Output:

  days/
  ├── day-01.html     # One page per row
  ├── ...
  └── index.html      # All days, grouped by phase

Rows that look like day rows but don't parse are skipped with a warning.

Run 'curriculum-site gen-config' to generate a documented curriculum.toml.")]
#[command(version = env!("CURRICULUM_SITE_VERSION"))]
struct Cli {
    /// Curriculum markdown file
    #[arg(long, default_value = "exercises.md", global = true)]
    source: PathBuf,

    /// Output directory
    #[arg(long, default_value = "days", global = true)]
    output: PathBuf,

    /// Configuration file (stock defaults apply when it doesn't exist)
    #[arg(long, default_value = "curriculum.toml", global = true)]
    config: PathBuf,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// Generate every day page and the index (default)
    Build,
    /// Parse the curriculum and report phases and skipped rows without writing
    Check,
    /// Print the parsed curriculum as JSON
    Scan,
    /// Print a stock curriculum.toml with all options documented
    GenConfig,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    match cli.command.unwrap_or(Command::Build) {
        Command::Build => {
            let site_config = config::load_config(&cli.config)?;
            println!(
                "==> Generating {} from {}",
                cli.output.display(),
                cli.source.display()
            );
            let summary = generate::generate(
                &cli.source,
                &cli.output,
                &site_config,
                output::print_page_line,
            )?;
            output::print_generate_summary(&summary);
            println!("==> Build complete: {}", summary.output_dir.display());
        }
        Command::Check => {
            println!("==> Checking {}", cli.source.display());
            let text = generate::read_curriculum(&cli.source)?;
            let parsed = curriculum::parse_curriculum(&text);
            output::print_check_output(&parsed);
        }
        Command::Scan => {
            let text = generate::read_curriculum(&cli.source)?;
            let parsed = curriculum::parse_curriculum(&text);
            println!("{}", serde_json::to_string_pretty(&parsed)?);
        }
        Command::GenConfig => {
            print!("{}", config::stock_config_toml());
        }
    }

    Ok(())
}
