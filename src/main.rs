use clap::{Parser, Subcommand, ValueEnum};
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;
use wiki_nav::{config, navigation, output, render};

#[derive(Clone, Copy, ValueEnum)]
enum Format {
    /// Sidebar data for the site framework
    Json,
    /// Standalone HTML sidebar fragment for previewing
    Html,
}

#[derive(Parser)]
#[command(name = "wiki-nav")]
#[command(about = "Compile a content directory into sidebar navigation")]
#[command(long_about = "\
Compile a content directory into sidebar navigation

Each configured category is a directory under the content root. Folders
become collapsible groups, markdown files become links.

Content structure:

  content/
  ├── Расы/                      # Category (listed in wiki-nav.toml)
  │   ├── Человек.md             # → /content/Расы/Человек
  │   ├── _draft.md              # Underscore = draft, not listed
  │   └── Инопланетяне/          # Folder, listed before documents
  │       └── Вуки.md            # → /content/Расы/Инопланетяне/Вуки
  └── Классы/
      └── node_modules/          # Ignored, as is anything starting with '.'

Run 'wiki-nav gen-config' to generate a documented wiki-nav.toml.")]
#[command(version)]
struct Cli {
    /// Navigation config file (stock defaults if missing)
    #[arg(long, default_value = "wiki-nav.toml", global = true)]
    config: PathBuf,

    /// Content directory (overrides content_root from the config)
    #[arg(long, global = true)]
    source: Option<PathBuf>,

    /// Log scan progress
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Write the navigation tree
    Build {
        /// Output file (stdout if omitted)
        #[arg(long)]
        output: Option<PathBuf>,
        #[arg(long, value_enum, default_value = "json")]
        format: Format,
    },
    /// Print the navigation tree without writing anything
    Check,
    /// Print a stock wiki-nav.toml with all options documented
    GenConfig,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    // --verbose enables INFO, otherwise RUST_LOG, defaulting to WARN
    let filter = if cli.verbose {
        EnvFilter::new("info")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    match cli.command {
        Command::Build { output, format } => {
            let config = config::load_config(&cli.config)?;
            let source = resolve_source(cli.source.as_deref(), &cli.config, &config);
            let sidebar = navigation::build_sidebar(&config, &source)?;
            let rendered = match format {
                Format::Json => serde_json::to_string_pretty(&sidebar)?,
                Format::Html => render::render_sidebar(&sidebar).into_string(),
            };
            match output {
                Some(path) => {
                    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
                        std::fs::create_dir_all(parent)?;
                    }
                    std::fs::write(&path, rendered)?;
                    eprintln!("==> Navigation written to {}", path.display());
                }
                None => println!("{rendered}"),
            }
        }
        Command::Check => {
            let config = config::load_config(&cli.config)?;
            let source = resolve_source(cli.source.as_deref(), &cli.config, &config);
            println!("==> Checking {}", source.display());
            let tree = navigation::generate_navigation_tree(&config, &source)?;
            output::print_navigation(&tree);
        }
        Command::GenConfig => {
            print!("{}", config::stock_config_toml());
        }
    }

    Ok(())
}

/// The content root: `--source` if given, else `content_root` from the config,
/// relative to the config file's directory.
fn resolve_source(
    cli_source: Option<&Path>,
    config_path: &Path,
    config: &config::NavConfig,
) -> PathBuf {
    cli_source
        .map(Path::to_path_buf)
        .unwrap_or_else(|| config.resolve_content_root(config_path))
}
