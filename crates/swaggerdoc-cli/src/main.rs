use std::fs;
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use clap_complete::Shell;

use swaggerdoc_core::config::{self, CONFIG_FILE_NAME, SwaggerDocConfig};
use swaggerdoc_core::fetch::fetch;
use swaggerdoc_core::parse;
use swaggerdoc_core::transform::group_operations;
use swaggerdoc_core::{DirectiveContent, SwaggerDirective};

#[derive(Parser)]
#[command(
    name = "swaggerdoc",
    about = "Render Swagger 2.0 documents into documentation nodes",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the directive and print the resulting node tree
    Render {
        /// Swagger reference (relative path, file:// or http(s):// URL)
        #[arg(required_unless_present = "directive")]
        reference: Option<String>,

        /// Tags to include (all when omitted)
        tags: Vec<String>,

        /// Read the directive content block from a file instead
        #[arg(short, long, conflicts_with = "reference")]
        directive: Option<PathBuf>,

        /// Directory relative references resolve against
        #[arg(short, long)]
        root: Option<PathBuf>,

        /// Output format
        #[arg(long, default_value = "yaml")]
        format: OutputFormat,
    },

    /// List the groups a document produces
    Groups {
        /// Swagger reference (relative path, file:// or http(s):// URL)
        reference: String,

        /// Directory relative references resolve against
        #[arg(short, long)]
        root: Option<PathBuf>,
    },

    /// Initialize a new swaggerdoc configuration
    Init {
        /// Overwrite existing files
        #[arg(long)]
        force: bool,
    },

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        shell: Shell,
    },
}

#[derive(Clone, ValueEnum)]
enum OutputFormat {
    Yaml,
    Json,
}

fn main() -> Result<ExitCode> {
    env_logger::init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Render {
            reference,
            tags,
            directive,
            root,
            format,
        } => cmd_render(reference, tags, directive, root, format),

        Commands::Groups { reference, root } => cmd_groups(&reference, root),

        Commands::Init { force } => cmd_init(force).map(|()| ExitCode::SUCCESS),

        Commands::Completions { shell } => {
            let mut cmd = <Cli as clap::CommandFactory>::command();
            clap_complete::generate(shell, &mut cmd, "swaggerdoc", &mut std::io::stdout());
            Ok(ExitCode::SUCCESS)
        }
    }
}

/// Load the project config from the current directory, letting `--root` win.
fn load_config(root: Option<PathBuf>) -> Result<SwaggerDocConfig> {
    let config_path = PathBuf::from(CONFIG_FILE_NAME);
    let mut cfg = config::load_config(&config_path)
        .map_err(|e| anyhow::anyhow!(e))?
        .unwrap_or_default();
    if let Some(root) = root {
        cfg.doc_root = root;
    }
    Ok(cfg)
}

fn cmd_render(
    reference: Option<String>,
    tags: Vec<String>,
    directive: Option<PathBuf>,
    root: Option<PathBuf>,
    format: OutputFormat,
) -> Result<ExitCode> {
    let content = match (directive, reference) {
        (Some(path), _) => {
            let block = fs::read_to_string(&path)
                .with_context(|| format!("failed to read {}", path.display()))?;
            DirectiveContent::parse(&block).map_err(|e| anyhow::anyhow!(e))?
        }
        (None, Some(reference)) => DirectiveContent::new(reference, tags),
        (None, None) => anyhow::bail!("a reference or --directive file is required"),
    };

    let cfg = load_config(root)?;
    let output = SwaggerDirective::new(cfg).run(&content);

    for diagnostic in &output.diagnostics {
        eprintln!("error: {diagnostic}");
    }
    for dependency in &output.dependencies {
        log::info!("read {}", dependency.display());
    }

    match format {
        OutputFormat::Yaml => print!("{}", serde_yaml_ng::to_string(&output.nodes)?),
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&output.nodes)?),
    }

    Ok(if output.is_error() {
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    })
}

fn cmd_groups(reference: &str, root: Option<PathBuf>) -> Result<ExitCode> {
    let cfg = load_config(root)?;
    let value = fetch(reference, &cfg.doc_root)?;
    let doc = parse::from_value(value)?;
    let groups = group_operations(&doc);

    for (label, operations) in &groups {
        let title = label.title(&cfg.default_group_title);
        let shown = if title.is_empty() { "(default)" } else { title };
        println!("{shown}: {} operations", operations.len());
    }
    Ok(ExitCode::SUCCESS)
}

fn cmd_init(force: bool) -> Result<()> {
    let config_path = PathBuf::from(CONFIG_FILE_NAME);

    if config_path.exists() && !force {
        anyhow::bail!(
            "{} already exists. Use --force to overwrite.",
            config_path.display()
        );
    }

    fs::write(&config_path, config::default_config_content())?;
    eprintln!("Created {}", config_path.display());
    Ok(())
}
