use std::io::{self, IsTerminal, Read};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Args, CommandFactory, Parser, Subcommand};

use crate::config::EffectiveConfig;
use crate::core::ScanResults;
use crate::render::{FormatVersion, RenderConfig, Renderer};

#[derive(Debug, Parser)]
#[command(
    name = "scanprint",
    version,
    about = "Render evaluated compliance controls as a verbose walk and a risk summary table"
)]
pub struct Cli {
    #[arg(long = "no-color", global = true)]
    pub no_color: bool,
    #[arg(long, global = true)]
    pub verbose: bool,
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    Render(RenderArgs),
    Completion(CompletionArgs),
    Config(ConfigArgs),
}

#[derive(Debug, Args)]
pub struct RenderArgs {
    /// Scan results JSON file, or `-` for stdin.
    pub input: PathBuf,
    #[arg(long, short)]
    pub output: Option<PathBuf>,
    #[arg(long)]
    pub format_version: Option<FormatVersion>,
}

#[derive(Debug, Args)]
pub struct CompletionArgs {
    pub shell: String,
}

#[derive(Debug, Args)]
pub struct ConfigArgs {
    #[arg(long)]
    pub show: bool,
    #[arg(long)]
    pub json: bool,
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();

    let home_dir = std::env::var_os("HOME").map(PathBuf::from);
    let env_config_path = std::env::var_os("SCANPRINT_CONFIG").map(PathBuf::from);
    let cfg = crate::config::load(
        cli.config.as_deref().or(env_config_path.as_deref()),
        home_dir.as_deref(),
    )
    .map_err(crate::exit::invalid_args_err)?;

    match &cli.command {
        Commands::Render(args) => {
            let paint = io::stdout().is_terminal() && args.output.is_none() && !cli.no_color;
            let render_cfg = render_config(&cfg, &cli, args, paint);
            log::debug!("render config: {render_cfg:?}");

            let results = read_results(&args.input).map_err(crate::exit::input_err)?;
            let text = Renderer::new(render_cfg).render(&results);
            crate::ui::write_output(&text, args.output.as_deref())
                .map_err(crate::exit::output_err)?;
        }
        Commands::Completion(args) => {
            let shell = parse_shell(&args.shell)?;
            let mut cmd = Cli::command();
            let mut out = io::stdout().lock();
            clap_complete::generate(shell, &mut cmd, "scanprint", &mut out);
        }
        Commands::Config(args) => {
            if args.show {
                if args.json {
                    let text = serde_json::to_string_pretty(&cfg)?;
                    crate::ui::write_output(&format!("{text}\n"), None)?;
                } else {
                    crate::ui::write_output(&toml::to_string_pretty(&cfg)?, None)?;
                }
            } else {
                eprintln!("config: use `scanprint config --show`");
            }
        }
    }

    Ok(())
}

/// Final render settings: CLI flags over the loaded config. `paint` says
/// whether the output sink can show colour at all.
fn render_config(cfg: &EffectiveConfig, cli: &Cli, args: &RenderArgs, paint: bool) -> RenderConfig {
    RenderConfig {
        verbose: cli.verbose || cfg.render.verbose,
        format_version: args.format_version.unwrap_or(cfg.render.format_version),
        color: paint && cfg.ui.color,
        docs_base_url: cfg.render.docs_base_url.clone(),
        marker: cfg.info.clone(),
    }
}

/// Reads a scan results document from a file, or stdin for `-`.
pub fn read_results(input: &Path) -> Result<ScanResults> {
    let (raw, source) = if input.as_os_str() == "-" {
        let mut buf = String::new();
        io::stdin()
            .lock()
            .read_to_string(&mut buf)
            .context("failed to read scan results from stdin")?;
        (buf, "stdin".to_string())
    } else {
        let buf = std::fs::read_to_string(input)
            .with_context(|| format!("failed to read scan results: {}", input.display()))?;
        (buf, input.display().to_string())
    };

    let results: ScanResults = serde_json::from_str(&raw)
        .with_context(|| format!("failed to parse scan results (JSON): {source}"))?;
    log::debug!(
        "loaded {} controls, {} resources, {} frameworks from {source}",
        results.summary.controls.len(),
        results.resources.len(),
        results.summary.frameworks.len()
    );
    Ok(results)
}

fn parse_shell(s: &str) -> Result<clap_complete::Shell> {
    let s = s.trim().to_ascii_lowercase();
    match s.as_str() {
        "bash" => Ok(clap_complete::Shell::Bash),
        "zsh" => Ok(clap_complete::Shell::Zsh),
        "fish" => Ok(clap_complete::Shell::Fish),
        other => Err(crate::exit::invalid_args(format!(
            "unsupported shell: {other} (expected bash|zsh|fish)"
        ))),
    }
}
