use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};
use colored::Colorize;
use railguard_lint::{
    Diagnostic, LintEngine, LintReport, RuleConfig, RuleConfigFile, RuleOverrides, RULE_NAME,
};

#[derive(Parser)]
#[command(name = "railguard")]
#[command(about = "Enforce Result-based error handling in TypeScript sources")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Lint a file or directory tree
    Check {
        /// Path to lint
        path: PathBuf,

        /// Configuration file (railguard.toml in the working directory
        /// is picked up automatically)
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Output format: text or json
        #[arg(short, long, default_value = "text")]
        format: String,

        /// Print violations only, skip the summary
        #[arg(short, long)]
        quiet: bool,
    },
    /// Print the default configuration as TOML
    Defaults,
}

/// Output styling configuration
struct OutputStyle {
    use_colors: bool,
}

impl Default for OutputStyle {
    fn default() -> Self {
        Self {
            use_colors: atty::is(atty::Stream::Stdout),
        }
    }
}

impl OutputStyle {
    fn success(&self, msg: &str) -> String {
        if self.use_colors {
            format!("{} {}", "✓".green().bold(), msg)
        } else {
            format!("✓ {}", msg)
        }
    }

    fn error(&self, msg: &str) -> String {
        if self.use_colors {
            format!("{} {}", "✗".red().bold(), msg)
        } else {
            format!("✗ {}", msg)
        }
    }

    fn violation(&self, diagnostic: &Diagnostic) -> String {
        if self.use_colors {
            let location = match &diagnostic.file {
                Some(file) => format!("{}:{}:{}", file, diagnostic.line, diagnostic.column),
                None => format!("{}:{}", diagnostic.line, diagnostic.column),
            };
            format!(
                "{}: {} {}",
                location.bold(),
                diagnostic.message(),
                format!("[{}]", diagnostic.rule).dimmed()
            )
        } else {
            format!("{} [{}]", diagnostic, diagnostic.rule)
        }
    }
}

fn main() {
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();
    match run(cli) {
        // Violations are a distinct exit code so CI can tell "found
        // problems" apart from "could not run".
        Ok(true) => std::process::exit(1),
        Ok(false) => {}
        Err(e) => {
            let style = OutputStyle::default();
            eprintln!("{}", style.error(&format!("{e:#}")));
            std::process::exit(2);
        }
    }
}

fn run(cli: Cli) -> anyhow::Result<bool> {
    match cli.command {
        Commands::Check {
            path,
            config,
            format,
            quiet,
        } => run_check(&path, config.as_deref(), &format, quiet),
        Commands::Defaults => {
            print_defaults()?;
            Ok(false)
        }
    }
}

fn run_check(
    path: &Path,
    config_path: Option<&Path>,
    format: &str,
    quiet: bool,
) -> anyhow::Result<bool> {
    let config = load_config(config_path)?;
    let engine = LintEngine::new(config)?;
    let report = engine.run(path)?;

    match format {
        "json" => println!("{}", serde_json::to_string_pretty(&report)?),
        "text" => print_text_report(&report, quiet),
        other => anyhow::bail!("unknown format: {other} (expected text or json)"),
    }

    Ok(report.has_violations())
}

fn load_config(explicit: Option<&Path>) -> anyhow::Result<RuleConfig> {
    if let Some(path) = explicit {
        return Ok(RuleConfigFile::load(path)?.resolve(RULE_NAME));
    }

    let discovered = Path::new("railguard.toml");
    if discovered.exists() {
        return Ok(RuleConfigFile::load(discovered)?.resolve(RULE_NAME));
    }

    Ok(RuleConfig::default())
}

fn print_text_report(report: &LintReport, quiet: bool) {
    let style = OutputStyle::default();

    for diagnostic in &report.diagnostics {
        println!("{}", style.violation(diagnostic));
    }

    if quiet {
        return;
    }

    if !report.diagnostics.is_empty() {
        println!();
    }
    for skipped in &report.skipped {
        println!("{}", style.error(&format!("skipped {}: {}", skipped.path, skipped.reason)));
    }
    if report.has_violations() {
        println!("{report}");
    } else {
        println!(
            "{}",
            style.success(&format!(
                "no violations in {} files ({} ms)",
                report.files_checked, report.elapsed_ms
            ))
        );
    }
}

fn print_defaults() -> anyhow::Result<()> {
    let defaults = RuleConfig::default();
    let mut file = RuleConfigFile::default();
    file.rules.insert(
        RULE_NAME.to_string(),
        RuleOverrides {
            allowed_return_types: Some(defaults.allowed_return_types),
            exempt_functions: Some(defaults.exempt_functions),
            exempt_patterns: Some(defaults.exempt_patterns),
            exempt_pascal_case: Some(defaults.exempt_pascal_case),
        },
    );
    println!("{}", toml::to_string_pretty(&file)?);
    Ok(())
}
