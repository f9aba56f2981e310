use std::io::IsTerminal;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use iniline::{
    find_config_file, find_editorconfig, generate_init_file, load_config, merge_format_config,
    parse_editorconfig, run, should_use_colors, Action, CliFormatOptions, Config,
    EditorConfigSettings, IniLineToml, LineEnding, OutputContext, OutputMode,
};

#[derive(Parser)]
#[command(name = "iniline")]
#[command(version, about = "Format and query INI files without losing comments or layout")]
struct Cli {
    /// INI files or directories to process
    #[arg(required_unless_present = "init")]
    paths: Vec<String>,

    /// Check only (no modifications), exit 1 if a file needs formatting
    #[arg(short, long)]
    check: bool,

    /// Show changes in diff format
    #[arg(short, long)]
    diff: bool,

    /// Output only affected file names (or bare values with --get)
    #[arg(short, long)]
    quiet: bool,

    /// Also report unchanged and skipped files
    #[arg(short, long)]
    verbose: bool,

    /// Print the value of KEY in [SECTION] instead of formatting
    #[arg(long, num_args = 2, value_names = ["SECTION", "KEY"])]
    get: Option<Vec<String>>,

    /// Line terminator to write
    #[arg(long, value_enum, value_name = "ENDING")]
    line_ending: Option<LineEnding>,

    /// Generate a template iniline.toml configuration file
    #[arg(long)]
    init: bool,

    /// Specify config file path (overrides auto-discovery)
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Force colored output
    #[arg(long)]
    color: bool,

    /// Disable colored output
    #[arg(long, conflicts_with = "color")]
    no_color: bool,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    if cli.init {
        return handle_init();
    }

    let toml_config = load_configuration(&cli.config, cli.quiet);
    let editorconfig = load_editorconfig(cli.quiet);

    let cli_options = CliFormatOptions {
        line_ending: cli.line_ending,
    };
    let format = merge_format_config(
        &cli_options,
        toml_config.as_ref().map(|c| &c.format),
        editorconfig.as_ref(),
    );

    let action = match cli.get.as_deref() {
        Some([section, key]) => Action::Get {
            section: section.clone(),
            key: key.clone(),
        },
        _ => Action::Format,
    };

    let mode = if cli.quiet {
        OutputMode::Quiet
    } else if cli.diff {
        OutputMode::Diff
    } else {
        OutputMode::Normal
    };

    let ctx = OutputContext::new(
        mode,
        should_use_colors(cli.color, cli.no_color),
        cli.verbose,
        !cli.quiet && std::io::stderr().is_terminal(),
    );

    let config = Config {
        check_only: cli.check,
        action,
        format,
    };

    match run(&cli.paths, &config, &ctx) {
        Ok(result) => {
            if result.failed(config.check_only) {
                ExitCode::from(1)
            } else {
                ExitCode::SUCCESS
            }
        }
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::from(1)
        }
    }
}

fn handle_init() -> ExitCode {
    match generate_init_file() {
        Ok(path) => {
            println!("Created {}", path.display());
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::from(1)
        }
    }
}

fn load_configuration(explicit_path: &Option<PathBuf>, quiet: bool) -> Option<IniLineToml> {
    let config_path = explicit_path.clone().or_else(|| {
        std::env::current_dir()
            .ok()
            .and_then(|d| find_config_file(&d))
    });

    config_path.and_then(|p| match load_config(&p) {
        Ok(config) => {
            if !quiet {
                eprintln!("Using config: {}", p.display());
            }
            Some(config)
        }
        Err(e) => {
            eprintln!("Warning: Failed to load {}: {}", p.display(), e);
            None
        }
    })
}

fn load_editorconfig(quiet: bool) -> Option<EditorConfigSettings> {
    let path = std::env::current_dir()
        .ok()
        .and_then(|d| find_editorconfig(&d))?;

    match parse_editorconfig(&path) {
        Ok(settings) => Some(settings),
        Err(e) => {
            if !quiet {
                eprintln!("Warning: Ignoring {}: {}", path.display(), e);
            }
            None
        }
    }
}
