// Module-specific lints configuration
#![allow(clippy::uninlined_format_args)]

use anyhow::Result;
use clap::{CommandFactory, Parser, Subcommand, ValueEnum};
use clap_complete::{Shell, generate};
use log::{Level, LevelFilter, Log, Metadata, Record, SetLoggerError, error, info};
use std::io::Write;
use std::path::PathBuf;
use std::process::ExitCode;

use xliff_transup::app_config::{self, Config};
use xliff_transup::file_utils::FileManager;
use xliff_transup::prompt::{ConsolePrompt, PromptReader};
use xliff_transup::{Controller, RunSummary};

/// CLI Wrapper for LogLevel to implement ValueEnum
#[derive(Debug, Clone, ValueEnum)]
enum CliLogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl From<CliLogLevel> for app_config::LogLevel {
    fn from(cli_level: CliLogLevel) -> Self {
        match cli_level {
            CliLogLevel::Error => app_config::LogLevel::Error,
            CliLogLevel::Warn => app_config::LogLevel::Warn,
            CliLogLevel::Info => app_config::LogLevel::Info,
            CliLogLevel::Debug => app_config::LogLevel::Debug,
            CliLogLevel::Trace => app_config::LogLevel::Trace,
        }
    }
}

fn level_filter(level: &app_config::LogLevel) -> LevelFilter {
    match level {
        app_config::LogLevel::Error => LevelFilter::Error,
        app_config::LogLevel::Warn => LevelFilter::Warn,
        app_config::LogLevel::Info => LevelFilter::Info,
        app_config::LogLevel::Debug => LevelFilter::Debug,
        app_config::LogLevel::Trace => LevelFilter::Trace,
    }
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Fill the empty targets of a template with translated lines
    Patch(PatchArgs),

    /// Show the number of empty targets and the trans-unit ids of a template
    Inspect {
        /// Template file
        #[arg(value_name = "TEMPLATE")]
        template: String,
    },

    /// Duplicate a file, e.g. to keep a backup
    Backup {
        /// File to duplicate
        #[arg(value_name = "FILE")]
        file: String,

        /// Name of the duplicate, placed in the program directory
        #[arg(short, long)]
        name: Option<String>,

        /// Full path of the duplicate, takes precedence over --name
        #[arg(short, long)]
        path: Option<PathBuf>,
    },

    /// Change the name and/or extension of a file
    Rename {
        /// File to rename
        #[arg(value_name = "FILE")]
        file: String,

        /// New file name without extension
        #[arg(short, long)]
        name: Option<String>,

        /// New extension
        #[arg(short, long)]
        extension: Option<String>,

        /// Duplicate the file before renaming it
        #[arg(short, long)]
        backup: bool,
    },

    /// Generate shell completions for xliff-transup
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

#[derive(Parser, Debug)]
struct PatchArgs {
    /// Template file: the original, untranslated xliff
    #[arg(value_name = "TEMPLATE")]
    template: String,

    /// Text file with one translation per line
    #[arg(value_name = "TRANSLATED")]
    translated: String,

    /// Output file name, placed in the program directory
    #[arg(short, long)]
    output: Option<String>,

    /// Duplicate the template before patching
    #[arg(short, long)]
    backup: bool,
}

/// xliff-transup - patch offline translations into XLIFF files
///
/// Writes each line of a translated text file into the next empty target of
/// a template XLIFF file, producing a file ready to be uploaded again.
#[derive(Parser, Debug)]
#[command(name = "xliff-transup")]
#[command(version)]
#[command(about = "Patch translated lines into the empty targets of an XLIFF template")]
#[command(long_about = "xliff-transup fills the empty <target> elements of a template XLIFF file
with the lines of a translated text file, in order.

Without a subcommand, it asks for the two file names interactively. File names
are resolved against the directory of the program (or --base-dir).

EXAMPLES:
    xliff-transup                                       # Interactive menu
    xliff-transup patch template.xliff translated.txt   # Write output.xliff
    xliff-transup patch -b -o fr.xliff t.xliff fr.txt   # Back up, custom output
    xliff-transup inspect template.xliff                # Count empty targets
    xliff-transup rename -e txt template.xliff          # template.txt
    xliff-transup completions bash > xliff-transup.bash

CONFIGURATION:
    Configuration is read from transup.json in the program directory when it
    exists. Use --config to point to another file.")]
struct CommandLineOptions {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Configuration file path
    #[arg(short, long = "config", global = true, default_value = "transup.json")]
    config_path: String,

    /// Set logging level
    #[arg(short, long, global = true, value_enum)]
    log_level: Option<CliLogLevel>,

    /// Directory used instead of the program directory
    #[arg(long, global = true, env = "XLIFF_TRANSUP_BASE_DIR")]
    base_dir: Option<PathBuf>,

    /// Do not wait for a key press before exiting the interactive mode
    #[arg(long, global = true)]
    no_pause: bool,
}

// @struct: Custom logger implementation
struct CustomLogger {
    level: LevelFilter,
}

impl CustomLogger {
    // @creates: New logger with specified level
    fn new(level: LevelFilter) -> Self {
        CustomLogger { level }
    }

    // @initializes: Global logger
    fn init(level: LevelFilter) -> Result<(), SetLoggerError> {
        let logger = Box::new(CustomLogger::new(level));
        log::set_boxed_logger(logger)?;
        log::set_max_level(level);
        Ok(())
    }

    // @returns: ANSI color for log level
    fn color_for_level(level: Level) -> &'static str {
        match level {
            Level::Error => "1;31",
            Level::Warn => "1;33",
            Level::Info => "1;32",
            Level::Debug => "1;36",
            Level::Trace => "1;35",
        }
    }
}

impl Log for CustomLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= self.level.max(log::max_level())
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            let now = chrono::Local::now().format("%H:%M:%S.%3f");
            let mut stderr = std::io::stderr();
            let _ = writeln!(
                stderr,
                "\x1B[{}m{} {:<5} {}\x1B[0m",
                Self::color_for_level(record.level()),
                now,
                record.level(),
                record.args()
            );
        }
    }

    fn flush(&self) {
        let _ = std::io::stderr().flush();
    }
}

fn main() -> ExitCode {
    if let Err(e) = CustomLogger::init(LevelFilter::Info) {
        eprintln!("Failed to initialize logger: {}", e);
    }

    let cli = CommandLineOptions::parse();
    let pause = cli.command.is_none() && !cli.no_pause;

    match run(cli) {
        Ok(()) => {
            if pause {
                let _ = ConsolePrompt.acknowledge(
                    "If you are able to see this message without any errors, your process is finished.",
                );
            }
            ExitCode::SUCCESS
        }
        Err(e) => {
            error!("{:#}", e);
            if pause {
                let _ = ConsolePrompt.acknowledge("An error has occurred. Press enter to exit.");
            }
            ExitCode::FAILURE
        }
    }
}

fn run(cli: CommandLineOptions) -> Result<()> {
    // If log level is set via command line, apply it immediately
    if let Some(cmd_log_level) = &cli.log_level {
        log::set_max_level(level_filter(&cmd_log_level.clone().into()));
    }

    if let Some(Commands::Completions { shell }) = &cli.command {
        let mut cmd = CommandLineOptions::command();
        generate(*shell, &mut cmd, "xliff-transup", &mut std::io::stdout());
        return Ok(());
    }

    let base_dir = match &cli.base_dir {
        Some(dir) => dir.clone(),
        None => FileManager::program_dir()?,
    };

    let mut config = Config::load(FileManager::resolve_path(&base_dir, &cli.config_path))?;
    if cli.log_level.is_none() {
        log::set_max_level(level_filter(&config.log_level));
    }

    let resolve = |name: &str| FileManager::resolve_path(&base_dir, name);

    match cli.command {
        None => {
            let controller = Controller::with_config(config, base_dir.clone())?;
            let summary = controller.run_interactive(&ConsolePrompt)?;
            report(&summary);
        }
        Some(Commands::Patch(args)) => {
            if let Some(output) = args.output {
                config.output_file_name = output;
            }
            config.backup_template |= args.backup;

            let controller = Controller::with_config(config, base_dir.clone())?;
            let summary = controller.run(&resolve(&args.template), &resolve(&args.translated))?;
            report(&summary);
        }
        Some(Commands::Inspect { template }) => {
            let controller = Controller::with_config(config, base_dir.clone())?;
            let info = controller.inspect(&resolve(&template))?;
            info!("Empty targets: {}", info.empty_slots);
            info!("Trans-units: {}", info.trans_unit_ids.len());
            if let Some(first) = info.trans_unit_ids.first() {
                info!("First trans-unit id: {}", first);
            }
        }
        Some(Commands::Backup { file, name, path }) => {
            let controller = Controller::with_config(config, base_dir.clone())?;
            controller.backup(&resolve(&file), name.as_deref(), path.as_deref())?;
        }
        Some(Commands::Rename { file, name, extension, backup }) => {
            let controller = Controller::with_config(config, base_dir.clone())?;
            controller.rename(&resolve(&file), name.as_deref(), extension.as_deref(), backup)?;
        }
        Some(Commands::Completions { .. }) => {}
    }

    Ok(())
}

fn report(summary: &RunSummary) {
    if summary.remaining_slots > 0 {
        info!("{} empty targets remain in the output", summary.remaining_slots);
    }
    if let Some(backup) = &summary.backup_path {
        info!("Template backup: {}", backup.display());
    }
}
