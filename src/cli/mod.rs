//! Command line front-end for `makemkv-rs`

pub mod tree;

use crate::defaults::{DEFAULT_DISC_NR, DEFAULT_TITLE, ENV_NO_PROGRESS};
use crate::exceptions::{MakeMkvError, Result};
use crate::exit_codes::{self, EXIT_INTERRUPTED, EXIT_SUCCESS};
use crate::input::Input;
use crate::progress::ProgressParser;
use crate::runner::{KillHandle, MakeMkv, TitleSelection};
use crate::types::MakeMkvOutput;
use crate::utils::is_env_true;
use crate::{logger, version};
use anyhow::Context;
use clap::{Args, Parser, Subcommand};
use log::{debug, error, warn};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

#[derive(Parser, Debug)]
#[command(
    name = "makemkv-rs",
    version = version::VERSION,
    about = "Rip DVDs and Blu-rays with makemkvcon"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Display information about a disc
    Info(InfoArgs),
    /// Copy titles from disc
    Mkv(MkvArgs),
    /// Backup whole disc
    Backup(BackupArgs),
}

impl Commands {
    pub fn common(&self) -> &CommonArgs {
        match self {
            Commands::Info(args) => &args.common,
            Commands::Mkv(args) => &args.common,
            Commands::Backup(args) => &args.common,
        }
    }
}

/// Options every subcommand accepts
#[derive(Args, Debug, Clone)]
pub struct CommonArgs {
    /// Disc number; alternatively give an input with -i/--input
    #[arg(short = 'n', long, value_name = "NR", default_value_t = DEFAULT_DISC_NR)]
    pub disc_nr: u32,

    /// Input: a device, an .iso, an .IFO file or a VIDEO_TS folder
    #[arg(short, long, value_name = "PATH")]
    pub input: Option<PathBuf>,

    /// Minimum title length in seconds
    #[arg(short = 'l', long, value_name = "SECS")]
    pub minlength: Option<u32>,

    /// Size of read cache in megabytes
    #[arg(short, long, value_name = "MB")]
    pub cache: Option<u32>,

    /// Write disc info to file
    #[arg(short = 'f', long, value_name = "FILE")]
    pub info_file: Option<PathBuf>,

    /// Show disc info in JSON format
    #[arg(short, long)]
    pub json: bool,

    /// Show more detailed logs
    #[arg(short, long, conflicts_with = "quiet")]
    pub verbose: bool,

    /// Don't show logs
    #[arg(short, long)]
    pub quiet: bool,

    /// Don't show progress bars
    #[arg(long)]
    pub no_bar: bool,

    /// Don't show disc info
    #[arg(long)]
    pub no_info: bool,
}

#[derive(Args, Debug, Clone)]
pub struct InfoArgs {
    #[command(flatten)]
    pub common: CommonArgs,
}

#[derive(Args, Debug, Clone)]
pub struct MkvArgs {
    #[command(flatten)]
    pub common: CommonArgs,

    /// Title to rip: an index starting with 0 or "all"
    #[arg(short, long, value_name = "NR", default_value = DEFAULT_TITLE)]
    pub title: TitleSelection,

    /// Output directory for created mkv files [default: current directory]
    #[arg(short, long, value_name = "DIR")]
    pub output: Option<PathBuf>,
}

#[derive(Args, Debug, Clone)]
pub struct BackupArgs {
    #[command(flatten)]
    pub common: CommonArgs,

    /// Output directory for backup files [default: current directory]
    #[arg(short, long, value_name = "DIR")]
    pub output: Option<PathBuf>,

    /// Decrypt stream files during backup
    #[arg(short, long)]
    pub decrypt: bool,
}

impl CommonArgs {
    /// `--input` when given, else the disc number
    pub fn resolve_input(&self) -> Result<Input> {
        let input = match &self.input {
            Some(path) => Input::detect(path)?,
            None => Input::Disc(self.disc_nr),
        };
        debug!(
            "input: {:?}, disc_nr: {} -> {}",
            self.input, self.disc_nr, input
        );
        Ok(input)
    }

    fn show_progress(&self) -> bool {
        !(self.no_bar || self.quiet || is_env_true(ENV_NO_PROGRESS) || logger::is_json_logging())
    }
}

/// Run a parsed command and return the process exit code
pub fn execute(command: &Commands) -> i32 {
    let common = command.common();
    let (mut makemkv, output_dir) = match prepare(command) {
        Ok(prepared) => prepared,
        Err(err) => {
            error!("{err}");
            return exit_codes::for_error(&err);
        }
    };

    let guard = InterruptGuard::install(makemkv.kill_handle());
    let result = match command {
        Commands::Info(_) => makemkv.info(),
        Commands::Mkv(args) => makemkv.mkv(args.title, &output_dir),
        Commands::Backup(args) => makemkv.backup(&output_dir, args.decrypt),
    };
    let interrupted = guard.interrupted();
    drop(guard);
    // clears the progress bar before anything else is printed
    drop(makemkv);

    if interrupted {
        warn!("Received CTRL-C signal. Terminating makemkvcon.");
        return EXIT_INTERRUPTED;
    }

    let output = match result {
        Ok(output) => output,
        // the message itself was already logged by the parser
        Err(err @ MakeMkvError::Critical(_)) => return exit_codes::for_error(&err),
        Err(err) => {
            error!("{err}");
            return exit_codes::for_error(&err);
        }
    };

    match return_info(&output, common) {
        Ok(()) => EXIT_SUCCESS,
        Err(err) => {
            error!("{err}");
            exit_codes::for_error(&err)
        }
    }
}

fn prepare(command: &Commands) -> Result<(MakeMkv, PathBuf)> {
    let common = command.common();
    let input = common.resolve_input()?;

    let output_dir = match command {
        Commands::Info(_) => PathBuf::new(),
        Commands::Mkv(MkvArgs { output, .. }) | Commands::Backup(BackupArgs { output, .. }) => {
            resolve_output_dir(output.as_deref())?
        }
    };

    let mut makemkv = MakeMkv::new(input);
    if let Some(cache) = common.cache {
        makemkv = makemkv.cache(cache);
    }
    if let Some(minlength) = common.minlength {
        makemkv = makemkv.minlength(minlength);
    }
    if common.show_progress() {
        makemkv = makemkv.progress_handler(ProgressParser::new());
    }
    Ok((makemkv, output_dir))
}

fn resolve_output_dir(output: Option<&Path>) -> Result<PathBuf> {
    let dir = match output {
        Some(dir) => dir.to_path_buf(),
        None => env::current_dir()?,
    };
    if !dir.is_dir() {
        return Err(MakeMkvError::InvalidInput(format!(
            "output directory {} does not exist",
            dir.display()
        )));
    }
    Ok(dir)
}

/// Print or store the collected information as the flags ask
pub fn return_info(output: &MakeMkvOutput, common: &CommonArgs) -> Result<()> {
    if let Some(path) = &common.info_file {
        write_info_file(output, path)?;
    } else if common.json {
        println!("{}", output.to_sorted_json()?);
    } else if !common.no_info {
        print!("{}", render_tree(output)?);
    }
    Ok(())
}

fn write_info_file(output: &MakeMkvOutput, path: &Path) -> anyhow::Result<()> {
    let json = output.to_sorted_json()?;
    fs::write(path, json + "\n")
        .with_context(|| format!("Failed to write disc info to {}", path.display()))?;
    debug!("💾 Disc info written to {}", path.display());
    Ok(())
}

/// Tree view of the output rooted at "Disc Info"
pub fn render_tree(output: &MakeMkvOutput) -> Result<String> {
    let value = serde_json::to_value(output)?;
    Ok(tree::from_value("Disc Info", &value).to_string())
}

/// Kills makemkvcon on SIGINT/SIGTERM while a command runs
struct InterruptGuard {
    interrupted: Arc<AtomicBool>,
    #[cfg(unix)]
    watcher: Option<(signal_hook::iterator::Handle, std::thread::JoinHandle<()>)>,
}

impl InterruptGuard {
    #[cfg(unix)]
    fn install(kill: KillHandle) -> Self {
        use signal_hook::consts::{SIGINT, SIGTERM};
        use signal_hook::iterator::Signals;

        let interrupted = Arc::new(AtomicBool::new(false));
        let watcher = match Signals::new([SIGINT, SIGTERM]) {
            Ok(mut signals) => {
                let handle = signals.handle();
                let flag = Arc::clone(&interrupted);
                let thread = std::thread::spawn(move || {
                    for signal in signals.forever() {
                        debug!("🛑 Received signal {signal}");
                        flag.store(true, Ordering::SeqCst);
                        kill.kill();
                    }
                });
                Some((handle, thread))
            }
            Err(err) => {
                warn!("Could not install signal handler: {err}");
                None
            }
        };
        InterruptGuard { interrupted, watcher }
    }

    #[cfg(not(unix))]
    fn install(_kill: KillHandle) -> Self {
        InterruptGuard {
            interrupted: Arc::new(AtomicBool::new(false)),
        }
    }

    fn interrupted(&self) -> bool {
        self.interrupted.load(Ordering::SeqCst)
    }
}

impl Drop for InterruptGuard {
    fn drop(&mut self) {
        #[cfg(unix)]
        {
            if let Some((handle, thread)) = self.watcher.take() {
                handle.close();
                let _ = thread.join();
            }
        }
    }
}
