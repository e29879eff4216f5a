//! Running makemkvcon
//!
//! [`MakeMkv`] launches makemkvcon in robot mode, streams its output through
//! an [`OutputParser`] and returns what was collected. A [`KillHandle`] taken
//! before the call can stop the process from another thread.

pub mod command;

pub use command::{Overrides, find_makemkvcon};

use crate::defaults::DRIVE_SCAN_DISC;
use crate::exceptions::{MakeMkvError, Result};
use crate::input::Input;
use crate::robot::{OutputParser, ProgressHandler};
use crate::types::{Drive, MakeMkvOutput};
use log::{debug, info, trace, warn};
use std::fmt;
use std::io::{BufRead, BufReader, Read};
use std::path::{Path, PathBuf};
use std::process::{Child, Command, ExitStatus, Stdio};
use std::str::FromStr;
use std::sync::mpsc::{self, Sender};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::thread;
use std::time::Duration;

const WAIT_POLL_INTERVAL: Duration = Duration::from_millis(20);

/// Which titles `mkv` should copy
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TitleSelection {
    Index(u32),
    All,
}

impl FromStr for TitleSelection {
    type Err = MakeMkvError;

    fn from_str(s: &str) -> Result<Self> {
        let s = s.trim();
        if s.eq_ignore_ascii_case("all") {
            return Ok(TitleSelection::All);
        }
        s.parse().map(TitleSelection::Index).map_err(|_| {
            MakeMkvError::InvalidInput(format!(
                "title must be a number or \"all\", got {s:?}"
            ))
        })
    }
}

impl fmt::Display for TitleSelection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TitleSelection::Index(n) => write!(f, "{n}"),
            TitleSelection::All => write!(f, "all"),
        }
    }
}

impl From<u32> for TitleSelection {
    fn from(index: u32) -> Self {
        TitleSelection::Index(index)
    }
}

/// Terminates a running makemkvcon from any thread
#[derive(Debug, Clone, Default)]
pub struct KillHandle {
    child: Arc<Mutex<Option<Child>>>,
}

impl KillHandle {
    fn slot(&self) -> MutexGuard<'_, Option<Child>> {
        self.child.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn attach(&self, child: Child) {
        *self.slot() = Some(child);
    }

    /// Kill the process if one is running. Returns whether one was.
    pub fn kill(&self) -> bool {
        match self.slot().as_mut() {
            Some(child) => match child.kill() {
                Ok(()) => {
                    debug!("🛑 Killed makemkvcon (pid {})", child.id());
                    true
                }
                Err(err) => {
                    warn!("Failed to kill makemkvcon: {err}");
                    false
                }
            },
            None => false,
        }
    }

    pub fn is_running(&self) -> bool {
        self.slot().is_some()
    }

    /// Process id of the running makemkvcon
    pub fn pid(&self) -> Option<u32> {
        self.slot().as_ref().map(Child::id)
    }

    /// Reap the process. The child stays in the slot until it has exited,
    /// so `kill` keeps working while this waits.
    fn wait(&self) -> Result<Option<ExitStatus>> {
        loop {
            {
                let mut slot = self.slot();
                let Some(child) = slot.as_mut() else {
                    return Ok(None);
                };
                if let Some(status) = child.try_wait()? {
                    *slot = None;
                    return Ok(Some(status));
                }
            }
            thread::sleep(WAIT_POLL_INTERVAL);
        }
    }
}

/// makemkvcon bound to one input
pub struct MakeMkv {
    input: Input,
    options: Overrides,
    binary: Option<PathBuf>,
    progress_handler: Option<Box<dyn ProgressHandler>>,
    kill_handle: KillHandle,
}

impl fmt::Debug for MakeMkv {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MakeMkv")
            .field("input", &self.input)
            .field("options", &self.options)
            .field("binary", &self.binary)
            .field("progress_handler", &self.progress_handler.is_some())
            .finish()
    }
}

impl MakeMkv {
    pub fn new(input: impl Into<Input>) -> Self {
        MakeMkv {
            input: input.into(),
            options: Overrides::default(),
            binary: None,
            progress_handler: None,
            kill_handle: KillHandle::default(),
        }
    }

    /// Read cache size in megabytes
    pub fn cache(mut self, megabytes: u32) -> Self {
        self.options.cache = Some(megabytes);
        self
    }

    /// Skip titles shorter than this many seconds
    pub fn minlength(mut self, seconds: u32) -> Self {
        self.options.minlength = Some(seconds);
        self
    }

    /// Use this makemkvcon instead of searching for one
    pub fn binary(mut self, path: impl Into<PathBuf>) -> Self {
        self.binary = Some(path.into());
        self
    }

    pub fn progress_handler(mut self, handler: impl ProgressHandler + 'static) -> Self {
        self.progress_handler = Some(Box::new(handler));
        self
    }

    pub fn input(&self) -> &Input {
        &self.input
    }

    pub fn kill_handle(&self) -> KillHandle {
        self.kill_handle.clone()
    }

    /// Terminate the running makemkvcon, if any
    pub fn kill(&self) -> bool {
        self.kill_handle.kill()
    }

    /// Drives, disc, titles and streams of the input
    pub fn info(&mut self) -> Result<MakeMkvOutput> {
        self.info_with(Overrides::default())
    }

    pub fn info_with(&mut self, options: Overrides) -> Result<MakeMkvOutput> {
        let positional = [self.input.to_string()];
        self.run("info", &positional, options, false)
    }

    /// Copy one or all titles to mkv files in `output_dir`
    pub fn mkv(
        &mut self,
        title: impl Into<TitleSelection>,
        output_dir: impl AsRef<Path>,
    ) -> Result<MakeMkvOutput> {
        self.mkv_with(title, output_dir, Overrides::default())
    }

    pub fn mkv_with(
        &mut self,
        title: impl Into<TitleSelection>,
        output_dir: impl AsRef<Path>,
        options: Overrides,
    ) -> Result<MakeMkvOutput> {
        let positional = [
            self.input.to_string(),
            title.into().to_string(),
            output_dir.as_ref().display().to_string(),
        ];
        self.run("mkv", &positional, options, false)
    }

    /// Back up the whole disc to `output_dir`
    pub fn backup(&mut self, output_dir: impl AsRef<Path>, decrypt: bool) -> Result<MakeMkvOutput> {
        self.backup_with(output_dir, decrypt, Overrides::default())
    }

    pub fn backup_with(
        &mut self,
        output_dir: impl AsRef<Path>,
        decrypt: bool,
        options: Overrides,
    ) -> Result<MakeMkvOutput> {
        let positional = [
            self.input.to_string(),
            output_dir.as_ref().display().to_string(),
        ];
        self.run("backup", &positional, options, decrypt)
    }

    /// Optical drives known to makemkvcon, regardless of this input
    pub fn drives(&mut self) -> Result<Vec<Drive>> {
        let positional = [Input::Disc(DRIVE_SCAN_DISC).to_string()];
        let output = self.run("info", &positional, Overrides::default(), false)?;
        Ok(output.drives)
    }

    fn run(
        &mut self,
        subcommand: &str,
        positional: &[String],
        options: Overrides,
        decrypt: bool,
    ) -> Result<MakeMkvOutput> {
        let binary = match &self.binary {
            Some(binary) => binary.clone(),
            None => find_makemkvcon()?,
        };
        let args = command::build_args(subcommand, positional, options.or(self.options), decrypt);
        info!("🚀 Running \"{} {}\"", binary.display(), args.join(" "));

        let mut child = Command::new(&binary)
            .args(&args)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .spawn()
            .map_err(|err| {
                MakeMkvError::Generic(format!("Failed to spawn {}: {err}", binary.display()))
            })?;

        // stdout and stderr are read as one stream, in arrival order
        let (tx, rx) = mpsc::channel();
        let mut readers = Vec::with_capacity(2);
        if let Some(stdout) = child.stdout.take() {
            readers.push(spawn_reader(stdout, tx.clone()));
        }
        if let Some(stderr) = child.stderr.take() {
            readers.push(spawn_reader(stderr, tx.clone()));
        }
        drop(tx);
        self.kill_handle.attach(child);

        let mut parser = match self.progress_handler.as_deref_mut() {
            Some(handler) => OutputParser::with_progress(handler),
            None => OutputParser::new(),
        };

        for line in rx {
            if let Err(err) = parser.feed(&line) {
                self.kill_handle.kill();
                let _ = self.kill_handle.wait();
                return Err(err);
            }
        }
        let output = parser.finish();

        for reader in readers {
            let _ = reader.join();
        }

        match self.kill_handle.wait()?.and_then(|status| status.code().map(|c| (status, c))) {
            Some((_, 0)) => {
                debug!("✅ makemkvcon finished");
                Ok(output)
            }
            Some((status, code)) => {
                debug!("makemkvcon exited with {status}");
                Err(MakeMkvError::ExitStatus(code))
            }
            None => Err(MakeMkvError::Terminated),
        }
    }
}

fn spawn_reader<R>(stream: R, tx: Sender<String>) -> thread::JoinHandle<()>
where
    R: Read + Send + 'static,
{
    thread::spawn(move || {
        let mut reader = BufReader::new(stream);
        let mut buf = Vec::new();
        loop {
            buf.clear();
            match reader.read_until(b'\n', &mut buf) {
                Ok(0) => break,
                Ok(_) => {
                    let line = String::from_utf8_lossy(&buf).trim_end().to_string();
                    trace!("📥 {line}");
                    if tx.send(line).is_err() {
                        break;
                    }
                }
                Err(err) => {
                    debug!("Stopped reading makemkvcon output: {err}");
                    break;
                }
            }
        }
    })
}
