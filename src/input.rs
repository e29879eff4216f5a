//! makemkvcon input specifications

use crate::exceptions::{MakeMkvError, Result};
use log::debug;
use regex::Regex;
use std::fmt;
use std::fs;
use std::path::{Component, Path, PathBuf};
use std::sync::LazyLock;

#[allow(clippy::expect_used)]
static VIDEO_TS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)^video[-_ ]?ts").expect("VIDEO_TS pattern"));

/// What makemkvcon should open
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Input {
    /// Drive index as reported by `DRV` lines, `disc:N`
    Disc(u32),
    /// `dev:/dev/sr0` or `dev:D:`
    Device(PathBuf),
    /// `iso:movie.iso`
    Iso(PathBuf),
    /// A VIDEO_TS / BDMV folder or a single file, `file:PATH`
    File(PathBuf),
}

impl Input {
    /// Pick the input kind for a filesystem path.
    ///
    /// An `.IFO` file selects its folder, and a folder that contains a
    /// VIDEO_TS folder selects that child.
    pub fn detect(path: impl AsRef<Path>) -> Result<Input> {
        let path = path.as_ref();
        if !path.exists() && !is_drive_root(path) {
            return Err(MakeMkvError::InvalidInput(format!(
                "{} does not exist",
                path.display()
            )));
        }

        let input = if is_block_device(path) || is_drive_root(path) {
            Input::Device(path.to_path_buf())
        } else if has_extension(path, "iso") {
            Input::Iso(path.to_path_buf())
        } else if has_extension(path, "ifo") {
            let parent = path.parent().unwrap_or(path);
            Input::File(parent.to_path_buf())
        } else if path.is_dir() && !is_video_ts_folder(path) {
            match find_video_ts_child(path)? {
                Some(child) => Input::File(child),
                None => Input::File(path.to_path_buf()),
            }
        } else {
            Input::File(path.to_path_buf())
        };

        debug!("🔍 Detected input {} for {}", input, path.display());
        Ok(input)
    }
}

impl From<u32> for Input {
    fn from(disc: u32) -> Self {
        Input::Disc(disc)
    }
}

impl fmt::Display for Input {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Input::Disc(n) => write!(f, "disc:{n}"),
            Input::Device(path) => write!(f, "dev:{}", path.display()),
            Input::Iso(path) => write!(f, "iso:{}", path.display()),
            Input::File(path) => write!(f, "file:{}", path.display()),
        }
    }
}

fn has_extension(path: &Path, ext: &str) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .is_some_and(|e| e.eq_ignore_ascii_case(ext))
}

fn is_video_ts_folder(path: &Path) -> bool {
    path.is_dir()
        && path
            .file_name()
            .and_then(|n| n.to_str())
            .is_some_and(is_video_ts_name)
}

fn is_video_ts_name(name: &str) -> bool {
    VIDEO_TS.is_match(name)
}

fn find_video_ts_child(dir: &Path) -> Result<Option<PathBuf>> {
    let mut children = fs::read_dir(dir)?
        .filter_map(|entry| entry.ok().map(|e| e.path()))
        .filter(|p| is_video_ts_folder(p))
        .collect::<Vec<_>>();
    children.sort();
    Ok(children.into_iter().next())
}

/// `C:` or `C:\` on Windows
fn is_drive_root(path: &Path) -> bool {
    let mut components = path.components();
    matches!(components.next(), Some(Component::Prefix(_)))
        && components.all(|c| c == Component::RootDir)
}

#[cfg(unix)]
fn is_block_device(path: &Path) -> bool {
    use std::os::unix::fs::FileTypeExt;
    fs::metadata(path).is_ok_and(|m| m.file_type().is_block_device())
}

#[cfg(not(unix))]
fn is_block_device(_path: &Path) -> bool {
    false
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_display() {
        assert_eq!(Input::from(0).to_string(), "disc:0");
        assert_eq!(Input::Device("/dev/sr0".into()).to_string(), "dev:/dev/sr0");
        assert_eq!(Input::Iso("a.iso".into()).to_string(), "iso:a.iso");
        assert_eq!(Input::File("/mnt/x".into()).to_string(), "file:/mnt/x");
    }

    #[test]
    fn test_detect_iso_case_insensitive() {
        let dir = TempDir::new().unwrap();
        let iso = dir.path().join("MOVIE.ISO");
        fs::write(&iso, b"").unwrap();
        assert_eq!(Input::detect(&iso).unwrap(), Input::Iso(iso));
    }

    #[test]
    fn test_detect_ifo_selects_folder() {
        let dir = TempDir::new().unwrap();
        let video_ts = dir.path().join("VIDEO_TS");
        fs::create_dir(&video_ts).unwrap();
        let ifo = video_ts.join("VIDEO_TS.IFO");
        fs::write(&ifo, b"").unwrap();
        assert_eq!(Input::detect(&ifo).unwrap(), Input::File(video_ts));
    }

    #[test]
    fn test_detect_video_ts_folder() {
        let dir = TempDir::new().unwrap();
        let video_ts = dir.path().join("video-ts");
        fs::create_dir(&video_ts).unwrap();
        assert_eq!(Input::detect(&video_ts).unwrap(), Input::File(video_ts.clone()));

        // the parent resolves to the child folder
        assert_eq!(Input::detect(dir.path()).unwrap(), Input::File(video_ts));
    }

    #[test]
    fn test_detect_plain_folder_and_file() {
        let dir = TempDir::new().unwrap();
        fs::create_dir(dir.path().join("BDMV")).unwrap();
        assert_eq!(
            Input::detect(dir.path()).unwrap(),
            Input::File(dir.path().to_path_buf())
        );

        let mkv = dir.path().join("title.mkv");
        fs::write(&mkv, b"").unwrap();
        assert_eq!(Input::detect(&mkv).unwrap(), Input::File(mkv));
    }

    #[test]
    fn test_detect_missing_path() {
        let dir = TempDir::new().unwrap();
        let err = Input::detect(dir.path().join("nope")).unwrap_err();
        assert!(matches!(err, MakeMkvError::InvalidInput(_)));
    }

    #[test]
    fn test_video_ts_pattern() {
        for name in ["VIDEO_TS", "video_ts", "Video TS", "videots", "VIDEO-TS.backup"] {
            assert!(is_video_ts_name(name), "{name}");
        }
        assert!(!is_video_ts_name("AUDIO_TS"));
        assert!(!is_video_ts_name("my_video_ts"));
    }
}
