//! Key loading and logging setup shared by the `compress`/`decompress`
//! commands.

use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use env_logger::Target;
use kbwt_core::error::{KbwtError, Result};
use kbwt_core::key::MasterKey;

/// Load a master key from `raw`: if `raw` names an existing file, its
/// trimmed contents are used as the key; otherwise `raw` is the key
/// itself.
pub fn load_key(raw: &str) -> Result<MasterKey> {
    let candidate = Path::new(raw);
    let text = if candidate.is_file() {
        fs::read_to_string(candidate)?
    } else {
        raw.to_string()
    };
    MasterKey::new(text.trim())
}

/// Suffix `path` with `.bin`, as required of compression output.
pub fn with_bin_suffix(path: &Path) -> PathBuf {
    let mut name = path.as_os_str().to_os_string();
    name.push(".bin");
    PathBuf::from(name)
}

/// Append `extension` (e.g. `.txt`) to `path`, if present.
pub fn with_restored_extension(path: &Path, extension: Option<&str>) -> PathBuf {
    match extension {
        Some(ext) => {
            let mut name = path.as_os_str().to_os_string();
            name.push(ext);
            PathBuf::from(name)
        }
        None => path.to_path_buf(),
    }
}

/// A writer that duplicates every write to stderr before forwarding it to
/// the log file, so `-l` is additive rather than a replacement target.
struct TeeToStderr {
    file: fs::File,
}

impl Write for TeeToStderr {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        let _ = io::stderr().write_all(buf);
        self.file.write(buf)
    }

    fn flush(&mut self) -> io::Result<()> {
        let _ = io::stderr().flush();
        self.file.flush()
    }
}

/// Initialize the `env_logger` backend. With no `log_path`, logs go to
/// stderr only (the default target); with one, they go to both stderr and
/// the given file.
pub fn init_logging(log_path: Option<&Path>) -> Result<()> {
    let mut builder = env_logger::Builder::from_default_env();

    if let Some(path) = log_path {
        let file = fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(path)
            .map_err(|e| {
                KbwtError::invalid_input(format!("cannot open log file {}: {e}", path.display()))
            })?;
        builder.target(Target::Pipe(Box::new(TeeToStderr { file })));
    }

    builder.init();
    Ok(())
}
