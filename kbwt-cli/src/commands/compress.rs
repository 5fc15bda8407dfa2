//! `compress` command implementation.

use std::error::Error;
use std::fs;
use std::path::{Path, PathBuf};

use kbwt_core::mode::Mode;

use crate::utils::{load_key, with_bin_suffix};

pub fn cmd_compress(
    input: &Path,
    output: &Path,
    mode: Mode,
    key: &str,
) -> Result<(), Box<dyn Error>> {
    let key = load_key(key)?;
    let data = fs::read(input)?;
    let extension = input
        .extension()
        .map(|ext| format!(".{}", ext.to_string_lossy()));

    log::info!(
        "compressing {} ({} bytes) with mode {mode}",
        input.display(),
        data.len()
    );

    let container = kbwt_container::compress(&data, &key, mode, extension.as_deref())?;

    let output: PathBuf = with_bin_suffix(output);
    fs::write(&output, &container)?;

    log::info!("wrote {} ({} bytes)", output.display(), container.len());
    Ok(())
}
