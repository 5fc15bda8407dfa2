//! `decompress` command implementation.

use std::error::Error;
use std::fs;
use std::path::Path;

use crate::utils::{load_key, with_restored_extension};

pub fn cmd_decompress(input: &Path, output: &Path, key: &str) -> Result<(), Box<dyn Error>> {
    let key = load_key(key)?;
    let container = fs::read(input)?;

    log::info!(
        "decompressing {} ({} bytes)",
        input.display(),
        container.len()
    );

    let (data, extension) = kbwt_container::decompress(&container, &key)?;
    let output = with_restored_extension(output, extension.as_deref());
    fs::write(&output, &data)?;

    log::info!("wrote {} ({} bytes)", output.display(), data.len());
    Ok(())
}
