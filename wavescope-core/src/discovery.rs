//! Input discovery for the render batch.
//!
//! Resolves the user's input argument (nothing, a file or a directory) into
//! the list of audio files to render, and picks the directory the videos are
//! written to.

use crate::config::{AUDIO_EXTENSIONS, InstallLayout, PLACEHOLDER_FILE};
use crate::error::{CoreError, CoreResult};

use std::fs;
use std::path::{Path, PathBuf};

/// Returns true when the file name ends in a recognized audio extension
/// (case-insensitive).
pub fn is_audio_file(path: &Path) -> bool {
    let Some(name) = path.file_name().and_then(|n| n.to_str()) else {
        return false;
    };
    let name = name.to_lowercase();
    AUDIO_EXTENSIONS.iter().any(|ext| name.ends_with(ext))
}

/// Resolves the input argument into the sorted list of files to render.
///
/// * `None` lists the layout's default input directory, minus the
///   placeholder keep-file.
/// * A file is the sole candidate.
/// * A directory contributes every entry it contains (not recursive).
///
/// Every candidate must carry an audio extension; the first one that does
/// not aborts with [`CoreError::InvalidFileType`].
pub fn resolve_candidates(input: Option<&Path>, layout: &InstallLayout) -> CoreResult<Vec<PathBuf>> {
    let mut candidates = match input {
        None => {
            log::debug!("No input given, using {}", layout.input_dir.display());
            list_entries(&layout.input_dir)?
                .into_iter()
                .filter(|p| p.file_name().is_none_or(|n| n != PLACEHOLDER_FILE))
                .collect()
        }
        Some(path) if path.is_file() => vec![path.to_path_buf()],
        Some(path) if path.is_dir() => list_entries(path)?,
        Some(path) => return Err(CoreError::InvalidInput(path.to_path_buf())),
    };

    candidates.sort();

    if let Some(bad) = candidates.iter().find(|p| !is_audio_file(p)) {
        return Err(CoreError::InvalidFileType(bad.clone()));
    }
    if candidates.is_empty() {
        return Err(CoreError::NoFilesFound);
    }

    Ok(candidates)
}

/// Picks the directory rendered videos are written to.
///
/// An explicit output is used verbatim. Otherwise a directory input renders
/// next to its sources, and the default or single-file cases use the
/// layout's output directory.
pub fn resolve_output_dir(
    input: Option<&Path>,
    output: Option<&Path>,
    layout: &InstallLayout,
) -> PathBuf {
    if let Some(output) = output {
        return output.to_path_buf();
    }
    match input {
        Some(dir) if dir.is_dir() => dir.to_path_buf(),
        _ => layout.output_dir.clone(),
    }
}

fn list_entries(dir: &Path) -> CoreResult<Vec<PathBuf>> {
    let mut entries = Vec::new();
    for entry in fs::read_dir(dir)? {
        entries.push(entry?.path());
    }
    Ok(entries)
}
