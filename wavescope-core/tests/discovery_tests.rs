// wavescope-core/tests/discovery_tests.rs

mod common;

use common::create_dummy_file;
use std::fs;
use tempfile::tempdir;
use wavescope_core::config::InstallLayout;
use wavescope_core::discovery::{resolve_candidates, resolve_output_dir};
use wavescope_core::error::CoreError;

#[test]
fn test_directory_with_foreign_file_is_rejected() -> Result<(), Box<dyn std::error::Error>> {
    let dir = tempdir()?;
    create_dummy_file(dir.path(), "a.mp3");
    create_dummy_file(dir.path(), "b.wav");
    let bad = create_dummy_file(dir.path(), "c.txt");
    let layout = InstallLayout::new(dir.path());

    match resolve_candidates(Some(dir.path()), &layout) {
        Err(CoreError::InvalidFileType(path)) => assert_eq!(path, bad),
        other => panic!("expected InvalidFileType, got {other:?}"),
    }
    Ok(())
}

#[test]
fn test_directory_entries_are_sorted() -> Result<(), Box<dyn std::error::Error>> {
    let dir = tempdir()?;
    let c = create_dummy_file(dir.path(), "c.OGG");
    let a = create_dummy_file(dir.path(), "a.mp3");
    let b = create_dummy_file(dir.path(), "b.wav");
    let layout = InstallLayout::new(dir.path());

    let files = resolve_candidates(Some(dir.path()), &layout)?;
    assert_eq!(files, vec![a, b, c]);
    Ok(())
}

#[test]
fn test_single_file_input() -> Result<(), Box<dyn std::error::Error>> {
    let dir = tempdir()?;
    let song = create_dummy_file(dir.path(), "song.m4a");
    create_dummy_file(dir.path(), "readme.txt");
    let layout = InstallLayout::new(dir.path());

    let files = resolve_candidates(Some(&song), &layout)?;
    assert_eq!(files, vec![song]);
    Ok(())
}

#[test]
fn test_single_file_with_wrong_extension() -> Result<(), Box<dyn std::error::Error>> {
    let dir = tempdir()?;
    let notes = create_dummy_file(dir.path(), "notes.txt");
    let layout = InstallLayout::new(dir.path());

    assert!(matches!(
        resolve_candidates(Some(&notes), &layout),
        Err(CoreError::InvalidFileType(_))
    ));
    Ok(())
}

#[test]
fn test_missing_input_path() -> Result<(), Box<dyn std::error::Error>> {
    let dir = tempdir()?;
    let layout = InstallLayout::new(dir.path());
    let missing = dir.path().join("nope.mp3");

    match resolve_candidates(Some(&missing), &layout) {
        Err(CoreError::InvalidInput(path)) => assert_eq!(path, missing),
        other => panic!("expected InvalidInput, got {other:?}"),
    }
    Ok(())
}

#[test]
fn test_default_input_skips_placeholder() -> Result<(), Box<dyn std::error::Error>> {
    let root = tempdir()?;
    let layout = InstallLayout::new(root.path());
    fs::create_dir_all(&layout.input_dir)?;
    create_dummy_file(&layout.input_dir, ".gitkeep");
    let song = create_dummy_file(&layout.input_dir, "song.flac");

    let files = resolve_candidates(None, &layout)?;
    assert_eq!(files, vec![song]);
    Ok(())
}

#[test]
fn test_empty_default_input() -> Result<(), Box<dyn std::error::Error>> {
    let root = tempdir()?;
    let layout = InstallLayout::new(root.path());
    fs::create_dir_all(&layout.input_dir)?;
    create_dummy_file(&layout.input_dir, ".gitkeep");

    assert!(matches!(
        resolve_candidates(None, &layout),
        Err(CoreError::NoFilesFound)
    ));
    Ok(())
}

#[test]
fn test_empty_directory_input() -> Result<(), Box<dyn std::error::Error>> {
    let dir = tempdir()?;
    let layout = InstallLayout::new(dir.path());
    let err = resolve_candidates(Some(dir.path()), &layout).unwrap_err();
    assert_eq!(err.to_string(), "No input detected.");
    Ok(())
}

#[test]
fn test_output_dir_resolution() -> Result<(), Box<dyn std::error::Error>> {
    let root = tempdir()?;
    let layout = InstallLayout::new(root.path());
    let album = root.path().join("album");
    fs::create_dir_all(&album)?;
    let song = create_dummy_file(&album, "song.mp3");

    assert_eq!(resolve_output_dir(Some(&album), None, &layout), album);
    assert_eq!(resolve_output_dir(Some(&song), None, &layout), layout.output_dir);
    assert_eq!(resolve_output_dir(None, None, &layout), layout.output_dir);
    assert_eq!(
        resolve_output_dir(Some(&album), Some(root.path()), &layout),
        root.path().to_path_buf()
    );
    Ok(())
}
