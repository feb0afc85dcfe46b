/*!
 * Tests for file utility functions
 */

use anyhow::Result;
use std::fs;
use xliff_transup::errors::AppError;
use xliff_transup::file_utils::FileManager;
use crate::common;

/// Test that file_exists returns true for existing files
#[test]
fn test_file_exists_withExistingFile_shouldReturnTrue() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let test_file = common::create_test_file(temp_dir.path(), "exists.tmp", "test content")?;

    assert!(FileManager::file_exists(&test_file));
    assert!(!FileManager::file_exists(temp_dir.path()));

    Ok(())
}

/// Test that read_to_string reports a missing file as InputNotFound
#[test]
fn test_read_to_string_withMissingFile_shouldReturnInputNotFound() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let missing = temp_dir.path().join("missing.xliff");

    let err = FileManager::read_to_string(&missing).unwrap_err();

    assert!(matches!(err.downcast_ref::<AppError>(), Some(AppError::InputNotFound(p)) if *p == missing));
    Ok(())
}

/// Test that read_lines keeps terminators and the last unterminated line
#[test]
fn test_read_lines_withMixedTerminators_shouldKeepThem() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let file = common::create_test_file(temp_dir.path(), "translated.txt", "a\r\nb\nc")?;

    assert_eq!(FileManager::read_lines(&file, false)?, vec!["a\r\n", "b\n", "c"]);
    assert_eq!(FileManager::read_lines(&file, true)?, vec!["a\n", "b\n", "c"]);

    Ok(())
}

/// Test that write_to_file overwrites existing content and creates parents
#[test]
fn test_write_to_file_withExistingFile_shouldOverwrite() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let target = temp_dir.path().join("nested").join("output.xliff");

    FileManager::write_to_file(&target, "first")?;
    FileManager::write_to_file(&target, "second")?;

    assert_eq!(fs::read_to_string(&target)?, "second");
    Ok(())
}

/// Test that duplicate_file without name or path uses the default name
#[test]
fn test_duplicate_file_withDefaults_shouldCreateDuplicatedCopy() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let source_dir = temp_dir.path().join("src");
    fs::create_dir(&source_dir)?;
    let original = common::create_test_file(&source_dir, "template.xliff", "content")?;

    let copy = FileManager::duplicate_file(&original, temp_dir.path(), None, None)?;

    assert_eq!(copy, temp_dir.path().join("template-duplicated.xliff"));
    assert_eq!(fs::read_to_string(&copy)?, "content");
    assert!(original.exists());
    Ok(())
}

/// Test that a name places the copy in the base directory with the original extension
#[test]
fn test_duplicate_file_withName_shouldKeepExtension() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let original = common::create_test_file(temp_dir.path(), "template.xliff", "content")?;

    let copy = FileManager::duplicate_file(&original, temp_dir.path(), Some("backup"), None)?;

    assert_eq!(copy, temp_dir.path().join("backup.xliff"));
    assert!(copy.exists());
    Ok(())
}

/// Test that a path takes precedence over a name
#[test]
fn test_duplicate_file_withPathAndName_shouldUsePath() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let original = common::create_test_file(temp_dir.path(), "template.xliff", "content")?;
    let target = temp_dir.path().join("elsewhere").join("copy.bak");

    let copy = FileManager::duplicate_file(&original, temp_dir.path(), Some("ignored"), Some(&target))?;

    assert_eq!(copy, target);
    assert!(!temp_dir.path().join("ignored.xliff").exists());
    Ok(())
}

/// Test that copying a file onto itself falls back to the default name
#[test]
fn test_duplicate_file_withSamePath_shouldRetryWithDefaultName() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let original = common::create_test_file(temp_dir.path(), "template.xliff", "content")?;

    let copy = FileManager::duplicate_file(&original, temp_dir.path(), None, Some(&original))?;

    assert_eq!(copy, temp_dir.path().join("template-duplicated.xliff"));
    assert_eq!(fs::read_to_string(&original)?, "content");
    assert_eq!(fs::read_to_string(&copy)?, "content");
    Ok(())
}

/// Test that duplicating a missing file fails without retrying
#[test]
fn test_duplicate_file_withMissingSource_shouldFail() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let missing = temp_dir.path().join("missing.xliff");

    assert!(FileManager::duplicate_file(&missing, temp_dir.path(), Some("x"), None).is_err());
    assert!(!temp_dir.path().join("missing-duplicated.xliff").exists());
    Ok(())
}

/// Test that rename_file changes only the extension when asked
#[test]
fn test_rename_file_withNewExtension_shouldKeepStem() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let original = common::create_test_file(temp_dir.path(), "template.xliff", "content")?;

    let renamed = FileManager::rename_file(&original, None, Some(".txt"), false, temp_dir.path())?;

    assert_eq!(renamed, temp_dir.path().join("template.txt"));
    assert!(renamed.exists());
    assert!(!original.exists());
    Ok(())
}

/// Test that rename_file can back up the file first
#[test]
fn test_rename_file_withNameAndBackup_shouldDuplicateFirst() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let original = common::create_test_file(temp_dir.path(), "template.xliff", "content")?;

    let renamed = FileManager::rename_file(&original, Some("final"), None, true, temp_dir.path())?;

    assert_eq!(renamed, temp_dir.path().join("final.xliff"));
    assert!(temp_dir.path().join("template-duplicated.xliff").exists());
    assert!(!original.exists());
    Ok(())
}
