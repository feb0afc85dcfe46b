/*!
 * Tests for the interactive prompt
 */

use anyhow::Result;
use std::path::Path;
use xliff_transup::errors::PromptError;
use xliff_transup::prompt::{MENU_TEXT, ask_file_pair, parse_file_pair};
use crate::common::ScriptedPrompt;

#[test]
fn test_parseFilePair_withCommaAndSpace_shouldReturnBothNames() {
    let (template, translated) = parse_file_pair("template.xliff, translated.txt").unwrap();
    assert_eq!(template, "template.xliff");
    assert_eq!(translated, "translated.txt");
}

#[test]
fn test_parseFilePair_withEmptySecondName_shouldReportOneName() {
    let err = parse_file_pair("template.xliff, ").unwrap_err();
    assert!(matches!(err, PromptError::WrongFileCount { found: 1, .. }));
}

#[test]
fn test_askFilePair_shouldShowMenuAndResolveAgainstBaseDir() -> Result<()> {
    let reader = ScriptedPrompt::new(&["template.xliff, translated.txt"]);
    let base = Path::new("/opt/transup");

    let (template, translated) = ask_file_pair(&reader, base)?;

    assert_eq!(template, base.join("template.xliff"));
    assert_eq!(translated, base.join("translated.txt"));
    assert!(reader.prompts.borrow()[0].starts_with(MENU_TEXT));
    Ok(())
}

#[test]
fn test_askFilePair_withBadAnswer_shouldFailWithPromptError() {
    let reader = ScriptedPrompt::new(&["just-one-file.xliff"]);

    let err = ask_file_pair(&reader, Path::new("/opt/transup")).unwrap_err();

    assert!(err.downcast_ref::<PromptError>().is_some());
}
