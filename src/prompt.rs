/*!
 * Interactive prompting.
 *
 * The terminal is reached through the `PromptReader` trait so that the
 * interactive flow can be driven by scripted answers in tests.
 */

use anyhow::Result;
use dialoguer::Input;
use std::path::{Path, PathBuf};

use crate::errors::PromptError;
use crate::file_utils::FileManager;

/// Menu shown before asking for the two file names
pub const MENU_TEXT: &str = "To update an xliff file, two files are needed:
    - the template, which is the original & pure xliff file
    - the text file that contains the translated texts, line by line

Please put both files into the same directory as this program.

Enter the TEMPLATE file's and the TRANSLATED file's names with their extensions,
separated by a comma, as in:
    template.xliff, translated.txt";

/// Question asked after the menu
pub const FILE_PAIR_PROMPT: &str = "Your input";

/// Source of user answers
pub trait PromptReader {
    /// Show `prompt` and return the line the user typed
    fn read_line(&self, prompt: &str) -> Result<String>;

    /// Show `message` and block until the user confirms
    fn acknowledge(&self, message: &str) -> Result<()>;
}

/// Reads answers from the terminal
#[derive(Debug, Default, Clone, Copy)]
pub struct ConsolePrompt;

impl PromptReader for ConsolePrompt {
    fn read_line(&self, prompt: &str) -> Result<String> {
        let answer = Input::<String>::new()
            .with_prompt(prompt)
            .allow_empty(true)
            .interact_text()
            .map_err(|e| PromptError::Terminal(e.to_string()))?;
        Ok(answer)
    }

    fn acknowledge(&self, message: &str) -> Result<()> {
        eprintln!("{}", message);
        Input::<String>::new()
            .with_prompt("Press enter to continue")
            .allow_empty(true)
            .interact_text()
            .map_err(|e| PromptError::Terminal(e.to_string()))?;
        Ok(())
    }
}

/// Split an answer like `template.xliff, translated.txt` into its two names
pub fn parse_file_pair(input: &str) -> Result<(String, String), PromptError> {
    let names: Vec<&str> = input
        .trim()
        .trim_matches(|c: char| c == '\'' || c == '"')
        .split(',')
        .map(|name| name.trim().trim_matches(|c: char| c == '\'' || c == '"'))
        .filter(|name| !name.is_empty())
        .collect();

    match names.as_slice() {
        [template, translated] => Ok((template.to_string(), translated.to_string())),
        _ => Err(PromptError::WrongFileCount {
            found: names.len(),
            input: input.to_string(),
        }),
    }
}

/// Show the menu, read the answer and resolve both names against `base_dir`
pub fn ask_file_pair(reader: &dyn PromptReader, base_dir: &Path) -> Result<(PathBuf, PathBuf)> {
    let answer = reader.read_line(&format!("{}\n\n{}", MENU_TEXT, FILE_PAIR_PROMPT))?;
    let (template, translated) = parse_file_pair(&answer)?;

    Ok((
        FileManager::resolve_path(base_dir, template),
        FileManager::resolve_path(base_dir, translated),
    ))
}
