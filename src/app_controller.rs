use anyhow::{Context, Result};
use log::{debug, info};
use std::path::{Path, PathBuf};

use crate::app_config::Config;
use crate::errors::AppError;
use crate::file_utils::FileManager;
use crate::prompt::{self, PromptReader};
use crate::xliff;

// @module: Application controller for patching templates

/// Outcome of one patch run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunSummary {
    /// Where the patched document was written
    pub output_path: PathBuf,
    /// Backup of the template, when one was made
    pub backup_path: Option<PathBuf>,
    /// Slots that received a translated line
    pub slots_filled: usize,
    /// Translated lines left over once the slots ran out
    pub unused_lines: usize,
    /// Slots still empty in the output
    pub remaining_slots: usize,
}

/// What a template contains
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TemplateInfo {
    /// Number of empty slots
    pub empty_slots: usize,
    /// Ids of the trans-units, in document order
    pub trans_unit_ids: Vec<String>,
}

/// Main application controller
pub struct Controller {
    // @field: App configuration
    config: Config,

    // @field: Directory that names are resolved against and output goes to
    base_dir: PathBuf,
}

impl Controller {
    // @method: Create a new controller with the given configuration
    pub fn with_config(config: Config, base_dir: PathBuf) -> Result<Self> {
        config.validate().context("Configuration validation failed")?;
        Ok(Self { config, base_dir })
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn base_dir(&self) -> &Path {
        &self.base_dir
    }

    /// Path of the output file
    pub fn output_path(&self) -> PathBuf {
        FileManager::resolve_path(&self.base_dir, &self.config.output_file_name)
    }

    /// Fill the template's empty slots with the translated lines and write the result
    pub fn run(&self, template: &Path, translated: &Path) -> Result<RunSummary> {
        for input in [template, translated] {
            if !FileManager::file_exists(input) {
                return Err(AppError::InputNotFound(input.to_path_buf()).into());
            }
        }

        let pattern = self.config.slot_pattern()?;
        let template_text = FileManager::read_to_string(template)?;
        let lines = FileManager::read_lines(translated, self.config.normalize_line_endings)?;
        debug!("Read {} translated lines from {:?}", lines.len(), translated);

        let backup_path = if self.config.backup_template {
            let backup = FileManager::duplicate_file(template, &self.base_dir, None, None)?;
            info!("Template backed up to {}", backup.display());
            Some(backup)
        } else {
            None
        };

        let substitution = pattern.fill_slots(&template_text, &lines);
        if substitution.unused_lines > 0 {
            debug!("{} translated lines had no slot left", substitution.unused_lines);
        }
        if substitution.remaining_slots > 0 {
            debug!("{} slots left empty", substitution.remaining_slots);
        }

        let output_path = self.output_path();
        FileManager::write_to_file(&output_path, &substitution.output)?;
        info!(
            "Filled {} slots. Success: {}",
            substitution.slots_filled,
            output_path.display()
        );

        Ok(RunSummary {
            output_path,
            backup_path,
            slots_filled: substitution.slots_filled,
            unused_lines: substitution.unused_lines,
            remaining_slots: substitution.remaining_slots,
        })
    }

    /// Ask for the two file names, then run
    pub fn run_interactive(&self, reader: &dyn PromptReader) -> Result<RunSummary> {
        let (template, translated) = prompt::ask_file_pair(reader, &self.base_dir)?;
        self.run(&template, &translated)
    }

    /// Count the empty slots and list the trans-unit ids of a template
    pub fn inspect(&self, template: &Path) -> Result<TemplateInfo> {
        let text = FileManager::read_to_string(template)?;
        let pattern = self.config.slot_pattern()?;

        Ok(TemplateInfo {
            empty_slots: pattern.count_slots(&text),
            trans_unit_ids: xliff::trans_unit_ids(&text),
        })
    }

    /// Duplicate a file relative to the base directory
    pub fn backup(&self, file: &Path, name: Option<&str>, path: Option<&Path>) -> Result<PathBuf> {
        let duplicate = FileManager::duplicate_file(file, &self.base_dir, name, path)?;
        info!("Success: {}", duplicate.display());
        Ok(duplicate)
    }

    /// Rename a file's stem and/or extension
    pub fn rename(
        &self,
        file: &Path,
        new_name: Option<&str>,
        new_extension: Option<&str>,
        duplicate_first: bool,
    ) -> Result<PathBuf> {
        let renamed =
            FileManager::rename_file(file, new_name, new_extension, duplicate_first, &self.base_dir)?;
        info!("Success: {}", renamed.display());
        Ok(renamed)
    }
}
