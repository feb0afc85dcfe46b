/*!
 * # xliff-transup
 *
 * A Rust library for patching offline translations back into XLIFF files.
 *
 * A template XLIFF file holds empty `<target>` elements. A plain text file
 * holds one translation per line. Each line is written into the next empty
 * target, in order, producing a file that can be uploaded again to a
 * translation platform.
 *
 * ## Architecture
 *
 * The library is organized in these main modules:
 * - `substitution`: Slot pattern and the ordered fill of empty slots
 * - `xliff`: Trans-unit id lookup
 * - `app_config`: Configuration management
 * - `file_utils`: Path resolution, reads, writes, duplication and renaming
 * - `prompt`: Interactive file name prompt
 * - `app_controller`: Main application controller
 * - `errors`: Custom error types for the application
 *
 * ## License
 *
 * This project is licensed under the MIT License
 */

// Global lints configuration
// These lints will be allowed but not auto-fixed
#![allow(clippy::uninlined_format_args)]

// Public modules
pub mod app_config;
pub mod app_controller;
pub mod errors;
pub mod file_utils;
pub mod prompt;
pub mod substitution;
pub mod xliff;

// Re-export main types for easier usage
pub use app_config::Config;
pub use app_controller::{Controller, RunSummary, TemplateInfo};
pub use errors::{AppError, PromptError, SubstitutionError};
pub use substitution::{SlotPattern, Substitution, build_output, split_translated_lines};
