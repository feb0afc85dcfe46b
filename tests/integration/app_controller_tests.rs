/*!
 * Tests for the application controller
 */

use anyhow::Result;
use xliff_transup::app_config::Config;
use xliff_transup::app_controller::Controller;
use crate::common;

/// Test that an invalid configuration is rejected at construction
#[test]
fn test_with_config_withInvalidConfig_shouldFail() {
    let mut config = Config::default();
    config.output_file_name = String::new();

    assert!(Controller::with_config(config, std::env::temp_dir()).is_err());
}

/// Test that the output goes to the base directory
#[test]
fn test_output_path_shouldJoinBaseDirAndOutputName() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let controller = Controller::with_config(Config::default(), temp_dir.path().to_path_buf())?;

    assert_eq!(controller.base_dir(), temp_dir.path());
    assert_eq!(controller.output_path(), temp_dir.path().join("output.xliff"));
    Ok(())
}

/// Test that inspect counts empty targets and lists ids
#[test]
fn test_inspect_withPartlyFilledTemplate_shouldCountEmptySlots() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let template = common::create_test_file(
        temp_dir.path(),
        "template.xliff",
        &common::filled_template(&["done", "", ""]),
    )?;
    let controller = Controller::with_config(Config::default(), temp_dir.path().to_path_buf())?;

    let info = controller.inspect(&template)?;

    assert_eq!(info.empty_slots, 2);
    assert_eq!(info.trans_unit_ids, vec!["1", "2", "3"]);
    Ok(())
}

/// Test that backup and rename use the base directory for defaults
#[test]
fn test_backup_and_rename_shouldDelegateToFileManager() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let file = common::create_test_file(temp_dir.path(), "template.xliff", "content")?;
    let controller = Controller::with_config(Config::default(), temp_dir.path().to_path_buf())?;

    let backup = controller.backup(&file, Some("saved"), None)?;
    assert_eq!(backup, temp_dir.path().join("saved.xliff"));

    let renamed = controller.rename(&file, None, Some("txt"), false)?;
    assert_eq!(renamed, temp_dir.path().join("template.txt"));
    assert!(renamed.exists());
    Ok(())
}
