use std::path::PathBuf;

use tempfile::TempDir;

use crate::error::TestError;

const SETTINGS_FILE_NAME: &str = "bot_settings.json";

/// Test context owning a temporary directory for the settings file.
///
/// The directory and everything in it is removed when the context is dropped, so each
/// test gets an isolated settings file.
pub struct TestContext {
    /// Temporary directory holding the settings file.
    pub dir: TempDir,
}

impl TestContext {
    /// Creates a new test context with an empty temporary directory.
    ///
    /// # Returns
    /// - `Ok(TestContext)` - New context
    /// - `Err(TestError::Io)` - Temporary directory could not be created
    pub fn new() -> Result<Self, TestError> {
        Ok(Self {
            dir: tempfile::tempdir()?,
        })
    }

    /// Path of the settings file inside the temporary directory.
    ///
    /// The file only exists if it was seeded or written by the code under test.
    pub fn settings_path(&self) -> PathBuf {
        self.dir.path().join(SETTINGS_FILE_NAME)
    }

    /// Overwrites the settings file with the given contents.
    pub fn write_settings(&self, contents: &str) -> Result<(), TestError> {
        std::fs::write(self.settings_path(), contents)?;
        Ok(())
    }

    /// Reads the settings file back as JSON.
    ///
    /// # Returns
    /// - `Ok(serde_json::Value)` - Parsed settings document
    /// - `Err(TestError)` - File missing or not valid JSON
    pub fn read_settings_json(&self) -> Result<serde_json::Value, TestError> {
        let contents = std::fs::read_to_string(self.settings_path())?;
        Ok(serde_json::from_str(&contents)?)
    }
}
