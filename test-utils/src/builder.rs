use crate::{context::TestContext, error::TestError};

/// Builder for creating test contexts with an optional pre-seeded settings file.
///
/// Provides a fluent interface for configuring test environments backed by a temporary
/// directory. Without seed content the settings file does not exist, which is the state
/// the bot sees on its very first start.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::builder::TestBuilder;
///
/// let test = TestBuilder::new()
///     .with_settings_raw(r#"{"auto_translate_channels": {"1": "es"}}"#)
///     .build()?;
/// ```
pub struct TestBuilder {
    /// Raw contents to write to the settings file during `build()`.
    ///
    /// `None` leaves the file absent.
    settings: Option<String>,
}

impl TestBuilder {
    /// Creates a new test builder with no settings file.
    ///
    /// # Returns
    /// - New `TestBuilder` instance
    pub fn new() -> Self {
        Self { settings: None }
    }

    /// Seeds the settings file with a JSON document.
    ///
    /// # Arguments
    /// - `value` - JSON document written to the settings file
    ///
    /// # Returns
    /// - `Self` - Builder instance for method chaining
    pub fn with_settings_json(mut self, value: serde_json::Value) -> Self {
        self.settings = Some(value.to_string());
        self
    }

    /// Seeds the settings file with arbitrary text.
    ///
    /// Use this for documents that are not valid JSON, to exercise load failures.
    ///
    /// # Arguments
    /// - `contents` - Text written verbatim to the settings file
    ///
    /// # Returns
    /// - `Self` - Builder instance for method chaining
    pub fn with_settings_raw(mut self, contents: &str) -> Self {
        self.settings = Some(contents.to_string());
        self
    }

    /// Builds the test context.
    ///
    /// Creates a fresh temporary directory and writes the seeded settings file, if any.
    ///
    /// # Returns
    /// - `Ok(TestContext)` - Initialized test context
    /// - `Err(TestError::Io)` - Failed to create the directory or write the file
    pub fn build(self) -> Result<TestContext, TestError> {
        let context = TestContext::new()?;

        if let Some(contents) = self.settings {
            context.write_settings(&contents)?;
        }

        Ok(context)
    }
}

impl Default for TestBuilder {
    fn default() -> Self {
        Self::new()
    }
}
