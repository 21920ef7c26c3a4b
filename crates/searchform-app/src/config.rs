//! Form configuration.
//!
//! [`FormConfig`] describes the fields and buttons of both forms. The defaults
//! are the production layout; frontends override individual limits from
//! command-line arguments.

/// Configuration for a single text field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldConfig {
    /// Static label shown before the field content. May be empty.
    pub label: String,
    /// Text shown while the buffer is empty.
    pub placeholder: String,
    /// Maximum buffer length in characters.
    pub max_length: usize,
}

impl FieldConfig {
    /// Create a field configuration.
    pub fn new(label: impl Into<String>, placeholder: impl Into<String>, max_length: usize) -> Self {
        Self { label: label.into(), placeholder: placeholder.into(), max_length }
    }
}

/// Configuration for the criteria and confirm-add forms.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormConfig {
    /// Keyword field of the criteria form.
    pub keyword: FieldConfig,
    /// Location field of the criteria form.
    pub location: FieldConfig,
    /// Answer field of the confirm-add form.
    pub confirm: FieldConfig,
    /// Label of the criteria form's submit button.
    pub submit_label: String,
    /// Label of the confirm-add form's submit button.
    pub add_label: String,
}

impl Default for FormConfig {
    fn default() -> Self {
        Self {
            keyword: FieldConfig::new("Keyword", "eg: Web Developer", 32),
            location: FieldConfig::new("Location", "eg: Boulder CO, Salt Lake City UT", 64),
            confirm: FieldConfig::new("", "[Y/n]", 8),
            submit_label: "Submit".into(),
            add_label: "Add".into(),
        }
    }
}

impl FormConfig {
    /// Override the keyword length limit.
    #[must_use]
    pub fn with_keyword_limit(mut self, max_length: usize) -> Self {
        self.keyword.max_length = max_length;
        self
    }

    /// Override the location length limit.
    #[must_use]
    pub fn with_location_limit(mut self, max_length: usize) -> Self {
        self.location.max_length = max_length;
        self
    }
}
