//! Converter registry for dialect discovery and selection
//!
//! Converters are registered by direction and looked up by dialect names,
//! which is how the command line addresses them.

use crate::converter::Converter;
use crate::dialect::{Dialect, Direction};
use crate::error::BabelError;
use std::collections::HashMap;

/// Registry of document converters
///
/// # Examples
///
/// ```ignore
/// let registry = ConverterRegistry::default();
/// let converter = registry.get("markdown", "scrapbox")?;
/// let wiki = converter.convert("# Title");
/// ```
pub struct ConverterRegistry {
    converters: HashMap<Direction, Box<dyn Converter>>,
}

impl ConverterRegistry {
    /// Create a new empty registry
    pub fn new() -> Self {
        ConverterRegistry {
            converters: HashMap::new(),
        }
    }

    /// Register a converter
    ///
    /// If a converter for the same direction already exists, it will be replaced.
    pub fn register<C: Converter + 'static>(&mut self, converter: C) {
        self.converters
            .insert(converter.direction(), Box::new(converter));
    }

    /// Get a converter by source and target dialect names
    pub fn get(&self, from: &str, to: &str) -> Result<&dyn Converter, BabelError> {
        let source: Dialect = from.parse()?;
        let target: Dialect = to.parse()?;
        Direction::from_dialects(source, target)
            .and_then(|direction| self.get_direction(direction))
            .ok_or_else(|| BabelError::ConverterNotFound {
                from: from.to_string(),
                to: to.to_string(),
            })
    }

    /// Get the converter registered for a direction
    pub fn get_direction(&self, direction: Direction) -> Option<&dyn Converter> {
        self.converters.get(&direction).map(|c| c.as_ref())
    }

    /// Check if a converter exists for a direction
    pub fn has(&self, direction: Direction) -> bool {
        self.converters.contains_key(&direction)
    }

    /// List all registered converter names (sorted)
    pub fn list_converters(&self) -> Vec<String> {
        let mut names: Vec<_> = self
            .converters
            .values()
            .map(|c| c.name().to_string())
            .collect();
        names.sort();
        names
    }

    /// Detect the dialect of a file from its extension
    ///
    /// ```ignore
    /// let registry = ConverterRegistry::default();
    /// assert_eq!(registry.detect_dialect_from_filename("page.sb"), Some(Dialect::Scrapbox));
    /// assert_eq!(registry.detect_dialect_from_filename("notes.md"), Some(Dialect::Markdown));
    /// assert_eq!(registry.detect_dialect_from_filename("notes.txt"), None);
    /// ```
    pub fn detect_dialect_from_filename(&self, filename: &str) -> Option<Dialect> {
        let extension = std::path::Path::new(filename)
            .extension()
            .and_then(|ext| ext.to_str())?;

        Dialect::from_extension(extension)
    }

    /// Convert text using the converter registered between two dialects
    pub fn convert(&self, source: &str, from: &str, to: &str) -> Result<String, BabelError> {
        let converter = self.get(from, to)?;
        tracing::debug!(converter = converter.name(), bytes = source.len(), "converting");
        Ok(converter.convert(source))
    }

    /// Create a registry with both directions registered
    pub fn with_defaults() -> Self {
        let mut registry = Self::new();

        registry.register(crate::markdown_to_scrapbox::MarkdownToScrapbox);
        registry.register(crate::scrapbox_to_markdown::ScrapboxToMarkdown);

        registry
    }
}

impl Default for ConverterRegistry {
    fn default() -> Self {
        Self::with_defaults()
    }
}
