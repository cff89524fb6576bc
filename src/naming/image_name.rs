use indexmap::IndexSet;

/// Parameters that determine the expected name of every image in a unit.
///
/// With prefixing on, the image at index `i` of unit `U` is named
/// `{archive_prefix}{delimiter}{U}{delimiter}{i:0width}{ext}` (the archive
/// prefix and its delimiter are left out when the prefix is empty). With
/// prefixing off it is just `{i:0width}{ext}`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageNaming {
    pub prefixing: bool,
    pub archive_prefix: String,
    pub delimiter: String,
    pub number_length: usize,
    /// Allowed extensions including the leading dot, in configured order.
    pub extensions: IndexSet<String>,
}

impl ImageNaming {
    /// Longest allowed extension that `file_name` ends with (case-sensitive).
    #[must_use]
    pub fn matched_extension(&self, file_name: &str) -> Option<&str> {
        self.extensions
            .iter()
            .filter(|ext| file_name.ends_with(ext.as_str()))
            .max_by_key(|ext| ext.len())
            .map(String::as_str)
    }

    /// Extension to use when building the expected name for `file_name`:
    /// its own allowed extension, or the first configured one.
    #[must_use]
    pub fn extension_for(&self, file_name: &str) -> &str {
        self.matched_extension(file_name)
            .or_else(|| self.extensions.first().map(String::as_str))
            .unwrap_or_default()
    }

    #[must_use]
    pub fn expected_name(&self, unit_name: &str, index: usize, extension: &str) -> String {
        let number = format!("{index:0width$}", width = self.number_length);
        if !self.prefixing {
            return format!("{number}{extension}");
        }

        let d = &self.delimiter;
        if self.archive_prefix.is_empty() {
            format!("{unit_name}{d}{number}{extension}")
        } else {
            format!("{}{d}{unit_name}{d}{number}{extension}", self.archive_prefix)
        }
    }
}

#[cfg(test)]
#[path = "image_name_tests.rs"]
mod tests;
