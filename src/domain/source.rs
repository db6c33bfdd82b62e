/// Source File Domain Module
///
/// Defines which files under the project root are analysis candidates.

use std::path::Path;

/// The two file kinds the analyzer looks at.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceKind {
    Implementation,
    Header,
}

impl SourceKind {
    /// Classify a file extension. Matching is exact and case-sensitive.
    pub fn from_extension(ext: &str) -> Option<SourceKind> {
        match ext {
            "cpp" => Some(SourceKind::Implementation),
            "h" => Some(SourceKind::Header),
            _ => None,
        }
    }

    /// Classify a file path by its extension.
    pub fn from_path(path: &Path) -> Option<SourceKind> {
        path.extension()
            .and_then(|ext| ext.to_str())
            .and_then(Self::from_extension)
    }

    pub fn name(&self) -> &'static str {
        match self {
            SourceKind::Implementation => "implementation",
            SourceKind::Header => "header",
        }
    }
}

impl std::fmt::Display for SourceKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_extension() {
        assert_eq!(
            SourceKind::from_extension("cpp"),
            Some(SourceKind::Implementation)
        );
        assert_eq!(SourceKind::from_extension("h"), Some(SourceKind::Header));
        assert_eq!(SourceKind::from_extension("hpp"), None);
        assert_eq!(SourceKind::from_extension("CPP"), None);
        assert_eq!(SourceKind::from_extension("rs"), None);
    }

    #[test]
    fn test_from_path() {
        assert_eq!(
            SourceKind::from_path(Path::new("src/main.cpp")),
            Some(SourceKind::Implementation)
        );
        assert_eq!(
            SourceKind::from_path(Path::new("src/weather_api.h")),
            Some(SourceKind::Header)
        );
        assert_eq!(SourceKind::from_path(Path::new("README.md")), None);
        assert_eq!(SourceKind::from_path(Path::new("Makefile")), None);
    }
}
