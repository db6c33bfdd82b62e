// Infrastructure implementations for callsketch.

pub mod extractor;
pub mod project_loader;

pub use extractor::RegexExtractor;
pub use project_loader::ProjectLoader;
