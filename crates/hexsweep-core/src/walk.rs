// NOTE: Exclusion semantics
//
// The dump tool skips a file when any component of its path below the root
// equals an excluded name (AnyComponent). The color tool prunes excluded
// directories when the walk reaches them (PruneAtDescent). Both produce the
// same file set for a given tree, but pruning never opens the excluded
// directory at all. Components of the root path itself never count, so a
// project that lives under e.g. `~/build/app` is still scanned.

use std::collections::BTreeSet;
use std::ffi::OsStr;
use std::path::{Path, PathBuf};
use tracing::debug;
use walkdir::{DirEntry, WalkDir};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ExtensionMatch {
    #[default]
    CaseSensitive,
    CaseInsensitive,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ExclusionRule {
    #[default]
    AnyComponent,
    PruneAtDescent,
}

/// Which files a walk yields.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WalkFilter {
    exclude_dirs: BTreeSet<String>,
    /// Stored without the leading dot
    extensions: BTreeSet<String>,
    extension_match: ExtensionMatch,
    exclusion_rule: ExclusionRule,
}

pub const DUMP_EXCLUDE_DIRS: &[&str] = &[
    "node_modules",
    ".git",
    "dist",
    "build",
    "__pycache__",
    ".vscode",
];
pub const DUMP_EXTENSIONS: &[&str] = &["ts", "tsx", "js", "jsx", "css", "html", "json"];

pub const COLORS_EXCLUDE_DIRS: &[&str] = &["node_modules", ".git"];
pub const COLORS_EXTENSIONS: &[&str] = &[
    "css", "scss", "less", "sass", "html", "htm", "js", "jsx", "ts", "tsx", "json", "md", "svg",
    "xml", "yml", "yaml",
];

impl WalkFilter {
    pub fn new<D, E>(exclude_dirs: D, extensions: E) -> Self
    where
        D: IntoIterator,
        D::Item: AsRef<str>,
        E: IntoIterator,
        E::Item: AsRef<str>,
    {
        Self {
            exclude_dirs: exclude_dirs
                .into_iter()
                .map(|d| d.as_ref().to_string())
                .collect(),
            extensions: extensions
                .into_iter()
                .map(|e| e.as_ref().trim_start_matches('.').to_string())
                .filter(|e| !e.is_empty())
                .collect(),
            extension_match: ExtensionMatch::default(),
            exclusion_rule: ExclusionRule::default(),
        }
    }

    /// Source files of a web project; exact-case extensions.
    pub fn dump_defaults() -> Self {
        Self::new(DUMP_EXCLUDE_DIRS, DUMP_EXTENSIONS)
    }

    /// Text formats that commonly carry color literals.
    pub fn colors_defaults() -> Self {
        Self::new(COLORS_EXCLUDE_DIRS, COLORS_EXTENSIONS)
            .with_extension_match(ExtensionMatch::CaseInsensitive)
            .with_exclusion_rule(ExclusionRule::PruneAtDescent)
    }

    pub fn with_extension_match(mut self, extension_match: ExtensionMatch) -> Self {
        self.extension_match = extension_match;
        self
    }

    pub fn with_exclusion_rule(mut self, exclusion_rule: ExclusionRule) -> Self {
        self.exclusion_rule = exclusion_rule;
        self
    }

    pub fn exclude_dirs(&self) -> impl Iterator<Item = &str> {
        self.exclude_dirs.iter().map(String::as_str)
    }

    pub fn extensions(&self) -> impl Iterator<Item = &str> {
        self.extensions.iter().map(String::as_str)
    }

    pub fn extension_match(&self) -> ExtensionMatch {
        self.extension_match
    }

    pub fn exclusion_rule(&self) -> ExclusionRule {
        self.exclusion_rule
    }

    /// Only the final extension counts: `types.d.ts` has extension `ts`.
    pub fn allows_extension(&self, path: &Path) -> bool {
        let Some(ext) = path.extension().and_then(OsStr::to_str) else {
            return false;
        };

        match self.extension_match {
            ExtensionMatch::CaseSensitive => self.extensions.contains(ext),
            ExtensionMatch::CaseInsensitive => self
                .extensions
                .iter()
                .any(|allowed| allowed.eq_ignore_ascii_case(ext)),
        }
    }

    pub fn is_excluded_name(&self, name: &OsStr) -> bool {
        name.to_str()
            .is_some_and(|name| self.exclude_dirs.contains(name))
    }

    pub fn has_excluded_component(&self, relative: &Path) -> bool {
        relative
            .components()
            .any(|component| self.is_excluded_name(component.as_os_str()))
    }
}

/// A candidate file found under the walk root.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub struct WalkEntry {
    /// Root joined with `relative`
    pub path: PathBuf,
    pub relative: PathBuf,
}

pub struct ProjectWalker {
    root: PathBuf,
    filter: WalkFilter,
}

impl ProjectWalker {
    pub fn new(root: impl Into<PathBuf>, filter: WalkFilter) -> Self {
        Self {
            root: root.into(),
            filter,
        }
    }

    /// Eligible files in directory order (file-name order within a directory).
    pub fn entries(&self) -> impl Iterator<Item = WalkEntry> + '_ {
        let prune = self.filter.exclusion_rule == ExclusionRule::PruneAtDescent;

        WalkDir::new(&self.root)
            .follow_links(false)
            .sort_by_file_name()
            .into_iter()
            .filter_entry(move |entry| !(prune && self.is_pruned(entry)))
            .filter_map(|entry| match entry {
                Ok(entry) => Some(entry),
                Err(err) => {
                    debug!(error = %err, "skipping unreadable walk entry");
                    None
                }
            })
            .filter_map(move |entry| self.accept(&entry))
    }

    /// Eligible files sorted lexicographically by path, for reproducible output.
    pub fn sorted_entries(&self) -> Vec<WalkEntry> {
        let mut entries: Vec<WalkEntry> = self.entries().collect();
        entries.sort();
        entries
    }

    fn is_pruned(&self, entry: &DirEntry) -> bool {
        entry.depth() > 0
            && entry.file_type().is_dir()
            && self.filter.is_excluded_name(entry.file_name())
    }

    fn accept(&self, entry: &DirEntry) -> Option<WalkEntry> {
        let path = entry.path();

        // Follows symlinks: a link to a directory is never a candidate,
        // a dangling link is.
        if path.is_dir() {
            return None;
        }

        let relative = path.strip_prefix(&self.root).unwrap_or(path);

        if self.filter.exclusion_rule == ExclusionRule::AnyComponent
            && self.filter.has_excluded_component(relative)
        {
            return None;
        }

        if !self.filter.allows_extension(path) {
            return None;
        }

        Some(WalkEntry {
            path: path.to_path_buf(),
            relative: relative.to_path_buf(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_strips_leading_dots() {
        let filter = WalkFilter::new(["target"], [".rs", "toml", ""]);
        assert_eq!(filter.extensions().collect::<Vec<_>>(), vec!["rs", "toml"]);
    }

    #[test]
    fn test_case_sensitive_extension() {
        let filter = WalkFilter::dump_defaults();
        assert!(filter.allows_extension(Path::new("src/App.tsx")));
        assert!(filter.allows_extension(Path::new("src/types.d.ts")));
        assert!(!filter.allows_extension(Path::new("src/App.TSX")));
        assert!(!filter.allows_extension(Path::new("README")));
        assert!(!filter.allows_extension(Path::new(".eslintrc")));
    }

    #[test]
    fn test_case_insensitive_extension() {
        let filter = WalkFilter::colors_defaults();
        assert!(filter.allows_extension(Path::new("theme.CSS")));
        assert!(filter.allows_extension(Path::new("icon.Svg")));
        assert!(!filter.allows_extension(Path::new("logo.png")));
    }

    #[test]
    fn test_excluded_component_at_any_depth() {
        let filter = WalkFilter::dump_defaults();
        assert!(filter.has_excluded_component(Path::new("node_modules/react/index.js")));
        assert!(filter.has_excluded_component(Path::new("packages/ui/dist/index.js")));
        assert!(!filter.has_excluded_component(Path::new("src/distance.ts")));
    }

    #[test]
    fn test_defaults_use_distinct_rules() {
        assert_eq!(
            WalkFilter::dump_defaults().exclusion_rule(),
            ExclusionRule::AnyComponent
        );
        assert_eq!(
            WalkFilter::colors_defaults().exclusion_rule(),
            ExclusionRule::PruneAtDescent
        );
        assert_eq!(
            WalkFilter::dump_defaults().extension_match(),
            ExtensionMatch::CaseSensitive
        );
    }
}
