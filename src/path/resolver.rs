use crate::core::env::EnvTable;
use std::path::Path;

/// Searches the colon-separated PATH directories for a command.
///
/// Directories are probed in PATH order with no deduplication; the first
/// candidate that exists wins. A missing or empty PATH resolves nothing,
/// so callers fall back to treating the command as a literal path.
#[derive(Clone)]
pub struct PathResolver;

impl Default for PathResolver {
    fn default() -> Self {
        Self::new()
    }
}

impl PathResolver {
    pub fn new() -> Self {
        Self
    }

    pub fn resolve(&self, command: &str, env: &EnvTable) -> Option<String> {
        let path = env.lookup("PATH")?;
        if path.is_empty() {
            return None;
        }

        path.split(':')
            .filter(|dir| !dir.is_empty())
            .map(|dir| format!("{}/{}", dir, command))
            .find(|candidate| Path::new(candidate).is_file())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;
    use std::fs;
    use std::path::PathBuf;

    /// Two fake PATH directories where only the second holds the command.
    fn setup_dirs(tag: &str) -> (PathBuf, PathBuf) {
        let base = env::temp_dir().join(format!("rill_resolver_{}", tag));
        let first = base.join("first");
        let second = base.join("second");
        fs::create_dir_all(&first).unwrap();
        fs::create_dir_all(&second).unwrap();
        fs::write(second.join("ls"), b"").unwrap();
        (first, second)
    }

    fn table_with_path(path: &str) -> EnvTable {
        EnvTable::new().update("PATH", path).unwrap()
    }

    #[test]
    fn test_resolve_first_match_wins() {
        let (first, second) = setup_dirs("order");
        let path = format!("{}:{}", first.display(), second.display());
        let table = table_with_path(&path);

        let resolved = PathResolver::new().resolve("ls", &table).unwrap();
        assert_eq!(resolved, format!("{}/ls", second.display()));
    }

    #[test]
    fn test_resolve_miss() {
        let (first, second) = setup_dirs("miss");
        let path = format!("{}:{}", first.display(), second.display());
        let table = table_with_path(&path);

        assert_eq!(PathResolver::new().resolve("nope", &table), None);
    }

    #[test]
    fn test_resolve_without_path_variable() {
        let table = EnvTable::new();
        assert_eq!(PathResolver::new().resolve("ls", &table), None);
    }

    #[test]
    fn test_resolve_empty_path_value() {
        let table = table_with_path("");
        assert_eq!(PathResolver::new().resolve("ls", &table), None);
    }

    #[test]
    fn test_resolve_skips_empty_segments() {
        let (_, second) = setup_dirs("segments");
        let path = format!("::{}", second.display());
        let table = table_with_path(&path);

        let resolved = PathResolver::new().resolve("ls", &table).unwrap();
        assert_eq!(resolved, format!("{}/ls", second.display()));
    }

    #[test]
    fn test_resolve_empty_command_name() {
        let (first, second) = setup_dirs("empty");
        let path = format!("{}:{}", first.display(), second.display());
        let table = table_with_path(&path);

        // Candidates end in a trailing slash and never match a file.
        assert_eq!(PathResolver::new().resolve("", &table), None);
    }
}
