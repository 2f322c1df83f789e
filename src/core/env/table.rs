use super::EnvError;
use std::env;

/// Ordered table of `name=value` entries, the exact shape handed to child
/// processes.
///
/// Entries are never edited in place. `update` builds a complete
/// replacement table and the holder swaps its reference afterward, so a
/// snapshot taken before an update stays valid and is never seen half
/// rebuilt. At most one entry exists per name; updates keep the relative
/// order of existing names and append new names at the end.
#[derive(Clone, Debug, Default)]
pub struct EnvTable {
    entries: Vec<String>,
}

impl EnvTable {
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Captures the environment inherited by this process.
    pub fn from_process() -> Self {
        let entries = env::vars()
            .map(|(name, value)| Self::entry(&name, &value))
            .collect();
        Self { entries }
    }

    /// Formats a single `name=value` entry.
    pub fn entry(name: &str, value: &str) -> String {
        format!("{}={}", name, value)
    }

    /// Returns the value bound to `name`, or `None` when absent. The match
    /// requires the full name followed by `=`, so `FOO` never matches a
    /// `FOOBAR=` entry. An empty name never matches.
    pub fn lookup(&self, name: &str) -> Option<&str> {
        if name.is_empty() {
            return None;
        }
        self.entries
            .iter()
            .find_map(|entry| Self::value_of(entry, name))
    }

    /// Builds a new table with `name` bound to `value`, leaving `self`
    /// untouched. An existing name keeps its slot with the value replaced;
    /// a new name is appended. The caller swaps its held table on success.
    pub fn update(&self, name: &str, value: &str) -> Result<EnvTable, EnvError> {
        if name.is_empty() {
            return Err(EnvError::InvalidName("empty"));
        }
        if name.contains('=') {
            return Err(EnvError::InvalidName("contains '='"));
        }

        let replacing = self.lookup(name).is_some();
        let mut entries = Vec::with_capacity(self.entries.len() + usize::from(!replacing));

        for existing in &self.entries {
            if Self::value_of(existing, name).is_some() {
                entries.push(Self::entry(name, value));
            } else {
                entries.push(existing.clone());
            }
        }
        if !replacing {
            entries.push(Self::entry(name, value));
        }

        Ok(EnvTable { entries })
    }

    /// The snapshot handed verbatim to process creation.
    pub fn entries(&self) -> &[String] {
        &self.entries
    }

    /// `(name, value)` pairs for installing the snapshot on a child.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().filter_map(|entry| entry.split_once('='))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    fn value_of<'a>(entry: &'a str, name: &str) -> Option<&'a str> {
        entry.strip_prefix(name)?.strip_prefix('=')
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table(entries: &[&str]) -> EnvTable {
        let mut table = EnvTable::new();
        for entry in entries {
            let (name, value) = entry.split_once('=').unwrap();
            table = table.update(name, value).unwrap();
        }
        table
    }

    #[test]
    fn test_lookup_present() {
        let table = table(&["FOO=bar", "BAZ=qux"]);
        assert_eq!(table.lookup("FOO"), Some("bar"));
        assert_eq!(table.lookup("BAZ"), Some("qux"));
    }

    #[test]
    fn test_lookup_absent_and_empty() {
        let table = table(&["FOO=bar"]);
        assert_eq!(table.lookup("NOPE"), None);
        assert_eq!(table.lookup(""), None);
        assert_eq!(EnvTable::new().lookup("FOO"), None);
    }

    #[test]
    fn test_lookup_no_prefix_match() {
        let table = table(&["FOO=x"]);
        assert_eq!(table.lookup("FOOBAR"), None);
        assert_eq!(table.lookup("FO"), None);
    }

    #[test]
    fn test_update_appends_new_name() {
        let before = table(&["A=1", "B=2"]);
        let after = before.update("FOO", "bar").unwrap();

        assert_eq!(after.len(), 3);
        assert_eq!(after.entries()[..2], before.entries()[..]);
        assert_eq!(after.entries()[2], "FOO=bar");
    }

    #[test]
    fn test_update_replaces_in_place() {
        let before = table(&["A=1", "FOO=bar", "B=2"]);
        let after = before.update("FOO", "baz").unwrap();

        assert_eq!(after.len(), before.len());
        assert_eq!(after.entries()[0], "A=1");
        assert_eq!(after.entries()[1], "FOO=baz");
        assert_eq!(after.entries()[2], "B=2");
        assert_eq!(after.lookup("FOO"), Some("baz"));
    }

    #[test]
    fn test_update_leaves_old_table_intact() {
        let before = table(&["FOO=bar"]);
        let _after = before.update("FOO", "baz").unwrap();
        assert_eq!(before.lookup("FOO"), Some("bar"));
        assert_eq!(before.entries(), &["FOO=bar".to_string()]);
    }

    #[test]
    fn test_update_rejects_bad_names() {
        let table = EnvTable::new();
        assert!(table.update("", "v").is_err());
        assert!(table.update("A=B", "v").is_err());
    }

    #[test]
    fn test_update_empty_value() {
        let table = EnvTable::new().update("EMPTY", "").unwrap();
        assert_eq!(table.lookup("EMPTY"), Some(""));
        assert_eq!(table.entries(), &["EMPTY=".to_string()]);
    }

    #[test]
    fn test_entry_format() {
        assert_eq!(EnvTable::entry("PATH", "/bin"), "PATH=/bin");
    }

    #[test]
    fn test_iter_pairs() {
        let table = table(&["A=1", "B=two=halves"]);
        let pairs: Vec<(&str, &str)> = table.iter().collect();
        assert_eq!(pairs, vec![("A", "1"), ("B", "two=halves")]);
    }

    #[test]
    fn test_from_process_sees_inherited_vars() {
        env::set_var("RILL_TABLE_TEST", "seen");
        let table = EnvTable::from_process();
        assert_eq!(table.lookup("RILL_TABLE_TEST"), Some("seen"));
        env::remove_var("RILL_TABLE_TEST");
    }
}
