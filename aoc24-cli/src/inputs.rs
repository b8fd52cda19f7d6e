//! Puzzle inputs read from a local directory tree

use crate::error::InputError;
use std::fs;
use std::path::PathBuf;

/// File-based store of puzzle inputs
///
/// Directory structure: `{base_dir}/{year}/day{day:02}.txt`. A single puzzle
/// can be pointed at an explicit file instead.
pub struct InputStore {
    base_dir: PathBuf,
    overrides: Vec<(u16, u8, PathBuf)>,
}

impl InputStore {
    pub fn new(base_dir: PathBuf) -> Self {
        Self {
            base_dir,
            overrides: Vec::new(),
        }
    }

    /// Read `year`/`day` from `path` instead of the directory tree
    pub fn with_override(mut self, year: u16, day: u8, path: PathBuf) -> Self {
        self.overrides.retain(|(y, d, _)| (*y, *d) != (year, day));
        self.overrides.push((year, day, path));
        self
    }

    /// Where the input for a specific year/day is read from
    pub fn input_path(&self, year: u16, day: u8) -> PathBuf {
        self.overrides
            .iter()
            .find(|(y, d, _)| (*y, *d) == (year, day))
            .map(|(_, _, path)| path.clone())
            .unwrap_or_else(|| {
                self.base_dir
                    .join(year.to_string())
                    .join(format!("day{:02}.txt", day))
            })
    }

    /// Check if an input file exists
    pub fn contains(&self, year: u16, day: u8) -> bool {
        self.input_path(year, day).is_file()
    }

    /// Read the input for a year/day
    pub fn get(&self, year: u16, day: u8) -> Result<String, InputError> {
        let path = self.input_path(year, day);
        if !path.is_file() {
            return Err(InputError::Missing { year, day, path });
        }
        fs::read_to_string(&path).map_err(|source| InputError::Read { path, source })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_input_path_format() {
        let temp = TempDir::new().unwrap();
        let store = InputStore::new(temp.path().to_path_buf());

        let path = store.input_path(2024, 6);
        assert!(path.starts_with(temp.path()));
        assert!(path.ends_with("2024/day06.txt"));

        let path = store.input_path(2023, 25);
        assert!(path.ends_with("2023/day25.txt"));
    }

    #[test]
    fn test_read_existing_and_missing() {
        let temp = TempDir::new().unwrap();
        let store = InputStore::new(temp.path().to_path_buf());

        assert!(!store.contains(2024, 16));
        assert!(matches!(
            store.get(2024, 16),
            Err(InputError::Missing { year: 2024, day: 16, .. })
        ));

        let maze = "#####\n#S.E#\n#####\n";
        fs::create_dir_all(temp.path().join("2024")).unwrap();
        fs::write(temp.path().join("2024/day16.txt"), maze).unwrap();

        assert!(store.contains(2024, 16));
        assert_eq!(store.get(2024, 16).unwrap(), maze);
    }

    #[test]
    fn test_override_takes_precedence() {
        let temp = TempDir::new().unwrap();
        let file = temp.path().join("lab.txt");
        fs::write(&file, "..^..\n").unwrap();

        let store = InputStore::new(temp.path().join("missing")).with_override(2024, 6, file.clone());
        assert_eq!(store.input_path(2024, 6), file);
        assert_eq!(store.get(2024, 6).unwrap(), "..^..\n");
        // Other days still use the directory tree
        assert!(!store.contains(2024, 8));
    }

    #[test]
    fn test_directory_in_place_of_file() {
        let temp = TempDir::new().unwrap();
        fs::create_dir_all(temp.path().join("2024/day10.txt")).unwrap();
        let store = InputStore::new(temp.path().to_path_buf());
        assert!(!store.contains(2024, 10));
        assert!(matches!(store.get(2024, 10), Err(InputError::Missing { .. })));
    }
}
