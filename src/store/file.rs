//! Durable roster file access.
//!
//! The roster is one CSV file with header `id,name,email,department`. The
//! store reads and writes the whole table per operation: at this scale the
//! write amplification is irrelevant and "replace the entire file" is a
//! single, easy-to-reason-about consistency boundary.
//!
//! Replacement is atomic: serialize to a temp file in the same directory,
//! fsync, rename over the target, fsync the directory. A reader that opens
//! the file between two mutations never observes a partially written table.

use std::fs::{self, File, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};

use super::errors::{StoreError, StoreResult};
use super::table::{Employee, Table};

const HEADER: [&str; 4] = ["id", "name", "email", "department"];

/// Whole-table reader/writer for the roster file.
///
/// Sole authority on durable state; all file access in the crate goes
/// through `load_all` and `save_all`.
pub struct RosterStore {
    path: PathBuf,
}

impl RosterStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read the backing file into a table.
    ///
    /// A missing file is created empty (header only) and yields an empty
    /// table. A file that exists but does not parse fails with
    /// `StoreError::Malformed`; data is never silently dropped.
    pub fn load_all(&self) -> StoreResult<Table> {
        if !self.path.exists() {
            tracing::info!(path = %self.path.display(), "roster file absent, creating empty");
            let empty = Table::new();
            self.save_all(&empty)?;
            return Ok(empty);
        }

        let file = File::open(&self.path).map_err(|e| StoreError::io(&self.path, e))?;
        let mut reader = csv::ReaderBuilder::new().has_headers(true).from_reader(file);

        self.check_header(&mut reader)?;

        let mut rows = Vec::new();
        for (i, record) in reader.records().enumerate() {
            // CSV line numbers: header is line 1, first data row is line 2
            let line = i + 2;
            let record = record.map_err(|e| {
                StoreError::malformed(&self.path, format!("line {}: {}", line, e))
            })?;
            rows.push(self.parse_row(&record, line)?);
        }

        Table::from_rows(rows).map_err(|reason| StoreError::malformed(&self.path, reason))
    }

    /// Serialize the full table and atomically replace the file contents.
    ///
    /// On failure the previous file contents are intact; callers must not
    /// assume partial success.
    pub fn save_all(&self, table: &Table) -> StoreResult<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                fs::create_dir_all(parent).map_err(|e| StoreError::io(parent, e))?;
            }
        }

        let bytes = self.serialize(table)?;
        let temp_path = self.path.with_extension("csv.tmp");

        let mut file = OpenOptions::new()
            .write(true)
            .create(true)
            .truncate(true)
            .open(&temp_path)
            .map_err(|e| StoreError::io(&temp_path, e))?;
        file.write_all(&bytes)
            .map_err(|e| StoreError::io(&temp_path, e))?;
        file.sync_all().map_err(|e| StoreError::io(&temp_path, e))?;

        fs::rename(&temp_path, &self.path).map_err(|e| StoreError::io(&self.path, e))?;

        // fsync the directory so the rename itself is durable
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                if let Ok(dir) = File::open(parent) {
                    let _ = dir.sync_all();
                }
            }
        }

        Ok(())
    }

    fn serialize(&self, table: &Table) -> StoreResult<Vec<u8>> {
        let mut writer = csv::Writer::from_writer(Vec::new());
        writer
            .write_record(HEADER)
            .map_err(|e| StoreError::malformed(&self.path, e.to_string()))?;
        for employee in table.rows() {
            writer
                .write_record([
                    employee.id.to_string().as_str(),
                    &employee.name,
                    &employee.email,
                    &employee.department,
                ])
                .map_err(|e| StoreError::malformed(&self.path, e.to_string()))?;
        }
        writer
            .into_inner()
            .map_err(|e| StoreError::malformed(&self.path, e.to_string()))
    }

    fn check_header(&self, reader: &mut csv::Reader<File>) -> StoreResult<()> {
        let headers = reader
            .headers()
            .map_err(|e| StoreError::malformed(&self.path, format!("unreadable header: {}", e)))?;
        if headers.iter().ne(HEADER) {
            return Err(StoreError::malformed(
                &self.path,
                format!("unexpected header {:?}, want {:?}", headers, HEADER),
            ));
        }
        Ok(())
    }

    fn parse_row(&self, record: &csv::StringRecord, line: usize) -> StoreResult<Employee> {
        if record.len() != HEADER.len() {
            return Err(StoreError::malformed(
                &self.path,
                format!("line {}: expected {} columns, got {}", line, HEADER.len(), record.len()),
            ));
        }
        let id: u64 = record[0].trim().parse().map_err(|_| {
            StoreError::malformed(
                &self.path,
                format!("line {}: id {:?} is not a positive integer", line, &record[0]),
            )
        })?;
        if id == 0 {
            return Err(StoreError::malformed(
                &self.path,
                format!("line {}: id must be positive", line),
            ));
        }
        // id + 1 must stay representable, or the next assignment overflows
        if id == u64::MAX {
            return Err(StoreError::malformed(
                &self.path,
                format!("line {}: id {} is out of range", line, id),
            ));
        }
        Ok(Employee {
            id,
            name: record[1].to_string(),
            email: record[2].to_string(),
            department: record[3].to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn store_in(dir: &TempDir) -> RosterStore {
        RosterStore::new(dir.path().join("employees.csv"))
    }

    #[test]
    fn test_load_creates_missing_file_with_header() {
        let dir = TempDir::new().unwrap();
        let store = store_in(&dir);

        let table = store.load_all().unwrap();
        assert!(table.is_empty());

        let contents = fs::read_to_string(store.path()).unwrap();
        assert_eq!(contents.lines().next(), Some("id,name,email,department"));
    }

    #[test]
    fn test_malformed_id_fails_load() {
        let dir = TempDir::new().unwrap();
        let store = store_in(&dir);
        fs::write(
            store.path(),
            "id,name,email,department\nnot-a-number,Ann,ann@x.com,Eng\n",
        )
        .unwrap();

        let err = store.load_all().unwrap_err();
        assert!(matches!(err, StoreError::Malformed { .. }));
        assert!(err.to_string().contains("line 2"));
    }

    #[test]
    fn test_id_at_u64_max_fails_load() {
        let dir = TempDir::new().unwrap();
        let store = store_in(&dir);
        fs::write(
            store.path(),
            format!("id,name,email,department\n{},Ann,ann@x.com,Eng\n", u64::MAX),
        )
        .unwrap();

        // a table holding u64::MAX would make the next id assignment
        // overflow, so the row is rejected on read
        let err = store.load_all().unwrap_err();
        assert!(matches!(err, StoreError::Malformed { .. }));
        assert!(err.to_string().contains("out of range"));
    }

    #[test]
    fn test_wrong_header_fails_load() {
        let dir = TempDir::new().unwrap();
        let store = store_in(&dir);
        fs::write(store.path(), "id,fullname,email,department\n").unwrap();

        let err = store.load_all().unwrap_err();
        assert!(matches!(err, StoreError::Malformed { .. }));
    }

    #[test]
    fn test_duplicate_ids_on_disk_fail_load() {
        let dir = TempDir::new().unwrap();
        let store = store_in(&dir);
        fs::write(
            store.path(),
            "id,name,email,department\n1,Ann,ann@x.com,Eng\n1,Bob,bob@x.com,Ops\n",
        )
        .unwrap();

        let err = store.load_all().unwrap_err();
        assert!(err.to_string().contains("duplicate id"));
    }

    #[test]
    fn test_save_then_load_round_trips() {
        let dir = TempDir::new().unwrap();
        let store = store_in(&dir);

        let mut table = Table::new();
        table.push(Employee {
            id: 1,
            name: "Ann".to_string(),
            email: "ann@x.com".to_string(),
            department: "Eng".to_string(),
        });
        table.push(Employee {
            id: 2,
            name: "Bob, Jr.".to_string(), // comma forces CSV quoting
            email: "bob@x.com".to_string(),
            department: "Ops".to_string(),
        });
        store.save_all(&table).unwrap();

        assert_eq!(store.load_all().unwrap(), table);
    }

    #[test]
    fn test_save_load_save_is_byte_stable() {
        let dir = TempDir::new().unwrap();
        let store = store_in(&dir);

        let mut table = Table::new();
        table.push(Employee {
            id: 5,
            name: "Ann".to_string(),
            email: "Ann@X.com".to_string(),
            department: "Eng".to_string(),
        });
        store.save_all(&table).unwrap();
        let first = fs::read(store.path()).unwrap();

        let reloaded = store.load_all().unwrap();
        store.save_all(&reloaded).unwrap();
        let second = fs::read(store.path()).unwrap();

        assert_eq!(first, second);
    }

    #[test]
    fn test_save_leaves_no_temp_file() {
        let dir = TempDir::new().unwrap();
        let store = store_in(&dir);
        store.save_all(&Table::new()).unwrap();

        let names: Vec<String> = fs::read_dir(dir.path())
            .unwrap()
            .map(|e| e.unwrap().file_name().to_string_lossy().into_owned())
            .collect();
        assert_eq!(names, vec!["employees.csv".to_string()]);
    }
}
