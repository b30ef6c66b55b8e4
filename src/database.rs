use crate::models::{Entry, NewEntry};
use crate::utils::create_parent_dir_if_not_exists;
use rusqlite::{params, Connection};
use std::error::Error;
use std::path::Path;

/// Where executed commands are recorded.
pub trait Store {
    /// Writes a row and returns its id.
    fn record(&self, entry: &NewEntry) -> Result<i64, Box<dyn Error>>;

    /// All rows stamped with the given ISO year and week, oldest first.
    fn entries_in_week(&self, year: i32, week: u32) -> Result<Vec<Entry>, Box<dyn Error>>;
}

pub struct SqliteStore {
    conn: Connection,
}

impl SqliteStore {
    pub fn open(path: &Path) -> Result<Self, Box<dyn Error>> {
        create_parent_dir_if_not_exists(path)?;
        let conn = Connection::open(path)?;
        log::debug!("opened database {:?}", path);
        Self::with_connection(conn)
    }

    pub fn open_in_memory() -> Result<Self, Box<dyn Error>> {
        Self::with_connection(Connection::open_in_memory()?)
    }

    fn with_connection(conn: Connection) -> Result<Self, Box<dyn Error>> {
        conn.execute(
            "CREATE TABLE IF NOT EXISTS entry (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                kind TEXT NOT NULL,
                day TEXT,
                start_time TEXT,
                end_time TEXT,
                name TEXT,
                recorded_at TEXT NOT NULL,
                year INTEGER NOT NULL,
                week INTEGER NOT NULL
            )",
            [],
        )?;
        add_year_column_if_missing(&conn)?;
        Ok(Self { conn })
    }
}

// Tables created before the year was recorded get it added with 0, so old rows never show up.
fn add_year_column_if_missing(conn: &Connection) -> Result<(), Box<dyn Error>> {
    let mut stmt = conn.prepare("SELECT name FROM pragma_table_info('entry')")?;
    let columns = stmt
        .query_map([], |row| row.get::<_, String>(0))?
        .collect::<Result<Vec<String>, _>>()?;

    if !columns.iter().any(|c| c == "year") {
        log::debug!("adding year column to entry table");
        conn.execute(
            "ALTER TABLE entry ADD COLUMN year INTEGER NOT NULL DEFAULT 0",
            [],
        )?;
    }
    Ok(())
}

impl Store for SqliteStore {
    fn record(&self, entry: &NewEntry) -> Result<i64, Box<dyn Error>> {
        self.conn.execute(
            "INSERT INTO entry (kind, day, start_time, end_time, name, recorded_at, year, week)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8)",
            params![
                entry.kind,
                entry.day,
                entry.start,
                entry.end,
                entry.name,
                entry.recorded_at,
                entry.year,
                entry.week
            ],
        )?;
        let id = self.conn.last_insert_rowid();
        log::trace!("inserted {} entry {}", entry.kind, id);
        Ok(id)
    }

    fn entries_in_week(&self, year: i32, week: u32) -> Result<Vec<Entry>, Box<dyn Error>> {
        let mut stmt = self.conn.prepare(
            "SELECT id, kind, day, start_time, end_time, name, recorded_at, year, week
             FROM entry WHERE year = ?1 AND week = ?2 ORDER BY id",
        )?;
        let entry_iter = stmt.query_map(params![year, week], |row| {
            Ok(Entry {
                id: row.get(0)?,
                kind: row.get(1)?,
                day: row.get(2)?,
                start: row.get(3)?,
                end: row.get(4)?,
                name: row.get(5)?,
                recorded_at: row.get(6)?,
                year: row.get(7)?,
                week: row.get(8)?,
            })
        })?;
        let entries = entry_iter.collect::<Result<Vec<Entry>, _>>()?;
        Ok(entries)
    }
}
