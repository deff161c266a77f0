//! Create a small demo SQLite database
//!
//! Handy for trying the site without the full dataset. Entries are a subset
//! of real national monuments.

use std::path::Path;

use rusqlite::{params, Connection, Result};

struct DemoRow {
    name: &'static str,
    agency: &'static str,
    president: &'static str,
    states: &'static str,
    date: &'static str,
    year: i32,
    acres: f64,
}

const DEMO_ROWS: &[DemoRow] = &[
    DemoRow {
        name: "Devils Tower",
        agency: "NPS",
        president: "Theodore Roosevelt",
        states: "Wyoming",
        date: "9/24",
        year: 1906,
        acres: 1347.0,
    },
    DemoRow {
        name: "El Morro",
        agency: "NPS",
        president: "Theodore Roosevelt",
        states: "New Mexico",
        date: "12/8",
        year: 1906,
        acres: 1278.7,
    },
    DemoRow {
        name: "Grand Canyon",
        agency: "NPS",
        president: "Theodore Roosevelt",
        states: "Arizona",
        date: "1/11",
        year: 1908,
        acres: 808120.0,
    },
    DemoRow {
        name: "Katmai",
        agency: "NPS",
        president: "Woodrow Wilson",
        states: "Alaska",
        date: "9/24",
        year: 1918,
        acres: 1088400.0,
    },
    DemoRow {
        name: "Hovenweep",
        agency: "NPS",
        president: "Warren Harding",
        states: "Colorado, Utah",
        date: "3/2",
        year: 1923,
        acres: 785.0,
    },
    DemoRow {
        name: "Badlands",
        agency: "NPS",
        president: "Authorized by Congress",
        states: "South Dakota",
        date: "3/4",
        year: 1929,
        acres: 242756.0,
    },
    DemoRow {
        name: "Aniakchak",
        agency: "NPS",
        president: "Jimmy Carter",
        states: "Alaska",
        date: "12/1",
        year: 1978,
        acres: 137176.0,
    },
];

/// Create the table and insert the demo rows
pub fn create_demo_database(path: &Path, table: &str) -> Result<()> {
    let conn = Connection::open(path)?;
    conn.execute_batch(&format!(
        "CREATE TABLE IF NOT EXISTS {table} (
            name TEXT NOT NULL,
            agency TEXT,
            president TEXT,
            states TEXT,
            date TEXT,
            year INTEGER,
            acres REAL
        );"
    ))?;
    let mut stmt = conn.prepare(&format!(
        "INSERT INTO {table} (name, agency, president, states, date, year, acres)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)"
    ))?;
    for row in DEMO_ROWS {
        stmt.execute(params![
            row.name,
            row.agency,
            row.president,
            row.states,
            row.date,
            row.year,
            row.acres
        ])?;
    }
    Ok(())
}
