//! In-Memory Table Client
//!
//! Keeps tables in process. Stands in for the hosted backend in tests and
//! local demos; ids are assigned on insert like an identity column.

use std::collections::HashMap;

use async_trait::async_trait;
use serde_json::Value;
use tokio::sync::Mutex;

use super::traits::{Filter, Row, TableClient};
use crate::domain::DomainResult;

#[derive(Debug, Default)]
struct MemoryTable {
    next_id: i64,
    rows: Vec<Row>,
}

impl MemoryTable {
    /// Store a row, assigning an id when it has none.
    fn push(&mut self, mut row: Row) -> Row {
        match row.get("id").and_then(Value::as_i64) {
            Some(id) => self.next_id = self.next_id.max(id),
            None => {
                self.next_id += 1;
                row.insert("id".to_string(), Value::from(self.next_id));
            }
        }
        self.rows.push(row.clone());
        row
    }
}

/// In-process implementation of [`TableClient`]
#[derive(Debug, Default)]
pub struct MemoryTableClient {
    tables: Mutex<HashMap<String, MemoryTable>>,
}

impl MemoryTableClient {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a client pre-filled with rows, keyed by table name
    pub fn with_tables(tables: HashMap<String, Vec<Row>>) -> Self {
        let mut stored = HashMap::new();
        for (name, rows) in tables {
            let table: &mut MemoryTable = stored.entry(name).or_default();
            for row in rows {
                table.push(row);
            }
        }
        Self {
            tables: Mutex::new(stored),
        }
    }

    /// Add rows to a table
    pub async fn seed(&self, table: &str, rows: Vec<Row>) {
        let mut tables = self.tables.lock().await;
        let stored = tables.entry(table.to_string()).or_default();
        for row in rows {
            stored.push(row);
        }
    }

    /// Snapshot of every row in a table
    pub async fn rows(&self, table: &str) -> Vec<Row> {
        let tables = self.tables.lock().await;
        tables.get(table).map(|t| t.rows.clone()).unwrap_or_default()
    }
}

/// Keep only the selected columns; `*` keeps all
fn project(row: &Row, columns: &str) -> Row {
    if columns.trim() == "*" {
        return row.clone();
    }
    columns
        .split(',')
        .map(str::trim)
        .filter_map(|column| row.get(column).map(|value| (column.to_string(), value.clone())))
        .collect()
}

#[async_trait]
impl TableClient for MemoryTableClient {
    async fn select(&self, table: &str, columns: &str, filter: &Filter) -> DomainResult<Vec<Row>> {
        let tables = self.tables.lock().await;
        let rows = tables
            .get(table)
            .map(|t| {
                t.rows
                    .iter()
                    .filter(|row| filter.matches(row))
                    .map(|row| project(row, columns))
                    .collect()
            })
            .unwrap_or_default();
        Ok(rows)
    }

    async fn insert(&self, table: &str, row: Row) -> DomainResult<Vec<Row>> {
        let mut tables = self.tables.lock().await;
        let stored = tables.entry(table.to_string()).or_default().push(row);
        Ok(vec![stored])
    }

    async fn update(&self, table: &str, filter: &Filter, patch: Row) -> DomainResult<u64> {
        let mut tables = self.tables.lock().await;
        let mut affected = 0;
        if let Some(t) = tables.get_mut(table) {
            for row in t.rows.iter_mut().filter(|row| filter.matches(row)) {
                for (column, value) in &patch {
                    row.insert(column.clone(), value.clone());
                }
                affected += 1;
            }
        }
        Ok(affected)
    }

    async fn delete(&self, table: &str, filter: &Filter) -> DomainResult<u64> {
        let mut tables = self.tables.lock().await;
        let Some(t) = tables.get_mut(table) else {
            return Ok(0);
        };
        let before = t.rows.len();
        t.rows.retain(|row| !filter.matches(row));
        Ok((before - t.rows.len()) as u64)
    }
}
