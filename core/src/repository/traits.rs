//! Repository Layer - Core Traits
//!
//! Defines the abstract interfaces for data access.
//! `TableClient` is the only boundary to the hosted backend; implementations
//! can talk HTTP, keep rows in memory, etc.

use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::{Map, Value};

use crate::domain::{DomainError, DomainResult, Entity};

/// One table row as a JSON object
pub type Row = Map<String, Value>;

/// Conjunction of column equality predicates
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Filter {
    predicates: Vec<(String, String)>,
}

impl Filter {
    /// Matches every row
    pub fn all() -> Self {
        Self::default()
    }

    /// Matches rows whose `column` equals `value`
    pub fn eq(column: impl Into<String>, value: impl ToString) -> Self {
        Self::all().and_eq(column, value)
    }

    pub fn and_eq(mut self, column: impl Into<String>, value: impl ToString) -> Self {
        self.predicates.push((column.into(), value.to_string()));
        self
    }

    pub fn predicates(&self) -> &[(String, String)] {
        &self.predicates
    }

    /// Columns are compared by their text form, the way the table API does.
    pub fn matches(&self, row: &Row) -> bool {
        self.predicates.iter().all(|(column, expected)| {
            row.get(column)
                .map(|value| column_text(value) == *expected)
                .unwrap_or(false)
        })
    }
}

/// Text form of a column value
pub fn column_text(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Null => "null".to_string(),
        other => other.to_string(),
    }
}

/// Table operations offered by the hosted backend
///
/// All operations are async to support various backends.
#[async_trait]
pub trait TableClient: Send + Sync {
    /// Read rows matching `filter`. `columns` is `*` or a comma separated list.
    async fn select(&self, table: &str, columns: &str, filter: &Filter) -> DomainResult<Vec<Row>>;

    /// Insert one row, returning the stored representation
    async fn insert(&self, table: &str, row: Row) -> DomainResult<Vec<Row>>;

    /// Overwrite the fields in `patch` on matching rows; returns rows affected
    async fn update(&self, table: &str, filter: &Filter, patch: Row) -> DomainResult<u64>;

    /// Delete matching rows; returns rows affected
    async fn delete(&self, table: &str, filter: &Filter) -> DomainResult<u64>;
}

/// Read access by id, shared by every entity repository
#[async_trait]
pub trait Repository<T>: Send + Sync
where
    T: Entity + DeserializeOwned + 'static,
{
    /// Client used to reach the entity's table
    fn client(&self) -> &dyn TableClient;

    /// Find entity by ID
    ///
    /// More than one matching row is reported as `AmbiguousResult`.
    async fn find_by_id(&self, id: T::Id) -> DomainResult<Option<T>> {
        let rows = self.client().select(T::TABLE, "*", &Filter::eq("id", id)).await?;
        single_row(T::TABLE, &id.to_string(), rows)?
            .map(decode_row::<T>)
            .transpose()
    }
}

/// Encode a payload as a row object
pub fn to_row<S: Serialize>(value: &S) -> DomainResult<Row> {
    match serde_json::to_value(value) {
        Ok(Value::Object(row)) => Ok(row),
        Ok(other) => Err(DomainError::Validation(format!("payload is not an object: {other}"))),
        Err(e) => Err(DomainError::Validation(e.to_string())),
    }
}

/// Decode one row into a domain type
pub fn decode_row<T: DeserializeOwned>(row: Row) -> DomainResult<T> {
    serde_json::from_value(Value::Object(row)).map_err(|e| DomainError::InvalidRow(e.to_string()))
}

/// Decode every row, failing on the first bad one
pub fn decode_rows<T: DeserializeOwned>(rows: Vec<Row>) -> DomainResult<Vec<T>> {
    rows.into_iter().map(decode_row).collect()
}

/// Zero or one row; more is an error
pub fn single_row(table: &str, key: &str, rows: Vec<Row>) -> DomainResult<Option<Row>> {
    let count = rows.len();
    let mut rows = rows.into_iter();
    match (rows.next(), count) {
        (None, _) => Ok(None),
        (Some(row), 1) => Ok(Some(row)),
        (Some(_), n) => Err(DomainError::AmbiguousResult(format!(
            "{n} rows in {table} match id {key}"
        ))),
    }
}
