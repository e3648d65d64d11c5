//! Database row models for tables without a domain counterpart.

#[derive(Debug, Clone)]
pub struct DbLogRow {
    pub id: i64,
    pub date: String,
    pub operation: String,
    pub target: String,
    pub message: String,
}
