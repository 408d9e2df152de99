use serde::Serialize;

/// A row of the `"primary"` table.
///
/// `id` is assigned by the database and is never reused or mutated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PrimaryRecord {
    pub id: i64,
    pub primary_prop: String,
}

/// A row of the `related` table. `primary_id` references the primary row
/// created in the same seed step.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RelatedRecord {
    pub id: i64,
    pub primary_id: i64,
    pub related_prop: String,
}

/// One primary row merged with its paired related row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct JoinedRow {
    pub primary_id: i64,
    pub primary_prop: String,
    pub related_id: i64,
    pub related_prop: String,
}
