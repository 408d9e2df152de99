//! Static data model for the two-table schema.
//!
//! The source system declared its tables and relations dynamically on model
//! classes; here the same facts are plain data. The schema manager walks
//! `tables()` in order to create DDL, and the query gateway derives its join
//! clause from `relation()`. Identifiers are always quoted in generated SQL
//! because `primary` is an SQL keyword.

/// Column types used by the model.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColumnType {
    Integer,
    Text,
}

impl ColumnType {
    fn sql(self) -> &'static str {
        match self {
            ColumnType::Integer => "INTEGER",
            ColumnType::Text => "TEXT",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnDef {
    pub name: &'static str,
    pub column_type: ColumnType,
    /// Auto-incrementing surrogate primary key.
    pub auto_primary_key: bool,
    /// `(table, column)` this column references, if it is a foreign key.
    pub references: Option<(&'static str, &'static str)>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableDef {
    pub name: &'static str,
    pub columns: &'static [ColumnDef],
}

/// Cardinality of a declared relation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RelationKind {
    /// At most one related row per owning row. The foreign key alone would
    /// permit one-to-many; the seed workflow never creates a second row.
    HasOne,
}

/// A relation from an owning table's key column to the foreign-key column
/// on the related side.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RelationDef {
    pub kind: RelationKind,
    pub from_table: &'static str,
    pub from_column: &'static str,
    pub to_table: &'static str,
    pub to_column: &'static str,
}

pub const PRIMARY_TABLE: &str = "primary";
pub const RELATED_TABLE: &str = "related";

const PRIMARY_COLUMNS: &[ColumnDef] = &[
    ColumnDef {
        name: "id",
        column_type: ColumnType::Integer,
        auto_primary_key: true,
        references: None,
    },
    ColumnDef {
        name: "primary_prop",
        column_type: ColumnType::Text,
        auto_primary_key: false,
        references: None,
    },
];

const RELATED_COLUMNS: &[ColumnDef] = &[
    ColumnDef {
        name: "id",
        column_type: ColumnType::Integer,
        auto_primary_key: true,
        references: None,
    },
    ColumnDef {
        name: "primary_id",
        column_type: ColumnType::Integer,
        auto_primary_key: false,
        references: Some((PRIMARY_TABLE, "id")),
    },
    ColumnDef {
        name: "related_prop",
        column_type: ColumnType::Text,
        auto_primary_key: false,
        references: None,
    },
];

/// The model's tables, in creation order. `"primary"` comes first so that
/// `related`'s foreign key reference resolves when its DDL runs.
pub fn tables() -> &'static [TableDef] {
    const TABLES: &[TableDef] = &[
        TableDef {
            name: PRIMARY_TABLE,
            columns: PRIMARY_COLUMNS,
        },
        TableDef {
            name: RELATED_TABLE,
            columns: RELATED_COLUMNS,
        },
    ];
    TABLES
}

/// The single declared relation: each primary row has one related row.
pub fn relation() -> RelationDef {
    RelationDef {
        kind: RelationKind::HasOne,
        from_table: PRIMARY_TABLE,
        from_column: "id",
        to_table: RELATED_TABLE,
        to_column: "primary_id",
    }
}

/// Quote an identifier for SQLite.
pub fn quote_ident(name: &str) -> String {
    format!("\"{}\"", name)
}

impl TableDef {
    /// Render the CREATE TABLE statement for this table.
    pub fn create_table_sql(&self) -> String {
        let columns: Vec<String> = self
            .columns
            .iter()
            .map(|col| {
                let mut part = format!("{} {}", quote_ident(col.name), col.column_type.sql());
                if col.auto_primary_key {
                    part.push_str(" PRIMARY KEY AUTOINCREMENT");
                }
                if let Some((table, column)) = col.references {
                    part.push_str(&format!(
                        " REFERENCES {}({})",
                        quote_ident(table),
                        quote_ident(column)
                    ));
                }
                part
            })
            .collect();

        format!(
            "CREATE TABLE {} ({})",
            quote_ident(self.name),
            columns.join(", ")
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_creation_order_primary_first() {
        let names: Vec<&str> = tables().iter().map(|t| t.name).collect();
        assert_eq!(names, vec![PRIMARY_TABLE, RELATED_TABLE]);
    }

    #[test]
    fn test_primary_table_ddl() {
        let sql = tables()[0].create_table_sql();
        assert_eq!(
            sql,
            "CREATE TABLE \"primary\" (\"id\" INTEGER PRIMARY KEY AUTOINCREMENT, \"primary_prop\" TEXT)"
        );
    }

    #[test]
    fn test_related_table_ddl_declares_foreign_key() {
        let sql = tables()[1].create_table_sql();
        assert!(sql.starts_with("CREATE TABLE \"related\""));
        assert!(sql.contains("\"primary_id\" INTEGER REFERENCES \"primary\"(\"id\")"));
    }

    #[test]
    fn test_relation_links_primary_to_related() {
        let rel = relation();
        assert_eq!(rel.kind, RelationKind::HasOne);
        assert_eq!((rel.from_table, rel.from_column), (PRIMARY_TABLE, "id"));
        assert_eq!((rel.to_table, rel.to_column), (RELATED_TABLE, "primary_id"));
    }
}
