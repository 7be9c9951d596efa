use {common::pub_fields_struct, def::Value};

pub_fields_struct! {
    /// Rows in file order, each holding the projected columns in schema order.
    #[derive(Debug, Clone, PartialEq)]
    struct ResultSet {
        columns: Vec<String>,
        rows: Vec<Vec<Value>>,
    }
}

/// What a successfully executed statement produced.
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    DatabaseCreated { name: String },
    TableCreated { name: String },
    DatabaseChanged { name: String },
    DatabaseDropped { name: String },
    TableDropped { name: String },
    Listing { title: String, names: Vec<String> },
    Inserted { table: String, rows: usize },
    Selected(ResultSet),
}

impl Outcome {
    /// Rows affected or emitted.
    pub fn rows(&self) -> usize {
        match self {
            Self::Listing { names, .. } => names.len(),
            Self::Inserted { rows, .. } => *rows,
            Self::Selected(result) => result.rows.len(),
            _ => 0,
        }
    }
}
