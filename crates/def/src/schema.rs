use {crate::DataType, common::pub_fields_struct};

pub_fields_struct! {
    #[derive(Debug, Clone, PartialEq)]
    struct ColumnDef {
        name: String,
        data_type: DataType,
    }

    /// Columns are kept in on-disk order.
    #[derive(Debug, Clone, PartialEq)]
    struct TableSchema {
        name: String,
        columns: Vec<ColumnDef>,
    }
}

impl ColumnDef {
    pub fn new(name: impl Into<String>, data_type: DataType) -> Self {
        Self {
            name: name.into(),
            data_type,
        }
    }
}

impl TableSchema {
    pub fn new(name: impl Into<String>, columns: Vec<ColumnDef>) -> Self {
        Self {
            name: name.into(),
            columns,
        }
    }

    pub fn row_width(&self) -> usize {
        self.columns.iter().map(|col| col.data_type.width()).sum()
    }

    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.columns.iter().position(|col| col.name == name)
    }

    pub fn column_names(&self) -> impl Iterator<Item = &str> {
        self.columns.iter().map(|col| col.name.as_str())
    }
}
