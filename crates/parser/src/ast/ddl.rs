use {super::Identifier, common::pub_fields_struct, def::DataType};

#[derive(Debug, PartialEq, Clone, Copy)]
pub enum ShowTarget {
    Databases,
    Tables,
}

pub_fields_struct! {
    #[derive(Debug, PartialEq)]
    struct ColumnDefinition {
        name: Identifier,
        data_type: DataType,
    }

    #[derive(Debug, PartialEq)]
    struct CreateTableStmt {
        name: Identifier,
        columns: Vec<ColumnDefinition>,
    }
}
