mod data_type;
mod schema;
mod value;

pub use {
    data_type::{DataType, Error, Result, VARCHAR_CAPACITY, VARCHAR_WIDTH},
    schema::{ColumnDef, TableSchema},
    value::Value,
};
