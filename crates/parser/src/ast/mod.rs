mod common;
mod ddl;
mod dml;
mod expr;

#[cfg(test)]
pub(crate) use self::common::identifier_from_str;
pub use self::{common::Identifier, ddl::*, dml::*, expr::*};

#[derive(Debug, PartialEq)]
pub enum Statement {
    CreateDatabase { name: Identifier },
    CreateTable(CreateTableStmt),
    DropDatabase { name: Identifier },
    DropTable { name: Identifier },
    Use { database: Identifier },
    Show(ShowTarget),
    Insert(InsertStmt),
    Select(SelectStmt),
}
