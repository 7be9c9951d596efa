use {
    crate::error::{NoSuchColumnSnafu, Result, StorageSnafu},
    def::{TableSchema, Value},
    parser::ast::{Comparator, Condition, LogicalOp, WhereClause},
    snafu::prelude::*,
    storage::TableFile,
};

/// A WHERE clause with its columns resolved to schema positions.
///
/// Conditions combine strictly left to right, AND and OR having the same
/// precedence.
#[derive(Debug)]
pub(crate) struct Predicate {
    first: BoundCondition,
    rest: Vec<(LogicalOp, BoundCondition)>,
}

#[derive(Debug)]
struct BoundCondition {
    column: usize,
    comparator: Comparator,
    literal: String,
}

impl Predicate {
    pub(crate) fn bind(schema: &TableSchema, clause: WhereClause) -> Result<Self> {
        let WhereClause { first, rest } = clause;

        Ok(Self {
            first: BoundCondition::bind(schema, first)?,
            rest: rest
                .into_iter()
                .map(|(op, cond)| Ok((op, BoundCondition::bind(schema, cond)?)))
                .collect::<Result<_>>()?,
        })
    }

    /// Reads only the compared columns of the row. Once the running result
    /// decides an operator, its right side is not read.
    pub(crate) fn evaluate(&self, table: &mut TableFile, row: u32) -> Result<bool> {
        let mut result = self.first.evaluate(table, row)?;

        for (op, cond) in &self.rest {
            result = match op {
                LogicalOp::And => result && cond.evaluate(table, row)?,
                LogicalOp::Or => result || cond.evaluate(table, row)?,
            };
        }

        Ok(result)
    }
}

impl BoundCondition {
    fn bind(schema: &TableSchema, cond: Condition) -> Result<Self> {
        let Condition {
            column,
            comparator,
            value,
        } = cond;

        let index = schema
            .column_index(column.as_str())
            .context(NoSuchColumnSnafu {
                column: column.as_str(),
                table: &schema.name,
            })?;

        Ok(Self {
            column: index,
            comparator,
            literal: value.into_lexeme(),
        })
    }

    fn evaluate(&self, table: &mut TableFile, row: u32) -> Result<bool> {
        let value = table.read_column(row, self.column).context(StorageSnafu)?;

        Ok(compare(&value, self.comparator, &self.literal))
    }
}

/// `=` compares the rendered value with the literal text, the ordering
/// comparators compare the leading integers of both.
fn compare(value: &Value, comparator: Comparator, literal: &str) -> bool {
    let text = value.to_string();

    match comparator {
        Comparator::Equal => text == literal,
        Comparator::GreaterThan => atoi(&text) > atoi(literal),
        Comparator::LessThan => atoi(&text) < atoi(literal),
        Comparator::GreaterThanOrEqual => atoi(&text) >= atoi(literal),
        Comparator::LessThanOrEqual => atoi(&text) <= atoi(literal),
    }
}

/// Leading whitespace, an optional sign, then as many digits as follow.
/// Anything without digits is 0.
fn atoi(s: &str) -> i64 {
    let s = s.trim_start();
    let (negative, digits) = match s.as_bytes().first() {
        Some(b'-') => (true, &s[1..]),
        Some(b'+') => (false, &s[1..]),
        _ => (false, s),
    };

    let n = digits
        .bytes()
        .take_while(u8::is_ascii_digit)
        .fold(0i64, |acc, d| {
            acc.saturating_mul(10).saturating_add(i64::from(d - b'0'))
        });

    if negative {
        -n
    } else {
        n
    }
}
