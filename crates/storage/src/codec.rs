use {
    crate::error::{
        ArityMismatchSnafu, CodecSnafu, ColumnOutOfRangeSnafu, Error, InvalidLiteralSnafu,
        Result, TypeMismatchSnafu,
    },
    byteorder::{ReadBytesExt, WriteBytesExt, LE},
    def::{DataType, TableSchema, Value, VARCHAR_CAPACITY, VARCHAR_WIDTH},
    snafu::prelude::*,
    std::{
        io::{self, Cursor},
        str::FromStr,
    },
};

pub trait Encoder {
    type Item;
    type Error: std::error::Error + 'static;

    fn encode(&self, item: &Self::Item) -> std::result::Result<Vec<u8>, Self::Error>;
}

pub trait Decoder {
    type Item;
    type Error: std::error::Error + 'static;

    fn decode(&self, src: &[u8]) -> std::result::Result<Self::Item, Self::Error>;
}

/// Converts a literal lexeme to a value of the column type.
///
/// Int and Date take base-10 integers, Double takes any float, Varchar keeps
/// at most `VARCHAR_CAPACITY` bytes of the lexeme.
pub fn parse_literal(literal: &str, data_type: DataType) -> Result<Value> {
    Ok(match data_type {
        DataType::Int => Value::Int(parse_number(literal, data_type)?),
        DataType::Date => Value::Date(parse_number(literal, data_type)?),
        DataType::Double => Value::Double(parse_number(literal, data_type)?),
        DataType::Varchar => Value::Varchar(truncate(literal, VARCHAR_CAPACITY).to_string()),
    })
}

fn parse_number<T: FromStr>(literal: &str, data_type: DataType) -> Result<T> {
    literal.parse().ok().context(InvalidLiteralSnafu {
        literal,
        data_type,
    })
}

fn truncate(s: &str, max: usize) -> &str {
    if s.len() <= max {
        return s;
    }

    let mut end = max;
    while !s.is_char_boundary(end) {
        end -= 1;
    }

    &s[..end]
}

/// Fixed-width layout of one row: columns back to back in schema order.
#[derive(Debug, Clone, PartialEq)]
pub struct RowCodec {
    types: Vec<DataType>,
    offsets: Vec<usize>,
    width: usize,
}

impl RowCodec {
    pub fn new(types: Vec<DataType>) -> Self {
        let mut offsets = Vec::with_capacity(types.len());
        let mut width = 0;

        for ty in &types {
            offsets.push(width);
            width += ty.width();
        }

        Self {
            types,
            offsets,
            width,
        }
    }

    pub fn for_schema(schema: &TableSchema) -> Self {
        Self::new(schema.columns.iter().map(|col| col.data_type).collect())
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn column_count(&self) -> usize {
        self.types.len()
    }

    pub fn data_type(&self, index: usize) -> Result<DataType> {
        self.types.get(index).copied().context(ColumnOutOfRangeSnafu {
            index,
            columns: self.types.len(),
        })
    }

    /// Byte offset of a column inside a row.
    pub fn column_offset(&self, index: usize) -> Result<usize> {
        self.offsets.get(index).copied().context(ColumnOutOfRangeSnafu {
            index,
            columns: self.types.len(),
        })
    }

    /// Converts one literal per column, in column order.
    pub fn parse_row<S: AsRef<str>>(&self, literals: &[S]) -> Result<Vec<Value>> {
        ensure!(
            literals.len() == self.types.len(),
            ArityMismatchSnafu {
                expected: self.types.len(),
                got: literals.len(),
            }
        );

        literals
            .iter()
            .zip(&self.types)
            .map(|(literal, ty)| parse_literal(literal.as_ref(), *ty))
            .collect()
    }

    /// Decodes a single column from the bytes of that column alone.
    pub fn decode_column(&self, index: usize, src: &[u8]) -> Result<Value> {
        let ty = self.data_type(index)?;

        Cursor::new(src).read_value(ty).context(CodecSnafu)
    }
}

impl Encoder for RowCodec {
    type Item = Vec<Value>;
    type Error = Error;

    fn encode(&self, values: &Vec<Value>) -> Result<Vec<u8>> {
        ensure!(
            values.len() == self.types.len(),
            ArityMismatchSnafu {
                expected: self.types.len(),
                got: values.len(),
            }
        );

        let mut bytes = vec![0u8; self.width];
        let mut writer = Cursor::new(bytes.as_mut_slice());

        for (index, (value, ty)) in values.iter().zip(&self.types).enumerate() {
            ensure!(
                value.data_type() == *ty,
                TypeMismatchSnafu {
                    index,
                    expected: *ty,
                    got: value.data_type(),
                }
            );

            writer.write_value(value).context(CodecSnafu)?;
        }

        Ok(bytes)
    }
}

impl Decoder for RowCodec {
    type Item = Vec<Value>;
    type Error = Error;

    fn decode(&self, src: &[u8]) -> Result<Vec<Value>> {
        let mut reader = Cursor::new(src);

        self.types
            .iter()
            .map(|ty| reader.read_value(*ty).context(CodecSnafu))
            .collect()
    }
}

trait ReadValue: io::Read {
    fn read_value(&mut self, data_type: DataType) -> io::Result<Value> {
        Ok(match data_type {
            DataType::Int => Value::Int(self.read_i32::<LE>()?),
            DataType::Date => Value::Date(self.read_i32::<LE>()?),
            DataType::Double => Value::Double(self.read_f64::<LE>()?),
            DataType::Varchar => {
                let mut buf = [0; VARCHAR_WIDTH];
                self.read_exact(&mut buf)?;

                let len = buf.iter().position(|b| *b == 0).unwrap_or(VARCHAR_WIDTH);
                Value::Varchar(String::from_utf8_lossy(&buf[..len]).into_owned())
            }
        })
    }
}

impl<T> ReadValue for Cursor<T> where T: AsRef<[u8]> {}

trait WriteValue: io::Write {
    fn write_value(&mut self, value: &Value) -> io::Result<()> {
        match value {
            Value::Int(v) | Value::Date(v) => self.write_i32::<LE>(*v),
            Value::Double(v) => self.write_f64::<LE>(*v),
            Value::Varchar(s) => {
                let bytes = truncate(s, VARCHAR_CAPACITY).as_bytes();
                self.write_all(bytes)?;
                // NUL padding, at least one byte
                self.write_all(&[0; VARCHAR_WIDTH][bytes.len()..])
            }
        }
    }
}

impl WriteValue for Cursor<&mut [u8]> {}
