use {crate::DataType, std::fmt::Display};

/// A decoded column value.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Int(i32),
    Varchar(String),
    Double(f64),
    Date(i32),
}

impl Value {
    pub const fn data_type(&self) -> DataType {
        match self {
            Self::Int(_) => DataType::Int,
            Self::Varchar(_) => DataType::Varchar,
            Self::Double(_) => DataType::Double,
            Self::Date(_) => DataType::Date,
        }
    }
}

/// Doubles render with two fractional digits, which is also the text `=` compares against.
impl Display for Value {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Int(v) | Self::Date(v) => write!(f, "{}", v),
            Self::Varchar(s) => f.write_str(s),
            Self::Double(v) => write!(f, "{:.2}", v),
        }
    }
}
