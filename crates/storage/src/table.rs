use {
    crate::{
        codec::{Decoder, Encoder, RowCodec},
        error::{IoSnafu, Result, RowOutOfRangeSnafu},
    },
    byteorder::{ReadBytesExt, WriteBytesExt, LE},
    def::{TableSchema, Value},
    snafu::prelude::*,
    std::{
        fs::{File, OpenOptions},
        io::{Read, Seek, SeekFrom, Write},
        ops::Range,
        path::{Path, PathBuf},
    },
    tracing::debug,
};

/// Bytes taken by the row count at the start of a table file.
pub const HEADER_SIZE: u64 = 4;

/// A `<table>.table` file: a little-endian `u32` row count followed by that
/// many fixed-width rows.
#[derive(Debug)]
pub struct TableFile {
    path: PathBuf,
    file: File,
    codec: RowCodec,
    row_count: u32,
}

impl TableFile {
    /// Creates an empty table file, truncating any file left at `path`.
    pub fn create(path: impl AsRef<Path>, schema: &TableSchema) -> Result<Self> {
        let path = path.as_ref().to_path_buf();
        let mut file = OpenOptions::new()
            .read(true)
            .write(true)
            .create(true)
            .truncate(true)
            .open(&path)
            .context(IoSnafu { path: &path })?;

        file.write_u32::<LE>(0).context(IoSnafu { path: &path })?;

        Ok(Self {
            path,
            file,
            codec: RowCodec::for_schema(schema),
            row_count: 0,
        })
    }

    pub fn open(path: impl AsRef<Path>, schema: &TableSchema) -> Result<Self> {
        let path = path.as_ref().to_path_buf();
        let mut file = OpenOptions::new()
            .read(true)
            .write(true)
            .open(&path)
            .context(IoSnafu { path: &path })?;

        let row_count = file.read_u32::<LE>().context(IoSnafu { path: &path })?;

        Ok(Self {
            path,
            file,
            codec: RowCodec::for_schema(schema),
            row_count,
        })
    }

    pub fn row_count(&self) -> u32 {
        self.row_count
    }

    pub fn codec(&self) -> &RowCodec {
        &self.codec
    }

    fn row_offset(&self, index: u32) -> u64 {
        HEADER_SIZE + index as u64 * self.codec.width() as u64
    }

    /// Writes the row after the last counted one, then bumps the header.
    /// Nothing is written when the values do not fit the schema.
    pub fn append_row(&mut self, values: &Vec<Value>) -> Result<()> {
        let bytes = self.codec.encode(values)?;
        let offset = self.row_offset(self.row_count);
        let row_count = self.row_count + 1;

        let path = &self.path;
        self.file
            .seek(SeekFrom::Start(offset))
            .and_then(|_| self.file.write_all(&bytes))
            .and_then(|_| self.file.seek(SeekFrom::Start(0)))
            .and_then(|_| self.file.write_u32::<LE>(row_count))
            .context(IoSnafu { path })?;

        self.row_count = row_count;
        debug!(path = %self.path.display(), row_count, "appended row");

        Ok(())
    }

    fn check_row(&self, index: u32) -> Result<()> {
        ensure!(
            index < self.row_count,
            RowOutOfRangeSnafu {
                index,
                row_count: self.row_count,
            }
        );

        Ok(())
    }

    fn read_at(&mut self, offset: u64, len: usize) -> Result<Vec<u8>> {
        let mut buf = vec![0; len];

        let path = &self.path;
        self.file
            .seek(SeekFrom::Start(offset))
            .and_then(|_| self.file.read_exact(&mut buf))
            .context(IoSnafu { path })?;

        Ok(buf)
    }

    pub fn read_row(&mut self, index: u32) -> Result<Vec<Value>> {
        self.check_row(index)?;

        let bytes = self.read_at(self.row_offset(index), self.codec.width())?;

        self.codec.decode(&bytes)
    }

    /// Reads only the bytes of one column of a row.
    pub fn read_column(&mut self, index: u32, column: usize) -> Result<Value> {
        self.check_row(index)?;

        let offset = self.row_offset(index) + self.codec.column_offset(column)? as u64;
        let width = self.codec.data_type(column)?.width();
        let bytes = self.read_at(offset, width)?;

        self.codec.decode_column(column, &bytes)
    }

    /// Indices of the rows counted when the file was opened.
    pub fn scan(&self) -> Range<u32> {
        0..self.row_count
    }
}
