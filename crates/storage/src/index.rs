use {
    crate::error::{IoSnafu, Result},
    byteorder::{WriteBytesExt, LE},
    snafu::prelude::*,
    std::{fs::File, path::Path},
};

pub const INDEX_DEGREE: u32 = 3;

/// Header of a `<table>.idx` file. The index has no nodes yet; only the
/// header is ever written.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IndexFile {
    pub degree: u32,
    pub node_count: u32,
}

impl IndexFile {
    pub fn create(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let header = Self {
            degree: INDEX_DEGREE,
            node_count: 0,
        };

        let mut file = File::create(path).context(IoSnafu { path })?;
        file.write_u32::<LE>(header.degree).context(IoSnafu { path })?;
        file.write_u32::<LE>(header.node_count).context(IoSnafu { path })?;

        Ok(header)
    }
}
