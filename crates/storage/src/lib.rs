mod codec;
mod error;
mod index;
mod table;

pub use {
    codec::{parse_literal, Decoder, Encoder, RowCodec},
    error::{Error, Result},
    index::{IndexFile, INDEX_DEGREE},
    table::{TableFile, HEADER_SIZE},
};
