mod lookahead;

pub use lookahead::{Lookahead, LookaheadExt};
