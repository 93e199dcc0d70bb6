//! The CSV → graph document pipeline.
//!
//! `loader` reads rows, `normalize` types them and closes the node set over
//! the edges, `writer` serializes the result. `convert` chains the three.

pub mod convert;
pub mod loader;
pub mod model;
pub mod normalize;
pub mod writer;

pub use convert::{ConvertOptions, ConvertSummary, convert_files};
pub use model::{DEFAULT_GROUP, Edge, GraphDocument, Node};
