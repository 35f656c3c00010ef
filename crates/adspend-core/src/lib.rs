pub mod config;
pub mod datasets;
pub mod error;
pub mod lookup;
pub mod pipeline;
pub mod source;
pub mod stats;
pub mod transform;
pub mod writer;
