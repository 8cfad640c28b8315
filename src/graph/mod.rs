pub mod traits;
pub mod dense;
pub mod text;
pub mod generators;

pub use traits::{Graph, MutableGraph};
pub use dense::DenseGraph;
pub use text::INFINITY_TOKEN;
