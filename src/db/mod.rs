pub mod source;

pub use source::{DataSource, Session};
