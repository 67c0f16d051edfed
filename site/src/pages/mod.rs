//! Page modules

pub mod index;

pub use index::IndexPage;
