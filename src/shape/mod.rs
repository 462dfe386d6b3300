//! Shapes supported by prune3d.

pub use self::triangle::Triangle;

mod triangle;
