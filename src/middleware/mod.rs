//! Request middleware: acting-user extraction.

pub mod identity;
