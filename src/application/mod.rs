//! Application services - business rules over the ports.

pub mod catalog;
