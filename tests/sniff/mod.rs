//! End-to-end classification tests.

mod categories;
mod executable;
mod extension;
mod find;
mod sources;
mod text;
