//! # agenda-cli
//!
//! Terminal front end for the `agenda-core` engine: menu loops, prompts,
//! JSON flat-file persistence, user accounts, and message catalogs. All
//! event semantics live in the engine crate; this crate only talks to the
//! user and the filesystem.

pub mod auth;
pub mod i18n;
pub mod menus;
pub mod storage;
pub mod term;

pub use menus::run;
pub use storage::DataDir;
