//! The `data-collection` entry point.
//!
//! Asks for a name and an email on the console, re-prompting until both are valid, then prints
//! `Received data: Name - <name>, Email - <email>`.

pub mod app;
pub mod collector;
pub mod domain;
pub mod presenter;
