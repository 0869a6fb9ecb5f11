// src/lib.rs

#[macro_use]
pub mod macros;

pub mod config;
pub mod core;
pub mod specs;

pub mod codes;
pub mod csv;
pub mod error;
pub mod facility;
pub mod file;
pub mod log;
pub mod progress;
pub mod scrape;
pub mod sheet;

#[cfg(feature = "cli")]
pub mod cli;
#[cfg(feature = "gui")]
pub mod gui;

pub use error::Error;
pub use facility::{Field, FieldValue, FacilityRecord};
pub use sheet::Sheet;
