//! # idstem-id
//!
//! Parsing, validation, and derivation for 18-character resident ID numbers.
//!
//! ## Design Principles
//!
//! - A [`CitizenId`] can only be constructed from a string that passes the
//!   structural and mod-11 checksum checks; invalid input never produces one
//! - The embedded birth date is validated with strict `YYYYMMDD` round-trip
//!   semantics, as a separate step with a distinct error
//! - All validation is pure: no I/O, no clocks (age takes "today" as an
//!   argument), no global state beyond `const` lookup tables
//!
//! ## Validation Pipeline
//!
//! ```ignore
//! let id = CitizenId::parse("11010519491231002X")?;
//! let birth = id.birth_date()?;
//! let age = completed_years(birth, Utc::now().date_naive());
//! let names = document_names(&id);
//! ```

mod catalog;
mod citizen;
mod error;

pub use catalog::{document_names, DOCUMENT_SUFFIXES};
pub use citizen::{completed_years, CitizenId};
pub use error::IdError;
