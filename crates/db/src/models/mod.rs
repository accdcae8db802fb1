//! Row structs and small read DTOs.
//!
//! Each submodule contains `FromRow` + `Serialize` structs matching the
//! database rows the repositories read.

pub mod film;
pub mod search_event;
