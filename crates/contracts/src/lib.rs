//! Shared DTOs and domain values for the chat / document-upload page.
//!
//! Everything here is plain `serde` data so the same types can be used by the
//! browser client and by any backend that implements `/chat` and `/upload`.

pub mod domain;
