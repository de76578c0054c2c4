//! # Olympic Lens Core
//!
//! Pure, synchronous aggregation/query core over historical Olympic Games
//! records: typed data model, admission, a declarative filter engine, the
//! group-by/reduce pipelines behind every dashboard view, a country
//! typeahead index, and the per-country summary reducer.
//!
//! This crate performs no I/O and holds no global state. Loaders hand in
//! raw rows; every operation is a pure function over an immutable in-memory
//! dataset, so recomputation after a filter change is a full, idempotent
//! rebuild. Tie-breaks that depend on encounter order are reproducible as
//! long as the loader yields rows in source-file order.
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`record`] | Raw/typed row model, region mapping |
//! | [`store`] | Record store with per-view admission, per-Games dedup |
//! | [`filter`] | Declarative multi-attribute filter |
//! | [`aggregate`] | Group-by/reduce pipelines |
//! | [`search`] | Country prefix suggest and resolve |
//! | [`summary`] | Per-NOC summary artifact reducer |

pub mod aggregate;
pub mod filter;
pub mod record;
pub mod search;
pub mod store;
pub mod summary;
