//! Elasticsearch-compatible backend talking to the `_doc` REST API.
//!
//! Only point reads and whole-document writes are used; conditional writes
//! map to `op_type=create` and `if_seq_no`/`if_primary_term`.

mod client;
mod types;

pub use client::ElasticStore;
