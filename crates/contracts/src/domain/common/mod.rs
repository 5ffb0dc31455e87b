//! Common types for all backend records

pub mod record_id;

pub use record_id::RecordId;
