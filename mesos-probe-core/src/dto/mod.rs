//! Data Transfer Objects sent to the master
//!
//! Request bodies for the write endpoints: the operator API envelope
//! (`POST /api/v1`) and the form-encoded teardown request.

pub mod operator;
pub mod teardown;
