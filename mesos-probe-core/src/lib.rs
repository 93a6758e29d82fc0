//! Mesos Probe Core
//!
//! Typed records for the Mesos master REST API.
//!
//! This crate contains:
//! - Domain types: snapshots decoded from `/state` and `/frameworks`
//! - DTOs: request bodies sent to the master (operator calls, teardown form)

pub mod domain;
pub mod dto;
