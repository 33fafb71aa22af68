#![deny(missing_debug_implementations)]
#![cfg_attr(test, deny(warnings))]

//! # crocmap-entities
//!
//! Plain domain entities for crocmap.
//!
//! The entities only contain generic functionality that does not reveal any
//! job-specific logic like retrying, batching or rendering.

pub mod address;
pub mod annotation;
pub mod capture;
pub mod geo;
pub mod location;
pub mod map;
