//! Shared wire types between the frontend and the hosting server.

pub mod domain;
pub mod shared;
