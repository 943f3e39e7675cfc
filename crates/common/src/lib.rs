//! Shared configuration, database, error and domain types for xStake.

pub mod config;
pub mod db;
pub mod error;
pub mod types;
