//! Data access layer.
//!
//! Repositories here own the durable representation of bot state and convert it to
//! domain models at the boundary. Only auto-translate settings are durable; message
//! links are held in memory by the lifecycle tracker.

pub mod settings;

#[cfg(test)]
mod test;
