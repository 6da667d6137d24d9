//! Patching library for Diablo II: Resurrected character saves.
//!
//! A `.d2s` file records one character's progress. The game gates
//! difficulty selection, act travel and waypoints behind flags that
//! are normally only set by playing through; this crate flips those
//! flags directly in the file bytes and then recomputes the file
//! checksum so the game still accepts the save.
//!
//! The crate never touches the filesystem. Callers load the file into
//! a byte buffer, hand it to [`engine::apply`] with one of the
//! [`policy::Policy`] profiles, and persist the mutated buffer
//! themselves.

pub mod checksum;
pub mod engine;
pub mod error;
pub mod format;
pub mod policy;
pub mod quest;
