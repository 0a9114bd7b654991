//! Shared test utilities for the scm-local workspace.
//!
//! Fixtures here build real checkouts in temporary directories. Tests that
//! only need repository state should prefer the in-memory backends in
//! `scm_local::mocks`.
//!
//! # Modules
//!
//! - [`git`]: low-level git and svn checkout fixtures
//! - [`repo`]: [`TestRepo`] builder for git repositories with history

pub mod git;
pub mod repo;

pub use repo::TestRepo;
