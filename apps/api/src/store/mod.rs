//! Parameterized queries against the profile database.
//!
//! Read helpers take the pool directly. Write helpers are generic over
//! `SqliteExecutor` so the seeder can run them inside one transaction.

pub mod career;
pub mod profile;
pub mod projects;
pub mod skills;

/// The deployment is single-tenant: every collection hangs off this profile.
pub const PROFILE_ID: i64 = 1;
