//! Directory entity fixtures: response bodies, mock endpoints, and direct
//! database inserts.

pub mod data;
pub mod factory;
pub mod mockito;

use crate::setup::TestSetup;

/// Fixture helpers bound to one test setup.
pub struct EveFixtures<'a> {
    pub setup: &'a mut TestSetup,
}
