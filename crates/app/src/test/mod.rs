//! Test support shared by service integration tests.

mod context;

pub(crate) use context::TestContext;
