pub mod allocations;
pub mod error;
pub mod output;

pub use allocations::{AddAllocations, AllocationEntry, AllocationsMsg};
pub use error::{FixtureError, FixtureResult};
