use serde::{Deserialize, Serialize};

/// Bech32-style prefix shared by all synthetic addresses.
pub const ADDRESS_PREFIX: &str = "mantra1dummy";

/// Decimal width of the zero-padded index suffix appended to the prefix.
pub const ADDRESS_INDEX_WIDTH: usize = 40;

/// Indices cover FIRST_INDEX..END_INDEX, i.e. 4,999 entries.
pub const FIRST_INDEX: u64 = 1;
pub const END_INDEX: u64 = 5000;

/// Each entry's amount is its index times this multiplier.
pub const AMOUNT_MULTIPLIER: u64 = 1000;

/// Fixture file name, relative to the current working directory.
pub const OUTPUT_FILE: &str = "add_allocations.json";

/// Number of entries echoed to stdout after a successful run.
pub const PREVIEW_LEN: usize = 5;

/// One (address, amount) pair, serialized as a two-element JSON array.
/// The amount stays a decimal string to match Uint128 serialization.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct AllocationEntry(pub String, pub String);

impl AllocationEntry {
    pub fn address(&self) -> &str {
        &self.0
    }

    pub fn amount(&self) -> &str {
        &self.1
    }
}

#[derive(Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct AddAllocations {
    pub allocations: Vec<AllocationEntry>,
}

/// The full `add_allocations` message envelope written to the fixture file.
#[derive(Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct AllocationsMsg {
    pub add_allocations: AddAllocations,
}

impl AllocationsMsg {
    pub fn entry_count(&self) -> usize {
        self.add_allocations.allocations.len()
    }
}

/// Synthetic address for index `i`: prefix + 40-digit zero-padded decimal.
pub fn dummy_address(i: u64) -> String {
    format!("{}{:0width$}", ADDRESS_PREFIX, i, width = ADDRESS_INDEX_WIDTH)
}

/// Amount for index `i`, rendered as a decimal string.
pub fn dummy_amount(i: u64) -> String {
    (i * AMOUNT_MULTIPLIER).to_string()
}

/// Build the allocation list in increasing index order.
pub fn build_allocations() -> Vec<AllocationEntry> {
    (FIRST_INDEX..END_INDEX)
        .map(|i| AllocationEntry(dummy_address(i), dummy_amount(i)))
        .collect()
}

/// Wrap the allocation list in the message envelope.
pub fn build_message() -> AllocationsMsg {
    AllocationsMsg {
        add_allocations: AddAllocations {
            allocations: build_allocations(),
        },
    }
}
