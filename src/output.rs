use std::fs::File;
use std::io::{BufReader, Write};
use std::path::Path;

use crate::allocations::AllocationsMsg;
use crate::error::{FixtureError, FixtureResult};

/// Serialize the envelope with 2-space indentation.
pub fn render_message(msg: &AllocationsMsg) -> FixtureResult<String> {
    Ok(serde_json::to_string_pretty(msg)?)
}

/// Render the first `count` allocation entries with the same indentation
/// convention used for the fixture file.
pub fn render_preview(msg: &AllocationsMsg, count: usize) -> FixtureResult<String> {
    let entries = &msg.add_allocations.allocations;
    let take = count.min(entries.len());
    Ok(serde_json::to_string_pretty(&entries[..take])?)
}

/// Write the envelope to `path`, overwriting any existing file. The file
/// handle is scoped to this function, so it is closed on every exit path.
pub fn write_fixture(path: &Path, msg: &AllocationsMsg) -> FixtureResult<()> {
    let json = render_message(msg)?;

    let mut file = File::create(path).map_err(|source| FixtureError::Write {
        path: path.to_path_buf(),
        source,
    })?;

    file.write_all(json.as_bytes())
        .map_err(|source| FixtureError::Write {
            path: path.to_path_buf(),
            source,
        })?;

    Ok(())
}

/// Load a previously written fixture back into the envelope type.
pub fn load_fixture(path: &Path) -> FixtureResult<AllocationsMsg> {
    let file = File::open(path).map_err(|source| FixtureError::Read {
        path: path.to_path_buf(),
        source,
    })?;

    let reader = BufReader::new(file);
    Ok(serde_json::from_reader(reader)?)
}
