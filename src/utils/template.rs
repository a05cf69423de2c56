/// Template fixture helper
///
/// Copies a fixed template file to a working path so the demo flow and the
/// tests always have something to shred. Pure glue, not part of the core.
use std::fs;
use std::io;
use std::path::Path;

/// Copy the template file's bytes to the target path
pub fn prepare_target<P: AsRef<Path>, Q: AsRef<Path>>(template: P, target: Q) -> io::Result<()> {
    let data = fs::read(template)?;
    fs::write(target, data)
}
