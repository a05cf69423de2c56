/// Secure file deletion
use std::fs::{self, OpenOptions};
use std::io::{self, Seek, SeekFrom, Write};
use std::path::Path;

use rand::RngCore;

/// Number of overwrite passes before the file is removed
const PASSES: u32 = 3;

/// Fill a fresh buffer with random bytes
/// rand::rng() is cryptographically secure (math-style PRNGs are not)
fn random_buffer(len: usize) -> Vec<u8> {
    let mut buffer = vec![0u8; len];
    rand::rng().fill_bytes(&mut buffer);
    buffer
}

/// Securely delete a file
///
/// Process:
/// 1. Overwrite the file with random data (3 passes)
/// 2. Delete the file
///
/// The file length is read once at open time; every pass writes a fresh
/// random buffer of that length from offset 0. On any error the operation
/// aborts and the file is left in place, possibly partially overwritten.
pub fn shred_file<P: AsRef<Path>>(path: P) -> io::Result<()> {
    let path = path.as_ref();

    let mut file = OpenOptions::new().read(true).write(true).open(path)?;
    let file_size = file.metadata()?.len() as usize;

    for pass in 1..=PASSES {
        eprintln!("  Pass {}/{}: Overwriting with random data...", pass, PASSES);

        let buffer = random_buffer(file_size);

        file.seek(SeekFrom::Start(0))?;
        file.write_all(&buffer)?;
        file.flush()?;
    }

    // Close the handle before unlinking
    drop(file);
    fs::remove_file(path)
}
