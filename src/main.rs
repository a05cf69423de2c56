/// Shredder - Secure File Deletion
///
/// Overwrites the target file with random data (3 passes), then removes it.
/// With no arguments it runs the demo flow: copy template.txt to file.txt
/// and shred the copy.

// Module declarations
mod security;
mod utils;

use std::process::exit;

use security::shred_file;
use utils::prepare_target;

const TEMPLATE_PATH: &str = "template.txt";
const DEMO_TARGET: &str = "file.txt";

fn main() {
    let args: Vec<String> = std::env::args().skip(1).collect();

    let target = match args.as_slice() {
        [path] => path.clone(),
        [] => {
            // Copy the template so there is always a file to shred
            eprintln!("ℹ️  No target given - copying {} to {}", TEMPLATE_PATH, DEMO_TARGET);
            if let Err(e) = prepare_target(TEMPLATE_PATH, DEMO_TARGET) {
                eprintln!("❌ Failed to prepare {}: {}", DEMO_TARGET, e);
                exit(1);
            }
            DEMO_TARGET.to_string()
        }
        _ => {
            // One file per invocation
            eprintln!("Usage: shredder [FILE]");
            exit(2);
        }
    };

    eprintln!("🔥 Securely deleting: {}", target);

    match shred_file(&target) {
        Ok(()) => eprintln!("✅ File deleted: {}", target),
        Err(e) => {
            eprintln!("❌ Failed to shred {}: {}", target, e);
            exit(1);
        }
    }
}
