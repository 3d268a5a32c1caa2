// Generates a Debian Packages index from GitHub releases JSON.
//
// Release pipeline usage:
//   gh api repos/denova234/novaide-packages/releases | gen_packages > Packages

use std::io::Read;
use std::process::ExitCode;

use debrelay::index;

fn main() -> ExitCode {
    let mut input = String::new();
    if let Err(e) = std::io::stdin().read_to_string(&mut input) {
        eprintln!("Error reading stdin: {e}");
        return ExitCode::FAILURE;
    }

    let input = input.trim();
    if input.is_empty() {
        eprintln!("Error: No input data received");
        return ExitCode::FAILURE;
    }

    let releases: Vec<index::Release> = match serde_json::from_str(input) {
        Ok(releases) => releases,
        Err(e) => {
            eprintln!("Error parsing JSON: {e}");
            return ExitCode::FAILURE;
        }
    };

    let (rendered, count) = index::generate_index(&releases);
    print!("{rendered}");
    eprintln!("Processed {count} packages");
    ExitCode::SUCCESS
}
