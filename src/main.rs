//! rPunchlog main entrypoint.

use rpunchlog::run;
use rpunchlog::ui::messages::error;

fn main() {
    if let Err(e) = run() {
        error(format!("Error: {e}"));
        std::process::exit(1);
    }
}
