//! shiftledger main entrypoint.

use shiftledger::run;
use shiftledger::ui::messages::error;

fn main() {
    if let Err(e) = run() {
        error(format!("Error: {e}"));
        std::process::exit(1);
    }
}
