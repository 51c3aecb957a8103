//! labhub main entrypoint.

use labhub::run;
use labhub::ui::messages::error;

fn main() {
    if let Err(e) = run() {
        error(format!("Error: {}", e));
        std::process::exit(1);
    }
}
