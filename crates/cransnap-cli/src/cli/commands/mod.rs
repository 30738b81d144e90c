//! CLI command handlers. Each command is in its own file for clarity.

mod check;
mod list;
mod reset;
mod set;
mod show;

pub use check::run_check;
pub use list::run_list;
pub use reset::run_reset;
pub use set::run_set;
pub use show::run_show;

use cransnap_core::mirrors::MirrorConfig;

/// Prints a mirror configuration, one entry per line.
pub(crate) fn print_mirrors(cfg: &MirrorConfig) {
    println!("{:<12} URL", "NAME");
    for entry in cfg.entries() {
        let name = if entry.name.is_empty() {
            "-"
        } else {
            entry.name.as_str()
        };
        println!("{:<12} {}", name, entry.url);
    }
}
