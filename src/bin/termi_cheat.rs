//! Quick command reference: `termi-cheat git`, `termi-cheat -s push`,
//! `termi-cheat --list`.

fn main() {
    termi_cheat::cli::main();
}
