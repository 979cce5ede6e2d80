//! Short alias for `termi-cheat`.

fn main() {
    termi_cheat::cli::main();
}
