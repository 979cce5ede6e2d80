use std::env;
use std::path::PathBuf;

fn main() {
    println!("cargo:rerun-if-changed=cheats");

    if let Ok(manifest_dir) = env::var("CARGO_MANIFEST_DIR") {
        let candidate = PathBuf::from(manifest_dir).join("cheats");
        let canonical = candidate.canonicalize().unwrap_or(candidate);

        println!(
            "cargo:rustc-env=TERMI_CHEAT_STORE_HINT={}",
            canonical.display()
        );
    }
}
