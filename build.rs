fn main() {
    // include_dir! embeds frontend/ at compile time; cargo does not track it.
    println!("cargo:rerun-if-changed=frontend");
}
