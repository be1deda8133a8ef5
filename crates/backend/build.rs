use std::env;
use std::fs;
use std::path::Path;

// Кладёт config.toml из корня workspace рядом с бинарником (target/debug | target/release)
fn main() {
    println!("cargo:rerun-if-changed=../../config.toml");

    let out_dir = env::var("OUT_DIR").expect("OUT_DIR is set by cargo");
    let profile = env::var("PROFILE").expect("PROFILE is set by cargo");

    // OUT_DIR: target/<profile>/build/backend-xxx/out
    let Some(target_dir) = Path::new(&out_dir)
        .ancestors()
        .find(|p| p.ends_with(&profile))
    else {
        println!("cargo:warning=target/{profile} not found above OUT_DIR, config.toml not copied");
        return;
    };

    let workspace_root = Path::new(env!("CARGO_MANIFEST_DIR"))
        .parent()
        .and_then(|p| p.parent())
        .expect("backend lives in <workspace>/crates/backend");

    let source = workspace_root.join("config.toml");
    let dest = target_dir.join("config.toml");

    if source.exists() {
        fs::copy(&source, &dest)
            .unwrap_or_else(|e| panic!("Failed to copy config.toml: {}", e));
        println!("cargo:warning=Copied config.toml to {:?}", dest);
    } else {
        println!(
            "cargo:warning=config.toml not found at {:?}, embedded defaults will be used",
            source
        );
    }
}
