use shadow_rs::ShadowBuilder;

fn main() {
    // Build metadata backs the `--version` output and the health endpoint
    ShadowBuilder::builder()
        .build()
        .expect("Failed to generate build metadata");
    println!("cargo:rerun-if-changed=migrations");
}
