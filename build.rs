use shadow_rs::ShadowBuilder;

fn main() {
    // Build metadata for `notifiers --version`
    ShadowBuilder::builder()
        .build()
        .expect("Failed to generate build metadata");
}
