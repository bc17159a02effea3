fn main() {
    // Capture the current timestamp as the build time
    let build_time = chrono::Utc::now().to_rfc3339();

    // Also set as environment variable for use in env! macro
    println!("cargo:rustc-env=BUILD_TIME={}", build_time);

    // Contact relay and analytics settings are baked into the bundle with option_env!
    for var in ["CONTACT_RELAY_URL", "CONTACT_RELAY_TOKEN", "ANALYTICS_DOMAIN"] {
        println!("cargo:rerun-if-env-changed={var}");
    }

    // Rerun if build.rs changes
    println!("cargo:rerun-if-changed=build.rs");
}
