fn main() {
    // Date shown in the page footer
    let build_date = chrono::Utc::now().format("%B %-d, %Y");
    println!("cargo:rustc-env=BUILD_TIME={build_date}");

    println!("cargo:rerun-if-changed=build.rs");
    println!("cargo:rerun-if-changed=content");
}
