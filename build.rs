use std::error::Error;

fn main() -> Result<(), Box<dyn Error>> {
    // Package, target and profile information for the boot banner.
    built::write_built_file()?;

    let host = gethostname::gethostname();
    println!("cargo:rustc-env=BUILD_HOST={}", host.to_string_lossy());
    println!(
        "cargo:rustc-env=BUILD_TIME={}",
        chrono::Local::now().format("%Y-%m-%d %H:%M:%S")
    );

    Ok(())
}
