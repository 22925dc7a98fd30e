use anyhow::Result;

pub fn execute() -> Result<()> {
    println!("sysreport version {}", env!("CARGO_PKG_VERSION"));
    Ok(())
}
