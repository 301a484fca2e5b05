//! List pinned content

use adcraft_gen::AdCraftConfig;
use adcraft_store::PinStore;
use anyhow::Result;

pub fn run(hash: Option<&str>) -> Result<()> {
    let config = AdCraftConfig::load()?;
    let store = super::open_store(&config)?;

    let records = store.pin_list(hash)?;
    if records.is_empty() {
        println!("No pins found");
        return Ok(());
    }

    for record in &records {
        let name = record.name.as_deref().unwrap_or("-");
        let pinned_at = record.pinned_at.as_deref().unwrap_or("-");
        println!("{}  {}  {}", record.identifier, name, pinned_at);
    }
    println!("{} pin(s)", records.len());

    Ok(())
}
