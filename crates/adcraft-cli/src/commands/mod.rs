pub mod generate;
pub mod pins;
pub mod providers;
pub mod publish;
pub mod serve;

use adcraft_gen::AdCraftConfig;
use adcraft_store::PinataStore;
use anyhow::Result;

/// Build the storage client from config, failing up front on missing keys
pub(crate) fn open_store(config: &AdCraftConfig) -> Result<PinataStore> {
    let (api_key, secret_key) = config.require_pinata_keys()?;
    let mut store = PinataStore::new(api_key, secret_key);
    if let Some(url) = config.pinata_api_url() {
        store = store.with_api_url(url);
    }
    Ok(store)
}
