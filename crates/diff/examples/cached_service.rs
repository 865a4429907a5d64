use std::time::Duration;

use anyhow::Result;
use smart_diff::{DiffConfig, DiffService, MemoryCache};

fn main() -> Result<()> {
    let config = DiffConfig::default().cache_ttl(Duration::from_secs(60 * 60));
    let service = DiffService::new(MemoryCache::new(), config);

    let body = r#"{"oldText": "Obat dgn dosis 500mg", "newText": "Obat dengan dosis 250mg"}"#;

    // The second request is answered from the cache
    for _ in 0..2 {
        let response = service.handle_json(body)?;
        println!("{}", serde_json::to_string_pretty(&response)?);
    }

    // Malformed requests are rejected before any diffing happens
    if let Err(e) = service.handle_json(r#"{"oldText": 1}"#) {
        println!("rejected: {}", e);
    }

    Ok(())
}
