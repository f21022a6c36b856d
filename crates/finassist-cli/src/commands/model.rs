//! Sentiment model availability check

use anyhow::Result;
use finassist_core::SentimentLoader;

pub async fn cmd_model() -> Result<()> {
    let loader = SentimentLoader::from_env();

    println!();
    println!("🧠 Sentiment Model");
    println!("   ─────────────────────────────────────────────────────────────");
    println!("   Configured: {}", loader.model());

    match loader.get().await {
        Some(info) => {
            println!("   ✅ Available: {}", info.id);
            if let Some(tag) = &info.pipeline_tag {
                println!("   Task: {}", tag);
            }
            if let Some(downloads) = info.downloads {
                println!("   Downloads: {}", downloads);
            }
        }
        None => {
            println!("   ⚠️  Unavailable ({})", loader.status().as_str());
            println!("      Responses do not depend on this model.");
        }
    }

    println!();
    Ok(())
}
