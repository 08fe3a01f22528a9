//! `infill doctor` — diagnose configuration and backend health.

use infill_config::AppConfig;
use infill_core::CompletionProvider;
use infill_providers::OllamaProvider;

pub async fn run() -> anyhow::Result<()> {
    println!("🩺 Infill Doctor — System Diagnostics");
    println!("=====================================\n");

    let mut issues = 0;

    // Check config
    let config_path = AppConfig::config_path();
    let config = match AppConfig::load() {
        Ok(config) => {
            if config_path.exists() {
                println!("  ✅ Config file valid");
            } else {
                println!("  ✅ No config file — using defaults");
            }
            config
        }
        Err(e) => {
            println!("  ❌ Config file invalid: {e}");
            println!("\n  ⚠️  1 issue found. See above for details.");
            return Ok(());
        }
    };
    println!("  ✅ Model: {}", config.model);
    println!("  ✅ Token limit: {}", config.token_limit);

    // Check backend reachability
    let provider = OllamaProvider::new(Some(config.provider.base_url.as_str()));
    match provider.health_check().await {
        Ok(true) => {
            println!("  ✅ Ollama reachable at {}", config.provider.base_url);

            // Check the configured model is actually installed
            match provider.list_models().await {
                Ok(models) if models.iter().any(|m| m == &config.model) => {
                    println!("  ✅ Model '{}' installed", config.model);
                }
                Ok(models) => {
                    println!(
                        "  ⚠️  Model '{}' not installed — run `ollama pull {}` ({} model(s) available)",
                        config.model,
                        config.model,
                        models.len()
                    );
                    issues += 1;
                }
                Err(e) => {
                    println!("  ⚠️  Could not list models: {e}");
                    issues += 1;
                }
            }
        }
        Ok(false) | Err(_) => {
            println!(
                "  ❌ Ollama unreachable at {} — is it running?",
                config.provider.base_url
            );
            issues += 1;
        }
    }

    // Summary
    println!();
    if issues == 0 {
        println!("  🎉 All checks passed!");
    } else {
        println!("  ⚠️  {issues} issue(s) found. See above for details.");
    }

    Ok(())
}
