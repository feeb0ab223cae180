//! `generate` command: produce a FAQ result for a topic

use console::style;

use crate::config::ConfigLoader;
use crate::faq::FaqPipeline;
use crate::types::Result;

pub async fn run(topic: &str, format: &str) -> Result<()> {
    let config = ConfigLoader::load()?;
    let pipeline = FaqPipeline::from_config(&config)?;
    let outcome = pipeline.generate(topic).await?;

    match format {
        "json" => {
            let body = serde_json::json!({ "faqs": outcome.pairs() });
            println!("{}", serde_json::to_string_pretty(&body)?);
        }
        _ => {
            if outcome.is_fallback() {
                println!(
                    "{}",
                    style("(fallback content - no chat provider available)").dim()
                );
                println!();
            }
            for (i, pair) in outcome.pairs().iter().enumerate() {
                println!("{} {}", style(format!("Q{}:", i + 1)).bold(), pair.question);
                println!("    {}", pair.answer);
                println!();
            }
        }
    }

    Ok(())
}
