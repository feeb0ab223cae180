//! `segment` command: show how an answer string breaks into display
//! segments and key points

use console::style;

use crate::format::{SegmentKind, extract_key_points, segment};
use crate::types::Result;

pub fn run(answer: &str, format: &str) -> Result<()> {
    let segments = segment(answer);
    let key_points = extract_key_points(answer);

    match format {
        "json" => {
            let body = serde_json::json!({
                "segments": segments,
                "key_points": key_points,
            });
            println!("{}", serde_json::to_string_pretty(&body)?);
        }
        _ => {
            for seg in &segments {
                let label = match seg.kind {
                    SegmentKind::Definition => "definition",
                    SegmentKind::ListItem if seg.numbered == Some(true) => "list (numbered)",
                    SegmentKind::ListItem => "list (bullet)",
                    SegmentKind::Highlight => "highlight",
                    SegmentKind::PlainText => "text",
                };
                println!("{:16} {}", style(label).cyan(), seg.text);
            }

            if !key_points.is_empty() {
                println!();
                println!("{}", style("Key points:").bold());
                for point in &key_points {
                    println!("  • {}", point);
                }
            }
        }
    }

    Ok(())
}
