use serde_json::Value;
use transit_core::error::Result;
use transit_core::graph::{ShortestPaths, VisitResult};
use transit_core::stats::GraphStats;

/// Pretty-print a JSON value to stdout
pub fn print(value: &Value) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

pub fn stats(stats: &GraphStats) -> Result<Value> {
    Ok(serde_json::to_value(stats)?)
}

pub fn visit(label: &str, result: &VisitResult) -> Result<Value> {
    let mut value = serde_json::to_value(result)?;
    if let Some(obj) = value.as_object_mut() {
        obj.insert("algorithm".to_string(), serde_json::json!(label.to_lowercase()));
    }
    Ok(value)
}

/// One entry per target in the given order; unreachable distances are `null`
pub fn shortest_paths(result: &ShortestPaths, targets: &[&str]) -> Result<Value> {
    let entries = targets
        .iter()
        .map(|&target| -> Result<Value> {
            Ok(serde_json::json!({
                "target": target,
                "distance": serde_json::to_value(result.distance(target))?,
                "path": result.path(target),
            }))
        })
        .collect::<Result<Vec<Value>>>()?;

    Ok(serde_json::json!({
        "source": result.source,
        "paths": entries,
    }))
}
