//! Configuration Record - The resolved option values handed to training code

use clap::Args;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;

use crate::error::Result;
use crate::groups::{
    CriteriaArgs, GeneralArgs, LoggingArgs, MiningArgs, NirArgs, SamplingArgs, RECORD_GROUPS,
};

/// Fully resolved option values, one field per declared option.
///
/// Built once by `ConfigSchema::parse`; consumers only read it.
#[derive(Args, Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConfigurationRecord {
    #[command(flatten)]
    pub general: GeneralArgs,

    #[command(flatten)]
    pub logging: LoggingArgs,

    #[command(flatten)]
    pub nir: NirArgs,

    #[command(flatten)]
    pub criteria: CriteriaArgs,

    #[command(flatten)]
    pub mining: MiningArgs,

    #[command(flatten)]
    pub sampling: SamplingArgs,
}

impl ConfigurationRecord {
    /// Renders the record as CLI tokens that parse back into an equal record,
    /// for every record `parse` can produce. Text starting with `-` is
    /// written as is and refused again by `parse`.
    ///
    /// Scalars are attached as `--name=value`, so `-inf` or `-0.5` cannot be
    /// taken for a flag. List items follow their flag as separate tokens.
    /// Switches that are off and empty lists are left out.
    pub fn to_tokens(&self) -> Result<Vec<String>> {
        let mut tokens = Vec::new();
        for (_, options) in self.grouped_values()? {
            for (name, value) in options {
                match value {
                    Value::Bool(true) => tokens.push(format!("--{name}")),
                    Value::Bool(false) => {}
                    Value::Array(items) if items.is_empty() => {}
                    // An attached value carries a single item
                    Value::Array(items) => {
                        tokens.push(format!("--{name}"));
                        tokens.extend(items.iter().map(render_scalar));
                    }
                    other => tokens.push(format!("--{name}={}", render_scalar(&other))),
                }
            }
        }
        Ok(tokens)
    }

    /// Pretty JSON keyed by group and option name. Non-finite floats are
    /// written as the strings `inf`, `-inf` and `NaN`.
    pub fn to_json_pretty(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Option values per group, in registration order.
    fn grouped_values(&self) -> Result<Vec<(&'static str, serde_json::Map<String, Value>)>> {
        let mut root = match serde_json::to_value(self)? {
            Value::Object(map) => map,
            _ => serde_json::Map::new(),
        };

        Ok(RECORD_GROUPS
            .iter()
            .map(|&group| {
                let options = match root.remove(group) {
                    Some(Value::Object(map)) => map,
                    _ => serde_json::Map::new(),
                };
                (group, options)
            })
            .collect())
    }
}

fn render_scalar(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Number(n) => match (n.as_u64(), n.as_i64(), n.as_f64()) {
            (Some(u), _, _) => u.to_string(),
            (None, Some(i), _) => i.to_string(),
            // Display for f64 is the shortest form that parses back exactly
            (None, None, Some(f)) => f.to_string(),
            _ => n.to_string(),
        },
        other => other.to_string(),
    }
}

impl fmt::Display for ConfigurationRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let groups = self.grouped_values().map_err(|_| fmt::Error)?;
        for (group, options) in groups {
            writeln!(f, "[{group}]")?;
            for (name, value) in options {
                let rendered = match &value {
                    Value::Array(items) => items
                        .iter()
                        .map(render_scalar)
                        .collect::<Vec<_>>()
                        .join(" "),
                    other => render_scalar(other),
                };
                writeln!(f, "  {name}: {rendered}")?;
            }
        }
        Ok(())
    }
}
