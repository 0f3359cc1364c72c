use anyhow::{Context, Result};
use serde::Deserialize;

/// Which converted list to write.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum EntrySet {
    Names,  // proper names
    Common, // the main part
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub enum OutputFormat {
    #[serde(rename = "1")]
    Pipe, // лемма|символ|грамматика<br/>…
    #[serde(rename = "2")]
    Readable, // 2/лемма (скобки) символ грамматика
    #[serde(rename = "stress")]
    StressCoded, // like Pipe, with the stress marks of the lemma as numbers
    #[serde(rename = "json")]
    Json,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub enum Layout {
    #[serde(rename = "one-file")]
    OneFile,
    #[serde(rename = "four-files")]
    Batches, // path holds "{0}" for the batch number
    #[serde(rename = "AZ")]
    ByLetter, // directory of <part of speech>/<last letter>.txt
}

/// One `set,format,layout,path` row.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct OutputConfig {
    pub set: EntrySet,
    pub format: OutputFormat,
    pub layout: Layout,
    pub path: String,
}

pub fn parse_output_configs(csv_data: &str) -> Result<Vec<OutputConfig>> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .trim(csv::Trim::All)
        .from_reader(csv_data.as_bytes());

    let mut configs = Vec::new();
    for (i, record) in reader.deserialize().enumerate() {
        let config: OutputConfig =
            record.with_context(|| format!("Failed to read output config at line {}", i + 1))?;
        configs.push(config);
    }
    Ok(configs)
}
