//! The `quizforge payload` command.

use std::io::Read;
use std::path::PathBuf;

use anyhow::{Context, Result};

use quizforge_core::config::load_config_from;
use quizforge_page::convert_json;

pub fn execute(request_path: Option<PathBuf>, config_path: Option<PathBuf>) -> Result<()> {
    let config = load_config_from(config_path.as_deref())?;

    let raw = match &request_path {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("failed to read request: {}", path.display()))?,
        None => {
            let mut buf = String::new();
            std::io::stdin()
                .read_to_string(&mut buf)
                .context("failed to read request from stdin")?;
            buf
        }
    };

    let response = convert_json(&raw, &config.defaults);

    println!("{}", serde_json::to_string(&response)?);

    if !response.success {
        std::process::exit(1);
    }

    Ok(())
}
