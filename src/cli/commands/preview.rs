use anyhow::{Context, Result};
use std::fs;
use std::path::Path;

use conversify::survey::SurveyDraft;

pub async fn preview_command(file: &Path) -> Result<()> {
    let content = fs::read_to_string(file)
        .with_context(|| format!("Failed to read draft file: {}", file.display()))?;
    let draft: SurveyDraft = serde_json::from_str(&content)
        .with_context(|| format!("Failed to parse survey draft: {}", file.display()))?;

    print!("{}", draft.preview());
    Ok(())
}
