use dialoguer::{theme::ColorfulTheme, Confirm};
use tracing::warn;

use crate::core::Confirmer;
use crate::models::ConfirmPrompt;

/// Asks on the terminal, defaulting to "no"
pub struct DialoguerConfirmer;

impl Confirmer for DialoguerConfirmer {
    fn confirm(&self, prompt: &ConfirmPrompt) -> bool {
        let question = format!(
            "{} ({} / {})",
            prompt, prompt.confirm_label, prompt.cancel_label
        );
        match Confirm::with_theme(&ColorfulTheme::default())
            .with_prompt(question)
            .default(false)
            .interact()
        {
            Ok(answer) => answer,
            Err(e) => {
                warn!("Failed to read confirmation: {}", e);
                false
            }
        }
    }
}

/// Confirms without asking, for `--yes`
pub struct AssumeYes;

impl Confirmer for AssumeYes {
    fn confirm(&self, _prompt: &ConfirmPrompt) -> bool {
        true
    }
}
