//! Desktop stand-ins for the mobile share sheet and alert dialogs.

use std::path::Path;

use owo_colors::OwoColorize;
use statiq_core::{Error, Notice, Notifier, Result, ShareRequest, ShareSheet};
use tracing::debug;

/// Opens the exported file with the system's default handler
#[derive(Debug, Clone, Copy)]
pub struct SystemShareSheet {
    enabled: bool,
}

impl SystemShareSheet {
    pub fn new(enabled: bool) -> Self {
        Self { enabled }
    }
}

impl ShareSheet for SystemShareSheet {
    fn is_available(&self) -> bool {
        self.enabled
    }

    fn share(&self, path: &Path, request: &ShareRequest<'_>) -> Result<()> {
        debug!(
            "{}: opening {} ({})",
            request.dialog_title,
            path.display(),
            request.mime_type
        );
        open::that(path).map_err(|e| Error::ShareFailed(e.to_string()))
    }
}

/// Prints notices to stderr
#[derive(Debug, Clone, Copy, Default)]
pub struct ConsoleNotifier;

impl Notifier for ConsoleNotifier {
    fn notify(&self, notice: &Notice) {
        match notice {
            Notice::ExportComplete { .. } => {
                eprintln!("{} {}", notice.title().green().bold(), notice.message())
            }
            Notice::ExportFailed => {
                eprintln!("{} {}", notice.title().red().bold(), notice.message())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_disabled_share_sheet_is_unavailable() {
        assert!(!SystemShareSheet::new(false).is_available());
        assert!(SystemShareSheet::new(true).is_available());
    }
}
