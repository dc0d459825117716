use crate::{error::*, tools::clean::clean, types::*};
use tracing::info;

/// Anything that can hand out and take back clipboard text.
pub trait ClipboardBackend {
    fn read_text(&mut self) -> Result<String>;
    fn write_text(&mut self, text: &str) -> Result<()>;
}

/// The desktop clipboard, via `arboard`.
///
/// On Linux (X11 and Wayland) the owning process serves the clipboard contents,
/// so they vanish when it exits. `write_text` there blocks until another
/// application (usually a clipboard manager) takes the selection over.
pub struct SystemClipboard {
    inner: arboard::Clipboard,
}

/// Whether a write has to hold the clipboard until another owner takes it.
pub const HOLDS_SELECTION: bool = cfg!(target_os = "linux");

impl SystemClipboard {
    pub fn new() -> Result<Self> {
        let inner = arboard::Clipboard::new()
            .map_err(|e| CleanError::ClipboardUnavailable(e.to_string()))?;
        Ok(Self { inner })
    }
}

impl ClipboardBackend for SystemClipboard {
    fn read_text(&mut self) -> Result<String> {
        match self.inner.get_text() {
            Ok(text) => Ok(text),
            Err(arboard::Error::ContentNotAvailable) => Err(CleanError::ClipboardEmpty),
            Err(e) => Err(CleanError::ClipboardUnavailable(e.to_string())),
        }
    }

    #[cfg(target_os = "linux")]
    fn write_text(&mut self, text: &str) -> Result<()> {
        use arboard::SetExtLinux;

        tracing::debug!("holding clipboard until another application takes it");
        self.inner
            .set()
            .wait()
            .text(text)
            .map_err(|e| CleanError::ClipboardUnavailable(e.to_string()))
    }

    #[cfg(not(target_os = "linux"))]
    fn write_text(&mut self, text: &str) -> Result<()> {
        self.inner
            .set_text(text)
            .map_err(|e| CleanError::ClipboardUnavailable(e.to_string()))
    }
}

/// Clean the clipboard in place. Returns the original text alongside the outcome.
pub fn clean_clipboard<B: ClipboardBackend>(
    backend: &mut B,
    opts: &Options,
) -> Result<(String, CleanOutcome)> {
    let raw = backend.read_text()?;
    if raw.trim().is_empty() {
        return Err(CleanError::ClipboardEmpty);
    }

    let outcome = clean(&raw, opts);
    backend.write_text(&outcome.text)?;
    info!(
        original = raw.chars().count(),
        cleaned = outcome.text.chars().count(),
        "clipboard cleaned"
    );
    Ok((raw, outcome))
}
