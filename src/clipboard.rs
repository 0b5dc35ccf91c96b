//! Write-only clipboard access.

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ClipboardError {
    #[error("Clipboard is not available: {0}")]
    Unavailable(String),
    #[error("Clipboard rejected the write: {0}")]
    Rejected(String),
}

/// Destination of the copy action.
pub trait ClipboardWriter {
    /// Places `text` on the clipboard.
    ///
    /// # Errors
    ///
    /// Returns error if the platform refused the write.
    fn write_text(&mut self, text: &str) -> Result<(), ClipboardError>;
}

impl<C: ClipboardWriter + ?Sized> ClipboardWriter for &mut C {
    fn write_text(&mut self, text: &str) -> Result<(), ClipboardError> {
        (**self).write_text(text)
    }
}

/// In-process clipboard that records every write.
#[derive(Debug, Default, Clone)]
pub struct MemoryClipboard {
    writes: Vec<String>,
}

impl MemoryClipboard {
    pub fn new() -> Self {
        Self::default()
    }

    /// Most recent write, if any.
    pub fn contents(&self) -> Option<&str> {
        self.writes.last().map(String::as_str)
    }

    pub fn write_count(&self) -> usize {
        self.writes.len()
    }
}

impl ClipboardWriter for MemoryClipboard {
    fn write_text(&mut self, text: &str) -> Result<(), ClipboardError> {
        self.writes.push(text.to_string());
        Ok(())
    }
}

/// Native system clipboard.
#[cfg(feature = "clipboard")]
pub struct SystemClipboard {
    inner: arboard::Clipboard,
}

#[cfg(feature = "clipboard")]
impl SystemClipboard {
    /// Opens the platform clipboard.
    ///
    /// # Errors
    ///
    /// Returns [`ClipboardError::Unavailable`] if no clipboard can be opened,
    /// e.g. on a headless session.
    pub fn new() -> Result<Self, ClipboardError> {
        let inner = arboard::Clipboard::new().map_err(|e| {
            #[cfg(feature = "tracing")]
            tracing::error!("Failed to open system clipboard: {}", e);
            ClipboardError::Unavailable(e.to_string())
        })?;
        Ok(Self { inner })
    }
}

#[cfg(feature = "clipboard")]
impl ClipboardWriter for SystemClipboard {
    fn write_text(&mut self, text: &str) -> Result<(), ClipboardError> {
        self.inner
            .set_text(text)
            .map_err(|e| ClipboardError::Rejected(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_clipboard_records_writes() {
        let mut clipboard = MemoryClipboard::new();
        assert_eq!(clipboard.contents(), None);
        clipboard.write_text("first").unwrap();
        clipboard.write_text("second").unwrap();
        assert_eq!(clipboard.contents(), Some("second"));
        assert_eq!(clipboard.write_count(), 2);
    }

    #[test]
    fn test_mut_ref_forwards() {
        fn write_via<W: ClipboardWriter>(mut writer: W) {
            writer.write_text("via ref").unwrap();
        }

        let mut clipboard = MemoryClipboard::new();
        write_via(&mut clipboard);
        assert_eq!(clipboard.contents(), Some("via ref"));
    }

    #[test]
    fn test_error_messages() {
        let err = ClipboardError::Rejected("permission denied".to_string());
        assert_eq!(
            err.to_string(),
            "Clipboard rejected the write: permission denied"
        );
    }
}
