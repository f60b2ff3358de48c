// cleanclip/src/utils/clipboard.rs
//! System clipboard access.
//!
//! Backed by `arboard` when the default `clipboard` feature is enabled. Without it every
//! call fails with a message pointing at `--stdin`/`--stdout`.

use anyhow::Result;

/// Reads the clipboard as text. `Ok(None)` means the clipboard holds no text.
#[cfg(feature = "clipboard")]
pub fn read_clipboard() -> Result<Option<String>> {
    use anyhow::Context;

    let mut clipboard =
        arboard::Clipboard::new().context("Failed to access the system clipboard")?;
    match clipboard.get_text() {
        Ok(text) => Ok(Some(text)),
        Err(arboard::Error::ContentNotAvailable) => Ok(None),
        Err(e) => Err(e).context("Failed to read text from the clipboard"),
    }
}

/// Replaces the clipboard contents with `text`.
///
/// On Linux the contents are served by this process. With `wait` set the call blocks until
/// another application takes the clipboard over; otherwise the text only outlives the
/// process if a clipboard manager picks it up.
#[cfg(feature = "clipboard")]
pub fn copy_to_clipboard(text: &str, wait: bool) -> Result<()> {
    use anyhow::Context;

    let mut clipboard =
        arboard::Clipboard::new().context("Failed to access the system clipboard")?;
    #[cfg(target_os = "linux")]
    let written = {
        use arboard::SetExtLinux;
        let set = clipboard.set();
        if wait {
            set.wait().text(text.to_owned())
        } else {
            set.text(text.to_owned())
        }
    };
    #[cfg(not(target_os = "linux"))]
    let written = {
        let _ = wait;
        clipboard.set_text(text.to_owned())
    };
    written.context("Failed to write text to the clipboard")?;
    log::debug!("Wrote {} bytes to the clipboard.", text.len());
    Ok(())
}

/// Whether the clipboard write may not survive the process exiting.
pub fn may_lose_clipboard_on_exit(wait: bool) -> bool {
    cfg!(target_os = "linux") && !wait
}

#[cfg(not(feature = "clipboard"))]
pub fn read_clipboard() -> Result<Option<String>> {
    anyhow::bail!("cleanclip was built without clipboard support; use --stdin instead")
}

#[cfg(not(feature = "clipboard"))]
pub fn copy_to_clipboard(_text: &str, _wait: bool) -> Result<()> {
    anyhow::bail!("cleanclip was built without clipboard support; use --stdout instead")
}
