//! Clipboard plumbing.
//!
//! The plugin runs sandboxed and cannot touch the system clipboard itself.
//! The primary path asks Zellij to run the host's clipboard utility; the
//! fallback writes an OSC 52 sequence to the pane and lets the terminal
//! emulator set the clipboard.

use base64::{engine::general_purpose::STANDARD, Engine as _};

/// Context key attached to the clipboard command so its result can be told
/// apart from other command results.
pub const CLIPBOARD_CONTEXT_KEY: &str = "purpose";
/// Context value paired with [`CLIPBOARD_CONTEXT_KEY`].
pub const CLIPBOARD_CONTEXT_VALUE: &str = "clipboard";

/// Common OSC 52 size limit (base64 payload bytes).
pub const MAX_OSC52_PAYLOAD: usize = 74_994;

/// Picks the first available clipboard utility and feeds it `$1`.
const COPY_SCRIPT: &str = r#"if command -v pbcopy >/dev/null 2>&1; then printf '%s' "$1" | pbcopy
elif command -v wl-copy >/dev/null 2>&1; then printf '%s' "$1" | wl-copy
elif command -v xclip >/dev/null 2>&1; then printf '%s' "$1" | xclip -selection clipboard
elif command -v xsel >/dev/null 2>&1; then printf '%s' "$1" | xsel --clipboard --input
else exit 127
fi"#;

/// Argument vector for `run_command` that copies `text` on the host.
///
/// The text travels as a positional parameter, never inside the script, so
/// quotes and newlines in style code need no escaping.
#[must_use]
pub fn copy_command(text: &str) -> Vec<String> {
    vec![
        "sh".to_string(),
        "-c".to_string(),
        COPY_SCRIPT.to_string(),
        "fontlab-copy".to_string(),
        text.to_string(),
    ]
}

/// OSC 52 "set clipboard" sequence for `text`.
///
/// Returns `None` when the encoded payload exceeds [`MAX_OSC52_PAYLOAD`];
/// many terminals silently drop longer sequences.
///
/// ```
/// use fontlab::infrastructure::osc52_sequence;
///
/// assert_eq!(osc52_sequence("hi").as_deref(), Some("\x1b]52;c;aGk=\x07"));
/// ```
#[must_use]
pub fn osc52_sequence(text: &str) -> Option<String> {
    let encoded = STANDARD.encode(text.as_bytes());
    if encoded.len() > MAX_OSC52_PAYLOAD {
        tracing::debug!(payload_len = encoded.len(), "clipboard payload too large for OSC 52");
        return None;
    }
    Some(format!("\x1b]52;c;{encoded}\x07"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::catalog::CATALOG;

    #[test]
    fn copy_command_passes_text_verbatim() {
        let code = CATALOG[0].raw_style_code;
        let argv = copy_command(code);
        assert_eq!(argv[0], "sh");
        assert_eq!(argv[1], "-c");
        assert_eq!(argv.last().map(String::as_str), Some(code));
        assert!(!argv[2].contains(code));
    }

    #[test]
    fn osc52_round_trips_hangul() {
        let seq = osc52_sequence("붓글씨").unwrap();
        let payload = seq
            .strip_prefix("\x1b]52;c;")
            .and_then(|s| s.strip_suffix('\x07'))
            .unwrap();
        assert_eq!(STANDARD.decode(payload).unwrap(), "붓글씨".as_bytes());
    }

    #[test]
    fn every_style_code_fits_osc52() {
        for descriptor in CATALOG {
            assert!(osc52_sequence(descriptor.raw_style_code).is_some());
        }
    }

    #[test]
    fn oversized_payload_is_refused() {
        let huge = "x".repeat(MAX_OSC52_PAYLOAD);
        assert!(osc52_sequence(&huge).is_none());
    }
}
