use std::io::Write;
use std::process::{Command, Stdio};

struct ClipboardTool {
    program: &'static str,
    args: &'static [&'static str],
}

/// Pick the clipboard writer for this platform: pbcopy on macOS, wl-copy
/// under Wayland, xclip otherwise.
fn clipboard_tool() -> ClipboardTool {
    #[cfg(target_os = "macos")]
    {
        ClipboardTool {
            program: "pbcopy",
            args: &[],
        }
    }

    #[cfg(not(target_os = "macos"))]
    {
        let wayland = std::env::var("XDG_SESSION_TYPE")
            .map(|s| s == "wayland")
            .unwrap_or(false);
        if wayland {
            ClipboardTool {
                program: "wl-copy",
                args: &[],
            }
        } else {
            ClipboardTool {
                program: "xclip",
                args: &["-selection", "clipboard"],
            }
        }
    }
}

/// Copy text to the system clipboard by piping it to the platform tool.
pub fn copy_to_clipboard(text: &str) -> Result<(), Box<dyn std::error::Error>> {
    let tool = clipboard_tool();

    let mut child = Command::new(tool.program)
        .args(tool.args)
        .stdin(Stdio::piped())
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .spawn()
        .map_err(|e| format!("Failed to spawn {}: {e}", tool.program))?;

    child
        .stdin
        .as_mut()
        .ok_or("Clipboard process has no stdin")?
        .write_all(text.as_bytes())?;

    let status = child.wait()?;
    if !status.success() {
        return Err(format!("{} exited with status {status}", tool.program).into());
    }

    Ok(())
}
