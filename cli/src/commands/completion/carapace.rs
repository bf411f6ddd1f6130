//! # Food Truck CLI Carapace Integration (`commands::completion::carapace`)
//!
//! File: cli/src/commands/completion/carapace.rs
//! Repository: https://github.com/foodtruck-project/foodtruck-cli
//!
//! ## Overview
//!
//! The completion machinery built on carapace-bin: the embedded command
//! spec, its installation into carapace's platform config directory, and
//! the marker-bounded block of setup commands written into the user's
//! shell startup file.
//!
//! The block in the startup file is bounded by a recognizable marker
//! pair so it can be removed exactly, leaving every unrelated line in
//! the file untouched:
//!
//! ```text
//! # >>> foodtruck completion >>>
//! ...setup commands...
//! # <<< foodtruck completion <<<
//! ```
//!
//! All content transformations here are pure string functions over file
//! contents; the command handlers in `mod.rs` do the actual I/O.
//!
use crate::common::fs;
use crate::common::shell::Shell;
use crate::core::error::Result;
use anyhow::Context;
use std::path::{Path, PathBuf};

/// First line of the managed block in a shell startup file.
pub const BLOCK_START: &str = "# >>> foodtruck completion >>>";
/// Last line of the managed block.
pub const BLOCK_END: &str = "# <<< foodtruck completion <<<";

/// The carapace command spec shipped inside the binary.
const SPEC_CONTENT: &str = include_str!("foodtruck.yaml");

/// Name of the spec file inside carapace's specs directory.
const SPEC_FILE_NAME: &str = "foodtruck.yaml";

/// Carapace's specs directory on this platform
/// (`~/.config/carapace/specs` on Unix, `%APPDATA%\carapace\specs` on
/// Windows).
pub fn spec_dir() -> Result<PathBuf> {
    let config = dirs::config_dir().context("Could not find the user configuration directory")?;
    Ok(config.join("carapace").join("specs"))
}

/// Writes the embedded spec into `dir`, returning the written path.
pub fn install_spec(dir: &Path) -> Result<PathBuf> {
    let spec_path = dir.join(SPEC_FILE_NAME);
    fs::write_string_to_file(&spec_path, SPEC_CONTENT)?;
    Ok(spec_path)
}

/// Removes the installed spec file, if any.
pub fn remove_spec(dir: &Path) -> Result<bool> {
    let spec_path = dir.join(SPEC_FILE_NAME);
    if spec_path.exists() {
        std::fs::remove_file(&spec_path)
            .with_context(|| format!("Failed to remove spec file {spec_path:?}"))?;
        Ok(true)
    } else {
        Ok(false)
    }
}

/// The setup commands for `shell`, pointing at the given carapace
/// executable. These are the lines placed between the block markers.
pub fn setup_snippet(shell: Shell, carapace_path: &Path) -> String {
    let carapace = carapace_path.display();
    match shell {
        Shell::Bash => format!("source <({carapace} _carapace)"),
        Shell::Zsh => format!(
            "export CARAPACE_BRIDGES='zsh,fish,bash,inshellisense'\n\
             zstyle ':completion:*' format $'\\e[2;37mCompleting %d\\e[m'\n\
             source <({carapace} _carapace)"
        ),
        Shell::Fish => format!(
            "set -Ux CARAPACE_BRIDGES 'zsh,fish,bash,inshellisense'\n\
             {carapace} _carapace | source"
        ),
        Shell::Powershell => format!(
            "$env:CARAPACE_BRIDGES = 'zsh,fish,bash,inshellisense'\n\
             Set-PSReadlineKeyHandler -Key Tab -Function MenuComplete\n\
             {carapace} _carapace | Out-String | Invoke-Expression"
        ),
    }
}

/// Whether `content` already carries the managed block.
pub fn has_block(content: &str) -> bool {
    content.lines().any(|line| line.trim() == BLOCK_START)
}

/// Appends the marker-bounded block to `content`. Idempotent: content
/// that already carries the block is returned unchanged.
pub fn append_block(content: &str, snippet: &str) -> String {
    if has_block(content) {
        return content.to_string();
    }
    let mut out = content.to_string();
    if !out.is_empty() && !out.ends_with('\n') {
        out.push('\n');
    }
    out.push_str(BLOCK_START);
    out.push('\n');
    out.push_str(snippet);
    out.push('\n');
    out.push_str(BLOCK_END);
    out.push('\n');
    out
}

/// Removes the marker-bounded block from `content`, preserving every
/// line outside the markers verbatim. Content without a block is
/// returned unchanged.
pub fn remove_block(content: &str) -> String {
    let mut out = String::new();
    let mut in_block = false;
    for line in content.lines() {
        let trimmed = line.trim();
        if trimmed == BLOCK_START {
            in_block = true;
            continue;
        }
        if trimmed == BLOCK_END {
            in_block = false;
            continue;
        }
        if !in_block {
            out.push_str(line);
            out.push('\n');
        }
    }
    // An input without a trailing newline keeps that shape.
    if !content.ends_with('\n') && out.ends_with('\n') {
        out.pop();
    }
    out
}

// --- Unit Tests ---
#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    const SNIPPET: &str = "source <(/usr/bin/carapace _carapace)";

    /// Append adds exactly one marker-bounded block at the end.
    #[test]
    fn test_append_block() {
        let before = "alias ll='ls -l'\n";
        let after = append_block(before, SNIPPET);
        assert!(after.starts_with(before));
        assert!(after.contains(BLOCK_START));
        assert!(after.contains(SNIPPET));
        assert!(after.ends_with(&format!("{BLOCK_END}\n")));
    }

    /// Appending twice changes nothing the second time.
    #[test]
    fn test_append_block_idempotent() {
        let once = append_block("alias ll='ls -l'\n", SNIPPET);
        let twice = append_block(&once, SNIPPET);
        assert_eq!(once, twice);
    }

    /// Install then remove restores the original file byte for byte,
    /// with no marker or carapace lines remaining.
    #[test]
    fn test_block_round_trip() {
        let original = "export EDITOR=vim\nalias ll='ls -l'\n\n# unrelated comment\n";
        let installed = append_block(original, SNIPPET);
        let restored = remove_block(&installed);
        assert_eq!(restored, original);
        assert!(!restored.contains("carapace"));
        assert!(!restored.contains(BLOCK_START));
    }

    /// Removal only touches the block; lines before and after survive.
    #[test]
    fn test_remove_block_preserves_surrounding_lines() {
        let content = format!(
            "before\n{BLOCK_START}\n{SNIPPET}\n{BLOCK_END}\nafter\n"
        );
        assert_eq!(remove_block(&content), "before\nafter\n");
    }

    /// Content without a block passes through unchanged.
    #[test]
    fn test_remove_block_without_block() {
        let content = "just\nsome\nlines\n";
        assert_eq!(remove_block(content), content);
        let no_newline = "no trailing newline";
        assert_eq!(remove_block(no_newline), no_newline);
    }

    /// Each shell snippet invokes carapace's completion export.
    #[test]
    fn test_setup_snippets_reference_carapace() {
        let path = Path::new("/opt/carapace");
        for shell in [Shell::Bash, Shell::Zsh, Shell::Fish, Shell::Powershell] {
            let snippet = setup_snippet(shell, path);
            assert!(snippet.contains("/opt/carapace _carapace"), "{shell}");
        }
    }

    /// Spec install writes the embedded yaml; remove deletes it and
    /// reports whether anything was there.
    #[test]
    fn test_spec_install_and_remove() {
        let dir = tempdir().unwrap();
        let path = install_spec(dir.path()).unwrap();
        assert_eq!(path, dir.path().join("foodtruck.yaml"));
        let written = std::fs::read_to_string(&path).unwrap();
        assert!(written.contains("name: foodtruck"));

        assert!(remove_spec(dir.path()).unwrap());
        assert!(!path.exists());
        assert!(!remove_spec(dir.path()).unwrap());
    }
}
