use crate::error::{CntknError, Result};
use std::fs;
use std::io::{self, IsTerminal, Read};
use std::path::PathBuf;
use tracing::debug;

pub const STDIN_LABEL: &str = "stdin";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InputItem {
    pub label: String,
    pub text: String,
}

impl InputItem {
    fn new(label: impl Into<String>, text: impl Into<String>) -> Self {
        InputItem {
            label: label.into(),
            text: text.into(),
        }
    }
}

pub trait StdinSource {
    fn is_terminal(&self) -> bool;
    fn read_all(&mut self) -> io::Result<String>;
}

/// The process's real standard input.
#[derive(Debug, Default)]
pub struct ProcessStdin;

impl StdinSource for ProcessStdin {
    fn is_terminal(&self) -> bool {
        io::stdin().is_terminal()
    }

    fn read_all(&mut self) -> io::Result<String> {
        let mut buf = String::new();
        io::stdin().read_to_string(&mut buf)?;
        Ok(buf)
    }
}

/// In-memory stdin for tests. Drains on first read like a real stream.
#[derive(Debug, Default)]
pub struct MockStdin {
    data: String,
    terminal: bool,
    pub reads: usize,
}

impl MockStdin {
    pub fn piped(data: &str) -> Self {
        MockStdin {
            data: data.to_string(),
            terminal: false,
            reads: 0,
        }
    }

    pub fn terminal() -> Self {
        MockStdin {
            data: String::new(),
            terminal: true,
            reads: 0,
        }
    }
}

impl StdinSource for MockStdin {
    fn is_terminal(&self) -> bool {
        self.terminal
    }

    fn read_all(&mut self) -> io::Result<String> {
        self.reads += 1;
        Ok(std::mem::take(&mut self.data))
    }
}

/// Resolve `(label, text)` pairs: files first, then inline arguments (`-`
/// meaning stdin), then piped stdin if nothing else was given. Stdin is read
/// at most once; later `-` arguments see the drained stream.
pub fn resolve_inputs(
    inline: &[String],
    files: &[PathBuf],
    stdin: &mut dyn StdinSource,
) -> Result<Vec<InputItem>> {
    let mut items = Vec::with_capacity(files.len() + inline.len());
    let mut stdin_consumed = false;

    for path in files {
        let text = fs::read_to_string(path).map_err(|source| CntknError::FileRead {
            path: path.clone(),
            source,
        })?;
        items.push(InputItem::new(path.display().to_string(), text));
    }

    for arg in inline {
        if arg == "-" {
            let text = if stdin_consumed {
                String::new()
            } else {
                stdin_consumed = true;
                stdin.read_all().map_err(CntknError::Stdin)?
            };
            items.push(InputItem::new(STDIN_LABEL, text));
        } else {
            items.push(InputItem::new(arg.as_str(), arg.as_str()));
        }
    }

    if items.is_empty() && !stdin.is_terminal() {
        let text = stdin.read_all().map_err(CntknError::Stdin)?;
        if !text.is_empty() {
            items.push(InputItem::new(STDIN_LABEL, text));
        }
    }

    debug!(count = items.len(), "resolved inputs");
    Ok(items)
}
