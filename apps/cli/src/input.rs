use std::fs::File;
use std::io::{BufRead, Write};
use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use log::debug;

pub const PROMPT: &str = "Please enter the file name: ";
pub const RETRY_MESSAGE: &str = "Bad file name entered.";

/// Open a regular file for reading.
pub fn open_input(path: &Path) -> std::io::Result<File> {
    if path.is_dir() {
        return Err(std::io::Error::new(
            std::io::ErrorKind::InvalidInput,
            format!("{} is a directory", path.display()),
        ));
    }
    File::open(path)
}

/// Ask for a file name on `out` until one opens. Fails only when `input` runs
/// dry or the terminal itself errors.
pub fn prompt_for_file<R: BufRead, W: Write>(mut input: R, mut out: W) -> Result<(PathBuf, File)> {
    loop {
        write!(out, "{}", PROMPT)?;
        out.flush()?;

        let mut name = String::new();
        let read = input
            .read_line(&mut name)
            .context("Failed to read file name")?;
        if read == 0 {
            bail!("No file name entered");
        }

        let path = PathBuf::from(name.trim());
        match open_input(&path) {
            Ok(file) => return Ok((path, file)),
            Err(e) => {
                debug!("could not open '{}': {}", path.display(), e);
                writeln!(out, "{}", RETRY_MESSAGE)?;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn test_prompt_retries_until_file_opens() {
        let file = tempfile::NamedTempFile::new().unwrap();
        let dir = tempfile::tempdir().unwrap();
        let answers = format!(
            "no/such/file.gb\n{}\n  {}  \n",
            dir.path().display(),
            file.path().display()
        );

        let mut out = Vec::new();
        let (path, _file) = prompt_for_file(Cursor::new(answers), &mut out).unwrap();
        assert_eq!(path, file.path());

        let shown = String::from_utf8(out).unwrap();
        assert_eq!(shown.matches(PROMPT).count(), 3);
        assert_eq!(shown.matches(RETRY_MESSAGE).count(), 2);
    }

    #[test]
    fn test_prompt_fails_at_end_of_input() {
        let mut out = Vec::new();
        let err = prompt_for_file(Cursor::new("missing.gb\n"), &mut out).unwrap_err();
        assert_eq!(err.to_string(), "No file name entered");
    }
}
