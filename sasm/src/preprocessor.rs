//! Textual preprocessor run before assembly.
//!
//! Two directives are recognized:
//!
//! - `#define NAME VALUE` defines a macro; on every following line, `NAME`
//!   is substituted as a whole token.
//! - `#include "PATH"` splices another file in, searched for in the
//!   including file's directory first and then in the configured include
//!   paths. A file is only ever included once, so recursive and repeated
//!   includes are silently skipped.
//!
//! Any other directive starting with `#` is an error.

use std::collections::{HashMap, HashSet};
use std::fmt;
use std::fs;
use std::io;
use std::mem;
use std::path::{Path, PathBuf};

#[derive(Debug)]
pub enum Error {
    Io(PathBuf, io::Error),
    InvalidInclude(String),
    IncludeNotFound(String),
    UnknownDirective(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Error::Io(path, err) => {
                write!(f, "Reading file \"{}\" failed: {}", path.display(), err)
            }
            Error::InvalidInclude(line) => write!(f, "Invalid include directive: {}", line),
            Error::IncludeNotFound(name) => write!(f, "Included file not found: {}", name),
            Error::UnknownDirective(line) => write!(f, "Unknown directive: {}", line),
        }
    }
}

impl std::error::Error for Error {}

/// Expands `#define` and `#include` directives in a source file.
pub struct Preprocessor {
    macros: HashMap<String, String>,
    include_paths: Vec<PathBuf>,
    processed: HashSet<PathBuf>,
    output: String,
}

impl Preprocessor {
    pub fn new(include_paths: Vec<PathBuf>) -> Preprocessor {
        Preprocessor {
            macros: HashMap::new(),
            include_paths,
            processed: HashSet::new(),
            output: String::new(),
        }
    }

    /// Processes the given file and returns the expanded text.
    pub fn preprocess<P: AsRef<Path>>(&mut self, path: P) -> Result<String, Error> {
        self.processed.clear();
        self.output.clear();

        let path = path.as_ref();
        let abs = path
            .canonicalize()
            .map_err(|err| Error::Io(path.to_path_buf(), err))?;
        self.process_file(&abs)?;

        Ok(mem::replace(&mut self.output, String::new()))
    }

    fn process_file(&mut self, abs: &Path) -> Result<(), Error> {
        if !self.processed.insert(abs.to_path_buf()) {
            return Ok(());
        }

        let text = fs::read_to_string(abs).map_err(|err| Error::Io(abs.to_path_buf(), err))?;

        for line in text.lines() {
            let stripped = line.trim_start();
            if stripped.starts_with("#define ") {
                let rest = &stripped["#define ".len()..];
                let mut parts = rest.trim_start().splitn(2, char::is_whitespace);
                if let Some(name) = parts.next().filter(|name| !name.is_empty()) {
                    let value = parts.next().unwrap_or("").to_owned();
                    self.macros.insert(name.to_owned(), value);
                }
            } else if stripped.starts_with("#include") {
                let name = parse_include(stripped)
                    .ok_or_else(|| Error::InvalidInclude(line.to_owned()))?;
                self.process_include(abs, &name)?;
            } else if stripped.starts_with('#') {
                return Err(Error::UnknownDirective(line.to_owned()));
            } else {
                let expanded = self.expand(line);
                self.output.push_str(&expanded);
                self.output.push('\n');
            }
        }

        Ok(())
    }

    fn process_include(&mut self, including: &Path, name: &str) -> Result<(), Error> {
        let base_dir = including.parent().unwrap_or_else(|| Path::new(""));
        let search_dirs =
            std::iter::once(base_dir.to_path_buf()).chain(self.include_paths.iter().cloned());

        for dir in search_dirs {
            let candidate = dir.join(name);
            if candidate.is_file() {
                let abs = candidate
                    .canonicalize()
                    .map_err(|err| Error::Io(candidate, err))?;
                return self.process_file(&abs);
            }
        }

        Err(Error::IncludeNotFound(name.to_owned()))
    }

    /// Substitutes macros as whole tokens, leaving partial matches alone.
    fn expand(&self, line: &str) -> String {
        let mut output = String::with_capacity(line.len());
        let mut token = String::new();

        for ch in line.chars() {
            if ch.is_alphanumeric() || ch == '_' {
                token.push(ch);
            } else {
                self.flush_token(&mut output, &mut token);
                output.push(ch);
            }
        }
        self.flush_token(&mut output, &mut token);

        output
    }

    fn flush_token(&self, output: &mut String, token: &mut String) {
        if token.is_empty() {
            return;
        }
        match self.macros.get(token.as_str()) {
            Some(value) => output.push_str(value),
            None => output.push_str(token),
        }
        token.clear();
    }
}

fn parse_include(stripped: &str) -> Option<String> {
    let rest = stripped["#include".len()..].trim_start();
    if !rest.starts_with('"') {
        return None;
    }
    let rest = &rest[1..];
    let end = rest.find('"')?;
    if end == 0 {
        return None;
    }
    Some(rest[..end].to_owned())
}
