use std::{
    fs,
    path::{Path, PathBuf},
};

use serde::{Deserialize, Serialize};

use crate::{ast::Stmt, error::PersistError};

/// Format version written into every compiled program.
pub const FORMAT_VERSION: u32 = 1;

/// File extension of compiled programs.
pub const EXTENSION: &str = "bsl";

#[derive(Serialize)]
struct EnvelopeRef<'a> {
    version:    u32,
    statements: &'a [Stmt],
}

/// The statements stay undecoded until the version has been checked, so a
/// file from another format version reports the version, not a shape error.
#[derive(Deserialize)]
struct Envelope {
    version:    u32,
    statements: serde_json::Value,
}

/// Serializes a program into its compiled JSON form.
///
/// # Example
/// ```
/// use bsl::{
///     ast::{Expr, Stmt},
///     persist::{from_str, to_string},
/// };
///
/// let program = vec![Stmt::Print { expr:    Expr::Literal { value: "hi".into(),
///                                                            line:  1, },
///                                  newline: true, }];
///
/// let text = to_string(&program).unwrap();
/// assert_eq!(from_str(&text).unwrap(), program);
/// ```
pub fn to_string(program: &[Stmt]) -> Result<String, PersistError> {
    let envelope = EnvelopeRef { version:    FORMAT_VERSION,
                                 statements: program, };
    Ok(serde_json::to_string_pretty(&envelope)?)
}

/// Reads a program back from its compiled JSON form.
///
/// # Errors
/// - `PersistError::UnsupportedVersion` for any version but
///   [`FORMAT_VERSION`].
/// - `PersistError::Format` if the text is not a compiled program.
pub fn from_str(text: &str) -> Result<Vec<Stmt>, PersistError> {
    let envelope: Envelope = serde_json::from_str(text)?;
    if envelope.version != FORMAT_VERSION {
        return Err(PersistError::UnsupportedVersion { found:    envelope.version,
                                                      expected: FORMAT_VERSION, });
    }
    Ok(serde_json::from_value(envelope.statements)?)
}

/// Writes a compiled program to `path`.
pub fn save(path: &Path, program: &[Stmt]) -> Result<(), PersistError> {
    let text = to_string(program)?;
    fs::write(path, text).map_err(|source| PersistError::Io { path: path.to_path_buf(),
                                                              source })?;
    tracing::debug!(path = %path.display(), statements = program.len(), "saved compiled program");
    Ok(())
}

/// Loads a compiled program from `path`.
pub fn load(path: &Path) -> Result<Vec<Stmt>, PersistError> {
    let text = fs::read_to_string(path).map_err(|source| PersistError::Io { path: path.to_path_buf(),
                                                                            source })?;
    let program = from_str(&text)?;
    tracing::debug!(path = %path.display(), statements = program.len(), "loaded compiled program");
    Ok(program)
}

/// Where the compiled form of `source` is written: the same path with the
/// extension replaced by [`EXTENSION`].
///
/// Returns `None` if `source` already carries that extension, since
/// compiling it would overwrite the file being read.
///
/// ```
/// use std::path::Path;
///
/// use bsl::persist::compiled_path;
///
/// assert_eq!(compiled_path(Path::new("demo/loop.bs")).unwrap(), Path::new("demo/loop.bsl"));
/// assert_eq!(compiled_path(Path::new("script")).unwrap(), Path::new("script.bsl"));
/// assert_eq!(compiled_path(Path::new("demo/loop.bsl")), None);
/// ```
#[must_use]
pub fn compiled_path(source: &Path) -> Option<PathBuf> {
    if source.extension().is_some_and(|ext| ext == EXTENSION) {
        return None;
    }
    Some(source.with_extension(EXTENSION))
}
