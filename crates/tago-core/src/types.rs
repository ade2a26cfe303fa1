use serde::{Deserialize, Serialize};
use std::path::PathBuf;

// ── Parser Output ───────────────────────────────────────────────────────────

/// An identifier as reported by the parser, with its position in the file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Ident {
    pub name: String,
    /// 1-based line number.
    pub line: usize,
    /// 0-based byte offset of the identifier within the file.
    pub byte_offset: usize,
}

impl Ident {
    pub fn new(name: impl Into<String>, line: usize, byte_offset: usize) -> Self {
        Self {
            name: name.into(),
            line,
            byte_offset,
        }
    }

    /// The blank identifier `_` declares nothing and never becomes a tag.
    pub fn is_placeholder(&self) -> bool {
        self.name == "_"
    }
}

/// A single top-level declaration of a parsed file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TopLevelDecl {
    /// A function or method declaration.
    Function(Ident),
    /// One type spec (a grouped `type (...)` block yields one per spec).
    Type(Ident),
    /// One `var`/`const` spec; carries every declared name in source order.
    Value(Vec<Ident>),
    /// Anything else at top level (package clause, imports, comments).
    Other(String),
}

/// Everything the parser reports about one file.
#[derive(Debug, Clone)]
pub struct DeclarationTree {
    /// Path of the parsed file, exactly as it was given to the parser.
    pub file_path: String,
    /// Top-level declarations in source order.
    pub decls: Vec<TopLevelDecl>,
}

// ── Declarations ────────────────────────────────────────────────────────────

/// What kind of declaration produced a tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeclKind {
    Function,
    Type,
    Value,
}

/// One declared identifier that becomes exactly one tag.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Declaration {
    pub kind: DeclKind,
    pub name: String,
    pub file: PathBuf,
    /// 1-based line number.
    pub line: usize,
    /// 0-based byte offset of the name within `file`.
    pub byte_offset: usize,
}

impl Declaration {
    pub fn from_ident(kind: DeclKind, file: impl Into<PathBuf>, ident: &Ident) -> Self {
        Self {
            kind,
            name: ident.name.clone(),
            file: file.into(),
            line: ident.line,
            byte_offset: ident.byte_offset,
        }
    }
}

// ── Policies ────────────────────────────────────────────────────────────────

/// How the tags file is written to its destination.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WritePolicy {
    /// Refuse to touch an existing file.
    #[default]
    CreateOnly,
    /// Add to the end of the file, creating it if needed.
    Append,
    /// Replace whatever is there.
    Overwrite,
}

impl std::fmt::Display for WritePolicy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::CreateOnly => write!(f, "create_only"),
            Self::Append => write!(f, "append"),
            Self::Overwrite => write!(f, "overwrite"),
        }
    }
}

/// What to do when a declaration's line cannot be read back from its file.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LineErrorPolicy {
    /// Drop the record and keep going.
    #[default]
    Skip,
    /// Fail the whole run.
    Abort,
}

/// Byte layout of a single tag record.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RecordLayout {
    /// `<line text><name><line>,<offset>` with no delimiters.
    #[default]
    Legacy,
    /// `<line text>\x7f<name>\x01<line>,<offset>`, as GNU etags writes it.
    Etags,
}
