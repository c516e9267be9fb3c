use core::fmt;
use std::path::PathBuf;

/// Which of the two input documents an error refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentRole {
    Robot,
    Gripper,
}

impl DocumentRole {
    pub fn as_str(self) -> &'static str {
        match self {
            DocumentRole::Robot => "robot",
            DocumentRole::Gripper => "gripper",
        }
    }

    /// Capitalized form used at the start of messages
    pub fn title(self) -> &'static str {
        match self {
            DocumentRole::Robot => "Robot",
            DocumentRole::Gripper => "Gripper",
        }
    }
}

impl fmt::Display for DocumentRole {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, thiserror::Error)]
pub enum MergeError {
    #[error("{} URDF not found: {}", .role.title(), .path.display())]
    FileNotFound { role: DocumentRole, path: PathBuf },

    #[error("Failed to read {role} URDF '{}': {source}", .path.display())]
    Read {
        role: DocumentRole,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse {role} URDF: {source}")]
    DocumentParse {
        role: DocumentRole,
        #[source]
        source: xmltree::ParseError,
    },

    #[error("No robot element found in {role} URDF")]
    MalformedDocument { role: DocumentRole },

    #[error("Failed to write combined URDF '{}': {source}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("XML write error: {0}")]
    XmlWrite(#[from] xmltree::Error),

    #[error("UTF-8 conversion error: {0}")]
    Utf8(#[from] std::string::FromUtf8Error),
}

impl MergeError {
    /// The input document the error is about, if any
    pub fn role(&self) -> Option<DocumentRole> {
        match self {
            MergeError::FileNotFound { role, .. }
            | MergeError::Read { role, .. }
            | MergeError::DocumentParse { role, .. }
            | MergeError::MalformedDocument { role } => Some(*role),
            MergeError::Write { .. }
            | MergeError::Io(_)
            | MergeError::XmlWrite(_)
            | MergeError::Utf8(_) => None,
        }
    }
}
