pub mod document;
pub mod xml;

use crate::{
    error::{DocumentRole, MergeError},
    Merger,
};
use document::UrdfDocument;
use std::path::Path;

impl Merger {
    /// Open and parse one input document
    pub(crate) fn parse_file<P: AsRef<Path>>(
        path: P,
        role: DocumentRole,
    ) -> Result<UrdfDocument, MergeError> {
        let path = path.as_ref();
        let file = std::fs::File::open(path).map_err(|source| MergeError::Read {
            role,
            path: path.to_path_buf(),
            source,
        })?;
        UrdfDocument::parse(std::io::BufReader::new(file), role)
    }

    pub(crate) fn serialize(doc: &UrdfDocument) -> Result<String, MergeError> {
        let mut writer = Vec::new();
        doc.write(&mut writer)?;
        Ok(String::from_utf8(writer)?)
    }
}
