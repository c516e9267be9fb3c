//! UrdfDocument - the `robot` element of a parsed URDF file
//!

use crate::error::{DocumentRole, MergeError};
use crate::utils::xml::{attr, child_elements, take_robot_element};
use std::io::Write;
use xmltree::Element;

/// A parsed URDF document, reduced to its `robot` element.
///
/// Anything outside the `robot` element (wrapper elements, comments and
/// processing instructions before the root) is dropped on parse; the
/// merged output is written as a fresh document around the robot element.
#[derive(Debug, Clone)]
pub struct UrdfDocument {
    pub robot: Element,
}

impl UrdfDocument {
    /// Parse a URDF document and resolve its `robot` element
    ///
    /// # Errors
    ///
    /// - `DocumentParse` if the XML is malformed
    /// - `MalformedDocument` if no `robot` element exists anywhere in the tree
    pub fn parse<R: std::io::Read>(
        reader: R,
        role: DocumentRole,
    ) -> Result<Self, MergeError> {
        let root =
            Element::parse(reader).map_err(|source| MergeError::DocumentParse { role, source })?;

        if root.name != crate::utils::xml::ROBOT_TAG {
            log::debug!(
                "{} document root is <{}>, searching descendants for <robot>",
                role.title(),
                root.name
            );
        }

        let robot = take_robot_element(root).ok_or(MergeError::MalformedDocument { role })?;
        Ok(UrdfDocument { robot })
    }

    /// Robot `name` attribute, if present
    pub fn name(&self) -> Option<&str> {
        attr(&self.robot, "name")
    }

    /// Direct children of the robot element with the given tag
    pub fn elements<'a>(
        &'a self,
        tag: &'a str,
    ) -> impl Iterator<Item = &'a Element> + 'a {
        child_elements(&self.robot, tag)
    }

    pub fn links(&self) -> impl Iterator<Item = &Element> {
        self.elements("link")
    }

    pub fn joints(&self) -> impl Iterator<Item = &Element> {
        self.elements("joint")
    }

    /// Names of all links in document order (unnamed links are skipped)
    pub fn link_names(&self) -> Vec<String> {
        self.links()
            .filter_map(|link| attr(link, "name"))
            .map(str::to_string)
            .collect()
    }

    /// Write the document
    ///
    /// Output format:
    /// 1. XML declaration: `<?xml version="1.0" encoding="utf-8"?>`
    /// 2. Robot element, indented with two spaces
    /// 3. Trailing newline
    pub fn write<W: Write>(
        &self,
        writer: &mut W,
    ) -> Result<(), MergeError> {
        writeln!(writer, r#"<?xml version="1.0" encoding="utf-8"?>"#)?;

        self.robot.write_with_config(
            &mut *writer,
            xmltree::EmitterConfig::new()
                .perform_indent(true)
                .write_document_declaration(false) // Already wrote it
                .indent_string("  ")
                .pad_self_closing(false),
        )?;

        writeln!(writer)?;
        Ok(())
    }
}
