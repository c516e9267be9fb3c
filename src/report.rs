use crate::merger::attachment::Origin;
use core::fmt;
use std::path::PathBuf;

/// What happened to one gripper element during the copy phase
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CopyAction {
    Added(String),
    Skipped(String),
}

impl CopyAction {
    pub fn name(&self) -> &str {
        match self {
            CopyAction::Added(name) | CopyAction::Skipped(name) => name,
        }
    }

    pub fn is_added(&self) -> bool {
        matches!(self, CopyAction::Added(_))
    }
}

/// Record of a single merge, used for the console summary.
///
/// `Display` renders the progress narrative from the gripper analysis down
/// to the link listing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MergeReport {
    /// Where the combined document was written (`None` for in-memory merges)
    pub output: Option<PathBuf>,
    /// Shared frame name the gripper was probed for
    pub mount_frame: String,
    /// Robot link the gripper hangs off
    pub attach_link: String,
    /// Gripper link the synthesized joint points at
    pub gripper_base_link: String,
    /// Gripper link dropped because the robot already owns it
    pub duplicate_link: Option<String>,
    /// Gripper joint that linked the mount frame to the gripper body
    pub mount_joint: Option<String>,
    /// Offset read from the mount joint's `<origin>`, when it had one
    pub captured_offset: Option<Origin>,
    /// Offset written on the synthesized joint
    pub origin: Origin,
    pub links: Vec<CopyAction>,
    pub joints: Vec<CopyAction>,
    pub transmissions: usize,
    pub gazebo: usize,
    pub attachment_joint: String,
    /// Every link of the combined robot, in document order
    pub link_names: Vec<String>,
    pub joint_count: usize,
}

impl MergeReport {
    pub fn link_count(&self) -> usize {
        self.link_names.len()
    }

    pub fn added_links(&self) -> impl Iterator<Item = &str> {
        self.links
            .iter()
            .filter(|a| a.is_added())
            .map(CopyAction::name)
    }

    pub fn added_joints(&self) -> impl Iterator<Item = &str> {
        self.joints
            .iter()
            .filter(|a| a.is_added())
            .map(CopyAction::name)
    }

    pub fn skipped_joints(&self) -> impl Iterator<Item = &str> {
        self.joints
            .iter()
            .filter(|a| !a.is_added())
            .map(CopyAction::name)
    }
}

impl fmt::Display for MergeReport {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        writeln!(f, "\nAnalyzing gripper structure...")?;
        if let Some(dup) = &self.duplicate_link {
            writeln!(
                f,
                "  Found duplicate root link '{}' - will skip and attach directly",
                dup
            )?;
        }
        if self.mount_joint.is_some() {
            writeln!(
                f,
                "  First gripper link after {}: '{}'",
                self.mount_frame, self.gripper_base_link
            )?;
        }

        writeln!(f, "\nAdding gripper links...")?;
        for link in self.added_links() {
            writeln!(f, "  Adding link: {}", link)?;
        }

        writeln!(f, "\nAdding gripper joints...")?;
        for action in &self.joints {
            match action {
                CopyAction::Added(name) => writeln!(f, "  Adding joint: {}", name)?,
                CopyAction::Skipped(name) => writeln!(
                    f,
                    "  Skipping joint '{}' (connects to duplicate {})",
                    name, self.mount_frame
                )?,
            }
        }

        writeln!(f, "\nCreating attachment joint...")?;
        writeln!(
            f,
            "  Connecting robot '{}' to gripper '{}'",
            self.attach_link, self.gripper_base_link
        )?;
        if let Some(offset) = &self.captured_offset {
            writeln!(
                f,
                "  Using original gripper mounting offset: xyz='{}' rpy='{}'",
                offset.xyz, offset.rpy
            )?;
        }

        if let Some(output) = &self.output {
            writeln!(f, "\n✅ Combined URDF written to: {}", output.display())?;
        }

        writeln!(f, "\nCombined URDF statistics:")?;
        writeln!(f, "  Total links: {}", self.link_count())?;
        writeln!(f, "  Total joints: {}", self.joint_count)?;

        writeln!(f, "\nAll links in combined URDF:")?;
        for name in &self.link_names {
            writeln!(f, "    - {}", name)?;
        }
        Ok(())
    }
}
