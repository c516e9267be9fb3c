pub mod attachment;

use crate::{
    error::{DocumentRole, MergeError},
    report::{CopyAction, MergeReport},
    utils::{
        document::UrdfDocument,
        xml::{attr, element_with_attrs, joint_link_ref, set_attr},
    },
};
use attachment::AttachmentProbe;
use std::path::Path;
use xmltree::{Element, XMLNode};

/// Robot link the gripper is bolted onto (UR tool flange)
pub const DEFAULT_ATTACH_LINK: &str = "tool0";
/// Frame name both documents share by convention
pub const DEFAULT_MOUNT_FRAME: &str = "tool0";
/// Gripper base link used when probing finds no mount joint
pub const DEFAULT_GRIPPER_BASE_LINK: &str = "robotiq_hande_coupler";
pub const DEFAULT_JOINT_NAME: &str = "tool0_to_hande_gripper";
pub const DEFAULT_COMBINED_NAME: &str = "ur10e_with_hande";

pub struct Merger {
    attach_link: String,
    gripper_base_link: String,
    mount_frame: String,
    joint_name: String,
    combined_name: String,
}

/// Builder for configuring a [`Merger`]
///
/// # Example
///
/// ```
/// use urdf_merge::Merger;
///
/// let merger = Merger::builder()
///     .with_attach_link("flange")
///     .with_combined_name("arm_with_gripper")
///     .build();
/// assert_eq!(merger.attach_link(), "flange");
/// ```
pub struct MergerBuilder {
    attach_link: String,
    gripper_base_link: String,
    mount_frame: String,
    joint_name: String,
    combined_name: String,
}

impl MergerBuilder {
    fn new() -> Self {
        Self {
            attach_link: DEFAULT_ATTACH_LINK.into(),
            gripper_base_link: DEFAULT_GRIPPER_BASE_LINK.into(),
            mount_frame: DEFAULT_MOUNT_FRAME.into(),
            joint_name: DEFAULT_JOINT_NAME.into(),
            combined_name: DEFAULT_COMBINED_NAME.into(),
        }
    }

    /// Robot link to attach the gripper to
    pub fn with_attach_link(
        mut self,
        link: impl Into<String>,
    ) -> Self {
        self.attach_link = link.into();
        self
    }

    /// Gripper base link hint; a successful probe overrides it
    pub fn with_gripper_base_link(
        mut self,
        link: impl Into<String>,
    ) -> Self {
        self.gripper_base_link = link.into();
        self
    }

    /// Frame name whose gripper-side link and joints are dropped
    pub fn with_mount_frame(
        mut self,
        frame: impl Into<String>,
    ) -> Self {
        self.mount_frame = frame.into();
        self
    }

    pub fn with_joint_name(
        mut self,
        name: impl Into<String>,
    ) -> Self {
        self.joint_name = name.into();
        self
    }

    pub fn with_combined_name(
        mut self,
        name: impl Into<String>,
    ) -> Self {
        self.combined_name = name.into();
        self
    }

    pub fn build(self) -> Merger {
        Merger {
            attach_link: self.attach_link,
            gripper_base_link: self.gripper_base_link,
            mount_frame: self.mount_frame,
            joint_name: self.joint_name,
            combined_name: self.combined_name,
        }
    }
}

impl Merger {
    #[allow(clippy::new_without_default)]
    pub fn new() -> Self {
        Self::builder().build()
    }

    pub fn builder() -> MergerBuilder {
        MergerBuilder::new()
    }

    pub fn attach_link(&self) -> &str {
        &self.attach_link
    }

    pub fn gripper_base_link(&self) -> &str {
        &self.gripper_base_link
    }

    /// Fail with `FileNotFound` unless both inputs exist
    pub fn check_inputs<R: AsRef<Path>, G: AsRef<Path>>(
        robot: R,
        gripper: G,
    ) -> Result<(), MergeError> {
        for (path, role) in [
            (robot.as_ref(), DocumentRole::Robot),
            (gripper.as_ref(), DocumentRole::Gripper),
        ] {
            if !path.exists() {
                return Err(MergeError::FileNotFound {
                    role,
                    path: path.to_path_buf(),
                });
            }
        }
        Ok(())
    }

    /// Merge two URDF files and write the result to `output`
    ///
    /// A failed write may leave a partial file behind.
    pub fn run<R, G, O>(
        &self,
        robot: R,
        gripper: G,
        output: O,
    ) -> Result<MergeReport, MergeError>
    where
        R: AsRef<Path>,
        G: AsRef<Path>,
        O: AsRef<Path>,
    {
        Self::check_inputs(&robot, &gripper)?;

        let robot = Merger::parse_file(robot, DocumentRole::Robot)?;
        let gripper = Merger::parse_file(gripper, DocumentRole::Gripper)?;

        let (combined, mut report) = self.merge(robot, gripper);

        let output = output.as_ref();
        let xml = Merger::serialize(&combined)?;
        std::fs::write(output, xml).map_err(|source| MergeError::Write {
            path: output.to_path_buf(),
            source,
        })?;
        log::info!("Wrote combined URDF to {}", output.display());

        report.output = Some(output.to_path_buf());
        Ok(report)
    }

    /// Merge two URDF documents held in strings, returning the serialized result
    pub fn merge_strings(
        &self,
        robot: &str,
        gripper: &str,
    ) -> Result<(String, MergeReport), MergeError> {
        let robot = UrdfDocument::parse(robot.as_bytes(), DocumentRole::Robot)?;
        let gripper = UrdfDocument::parse(gripper.as_bytes(), DocumentRole::Gripper)?;

        let (combined, report) = self.merge(robot, gripper);
        Ok((Merger::serialize(&combined)?, report))
    }

    /// Graft the gripper onto the robot.
    ///
    /// The robot document is consumed and returned as the combined document;
    /// the gripper is consumed and dropped.
    pub fn merge(
        &self,
        mut robot: UrdfDocument,
        gripper: UrdfDocument,
    ) -> (UrdfDocument, MergeReport) {
        let probe = AttachmentProbe::scan(&gripper, &self.mount_frame);

        let gripper_base_link = probe
            .base_link
            .clone()
            .unwrap_or_else(|| self.gripper_base_link.clone());

        let mut report = MergeReport {
            output: None,
            mount_frame: self.mount_frame.clone(),
            attach_link: self.attach_link.clone(),
            gripper_base_link: gripper_base_link.clone(),
            duplicate_link: probe.duplicate_link.clone(),
            mount_joint: probe.mount_joint.clone(),
            captured_offset: probe.offset.clone(),
            origin: probe.offset.clone().unwrap_or_default(),
            links: Vec::new(),
            joints: Vec::new(),
            transmissions: 0,
            gazebo: 0,
            attachment_joint: self.joint_name.clone(),
            link_names: Vec::new(),
            joint_count: 0,
        };

        let sections = GripperSections::split(gripper.robot);

        for link in sections.links {
            let name = attr(&link, "name").unwrap_or_default().to_string();
            if probe.duplicate_link.as_deref() == Some(name.as_str()) {
                log::debug!("Skipping duplicate link '{}'", name);
                report.links.push(CopyAction::Skipped(name));
                continue;
            }
            log::debug!("Adding link '{}'", name);
            report.links.push(CopyAction::Added(name));
            robot.robot.children.push(XMLNode::Element(link));
        }

        // Every joint hanging off the mount frame goes, not just the probed one
        for joint in sections.joints {
            let name = attr(&joint, "name").unwrap_or_default().to_string();
            if joint_link_ref(&joint, "parent") == Some(self.mount_frame.as_str()) {
                log::debug!("Skipping joint '{}' (parent is {})", name, self.mount_frame);
                report.joints.push(CopyAction::Skipped(name));
                continue;
            }
            log::debug!("Adding joint '{}'", name);
            report.joints.push(CopyAction::Added(name));
            robot.robot.children.push(XMLNode::Element(joint));
        }

        report.transmissions = sections.transmissions.len();
        report.gazebo = sections.gazebo.len();
        robot.robot.children.extend(
            sections
                .transmissions
                .into_iter()
                .chain(sections.gazebo)
                .map(XMLNode::Element),
        );

        robot
            .robot
            .children
            .push(XMLNode::Element(self.attachment_joint(&gripper_base_link, &report.origin)));
        set_attr(&mut robot.robot, "name", self.combined_name.as_str());

        report.link_names = robot.link_names();
        report.joint_count = robot.joints().count();

        log::info!(
            "Merged gripper onto '{}': {} links, {} joints",
            self.attach_link,
            report.link_count(),
            report.joint_count
        );

        (robot, report)
    }

    /// `<joint type="fixed">` from the robot's attach link to the gripper base
    fn attachment_joint(
        &self,
        gripper_base_link: &str,
        origin: &attachment::Origin,
    ) -> Element {
        let mut joint = element_with_attrs(
            "joint",
            &[("name", self.joint_name.as_str()), ("type", "fixed")],
        );
        for child in [
            element_with_attrs("parent", &[("link", self.attach_link.as_str())]),
            element_with_attrs("child", &[("link", gripper_base_link)]),
            element_with_attrs(
                "origin",
                &[("xyz", origin.xyz.as_str()), ("rpy", origin.rpy.as_str())],
            ),
        ] {
            joint.children.push(XMLNode::Element(child));
        }
        joint
    }
}

/// Gripper children grouped by kind, each group in document order
struct GripperSections {
    links: Vec<Element>,
    joints: Vec<Element>,
    transmissions: Vec<Element>,
    gazebo: Vec<Element>,
}

impl GripperSections {
    fn split(gripper_robot: Element) -> Self {
        let mut sections = GripperSections {
            links: Vec::new(),
            joints: Vec::new(),
            transmissions: Vec::new(),
            gazebo: Vec::new(),
        };

        for node in gripper_robot.children {
            let XMLNode::Element(elem) = node else {
                continue;
            };
            match elem.name.as_str() {
                "link" => sections.links.push(elem),
                "joint" => sections.joints.push(elem),
                "transmission" => sections.transmissions.push(elem),
                "gazebo" => sections.gazebo.push(elem),
                other => log::trace!("Ignoring gripper element <{}>", other),
            }
        }
        sections
    }
}
