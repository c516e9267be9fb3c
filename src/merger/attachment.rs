//! Probing the gripper document for where and how it mounts

use crate::utils::{
    document::UrdfDocument,
    xml::{attr, joint_link_ref, ZERO_TRIPLET},
};

/// Static joint offset: translation (`xyz`) and roll-pitch-yaw (`rpy`).
///
/// Values are kept as the strings found in the source document so the
/// synthesized joint carries them over byte for byte.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Origin {
    pub xyz: String,
    pub rpy: String,
}

impl Default for Origin {
    fn default() -> Self {
        Self {
            xyz: ZERO_TRIPLET.to_string(),
            rpy: ZERO_TRIPLET.to_string(),
        }
    }
}

impl Origin {
    pub fn new(
        xyz: impl Into<String>,
        rpy: impl Into<String>,
    ) -> Self {
        Self {
            xyz: xyz.into(),
            rpy: rpy.into(),
        }
    }

    /// Read an `<origin>` element; missing attributes fall back to zero
    pub fn from_element(origin: &xmltree::Element) -> Self {
        Self::new(
            attr(origin, "xyz").unwrap_or(ZERO_TRIPLET),
            attr(origin, "rpy").unwrap_or(ZERO_TRIPLET),
        )
    }
}

/// Result of scanning the gripper before anything is copied
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AttachmentProbe {
    /// Gripper link sharing the mount frame's name
    pub duplicate_link: Option<String>,
    /// First joint parented to the mount frame that names a child
    pub mount_joint: Option<String>,
    /// Child of `mount_joint`
    pub base_link: Option<String>,
    /// `<origin>` of `mount_joint`, if it has one
    pub offset: Option<Origin>,
}

impl AttachmentProbe {
    pub fn scan(
        gripper: &UrdfDocument,
        mount_frame: &str,
    ) -> Self {
        let mut probe = AttachmentProbe::default();

        // First link wins; later duplicates are excluded by name anyway
        if let Some(link) = gripper
            .links()
            .find(|link| attr(link, "name") == Some(mount_frame))
        {
            log::info!(
                "Gripper has its own '{}' link; it will be dropped in favour of the robot's",
                mount_frame
            );
            probe.duplicate_link = attr(link, "name").map(str::to_string);
        }

        // A mount joint without <child> can't tell us the base link, keep looking
        let found = gripper.joints().find(|joint| {
            joint_link_ref(joint, "parent") == Some(mount_frame) && joint.get_child("child").is_some()
        });

        if let Some(joint) = found {
            probe.mount_joint = Some(attr(joint, "name").unwrap_or_default().to_string());
            probe.base_link = joint_link_ref(joint, "child").map(str::to_string);
            if probe.base_link.is_none() {
                log::warn!(
                    "Joint '{}' has a <child> without a link attribute",
                    attr(joint, "name").unwrap_or_default()
                );
            }
            probe.offset = joint.get_child("origin").map(Origin::from_element);
        }

        log::debug!("Attachment probe: {:?}", probe);
        probe
    }
}
