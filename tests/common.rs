// Common test helpers for urdf-merge integration tests
//
// - Merge helpers: run_merge(), test_merge(), write_fixture()
// - XML navigation: get_attr(), find_named(), link_names()
// - Assertion macros: assert_output_contains!, assert_urdf_attr!
//
// Macros (not functions) for assertions so failures point at the call site.

use std::path::{Path, PathBuf};
use std::sync::Once;
use urdf_merge::{MergeError, MergeReport, Merger};
use xmltree::Element;

static INIT: Once = Once::new();

/// Initialize test environment (logging).
///
/// Safe to call multiple times - initialization happens only once.
#[allow(dead_code)]
pub fn test_init() {
    INIT.call_once(|| {
        let _ = env_logger::builder().is_test(true).try_init();
    });
}

/// Robot with `base_link -> tool0`, as used by most tests
#[allow(dead_code)]
pub const UR_ROBOT: &str = r#"<?xml version="1.0"?>
<robot name="ur10e">
  <link name="base_link">
    <visual>
      <geometry><box size="0.1 0.1 0.1"/></geometry>
    </visual>
  </link>
  <link name="tool0"/>
  <joint name="base_to_tool0" type="fixed">
    <parent link="base_link"/>
    <child link="tool0"/>
    <origin xyz="0 0 1" rpy="0 0 0"/>
  </joint>
</robot>"#;

/// Hand-E style gripper with its own `tool0` frame
#[allow(dead_code)]
pub const HANDE_GRIPPER: &str = r#"<?xml version="1.0"?>
<robot name="robotiq_hande">
  <link name="tool0"/>
  <link name="hande_coupler"/>
  <link name="hande_finger"/>
  <joint name="mount" type="fixed">
    <parent link="tool0"/>
    <child link="hande_coupler"/>
    <origin xyz="0 0 0.01" rpy="0 0 0"/>
  </joint>
</robot>"#;

/// Merge two URDF strings with default settings, return Result.
#[allow(dead_code)]
pub fn test_merge(
    robot: &str,
    gripper: &str,
) -> Result<(String, MergeReport), MergeError> {
    test_init();
    Merger::new().merge_strings(robot, gripper)
}

/// Merge two URDF strings and expect success.
#[allow(dead_code)]
pub fn run_merge(
    robot: &str,
    gripper: &str,
) -> (String, MergeReport) {
    test_merge(robot, gripper).expect("Merge should succeed")
}

/// Merge and parse the output back into an element tree.
#[allow(dead_code)]
pub fn run_merge_to_xml(
    robot: &str,
    gripper: &str,
) -> Element {
    let (output, _) = run_merge(robot, gripper);
    parse_xml(&output)
}

/// Write `content` to `dir/name` and return the path.
#[allow(dead_code)]
pub fn write_fixture(
    dir: &Path,
    name: &str,
    content: &str,
) -> PathBuf {
    let path = dir.join(name);
    std::fs::write(&path, content).expect("Failed to write fixture");
    path
}

/// Get attribute value by local name.
///
/// Panics if attribute is not found.
#[allow(dead_code)]
pub fn get_attr<'a>(
    elem: &'a Element,
    name: &str,
) -> &'a str {
    get_attr_opt(elem, name)
        .unwrap_or_else(|| panic!("Expected '{}' attribute on <{}>", name, elem.name))
}

/// Get attribute value by local name, returning None if not found.
#[allow(dead_code)]
pub fn get_attr_opt<'a>(
    elem: &'a Element,
    name: &str,
) -> Option<&'a str> {
    elem.attributes
        .iter()
        .find(|(attr_name, _)| attr_name.as_str() == name)
        .map(|(_, value)| value.as_str())
}

/// Direct children with the given tag.
#[allow(dead_code)]
pub fn children<'a>(
    parent: &'a Element,
    tag: &str,
) -> Vec<&'a Element> {
    parent
        .children
        .iter()
        .filter_map(|node| node.as_element())
        .filter(|elem| elem.name == tag)
        .collect()
}

/// Find a direct child by tag and `name` attribute.
///
/// Panics if not found.
#[allow(dead_code)]
pub fn find_named<'a>(
    parent: &'a Element,
    tag: &str,
    name: &str,
) -> &'a Element {
    children(parent, tag)
        .into_iter()
        .find(|elem| get_attr_opt(elem, "name") == Some(name))
        .unwrap_or_else(|| panic!("Expected <{} name=\"{}\"> in <{}>", tag, name, parent.name))
}

/// `name` of every `link` child, in document order.
#[allow(dead_code)]
pub fn link_names(robot: &Element) -> Vec<&str> {
    children(robot, "link")
        .into_iter()
        .filter_map(|link| get_attr_opt(link, "name"))
        .collect()
}

/// `link` attribute of a joint's `parent` / `child` element.
#[allow(dead_code)]
pub fn joint_ref<'a>(
    joint: &'a Element,
    which: &str,
) -> &'a str {
    let elem = joint
        .get_child(which)
        .unwrap_or_else(|| panic!("Expected <{}> in joint", which));
    get_attr(elem, "link")
}

/// Parse XML string to Element.
#[allow(dead_code)]
pub fn parse_xml(xml: &str) -> Element {
    Element::parse(xml.as_bytes()).expect("Should parse valid XML")
}

/// Assert that output contains expected string.
#[macro_export]
macro_rules! assert_output_contains {
    ($output:expr, $expected:expr) => {
        if !$output.contains($expected) {
            panic!(
                "\nAssertion failed: output does not contain expected string\n\
                 Expected substring: \"{}\"\n\
                 Actual output:\n{}\n",
                $expected, $output
            );
        }
    };
    ($output:expr, $expected:expr, $($arg:tt)+) => {
        if !$output.contains($expected) {
            panic!(
                "\nAssertion failed: {}\n\
                 Expected substring: \"{}\"\n\
                 Actual output:\n{}\n",
                format_args!($($arg)+), $expected, $output
            );
        }
    };
}

/// Assert that attribute has expected string value.
#[macro_export]
macro_rules! assert_urdf_attr {
    ($elem:expr, $name:expr, $expected:expr) => {
        match $crate::common::get_attr_opt($elem, $name) {
            Some(actual) => {
                if actual != $expected {
                    panic!(
                        "\nAssertion failed: attribute mismatch\n\
                         Element: <{}>\n\
                         Attribute: {}\n\
                         Expected: \"{}\"\n\
                         Actual: \"{}\"\n",
                        $elem.name, $name, $expected, actual
                    );
                }
            }
            None => {
                panic!(
                    "\nAssertion failed: attribute missing\n\
                     Element: <{}>\n\
                     Attribute: {}\n",
                    $elem.name, $name
                );
            }
        }
    };
}
