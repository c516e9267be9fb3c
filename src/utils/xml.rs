use xmltree::{Element, XMLNode};

/// Tag of the URDF root element
pub const ROBOT_TAG: &str = "robot";

/// Offset value used whenever an origin or one of its attributes is absent
pub const ZERO_TRIPLET: &str = "0 0 0";

/// Look up an attribute by its local (unprefixed) name.
///
/// # Examples
/// ```
/// use xmltree::Element;
/// use urdf_merge::utils::xml::attr;
///
/// let joint = Element::parse(r#"<joint name="mount" type="fixed"/>"#.as_bytes()).unwrap();
/// assert_eq!(attr(&joint, "type"), Some("fixed"));
/// assert_eq!(attr(&joint, "axis"), None);
/// ```
pub fn attr<'a>(
    element: &'a Element,
    name: &str,
) -> Option<&'a str> {
    element
        .attributes
        .get(name)
        .map(String::as_str)
}

/// Set (or overwrite) an unprefixed attribute
pub fn set_attr(
    element: &mut Element,
    name: &str,
    value: impl Into<String>,
) {
    element
        .attributes
        .insert(name.to_string(), value.into());
}

/// Build `<tag a="..." b="..."/>` with attributes in the given order
pub fn element_with_attrs(
    tag: &str,
    attrs: &[(&str, &str)],
) -> Element {
    let mut element = Element::new(tag);
    for (name, value) in attrs {
        set_attr(&mut element, name, *value);
    }
    element
}

/// Direct element children carrying the given tag, in document order
pub fn child_elements<'a>(
    parent: &'a Element,
    tag: &'a str,
) -> impl Iterator<Item = &'a Element> + 'a {
    parent
        .children
        .iter()
        .filter_map(XMLNode::as_element)
        .filter(move |elem| elem.name == tag)
}

/// `link` attribute of the named child (`parent` / `child` of a joint)
pub fn joint_link_ref<'a>(
    joint: &'a Element,
    which: &str,
) -> Option<&'a str> {
    joint.get_child(which).and_then(|elem| attr(elem, "link"))
}

/// Pull the `robot` element out of a parsed document root.
///
/// The root itself wins if it is a `robot`; otherwise the first descendant
/// `robot` in document order is taken.
pub fn take_robot_element(root: Element) -> Option<Element> {
    if root.name == ROBOT_TAG {
        return Some(root);
    }

    root.children.into_iter().find_map(|node| match node {
        XMLNode::Element(elem) => take_robot_element(elem),
        _ => None,
    })
}
