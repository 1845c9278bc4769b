//! Namespace rewrites applied to stored DMN markup.
//!
//! The namespace strings are treated as opaque literals, not parsed XML:
//! substring containment and global replacement are the only operations the
//! stored documents need, and they keep the rewrite independent of whichever
//! designer produced the markup.

/// DMN 1.2 namespace as written by older exports (insecure scheme).
pub const DMN_1_2_NS: &str = "http://www.omg.org/spec/DMN/20180521";

/// DMN 1.3 namespace with the insecure scheme, seen in some 2019 exports.
pub const DMN_1_3_NS_HTTP: &str = "http://www.omg.org/spec/DMN/20191111";

/// Canonical DMN 1.3 namespace.
pub const DMN_1_3_NS: &str = "https://www.omg.org/spec/DMN/20191111";

/// Vendor namespace attribute written by the Flowable designer.
pub const FLOWABLE_NS_ATTR: &str = r#"namespace="http://www.flowable.org/dmn""#;

/// Vendor namespace attribute expected by the Camunda-compatible engine.
pub const CAMUNDA_NS_ATTR: &str = r#"namespace="http://camunda.org/schema/1.0/dmn""#;

/// True when the markup still references either insecure namespace revision.
pub fn is_outdated(xml: &str) -> bool {
    xml.contains(DMN_1_2_NS) || xml.contains(DMN_1_3_NS_HTTP)
}

/// Rewrite outdated namespaces to the canonical DMN 1.3 URI.
///
/// The 1.2 replacement runs first so a 1.2 document lands directly on the
/// https URI and is never touched by the second replacement. The vendor
/// attribute swap applies only when the Flowable attribute survives the
/// namespace rewrite.
pub fn upgrade(xml: &str) -> String {
    let upgraded = xml
        .replace(DMN_1_2_NS, DMN_1_3_NS)
        .replace(DMN_1_3_NS_HTTP, DMN_1_3_NS);
    if upgraded.contains(FLOWABLE_NS_ATTR) {
        upgraded.replace(FLOWABLE_NS_ATTR, CAMUNDA_NS_ATTR)
    } else {
        upgraded
    }
}
