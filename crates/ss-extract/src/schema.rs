//! Structural-type extraction from JSON schema definitions.
//!
//! A schema file formalizes structural types as `const` constraints on a
//! `type` property. The declarations sit at arbitrary depth: directly under
//! a `$defs` entry's `properties`, or nested inside composition operators
//! (`allOf`/`anyOf`/`oneOf`) and conditional operators (`if`/`then`/`else`).
//! [`SchemaTypeExtractor`] walks the whole tree and collects every such
//! constant once per file.

use camino::Utf8Path;
use serde_json::Value;
use ss_core::{FxHashSet, SourceKind, SourceLocation, StructuralType, TEXT_PLACEHOLDER, fx_hash_set};

/// Composition operators whose array elements are recursed into.
const COMPOSITION_KEYS: &[&str] = &["allOf", "anyOf", "oneOf"];

/// Conditional operators whose object values are recursed into.
const CONDITIONAL_KEYS: &[&str] = &["if", "then", "else"];

/// Extracts structural-type constants from a parsed schema tree.
///
/// Parsing is the caller's concern: a malformed file is reported as a
/// file-level diagnostic by the pipeline and simply never reaches this
/// extractor, so one bad schema cannot abort the others.
///
/// # Examples
///
/// ```
/// use camino::Utf8Path;
/// use ss_extract::SchemaTypeExtractor;
///
/// let tree = serde_json::json!({
///     "$defs": {
///         "heading": { "properties": { "type": { "const": "heading" } } }
///     }
/// });
/// let types = SchemaTypeExtractor::new().extract(Utf8Path::new("schemas/content.schema.json"), &tree);
/// assert_eq!(types[0].name, "heading");
/// ```
#[derive(Debug, Default)]
pub struct SchemaTypeExtractor {
    _private: (), // Prevent external construction
}

impl SchemaTypeExtractor {
    /// Creates a new schema extractor.
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Extracts the structural types defined in one schema file.
    ///
    /// # Arguments
    ///
    /// * `file` - Path of the schema file, relative to the corpus root
    /// * `root` - The parsed schema tree
    ///
    /// # Returns
    ///
    /// An ordered list of defined types, one entry per distinct name, in
    /// traversal order of first discovery.
    #[must_use]
    pub fn extract(&self, file: &Utf8Path, root: &Value) -> Vec<StructuralType> {
        let mut seen = fx_hash_set();
        let mut types = Vec::new();

        collect(root, file, &mut seen, &mut types);

        // Legacy shortcut kept from the original layout: the well-known
        // "block" definition lists its variants as allOf conditionals whose
        // `if` carries the discriminating constant. The generic walk above
        // already reaches these; dedup guarantees one entry per constant no
        // matter how many paths discovered it.
        if let Some(all_of) = root
            .get("$defs")
            .and_then(|defs| defs.get("block"))
            .and_then(|block| block.get("allOf"))
            .and_then(Value::as_array)
        {
            for condition in all_of {
                let constant = condition
                    .get("if")
                    .and_then(|v| v.get("properties"))
                    .and_then(|v| v.get("type"))
                    .and_then(|v| v.get("const"))
                    .and_then(Value::as_str);
                if let Some(name) = constant {
                    admit(name, file, &mut seen, &mut types);
                }
            }
        }

        types
    }
}

/// Recursive traversal over one schema node.
///
/// A node carrying none of the recognized keys is a leaf.
fn collect(
    node: &Value,
    file: &Utf8Path,
    seen: &mut FxHashSet<String>,
    types: &mut Vec<StructuralType>,
) {
    // Direct property constraint: properties.type.const
    let direct = node
        .get("properties")
        .and_then(|props| props.get("type"))
        .and_then(|prop| prop.get("const"))
        .and_then(Value::as_str);
    if let Some(name) = direct {
        admit(name, file, seen, types);
    }

    for key in COMPOSITION_KEYS {
        if let Some(children) = node.get(*key).and_then(Value::as_array) {
            for child in children {
                collect(child, file, seen, types);
            }
        }
    }

    for key in CONDITIONAL_KEYS {
        if let Some(child) = node.get(*key) {
            if child.is_object() {
                collect(child, file, seen, types);
            }
        }
    }

    // Named definitions are independent subtrees
    if let Some(defs) = node.get("$defs").and_then(Value::as_object) {
        for def in defs.values() {
            if def.is_object() {
                collect(def, file, seen, types);
            }
        }
    }
}

/// Admits one constant, skipping the placeholder and per-file duplicates.
fn admit(name: &str, file: &Utf8Path, seen: &mut FxHashSet<String>, types: &mut Vec<StructuralType>) {
    if name == TEXT_PLACEHOLDER {
        return;
    }
    if !seen.insert(name.to_owned()) {
        return;
    }
    types.push(StructuralType::new(
        name,
        SourceLocation::file_only(file),
        SourceKind::Schema,
    ));
}
