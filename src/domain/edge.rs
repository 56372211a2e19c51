use serde::{Deserialize, Serialize};

/// Outcome of dependency resolution for one parent → child relation.
///
/// Serialized in lower case with dashes (`omitted-for-conflict`), which is also
/// the key format of the `edge-types` table in style documents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum NodeResolution {
    // Regular dependency, or module containment
    Included,
    // The same artifact is already part of the tree elsewhere
    OmittedForDuplicate,
    // Another version of the artifact won resolution
    OmittedForConflict,
}
