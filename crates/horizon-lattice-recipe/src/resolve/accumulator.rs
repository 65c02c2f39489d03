//! Path-keyed merge of style blocks.

use std::collections::HashMap;

use super::resolved::{ResolvedStyleSet, StyleDeclaration};
use crate::style::{PropertyValue, SelectorPath, StyleBlock};

/// Accumulates declarations per selector path.
///
/// Merging is last-writer-wins per `(path, property)`. A property keeps
/// the position of its first write, and paths keep the order they were
/// first encountered in, with the root always first.
#[derive(Debug)]
pub(crate) struct StyleAccumulator {
    paths: Vec<PathEntry>,
    index: HashMap<SelectorPath, usize>,
}

#[derive(Debug)]
struct PathEntry {
    path: SelectorPath,
    properties: Vec<(String, PropertyValue)>,
}

impl StyleAccumulator {
    pub(crate) fn new() -> Self {
        let root = SelectorPath::root();
        let mut index = HashMap::new();
        index.insert(root.clone(), 0);
        Self {
            paths: vec![PathEntry {
                path: root,
                properties: vec![],
            }],
            index,
        }
    }

    /// Merge a block at the root path, recursing into nested selectors.
    pub(crate) fn merge(&mut self, block: &StyleBlock) {
        self.merge_at(&SelectorPath::root(), block);
    }

    fn merge_at(&mut self, path: &SelectorPath, block: &StyleBlock) {
        let slot = self.slot(path);
        let entry = &mut self.paths[slot];
        for (property, value) in block.properties() {
            match entry
                .properties
                .iter_mut()
                .find(|(name, _)| name == property)
            {
                Some((_, existing)) => *existing = value.clone(),
                None => entry.properties.push((property.to_string(), value.clone())),
            }
        }

        for (selector, child) in block.children() {
            self.merge_at(&path.child(selector), child);
        }
    }

    fn slot(&mut self, path: &SelectorPath) -> usize {
        if let Some(&slot) = self.index.get(path) {
            return slot;
        }
        let slot = self.paths.len();
        self.paths.push(PathEntry {
            path: path.clone(),
            properties: vec![],
        });
        self.index.insert(path.clone(), slot);
        slot
    }

    /// Flatten into ordered declarations.
    pub(crate) fn finish(self) -> ResolvedStyleSet {
        let declarations = self
            .paths
            .into_iter()
            .flat_map(|entry| {
                let path = entry.path;
                entry
                    .properties
                    .into_iter()
                    .map(move |(property, value)| StyleDeclaration {
                        selector: path.clone(),
                        property,
                        value,
                    })
            })
            .collect();
        ResolvedStyleSet::from_declarations(declarations)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn flatten(acc: StyleAccumulator) -> Vec<(String, String, String)> {
        acc.finish()
            .iter()
            .map(|d| {
                (
                    d.selector.to_string(),
                    d.property.clone(),
                    d.value.to_string(),
                )
            })
            .collect()
    }

    #[test]
    fn later_merge_overwrites_in_place() {
        let mut acc = StyleAccumulator::new();
        acc.merge(&StyleBlock::new().set("width", "40px").set("height", "40px"));
        acc.merge(&StyleBlock::new().set("width", "32px"));

        assert_eq!(
            flatten(acc),
            vec![
                ("&".into(), "width".into(), "32px".into()),
                ("&".into(), "height".into(), "40px".into()),
            ]
        );
    }

    #[test]
    fn root_first_then_nested_in_first_seen_order() {
        let mut acc = StyleAccumulator::new();
        acc.merge(
            &StyleBlock::new()
                .nest("&:hover", StyleBlock::new().set("opacity", "0.9"))
                .nest("& svg", StyleBlock::new().set("width", "20px")),
        );
        acc.merge(
            &StyleBlock::new()
                .nest("& svg", StyleBlock::new().set("width", "16px"))
                .set("display", "flex"),
        );

        assert_eq!(
            flatten(acc),
            vec![
                ("&".into(), "display".into(), "flex".into()),
                ("&:hover".into(), "opacity".into(), "0.9".into()),
                ("& svg".into(), "width".into(), "16px".into()),
            ]
        );
    }

    #[test]
    fn deep_nesting_accumulates_paths() {
        let mut acc = StyleAccumulator::new();
        acc.merge(&StyleBlock::new().nest(
            "&:hover",
            StyleBlock::new().nest("&::after", StyleBlock::new().set("opacity", "1")),
        ));

        let set = acc.finish();
        let path = SelectorPath::new(["&:hover", "&::after"]);
        assert_eq!(set.get(&path, "opacity"), Some(&PropertyValue::literal("1")));
    }
}
