use std::collections::HashSet;

use crate::entities::{Direction, PositionNumber, ReceptionHierarchy};

/// Identifies a collapsible node by the grouping keys on its way down from the
/// reception root.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum NodePath {
    Position(PositionNumber),
    WorkGroup(PositionNumber, String),
    BaseItem(PositionNumber, String, String),
    Direction(PositionNumber, String, String, Direction),
}

/// Per-node visibility, kept apart from the hierarchy itself. Every node starts
/// out expanded; only collapsed paths are stored, so a state built for one
/// sheet can be applied to a rebuilt hierarchy without touching new nodes.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ExpansionState {
    collapsed: HashSet<NodePath>,
}

impl ExpansionState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_expanded(&self, path: &NodePath) -> bool {
        !self.collapsed.contains(path)
    }

    /// Flips the node and returns whether it is now expanded.
    pub fn toggle(&mut self, path: NodePath) -> bool {
        if self.collapsed.remove(&path) {
            true
        } else {
            self.collapsed.insert(path);
            false
        }
    }

    pub fn collapse(&mut self, path: NodePath) {
        self.collapsed.insert(path);
    }

    pub fn expand(&mut self, path: &NodePath) {
        self.collapsed.remove(path);
    }

    pub fn collapse_all(&mut self, hierarchy: &ReceptionHierarchy) {
        for position in &hierarchy.positions {
            let p = &position.key;
            self.collapsed.insert(NodePath::Position(p.clone()));
            for work_group in &position.children {
                let w = &work_group.key;
                self.collapsed
                    .insert(NodePath::WorkGroup(p.clone(), w.clone()));
                for base_item in &work_group.children {
                    let b = &base_item.key;
                    self.collapsed
                        .insert(NodePath::BaseItem(p.clone(), w.clone(), b.clone()));
                    for direction in &base_item.children {
                        self.collapsed.insert(NodePath::Direction(
                            p.clone(),
                            w.clone(),
                            b.clone(),
                            direction.direction,
                        ));
                    }
                }
            }
        }
    }

    pub fn expand_all(&mut self) {
        self.collapsed.clear();
    }
}
