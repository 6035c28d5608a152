use crate::node::{Panel, TabNode, Trigger};

/// A node together with its 0-based position in its own sequence.
#[derive(Debug, Clone, PartialEq)]
pub struct Slotted<T> {
    pub slot: usize,
    pub node: T,
}

/// Result of splitting a tab group's children by role.
#[derive(Debug, Clone, PartialEq)]
pub struct Classified<C> {
    /// `Some` when a trigger list with at least one trigger was found. Holds
    /// the list's own label, if any.
    pub list: Option<ListInfo>,
    pub triggers: Vec<Slotted<Trigger<C>>>,
    pub panels: Vec<Slotted<Panel<C>>>,
    /// Children that were skipped: unrecognized nodes, stray triggers,
    /// extra lists and non-trigger items inside the list.
    pub dropped: usize,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ListInfo {
    pub label: Option<String>,
}

/// Partition `children` into the trigger list's triggers and the panels.
///
/// Declaration order is preserved in both sequences. Only the first trigger
/// list counts; a list without triggers is reported as absent.
pub fn classify<C>(children: impl IntoIterator<Item = TabNode<C>>) -> Classified<C> {
    let mut list = None;
    let mut seen_list = false;
    let mut triggers = Vec::new();
    let mut panels = Vec::new();
    let mut dropped = 0;

    for child in children {
        match child {
            TabNode::TriggerList(found) if !seen_list => {
                seen_list = true;
                for item in found.items {
                    match item {
                        TabNode::Trigger(trigger) => triggers.push(Slotted {
                            slot: triggers.len(),
                            node: trigger,
                        }),
                        _ => dropped += 1,
                    }
                }
                if !triggers.is_empty() {
                    list = Some(ListInfo { label: found.label });
                }
            }
            TabNode::Panel(panel) => panels.push(Slotted {
                slot: panels.len(),
                node: panel,
            }),
            TabNode::TriggerList(_) | TabNode::Trigger(_) | TabNode::Other(_) => dropped += 1,
        }
    }

    Classified {
        list,
        triggers,
        panels,
        dropped,
    }
}
