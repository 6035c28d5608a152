use crate::classify::{classify, Classified};
use crate::error::KitError;
use crate::ids::{derive_slot_id, GroupId, SlotId};
use crate::layout::Orientation;
use crate::node::TabNode;
use crate::validate::validate;

/// A trigger annotated with its slot id and the group's orientation.
#[derive(Debug, Clone, PartialEq)]
pub struct BoundTrigger<C> {
    pub slot: usize,
    pub id: SlotId,
    pub disabled: bool,
    pub content: C,
    orientation: Orientation,
}

impl<C> BoundTrigger<C> {
    /// Inherited from the group; triggers cannot override it.
    pub fn orientation(&self) -> Orientation {
        self.orientation
    }
}

/// A panel annotated with the id of the trigger in the same slot.
#[derive(Debug, Clone, PartialEq)]
pub struct BoundPanel<C> {
    pub slot: usize,
    pub id: SlotId,
    pub content: C,
}

/// Fully bound tab group, ready to render.
#[derive(Debug, Clone, PartialEq)]
pub struct BoundTabs<C> {
    pub group: GroupId,
    pub orientation: Orientation,
    pub list_label: Option<String>,
    pub triggers: Vec<BoundTrigger<C>>,
    pub panels: Vec<BoundPanel<C>>,
}

impl<C> BoundTabs<C> {
    pub fn len(&self) -> usize {
        self.triggers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.triggers.is_empty()
    }

    /// Slot that should start selected: `requested` when it names an enabled
    /// trigger, otherwise the first enabled one.
    pub fn initial_selection(&self, requested: Option<usize>) -> Option<usize> {
        requested
            .filter(|&slot| self.triggers.get(slot).is_some_and(|t| !t.disabled))
            .or_else(|| self.triggers.iter().position(|t| !t.disabled))
    }

    pub fn slot_of(&self, id: &str) -> Option<usize> {
        self.triggers.iter().position(|t| t.id.as_str() == id)
    }
}

/// Annotate classified children with slot ids.
///
/// Refuses to pair anything when the counts differ.
pub fn bind<C>(
    group: &GroupId,
    orientation: Orientation,
    classified: Classified<C>,
) -> Result<BoundTabs<C>, KitError> {
    validate(&classified.triggers, &classified.panels).into_result()?;

    let triggers = classified
        .triggers
        .into_iter()
        .map(|t| BoundTrigger {
            slot: t.slot,
            id: derive_slot_id(group, t.slot),
            disabled: t.node.disabled,
            content: t.node.content,
            orientation,
        })
        .collect();

    let panels = classified
        .panels
        .into_iter()
        .map(|p| BoundPanel {
            slot: p.slot,
            id: derive_slot_id(group, p.slot),
            content: p.node.content,
        })
        .collect();

    Ok(BoundTabs {
        group: group.clone(),
        orientation,
        list_label: classified.list.and_then(|l| l.label),
        triggers,
        panels,
    })
}

/// Classify, validate and bind in one pass.
pub fn compose<C>(
    group: &GroupId,
    orientation: Orientation,
    children: impl IntoIterator<Item = TabNode<C>>,
) -> Result<BoundTabs<C>, KitError> {
    bind(group, orientation, classify(children))
}
