/// A child handed to a tab group, tagged with its role.
///
/// `C` is whatever the host renders (an element, a string in tests).
#[derive(Debug, Clone, PartialEq)]
pub enum TabNode<C> {
    /// Container for the group's triggers.
    TriggerList(TriggerList<C>),
    /// A selectable header. Only recognized inside a [`TriggerList`].
    Trigger(Trigger<C>),
    /// Content pane paired positionally with a trigger.
    Panel(Panel<C>),
    /// Anything else. Dropped during classification.
    Other(C),
}

#[derive(Debug, Clone, PartialEq)]
pub struct TriggerList<C> {
    pub items: Vec<TabNode<C>>,
    /// Accessible name for the list; the configured default applies when unset.
    pub label: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Trigger<C> {
    pub disabled: bool,
    pub content: C,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Panel<C> {
    pub content: C,
}

impl<C> TabNode<C> {
    pub fn list(items: impl IntoIterator<Item = TabNode<C>>) -> Self {
        TabNode::TriggerList(TriggerList {
            items: items.into_iter().collect(),
            label: None,
        })
    }

    pub fn labeled_list(label: impl Into<String>, items: impl IntoIterator<Item = TabNode<C>>) -> Self {
        TabNode::TriggerList(TriggerList {
            items: items.into_iter().collect(),
            label: Some(label.into()),
        })
    }

    pub fn trigger(disabled: bool, content: C) -> Self {
        TabNode::Trigger(Trigger { disabled, content })
    }

    pub fn panel(content: C) -> Self {
        TabNode::Panel(Panel { content })
    }

    pub fn other(content: C) -> Self {
        TabNode::Other(content)
    }
}
