use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

/// Namespace token for one tab group instance.
///
/// Always non-empty ASCII alphanumeric, so it can be embedded in a DOM id.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct GroupId(String);

impl GroupId {
    /// Validate a raw token. Returns `None` for empty or non-alphanumeric input.
    pub fn new(raw: impl Into<String>) -> Option<Self> {
        let raw = raw.into();
        if !raw.is_empty() && raw.chars().all(|c| c.is_ascii_alphanumeric()) {
            Some(GroupId(raw))
        } else {
            None
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for GroupId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl TryFrom<String> for GroupId {
    type Error = String;

    fn try_from(raw: String) -> Result<Self, Self::Error> {
        GroupId::new(raw.clone()).ok_or_else(|| format!("invalid group id `{raw}`"))
    }
}

impl From<GroupId> for String {
    fn from(id: GroupId) -> Self {
        id.0
    }
}

/// Identifier shared by the trigger and panel occupying the same slot.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SlotId(String);

impl SlotId {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for SlotId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Derive the id for `slot` (0-based) inside `group`.
///
/// The rendered index is 1-based: slot 0 of group `g` is `tab-g-1`.
pub fn derive_slot_id(group: &GroupId, slot: usize) -> SlotId {
    SlotId(format!("tab-{}-{}", group.as_str(), slot + 1))
}

/// Source of fresh group ids.
pub trait GroupIdSource: Send + Sync {
    fn next_group_id(&self) -> GroupId;
}

/// Random v4 UUIDs in their 32-character hex form.
#[derive(Debug, Default, Clone, Copy)]
pub struct RandomIdSource;

impl GroupIdSource for RandomIdSource {
    fn next_group_id(&self) -> GroupId {
        GroupId(uuid::Uuid::new_v4().simple().to_string())
    }
}

/// Prefix followed by a monotonic counter, starting at 1.
///
/// Deterministic, which makes it the source of choice for tests and
/// server-rendered snapshots.
#[derive(Debug)]
pub struct SequentialIdSource {
    prefix: String,
    next: AtomicU64,
}

impl SequentialIdSource {
    /// Non-alphanumeric characters are stripped from `prefix`; an empty
    /// prefix becomes `g`.
    pub fn new(prefix: &str) -> Self {
        let mut prefix: String = prefix.chars().filter(|c| c.is_ascii_alphanumeric()).collect();
        if prefix.is_empty() {
            prefix.push('g');
        }
        Self {
            prefix,
            next: AtomicU64::new(1),
        }
    }
}

impl GroupIdSource for SequentialIdSource {
    fn next_group_id(&self) -> GroupId {
        let n = self.next.fetch_add(1, Ordering::Relaxed);
        GroupId(format!("{}{}", self.prefix, n))
    }
}

/// Cloneable handle to an injected [`GroupIdSource`].
#[derive(Clone)]
pub struct IdAllocator {
    source: Arc<dyn GroupIdSource>,
}

impl IdAllocator {
    pub fn new(source: impl GroupIdSource + 'static) -> Self {
        Self {
            source: Arc::new(source),
        }
    }

    pub fn random() -> Self {
        Self::new(RandomIdSource)
    }

    pub fn sequential(prefix: &str) -> Self {
        Self::new(SequentialIdSource::new(prefix))
    }

    /// Allocate a group id. Call once per component instance.
    pub fn allocate(&self) -> GroupId {
        self.source.next_group_id()
    }
}

impl Default for IdAllocator {
    fn default() -> Self {
        Self::random()
    }
}

impl fmt::Debug for IdAllocator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("IdAllocator").finish_non_exhaustive()
    }
}
