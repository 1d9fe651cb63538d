//! Tag group mutations
//!
//! Pending tag edits that have not been uploaded yet. They ride along with a
//! resolution request so the server evaluates the audience against local
//! state.

use std::collections::{BTreeMap, BTreeSet};

use serde::{Deserialize, Serialize};

type TagMap = BTreeMap<String, BTreeSet<String>>;

/// One tag group edit: adds, removes and/or replaces tags per group
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TagGroupsMutation {
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub add: TagMap,
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub remove: TagMap,
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub set: TagMap,
}

impl TagGroupsMutation {
    pub fn add<I, S>(group: impl Into<String>, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self { add: single(group, tags), ..Default::default() }
    }

    pub fn remove<I, S>(group: impl Into<String>, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self { remove: single(group, tags), ..Default::default() }
    }

    pub fn set<I, S>(group: impl Into<String>, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self { set: single(group, tags), ..Default::default() }
    }

    pub fn is_empty(&self) -> bool {
        self.add.is_empty() && self.remove.is_empty() && self.set.is_empty()
    }

    /// Merge an ordered sequence of mutations into the smallest equivalent
    /// sequence.
    ///
    /// The result holds at most two mutations: one carrying every `set`, then
    /// one carrying the remaining `add`/`remove` edits. A later `set` discards
    /// earlier adds/removes for that group; adds and removes of the same tag
    /// cancel in order.
    pub fn collapse(mutations: &[TagGroupsMutation]) -> Vec<TagGroupsMutation> {
        let mut add = TagMap::new();
        let mut remove = TagMap::new();
        let mut set = TagMap::new();

        for mutation in mutations {
            for (group, tags) in &mutation.add {
                if let Some(current) = set.get_mut(group) {
                    current.extend(tags.iter().cloned());
                    continue;
                }
                if let Some(removed) = remove.get_mut(group) {
                    removed.retain(|tag| !tags.contains(tag));
                }
                add.entry(group.clone()).or_default().extend(tags.iter().cloned());
            }

            for (group, tags) in &mutation.remove {
                if let Some(current) = set.get_mut(group) {
                    current.retain(|tag| !tags.contains(tag));
                    continue;
                }
                if let Some(added) = add.get_mut(group) {
                    added.retain(|tag| !tags.contains(tag));
                }
                remove.entry(group.clone()).or_default().extend(tags.iter().cloned());
            }

            for (group, tags) in &mutation.set {
                set.insert(group.clone(), tags.clone());
                add.remove(group);
                remove.remove(group);
            }
        }

        add.retain(|_, tags| !tags.is_empty());
        remove.retain(|_, tags| !tags.is_empty());

        let mut collapsed = Vec::new();
        if !set.is_empty() {
            collapsed.push(Self { set, ..Default::default() });
        }
        if !add.is_empty() || !remove.is_empty() {
            collapsed.push(Self { add, remove, ..Default::default() });
        }
        collapsed
    }
}

fn single<I, S>(group: impl Into<String>, tags: I) -> TagMap
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    let mut map = TagMap::new();
    map.insert(group.into(), tags.into_iter().map(Into::into).collect());
    map
}
