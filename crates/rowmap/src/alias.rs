use crate::{lock, TypeKey};

use heck::ToTitleCase;
use log::trace;
use std::collections::{hash_map::Entry, HashMap};
use std::sync::Mutex;

/// Hands out short table aliases, unique per type.
///
/// An alias is the initials of the words in a type name (`OrderLine` becomes
/// `OL`), followed by a numeric suffix when the initials are already taken
/// by another type (`OL1`, `OL2`, ...). Once assigned, an alias stays with
/// its type for the lifetime of the registry, so asking again for the same
/// type returns the same alias.
///
/// Registries that must not hand out clashing aliases share one instance
/// through [`Builder::aliases`](crate::Builder::aliases).
#[derive(Debug, Default)]
pub struct AliasRegistry {
    aliases: Mutex<HashMap<String, TypeKey>>,
}

impl AliasRegistry {
    pub fn new() -> AliasRegistry {
        AliasRegistry::default()
    }

    /// Returns the alias of `ty`, allocating one derived from `name` if the
    /// type has none yet.
    pub fn allocate(&self, name: &str, ty: TypeKey) -> String {
        let base = base_alias(name);
        let mut aliases = lock(&self.aliases);

        let mut suffix = 0usize;

        loop {
            let alias = if suffix == 0 {
                base.clone()
            } else {
                format!("{base}{suffix}")
            };

            match aliases.entry(alias) {
                Entry::Vacant(entry) => {
                    trace!("allocated alias `{}` for `{}`", entry.key(), ty.name());
                    let alias = entry.key().clone();
                    entry.insert(ty);
                    return alias;
                }
                Entry::Occupied(entry) if *entry.get() == ty => return entry.key().clone(),
                Entry::Occupied(_) => suffix += 1,
            }
        }
    }

    /// The type owning `alias`, if any.
    pub fn owner(&self, alias: &str) -> Option<TypeKey> {
        lock(&self.aliases).get(alias).copied()
    }

    pub fn len(&self) -> usize {
        lock(&self.aliases).len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Initials of each word of `name`. Names without any word fall back to `T`.
fn base_alias(name: &str) -> String {
    let base: String = name
        .to_title_case()
        .split(' ')
        .filter_map(|word| word.chars().next())
        .collect();

    if base.is_empty() {
        "T".to_string()
    } else {
        base
    }
}
