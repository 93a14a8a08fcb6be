use std::collections::HashMap;
use std::fmt;
use std::ops::Index;
use std::sync::Arc;

use log::debug;

use crate::bit_ops;
use crate::container::FlagsContainer;
use crate::error::{Error, Result};
use crate::validator::{self, Value};

/// Names of one flag set and the bit assigned to each of them.
#[derive(Debug)]
struct Universe {
    names: Arc<[String]>,
    values: HashMap<String, u32>,
}

/// Immutable lookup mapping every flag name of a set to itself.
///
/// Iterates in the order the names were given. Cloning is cheap and every clone refers
/// to the same set.
#[derive(Clone)]
pub struct Flags {
    universe: Arc<Universe>,
}

impl Flags {
    fn new(names: Arc<[String]>) -> Self {
        let values = names
            .iter()
            .enumerate()
            .map(|(index, name)| (name.clone(), bit_ops::flag_at::<u32>(index)))
            .collect();

        Self {
            universe: Arc::new(Universe { names, values }),
        }
    }

    /// The stored name equal to `name`, if it belongs to the set.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.universe
            .values
            .get_key_value(name)
            .map(|(key, _)| key.as_str())
    }

    pub fn contains(&self, name: &str) -> bool {
        self.universe.values.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.universe.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.universe.names.is_empty()
    }

    pub fn names(&self) -> &[String] {
        &self.universe.names
    }

    /// `(name, name)` pairs in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> + '_ {
        self.universe
            .names
            .iter()
            .map(|name| (name.as_str(), name.as_str()))
    }

    /// Fails with [`Error::UnknownFlag`] if `name` is not part of the set.
    ///
    /// Same check as [`Flags::value_of`], for callers that do not need the bit.
    pub fn assert_valid_flag(&self, name: &str) -> Result<()> {
        self.value_of(name).map(|_| ())
    }

    /// The single-bit value assigned to `name`, or [`Error::UnknownFlag`] if `name` is not
    /// part of the set. Every container operation goes through this before touching its bits.
    pub fn value_of(&self, name: &str) -> Result<u32> {
        self.universe
            .values
            .get(name)
            .copied()
            .ok_or_else(|| Error::unknown_flag(name))
    }

    /// Whether both lookups come from the same factory call.
    pub fn same_set(&self, other: &Flags) -> bool {
        Arc::ptr_eq(&self.universe, &other.universe)
    }
}

/// # Panics
/// If `name` is not part of the set. Use [`Flags::get`] to check first.
impl Index<&str> for Flags {
    type Output = str;

    fn index(&self, name: &str) -> &str {
        match self.get(name) {
            Some(name) => name,
            None => panic!("no flag named {:?} in this set", name),
        }
    }
}

impl fmt::Debug for Flags {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.iter()).finish()
    }
}

/// Factory for the containers of one flag set.
#[derive(Debug, Clone)]
pub struct FlagSet {
    flags: Flags,
}

impl FlagSet {
    pub fn new<I, S>(names: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Ok(Self::from_names(validator::validate_names(names)?))
    }

    /// Builds a set from loosely typed input, see [`validator::validate_flags_list`].
    pub fn from_value(input: &Value) -> Result<Self> {
        Ok(Self::from_names(validator::validate_flags_list(input)?))
    }

    fn from_names(names: Arc<[String]>) -> Self {
        debug!("creating flag set with {} flags", names.len());
        Self {
            flags: Flags::new(names),
        }
    }

    pub fn flags(&self) -> &Flags {
        &self.flags
    }

    /// A container with no flag set.
    pub fn container(&self) -> FlagsContainer {
        FlagsContainer::new(self.flags.clone())
    }

    /// A container seeded with `initial`. Every name is checked before the container exists.
    pub fn container_with<I, S>(&self, initial: I) -> Result<FlagsContainer>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut container = self.container();
        container.add_flags(initial)?;
        Ok(container)
    }
}

/// Creates a flag set from `names`, returning its lookup and its container factory.
pub fn use_flags<I, S>(names: I) -> Result<(Flags, FlagSet)>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let set = FlagSet::new(names)?;
    Ok((set.flags().clone(), set))
}
