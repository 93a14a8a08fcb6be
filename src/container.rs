use std::fmt;

use log::trace;

use crate::bit_ops;
use crate::error::Result;
use crate::flag_set::Flags;

/// A combination of flags from one flag set, backed by a single `u32`.
///
/// Every operation checks its names against the set the container was created from and
/// fails with [`Error::UnknownFlag`](crate::Error::UnknownFlag) before touching any bit.
pub struct FlagsContainer {
    flags: Flags,
    current: u32,
}

impl FlagsContainer {
    pub(crate) fn new(flags: Flags) -> Self {
        Self { flags, current: 0 }
    }

    pub fn has_flag(&self, name: &str) -> Result<bool> {
        let flag = self.flags.value_of(name)?;
        Ok(bit_ops::has_flag(self.current, flag))
    }

    pub fn add_flag(&mut self, name: &str) -> Result<()> {
        let flag = self.flags.value_of(name)?;
        self.current = bit_ops::add_flag(self.current, flag);
        trace!("added {} -> {:#034b}", name, self.current);
        Ok(())
    }

    pub fn remove_flag(&mut self, name: &str) -> Result<()> {
        let flag = self.flags.value_of(name)?;
        self.current = bit_ops::remove_flag(self.current, flag);
        trace!("removed {} -> {:#034b}", name, self.current);
        Ok(())
    }

    /// Sets every flag in `names`. Nothing changes unless all of them are valid.
    pub fn add_flags<I, S>(&mut self, names: I) -> Result<()>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let values = names
            .into_iter()
            .map(|name| self.flags.value_of(name.as_ref()))
            .collect::<Result<Vec<u32>>>()?;

        self.current = bit_ops::add_flags(self.current, values);
        trace!("added flags -> {:#034b}", self.current);
        Ok(())
    }

    /// The raw bitmask.
    pub fn bits(&self) -> u32 {
        self.current
    }

    pub fn is_empty(&self) -> bool {
        self.current == 0
    }

    /// The set this container belongs to.
    pub fn flags(&self) -> &Flags {
        &self.flags
    }

    /// Names of the flags currently set, in flag set order.
    pub fn set_flags(&self) -> impl Iterator<Item = &str> + '_ {
        self.flags
            .names()
            .iter()
            .enumerate()
            .filter(move |(index, _)| {
                bit_ops::has_flag(self.current, bit_ops::flag_at::<u32>(*index))
            })
            .map(|(_, name)| name.as_str())
    }
}

impl fmt::Debug for FlagsContainer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.set_flags()).finish()
    }
}
