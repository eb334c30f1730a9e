//! Data Memory.
//!
//! This module implements the byte-addressable data store backing loads,
//! stores and the string syscall. It provides:
//! 1. **Sparse Storage:** Only bytes holding a non-zero value occupy space; everything else reads 0.
//! 2. **Word Access:** Little-endian 32-bit loads and stores with alignment checks.
//! 3. **Bounds:** Addresses at or above the configured limit fault instead of wrapping.

use std::collections::BTreeMap;

use crate::common::constants::{MAX_STRING_BYTES, WORD_BYTES};
use crate::common::error::MemoryFault;
use crate::config::MemoryConfig;

/// Sparse little-endian byte store.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Memory {
    bytes: BTreeMap<u32, u8>,
    limit: u32,
}

impl Memory {
    /// Creates an empty memory.
    ///
    /// # Arguments
    ///
    /// * `limit` - First address that is out of range.
    pub const fn new(limit: u32) -> Self {
        Self {
            bytes: BTreeMap::new(),
            limit,
        }
    }

    /// Creates an empty memory sized by the configuration.
    pub const fn from_config(config: &MemoryConfig) -> Self {
        Self::new(config.limit)
    }

    /// Returns the first out-of-range address.
    pub const fn limit(&self) -> u32 {
        self.limit
    }

    /// Returns `true` when no non-zero byte has been stored.
    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    /// Validates an access of `width` bytes at `addr`.
    fn check(&self, addr: u32, width: u32) -> Result<(), MemoryFault> {
        if addr % width != 0 {
            return Err(MemoryFault::Misaligned { addr, width });
        }
        match addr.checked_add(width - 1) {
            Some(last) if last < self.limit => Ok(()),
            _ => Err(MemoryFault::OutOfRange { addr }),
        }
    }

    fn get(&self, addr: u32) -> u8 {
        self.bytes.get(&addr).copied().unwrap_or(0)
    }

    fn put(&mut self, addr: u32, val: u8) {
        if val == 0 {
            let _ = self.bytes.remove(&addr);
        } else {
            let _ = self.bytes.insert(addr, val);
        }
    }

    /// Reads one byte.
    ///
    /// # Errors
    ///
    /// [`MemoryFault::OutOfRange`] at or past the limit.
    pub fn load_byte(&self, addr: u32) -> Result<u8, MemoryFault> {
        self.check(addr, 1)?;
        Ok(self.get(addr))
    }

    /// Writes one byte.
    ///
    /// # Errors
    ///
    /// [`MemoryFault::OutOfRange`] at or past the limit; nothing is written.
    pub fn store_byte(&mut self, addr: u32, val: u8) -> Result<(), MemoryFault> {
        self.check(addr, 1)?;
        self.put(addr, val);
        Ok(())
    }

    /// Reads a little-endian word.
    ///
    /// # Errors
    ///
    /// [`MemoryFault::Misaligned`] unless `addr` is a multiple of 4, and
    /// [`MemoryFault::OutOfRange`] when the word crosses the limit.
    pub fn load_word(&self, addr: u32) -> Result<u32, MemoryFault> {
        self.check(addr, WORD_BYTES)?;
        let bytes = [
            self.get(addr),
            self.get(addr + 1),
            self.get(addr + 2),
            self.get(addr + 3),
        ];
        Ok(u32::from_le_bytes(bytes))
    }

    /// Writes a little-endian word.
    ///
    /// # Errors
    ///
    /// Same as [`Memory::load_word`]; a faulting store writes nothing.
    ///
    /// # Examples
    ///
    /// ```
    /// use mipsim_core::soc::memory::Memory;
    ///
    /// let mut mem = Memory::new(0x8000_0000);
    /// mem.store_word(0x1001_0000, 0x1122_3344).unwrap();
    /// assert_eq!(mem.load_byte(0x1001_0000).unwrap(), 0x44);
    /// assert!(mem.store_word(0x1001_0002, 1).is_err());
    /// ```
    pub fn store_word(&mut self, addr: u32, val: u32) -> Result<(), MemoryFault> {
        self.check(addr, WORD_BYTES)?;
        for (offset, byte) in (0..).zip(val.to_le_bytes()) {
            self.put(addr + offset, byte);
        }
        Ok(())
    }

    /// Word load under its short name.
    ///
    /// # Errors
    ///
    /// See [`Memory::load_word`].
    pub fn load(&self, addr: u32) -> Result<u32, MemoryFault> {
        self.load_word(addr)
    }

    /// Word store under its short name.
    ///
    /// # Errors
    ///
    /// See [`Memory::store_word`].
    pub fn store(&mut self, addr: u32, val: u32) -> Result<(), MemoryFault> {
        self.store_word(addr, val)
    }

    /// Reads a NUL-terminated string starting at `addr`.
    ///
    /// Reading stops at the first zero byte, or after 64 KiB if none is found.
    /// Bytes are decoded as UTF-8, with invalid sequences replaced.
    ///
    /// # Errors
    ///
    /// [`MemoryFault::OutOfRange`] when the string runs into the limit before
    /// terminating.
    pub fn read_c_string(&self, addr: u32) -> Result<String, MemoryFault> {
        let mut bytes = Vec::new();
        let mut cursor = addr;
        while bytes.len() < MAX_STRING_BYTES {
            let byte = self.load_byte(cursor)?;
            if byte == 0 {
                break;
            }
            bytes.push(byte);
            cursor = cursor
                .checked_add(1)
                .ok_or(MemoryFault::OutOfRange { addr: cursor })?;
        }
        Ok(String::from_utf8_lossy(&bytes).into_owned())
    }

    /// Captures every aligned word holding at least one non-zero byte.
    ///
    /// Values are the signed view of the little-endian word.
    pub fn snapshot(&self) -> BTreeMap<u32, i32> {
        let mut words = BTreeMap::new();
        for &addr in self.bytes.keys() {
            let base = addr & !(WORD_BYTES - 1);
            let _ = words
                .entry(base)
                .or_insert_with(|| self.word_unchecked(base) as i32);
        }
        words
    }

    /// Assembles the word at an aligned base without range checks.
    fn word_unchecked(&self, base: u32) -> u32 {
        let byte = |offset: u32| base.checked_add(offset).map_or(0, |a| self.get(a));
        u32::from_le_bytes([byte(0), byte(1), byte(2), byte(3)])
    }
}

impl Default for Memory {
    fn default() -> Self {
        Self::from_config(&MemoryConfig::default())
    }
}
