//! Word Buffer Implementation.
//!
//! Fixed-capacity storage for one of the two memories. The capacity is set at
//! construction and never changes; all access is by word index. The buffer
//! also tracks a high-water mark, one past the highest index ever loaded or
//! stored, which bounds the memory dump.

use std::io::{self, Write};
use std::ops::Index;

use crate::common::error::{LoadError, MemoryRegion};

/// A fixed-capacity, word-addressed memory.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct WordMemory {
    words: Vec<u32>,
    region: MemoryRegion,
    high_water: usize,
}

impl WordMemory {
    /// Creates a zero-filled memory holding `capacity` words.
    ///
    /// # Examples
    ///
    /// ```
    /// use mipsim_core::common::MemoryRegion;
    /// use mipsim_core::soc::WordMemory;
    ///
    /// let mem = WordMemory::new(MemoryRegion::Data, 1024);
    /// assert_eq!(mem.capacity(), 1024);
    /// assert_eq!(mem.read(1023), Some(0));
    /// assert_eq!(mem.read(1024), None);
    /// ```
    pub fn new(region: MemoryRegion, capacity: usize) -> Self {
        Self {
            words: vec![0; capacity],
            region,
            high_water: 0,
        }
    }

    /// Returns the capacity in words.
    pub fn capacity(&self) -> usize {
        self.words.len()
    }

    /// Returns which memory this buffer backs.
    pub fn region(&self) -> MemoryRegion {
        self.region
    }

    /// Returns one past the highest index ever loaded or stored.
    pub fn high_water(&self) -> usize {
        self.high_water
    }

    /// Reads the word at `index`, or `None` if it is past the end.
    #[inline]
    pub fn read(&self, index: usize) -> Option<u32> {
        self.words.get(index).copied()
    }

    /// Writes the word at `index`.
    ///
    /// Returns `None` without modifying anything if `index` is past the end.
    #[inline]
    #[must_use]
    pub fn write(&mut self, index: usize, value: u32) -> Option<()> {
        let slot = self.words.get_mut(index)?;
        *slot = value;
        self.high_water = self.high_water.max(index + 1);
        Some(())
    }

    /// Replaces the contents with `image` starting at index 0.
    ///
    /// Words past the end of the image are cleared to zero.
    ///
    /// # Errors
    ///
    /// Returns [`LoadError::CapacityExceeded`] if the image does not fit;
    /// the memory is left untouched.
    pub fn load(&mut self, image: &[u32]) -> Result<(), LoadError> {
        if image.len() > self.words.len() {
            return Err(LoadError::CapacityExceeded {
                region: self.region,
                supplied: image.len(),
                capacity: self.words.len(),
            });
        }
        let (head, tail) = self.words.split_at_mut(image.len());
        head.copy_from_slice(image);
        tail.fill(0);
        self.high_water = image.len();
        Ok(())
    }

    /// Returns the words up to the high-water mark.
    pub fn populated(&self) -> &[u32] {
        &self.words[..self.high_water]
    }

    /// Returns the whole backing array.
    pub fn as_slice(&self) -> &[u32] {
        &self.words
    }

    /// Writes `Address 0x<idx>: 0x<value>` for every populated word.
    ///
    /// # Errors
    ///
    /// Propagates write failures from `out`.
    pub fn dump<W: Write>(&self, out: &mut W) -> io::Result<()> {
        let title = match self.region {
            MemoryRegion::Instruction => "Instruction Memory:",
            MemoryRegion::Data => "Data Memory:",
        };
        writeln!(out, "{title}")?;
        for (i, value) in self.populated().iter().enumerate() {
            writeln!(out, "Address {i:#x}: {value:#x}")?;
        }
        Ok(())
    }
}

impl Index<usize> for WordMemory {
    type Output = u32;

    /// Indexes into the buffer; panics past the end like a slice.
    fn index(&self, index: usize) -> &Self::Output {
        &self.words[index]
    }
}
