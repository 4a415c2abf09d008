use crate::cpu::{addr, MEMORY_SIZE, STACK_PAGE};
use crate::EmulatorError;

/* the stack page has to exist, so anything smaller than two pages is rejected */
pub const MIN_MEMORY_SIZE: usize = (STACK_PAGE as usize) + 0x100;

/**
 * Flat, owned address space. Reads never fail: an address past the end of
 * a smaller-than-64k memory wraps around modulo the allocated size. Writes
 * past the end are refused and reported.
 */
#[derive(Debug, Clone)]
pub struct CoreMemory {
    memory: Box<[u8]>,
}

impl CoreMemory {
    /* full 64k address space */
    pub fn new() -> CoreMemory {
        CoreMemory {
            memory: vec![0; MEMORY_SIZE].into_boxed_slice(),
        }
    }

    pub fn with_size(size: usize) -> Result<CoreMemory, EmulatorError> {
        if !(MIN_MEMORY_SIZE..=MEMORY_SIZE).contains(&size) {
            return Err(EmulatorError::InvalidMemorySize(size));
        }

        Ok(CoreMemory {
            memory: vec![0; size].into_boxed_slice(),
        })
    }

    pub fn size(&self) -> usize {
        self.memory.len()
    }

    pub fn read(&self, address: u16) -> u8 {
        self.memory[address as usize % self.memory.len()]
    }

    /**
     * Reads a little-endian word: low byte at `address`, high byte at the
     * next address (wrapping at the top of the 16-bit space).
     */
    pub fn read16(&self, address: u16) -> u16 {
        addr(self.read(address), self.read(address.wrapping_add(1)))
    }

    pub fn write(&mut self, address: u16, value: u8) -> Result<(), EmulatorError> {
        self.check_bounds(address)?;
        self.memory[address as usize] = value;
        Ok(())
    }

    /**
     * Copies a whole image starting at `base`. Either every byte fits and is
     * written, or nothing is written.
     */
    pub fn write_array(&mut self, base: u16, bytes: &[u8]) -> Result<(), EmulatorError> {
        let start = base as usize;
        let end = start + bytes.len();
        if end > self.memory.len() {
            let last = end.saturating_sub(1).min(u16::MAX as usize) as u16;
            return Err(EmulatorError::OutOfBoundsWrite {
                address: last,
                size: self.memory.len(),
            });
        }

        self.memory[start..end].copy_from_slice(bytes);
        Ok(())
    }

    pub fn check_bounds(&self, address: u16) -> Result<(), EmulatorError> {
        if address as usize >= self.memory.len() {
            log::warn!(
                "rejecting write to 0x{address:04x}; memory is 0x{:x} bytes",
                self.memory.len()
            );
            return Err(EmulatorError::OutOfBoundsWrite {
                address,
                size: self.memory.len(),
            });
        }
        Ok(())
    }
}

impl Default for CoreMemory {
    fn default() -> Self {
        CoreMemory::new()
    }
}
