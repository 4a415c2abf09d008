/* the 6502 core: memory, opcode metadata, addressing, handlers and the CPU itself */
mod addressing_mode;
mod core_memory;
#[allow(clippy::module_inception)]
mod cpu;
mod handlers;
mod instruction;
mod operation;
mod status_flag;

#[cfg(test)]
mod tests;

pub use addressing_mode::AddressingMode;
pub use core_memory::{CoreMemory, MIN_MEMORY_SIZE};
pub use cpu::{Register, CPU};
pub use instruction::{from_opcode, Handler, Instruction, RealizedInstruction, OPCODE_TABLE};
pub use operation::{DecodedParams, Operation};
pub use status_flag::StatusFlag;

pub const MEMORY_SIZE: usize = 1 << 16;

/* the stack lives in page one */
pub const STACK_PAGE: u16 = 0x0100;

pub const STACK_POINTER_TOP: u8 = 0xff;

/* BRK loads the program counter from here (lo) and the next byte (hi) */
pub const BRK_VECTOR: u16 = 0xfffe;

/**
 * Converts a pair of bytes into a u16 to look up an address in memory.
 * The 6502 is little-endian, so this expects the low-order byte first.
 * addr(0xCD, 0xAB) returns 0xABCD.
 */
pub fn addr(lo_byte: u8, hi_byte: u8) -> u16 {
    ((hi_byte as u16) << 8) | (lo_byte as u16)
}

/**
 * Zero-page address operations take a single-byte and result in an
 * address on the first page of memory, which has addresses that begin
 * with 0x00. If this is passed in 0xAB, it returns 0x00AB. In effect this
 * is just a cast, but wrapping it as a function makes the goal clearer.
 */
pub fn zero_page_addr(b1: u8) -> u16 {
    b1 as u16
}
