//! # emu6502
//!
//! An instruction-level emulator for the MOS 6502. The core interprets the
//! instruction stream against a register file and a bounds-checked memory,
//! one fetch + execute per [`CPU::step`].
//!
//! ```rust
//! use emu6502::cpu::{CoreMemory, CPU};
//!
//! let mut cpu = CPU::new(CoreMemory::new());
//! cpu.load(0x0000, &[0xa9, 0x42]).unwrap(); // LDA #$42
//! cpu.reset(0x0000);
//! cpu.step().unwrap();
//!
//! assert_eq!(cpu.accumulator, 0x42);
//! assert_eq!(cpu.program_counter, 0x0002);
//! ```
//!
//! Modules:
//! - `cpu` - memory, opcode metadata, addressing, handlers and the CPU itself
//! - `config` - settings for the runtime and the command-line runner
//! - `runtime` - drives a CPU for a number of steps

pub mod config;
pub mod cpu;
pub mod runtime;

pub use config::EmulatorConfig;
pub use cpu::{CoreMemory, Operation, CPU};
pub use runtime::{RunSummary, Runtime};

use std::fmt;

/// Errors that can stop a step or a program load.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EmulatorError {
    /// The byte at `address` is not one of the documented opcodes.
    /// Raised while decoding, before any state changes.
    UnimplementedOpcode { opcode: u8, address: u16 },

    /// A write targeted an address past the end of the allocated memory.
    /// Memory is left untouched.
    OutOfBoundsWrite { address: u16, size: usize },

    /// The requested memory size cannot hold the zero page and stack page,
    /// or is larger than the 16-bit address space.
    InvalidMemorySize(usize),
}

impl fmt::Display for EmulatorError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            EmulatorError::UnimplementedOpcode { opcode, address } => {
                write!(f, "Opcode 0x{:02X} at 0x{:04X} is not implemented", opcode, address)
            }
            EmulatorError::OutOfBoundsWrite { address, size } => {
                write!(
                    f,
                    "Write to 0x{:04X} is outside the 0x{:X}-byte address space",
                    address, size
                )
            }
            EmulatorError::InvalidMemorySize(size) => {
                write!(
                    f,
                    "Memory size 0x{:X} must be between 0x200 and 0x10000 bytes",
                    size
                )
            }
        }
    }
}

impl std::error::Error for EmulatorError {}
