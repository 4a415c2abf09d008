use crate::cpu::{zero_page_addr, DecodedParams, CPU};
use crate::EmulatorError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AddressingMode {
    Implicit,
    Accumulator,
    Immediate,
    ZeroPage,
    ZeroPageX,
    ZeroPageY,
    Relative,
    Absolute,
    AbsoluteX,
    AbsoluteY,
    Indirect,
    IndirectX, /* (zp,X), pre-indexed */
    IndirectY, /* (zp),Y, post-indexed */
}

impl AddressingMode {
    /* opcode byte plus operand bytes */
    pub const fn get_bytes(&self) -> u8 {
        match self {
            AddressingMode::Implicit | AddressingMode::Accumulator => 1,
            AddressingMode::Immediate
            | AddressingMode::ZeroPage
            | AddressingMode::ZeroPageX
            | AddressingMode::ZeroPageY
            | AddressingMode::Relative
            | AddressingMode::IndirectX
            | AddressingMode::IndirectY => 2,
            AddressingMode::Absolute
            | AddressingMode::AbsoluteX
            | AddressingMode::AbsoluteY
            | AddressingMode::Indirect => 3,
        }
    }

    /* behavior based on: https://www.nesdev.org/obelisk-6502-guide/addressing.html */
    /**
     * Works out the effective address (and the operand byte, where the mode
     * has one) for an instruction whose opcode sits at `pc`. Only reads
     * memory; the CPU is not modified.
     */
    pub fn resolve(&self, cpu: &CPU, pc: u16) -> DecodedParams {
        let byte1 = cpu.read_mem(pc.wrapping_add(1));

        let (address, page_crossed) = match self {
            AddressingMode::Implicit => (pc, false),
            AddressingMode::Accumulator => (0, false),
            AddressingMode::Immediate => (pc.wrapping_add(1), false),
            AddressingMode::ZeroPage => (zero_page_addr(byte1), false),
            /* index wraps inside the zero page, never into page one */
            AddressingMode::ZeroPageX => (zero_page_addr(byte1.wrapping_add(cpu.index_x)), false),
            AddressingMode::ZeroPageY => (zero_page_addr(byte1.wrapping_add(cpu.index_y)), false),
            AddressingMode::Relative => {
                let next = pc.wrapping_add(2);
                let target = next.wrapping_add_signed(byte1 as i8 as i16);
                (target, crosses_page(next, target))
            }
            AddressingMode::Absolute => (cpu.read_mem16(pc.wrapping_add(1)), false),
            AddressingMode::AbsoluteX => {
                indexed(cpu.read_mem16(pc.wrapping_add(1)), cpu.index_x)
            }
            AddressingMode::AbsoluteY => {
                indexed(cpu.read_mem16(pc.wrapping_add(1)), cpu.index_y)
            }
            /* only used for JMP; the page-wrap bug of the original chip is not emulated */
            AddressingMode::Indirect => {
                let pointer = cpu.read_mem16(pc.wrapping_add(1));
                (cpu.read_mem16(pointer), false)
            }
            AddressingMode::IndirectX => {
                (cpu.read_zero_page16(byte1.wrapping_add(cpu.index_x)), false)
            }
            AddressingMode::IndirectY => indexed(cpu.read_zero_page16(byte1), cpu.index_y),
        };

        let operand = match self {
            AddressingMode::Accumulator => cpu.accumulator,
            AddressingMode::Implicit | AddressingMode::Relative | AddressingMode::Indirect => 0,
            _ => cpu.read_mem(address),
        };

        DecodedParams {
            operand,
            address,
            addr_mode: *self,
            bytes: self.get_bytes(),
            page_crossed,
        }
    }

    /* read-modify-write and store instructions send their result back through the mode */
    pub fn write(&self, cpu: &mut CPU, address: u16, new_val: u8) -> Result<(), EmulatorError> {
        match self {
            AddressingMode::Accumulator => {
                cpu.accumulator = new_val;
                Ok(())
            }
            _ => cpu.write_mem(address, new_val),
        }
    }

    /* does the mode name a memory location (as opposed to a register or nothing)? */
    pub fn targets_memory(&self) -> bool {
        !matches!(
            self,
            AddressingMode::Implicit | AddressingMode::Accumulator | AddressingMode::Relative
        )
    }
}

fn indexed(base: u16, index: u8) -> (u16, bool) {
    let address = base.wrapping_add(index as u16);
    (address, crosses_page(base, address))
}

fn crosses_page(from: u16, to: u16) -> bool {
    from & 0xff00 != to & 0xff00
}
