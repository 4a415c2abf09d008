use crate::cpu::{AddressingMode, Instruction, RealizedInstruction};

/**
 * What fetch worked out for one instruction: the operand byte (if the mode
 * has one), the effective address, and how long the instruction is. Built
 * by the resolver, read by exactly one handler, then dropped.
 */
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DecodedParams {
    pub operand: u8,
    pub address: u16,
    pub addr_mode: AddressingMode,
    pub bytes: u8,
    /* indexing or a branch target moved into another 256-byte page */
    pub page_crossed: bool,
}

/* one decoded instruction, plus the extra cycles it picked up while running */
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Operation {
    pub opcode: u8,
    pub location: u16,
    pub realized_instruction: RealizedInstruction,
    pub params: DecodedParams,
    extra_cycles: u16,
}

impl Operation {
    pub fn new(
        opcode: u8,
        location: u16,
        realized_instruction: RealizedInstruction,
        params: DecodedParams,
    ) -> Operation {
        Operation {
            opcode,
            location,
            realized_instruction,
            params,
            extra_cycles: 0,
        }
    }

    pub fn instruction(&self) -> Instruction {
        self.realized_instruction.instruction
    }

    pub(crate) fn add_cycles(&mut self, extra: u16) {
        self.extra_cycles += extra;
    }

    pub fn extra_cycles(&self) -> u16 {
        self.extra_cycles
    }

    pub fn cycles(&self) -> u16 {
        self.realized_instruction.cycles as u16 + self.extra_cycles
    }
}
