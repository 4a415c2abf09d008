use crate::cpu::{
    addr, from_opcode, CoreMemory, Operation, StatusFlag, STACK_PAGE, STACK_POINTER_TOP,
};
use crate::EmulatorError;
use std::fmt;

/* names for the 8-bit registers, for callers that pick one at runtime */
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Register {
    Accumulator,
    IndexX,
    IndexY,
    StackPointer,
    Status,
}

pub struct CPU {
    pub accumulator: u8,
    pub index_x: u8,
    pub index_y: u8,
    pub s_register: u8,
    pub program_counter: u16,
    pub status: u8,
    memory: CoreMemory,
}

impl CPU {
    /* takes ownership of the memory; registers start out as after reset(0) */
    pub fn new(memory: CoreMemory) -> CPU {
        CPU {
            accumulator: 0x00,
            index_x: 0x00,
            index_y: 0x00,
            s_register: STACK_POINTER_TOP,
            program_counter: 0x0000,
            status: 0x00,
            memory,
        }
    }

    /**
     * Clears A, X, Y and the status byte, puts the stack pointer at the top
     * of the stack page and starts executing at `start`. Memory is kept.
     */
    pub fn reset(&mut self, start: u16) {
        self.accumulator = 0x00;
        self.index_x = 0x00;
        self.index_y = 0x00;
        self.status = 0x00;
        self.s_register = STACK_POINTER_TOP;
        self.program_counter = start;
        log::debug!("reset; program counter at 0x{start:04x}");
    }

    /**
     * Decodes the instruction at the program counter without changing any
     * state. Fails on an undocumented opcode, or when a store or
     * read-modify-write would land outside memory.
     */
    pub fn fetch(&self) -> Result<Operation, EmulatorError> {
        let location = self.program_counter;
        let opcode = self.read_mem(location);
        let realized_instruction = from_opcode(opcode);

        if !realized_instruction.instruction.is_implemented() {
            log::warn!("unimplemented opcode 0x{opcode:02x} at 0x{location:04x}");
            return Err(EmulatorError::UnimplementedOpcode {
                opcode,
                address: location,
            });
        }

        let params = realized_instruction.addr_mode.resolve(self, location);

        if realized_instruction.instruction.writes_memory() && params.addr_mode.targets_memory() {
            self.memory.check_bounds(params.address)?;
        }

        Ok(Operation::new(opcode, location, realized_instruction, params))
    }

    /**
     * Runs a decoded instruction. Afterwards the program counter moves past
     * the instruction, unless it was a branch, jump, call, return or BRK:
     * those have already put the program counter where it belongs.
     */
    pub fn execute(&mut self, operation: &mut Operation) -> Result<(), EmulatorError> {
        let instruction = operation.instruction();
        let handler = instruction
            .handler()
            .ok_or(EmulatorError::UnimplementedOpcode {
                opcode: operation.opcode,
                address: operation.location,
            })?;

        let extra_cycles = handler(self, &operation.params)?;
        operation.add_cycles(extra_cycles);

        if !instruction.is_branch() && operation.params.page_crossed {
            operation.add_cycles(operation.realized_instruction.page_cycles as u16);
        }

        if !instruction.is_control_flow() {
            self.program_counter = self
                .program_counter
                .wrapping_add(operation.realized_instruction.bytes as u16);
        }

        Ok(())
    }

    /* one fetch + execute; hands back what ran, for tracing and cycle counts */
    pub fn step(&mut self) -> Result<Operation, EmulatorError> {
        let mut operation = self.fetch()?;
        self.execute(&mut operation)?;

        log::trace!(
            "0x{:04x} {:?} {:?} ({} cycles)",
            operation.location,
            operation.instruction(),
            operation.params.addr_mode,
            operation.cycles()
        );

        Ok(operation)
    }

    /* copies a program image into memory */
    pub fn load(&mut self, base: u16, program: &[u8]) -> Result<(), EmulatorError> {
        self.memory.write_array(base, program)?;
        log::debug!("loaded {} bytes at 0x{base:04x}", program.len());
        Ok(())
    }

    pub fn register(&self, register: Register) -> u8 {
        match register {
            Register::Accumulator => self.accumulator,
            Register::IndexX => self.index_x,
            Register::IndexY => self.index_y,
            Register::StackPointer => self.s_register,
            Register::Status => self.status,
        }
    }

    pub fn set_register(&mut self, register: Register, value: u8) {
        match register {
            Register::Accumulator => self.accumulator = value,
            Register::IndexX => self.index_x = value,
            Register::IndexY => self.index_y = value,
            Register::StackPointer => self.s_register = value,
            Register::Status => self.status = value,
        }
    }

    pub fn program_counter(&self) -> u16 {
        self.program_counter
    }

    pub fn set_program_counter(&mut self, value: u16) {
        self.program_counter = value;
    }

    pub fn flag(&self, flag: StatusFlag) -> bool {
        flag.is_set(self)
    }

    pub fn set_flag(&mut self, flag: StatusFlag, new_val: bool) {
        flag.update_bool(self, new_val);
    }

    pub fn update_flag(&mut self, flag: StatusFlag, new_val: bool) {
        flag.update_bool(self, new_val);
    }

    pub fn update_zero_neg_flags(&mut self, new_val: u8) {
        self.update_flag(StatusFlag::Zero, new_val == 0);
        self.update_flag(StatusFlag::Negative, new_val & 0x80 != 0);
    }

    /* writes at the stack pointer, then moves it down; wraps within the page */
    pub fn push(&mut self, data: u8) -> Result<(), EmulatorError> {
        self.write_mem(STACK_PAGE | self.s_register as u16, data)?;
        self.s_register = self.s_register.wrapping_sub(1);
        Ok(())
    }

    pub fn pop(&mut self) -> u8 {
        self.s_register = self.s_register.wrapping_add(1);
        self.read_mem(STACK_PAGE | self.s_register as u16)
    }

    /* high byte first, so the low byte comes off the stack first */
    pub fn push_memory_loc(&mut self, mem_loc: u16) -> Result<(), EmulatorError> {
        self.push((mem_loc >> 8) as u8)?;
        self.push((mem_loc & 0xff) as u8)
    }

    pub fn pop_memory_loc(&mut self) -> u16 {
        let lower = self.pop();
        let upper = self.pop();

        addr(lower, upper)
    }

    pub fn write_mem(&mut self, addr: u16, data: u8) -> Result<(), EmulatorError> {
        self.memory.write(addr, data)
    }

    pub fn read_mem(&self, addr: u16) -> u8 {
        self.memory.read(addr)
    }

    pub fn read_mem16(&self, addr: u16) -> u16 {
        self.memory.read16(addr)
    }

    /* pointer stored in the zero page; the high byte wraps from 0xff back to 0x00 */
    pub fn read_zero_page16(&self, zero_page: u8) -> u16 {
        addr(
            self.read_mem(zero_page as u16),
            self.read_mem(zero_page.wrapping_add(1) as u16),
        )
    }

    pub fn memory(&self) -> &CoreMemory {
        &self.memory
    }

    pub fn memory_mut(&mut self) -> &mut CoreMemory {
        &mut self.memory
    }
}

/* register dump, e.g. "PC:0002 A:42 X:00 Y:00 SP:ff P:nv-bdizc" */
impl fmt::Display for CPU {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let flags: String = StatusFlag::ALL
            .iter()
            .rev()
            .map(|flag| match (flag, flag.is_set(self)) {
                (StatusFlag::Unused, _) => '-',
                (_, true) => flag.symbol().to_ascii_uppercase(),
                (_, false) => flag.symbol(),
            })
            .collect();

        write!(
            f,
            "PC:{:04x} A:{:02x} X:{:02x} Y:{:02x} SP:{:02x} P:{}",
            self.program_counter,
            self.accumulator,
            self.index_x,
            self.index_y,
            self.s_register,
            flags
        )
    }
}
