use crate::cpu::handlers;
use crate::cpu::{AddressingMode, DecodedParams, CPU};
use crate::EmulatorError;
use AddressingMode::*;

/* a handler returns the extra cycles it cost beyond the table's base count */
pub type Handler = fn(&mut CPU, &DecodedParams) -> Result<u16, EmulatorError>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Instruction {
    /* load/store opcodes */
    LDA, /* loads fixed value into A; can set zero flag */
    LDX, /* loads value at address into X; can set zero flag */
    LDY, /* loads fixed value into Y; can set zero flag */
    STA, /* store value from A into address */
    STX, /* stores value from X into address */
    STY, /* stores value from Y into address */

    /* transfer opcodes */
    TAX, /* transfer value from A into X; can set zero flag */
    TAY, /* transfer value from A into Y; can set zero flag */
    TSX, /* transfer value from Stack Pointer to X; can set zero flag */
    TXS, /* Transfer X to Stack Pointer */
    TXA, /* transfer value from X into A; can set zero flag */
    TYA, /* transfer value from Y into A; can set zero flag */

    /* comparisons */
    CMP, /* Compare A */
    CPX, /* Compare X */
    CPY, /* Compare Y */

    /* branch codes */
    BCC, /* Branch if Carry Clear */
    BCS, /* Branch if Carry Set */
    BEQ, /* Branch if Equal */
    BMI, /* Branch if Minus */
    BNE, /* Branch if Not Equal */
    BPL, /* Branch if Plus */
    BVC, /* Branch if Overflow Clear */
    BVS, /* Branch if Overflow Set */

    /* increment/decrement locations */
    DEC, /* Decrement Memory */
    DEX, /* Decrement X */
    DEY, /* Decrement Y */
    INC, /* Increment Memory */
    INX, /* Increment X */
    INY, /* Increment Y */

    /* bitwise operators */
    AND, /* Bitwise AND */
    ASL, /* Arithmetic Shift Left */
    BIT, /* Bit Test */
    EOR, /* Bitwise XOR */
    LSR, /* Logical Shift Right */
    ORA, /* Bitwise OR */

    /* arithmetic */
    ADC, /* Add With Carry */
    SBC, /* Subtract With Carry */

    /* rotates */
    ROL, /* Rotate Left */
    ROR, /* Rotate Right */

    /* clear & set flags */
    CLC, /* Clear Carry */
    CLD, /* Clear Decimal */
    CLI, /* Clear Interrupt Disable */
    CLV, /* Clear Overflow */
    SEC, /* Set Carry Flag */
    SED, /* Set Decimal Flag */
    SEI, /* Set Interrupt Disable */

    /* stack operations */
    PHA, /* Push A */
    PHP, /* Push Processor Status */
    PLA, /* Pull A */
    PLP, /* Pull Processor Status */

    /* jumps */
    JMP, /* Jump */
    JSR, /* Jump to Subroutine */
    RTS, /* Return from Subroutine */
    RTI, /* Return from Interrupt */

    /* others */
    BRK, /* Break (software IRQ) */
    NOP, /* No-op */

    XXX, /* slot with no documented instruction */
}

impl Instruction {
    /* mnemonic -> handler; the sentinel has none */
    pub fn handler(&self) -> Option<Handler> {
        let handler: Handler = match self {
            Instruction::ADC => handlers::adc,
            Instruction::AND => handlers::and,
            Instruction::ASL => handlers::asl,
            Instruction::BCC => handlers::bcc,
            Instruction::BCS => handlers::bcs,
            Instruction::BEQ => handlers::beq,
            Instruction::BIT => handlers::bit,
            Instruction::BMI => handlers::bmi,
            Instruction::BNE => handlers::bne,
            Instruction::BPL => handlers::bpl,
            Instruction::BRK => handlers::brk,
            Instruction::BVC => handlers::bvc,
            Instruction::BVS => handlers::bvs,
            Instruction::CLC => handlers::clc,
            Instruction::CLD => handlers::cld,
            Instruction::CLI => handlers::cli,
            Instruction::CLV => handlers::clv,
            Instruction::CMP => handlers::cmp,
            Instruction::CPX => handlers::cpx,
            Instruction::CPY => handlers::cpy,
            Instruction::DEC => handlers::dec,
            Instruction::DEX => handlers::dex,
            Instruction::DEY => handlers::dey,
            Instruction::EOR => handlers::eor,
            Instruction::INC => handlers::inc,
            Instruction::INX => handlers::inx,
            Instruction::INY => handlers::iny,
            Instruction::JMP => handlers::jmp,
            Instruction::JSR => handlers::jsr,
            Instruction::LDA => handlers::lda,
            Instruction::LDX => handlers::ldx,
            Instruction::LDY => handlers::ldy,
            Instruction::LSR => handlers::lsr,
            Instruction::NOP => handlers::nop,
            Instruction::ORA => handlers::ora,
            Instruction::PHA => handlers::pha,
            Instruction::PHP => handlers::php,
            Instruction::PLA => handlers::pla,
            Instruction::PLP => handlers::plp,
            Instruction::ROL => handlers::rol,
            Instruction::ROR => handlers::ror,
            Instruction::RTI => handlers::rti,
            Instruction::RTS => handlers::rts,
            Instruction::SBC => handlers::sbc,
            Instruction::SEC => handlers::sec,
            Instruction::SED => handlers::sed,
            Instruction::SEI => handlers::sei,
            Instruction::STA => handlers::sta,
            Instruction::STX => handlers::stx,
            Instruction::STY => handlers::sty,
            Instruction::TAX => handlers::tax,
            Instruction::TAY => handlers::tay,
            Instruction::TSX => handlers::tsx,
            Instruction::TXA => handlers::txa,
            Instruction::TXS => handlers::txs,
            Instruction::TYA => handlers::tya,
            Instruction::XXX => return None,
        };
        Some(handler)
    }

    pub const fn is_implemented(&self) -> bool {
        !matches!(self, Instruction::XXX)
    }

    pub const fn is_branch(&self) -> bool {
        matches!(
            self,
            Instruction::BCC
                | Instruction::BCS
                | Instruction::BEQ
                | Instruction::BMI
                | Instruction::BNE
                | Instruction::BPL
                | Instruction::BVC
                | Instruction::BVS
        )
    }

    /* these set the program counter themselves; execute must not advance it afterwards */
    pub const fn is_control_flow(&self) -> bool {
        self.is_branch()
            || matches!(
                self,
                Instruction::JMP
                    | Instruction::JSR
                    | Instruction::RTS
                    | Instruction::RTI
                    | Instruction::BRK
            )
    }

    /* stores and read-modify-write ops; their target is bounds-checked at decode */
    pub const fn writes_memory(&self) -> bool {
        matches!(
            self,
            Instruction::STA
                | Instruction::STX
                | Instruction::STY
                | Instruction::ASL
                | Instruction::LSR
                | Instruction::ROL
                | Instruction::ROR
                | Instruction::INC
                | Instruction::DEC
        )
    }
}

/* static per-opcode metadata */
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RealizedInstruction {
    pub instruction: Instruction,
    pub addr_mode: AddressingMode,
    pub bytes: u8,
    pub cycles: u8,
    /* added when the effective address lands on another page */
    pub page_cycles: u8,
}

impl RealizedInstruction {
    pub const UNIMPLEMENTED: RealizedInstruction = RealizedInstruction {
        instruction: Instruction::XXX,
        addr_mode: Implicit,
        bytes: 1,
        cycles: 0,
        page_cycles: 0,
    };
}

pub static OPCODE_TABLE: [RealizedInstruction; 256] = build_opcode_table();

pub fn from_opcode(opcode: u8) -> RealizedInstruction {
    OPCODE_TABLE[opcode as usize]
}

const fn build_opcode_table() -> [RealizedInstruction; 256] {
    let mut table = [RealizedInstruction::UNIMPLEMENTED; 256];
    let mut opcode = 0;
    while opcode < 256 {
        table[opcode] = realize(opcode as u8);
        opcode += 1;
    }
    table
}

const fn realize(opcode: u8) -> RealizedInstruction {
    let (instruction, addr_mode, cycles) = match opcode {
        0x00 => (Instruction::BRK, Implicit, 7),
        0x01 => (Instruction::ORA, IndirectX, 6),
        0x05 => (Instruction::ORA, ZeroPage, 3),
        0x06 => (Instruction::ASL, ZeroPage, 5),
        0x08 => (Instruction::PHP, Implicit, 3),
        0x09 => (Instruction::ORA, Immediate, 2),
        0x0a => (Instruction::ASL, Accumulator, 2),
        0x0d => (Instruction::ORA, Absolute, 4),
        0x0e => (Instruction::ASL, Absolute, 6),
        0x10 => (Instruction::BPL, Relative, 2),
        0x11 => (Instruction::ORA, IndirectY, 5),
        0x15 => (Instruction::ORA, ZeroPageX, 4),
        0x16 => (Instruction::ASL, ZeroPageX, 6),
        0x18 => (Instruction::CLC, Implicit, 2),
        0x19 => (Instruction::ORA, AbsoluteY, 4),
        0x1d => (Instruction::ORA, AbsoluteX, 4),
        0x1e => (Instruction::ASL, AbsoluteX, 7),
        0x20 => (Instruction::JSR, Absolute, 6),
        0x21 => (Instruction::AND, IndirectX, 6),
        0x24 => (Instruction::BIT, ZeroPage, 3),
        0x25 => (Instruction::AND, ZeroPage, 3),
        0x26 => (Instruction::ROL, ZeroPage, 5),
        0x28 => (Instruction::PLP, Implicit, 4),
        0x29 => (Instruction::AND, Immediate, 2),
        0x2a => (Instruction::ROL, Accumulator, 2),
        0x2c => (Instruction::BIT, Absolute, 4),
        0x2d => (Instruction::AND, Absolute, 4),
        0x2e => (Instruction::ROL, Absolute, 6),
        0x30 => (Instruction::BMI, Relative, 2),
        0x31 => (Instruction::AND, IndirectY, 5),
        0x35 => (Instruction::AND, ZeroPageX, 4),
        0x36 => (Instruction::ROL, ZeroPageX, 6),
        0x38 => (Instruction::SEC, Implicit, 2),
        0x39 => (Instruction::AND, AbsoluteY, 4),
        0x3d => (Instruction::AND, AbsoluteX, 4),
        0x3e => (Instruction::ROL, AbsoluteX, 7),
        0x40 => (Instruction::RTI, Implicit, 6),
        0x41 => (Instruction::EOR, IndirectX, 6),
        0x45 => (Instruction::EOR, ZeroPage, 3),
        0x46 => (Instruction::LSR, ZeroPage, 5),
        0x48 => (Instruction::PHA, Implicit, 3),
        0x49 => (Instruction::EOR, Immediate, 2),
        0x4a => (Instruction::LSR, Accumulator, 2),
        0x4c => (Instruction::JMP, Absolute, 3),
        0x4d => (Instruction::EOR, Absolute, 4),
        0x4e => (Instruction::LSR, Absolute, 6),
        0x50 => (Instruction::BVC, Relative, 2),
        0x51 => (Instruction::EOR, IndirectY, 5),
        0x55 => (Instruction::EOR, ZeroPageX, 4),
        0x56 => (Instruction::LSR, ZeroPageX, 6),
        0x58 => (Instruction::CLI, Implicit, 2),
        0x59 => (Instruction::EOR, AbsoluteY, 4),
        0x5d => (Instruction::EOR, AbsoluteX, 4),
        0x5e => (Instruction::LSR, AbsoluteX, 7),
        0x60 => (Instruction::RTS, Implicit, 6),
        0x61 => (Instruction::ADC, IndirectX, 6),
        0x65 => (Instruction::ADC, ZeroPage, 3),
        0x66 => (Instruction::ROR, ZeroPage, 5),
        0x68 => (Instruction::PLA, Implicit, 4),
        0x69 => (Instruction::ADC, Immediate, 2),
        0x6a => (Instruction::ROR, Accumulator, 2),
        0x6c => (Instruction::JMP, Indirect, 5),
        0x6d => (Instruction::ADC, Absolute, 4),
        0x6e => (Instruction::ROR, Absolute, 6),
        0x70 => (Instruction::BVS, Relative, 2),
        0x71 => (Instruction::ADC, IndirectY, 5),
        0x75 => (Instruction::ADC, ZeroPageX, 4),
        0x76 => (Instruction::ROR, ZeroPageX, 6),
        0x78 => (Instruction::SEI, Implicit, 2),
        0x79 => (Instruction::ADC, AbsoluteY, 4),
        0x7d => (Instruction::ADC, AbsoluteX, 4),
        0x7e => (Instruction::ROR, AbsoluteX, 7),
        0x81 => (Instruction::STA, IndirectX, 6),
        0x84 => (Instruction::STY, ZeroPage, 3),
        0x85 => (Instruction::STA, ZeroPage, 3),
        0x86 => (Instruction::STX, ZeroPage, 3),
        0x88 => (Instruction::DEY, Implicit, 2),
        0x8a => (Instruction::TXA, Implicit, 2),
        0x8c => (Instruction::STY, Absolute, 4),
        0x8d => (Instruction::STA, Absolute, 4),
        0x8e => (Instruction::STX, Absolute, 4),
        0x90 => (Instruction::BCC, Relative, 2),
        0x91 => (Instruction::STA, IndirectY, 6),
        0x94 => (Instruction::STY, ZeroPageX, 4),
        0x95 => (Instruction::STA, ZeroPageX, 4),
        0x96 => (Instruction::STX, ZeroPageY, 4),
        0x98 => (Instruction::TYA, Implicit, 2),
        0x99 => (Instruction::STA, AbsoluteY, 5),
        0x9a => (Instruction::TXS, Implicit, 2),
        0x9d => (Instruction::STA, AbsoluteX, 5),
        0xa0 => (Instruction::LDY, Immediate, 2),
        0xa1 => (Instruction::LDA, IndirectX, 6),
        0xa2 => (Instruction::LDX, Immediate, 2),
        0xa4 => (Instruction::LDY, ZeroPage, 3),
        0xa5 => (Instruction::LDA, ZeroPage, 3),
        0xa6 => (Instruction::LDX, ZeroPage, 3),
        0xa8 => (Instruction::TAY, Implicit, 2),
        0xa9 => (Instruction::LDA, Immediate, 2),
        0xaa => (Instruction::TAX, Implicit, 2),
        0xac => (Instruction::LDY, Absolute, 4),
        0xad => (Instruction::LDA, Absolute, 4),
        0xae => (Instruction::LDX, Absolute, 4),
        0xb0 => (Instruction::BCS, Relative, 2),
        0xb1 => (Instruction::LDA, IndirectY, 5),
        0xb4 => (Instruction::LDY, ZeroPageX, 4),
        0xb5 => (Instruction::LDA, ZeroPageX, 4),
        0xb6 => (Instruction::LDX, ZeroPageY, 4),
        0xb8 => (Instruction::CLV, Implicit, 2),
        0xb9 => (Instruction::LDA, AbsoluteY, 4),
        0xba => (Instruction::TSX, Implicit, 2),
        0xbc => (Instruction::LDY, AbsoluteX, 4),
        0xbd => (Instruction::LDA, AbsoluteX, 4),
        0xbe => (Instruction::LDX, AbsoluteY, 4),
        0xc0 => (Instruction::CPY, Immediate, 2),
        0xc1 => (Instruction::CMP, IndirectX, 6),
        0xc4 => (Instruction::CPY, ZeroPage, 3),
        0xc5 => (Instruction::CMP, ZeroPage, 3),
        0xc6 => (Instruction::DEC, ZeroPage, 5),
        0xc8 => (Instruction::INY, Implicit, 2),
        0xc9 => (Instruction::CMP, Immediate, 2),
        0xca => (Instruction::DEX, Implicit, 2),
        0xcc => (Instruction::CPY, Absolute, 4),
        0xcd => (Instruction::CMP, Absolute, 4),
        0xce => (Instruction::DEC, Absolute, 6),
        0xd0 => (Instruction::BNE, Relative, 2),
        0xd1 => (Instruction::CMP, IndirectY, 5),
        0xd5 => (Instruction::CMP, ZeroPageX, 4),
        0xd6 => (Instruction::DEC, ZeroPageX, 6),
        0xd8 => (Instruction::CLD, Implicit, 2),
        0xd9 => (Instruction::CMP, AbsoluteY, 4),
        0xdd => (Instruction::CMP, AbsoluteX, 4),
        0xde => (Instruction::DEC, AbsoluteX, 7),
        0xe0 => (Instruction::CPX, Immediate, 2),
        0xe1 => (Instruction::SBC, IndirectX, 6),
        0xe4 => (Instruction::CPX, ZeroPage, 3),
        0xe5 => (Instruction::SBC, ZeroPage, 3),
        0xe6 => (Instruction::INC, ZeroPage, 5),
        0xe8 => (Instruction::INX, Implicit, 2),
        0xe9 => (Instruction::SBC, Immediate, 2),
        0xea => (Instruction::NOP, Implicit, 2),
        0xec => (Instruction::CPX, Absolute, 4),
        0xed => (Instruction::SBC, Absolute, 4),
        0xee => (Instruction::INC, Absolute, 6),
        0xf0 => (Instruction::BEQ, Relative, 2),
        0xf1 => (Instruction::SBC, IndirectY, 5),
        0xf5 => (Instruction::SBC, ZeroPageX, 4),
        0xf6 => (Instruction::INC, ZeroPageX, 6),
        0xf8 => (Instruction::SED, Implicit, 2),
        0xf9 => (Instruction::SBC, AbsoluteY, 4),
        0xfd => (Instruction::SBC, AbsoluteX, 4),
        0xfe => (Instruction::INC, AbsoluteX, 7),
        _ => return RealizedInstruction::UNIMPLEMENTED,
    };

    RealizedInstruction {
        instruction,
        addr_mode,
        bytes: addr_mode.get_bytes(),
        cycles,
        page_cycles: page_cycles(instruction, addr_mode),
    }
}

/* reads through an indexed mode pay one cycle on a page cross; stores and RMW always pay it up front */
const fn page_cycles(instruction: Instruction, addr_mode: AddressingMode) -> u8 {
    if instruction.is_branch() {
        return 1;
    }
    match addr_mode {
        AbsoluteX | AbsoluteY | IndirectY if !instruction.writes_memory() => 1,
        _ => 0,
    }
}
