use crate::cpu::CPU;

/* bit positions match the pushed status byte: NV-BDIZC */
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusFlag {
    Carry,
    Zero,
    InterruptDisable,
    Decimal,
    /* only meaningful in the copy pushed by PHP/BRK */
    Break,
    /* no CPU effect; always pushed as 1 */
    Unused,
    Overflow,
    Negative,
}

impl StatusFlag {
    pub const ALL: [StatusFlag; 8] = [
        StatusFlag::Carry,
        StatusFlag::Zero,
        StatusFlag::InterruptDisable,
        StatusFlag::Decimal,
        StatusFlag::Break,
        StatusFlag::Unused,
        StatusFlag::Overflow,
        StatusFlag::Negative,
    ];

    pub fn bit(&self) -> u8 {
        match self {
            StatusFlag::Carry => 0,
            StatusFlag::Zero => 1,
            StatusFlag::InterruptDisable => 2,
            StatusFlag::Decimal => 3,
            StatusFlag::Break => 4,
            StatusFlag::Unused => 5,
            StatusFlag::Overflow => 6,
            StatusFlag::Negative => 7,
        }
    }

    pub fn mask(&self) -> u8 {
        1 << self.bit()
    }

    /* letter used by the register dump */
    pub fn symbol(&self) -> char {
        match self {
            StatusFlag::Carry => 'c',
            StatusFlag::Zero => 'z',
            StatusFlag::InterruptDisable => 'i',
            StatusFlag::Decimal => 'd',
            StatusFlag::Break => 'b',
            StatusFlag::Unused => '-',
            StatusFlag::Overflow => 'v',
            StatusFlag::Negative => 'n',
        }
    }

    pub fn is_set(&self, cpu: &CPU) -> bool {
        self.in_byte(cpu.status)
    }

    pub fn in_byte(&self, status: u8) -> bool {
        status & self.mask() != 0
    }

    /* 1 if set, 0 otherwise; handy for carry arithmetic */
    pub fn as_num(&self, cpu: &CPU) -> u8 {
        if self.is_set(cpu) {
            1
        } else {
            0
        }
    }

    pub fn update_bool(&self, cpu: &mut CPU, new_val: bool) {
        if new_val {
            cpu.status |= self.mask();
        } else {
            cpu.status &= !self.mask();
        }
    }
}
