/*
 * One function per mnemonic. Each takes the CPU and the parameters fetch
 * decoded, and returns how many cycles it cost beyond the table's base count
 * (only branches ever return non-zero).
 */
use crate::cpu::StatusFlag::{
    Break, Carry, Decimal, InterruptDisable, Negative, Overflow, Unused, Zero,
};
use crate::cpu::{DecodedParams, StatusFlag, BRK_VECTOR, CPU};
use crate::EmulatorError;

type HandlerResult = Result<u16, EmulatorError>;

/* bits PLP and RTI leave alone */
const UNSTORED_BITS: u8 = 0x30;

pub fn adc(cpu: &mut CPU, params: &DecodedParams) -> HandlerResult {
    add_with_carry(cpu, params.operand);
    Ok(0)
}

pub fn and(cpu: &mut CPU, params: &DecodedParams) -> HandlerResult {
    cpu.accumulator &= params.operand;
    cpu.update_zero_neg_flags(cpu.accumulator);
    Ok(0)
}

pub fn asl(cpu: &mut CPU, params: &DecodedParams) -> HandlerResult {
    let old_val = params.operand;
    let result = old_val << 1;
    params.addr_mode.write(cpu, params.address, result)?;
    cpu.update_flag(Carry, old_val & 0x80 != 0);
    cpu.update_zero_neg_flags(result);
    Ok(0)
}

pub fn bcc(cpu: &mut CPU, params: &DecodedParams) -> HandlerResult {
    branch(cpu, params, Carry, false)
}

pub fn bcs(cpu: &mut CPU, params: &DecodedParams) -> HandlerResult {
    branch(cpu, params, Carry, true)
}

pub fn beq(cpu: &mut CPU, params: &DecodedParams) -> HandlerResult {
    branch(cpu, params, Zero, true)
}

pub fn bit(cpu: &mut CPU, params: &DecodedParams) -> HandlerResult {
    let mem = params.operand;
    cpu.update_flag(Zero, cpu.accumulator & mem == 0);
    cpu.update_flag(Overflow, mem & 0x40 != 0);
    cpu.update_flag(Negative, mem & 0x80 != 0);
    Ok(0)
}

pub fn bmi(cpu: &mut CPU, params: &DecodedParams) -> HandlerResult {
    branch(cpu, params, Negative, true)
}

pub fn bne(cpu: &mut CPU, params: &DecodedParams) -> HandlerResult {
    branch(cpu, params, Zero, false)
}

pub fn bpl(cpu: &mut CPU, params: &DecodedParams) -> HandlerResult {
    branch(cpu, params, Negative, false)
}

/* software interrupt: return address is the byte after BRK's padding byte */
pub fn brk(cpu: &mut CPU, _params: &DecodedParams) -> HandlerResult {
    cpu.push_memory_loc(cpu.program_counter.wrapping_add(2))?;
    cpu.push(cpu.status | Break.mask() | Unused.mask())?;
    cpu.update_flag(InterruptDisable, true);
    cpu.program_counter = cpu.read_mem16(BRK_VECTOR);
    Ok(0)
}

pub fn bvc(cpu: &mut CPU, params: &DecodedParams) -> HandlerResult {
    branch(cpu, params, Overflow, false)
}

pub fn bvs(cpu: &mut CPU, params: &DecodedParams) -> HandlerResult {
    branch(cpu, params, Overflow, true)
}

pub fn clc(cpu: &mut CPU, _params: &DecodedParams) -> HandlerResult {
    cpu.update_flag(Carry, false);
    Ok(0)
}

pub fn cld(cpu: &mut CPU, _params: &DecodedParams) -> HandlerResult {
    cpu.update_flag(Decimal, false);
    Ok(0)
}

pub fn cli(cpu: &mut CPU, _params: &DecodedParams) -> HandlerResult {
    cpu.update_flag(InterruptDisable, false);
    Ok(0)
}

pub fn clv(cpu: &mut CPU, _params: &DecodedParams) -> HandlerResult {
    cpu.update_flag(Overflow, false);
    Ok(0)
}

pub fn cmp(cpu: &mut CPU, params: &DecodedParams) -> HandlerResult {
    let register = cpu.accumulator;
    compare(cpu, register, params.operand);
    Ok(0)
}

pub fn cpx(cpu: &mut CPU, params: &DecodedParams) -> HandlerResult {
    let register = cpu.index_x;
    compare(cpu, register, params.operand);
    Ok(0)
}

pub fn cpy(cpu: &mut CPU, params: &DecodedParams) -> HandlerResult {
    let register = cpu.index_y;
    compare(cpu, register, params.operand);
    Ok(0)
}

pub fn dec(cpu: &mut CPU, params: &DecodedParams) -> HandlerResult {
    let new_val = params.operand.wrapping_sub(1);
    params.addr_mode.write(cpu, params.address, new_val)?;
    cpu.update_zero_neg_flags(new_val);
    Ok(0)
}

pub fn dex(cpu: &mut CPU, _params: &DecodedParams) -> HandlerResult {
    cpu.index_x = cpu.index_x.wrapping_sub(1);
    cpu.update_zero_neg_flags(cpu.index_x);
    Ok(0)
}

pub fn dey(cpu: &mut CPU, _params: &DecodedParams) -> HandlerResult {
    cpu.index_y = cpu.index_y.wrapping_sub(1);
    cpu.update_zero_neg_flags(cpu.index_y);
    Ok(0)
}

pub fn eor(cpu: &mut CPU, params: &DecodedParams) -> HandlerResult {
    cpu.accumulator ^= params.operand;
    cpu.update_zero_neg_flags(cpu.accumulator);
    Ok(0)
}

pub fn inc(cpu: &mut CPU, params: &DecodedParams) -> HandlerResult {
    let new_val = params.operand.wrapping_add(1);
    params.addr_mode.write(cpu, params.address, new_val)?;
    cpu.update_zero_neg_flags(new_val);
    Ok(0)
}

pub fn inx(cpu: &mut CPU, _params: &DecodedParams) -> HandlerResult {
    cpu.index_x = cpu.index_x.wrapping_add(1);
    cpu.update_zero_neg_flags(cpu.index_x);
    Ok(0)
}

pub fn iny(cpu: &mut CPU, _params: &DecodedParams) -> HandlerResult {
    cpu.index_y = cpu.index_y.wrapping_add(1);
    cpu.update_zero_neg_flags(cpu.index_y);
    Ok(0)
}

pub fn jmp(cpu: &mut CPU, params: &DecodedParams) -> HandlerResult {
    cpu.program_counter = params.address;
    Ok(0)
}

/* pushes the address of JSR's last byte; RTS adds the missing one */
pub fn jsr(cpu: &mut CPU, params: &DecodedParams) -> HandlerResult {
    cpu.push_memory_loc(cpu.program_counter.wrapping_add(2))?;
    cpu.program_counter = params.address;
    Ok(0)
}

pub fn lda(cpu: &mut CPU, params: &DecodedParams) -> HandlerResult {
    cpu.accumulator = params.operand;
    cpu.update_zero_neg_flags(cpu.accumulator);
    Ok(0)
}

pub fn ldx(cpu: &mut CPU, params: &DecodedParams) -> HandlerResult {
    cpu.index_x = params.operand;
    cpu.update_zero_neg_flags(cpu.index_x);
    Ok(0)
}

pub fn ldy(cpu: &mut CPU, params: &DecodedParams) -> HandlerResult {
    cpu.index_y = params.operand;
    cpu.update_zero_neg_flags(cpu.index_y);
    Ok(0)
}

pub fn lsr(cpu: &mut CPU, params: &DecodedParams) -> HandlerResult {
    let val = params.operand;
    let new_val = val >> 1;
    params.addr_mode.write(cpu, params.address, new_val)?;
    cpu.update_flag(Carry, val & 0x1 != 0);
    cpu.update_zero_neg_flags(new_val);
    Ok(0)
}

pub fn nop(_cpu: &mut CPU, _params: &DecodedParams) -> HandlerResult {
    Ok(0)
}

pub fn ora(cpu: &mut CPU, params: &DecodedParams) -> HandlerResult {
    cpu.accumulator |= params.operand;
    cpu.update_zero_neg_flags(cpu.accumulator);
    Ok(0)
}

pub fn pha(cpu: &mut CPU, _params: &DecodedParams) -> HandlerResult {
    cpu.push(cpu.accumulator)?;
    Ok(0)
}

/* pushes status onto the stack, with the 'B' flag (bit 4) and bit 5 on */
pub fn php(cpu: &mut CPU, _params: &DecodedParams) -> HandlerResult {
    cpu.push(cpu.status | Break.mask() | Unused.mask())?;
    Ok(0)
}

pub fn pla(cpu: &mut CPU, _params: &DecodedParams) -> HandlerResult {
    cpu.accumulator = cpu.pop();
    cpu.update_zero_neg_flags(cpu.accumulator);
    Ok(0)
}

pub fn plp(cpu: &mut CPU, _params: &DecodedParams) -> HandlerResult {
    let val = cpu.pop();
    restore_status(cpu, val);
    Ok(0)
}

pub fn rol(cpu: &mut CPU, params: &DecodedParams) -> HandlerResult {
    let val = params.operand;
    let result = (val << 1) | StatusFlag::Carry.as_num(cpu);
    params.addr_mode.write(cpu, params.address, result)?;
    cpu.update_flag(Carry, val & 0x80 != 0);
    cpu.update_zero_neg_flags(result);
    Ok(0)
}

pub fn ror(cpu: &mut CPU, params: &DecodedParams) -> HandlerResult {
    let val = params.operand;
    let result = (StatusFlag::Carry.as_num(cpu) << 7) | (val >> 1);
    params.addr_mode.write(cpu, params.address, result)?;
    cpu.update_flag(Carry, val & 0x1 != 0);
    cpu.update_zero_neg_flags(result);
    Ok(0)
}

pub fn rti(cpu: &mut CPU, _params: &DecodedParams) -> HandlerResult {
    let val = cpu.pop();
    restore_status(cpu, val);
    cpu.program_counter = cpu.pop_memory_loc();
    Ok(0)
}

pub fn rts(cpu: &mut CPU, _params: &DecodedParams) -> HandlerResult {
    cpu.program_counter = cpu.pop_memory_loc().wrapping_add(1);
    Ok(0)
}

pub fn sbc(cpu: &mut CPU, params: &DecodedParams) -> HandlerResult {
    subtract_with_carry(cpu, params.operand);
    Ok(0)
}

pub fn sec(cpu: &mut CPU, _params: &DecodedParams) -> HandlerResult {
    cpu.update_flag(Carry, true);
    Ok(0)
}

pub fn sed(cpu: &mut CPU, _params: &DecodedParams) -> HandlerResult {
    cpu.update_flag(Decimal, true);
    Ok(0)
}

pub fn sei(cpu: &mut CPU, _params: &DecodedParams) -> HandlerResult {
    cpu.update_flag(InterruptDisable, true);
    Ok(0)
}

pub fn sta(cpu: &mut CPU, params: &DecodedParams) -> HandlerResult {
    let value = cpu.accumulator;
    params.addr_mode.write(cpu, params.address, value)?;
    Ok(0)
}

pub fn stx(cpu: &mut CPU, params: &DecodedParams) -> HandlerResult {
    let value = cpu.index_x;
    params.addr_mode.write(cpu, params.address, value)?;
    Ok(0)
}

pub fn sty(cpu: &mut CPU, params: &DecodedParams) -> HandlerResult {
    let value = cpu.index_y;
    params.addr_mode.write(cpu, params.address, value)?;
    Ok(0)
}

pub fn tax(cpu: &mut CPU, _params: &DecodedParams) -> HandlerResult {
    cpu.index_x = cpu.accumulator;
    cpu.update_zero_neg_flags(cpu.index_x);
    Ok(0)
}

pub fn tay(cpu: &mut CPU, _params: &DecodedParams) -> HandlerResult {
    cpu.index_y = cpu.accumulator;
    cpu.update_zero_neg_flags(cpu.index_y);
    Ok(0)
}

pub fn tsx(cpu: &mut CPU, _params: &DecodedParams) -> HandlerResult {
    cpu.index_x = cpu.s_register;
    cpu.update_zero_neg_flags(cpu.index_x);
    Ok(0)
}

pub fn txa(cpu: &mut CPU, _params: &DecodedParams) -> HandlerResult {
    cpu.accumulator = cpu.index_x;
    cpu.update_zero_neg_flags(cpu.accumulator);
    Ok(0)
}

/* doesn't update flags */
pub fn txs(cpu: &mut CPU, _params: &DecodedParams) -> HandlerResult {
    cpu.s_register = cpu.index_x;
    Ok(0)
}

pub fn tya(cpu: &mut CPU, _params: &DecodedParams) -> HandlerResult {
    cpu.accumulator = cpu.index_y;
    cpu.update_zero_neg_flags(cpu.accumulator);
    Ok(0)
}

/*
 * Branches own the program counter: taken jumps to the resolved target,
 * not taken falls through to the next instruction. Taken costs one cycle,
 * two if the target is on another page.
 */
fn branch(
    cpu: &mut CPU,
    params: &DecodedParams,
    flag: StatusFlag,
    when_set: bool,
) -> HandlerResult {
    if flag.is_set(cpu) == when_set {
        cpu.program_counter = params.address;
        Ok(if params.page_crossed { 2 } else { 1 })
    } else {
        cpu.program_counter = cpu.program_counter.wrapping_add(params.bytes as u16);
        Ok(0)
    }
}

fn compare(cpu: &mut CPU, register: u8, mem_val: u8) {
    cpu.update_flag(Carry, register >= mem_val);
    cpu.update_flag(Zero, register == mem_val);
    cpu.update_flag(Negative, register.wrapping_sub(mem_val) & 0x80 != 0);
}

fn restore_status(cpu: &mut CPU, pulled: u8) {
    cpu.status = (cpu.status & UNSTORED_BITS) | (pulled & !UNSTORED_BITS);
}

/*
 * Decimal mode order matters: binary sum, low-nibble fix, N/V from the
 * fixed byte, then the high-digit fix and the carry.
 */
pub(crate) fn add_with_carry(cpu: &mut CPU, operand: u8) {
    let accum = cpu.accumulator;
    let carry = StatusFlag::Carry.as_num(cpu) as u16;
    let mut sum = accum as u16 + operand as u16 + carry;

    cpu.update_flag(Zero, sum & 0xff == 0);

    if StatusFlag::Decimal.is_set(cpu) {
        if (accum & 0x0f) as u16 + (operand & 0x0f) as u16 + carry > 9 {
            sum += 0x06;
        }
        cpu.update_flag(Negative, sum & 0x80 != 0);
        cpu.update_flag(Overflow, add_overflows(accum, operand, sum as u8));
        if sum > 0x99 {
            sum += 0x60;
        }
        cpu.update_flag(Carry, sum > 0x99);
    } else {
        cpu.update_flag(Negative, sum & 0x80 != 0);
        cpu.update_flag(Overflow, add_overflows(accum, operand, sum as u8));
        cpu.update_flag(Carry, sum > 0xff);
    }

    cpu.accumulator = sum as u8;
}

/* carry set means "no borrow"; a wrapped difference (>= 0x100) means one was taken */
pub(crate) fn subtract_with_carry(cpu: &mut CPU, operand: u8) {
    let accum = cpu.accumulator;
    let borrow = 1 - StatusFlag::Carry.as_num(cpu) as u16;
    let mut diff = (accum as u16)
        .wrapping_sub(operand as u16)
        .wrapping_sub(borrow);

    cpu.update_flag(Zero, diff & 0xff == 0);

    if StatusFlag::Decimal.is_set(cpu) {
        if ((accum & 0x0f) as i16 - borrow as i16) < (operand & 0x0f) as i16 {
            diff = diff.wrapping_sub(0x06);
        }
        cpu.update_flag(Negative, diff & 0x80 != 0);
        cpu.update_flag(Overflow, sub_overflows(accum, operand, diff as u8));
        if diff > 0x99 {
            diff = diff.wrapping_sub(0x60);
        }
    } else {
        cpu.update_flag(Negative, diff & 0x80 != 0);
        cpu.update_flag(Overflow, sub_overflows(accum, operand, diff as u8));
    }

    cpu.update_flag(Carry, diff < 0x100);
    cpu.accumulator = diff as u8;
}

/* same-signed operands, result of the other sign */
fn add_overflows(a: u8, b: u8, result: u8) -> bool {
    (a ^ b) & 0x80 == 0 && (a ^ result) & 0x80 != 0
}

/* differently-signed operands, result takes the subtrahend's sign */
fn sub_overflows(a: u8, b: u8, result: u8) -> bool {
    (a ^ b) & 0x80 != 0 && (a ^ result) & 0x80 != 0
}
