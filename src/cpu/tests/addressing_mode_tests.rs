use crate::cpu::tests::cpu_for_testing;
use crate::cpu::AddressingMode::*;
use crate::cpu::{addr, zero_page_addr, AddressingMode};

#[test]
fn test_addr() {
    assert_eq!(addr(0xcd, 0xab), 0xabcd);
    assert_eq!(zero_page_addr(0xab), 0x00ab);
}

#[test]
fn test_get_bytes() {
    assert_eq!(Implicit.get_bytes(), 1);
    assert_eq!(Accumulator.get_bytes(), 1);
    for mode in [Immediate, ZeroPage, ZeroPageX, ZeroPageY, Relative, IndirectX, IndirectY] {
        assert_eq!(mode.get_bytes(), 2, "{:?}", mode);
    }
    for mode in [Absolute, AbsoluteX, AbsoluteY, Indirect] {
        assert_eq!(mode.get_bytes(), 3, "{:?}", mode);
    }
}

#[test]
fn test_simple_modes() {
    let mut cpu = cpu_for_testing();
    cpu.accumulator = 0x3c;
    cpu.load(0x0400, &[0xea, 0x44, 0x12]).unwrap();
    cpu.write_mem(0x0044, 0x55).unwrap();
    cpu.write_mem(0x1244, 0x66).unwrap();

    let params = Implicit.resolve(&cpu, 0x0400);
    assert_eq!(params.operand, 0);
    assert_eq!(params.bytes, 1);

    let params = Accumulator.resolve(&cpu, 0x0400);
    assert_eq!(params.operand, 0x3c);

    let params = Immediate.resolve(&cpu, 0x0400);
    assert_eq!(params.address, 0x0401);
    assert_eq!(params.operand, 0x44);

    let params = ZeroPage.resolve(&cpu, 0x0400);
    assert_eq!(params.address, 0x0044);
    assert_eq!(params.operand, 0x55);

    let params = Absolute.resolve(&cpu, 0x0400);
    assert_eq!(params.address, 0x1244);
    assert_eq!(params.operand, 0x66);
    assert_eq!(params.addr_mode, Absolute);
    assert_eq!(params.bytes, 3);
    assert_eq!(params.page_crossed, false);
}

#[test]
fn test_zero_page_indexing_wraps() {
    let mut cpu = cpu_for_testing();
    cpu.load(0x0400, &[0xb5, 0xf0]).unwrap();
    cpu.write_mem(0x0010, 0x21).unwrap();
    cpu.write_mem(0x0110, 0x99).unwrap();

    /* 0xf0 + 0x20 stays in page zero */
    cpu.index_x = 0x20;
    let params = ZeroPageX.resolve(&cpu, 0x0400);
    assert_eq!(params.address, 0x0010);
    assert_eq!(params.operand, 0x21);

    cpu.index_y = 0x20;
    let params = ZeroPageY.resolve(&cpu, 0x0400);
    assert_eq!(params.address, 0x0010);

    cpu.index_y = 0x05;
    let params = ZeroPageY.resolve(&cpu, 0x0400);
    assert_eq!(params.address, 0x00f5);
}

#[test]
fn test_absolute_indexing() {
    let mut cpu = cpu_for_testing();
    cpu.load(0x0400, &[0xbd, 0xf0, 0x12]).unwrap();
    cpu.write_mem(0x1300, 0x77).unwrap();

    cpu.index_x = 0x0f;
    let params = AbsoluteX.resolve(&cpu, 0x0400);
    assert_eq!(params.address, 0x12ff);
    assert_eq!(params.page_crossed, false);

    cpu.index_x = 0x10;
    let params = AbsoluteX.resolve(&cpu, 0x0400);
    assert_eq!(params.address, 0x1300);
    assert_eq!(params.operand, 0x77);
    assert_eq!(params.page_crossed, true);

    cpu.index_y = 0x20;
    let params = AbsoluteY.resolve(&cpu, 0x0400);
    assert_eq!(params.address, 0x1310);
    assert_eq!(params.page_crossed, true);

    /* wraps at the top of the address space */
    cpu.load(0x0400, &[0xbd, 0xff, 0xff]).unwrap();
    cpu.index_x = 0x02;
    let params = AbsoluteX.resolve(&cpu, 0x0400);
    assert_eq!(params.address, 0x0001);
}

#[test]
fn test_relative() {
    let mut cpu = cpu_for_testing();

    cpu.load(0x0400, &[0xd0, 0x10]).unwrap();
    let params = Relative.resolve(&cpu, 0x0400);
    assert_eq!(params.address, 0x0412);
    assert_eq!(params.operand, 0);
    assert_eq!(params.page_crossed, false);

    /* negative offsets count back from the next instruction */
    cpu.load(0x0400, &[0xd0, 0x80]).unwrap();
    let params = Relative.resolve(&cpu, 0x0400);
    assert_eq!(params.address, 0x0382);
    assert_eq!(params.page_crossed, true);
}

#[test]
fn test_indirect() {
    let mut cpu = cpu_for_testing();

    cpu.load(0x0400, &[0x6c, 0x00, 0x30]).unwrap();
    cpu.write_mem(0x3000, 0x78).unwrap();
    cpu.write_mem(0x3001, 0x56).unwrap();
    let params = Indirect.resolve(&cpu, 0x0400);
    assert_eq!(params.address, 0x5678);

    /* a pointer on a page boundary takes its high byte from the next page */
    cpu.load(0x0400, &[0x6c, 0xff, 0x30]).unwrap();
    cpu.write_mem(0x30ff, 0x34).unwrap();
    cpu.write_mem(0x3100, 0x12).unwrap();
    let params = Indirect.resolve(&cpu, 0x0400);
    assert_eq!(params.address, 0x1234);
}

#[test]
fn test_indexed_indirect() {
    let mut cpu = cpu_for_testing();
    cpu.load(0x0400, &[0xa1, 0x20]).unwrap();
    cpu.write_mem(0x0024, 0x74).unwrap();
    cpu.write_mem(0x0025, 0x20).unwrap();
    cpu.write_mem(0x2074, 0x4f).unwrap();

    cpu.index_x = 0x04;
    let params = IndirectX.resolve(&cpu, 0x0400);
    assert_eq!(params.address, 0x2074);
    assert_eq!(params.operand, 0x4f);

    /* pointer at $ff takes its high byte from $00 */
    cpu.write_mem(0x00ff, 0x10).unwrap();
    cpu.write_mem(0x0000, 0x40).unwrap();
    cpu.write_mem(0x0100, 0x50).unwrap();
    cpu.index_x = 0xdf;
    let params = IndirectX.resolve(&cpu, 0x0400);
    assert_eq!(params.address, 0x4010);
}

#[test]
fn test_indirect_indexed() {
    let mut cpu = cpu_for_testing();
    cpu.load(0x0400, &[0xb1, 0x86]).unwrap();
    cpu.write_mem(0x0086, 0x28).unwrap();
    cpu.write_mem(0x0087, 0x40).unwrap();
    cpu.write_mem(0x4038, 0x0b).unwrap();

    cpu.index_y = 0x10;
    let params = IndirectY.resolve(&cpu, 0x0400);
    assert_eq!(params.address, 0x4038);
    assert_eq!(params.operand, 0x0b);
    assert_eq!(params.page_crossed, false);

    cpu.index_y = 0xe0;
    let params = IndirectY.resolve(&cpu, 0x0400);
    assert_eq!(params.address, 0x4108);
    assert_eq!(params.page_crossed, true);

    /* the zero-page pointer wraps the same way as (zp,X) */
    cpu.load(0x0400, &[0xb1, 0xff]).unwrap();
    cpu.write_mem(0x00ff, 0x00).unwrap();
    cpu.write_mem(0x0000, 0x60).unwrap();
    cpu.index_y = 0x01;
    let params = IndirectY.resolve(&cpu, 0x0400);
    assert_eq!(params.address, 0x6001);
}

#[test]
fn test_write_through_mode() {
    let mut cpu = cpu_for_testing();

    Accumulator.write(&mut cpu, 0x0000, 0x42).unwrap();
    assert_eq!(cpu.accumulator, 0x42);
    assert_eq!(cpu.read_mem(0x0000), 0x00);

    AddressingMode::ZeroPage.write(&mut cpu, 0x0033, 0x24).unwrap();
    assert_eq!(cpu.read_mem(0x0033), 0x24);

    assert_eq!(Implicit.targets_memory(), false);
    assert_eq!(Accumulator.targets_memory(), false);
    assert_eq!(Relative.targets_memory(), false);
    assert_eq!(AbsoluteX.targets_memory(), true);
}
