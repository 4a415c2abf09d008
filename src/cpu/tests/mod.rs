use crate::cpu::{CoreMemory, Operation, CPU};

mod addressing_mode_tests;

fn cpu_for_testing() -> CPU {
    CPU::new(CoreMemory::new())
}

/* puts one instruction at the program counter and runs it */
fn run_instruction(cpu: &mut CPU, bytes: &[u8]) -> Operation {
    cpu.load(cpu.program_counter, bytes).unwrap();
    cpu.step().unwrap()
}
