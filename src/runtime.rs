use crate::config::EmulatorConfig;
use crate::cpu::{CoreMemory, Operation, CPU};
use crate::EmulatorError;

/* computes Fibonacci numbers into $0000/$0001, counting down with Y */
pub const FIBONACCI_PROGRAM: [u8; 33] = [
    0xa2, 0x01, 0x8e, 0x00, 0x00, 0x38, 0xa0, 0x07, 0x98, 0xe9, 0x03, 0xa8, 0x18, 0xa9, 0x02,
    0x8d, 0x01, 0x00, 0xae, 0x01, 0x00, 0x6d, 0x00, 0x00, 0x8d, 0x01, 0x00, 0x8e, 0x00, 0x00,
    0x88, 0xd0, 0xf1,
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RunSummary {
    pub steps: u64,
    pub cycles: u64,
}

/**
 * Owns a CPU and drives it: loads the program image, resets to the start
 * address and steps it up to the configured number of times. The CPU does
 * no scheduling of its own; this is the loop around it.
 */
pub struct Runtime {
    cpu: CPU,
    config: EmulatorConfig,
}

impl Runtime {
    pub fn new(config: EmulatorConfig) -> Result<Runtime, EmulatorError> {
        let memory = CoreMemory::with_size(config.memory_size)?;
        let mut cpu = CPU::new(memory);
        cpu.reset(config.start_address);

        Ok(Runtime { cpu, config })
    }

    /* copies the image to the load address and resets to the start address */
    pub fn load_program(&mut self, program: &[u8]) -> Result<(), EmulatorError> {
        self.cpu.load(self.config.load_address, program)?;
        self.cpu.reset(self.config.start_address);
        Ok(())
    }

    pub fn step(&mut self) -> Result<Operation, EmulatorError> {
        self.cpu.step()
    }

    /**
     * Steps until `max_steps` instructions have run. `observer` sees every
     * executed operation and the CPU state right after it. A decode or write
     * fault stops the run and is returned; the steps before it stay applied.
     */
    pub fn run<F>(&mut self, mut observer: F) -> Result<RunSummary, EmulatorError>
    where
        F: FnMut(&Operation, &CPU),
    {
        let mut summary = RunSummary::default();

        while summary.steps < self.config.max_steps {
            let operation = self.cpu.step()?;
            summary.steps += 1;
            summary.cycles += operation.cycles() as u64;
            observer(&operation, &self.cpu);
        }

        log::debug!(
            "ran {} steps in {} cycles",
            summary.steps,
            summary.cycles
        );
        Ok(summary)
    }

    pub fn cpu(&self) -> &CPU {
        &self.cpu
    }

    pub fn cpu_mut(&mut self) -> &mut CPU {
        &mut self.cpu
    }

    pub fn config(&self) -> &EmulatorConfig {
        &self.config
    }
}
