use clap::Parser;
use emu6502::config::{self, EmulatorConfig};
use emu6502::runtime::{Runtime, FIBONACCI_PROGRAM};
use std::error::Error;
use std::fs;
use std::path::PathBuf;

fn main() -> Result<(), Box<dyn Error>> {
    let args = CommandLineArgs::parse();
    let config = args.to_config();
    let trace = config.trace;

    let program = match &args.program {
        Some(path) => fs::read(path)?,
        None => FIBONACCI_PROGRAM.to_vec(),
    };

    let mut runtime = Runtime::new(config)?;
    runtime.load_program(&program)?;
    println!("{}", runtime.cpu());

    let result = runtime.run(|operation, cpu| {
        if trace {
            println!(
                "{:04x}  {:02x}  {:?} {:<11} {}",
                operation.location,
                operation.opcode,
                operation.instruction(),
                format!("{:?}", operation.params.addr_mode),
                cpu
            );
        }
    });

    match result {
        Ok(summary) => {
            println!("{}", runtime.cpu());
            println!("{} steps, {} cycles", summary.steps, summary.cycles);
            Ok(())
        }
        Err(e) => {
            log::error!("run aborted: {e}");
            println!("{}", runtime.cpu());
            Err(e.into())
        }
    }
}

#[derive(Parser, Debug)]
#[command(version, about = "Runs a raw 6502 program image", long_about = None)]
struct CommandLineArgs {
    /// raw program image; the built-in Fibonacci demo runs when omitted
    program: Option<PathBuf>,

    /// address the image is copied to
    #[arg(short, long, value_parser = config::parse_address, default_value = "0x0000")]
    load_address: u16,

    /// program counter after reset; defaults to the load address
    #[arg(short, long, value_parser = config::parse_address)]
    start_address: Option<u16>,

    /// number of instructions to execute
    #[arg(short = 'n', long, default_value_t = config::DEFAULT_MAX_STEPS)]
    steps: u64,

    /// bytes of memory to allocate (0x200 to 0x10000)
    #[arg(short, long, value_parser = config::parse_number, default_value = "0x10000")]
    memory_size: usize,

    /// print the registers after every instruction
    #[arg(short, long)]
    trace: bool,
}

impl CommandLineArgs {
    fn to_config(&self) -> EmulatorConfig {
        EmulatorConfig {
            memory_size: self.memory_size,
            load_address: self.load_address,
            start_address: self.start_address.unwrap_or(self.load_address),
            max_steps: self.steps,
            trace: self.trace,
        }
    }
}
