use crate::cpu::MEMORY_SIZE;

/* how a run is set up: memory to allocate, where the program goes, where it starts */
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmulatorConfig {
    pub memory_size: usize,
    pub load_address: u16,
    pub start_address: u16,
    pub max_steps: u64,
    /* print the registers after every step */
    pub trace: bool,
}

pub const DEFAULT_MAX_STEPS: u64 = 20;

impl Default for EmulatorConfig {
    fn default() -> Self {
        EmulatorConfig {
            memory_size: MEMORY_SIZE,
            load_address: 0x0000,
            start_address: 0x0000,
            max_steps: DEFAULT_MAX_STEPS,
            trace: false,
        }
    }
}

/**
 * Parses an address or size given as decimal ("512") or hexadecimal
 * ("0x200", "$200").
 */
pub fn parse_number(text: &str) -> Result<usize, String> {
    let trimmed = text.trim();
    let parsed = if let Some(hex) = trimmed
        .strip_prefix("0x")
        .or_else(|| trimmed.strip_prefix("0X"))
        .or_else(|| trimmed.strip_prefix('$'))
    {
        usize::from_str_radix(hex, 16)
    } else {
        trimmed.parse::<usize>()
    };

    parsed.map_err(|e| format!("'{text}' is not a number: {e}"))
}

pub fn parse_address(text: &str) -> Result<u16, String> {
    let value = parse_number(text)?;
    u16::try_from(value).map_err(|_| format!("0x{value:x} is outside the 16-bit address space"))
}
