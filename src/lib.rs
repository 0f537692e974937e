//! Core of a cycle-approximate Sharp LR35902 emulator: CPU, memory bus,
//! interrupt controller and background-layer PPU.

use std::error::Error;
use std::fmt;

pub mod cpu;
pub mod emulator;
pub mod joypad;
pub mod memory_bus;
pub mod memory_map;
pub mod ppu;

pub use cpu::Cpu;
pub use emulator::{DebugState, Emulator};
pub use joypad::Button;
pub use memory_bus::MemoryBus;
pub use ppu::Ppu;

/// Fatal conditions the core can report back to its host.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EmuError {
    /// An opcode with no defined handler was fetched at `pc`.
    IllegalOpcode { pc: u16, opcode: u8 },
    /// The ROM byte array could not be loaded (e.g. empty).
    RomLoad(String),
    /// The ROM exceeds what this core supports (flat 32 KiB, no MBC).
    UnsupportedRom(String),
}

impl fmt::Display for EmuError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EmuError::IllegalOpcode { pc, opcode } => write!(
                f,
                "illegal opcode {:#04X} at PC={:#06X}",
                opcode, pc
            ),
            EmuError::RomLoad(msg) => write!(f, "ROM load failed: {}", msg),
            EmuError::UnsupportedRom(msg) => write!(f, "unsupported ROM: {}", msg),
        }
    }
}

impl Error for EmuError {}
