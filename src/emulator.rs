//! The owning aggregate that wires CPU, memory bus and PPU into a single
//! step loop. Host adapters (a GUI, a headless test harness) drive this
//! type; it never reaches back into them.

use crate::cpu::Cpu;
use crate::joypad::Button;
use crate::memory_bus::MemoryBus;
use crate::ppu::Ppu;
use crate::EmuError;

/// A read-only snapshot of CPU state for diagnostics and test-ROM tracing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DebugState {
    pub a: u8,
    pub f: u8,
    pub b: u8,
    pub c: u8,
    pub d: u8,
    pub e: u8,
    pub h: u8,
    pub l: u8,
    pub sp: u16,
    pub pc: u16,
    pub ime: bool,
    pub cycles: u64,
}

/// Owns the CPU, memory bus and PPU inline and advances them together.
/// There is exactly one of these per emulated machine; none of its
/// components hold a reference back to this struct.
pub struct Emulator {
    cpu: Cpu,
    memory_bus: MemoryBus,
    ppu: Ppu,
}

impl Emulator {
    /// Builds a fresh machine with `rom_data` loaded at 0x0000 and every
    /// component already in its post-boot-ROM state (see `reset`).
    pub fn new(rom_data: &[u8]) -> Result<Self, EmuError> {
        let mut memory_bus = MemoryBus::new();
        memory_bus.load_rom(rom_data)?;

        let mut cpu = Cpu::new();
        cpu.reset();

        let mut emulator = Emulator {
            cpu,
            memory_bus,
            ppu: Ppu::new(),
        };
        emulator.ppu.reset();
        Ok(emulator)
    }

    /// Restores CPU, bus and PPU to their post-boot-ROM state. ROM contents
    /// loaded via `new` are left untouched.
    pub fn reset(&mut self) {
        self.cpu.reset();
        self.memory_bus.reset();
        self.ppu.reset();
    }

    /// Executes one CPU instruction (or one halted/stopped tick), steps the
    /// PPU by the same number of T-cycles, and returns the cycle count.
    pub fn step_instruction(&mut self) -> Result<u32, EmuError> {
        let cycles = self.cpu.step(&mut self.memory_bus)?;
        self.ppu.step(cycles as u32, &mut self.memory_bus);
        Ok(cycles as u32)
    }

    /// Runs instructions until at least `target_cycles` T-cycles have been
    /// consumed, e.g. one frame's worth (`70224` dots).
    pub fn run_cycles(&mut self, target_cycles: u32) -> Result<u32, EmuError> {
        let mut total = 0u32;
        while total < target_cycles {
            total += self.step_instruction()?;
        }
        Ok(total)
    }

    /// The current 160x144 framebuffer, three RGB bytes per pixel, row-major.
    pub fn frame_buffer(&self) -> &[u8] {
        self.ppu.frame_buffer()
    }

    /// Sets a button's pressed state, raising the joypad interrupt on a
    /// press edge while that button's input group is selected.
    pub fn set_input(&mut self, button: Button, pressed: bool) {
        self.memory_bus.set_input(button, pressed);
    }

    /// Bytes written to the serial port via SC=0x81 writes, in order.
    pub fn serial_output(&self) -> &[u8] {
        self.memory_bus.serial_output()
    }

    /// A snapshot of CPU state for diagnostics and test-ROM tracing.
    pub fn debug_state(&self) -> DebugState {
        let (a, f, b, c, d, e, h, l) = self.cpu.registers();
        DebugState {
            a,
            f,
            b,
            c,
            d,
            e,
            h,
            l,
            sp: self.cpu.sp(),
            pc: self.cpu.pc(),
            ime: self.cpu.ime(),
            cycles: self.cpu.total_cycles(),
        }
    }

    pub fn cpu(&self) -> &Cpu {
        &self.cpu
    }

    pub fn memory_bus(&self) -> &MemoryBus {
        &self.memory_bus
    }

    pub fn ppu(&self) -> &Ppu {
        &self.ppu
    }
}
