use super::constants::*;

/// Internal PPU state: scanline timing and the mode bits mirrored into STAT.
#[derive(Debug, Clone)]
pub struct PpuState {
    pub(super) dots: u32, // Current dot within the scanline (T-cycle counter)
    pub(super) current_scanline: u8, // Current scanline (LY register value, 0-153)
    pub(super) ppu_mode: u8, // Current PPU mode (0, 1, 2, 3)
    pub(super) vblank_just_occurred: bool, // Signals the VBlank interrupt on mode transition
    pub(super) lcdc: u8, // Cache of LCDC register value for the current step
}

impl PpuState {
    pub fn new() -> Self {
        PpuState {
            dots: 0,
            current_scanline: 0,
            ppu_mode: OAM_SCAN_MODE,
            vblank_just_occurred: false,
            lcdc: 0x91, // Default value post-boot ROM
        }
    }

    /// Resets timing state when the LCD is turned off.
    pub(super) fn reset_for_lcd_off(&mut self) {
        self.dots = 0;
        self.current_scanline = 0;
        self.ppu_mode = HBLANK_MODE;
    }

    /// Gets the current PPU mode.
    pub fn mode(&self) -> u8 {
        self.ppu_mode
    }

    /// Gets the current scanline (LY).
    pub fn scanline(&self) -> u8 {
        self.current_scanline
    }
}
