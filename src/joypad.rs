//! The Game Boy joypad (P1/JOYP) register model.

/// One of the eight physical Game Boy buttons.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Button {
    Up,
    Down,
    Left,
    Right,
    A,
    B,
    Start,
    Select,
}

/// Represents the state of the Game Boy's buttons.
/// True = pressed, False = released (internal representation)
#[derive(Clone, Debug, Default)]
pub struct JoypadState {
    pub right: bool,
    pub left: bool,
    pub up: bool,
    pub down: bool,
    pub a: bool,
    pub b: bool,
    pub select: bool,
    pub start: bool,
}

/// Manages Joypad state and interaction with the P1 register.
#[derive(Clone, Debug, Default)]
pub struct Joypad {
    state: JoypadState,
    // Store the P1 register's selectable bits (written by the game)
    p1_register_selection: u8, // Bits 4 and 5
}

impl Joypad {
    pub fn new() -> Self {
        Joypad {
            state: JoypadState::default(),
            // Bits 4 and 5 high means no selection active.
            p1_register_selection: 0x30,
        }
    }

    /// Reads the P1 (Joypad) register based on current state and selection.
    pub fn read_p1(&self) -> u8 {
        let mut joypad_value = 0x0F; // Start with lower nibble high (released)

        if self.p1_register_selection & 0x20 == 0 {
            // Bit 5 Low: Select Action buttons (A, B, Select, Start)
            if self.state.a {
                joypad_value &= 0b1110;
            }
            if self.state.b {
                joypad_value &= 0b1101;
            }
            if self.state.select {
                joypad_value &= 0b1011;
            }
            if self.state.start {
                joypad_value &= 0b0111;
            }
        }
        if self.p1_register_selection & 0x10 == 0 {
            // Bit 4 Low: Select Direction buttons (Right, Left, Up, Down)
            if self.state.right {
                joypad_value &= 0b1110;
            }
            if self.state.left {
                joypad_value &= 0b1101;
            }
            if self.state.up {
                joypad_value &= 0b1011;
            }
            if self.state.down {
                joypad_value &= 0b0111;
            }
        }

        // Combine input bits (0-3) with selection bits (4-5) and unused high bits (reads 1)
        joypad_value | self.p1_register_selection | 0xC0
    }

    /// Writes to the P1 (Joypad) register (only bits 4, 5 are writable).
    pub fn write_p1(&mut self, value: u8) {
        self.p1_register_selection = value & 0x30;
    }

    /// Sets the pressed/released state of a button. Returns true if a Joypad
    /// interrupt should be requested (press edge while that button's group
    /// is currently selected by the game).
    pub fn set_pressed(&mut self, button: Button, pressed: bool) -> bool {
        let (state_field, selection_mask) = match button {
            Button::Right => (&mut self.state.right, 0x10),
            Button::Left => (&mut self.state.left, 0x10),
            Button::Up => (&mut self.state.up, 0x10),
            Button::Down => (&mut self.state.down, 0x10),
            Button::A => (&mut self.state.a, 0x20),
            Button::B => (&mut self.state.b, 0x20),
            Button::Select => (&mut self.state.select, 0x20),
            Button::Start => (&mut self.state.start, 0x20),
        };

        let press_edge = pressed && !*state_field;
        *state_field = pressed;

        press_edge && (self.p1_register_selection & selection_mask == 0)
    }

    /// Allows external access to raw button state.
    pub fn get_state(&self) -> &JoypadState {
        &self.state
    }
}
