use boba::{EmuError, Emulator};

fn emulator_with_program(load_addr: u16, bytes: &[u8]) -> Emulator {
    let mut rom = vec![0u8; 32 * 1024];
    let start = load_addr as usize;
    rom[start..start + bytes.len()].copy_from_slice(bytes);
    Emulator::new(&rom).unwrap()
}

#[test]
fn ld_bc_immediate_then_inc_bc() {
    // LD BC,0x1234 ; INC BC
    let mut emu = emulator_with_program(0x0100, &[0x01, 0x34, 0x12, 0x03]);

    let c1 = emu.step_instruction().unwrap();
    let c2 = emu.step_instruction().unwrap();

    let state = emu.debug_state();
    assert_eq!(((state.b as u16) << 8) | state.c as u16, 0x1235);
    assert_eq!(state.pc, 0x0104);
    assert_eq!(c1 + c2, 20);
}

#[test]
fn add_a_b_half_carry_and_carry() {
    // LD A,0x3A ; LD B,0xC6 ; ADD A,B
    let mut emu = emulator_with_program(0x0100, &[0x3E, 0x3A, 0x06, 0xC6, 0x80]);
    emu.step_instruction().unwrap(); // LD A,d8
    emu.step_instruction().unwrap(); // LD B,d8
    emu.step_instruction().unwrap(); // ADD A,B

    let state = emu.debug_state();
    assert_eq!(state.a, 0x00);
    assert_eq!(state.f, 0b1011_0000); // Z N H C = 1 0 1 1
}

#[test]
fn conditional_relative_jump_not_taken() {
    // JR Z,+5 with Z=0 (fresh reset leaves F=0x80, Z set; clear it with XOR A twice is
    // overkill, so drive Z=0 directly via OR A,1 equivalent: load A=1 then AND A,0 sets Z=1,
    // so instead force Z=0 with a non-zero result: LD A,1 ; ADD A,1 -> A=2, Z=0).
    let mut emu = emulator_with_program(0x0100, &[0x3E, 0x01, 0xC6, 0x01, 0x28, 0x05]);
    emu.step_instruction().unwrap(); // LD A,1
    emu.step_instruction().unwrap(); // ADD A,1 -> Z=0
    assert_eq!(emu.debug_state().f & 0x80, 0, "Z flag should be clear after 1+1");

    let pc_before = emu.debug_state().pc;
    let cycles = emu.step_instruction().unwrap(); // JR Z,+5, not taken
    assert_eq!(emu.debug_state().pc, pc_before.wrapping_add(2));
    assert_eq!(cycles, 8);
}

#[test]
fn conditional_relative_jump_taken() {
    // SUB A,A sets Z=1 ; JR Z,+5
    let mut emu = emulator_with_program(0x0100, &[0x97, 0x28, 0x05]);
    emu.step_instruction().unwrap(); // SUB A,A
    let pc_before_jr = emu.debug_state().pc;

    let cycles = emu.step_instruction().unwrap(); // JR Z,+5, taken
    assert_eq!(emu.debug_state().pc, pc_before_jr.wrapping_add(2).wrapping_add(5));
    assert_eq!(cycles, 12);
}

#[test]
fn call_and_ret_round_trip() {
    let mut rom = vec![0u8; 32 * 1024];
    rom[0x0100] = 0xCD; // CALL a16
    rom[0x0101] = 0x00;
    rom[0x0102] = 0x20;
    rom[0x2000] = 0xC9; // RET
    let mut emu = Emulator::new(&rom).unwrap();

    emu.step_instruction().unwrap();
    let after_call = emu.debug_state();
    assert_eq!(after_call.sp, 0xFFFC);
    assert_eq!(after_call.pc, 0x2000);
    assert_eq!(emu.memory_bus().read_word(0xFFFC), 0x0103);

    emu.step_instruction().unwrap();
    let after_ret = emu.debug_state();
    assert_eq!(after_ret.sp, 0xFFFE);
    assert_eq!(after_ret.pc, 0x0103);
}

#[test]
fn ei_delays_ime_by_one_instruction() {
    let mut rom = vec![0u8; 32 * 1024];
    rom[0x0100] = 0xFB; // EI
    rom[0x0101] = 0x00; // NOP
    rom[0x0102] = 0xFB; // EI
    let mut emu = Emulator::new(&rom).unwrap();

    emu.step_instruction().unwrap(); // EI retires
    assert!(!emu.debug_state().ime, "IME must still be 0 right after EI");

    emu.step_instruction().unwrap(); // NOP retires, EI's effect now lands
    assert!(
        emu.debug_state().ime,
        "IME must be 1 after the instruction following EI"
    );
}

#[test]
fn illegal_opcode_reports_pc_and_byte() {
    let mut rom = vec![0u8; 32 * 1024];
    rom[0x0100] = 0xD3; // Illegal
    let mut emu = Emulator::new(&rom).unwrap();

    let err = emu.step_instruction().unwrap_err();
    match err {
        EmuError::IllegalOpcode { pc, opcode } => {
            assert_eq!(pc, 0x0100);
            assert_eq!(opcode, 0xD3);
        }
        other => panic!("expected IllegalOpcode, got {:?}", other),
    }
}

#[test]
fn rom_too_large_is_rejected() {
    let rom = vec![0u8; 32 * 1024 + 1];
    assert!(Emulator::new(&rom).is_err());
}

#[test]
fn cb_prefixed_instruction_consumes_both_bytes_and_correct_cycles() {
    // RLC B ; NOP
    let mut emu = emulator_with_program(0x0100, &[0xCB, 0x00, 0x00]);

    let cb_cycles = emu.step_instruction().unwrap();
    assert_eq!(cb_cycles, 8, "RLC B is 8 cycles total, not 12");
    assert_eq!(
        emu.debug_state().pc,
        0x0102,
        "PC must land past both CB-prefix bytes, not re-fetch the CB opcode byte"
    );

    let nop_cycles = emu.step_instruction().unwrap();
    assert_eq!(nop_cycles, 4, "the byte after CB 00 must decode as the real next instruction");
    assert_eq!(emu.debug_state().pc, 0x0103);
}

#[test]
fn cb_prefixed_hl_operand_costs_sixteen_cycles() {
    // RLC (HL)
    let mut emu = emulator_with_program(0x0100, &[0xCB, 0x06]);
    let cycles = emu.step_instruction().unwrap();
    assert_eq!(cycles, 16);
    assert_eq!(emu.debug_state().pc, 0x0102);
}

#[test]
fn pop_af_push_af_round_trips_upper_twelve_bits() {
    // LD SP,0xFFFE ; LD BC,0xBEE0 (F nibble must be 0) ; PUSH BC ; POP AF ; PUSH AF
    let mut emu = emulator_with_program(
        0x0100,
        &[0x31, 0xFE, 0xFF, 0x01, 0xE0, 0xBE, 0xC5, 0xF1, 0xF5],
    );
    for _ in 0..5 {
        emu.step_instruction().unwrap();
    }
    let state = emu.debug_state();
    assert_eq!(state.a, 0xBE);
    assert_eq!(state.f, 0xE0);
    assert_eq!(emu.memory_bus().read_word(state.sp), 0xBEE0);
}
