use super::{Cpu, CpuResult, constants::*};
use crate::memory_bus::MemoryBus;

// --- Rotate/Shift Implementations (Non-CB prefixed) ---
impl Cpu {
    // RLCA
    pub fn op_rlca(&mut self, _bus: &mut MemoryBus) -> CpuResult<u16> {
        self.a = self.rlc(self.a);
        self.set_flag(FLAG_Z, false); // Special case: Z flag is cleared
        Ok(0)
    }
    // RLA
    pub fn op_rla(&mut self, _bus: &mut MemoryBus) -> CpuResult<u16> {
        self.a = self.rl(self.a);
        self.set_flag(FLAG_Z, false); // Special case: Z flag is cleared
        Ok(0)
    }
    // RRCA
    pub fn op_rrca(&mut self, _bus: &mut MemoryBus) -> CpuResult<u16> {
        self.a = self.rrc(self.a);
        self.set_flag(FLAG_Z, false); // Special case: Z flag is cleared
        Ok(0)
    }
    // RRA
    pub fn op_rra(&mut self, _bus: &mut MemoryBus) -> CpuResult<u16> {
        self.a = self.rr(self.a);
        self.set_flag(FLAG_Z, false); // Special case: Z flag is cleared
        Ok(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cpu() -> (Cpu, MemoryBus) {
        let mut cpu = Cpu::new();
        cpu.reset();
        (cpu, MemoryBus::new())
    }

    #[test]
    fn rlca_always_clears_zero_flag_even_on_zero_result() {
        let (mut cpu, mut bus) = cpu();
        cpu.a = 0x00;
        cpu.op_rlca(&mut bus).unwrap();
        assert_eq!(cpu.a, 0x00);
        assert_eq!(cpu.f & FLAG_Z, 0, "RLCA must clear Z even when A ends up zero");
    }

    #[test]
    fn cb_rlc_b_sets_zero_flag_when_result_is_zero() {
        let (mut cpu, mut bus) = cpu();
        cpu.b = 0x00;
        cpu.cb_rlc_b(&mut bus).unwrap();
        assert_eq!(cpu.b, 0x00);
        assert_ne!(cpu.f & FLAG_Z, 0, "CB RLC B must set Z when the rotated byte is zero");
    }

    #[test]
    fn cb_rlc_b_clears_zero_flag_when_result_nonzero() {
        let (mut cpu, mut bus) = cpu();
        cpu.b = 0x01;
        cpu.cb_rlc_b(&mut bus).unwrap();
        assert_eq!(cpu.b, 0x02);
        assert_eq!(cpu.f & FLAG_Z, 0);
    }
}