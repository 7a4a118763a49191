//! Deterministic, ANSI-free text rendering of the hart's architectural
//! state. Colorization, if wanted, is layered on by the caller.

use crate::registers::Registers;

const ABI_NAMES: [&str; 32] = [
    "zero", "ra", "sp", "gp", "tp", "t0", "t1", "t2", "s0", "s1", "a0", "a1", "a2", "a3", "a4",
    "a5", "a6", "a7", "s2", "s3", "s4", "s5", "s6", "s7", "s8", "s9", "s10", "s11", "t3", "t4",
    "t5", "t6",
];

/// Render the PC, the instruction mnemonic just executed at that PC, and
/// the full register file, four registers per row.
pub fn dump(registers: &Registers, pc: u64, mnemonic: &str) -> String {
    let mut out = String::new();
    out.push_str(&format!("pc=0x{pc:016x}  {mnemonic}\n"));
    for (i, (index, value)) in registers.iter().enumerate() {
        out.push_str(&format!("{:>4}(x{:<2})=0x{:016x}", ABI_NAMES[index as usize], index, value));
        out.push_str(if (i + 1) % 4 == 0 { "\n" } else { "  " });
    }
    if !out.ends_with('\n') {
        out.push('\n');
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dump_contains_pc_and_mnemonic() {
        let regs = Registers::new();
        let text = dump(&regs, 0x8000_0000, "addi");
        assert!(text.starts_with("pc=0x0000000080000000  addi\n"));
    }

    #[test]
    fn dump_lists_all_32_registers() {
        let regs = Registers::new();
        let text = dump(&regs, 0, "nop");
        for name in ABI_NAMES {
            assert!(text.contains(name), "missing register {name}");
        }
    }

    #[test]
    fn dump_reflects_register_contents() {
        let mut regs = Registers::new();
        regs.write(10, 0x42).unwrap();
        let text = dump(&regs, 0, "nop");
        assert!(text.contains("a0(x10)=0x0000000000000042"));
    }
}
