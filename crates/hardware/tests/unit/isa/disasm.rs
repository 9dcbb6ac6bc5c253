//! Instruction Disassembler Unit Tests.
//!
//! Verifies the textual form of instructions: mnemonic, data type suffix, and operands.

use pretty_assertions::assert_eq;
use rstest::rstest;
use simdvm_core::core::arch::LaneMask;
use simdvm_core::isa::{DataType, Instruction, Opcode, Operand, disassemble};

fn mask() -> LaneMask {
    LaneMask::all(4)
}

#[rstest]
#[case(Instruction::mov(0, Operand::Imm(3), mask()), "mov.s32 v0, #3")]
#[case(Instruction::add(1, Operand::Imm(9), Operand::Imm(8), mask()), "add.s32 v1, #9, #8")]
#[case(Instruction::sub(2, Operand::Reg(0), Operand::Imm(-1), mask()), "sub.s32 v2, v0, #-1")]
#[case(Instruction::mul(3, Operand::Reg(1), Operand::Reg(2), mask()), "mul.s32 v3, v1, v2")]
#[case(Instruction::div(4, Operand::Reg(3), Operand::Imm(7), mask()), "div.s32 v4, v3, #7")]
#[case(Instruction::load(5, Operand::Reg(6), mask()), "ld.s32 v5, v6")]
#[case(Instruction::store(5, Operand::Imm(128), mask()), "st.s32 v5, #128")]
fn single_instruction(#[case] inst: Instruction, #[case] expected: &str) {
    assert_eq!(inst.to_string(), expected);
}

#[test]
fn data_type_suffix_is_shown() {
    let inst = Instruction::load(1, Operand::Reg(2), mask()).with_data_type(DataType::U8);
    assert_eq!(inst.to_string(), "ld.u8 v1, v2");
}

#[test]
fn unsupported_opcodes_still_disassemble() {
    let xor = Instruction::new(Opcode::Xor, 1, Operand::Reg(2), Operand::Imm(0xFF), mask());
    assert_eq!(xor.to_string(), "xor.s32 v1, v2, #255");

    let not = Instruction::new(Opcode::Not, 1, Operand::Reg(2), Operand::Reg(3), mask());
    assert_eq!(not.to_string(), "not.s32 v1, v2");
}

#[test]
fn program_listing_is_numbered() {
    let program = [
        Instruction::mov(0, Operand::Imm(3), mask()),
        Instruction::add(2, Operand::Reg(0), Operand::Reg(1), mask()),
    ];
    assert_eq!(
        disassemble(&program),
        "   0: mov.s32 v0, #3\n   1: add.s32 v2, v0, v1\n"
    );
}

#[test]
fn empty_program_listing() {
    assert_eq!(disassemble(&[]), "");
}
