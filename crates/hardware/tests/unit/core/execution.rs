//! Program Execution Tests
//!
//! Whole-program scenarios through the public engine API: the install/append/execute
//! cycle, fail-fast ordering, repeated execution, and lifecycle state.

use pretty_assertions::assert_eq;
use simdvm_core::Vm;
use simdvm_core::common::{Fault, LANE_COUNT};
use simdvm_core::config::Config;
use simdvm_core::core::VmState;
use simdvm_core::core::arch::LaneMask;
use simdvm_core::isa::{Instruction, Opcode, Operand};

use crate::common::builder::instruction::InstructionBuilder;
use crate::common::harness::{LANES, TestContext, ramp};

/// Default machine: all-true mask on v1, `add v1, #9, #8`, every lane becomes 17.
#[test]
fn add_immediates_on_default_machine() {
    let mut vm = Vm::new();
    let inst = Instruction::add(1, Operand::Imm(9), Operand::Imm(8), LaneMask::all(LANE_COUNT));
    vm.install_instruction_mask(&inst).unwrap();
    vm.append(inst);
    vm.execute_all().unwrap();
    assert_eq!(vm.read_register(1).unwrap(), &[17; LANE_COUNT][..]);
}

/// `mov v0, #3`; `mov v1, #4`; `add v2, v0, v1` leaves 7 in every lane of v2.
#[test]
fn mov_mov_add_on_default_machine() {
    let mut vm = Vm::new();
    let all = LaneMask::all(LANE_COUNT);
    let program = [
        Instruction::mov(0, Operand::Imm(3), all.clone()),
        Instruction::mov(1, Operand::Imm(4), all.clone()),
        Instruction::add(2, Operand::Reg(0), Operand::Reg(1), all),
    ];
    for inst in program {
        vm.install_instruction_mask(&inst).unwrap();
        vm.append(inst);
    }
    vm.execute_all().unwrap();

    assert_eq!(vm.read_register(0).unwrap(), &[3; LANE_COUNT][..]);
    assert_eq!(vm.read_register(1).unwrap(), &[4; LANE_COUNT][..]);
    assert_eq!(vm.read_register(2).unwrap(), &[7; LANE_COUNT][..]);
}

/// The same three-instruction program with masks installed only on v0 and v2.
/// v1 keeps its all-inactive mask, so the second move does nothing and v2 = 3 + 0.
#[test]
fn missing_mask_install_leaves_destination_untouched() {
    let mut ctx = TestContext::new();
    let all = LaneMask::all(LANES);
    ctx.install_mask(0, all.clone());
    ctx.install_mask(2, all.clone());
    ctx.emit_unmasked(Instruction::mov(0, Operand::Imm(3), all.clone()));
    ctx.emit_unmasked(Instruction::mov(1, Operand::Imm(4), all.clone()));
    ctx.emit_unmasked(Instruction::add(2, Operand::Reg(0), Operand::Reg(1), all));
    ctx.run().unwrap();
    assert_eq!(ctx.get_reg(1), vec![0; LANES]);
    assert_eq!(ctx.get_reg(2), vec![3; LANES]);
}

#[test]
fn instructions_run_in_program_order() {
    let mut ctx = TestContext::new();
    ctx.emit(InstructionBuilder::new(Opcode::Mov).dst(1).src1_imm(2).build());
    ctx.emit(InstructionBuilder::new(Opcode::Mul).dst(1).src1_reg(1).src2_imm(10).build());
    ctx.emit(InstructionBuilder::new(Opcode::Sub).dst(1).src1_reg(1).src2_imm(1).build());
    ctx.run().unwrap();
    assert_eq!(ctx.get_reg(1), vec![19; LANES]);
}

#[test]
fn fault_stops_later_instructions() {
    let mut ctx = TestContext::new();
    ctx.emit(InstructionBuilder::new(Opcode::Mov).dst(1).src1_imm(5).build());
    ctx.emit(InstructionBuilder::new(Opcode::Div).dst(2).src1_imm(5).src2_imm(0).build());
    ctx.emit(InstructionBuilder::new(Opcode::Mov).dst(3).src1_imm(6).build());

    let err = ctx.run().unwrap_err();
    assert_eq!(err.index, 1);
    assert_eq!(err.opcode, Opcode::Div);
    assert_eq!(err.fault, Fault::DivideByZero { lane: 0 });

    assert_eq!(ctx.get_reg(1), vec![5; LANES], "earlier instruction keeps its effect");
    assert_eq!(ctx.get_reg(3), vec![0; LANES], "later instruction must not run");
    assert_eq!(ctx.vm.state(), VmState::Building);
}

#[test]
fn store_then_load_through_different_registers() {
    let mut ctx = TestContext::new();
    ctx.set_reg(1, &ramp(-16, 1));
    ctx.set_reg(2, &ramp(512, 1));
    ctx.emit(InstructionBuilder::new(Opcode::Store).dst(1).src1_reg(2).build());
    ctx.emit(InstructionBuilder::new(Opcode::Load).dst(3).src1_reg(2).build());
    ctx.run().unwrap();
    assert_eq!(ctx.get_reg(3), ramp(-16, 1));
}

/// A program without memory side effects reaches the same state when run twice.
#[test]
fn re_execution_is_deterministic() {
    let mut ctx = TestContext::new();
    ctx.set_reg(1, &ramp(3, 4));
    ctx.emit(InstructionBuilder::new(Opcode::Mov).dst(2).src1_reg(1).build());
    ctx.emit(InstructionBuilder::new(Opcode::Mul).dst(3).src1_reg(2).src2_imm(3).build());
    ctx.emit(InstructionBuilder::new(Opcode::Add).dst(4).src1_reg(3).src2_reg(1).build());

    ctx.run().unwrap();
    let first: Vec<Vec<i32>> = (0..8).map(|r| ctx.get_reg(r)).collect();
    ctx.run().unwrap();
    let second: Vec<Vec<i32>> = (0..8).map(|r| ctx.get_reg(r)).collect();

    assert_eq!(first, second);
    assert_eq!(ctx.get_reg(4), ramp(12, 16));
}

/// Re-running a self-referential program accumulates.
#[test]
fn re_execution_is_cumulative() {
    let mut ctx = TestContext::new();
    ctx.emit(InstructionBuilder::new(Opcode::Add).dst(1).src1_reg(1).src2_imm(1).build());
    for _ in 0..3 {
        ctx.run().unwrap();
    }
    assert_eq!(ctx.get_reg(1), vec![3; LANES]);
    assert_eq!(ctx.vm.program().len(), 1);
}

#[test]
fn empty_program_executes() {
    let mut vm = Vm::with_config(&Config {
        lane_count: 4,
        memory_size: 16,
        ..Config::default()
    })
    .unwrap();
    vm.execute_all().unwrap();
    assert_eq!(vm.state(), VmState::Executed);
    assert_eq!(vm.stats().instructions_retired, 0);
}

#[test]
fn lifecycle_state_transitions() {
    let mut ctx = TestContext::new();
    assert_eq!(ctx.vm.state(), VmState::Building);

    ctx.emit(InstructionBuilder::new(Opcode::Mov).dst(1).src1_imm(1).build());
    ctx.run().unwrap();
    assert_eq!(ctx.vm.state(), VmState::Executed);

    ctx.install_mask(1, LaneMask::none(LANES));
    assert_eq!(ctx.vm.state(), VmState::Building);

    ctx.run().unwrap();
    assert_eq!(ctx.vm.state(), VmState::Executed);

    ctx.emit_unmasked(InstructionBuilder::new(Opcode::Mov).dst(2).src1_imm(1).build());
    assert_eq!(ctx.vm.state(), VmState::Building);
}

#[test]
fn program_preserves_append_order() {
    let mut ctx = TestContext::new();
    let a = InstructionBuilder::new(Opcode::Mov).dst(1).src1_imm(1).build();
    let b = InstructionBuilder::new(Opcode::Load).dst(2).src1_imm(0).build();
    ctx.emit_unmasked(a.clone());
    ctx.emit_unmasked(b.clone());
    assert_eq!(ctx.vm.program(), &[a, b][..]);
}

#[test]
fn small_machine_dimensions() {
    let config = Config {
        register_count: 2,
        lane_count: 3,
        memory_size: 8,
        trace_instructions: true,
    };
    let mut ctx = TestContext::with_config(config);
    ctx.install_mask(1, LaneMask::all(3));
    ctx.emit_unmasked(Instruction::mov(1, Operand::Imm(-2), LaneMask::all(3)));
    ctx.emit_unmasked(Instruction::store(1, Operand::Imm(7), LaneMask::all(3)));
    ctx.emit_unmasked(Instruction::mov(2, Operand::Imm(0), LaneMask::all(3)));

    let err = ctx.run().unwrap_err();
    assert_eq!(err.index, 2);
    assert_eq!(err.fault, Fault::InvalidRegister(2));
    assert_eq!(ctx.vm.read_register(1).unwrap(), &[-2, -2, -2]);
    assert_eq!(ctx.mem_byte(7), 0xFE);
}
