//! Execution Engine Definition and Initialization.
//!
//! This module defines the `Vm` structure, which owns all machine state. It coordinates:
//! 1. **State Management:** The register file, per-register masks, and data memory.
//! 2. **Program Building:** The append-only instruction list and explicit mask installation.
//! 3. **Observability:** Register and mask inspection plus execution statistics.
//!
//! Execution itself lives in [`execution`].

/// Operand validation and masked lane-wise execution.
pub mod execution;

use crate::common::error::{ConfigError, Fault};
use crate::common::RegisterFile;
use crate::config::Config;
use crate::core::arch::mask::LaneMask;
use crate::isa::Instruction;
use crate::memory::MemoryBuffer;
use crate::stats::ExecStats;

/// Lifecycle state of an engine.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum VmState {
    /// Accepting instructions and mask installs.
    #[default]
    Building,
    /// The last `execute_all` ran the whole program without a fault.
    Executed,
}

/// SIMD execution engine.
///
/// The caller installs masks, appends instructions, then runs the whole program with
/// [`Vm::execute_all`]. Mask installation is never implied by appending or executing.
///
/// # Examples
///
/// ```
/// use simdvm_core::config::Config;
/// use simdvm_core::core::arch::LaneMask;
/// use simdvm_core::core::Vm;
/// use simdvm_core::isa::{Instruction, Operand};
///
/// let config = Config { lane_count: 4, memory_size: 64, ..Config::default() };
/// let mut vm = Vm::with_config(&config).unwrap();
///
/// let inst = Instruction::add(1, Operand::Imm(9), Operand::Imm(8), LaneMask::all(4));
/// vm.install_instruction_mask(&inst).unwrap();
/// vm.append(inst);
/// vm.execute_all().unwrap();
///
/// assert_eq!(vm.read_register(1).unwrap(), &[17, 17, 17, 17]);
/// ```
#[derive(Debug)]
pub struct Vm {
    regs: RegisterFile,
    memory: MemoryBuffer,
    program: Vec<Instruction>,
    state: VmState,
    stats: ExecStats,
    trace: bool,
}

impl Vm {
    /// Creates an engine with the default dimensions (32 registers, 32 lanes, 1 GiB).
    pub fn new() -> Self {
        Self::build(&Config::default())
    }

    /// Creates an engine from `config` after validating it.
    ///
    /// # Arguments
    ///
    /// * `config` - Machine dimensions and tracing options.
    ///
    /// # Returns
    ///
    /// A zero-initialized engine, or [`ConfigError::Invalid`] if a dimension is zero.
    pub fn with_config(config: &Config) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self::build(config))
    }

    fn build(config: &Config) -> Self {
        tracing::debug!(
            registers = config.register_count,
            lanes = config.lane_count,
            memory = config.memory_size,
            "creating vm"
        );
        Self {
            regs: RegisterFile::new(config.register_count, config.lane_count),
            memory: MemoryBuffer::new(config.memory_size),
            program: Vec::new(),
            state: VmState::Building,
            stats: ExecStats::default(),
            trace: config.trace_instructions,
        }
    }

    /// Number of vector registers.
    pub const fn register_count(&self) -> usize {
        self.regs.register_count()
    }

    /// Number of lanes per register.
    pub const fn lane_count(&self) -> usize {
        self.regs.lane_count()
    }

    /// Installs `mask` as the active mask of register `index`.
    ///
    /// The mask stays in effect for every later instruction targeting `index` until
    /// another mask is installed.
    pub fn install_mask(&mut self, index: usize, mask: LaneMask) -> Result<(), Fault> {
        self.regs.install_mask(index, mask)?;
        self.state = VmState::Building;
        Ok(())
    }

    /// Installs the mask carried by `inst` on its destination register.
    pub fn install_instruction_mask(&mut self, inst: &Instruction) -> Result<(), Fault> {
        self.install_mask(inst.dst, inst.mask.clone())
    }

    /// Returns the mask currently installed for register `index`.
    pub fn read_mask(&self, index: usize) -> Result<&LaneMask, Fault> {
        self.regs.mask(index)
    }

    /// Appends `inst` to the end of the program.
    ///
    /// Operands are validated when the instruction executes, not here.
    pub fn append(&mut self, inst: Instruction) {
        self.program.push(inst);
        self.state = VmState::Building;
    }

    /// The program in execution order.
    pub fn program(&self) -> &[Instruction] {
        &self.program
    }

    /// Current lifecycle state.
    pub const fn state(&self) -> VmState {
        self.state
    }

    /// Returns the lanes of register `index`.
    pub fn read_register(&self, index: usize) -> Result<&[i32], Fault> {
        self.regs.read(index)
    }

    /// Overwrites the leading lanes of register `index`, ignoring its mask.
    pub fn write_register(&mut self, index: usize, lanes: &[i32]) -> Result<(), Fault> {
        self.regs.write(index, lanes)
    }

    /// The register file.
    pub const fn registers(&self) -> &RegisterFile {
        &self.regs
    }

    /// Data memory.
    pub const fn memory(&self) -> &MemoryBuffer {
        &self.memory
    }

    /// Mutable data memory, for seeding inputs.
    pub const fn memory_mut(&mut self) -> &mut MemoryBuffer {
        &mut self.memory
    }

    /// Execution statistics accumulated over every run.
    pub const fn stats(&self) -> &ExecStats {
        &self.stats
    }

    /// Zeroes the execution statistics.
    pub fn reset_stats(&mut self) {
        self.stats.reset();
    }
}

impl Default for Vm {
    fn default() -> Self {
        Self::new()
    }
}
