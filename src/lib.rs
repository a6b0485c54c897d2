///
/// ## Design
///
/// * the machine is one explicit value (`Chip8Vm`) owned by the caller;
///   no ambient globals
/// * decode once into a tagged instruction, execute with a single
///   exhaustive match; the same decoded value feeds the disassembler
/// * VF takes carry/borrow/shift-out/collision bits through one flag
///   path and is never a legal instruction destination
/// * fatal conditions park the machine in `Panicked` until an explicit
///   reset; nothing is retried
/// * collaborators (renderer, monitor views, controls) borrow read-only
///   snapshots and own their cadence; the core never blocks and never
///   keeps time
/// * delay/sound timers are machine state only; nothing here counts
///   them down
///
/// Model
///
/// main loop
///  |-- controls.poll_commands() -> run-state transitions
///  |-- vm.step() while running
///  `-- display.draw(&vm)
///       |-- framebuffer canvas
///       `-- register / disassembly / memory panes (monitor views)
pub mod control;
pub mod display;
pub mod errors;
pub mod framebuffer;
pub mod instruction;
pub mod interpreter;
pub mod memory;
pub mod monitor;
pub mod registers;
