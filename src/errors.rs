use thiserror::Error;

/// Fatal machine conditions. Any of these parks the machine in
/// `RunState::Panicked`; none are retried or locally recovered, and only
/// an explicit reset brings the machine back.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum VmError {
    /// jump or call aimed below the program region or past the top of RAM
    #[error("illegal control transfer to {0:#06x}")]
    IllegalTarget(u16),

    /// fewer than two addressable bytes left at the program counter
    #[error("program counter out of range at {0:#06x}")]
    PcOutOfRange(u16),

    /// a seventeenth call with all sixteen stack slots in use
    #[error("call stack exceeded")]
    StackExceeded,

    /// a return with nothing to return to
    #[error("return with empty call stack")]
    EmptyCallStack,

    /// VF takes carry, borrow, shift-out and collision bits only; no
    /// instruction may name it as a destination
    #[error("VF is the flag register, not a writable destination")]
    FlagRegisterDest,

    /// an encoding this machine does not implement
    #[error("invalid opcode {0:#06x}")]
    InvalidOpcode(u16),
}
