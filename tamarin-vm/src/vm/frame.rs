// tamarin-vm - Bytecode compiler and virtual machine for the Tamarin programming language
// Copyright (c) 2025 Tom Waddington. MIT licensed.

//! Call frames for the VM.

use std::rc::Rc;

use crate::bytecode::Instructions;
use crate::value::Closure;

/// A call frame on the VM's frame stack.
#[derive(Debug, Clone)]
pub struct Frame {
    /// The closure this frame is executing.
    pub closure: Rc<Closure>,

    /// Instruction pointer: index of the next byte to execute in the
    /// closure's instruction stream.
    pub ip: usize,

    /// Stack index of the frame's first local slot. Arguments and `let`
    /// locals occupy contiguous slots from here; on return the stack is
    /// reset to just below it, discarding locals and the callee.
    pub base_pointer: usize,
}

impl Frame {
    /// Create a frame starting at the first instruction.
    pub fn new(closure: Rc<Closure>, base_pointer: usize) -> Self {
        Self {
            closure,
            ip: 0,
            base_pointer,
        }
    }

    /// The instruction stream this frame executes.
    #[inline]
    pub fn instructions(&self) -> &Instructions {
        &self.closure.func.instructions
    }
}
