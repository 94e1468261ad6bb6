// tamarin-vm - Bytecode compiler and virtual machine for the Tamarin programming language
// Copyright (c) 2025 Tom Waddington. MIT licensed.

//! Bytecode encoding and decoding.
//!
//! An instruction stream is a contiguous byte sequence; [`make`] encodes a
//! single instruction and [`read_operands`] is its inverse. Multi-byte
//! operands are big-endian.

use crate::opcode::Op;
use crate::value::Value;

/// A flat, encoded instruction stream.
pub type Instructions = Vec<u8>;

/// The compiler's output: an instruction stream plus the constant pool it
/// references. Constants are read-only after compilation and may be shared
/// between a compiler and any number of VMs.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Bytecode {
    pub instructions: Instructions,
    pub constants: Vec<Value>,
}

/// Encode one instruction: the opcode byte followed by its operands.
///
/// Operands beyond the opcode's declared widths are ignored; missing ones
/// are not zero-filled, so callers must supply exactly what the opcode
/// declares.
pub fn make(op: Op, operands: &[usize]) -> Instructions {
    let widths = op.operand_widths();
    let mut instruction = Vec::with_capacity(1 + widths.iter().sum::<usize>());
    instruction.push(op as u8);

    for (operand, width) in operands.iter().zip(widths) {
        match width {
            2 => instruction.extend_from_slice(&(*operand as u16).to_be_bytes()),
            1 => instruction.push(*operand as u8),
            w => debug_assert!(false, "unsupported operand width {}", w),
        }
    }

    instruction
}

/// Decode the operands of `op` from the bytes following its opcode byte.
/// Returns the operands and the number of bytes consumed.
pub fn read_operands(op: Op, instructions: &[u8]) -> (Vec<usize>, usize) {
    let widths = op.operand_widths();
    let mut operands = Vec::with_capacity(widths.len());
    let mut offset = 0;

    for width in widths {
        match width {
            2 => operands.push(read_u16(&instructions[offset..]) as usize),
            1 => operands.push(read_u8(&instructions[offset..]) as usize),
            w => debug_assert!(false, "unsupported operand width {}", w),
        }
        offset += width;
    }

    (operands, offset)
}

/// Read a big-endian u16 from the front of `instructions`.
#[inline]
pub fn read_u16(instructions: &[u8]) -> u16 {
    u16::from_be_bytes([instructions[0], instructions[1]])
}

/// Read a u8 from the front of `instructions`.
#[inline]
pub fn read_u8(instructions: &[u8]) -> u8 {
    instructions[0]
}

/// Render an instruction stream as one line per instruction:
/// `0003 OpConstant 2`.
pub fn disassemble(instructions: &Instructions) -> String {
    let mut out = String::new();
    let mut position = 0;

    while position < instructions.len() {
        let Some(op) = Op::from_byte(instructions[position]) else {
            out.push_str(&format!("{:04} ERROR: unknown opcode {}\n", position, instructions[position]));
            position += 1;
            continue;
        };

        let (operands, read) = read_operands(op, &instructions[position + 1..]);
        out.push_str(&format!("{:04} {}", position, op.mnemonic()));
        for operand in &operands {
            out.push_str(&format!(" {}", operand));
        }
        out.push('\n');

        position += 1 + read;
    }

    out
}

/// Concatenate encoded instructions into one stream. Test and tooling
/// convenience; the compiler appends directly.
pub fn concat(instructions: &[Instructions]) -> Instructions {
    instructions.concat()
}
