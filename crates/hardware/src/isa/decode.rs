//! MIPS Instruction Decoder.
//!
//! This module handles the decoding of 32-bit MIPS instruction encodings into
//! the structured [`Instruction`] form. The top six bits select one of three
//! formats:
//!
//! - opcode 0: register format, operation chosen by the function code;
//! - opcodes 2 and 3: jump format;
//! - everything else: immediate format (opcode 1 further keys on `rt`).
//!
//! The classification is total: every word either decodes or yields a
//! [`DecodeError`], never a panic.

use crate::common::error::DecodeError;
use crate::isa::bits::{self, I_LAYOUT, J_LAYOUT, R_LAYOUT, WORD_BITS};
use crate::isa::instruction::{Format, Funct, ImmOp, Instruction, InstructionBits, JumpOp};
use crate::isa::mips1::opcodes;

/// Returns the format selected by a 6-bit opcode.
///
/// Total over all 64 opcodes; whether the opcode is actually assigned is
/// checked later by [`decode`].
pub const fn classify(opcode: u32) -> Format {
    match opcode {
        opcodes::OP_SPECIAL => Format::Register,
        opcodes::OP_J | opcodes::OP_JAL => Format::Jump,
        _ => Format::Immediate,
    }
}

/// Decodes a MIPS instruction word.
///
/// # Arguments
///
/// * `inst` - The 32-bit instruction encoding to decode
///
/// # Errors
///
/// * [`DecodeError::UnknownFunction`] for an unassigned function code.
/// * [`DecodeError::UnknownRegimm`] for an unassigned `REGIMM` selector.
/// * [`DecodeError::UnknownOpcode`] for an unassigned primary opcode.
///
/// # Examples
///
/// ```
/// use mipsim_core::isa::decode::decode;
///
/// let inst = decode(0x0000_0020).unwrap();
/// assert_eq!(inst.to_string(), "add $zero, $zero, $zero");
/// ```
pub fn decode(inst: u32) -> Result<Instruction, DecodeError> {
    let opcode = inst.opcode();
    match classify(opcode) {
        Format::Register => {
            let code = inst.funct();
            let funct = Funct::from_code(code)
                .ok_or(DecodeError::UnknownFunction { funct: code, word: inst })?;
            Ok(Instruction::Register {
                raw: inst,
                funct,
                rs: inst.rs(),
                rt: inst.rt(),
                rd: inst.rd(),
                shamt: inst.shamt(),
            })
        }
        Format::Jump => {
            let op = JumpOp::from_opcode(opcode)
                .ok_or(DecodeError::UnknownOpcode { opcode, word: inst })?;
            Ok(Instruction::Jump {
                raw: inst,
                op,
                target: inst.target26(),
            })
        }
        Format::Immediate => {
            let op = immediate_op(opcode, inst.rt() as u32, inst)?;
            Ok(Instruction::Immediate {
                raw: inst,
                op,
                rs: inst.rs(),
                rt: inst.rt(),
                imm: inst.imm16(),
            })
        }
    }
}

/// Resolves the immediate-format operation, consulting `rt` for `REGIMM`.
fn immediate_op(opcode: u32, rt: u32, word: u32) -> Result<ImmOp, DecodeError> {
    if opcode == opcodes::OP_REGIMM {
        ImmOp::from_regimm(rt).ok_or(DecodeError::UnknownRegimm { rt, word })
    } else {
        ImmOp::from_opcode(opcode).ok_or(DecodeError::UnknownOpcode { opcode, word })
    }
}

/// Decodes an instruction given as hexadecimal text.
///
/// Works on the text representation: the word is expanded to a 32-bit binary
/// string, cut into the fields of its format with [`bits::slice_fields`], and
/// each field is parsed with [`bits::binary_to_int`]. The result is identical
/// to `decode(parse_word(text)?)`.
///
/// # Errors
///
/// [`DecodeError::MalformedHex`] for text that is not hexadecimal, and every
/// error [`decode`] can return.
pub fn decode_hex(text: &str) -> Result<Instruction, DecodeError> {
    let binary = bits::hex_to_binary(text, WORD_BITS)?;
    let word = bits::binary_to_int(&binary)? as u32;
    let opcode = field(&binary, &[0, 6])?;

    match classify(opcode) {
        Format::Register => {
            let f = fields(&binary, &R_LAYOUT)?;
            let funct = Funct::from_code(f[5]).ok_or(DecodeError::UnknownFunction {
                funct: f[5],
                word,
            })?;
            Ok(Instruction::Register {
                raw: word,
                funct,
                rs: f[1] as usize,
                rt: f[2] as usize,
                rd: f[3] as usize,
                shamt: f[4],
            })
        }
        Format::Jump => {
            let f = fields(&binary, &J_LAYOUT)?;
            let op =
                JumpOp::from_opcode(opcode).ok_or(DecodeError::UnknownOpcode { opcode, word })?;
            Ok(Instruction::Jump {
                raw: word,
                op,
                target: f[1],
            })
        }
        Format::Immediate => {
            let f = fields(&binary, &I_LAYOUT)?;
            let op = immediate_op(opcode, f[2], word)?;
            Ok(Instruction::Immediate {
                raw: word,
                op,
                rs: f[1] as usize,
                rt: f[2] as usize,
                imm: f[3] as u16,
            })
        }
    }
}

/// Slices `binary` at `layout` and parses every field.
fn fields(binary: &str, layout: &[usize]) -> Result<Vec<u32>, DecodeError> {
    bits::slice_fields(binary, layout)?
        .into_iter()
        .map(|part| bits::binary_to_int(part).map(|value| value as u32))
        .collect()
}

/// Parses the single field between two cut points.
fn field(binary: &str, cut: &[usize; 2]) -> Result<u32, DecodeError> {
    fields(binary, cut)?
        .first()
        .copied()
        .ok_or_else(|| DecodeError::MalformedBinary(binary.to_owned()))
}
