//! Instruction Disassembler for MIPS I.
//!
//! Renders decoded instructions as canonical assembly text. Operand order and
//! count depend on the mnemonic, not only on the format:
//!
//! | Mnemonics                          | Operands            |
//! |------------------------------------|---------------------|
//! | `syscall`                          | none                |
//! | `mfhi`, `mflo`                     | `rd`                |
//! | `jr`                               | `rs`                |
//! | `jalr`                             | `rd, rs`            |
//! | `mult`, `multu`, `div`, `divu`     | `rs, rt`            |
//! | other register format              | `rd, rs, rt`        |
//! | `lb`, `lw`, `lbu`, `sb`, `sw`      | `rt, offset(rs)`    |
//! | `lui`                              | `rt, imm`           |
//! | `bltz`, `bgez`, `blez`, `bgtz`     | `rs, offset`        |
//! | other immediate format             | `rt, rs, imm`       |
//! | `j`, `jal`                         | byte address        |
//!
//! Immediates print signed, except for the zero-extended logical operations
//! and `lui`, which print the raw 16-bit value.
//!
//! # Usage
//!
//! ```
//! use mipsim_core::config::RegisterNaming;
//! use mipsim_core::isa::decode::decode;
//! use mipsim_core::isa::disasm::disassemble;
//!
//! let inst = decode(0x8FA8_0004).unwrap(); // lw $t0, 4($sp)
//! assert_eq!(disassemble(&inst, RegisterNaming::Named), "lw $t0, 4($sp)");
//! assert_eq!(disassemble(&inst, RegisterNaming::Numeric), "lw $8, 4($29)");
//! ```

use crate::common::error::DecodeError;
use crate::config::RegisterNaming;
use crate::isa::abi;
use crate::isa::bits::parse_word;
use crate::isa::decode::{decode, decode_hex};
use crate::isa::instruction::{Funct, ImmOp, Instruction};

/// Disassembles a decoded instruction.
///
/// # Arguments
///
/// * `inst` - The decoded instruction.
/// * `naming` - Register naming used for operands.
pub fn disassemble(inst: &Instruction, naming: RegisterNaming) -> String {
    let reg = |idx: usize| abi::reg_name(idx, naming);

    match *inst {
        Instruction::Register {
            funct, rs, rt, rd, ..
        } => {
            let mn = funct.mnemonic();
            match funct {
                Funct::Syscall => mn.to_owned(),
                Funct::Mfhi | Funct::Mflo => format!("{mn} {}", reg(rd)),
                Funct::Jr => format!("{mn} {}", reg(rs)),
                Funct::Jalr => format!("{mn} {}, {}", reg(rd), reg(rs)),
                Funct::Mult | Funct::Multu | Funct::Div | Funct::Divu => {
                    format!("{mn} {}, {}", reg(rs), reg(rt))
                }
                _ => format!("{mn} {}, {}, {}", reg(rd), reg(rs), reg(rt)),
            }
        }

        Instruction::Immediate {
            op, rs, rt, imm, ..
        } => {
            let mn = op.mnemonic();
            let signed = i32::from(imm as i16);
            match op {
                ImmOp::Lb | ImmOp::Lw | ImmOp::Lbu | ImmOp::Sb | ImmOp::Sw => {
                    format!("{mn} {}, {signed}({})", reg(rt), reg(rs))
                }
                ImmOp::Lui => format!("{mn} {}, {imm}", reg(rt)),
                ImmOp::Bltz | ImmOp::Bgez | ImmOp::Blez | ImmOp::Bgtz => {
                    format!("{mn} {}, {signed}", reg(rs))
                }
                ImmOp::Andi | ImmOp::Ori | ImmOp::Xori => {
                    format!("{mn} {}, {}, {imm}", reg(rt), reg(rs))
                }
                _ => format!("{mn} {}, {}, {signed}", reg(rt), reg(rs)),
            }
        }

        // 26-bit word index, so the byte address always fits in 28 bits.
        Instruction::Jump { op, target, .. } => format!("{} {}", op.mnemonic(), target << 2),
    }
}

/// Disassembles a raw word, returning `"unknown (0x........)"` when it does
/// not decode.
pub fn disassemble_word(word: u32, naming: RegisterNaming) -> String {
    decode(word).map_or_else(
        |_| format!("unknown ({word:#010x})"),
        |inst| disassemble(&inst, naming),
    )
}

/// Stand-in line for a listing entry that does not decode.
///
/// Hexadecimal text renders like [`disassemble_word`]; anything else is
/// echoed as `"unknown (<text>)"`.
pub fn placeholder(word: &str) -> String {
    parse_word(word).map_or_else(
        |_| format!("unknown ({})", word.trim()),
        |raw| format!("unknown ({raw:#010x})"),
    )
}

/// Decodes and renders each hexadecimal word independently.
///
/// Order is preserved and one bad word does not affect the others.
pub fn listing<I, S>(words: I, naming: RegisterNaming) -> Vec<Result<String, DecodeError>>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    words
        .into_iter()
        .map(|word| decode_hex(word.as_ref()).map(|inst| disassemble(&inst, naming)))
        .collect()
}

/// Translates hexadecimal words into newline-joined assembly text.
///
/// # Errors
///
/// Returns the first [`DecodeError`]; use [`listing`] to keep going past bad words.
///
/// # Examples
///
/// ```
/// use mipsim_core::config::RegisterNaming;
/// use mipsim_core::isa::disasm::translate;
///
/// let text = translate(["00000020", "0c100004"], RegisterNaming::Named).unwrap();
/// assert_eq!(text, "add $zero, $zero, $zero\njal 4194320");
/// ```
pub fn translate<I, S>(words: I, naming: RegisterNaming) -> Result<String, DecodeError>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let lines = listing(words, naming)
        .into_iter()
        .collect::<Result<Vec<_>, _>>()?;
    Ok(lines.join("\n"))
}
