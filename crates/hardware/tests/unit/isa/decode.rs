//! # Instruction Decoding Tests

use mipsim_core::common::error::DecodeError;
use mipsim_core::isa::decode::{classify, decode, decode_hex};
use mipsim_core::isa::instruction::{
    Format, Funct, ImmOp, Instruction, InstructionBits, JumpOp,
};
use mipsim_core::isa::mips1::opcodes;
use pretty_assertions::assert_eq;
use proptest::prelude::*;

use crate::common::builder::instruction::InstructionBuilder;

#[test]
fn test_classify_is_total() {
    for opcode in 0..64 {
        let expected = match opcode {
            0 => Format::Register,
            2 | 3 => Format::Jump,
            _ => Format::Immediate,
        };
        assert_eq!(classify(opcode), expected, "opcode {opcode}");
    }
}

#[test]
fn test_field_extraction() {
    let word: u32 = 0x8FA8_FFFC; // lw $t0, -4($sp)
    assert_eq!(word.opcode(), opcodes::OP_LW);
    assert_eq!(word.rs(), 29);
    assert_eq!(word.rt(), 8);
    assert_eq!(word.imm16(), 0xFFFC);
    assert_eq!(word.simm16(), -4);
    assert_eq!(0x0C10_0004_u32.target26(), 0x0010_0004);
    assert_eq!(0x0008_4940_u32.shamt(), 5);
}

#[test]
fn test_decode_register_format() {
    assert_eq!(
        decode(0x0108_4820).unwrap(),
        Instruction::Register {
            raw: 0x0108_4820,
            funct: Funct::Add,
            rs: 8,
            rt: 8,
            rd: 9,
            shamt: 0,
        }
    );
}

#[test]
fn test_decode_immediate_format() {
    let inst = decode(0x8FA8_0004).unwrap();
    assert_eq!(
        inst,
        Instruction::Immediate {
            raw: 0x8FA8_0004,
            op: ImmOp::Lw,
            rs: 29,
            rt: 8,
            imm: 4,
        }
    );
    assert_eq!(inst.format(), Format::Immediate);
    assert_eq!(inst.opcode(), opcodes::OP_LW);
    assert_eq!(inst.mnemonic(), "lw");
    assert_eq!(inst.raw(), 0x8FA8_0004);
}

#[test]
fn test_decode_jump_format() {
    assert_eq!(
        decode(0x0C10_0004).unwrap(),
        Instruction::Jump {
            raw: 0x0C10_0004,
            op: JumpOp::Jal,
            target: 0x0010_0004,
        }
    );
}

#[test]
fn test_syscall_carries_no_operands() {
    let inst = decode(0x0000_000C).unwrap();
    assert_eq!(inst.mnemonic(), "syscall");
    assert_eq!(inst.to_string(), "syscall");
}

#[test]
fn test_regimm_selects_branch_by_rt() {
    let bltz = InstructionBuilder::new().branch_zero(ImmOp::Bltz, 8, 1).build();
    let bgez = InstructionBuilder::new().branch_zero(ImmOp::Bgez, 8, 1).build();
    assert_eq!(decode(bltz).unwrap().mnemonic(), "bltz");
    assert_eq!(decode(bgez).unwrap().mnemonic(), "bgez");
    assert_eq!(
        decode(0x0402_0000),
        Err(DecodeError::UnknownRegimm {
            rt: 2,
            word: 0x0402_0000,
        })
    );
}

#[test]
fn test_unknown_function_code() {
    assert_eq!(
        decode(0x0000_0001),
        Err(DecodeError::UnknownFunction { funct: 1, word: 1 })
    );
}

#[test]
fn test_unknown_opcode() {
    assert_eq!(
        decode(0xFC00_0000),
        Err(DecodeError::UnknownOpcode {
            opcode: 0x3F,
            word: 0xFC00_0000,
        })
    );
    // Floating point is not part of the instruction set.
    assert!(matches!(
        decode(0x4600_0000),
        Err(DecodeError::UnknownOpcode { opcode: 0x11, .. })
    ));
}

#[test]
fn test_every_operation_decodes_from_its_encoding() {
    for funct in Funct::ALL {
        assert_eq!(Funct::from_code(funct.code()), Some(funct));
        let word = InstructionBuilder::new().register(funct, 1, 2, 3).build();
        assert_eq!(decode(word).unwrap().mnemonic(), funct.mnemonic());
    }
    for op in ImmOp::ALL {
        let word = match op {
            ImmOp::Bltz | ImmOp::Bgez => InstructionBuilder::new().branch_zero(op, 2, 4),
            _ => InstructionBuilder::new().immediate(op, 1, 2, 4),
        }
        .build();
        assert_eq!(decode(word).unwrap().mnemonic(), op.mnemonic());
    }
    for op in JumpOp::ALL {
        let word = InstructionBuilder::new().jump(op, 0x100).build();
        assert_eq!(decode(word).unwrap().mnemonic(), op.mnemonic());
    }
}

#[test]
fn test_decode_hex_accepts_prefix_and_whitespace() {
    assert_eq!(decode_hex(" 0x0000000c "), decode(0x0000_000C));
}

#[test]
fn test_decode_hex_rejects_malformed_text() {
    assert_eq!(
        decode_hex("xyz"),
        Err(DecodeError::MalformedHex("xyz".to_owned()))
    );
}

proptest! {
    #[test]
    fn prop_text_and_word_paths_agree(word in any::<u32>()) {
        prop_assert_eq!(decode_hex(&format!("{word:08x}")), decode(word));
    }

    #[test]
    fn prop_decoded_instruction_keeps_raw_word(word in any::<u32>()) {
        if let Ok(inst) = decode(word) {
            prop_assert_eq!(inst.raw(), word);
            prop_assert_eq!(inst.opcode(), word.opcode());
        }
    }
}
