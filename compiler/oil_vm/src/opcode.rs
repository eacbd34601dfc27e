//! The eighteen instructions and their numeric codes.

use std::fmt;

use crate::cell::Cell;

/// An instruction selector, stored on the tape as its integer code.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[repr(u8)]
pub enum Opcode {
    Nop = 0,
    Copy = 1,
    Reverse = 2,
    Quit = 3,
    Output = 4,
    Input = 5,
    Jump = 6,
    RelativeJump = 7,
    Increment = 8,
    Decrement = 9,
    EqJump = 10,
    Newline = 11,
    Explode = 12,
    Implode = 13,
    Call = 14,
    Random = 15,
    OrdExplode = 16,
    ChrImplode = 17,
}

impl Opcode {
    pub const COUNT: usize = 18;

    /// Every opcode, ordered by code.
    pub const ALL: [Opcode; Opcode::COUNT] = [
        Opcode::Nop,
        Opcode::Copy,
        Opcode::Reverse,
        Opcode::Quit,
        Opcode::Output,
        Opcode::Input,
        Opcode::Jump,
        Opcode::RelativeJump,
        Opcode::Increment,
        Opcode::Decrement,
        Opcode::EqJump,
        Opcode::Newline,
        Opcode::Explode,
        Opcode::Implode,
        Opcode::Call,
        Opcode::Random,
        Opcode::OrdExplode,
        Opcode::ChrImplode,
    ];

    #[inline]
    pub const fn code(self) -> u8 {
        self as u8
    }

    #[inline]
    pub const fn index(self) -> usize {
        self as usize
    }

    pub fn from_code(code: i64) -> Option<Opcode> {
        usize::try_from(code)
            .ok()
            .and_then(|index| Opcode::ALL.get(index).copied())
    }

    /// Decode the raw cell under the head.
    ///
    /// No coercion happens here: a string `"4"` is not `output`.
    pub fn from_cell(cell: &Cell) -> Option<Opcode> {
        match cell {
            Cell::Int(code) => Opcode::from_code(*code),
            Cell::Str(_) => None,
        }
    }

    /// Number of operand cells following the opcode.
    ///
    /// `eq_jump` reads three cells when its comparison fails (the skipped
    /// cell is not counted).
    pub const fn arity(self) -> u8 {
        match self {
            Opcode::Nop | Opcode::Reverse | Opcode::Quit | Opcode::Newline => 0,
            Opcode::Output
            | Opcode::Input
            | Opcode::Jump
            | Opcode::RelativeJump
            | Opcode::Increment
            | Opcode::Decrement => 1,
            Opcode::Copy | Opcode::Explode | Opcode::Random | Opcode::OrdExplode => 2,
            Opcode::EqJump | Opcode::Implode | Opcode::Call | Opcode::ChrImplode => 3,
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            Opcode::Nop => "nop",
            Opcode::Copy => "copy",
            Opcode::Reverse => "reverse",
            Opcode::Quit => "quit",
            Opcode::Output => "output",
            Opcode::Input => "input",
            Opcode::Jump => "jump",
            Opcode::RelativeJump => "relative_jump",
            Opcode::Increment => "increment",
            Opcode::Decrement => "decrement",
            Opcode::EqJump => "eq_jump",
            Opcode::Newline => "newline",
            Opcode::Explode => "explode",
            Opcode::Implode => "implode",
            Opcode::Call => "call",
            Opcode::Random => "random",
            Opcode::OrdExplode => "ord_explode",
            Opcode::ChrImplode => "chr_implode",
        }
    }
}

impl fmt::Display for Opcode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
