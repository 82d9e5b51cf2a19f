//! # Instruction Records
//!
//! An [`Instruction`] names a program, the accounts it touches, and an opaque
//! data payload. Nothing here interprets the payload; [`Instructions`] only
//! keeps records in the order they were pushed.

use crate::pubkey::Pubkey;
use serde::{Deserialize, Serialize};

/// Account metadata attached to an instruction
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccountMeta {
    pub pubkey: Pubkey,
    /// The transaction must carry this account's signature
    pub is_signer: bool,
    /// The instruction may modify the account's data or balance
    pub is_writable: bool,
}

impl AccountMeta {
    /// Writable account
    pub fn new(pubkey: Pubkey, is_signer: bool) -> Self {
        Self {
            pubkey,
            is_signer,
            is_writable: true,
        }
    }

    pub fn new_readonly(pubkey: Pubkey, is_signer: bool) -> Self {
        Self {
            pubkey,
            is_signer,
            is_writable: false,
        }
    }
}

/// A single program invocation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Instruction {
    /// Program that executes this instruction
    pub program_id: Pubkey,
    /// Accounts passed to the program, in order
    pub accounts: Vec<AccountMeta>,
    /// Opaque input for the program
    pub data: Vec<u8>,
}

impl Instruction {
    pub fn new_with_bytes(program_id: Pubkey, data: &[u8], accounts: Vec<AccountMeta>) -> Self {
        Self {
            program_id,
            accounts,
            data: data.to_vec(),
        }
    }

    /// Build an instruction whose data is the bincode encoding of `data`.
    ///
    /// # Errors
    /// Returns the bincode error if `data` cannot be serialized.
    pub fn new_with_bincode<T: Serialize + ?Sized>(
        program_id: Pubkey,
        data: &T,
        accounts: Vec<AccountMeta>,
    ) -> bincode::Result<Self> {
        Ok(Self {
            program_id,
            accounts,
            data: bincode::serialize(data)?,
        })
    }
}

/// Ordered, append-only collection of instructions
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Instructions {
    instructions: Vec<Instruction>,
}

impl Instructions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append to the end. No deduplication or validation.
    pub fn push(&mut self, instruction: Instruction) {
        self.instructions.push(instruction);
    }

    pub fn len(&self) -> usize {
        self.instructions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.instructions.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Instruction> {
        self.instructions.iter()
    }

    pub fn as_slice(&self) -> &[Instruction] {
        &self.instructions
    }

    pub fn into_vec(self) -> Vec<Instruction> {
        self.instructions
    }
}

impl IntoIterator for Instructions {
    type Item = Instruction;
    type IntoIter = std::vec::IntoIter<Instruction>;

    fn into_iter(self) -> Self::IntoIter {
        self.instructions.into_iter()
    }
}

impl<'a> IntoIterator for &'a Instructions {
    type Item = &'a Instruction;
    type IntoIter = std::slice::Iter<'a, Instruction>;

    fn into_iter(self) -> Self::IntoIter {
        self.instructions.iter()
    }
}

impl FromIterator<Instruction> for Instructions {
    fn from_iter<I: IntoIterator<Item = Instruction>>(iter: I) -> Self {
        Self {
            instructions: iter.into_iter().collect(),
        }
    }
}
