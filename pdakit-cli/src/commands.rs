//! Command implementations and their printable results.

use crate::seed::parse_seed;
use anyhow::{Context, Result};
use pdakit_core::Pubkey;
use pdakit_derive::{create_program_address, create_with_seed, find_program_address, hashv, is_on_curve};
use serde::Serialize;
use std::fmt;

/// Result of one command, printable as text or JSON
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Report {
    ProgramAddress {
        address: String,
        #[serde(skip_serializing_if = "Option::is_none")]
        bump: Option<u8>,
    },
    SeededAddress {
        address: String,
    },
    OnCurve {
        address: String,
        on_curve: bool,
    },
    Hash {
        hash: String,
    },
}

impl Report {
    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string_pretty(self).context("failed to encode report")
    }
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Report::ProgramAddress { address, bump: Some(bump) } => write!(f, "{} {}", address, bump),
            Report::ProgramAddress { address, bump: None } => write!(f, "{}", address),
            Report::SeededAddress { address } => write!(f, "{}", address),
            Report::OnCurve { on_curve, .. } => write!(f, "{}", on_curve),
            Report::Hash { hash } => write!(f, "{}", hash),
        }
    }
}

pub fn parse_pubkey(text: &str) -> Result<Pubkey> {
    text.parse().with_context(|| format!("invalid address {:?}", text))
}

fn parse_seeds(args: &[String]) -> Result<Vec<Vec<u8>>> {
    args.iter().map(|arg| parse_seed(arg)).collect()
}

pub fn find(program: &str, seeds: &[String]) -> Result<Report> {
    let program_id = parse_pubkey(program)?;
    let seeds = parse_seeds(seeds)?;
    let refs: Vec<&[u8]> = seeds.iter().map(Vec::as_slice).collect();

    let (address, bump) = find_program_address(&refs, &program_id)
        .with_context(|| format!("cannot find a program address for {}", program_id))?;
    Ok(Report::ProgramAddress {
        address: address.to_string(),
        bump: Some(bump),
    })
}

pub fn create(program: &str, seeds: &[String]) -> Result<Report> {
    let program_id = parse_pubkey(program)?;
    let seeds = parse_seeds(seeds)?;
    let refs: Vec<&[u8]> = seeds.iter().map(Vec::as_slice).collect();

    let address = create_program_address(&refs, &program_id)
        .with_context(|| format!("cannot create a program address for {}", program_id))?;
    Ok(Report::ProgramAddress {
        address: address.to_string(),
        bump: None,
    })
}

pub fn with_seed(base: &str, seed: &str, owner: &str) -> Result<Report> {
    let base = parse_pubkey(base)?;
    let owner = parse_pubkey(owner)?;
    let address = create_with_seed(&base, seed, &owner).context("cannot create a seeded address")?;
    Ok(Report::SeededAddress {
        address: address.to_string(),
    })
}

pub fn on_curve(address: &str) -> Result<Report> {
    let pubkey = parse_pubkey(address)?;
    Ok(Report::OnCurve {
        address: pubkey.to_string(),
        on_curve: is_on_curve(&pubkey),
    })
}

pub fn hash(data: &[String]) -> Report {
    let parts: Vec<&[u8]> = data.iter().map(|d| d.as_bytes()).collect();
    Report::Hash {
        hash: hashv(&parts).to_string(),
    }
}
