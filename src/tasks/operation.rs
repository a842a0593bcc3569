use anyhow::Result;
use log::error;
use std::{fmt, str::FromStr};

/// Arithmetic operations measured by the big-integer benchmarks. Each row in
/// the data file carries the operation's symbol in its first column.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub enum Operation {
    Add,
    Mul,
    Sub,
}

impl Operation {
    pub const ADD_SYMBOL: &'static str = "+";
    pub const MUL_SYMBOL: &'static str = "*";
    pub const SUB_SYMBOL: &'static str = "-";

    pub fn iter_variants() -> std::slice::Iter<'static, Operation> {
        static VARIANTS: [Operation; 3] = [Operation::Add, Operation::Mul, Operation::Sub];
        VARIANTS.iter()
    }

    pub fn symbol(&self) -> &'static str {
        match self {
            Operation::Add => Self::ADD_SYMBOL,
            Operation::Mul => Self::MUL_SYMBOL,
            Operation::Sub => Self::SUB_SYMBOL,
        }
    }

    /// Name fragment used when building the output image's file name.
    pub fn file_fragment(&self) -> &'static str {
        match self {
            Operation::Add => "add",
            Operation::Mul => "mul",
            Operation::Sub => "sub",
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

impl FromStr for Operation {
    type Err = anyhow::Error;

    fn from_str(input: &str) -> Result<Operation, Self::Err> {
        match input {
            Self::ADD_SYMBOL => Ok(Operation::Add),
            Self::MUL_SYMBOL => Ok(Operation::Mul),
            Self::SUB_SYMBOL => Ok(Operation::Sub),
            _ => {
                let valid = Operation::iter_variants()
                    .map(|op| op.symbol())
                    .collect::<Vec<_>>()
                    .join(" ");
                let reason = format!("unrecognized operation symbol (symbol={input}, valid=[{valid}])");
                error!("{reason}");
                anyhow::bail!(reason);
            }
        }
    }
}
