use core::fmt;

use lib::prelude::*;

use crate::{Queue, Worry};

/// A single actor participating in the simulation.
///
/// The [`Display`] implementation writes the actor back out in the block
/// format accepted by [`parse`], using the current contents of its queue as
/// the starting items.
///
/// [`Display`]: fmt::Display
/// [`parse`]: crate::parse
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Actor {
    /// Declared identity of the actor.
    pub id: usize,
    /// Worry levels of the items currently held.
    pub items: Queue<Worry>,
    /// Transform applied to each inspected item.
    pub operation: Operation,
    /// Divisor used to pick where an item is thrown.
    pub divisor: Worry,
    /// Index of the actor to throw to if the test passes.
    pub if_true: usize,
    /// Index of the actor to throw to if the test fails.
    pub if_false: usize,
    /// Number of items inspected so far.
    pub inspected: u64,
}

impl Actor {
    /// Index of the actor an item with the given worry level is thrown to.
    ///
    /// # Panics
    ///
    /// Panics if the divisor of the actor is zero.
    #[inline]
    pub fn target(&self, worry: Worry) -> usize {
        if worry.wrapping_rem(self.divisor) == 0 {
            self.if_true
        } else {
            self.if_false
        }
    }
}

impl fmt::Display for Actor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Monkey {}:", self.id)?;
        write!(f, "  Starting items:")?;

        let mut it = self.items.iter();

        if let Some(first) = it.next() {
            write!(f, " {first}")?;

            for item in it {
                write!(f, ", {item}")?;
            }
        }

        writeln!(f)?;
        writeln!(f, "  Operation: new = {}", self.operation)?;
        writeln!(f, "  Test: divisible by {}", self.divisor)?;
        writeln!(f, "    If true: throw to monkey {}", self.if_true)?;
        writeln!(f, "    If false: throw to monkey {}", self.if_false)
    }
}

/// The transform `old <operator> <operand>` an actor applies to items.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Operation {
    pub operator: Operator,
    pub operand: Operand,
}

impl Operation {
    #[inline]
    pub const fn new(operator: Operator, operand: Operand) -> Self {
        Self { operator, operand }
    }

    /// Apply the operation to the given worry level, returning `None` on
    /// overflow.
    ///
    /// # Examples
    ///
    /// ```
    /// use mitm::{Operand, Operation, Operator};
    ///
    /// let op = Operation::new(Operator::Mul, Operand::Old);
    /// assert_eq!(op.apply(79), Some(6241));
    /// assert_eq!(op.apply(i64::MAX), None);
    ///
    /// let op = Operation::new(Operator::Add, Operand::Value(6));
    /// assert_eq!(op.apply(54), Some(60));
    /// ```
    #[inline]
    pub fn apply(&self, old: Worry) -> Option<Worry> {
        let operand = match self.operand {
            Operand::Old => old,
            Operand::Value(n) => n,
        };

        match self.operator {
            Operator::Add => old.checked_add(operand),
            Operator::Mul => old.checked_mul(operand),
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "old {} {}", self.operator, self.operand)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operator {
    Add,
    Mul,
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Operator::Add => write!(f, "+"),
            Operator::Mul => write!(f, "*"),
        }
    }
}

lib::from_input! {
    |W(v): W<&str>| -> Operator {
        Ok(match v {
            "+" => Operator::Add,
            "*" => Operator::Mul,
            other => bail!("no worry calculation defined for operator `{other}`"),
        })
    }
}

/// Right-hand side of an [`Operation`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operand {
    /// The current worry level of the item.
    Old,
    /// A constant.
    Value(Worry),
}

impl fmt::Display for Operand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Operand::Old => write!(f, "old"),
            Operand::Value(n) => n.fmt(f),
        }
    }
}

lib::from_input! {
    |W(v): W<&str>| -> Operand {
        Ok(match v {
            "old" => Operand::Old,
            value => Operand::Value(value.parse().with_context(|| anyhow!("bad operand `{value}`"))?),
        })
    }
}
