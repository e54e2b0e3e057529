//! Simulation of actors passing items between each other.
//!
//! Every actor holds a queue of worry levels. On its turn an actor inspects
//! each item by applying its [`Operation`], adjusts the result with a
//! worry-reduction policy ([`Divide`] or [`Modulus`]) and throws the item to
//! one of two other actors depending on whether it is divisible by the actor's
//! divisor.
//!
//! ```
//! use mitm::Analysis;
//!
//! let actors = mitm::parse(
//!     "Monkey 0:
//!       Starting items: 79, 98
//!       Operation: new = old * 19
//!       Test: divisible by 23
//!         If true: throw to monkey 1
//!         If false: throw to monkey 1
//!
//!     Monkey 1:
//!       Starting items: 54
//!       Operation: new = old + 6
//!       Test: divisible by 19
//!         If true: throw to monkey 0
//!         If false: throw to monkey 0
//!     ",
//! )?;
//!
//! let mut part1 = actors.clone();
//! mitm::run(&mut part1, 1, &mitm::Divide::new(3)?)?;
//! assert_eq!(part1[0].inspected, 2);
//! assert_eq!(part1[1].inspected, 3);
//!
//! let mut part2 = actors.clone();
//! assert_eq!(Analysis::Modulus { rounds: 1 }.run(&mut part2)?, 6);
//! # Ok::<_, mitm::Error>(())
//! ```

mod actor;
mod error;
mod parse;
mod policy;
mod queue;
mod sim;


pub use self::actor::{Actor, Operand, Operation, Operator};
pub use self::error::{Error, ParseError, ParseErrorKind};
pub use self::parse::{from_reader, parse};
pub use self::policy::{common_multiple, Adjust, Divide, Modulus};
pub use self::queue::Queue;
pub use self::sim::{monkey_business, run, Analysis};

/// Integer type used for worry levels.
///
/// Under the [`Modulus`] policy every stored worry level is smaller than the
/// modulus `m`, so the largest intermediate value is `m * m` when an actor
/// squares an item. This comfortably fits for common multiples below
/// `3 * 10^9`; anything larger is reported as [`Error::Overflow`].
pub type Worry = i64;
