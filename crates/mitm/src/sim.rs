use core::fmt;

use crate::error::Error;
use crate::policy::{Adjust, Divide, Modulus};
use crate::{Actor, Worry};

/// Run the simulation for the given number of rounds.
///
/// Each round visits actors in slice order and drains every actor's queue
/// before moving on to the next one, so items thrown to an actor later in the
/// slice (or to the current actor itself) are inspected again in the same
/// round. Destinations are indexes into `actors`.
///
/// On error the simulation stops immediately, leaving every change made up
/// until that point in place.
pub fn run<P>(actors: &mut [Actor], rounds: usize, policy: &P) -> Result<(), Error>
where
    P: ?Sized + Adjust,
{
    if actors.is_empty() {
        return Err(Error::NoActors);
    }

    if rounds == 0 {
        return Err(Error::NoRounds);
    }

    if let Some(actor) = actors.iter().position(|a| a.divisor == 0) {
        return Err(Error::ZeroDivisor { actor });
    }

    let len = actors.len();

    for round in 0..rounds {
        for n in 0..len {
            while let Some(item) = actors[n].items.dequeue() {
                let actor = &mut actors[n];
                actor.inspected += 1;

                let Some(worry) = actor.operation.apply(item) else {
                    return Err(Error::Overflow {
                        actor: n,
                        worry: item,
                        operation: actor.operation,
                    });
                };

                let worry = policy.adjust(worry);
                let target = actor.target(worry);

                let Some(to) = actors.get_mut(target) else {
                    return Err(Error::BadTarget {
                        actor: n,
                        target,
                        len,
                    });
                };

                log::trace!("{n}: {item} -> {worry} to {target}");
                to.items.enqueue(worry);
            }
        }

        if log::log_enabled!(log::Level::Debug) && (round == 0 || (round + 1) % 1000 == 0) {
            let inspected = actors.iter().map(|a| a.inspected).collect::<Vec<_>>();
            log::debug!("round {}: inspected {inspected:?}", round + 1);
        }
    }

    Ok(())
}

/// Product of the inspection counts of the two busiest actors, saturating at
/// `u64::MAX`.
///
/// # Examples
///
/// ```
/// assert_eq!(mitm::monkey_business(&[]), 0);
/// ```
pub fn monkey_business(actors: &[Actor]) -> u64 {
    match actors {
        [] => 0,
        [actor] => actor.inspected,
        _ => {
            let mut levels = actors.iter().map(|a| a.inspected).collect::<Vec<_>>();
            levels.sort();
            levels
                .into_iter()
                .rev()
                .take(2)
                .fold(1, u64::saturating_mul)
        }
    }
}

/// One complete analysis: a simulation with a given policy followed by
/// ranking.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Analysis {
    /// Divide worry levels by `divisor` after every inspection.
    Divide { rounds: usize, divisor: Worry },
    /// Reduce worry levels by the common multiple of every divisor.
    Modulus { rounds: usize },
}

impl Analysis {
    pub const PART1: Self = Self::Divide {
        rounds: 20,
        divisor: 3,
    };

    pub const PART2: Self = Self::Modulus { rounds: 10_000 };

    /// Number of rounds to simulate.
    pub fn rounds(&self) -> usize {
        match *self {
            Analysis::Divide { rounds, .. } => rounds,
            Analysis::Modulus { rounds } => rounds,
        }
    }

    /// Simulate on `actors` and return the resulting [`monkey_business`].
    ///
    /// Since the simulation mutates the actors, each analysis should operate
    /// on its own copy.
    pub fn run(&self, actors: &mut [Actor]) -> Result<u64, Error> {
        match *self {
            Analysis::Divide { rounds, divisor } => {
                run(actors, rounds, &Divide::new(divisor)?)?;
            }
            Analysis::Modulus { rounds } => {
                let policy = Modulus::for_actors(actors)?;
                log::debug!("using {policy}");
                run(actors, rounds, &policy)?;
            }
        }

        Ok(monkey_business(actors))
    }
}

impl fmt::Display for Analysis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Analysis::Divide { rounds, divisor } => {
                write!(f, "{rounds} rounds dividing by {divisor}")
            }
            Analysis::Modulus { rounds } => {
                write!(f, "{rounds} rounds modulo common multiple")
            }
        }
    }
}
