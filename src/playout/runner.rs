//! Random playouts driven through the [`Environment`] interface.
//!
//! Each game runs on its own clone of the starting environment and its own
//! RNG, so games can be spread across rayon's pool without sharing state.

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use rayon::prelude::*;

use crate::env::{Environment, Rewards};
use crate::playout::config::{ConfigError, PlayoutConfig, PlayoutOutcome, PlayoutStats};

/// Play uniformly random legal moves until the game ends or `max_plies`
/// plies have been played.
///
/// Rewards from every step are summed, so a finished game reports the
/// terminal reward pair.
pub fn random_playout<E, R>(env: &mut E, rng: &mut R, max_plies: Option<usize>) -> PlayoutOutcome
where
    E: Environment,
    R: Rng + ?Sized,
{
    let mut rewards = Rewards::NONE;
    let mut plies = 0;

    while !env.is_done() {
        if max_plies.is_some_and(|cap| plies >= cap) {
            break;
        }
        let moves = env.legal_moves();
        let Some(&mv) = moves.choose(rng) else {
            break;
        };
        rewards += env.step(mv);
        plies += 1;
    }

    PlayoutOutcome {
        rewards,
        plies,
        finished: env.is_done(),
    }
}

/// Run `config.games` random playouts from `start` in parallel.
pub fn run_playouts<E: Environment>(
    start: &E,
    config: &PlayoutConfig,
) -> Result<PlayoutStats, ConfigError> {
    config.validate()?;

    let stats = (0..config.games)
        .into_par_iter()
        .map(|game| {
            let mut rng = match config.seed {
                Some(seed) => StdRng::seed_from_u64(seed.wrapping_add(game)),
                None => StdRng::from_entropy(),
            };
            let mut env = start.clone();
            random_playout(&mut env, &mut rng, config.max_plies)
        })
        .fold(
            || PlayoutStats::new(E::NAME),
            |mut stats, outcome| {
                stats.record(&outcome);
                stats
            },
        )
        .reduce(|| PlayoutStats::new(E::NAME), PlayoutStats::merge);

    Ok(stats)
}
