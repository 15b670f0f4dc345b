use rand::{seq::index, Rng};
use tracing::{event, Level};

use super::CardsToCome;

/// Deal the remaining community cards `trials` times and report how often at
/// least one out shows up, in percent.
///
/// The unseen pool is modelled as indices `0..pool` where the first `outs`
/// indices are the improving cards. Each trial draws `cards_to_come` distinct
/// indices without replacement. Zero trials report 0.
pub fn sample_hit_percentage<R: Rng + ?Sized>(
    outs: u8,
    cards_to_come: CardsToCome,
    trials: usize,
    rng: &mut R,
) -> f64 {
    if trials == 0 {
        return 0.0;
    }

    let pool = cards_to_come.unseen_pool();
    let dealt = cards_to_come.count();
    let outs = usize::from(outs);

    let hits = (0..trials)
        .filter(|_| index::sample(&mut *rng, pool, dealt).iter().any(|card| card < outs))
        .count();

    event!(Level::TRACE, hits, trials, pool, "Sampled run-outs");
    hits as f64 / trials as f64 * 100.0
}
