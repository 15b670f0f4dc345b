//! Text shown next to the numbers: percentages, explanations and summaries.
//!
//! Everything here is plain `String` building so any front end (the web
//! pages, the command line) prints the same wording.

use crate::equity::{CardsToCome, EquityEstimate};
use crate::holdem::BluffRatio;
use crate::variance::BankrollSimResult;

/// A percentage with one decimal, e.g. `32.0%`.
pub fn format_percent(percent: f64) -> String {
    format!("{percent:.1}%")
}

/// The sentence under the equity gauge.
pub fn equity_explanation(
    outs: u8,
    cards_to_come: CardsToCome,
    estimate: &EquityEstimate,
) -> String {
    format!(
        "You have {} outs and {} card(s) to come. Estimated win: {}. {}",
        outs,
        cards_to_come.count(),
        format_percent(estimate.probability_percent),
        estimate.method_description
    )
}

pub fn outs_tip(outs: u8, cards_to_come: CardsToCome) -> String {
    format!(
        "With {} outs and {} card(s) left, this is your chance to hit.",
        outs,
        cards_to_come.count()
    )
}

/// The four line block under the bankroll charts.
///
/// Win rate and stdev keep their decimal point (`2.0`, `2.25`). Max profit and max loss are shown as whole big blinds, truncated toward
/// zero.
pub fn bankroll_summary(result: &BankrollSimResult) -> String {
    let request = &result.request;
    let summary = &result.summary;

    let mut output = String::new();
    output.push_str(&format!(
        "Simulations: {} | Hands: {} | Winrate: {:?} BB/100 | Stdev: {:?} BB/100\n",
        request.trial_count, request.total_hands, request.win_rate_per_100, request.std_dev_per_100
    ));
    output.push_str(&format!(
        "Profitable runs: {} | Losing runs: {}\n",
        summary.profitable_runs, summary.losing_runs
    ));
    output.push_str(&format!(
        "Max Profit: {} BB | Max Loss: {} BB\n",
        summary.max.trunc() as i64,
        summary.min.trunc() as i64
    ));
    output.push_str(&format!(
        "Mean: {:.1} BB | Median: {:.1} BB",
        summary.mean, summary.median
    ));
    output
}

/// One line describing a bet size and its balanced mix, in whole percents.
pub fn bluff_ratio_line(ratio: &BluffRatio) -> String {
    let whole = |fraction: f64| (fraction * 100.0).round() as i64;
    format!(
        "Current bet size: {}% of pot — Value bet: {}%, Bluff: {}%",
        whole(ratio.bet_pot_ratio),
        whole(ratio.value),
        whole(ratio.bluff)
    )
}
