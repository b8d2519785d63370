//! Estimate the house edge of the shipped configurations.
//!
//! Runs seeded spin batches per preset and bet size and prints a table with
//! standard errors, so paytable changes can be compared statistically.

use reelhouse_engine::slots::{SlotTable, SpinRng, SEED_LENGTH};
use reelhouse_types::slots::{SlotSession, SlotsConfig, CREDIT};

const TRIALS: u64 = 200_000;
const SEED: [u8; SEED_LENGTH] = [3u8; SEED_LENGTH];

#[derive(Default, Clone)]
struct Stats {
    trials: u64,
    total_net: f64,
    total_net_sq: f64,
    total_wagered: f64,
}

impl Stats {
    fn add(&mut self, net: i64, wagered: u64) {
        let n = net as f64;
        self.trials += 1;
        self.total_net += n;
        self.total_net_sq += n * n;
        self.total_wagered += wagered as f64;
    }

    fn mean_net(&self) -> f64 {
        if self.trials == 0 {
            0.0
        } else {
            self.total_net / self.trials as f64
        }
    }

    fn mean_wagered(&self) -> f64 {
        if self.trials == 0 {
            0.0
        } else {
            self.total_wagered / self.trials as f64
        }
    }

    fn house_edge(&self) -> f64 {
        let mw = self.mean_wagered();
        if mw == 0.0 {
            0.0
        } else {
            -self.mean_net() / mw
        }
    }

    fn stderr(&self) -> f64 {
        if self.trials <= 1 {
            return 0.0;
        }
        let mean = self.mean_net();
        let var = (self.total_net_sq / self.trials as f64) - mean * mean;
        let var = if var < 0.0 { 0.0 } else { var };
        (var / self.trials as f64).sqrt()
    }
}

fn sim_spins(table: &SlotTable, bet: u64, trials: u64) -> Stats {
    let mut stats = Stats::default();
    for spin_id in 0..trials {
        let mut session = SlotSession::with_credits(spin_id, bet);
        let mut rng = SpinRng::new(&SEED, spin_id);
        let result = table
            .spin(&mut session, bet, &mut rng)
            .expect("validated bet against funded session");
        let net = result.total_payout as i64 - bet as i64;
        stats.add(net, bet);
    }
    stats
}

fn main() {
    let presets = [
        ("classic", SlotsConfig::classic()),
        ("wildcard_any_row", SlotsConfig::wildcard_any_row()),
    ];
    let bets = [CREDIT / 10, CREDIT, 10 * CREDIT];

    println!(
        "{:<18} {:>10} {:>8} {:>12} {:>10} {:>10}",
        "config", "bet", "trials", "avg net", "edge", "stderr"
    );
    for (name, config) in presets {
        let table = SlotTable::new(config).expect("preset configs validate");
        for bet in bets {
            let stats = sim_spins(&table, bet, TRIALS);
            println!(
                "{:<18} {:>10.2} {:>8} {:>12.4} {:>9.2}% {:>10.4}",
                name,
                bet as f64 / CREDIT as f64,
                stats.trials,
                stats.mean_net() / CREDIT as f64,
                stats.house_edge() * 100.0,
                stats.stderr() / CREDIT as f64,
            );
        }
    }
}
