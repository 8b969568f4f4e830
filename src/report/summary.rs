use serde::{Deserialize, Serialize};

use crate::analytics::comparison::profit_factor;
use crate::core::{EquityTracker, StreakState};
use crate::models::{Profile, Trade, TradeResult};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OutcomeShare {
    pub result: TradeResult,
    pub count: usize,
    /// Percentage of all trades, 0-100.
    pub percent: f64,
}

/// Win / Loss / BE / Pending split, always four rows in that order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OutcomeDistribution {
    pub total: usize,
    pub outcomes: Vec<OutcomeShare>,
}

impl OutcomeDistribution {
    pub fn from_trades<'a, I>(trades: I) -> Self
    where
        I: IntoIterator<Item = &'a Trade>,
    {
        let mut counts = [0usize; 4];
        let mut total = 0;
        for t in trades {
            total += 1;
            if let Some(i) = TradeResult::ALL.iter().position(|r| *r == t.result) {
                counts[i] += 1;
            }
        }

        let denominator = total.max(1) as f64;
        let outcomes = TradeResult::ALL
            .into_iter()
            .zip(counts)
            .map(|(result, count)| OutcomeShare {
                result,
                count,
                percent: count as f64 / denominator * 100.0,
            })
            .collect();
        Self { total, outcomes }
    }

    pub fn count(&self, result: TradeResult) -> usize {
        self.outcomes
            .iter()
            .find(|o| o.result == result)
            .map_or(0, |o| o.count)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PerformanceSummary {
    pub currency_symbol: String,

    // Account
    pub initial_balance: f64,
    pub current_balance: f64,

    // P&L
    pub gross_profit: f64,
    pub gross_loss: f64,
    pub net_profit: f64,
    pub profit_factor: f64,
    pub expectancy: f64,

    // Trades
    pub total_trades: usize,
    pub win_rate: f64,
    pub avg_win: f64,
    pub avg_loss: f64,
    pub risk_reward: f64,
    pub best_trade: f64,
    pub worst_trade: f64,

    // Risk
    pub max_drawdown_pct: f64,
    pub streaks: StreakState,

    pub distribution: OutcomeDistribution,
}

impl PerformanceSummary {
    pub fn from_trades(trades: &[Trade], profile: &Profile) -> Self {
        let total_trades = trades.len();
        let distribution = OutcomeDistribution::from_trades(trades);

        let gross_profit: f64 = trades.iter().filter(|t| t.pnl > 0.0).map(|t| t.pnl).sum();
        let gross_loss: f64 = trades
            .iter()
            .filter(|t| t.pnl < 0.0)
            .map(|t| t.pnl.abs())
            .sum();
        let net_profit = gross_profit - gross_loss;

        let wins: Vec<f64> = trades.iter().filter(|t| t.is_win()).map(|t| t.pnl).collect();
        let losses: Vec<f64> = trades
            .iter()
            .filter(|t| t.is_loss())
            .map(|t| t.pnl.abs())
            .collect();

        let avg_win = mean(&wins);
        let avg_loss = mean(&losses);
        let risk_reward = if avg_loss > 0.0 { avg_win / avg_loss } else { 0.0 };

        let win_rate = if total_trades > 0 {
            wins.len() as f64 / total_trades as f64 * 100.0
        } else {
            0.0
        };
        let expectancy = if total_trades > 0 {
            net_profit / total_trades as f64
        } else {
            0.0
        };

        let best_trade = trades.iter().map(|t| t.pnl).fold(f64::NEG_INFINITY, f64::max);
        let worst_trade = trades.iter().map(|t| t.pnl).fold(f64::INFINITY, f64::min);

        PerformanceSummary {
            currency_symbol: profile.currency_symbol.clone(),
            initial_balance: profile.initial_balance,
            current_balance: profile.initial_balance + net_profit,
            gross_profit,
            gross_loss,
            net_profit,
            profit_factor: profit_factor(gross_profit, gross_loss),
            expectancy,
            total_trades,
            win_rate,
            avg_win,
            avg_loss,
            risk_reward,
            best_trade: if total_trades > 0 { best_trade } else { 0.0 },
            worst_trade: if total_trades > 0 { worst_trade } else { 0.0 },
            max_drawdown_pct: EquityTracker::new(profile.initial_balance).max_drawdown_pct(trades),
            streaks: StreakState::from_trades(trades),
            distribution,
        }
    }

    pub fn print_summary(&self) {
        let c = &self.currency_symbol;
        println!("\n{}", "=".repeat(70));
        println!("  JOURNAL REPORT");
        println!("{}", "=".repeat(70));
        println!();
        println!("  ACCOUNT");
        println!("  ───────────────────────────────────");
        println!("  Initial:     {}{:.2}", c, self.initial_balance);
        println!("  Balance:     {}{:.2}", c, self.current_balance);
        println!("  Net P&L:     {}{:+.2}", c, self.net_profit);
        println!();
        println!("  TRADES");
        println!("  ───────────────────────────────────");
        println!("  Total:       {}", self.total_trades);
        for o in &self.distribution.outcomes {
            println!(
                "  {:<8}     {} ({:.1}%)",
                o.result.to_string(),
                o.count,
                o.percent
            );
        }
        println!("  Win Rate:    {:.1}%", self.win_rate);
        println!("  Avg Win:     {}{:.2}", c, self.avg_win);
        println!("  Avg Loss:    {}{:.2}", c, self.avg_loss);
        println!("  R:R:         {:.2}", self.risk_reward);
        println!("  Best:        {}{:+.2}", c, self.best_trade);
        println!("  Worst:       {}{:+.2}", c, self.worst_trade);
        println!("  Expectancy:  {}{:+.2}", c, self.expectancy);
        println!("  Profit Factor: {:.2}", self.profit_factor);
        println!();
        println!("  RISK");
        println!("  ───────────────────────────────────");
        println!("  Max DD:      {:.1}%", self.max_drawdown_pct);
        println!(
            "  Streaks:     best {}W / worst {}L",
            self.streaks.longest_win, self.streaks.longest_loss
        );
        if let Some(current) = self.streaks.current_type {
            println!("  Current:     {} x{}", current, self.streaks.current_length);
        }
        if self.streaks.is_recovery {
            println!("  Recovery:    {}{:+.2}", c, self.streaks.recovered_amount);
        }
        println!("{}", "=".repeat(70));
    }
}

fn mean(values: &[f64]) -> f64 {
    if values.is_empty() {
        0.0
    } else {
        values.iter().sum::<f64>() / values.len() as f64
    }
}
