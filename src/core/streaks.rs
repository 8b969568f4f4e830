use serde::{Deserialize, Serialize};

use crate::models::{sorted_chronologically, Trade, TradeResult};

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct StreakState {
    pub longest_win: usize,
    pub longest_loss: usize,
    /// Result of the most recent trade, None when there are no trades.
    pub current_type: Option<TradeResult>,
    pub current_length: usize,
    /// Most recent trade is a Win and the one before it a Loss.
    pub is_recovery: bool,
    pub recovered_amount: f64,
}

impl StreakState {
    pub fn from_trades<'a, I>(trades: I) -> Self
    where
        I: IntoIterator<Item = &'a Trade>,
    {
        let sorted = sorted_chronologically(trades);
        let mut state = StreakState::default();

        let mut temp_win = 0;
        let mut temp_loss = 0;
        for t in &sorted {
            match t.result {
                TradeResult::Win => {
                    temp_win += 1;
                    temp_loss = 0;
                    state.longest_win = state.longest_win.max(temp_win);
                }
                TradeResult::Loss => {
                    temp_loss += 1;
                    temp_win = 0;
                    state.longest_loss = state.longest_loss.max(temp_loss);
                }
                // BE and Pending break both runs
                TradeResult::Breakeven | TradeResult::Pending => {
                    temp_win = 0;
                    temp_loss = 0;
                }
            }
        }

        let Some(last) = sorted.last() else {
            return state;
        };
        state.current_type = Some(last.result);
        state.current_length = sorted
            .iter()
            .rev()
            .take_while(|t| t.result == last.result)
            .count();

        // One trade of lookback only; a longer losing run is not required.
        let previous = sorted.len().checked_sub(2).map(|i| sorted[i]);
        if last.result == TradeResult::Win
            && previous.is_some_and(|p| p.result == TradeResult::Loss)
        {
            state.is_recovery = true;
            state.recovered_amount = last.pnl;
        }

        state
    }
}
