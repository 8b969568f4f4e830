#![allow(dead_code)]

use journal_analytics::models::{load_trades_from_str, Trade};

/// A small journal export spanning two months and several symbols, in the
/// camelCase shape the journal writes.
pub const EXPORT: &str = r#"[
  {"id":"t1","pair":"EUR/USD","date":"2024-04-29","time":"08:30","direction":"long",
   "pnl":120.0,"result":"Win","lots":1.0,"mindset":"Confident",
   "planAdherence":"Followed Exactly","tags":["london-breakout"]},
  {"id":"t2","pair":"GBPJPY","date":"2024-04-30","time":"13:45","direction":"Short",
   "pnl":-60.0,"result":"Loss","lots":0.5,"mindset":"FOMO",
   "planAdherence":"Major Deviation","tags":["ny-reversal"]},
  {"id":"t3","pair":"XAUUSD","date":"2024-05-02","time":"09:10","direction":"buy",
   "pnl":-40.0,"result":"Loss","lots":0.2,"tags":["london-breakout","gold"]},
  {"id":"t4","pair":"US30","date":"2024-05-02","time":"14:00","direction":"sell",
   "pnl":0.0,"result":"BE","lots":1.0},
  {"id":"t5","pair":"eurusd","date":"2024-05-03","time":"10:00","direction":"short",
   "pnl":90.0,"result":"Win","lots":1.0,"mindset":"something odd",
   "planAdherence":"Minor Deviation","tags":["london-breakout"]},
  {"id":"t6","pair":"BTC-USDT","date":"2024-05-06","direction":"long",
   "pnl":35.0,"result":"Win","lots":0.1}
]"#;

pub fn load_export() -> Vec<Trade> {
    load_trades_from_str(EXPORT).unwrap()
}

pub fn approx(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-9
}
