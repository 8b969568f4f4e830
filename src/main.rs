use anyhow::{Context, Result};
use chrono::{Datelike, Utc};
use tracing::info;
use tracing_subscriber::{fmt, EnvFilter};

use journal_analytics::analytics::{
    breakdown, cluster_by_tag, compare, month_stats, monthly_performance, CohortSpec, DateRange,
    Dimension,
};
use journal_analytics::analytics::performance::strongest_buckets;
use journal_analytics::config::Config;
use journal_analytics::core::CurrencyStrength;
use journal_analytics::models::load_trades;
use journal_analytics::report::PerformanceSummary;

fn main() -> Result<()> {
    let cfg = Config::from_env();

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&cfg.log_level));

    fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_timer(fmt::time::UtcTime::rfc_3339())
        .init();

    // First CLI arg overrides TRADES_FILE
    let path = std::env::args().nth(1).unwrap_or_else(|| cfg.trades_file.clone());
    let trades = load_trades(&path).with_context(|| format!("loading {}", path))?;
    info!("Loaded {} trades from {}", trades.len(), path);

    let profile = cfg.profile();
    let c = &profile.currency_symbol;
    let today = Utc::now().date_naive();

    PerformanceSummary::from_trades(&trades, &profile).print_summary();

    for dimension in Dimension::ALL {
        let buckets = breakdown(&trades, dimension);
        let active: Vec<_> = buckets.iter().filter(|b| b.has_trades()).collect();
        if active.is_empty() {
            continue;
        }
        println!();
        println!("  BY {}", dimension.as_str().to_uppercase());
        println!("  ───────────────────────────────────");
        for b in active {
            println!(
                "  {:>16}: {} trades | WR {:.0}% | Net {}{:+.2}",
                b.key,
                b.count,
                b.win_rate * 100.0,
                c,
                b.net
            );
        }
        if let Some(best) = strongest_buckets(&buckets, 3).first() {
            println!("  Strongest:   {} ({}{:+.2})", best.key, c, best.net);
        }
    }

    let strength = CurrencyStrength::from_trades(&trades);
    if !strength.is_empty() {
        println!();
        println!("  CURRENCY STRENGTH");
        println!("  ───────────────────────────────────");
        for s in strength.top(cfg.strength_top_n) {
            println!(
                "  {:>6}: {:>5.1} / 10 (raw {}{:+.2})",
                s.currency, s.normalized_score, c, s.raw_score
            );
        }
    }

    let clusters = cluster_by_tag(&trades);
    if !clusters.is_empty() {
        println!();
        println!("  BY STRATEGY TAG");
        println!("  ───────────────────────────────────");
        for cl in &clusters {
            println!(
                "  {:>16}: {} trades | WR {:.0}% | PnL {}{:+.2} | Avg {}{:+.2}",
                cl.tag, cl.count, cl.win_rate, c, cl.pnl, c, cl.avg_pnl
            );
        }
    }

    println!();
    println!("  {} BY MONTH", today.year());
    println!("  ───────────────────────────────────");
    for m in monthly_performance(&trades, today.year()) {
        if m.aggregate.has_trades() {
            println!(
                "  {}: {} trades | Net {}{:+.2} | Max DD {}{:.2}",
                m.label, m.aggregate.count, c, m.aggregate.net, c, m.max_drawdown
            );
        }
    }

    let month = month_stats(&trades, today.year(), today.month());
    println!(
        "  This month:  {} trades | {} green days / {} red days | {}{:+.2}",
        month.total_count, month.win_days, month.loss_days, c, month.total_pnl
    );

    let cmp = compare(
        &trades,
        &CohortSpec::new(None, DateRange::LastMonth),
        &CohortSpec::new(None, DateRange::ThisMonth),
        today,
    );
    println!(
        "  vs last month: Net {}{:+.2} | WR {:+.1}pp | Trades {:+}",
        c, cmp.delta.net_profit, cmp.delta.win_rate, cmp.delta.total_trades
    );
    if let Some(trend) = &cmp.second.trend {
        println!(
            "  Trend:       {:?} {:.1}%",
            trend.direction, trend.percent_magnitude
        );
    }
    println!("{}", "=".repeat(70));

    Ok(())
}
