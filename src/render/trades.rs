//! Trade tables and pager label
//!
//! Both tables share one row layout: timestamp, action, amount with
//! currency (8 decimals), reason. The currency always comes from the
//! record; amounts are never used to guess it.

use super::{Markup, Region, Rendered, escape, multiline};
use crate::format::{format_currency8, format_reason, format_timestamp};
use crate::pagination::NavState;
use crate::types::{PageResult, TradeAction, TradeRecord};

const COLUMNS: usize = 4;

/// Latest non-hold trades, input order kept, at most `limit` rows
pub fn render_recent_trades(trades: &[TradeRecord], limit: usize) -> Rendered {
    let rows: Vec<String> = trades
        .iter()
        .filter(|t| t.action != TradeAction::Hold)
        .take(limit)
        .map(trade_row)
        .collect();

    let body = if rows.is_empty() {
        empty_row("No recent trades")
    } else {
        rows.concat()
    };
    vec![(Region::RecentTradesTable, Markup::raw(body))]
}

/// Every record of the page, holds included; one placeholder row when empty
pub fn render_trade_log(page: &PageResult<TradeRecord>) -> Rendered {
    let body = if page.items.is_empty() {
        empty_row("No records")
    } else {
        page.items.iter().map(trade_row).collect()
    };
    vec![(Region::AllTradesTable, Markup::raw(body))]
}

/// "Page n" label under the trade log
pub fn render_pager_label(nav: &NavState) -> Rendered {
    vec![(
        Region::CurrentPage,
        Markup::text(&format!("Page {}", nav.current_page)),
    )]
}

fn trade_row(trade: &TradeRecord) -> String {
    format!(
        concat!(
            "<tr>",
            "<td>{}</td>",
            r#"<td class="action-{}">{}</td>"#,
            "<td>{}</td>",
            r#"<td class="reason-cell">{}</td>"#,
            "</tr>"
        ),
        escape(&format_timestamp(&trade.timestamp)),
        trade.action,
        trade.action,
        escape(&format_currency8(trade.amount, &trade.currency)),
        multiline(&format_reason(trade.reason.as_deref())),
    )
}

fn empty_row(message: &str) -> String {
    format!(
        r#"<tr><td colspan="{COLUMNS}" class="empty">{}</td></tr>"#,
        escape(message)
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn trade(action: TradeAction, amount: f64) -> TradeRecord {
        TradeRecord {
            timestamp: "2024-12-01T09:00:00+09:00".into(),
            action,
            amount,
            currency: "BTC".into(),
            reason: None,
        }
    }

    fn actions_in(markup: &Markup) -> Vec<&str> {
        markup
            .as_str()
            .match_indices(r#"class="action-"#)
            .map(|(i, pat)| {
                let rest = &markup.as_str()[i + pat.len()..];
                &rest[..rest.find('"').unwrap()]
            })
            .collect()
    }

    #[test]
    fn test_recent_trades_skip_hold_and_keep_order() {
        let trades = vec![
            trade(TradeAction::Hold, 0.0),
            trade(TradeAction::Buy, 0.1),
            trade(TradeAction::Sell, 0.2),
            trade(TradeAction::Hold, 0.0),
            trade(TradeAction::Buy, 0.3),
        ];
        let rendered = render_recent_trades(&trades, 4);

        assert_eq!(rendered[0].0, Region::RecentTradesTable);
        assert_eq!(actions_in(&rendered[0].1), vec!["buy", "sell", "buy"]);
        // Input untouched
        assert_eq!(trades.len(), 5);
    }

    #[test]
    fn test_recent_trades_truncated_after_filter() {
        let trades: Vec<_> = (0..6)
            .flat_map(|i| {
                [
                    trade(TradeAction::Hold, 0.0),
                    trade(TradeAction::Sell, f64::from(i)),
                ]
            })
            .collect();
        let rendered = render_recent_trades(&trades, 4);
        assert_eq!(rendered[0].1.as_str().matches("<tr>").count(), 4);
        assert!(rendered[0].1.as_str().contains("0.00000000 BTC"));
        assert!(!rendered[0].1.as_str().contains("4.00000000 BTC"));
    }

    #[test]
    fn test_recent_trades_only_holds() {
        let rendered = render_recent_trades(&[trade(TradeAction::Hold, 0.0)], 4);
        assert!(rendered[0].1.as_str().contains("No recent trades"));
    }

    #[test]
    fn test_trade_log_includes_hold() {
        let page = PageResult {
            items: vec![
                trade(TradeAction::Hold, 0.0),
                trade(TradeAction::Buy, 0.5),
            ],
            page: 1,
            total_records: 2,
        };
        let rendered = render_trade_log(&page);
        assert_eq!(rendered[0].0, Region::AllTradesTable);
        assert_eq!(actions_in(&rendered[0].1), vec!["hold", "buy"]);
    }

    #[test]
    fn test_empty_trade_log_single_row() {
        let page: PageResult<TradeRecord> = PageResult {
            items: vec![],
            page: 4,
            total_records: 12,
        };
        let rendered = render_trade_log(&page);
        let body = rendered[0].1.as_str();
        assert_eq!(body.matches("<tr>").count(), 1);
        assert!(body.contains("No records"));
        assert!(body.contains(r#"colspan="4""#));
    }

    #[test]
    fn test_row_cells() {
        let record = TradeRecord {
            timestamp: "2024-12-01 09:15:00".into(),
            action: TradeAction::Sell,
            amount: 50_000.0,
            currency: "KRW".into(),
            reason: Some("Take profit. <RSI> high.".into()),
        };
        let row = trade_row(&record);
        assert!(row.contains("<td>2024-12-01 09:15:00</td>"));
        assert!(row.contains("50,000.00000000 KRW"));
        assert!(row.contains("Take profit.<br>&lt;RSI&gt; high."));
    }

    #[test]
    fn test_missing_reason() {
        let row = trade_row(&trade(TradeAction::Buy, 0.001));
        assert!(row.contains(r#"<td class="reason-cell">N/A</td>"#));
    }

    #[test]
    fn test_pager_label() {
        let nav = NavState {
            current_page: 3,
            prev_disabled: false,
            next_disabled: true,
        };
        assert_eq!(render_pager_label(&nav)[0].1.as_str(), "Page 3");
    }
}
