//! Portfolio total and holdings list

use super::{Markup, Region, Rendered, escape};
use crate::format::{PLACEHOLDER, format_currency8, format_krw, format_number};
use crate::types::PortfolioSnapshot;

/// Total investment plus a two-row holdings list (KRW cash, asset balance)
pub fn render_portfolio(portfolio: Option<&PortfolioSnapshot>) -> Rendered {
    let Some(portfolio) = portfolio else {
        return vec![
            (Region::TotalInvestment, Markup::text(PLACEHOLDER)),
            (
                Region::PortfolioList,
                Markup::raw(format!(r#"<li class="empty">{PLACEHOLDER}</li>"#)),
            ),
        ];
    };

    let total = portfolio
        .total_investment
        .filter(|v| v.is_finite())
        .map_or_else(|| PLACEHOLDER.to_string(), format_number);

    let list = format!(
        "{}{}",
        holding_row("KRW", &format_krw(portfolio.cash_balance)),
        holding_row(
            &portfolio.currency,
            &format_currency8(portfolio.balance, &portfolio.currency)
        ),
    );

    vec![
        (Region::TotalInvestment, Markup::text(&total)),
        (Region::PortfolioList, Markup::raw(list)),
    ]
}

fn holding_row(label: &str, amount: &str) -> String {
    format!(
        r#"<li><span class="asset">{}</span><span class="amount">{}</span></li>"#,
        escape(label),
        escape(amount)
    )
}
