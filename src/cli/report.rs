use crate::domain::entities::condition::Condition;
use crate::domain::values::leverage::Calculation;
use crate::domain::values::number_format::format_grouped;
use crate::domain::values::trade_inputs::TradeInputs;

pub fn checklist_report(conditions: &[Condition], satisfied: usize) -> String {
    let mut out = format!("Entry conditions: {} / {} satisfied\n", satisfied, conditions.len());
    if conditions.is_empty() {
        out.push_str("  (no conditions yet)\n");
    }
    for c in conditions {
        out.push_str(&format!("  [{}] #{} {}\n", c.status, c.id, c.description));
        if !c.details.is_empty() {
            out.push_str(&format!("        {}\n", c.details));
        }
    }
    out
}

pub fn inputs_report(inputs: &TradeInputs) -> String {
    let rows = [
        ("Total capital", inputs.total_capital.clone()),
        ("Entry capital", inputs.entry_capital.clone()),
        ("Position", inputs.position.to_string()),
        ("Entry price", inputs.entry_price.clone()),
        ("Leverage (x)", inputs.leverage.clone()),
        ("Risk percent (%)", inputs.risk_percent.clone()),
        ("Risk/reward (RR)", inputs.risk_reward_ratio.clone()),
        ("Fee rate (%)", inputs.fee_rate.clone()),
    ];
    rows.iter()
        .map(|(label, value)| format!("{label:<18} {value}\n"))
        .collect()
}

/// Prices keep up to 8 decimals, money amounts are floored to whole units.
pub fn calculation_report(calc: &Calculation) -> String {
    let r = &calc.result;
    let price = |v: f64| format_grouped(v, 2, 8);
    let qty = |v: f64| format_grouped(v, 0, 8);
    let money = |v: f64| format_grouped(v.floor(), 0, 0);

    let mut out = String::new();
    out.push_str(&format!("{:<28} {}\n", "Stop-loss price", price(r.stop_loss_price)));
    out.push_str(&format!("{:<28} {}\n", "Quantity", qty(r.quantity)));
    out.push_str(&format!("{:<28} {}\n", "Max quantity", qty(r.max_quantity)));
    out.push_str(&format!(
        "{:<28} {}\n",
        "Target price (RR)",
        price(r.risk_reward_target_price)
    ));
    out.push_str(&format!(
        "{:<28} {} ({:.2}%)\n",
        "Loss at stop-loss",
        money(r.total_loss),
        r.loss_rate
    ));
    out.push_str(&format!("{:<28} {}\n", "Liquidation price", price(r.liquidation_price)));
    out.push_str(&format!(
        "{:<28} {} ({:.2}%)\n",
        "Expected profit (net)",
        money(r.profit_total),
        r.profit_rate
    ));
    out.push_str(&format!("{:<28} {}\n", "Total fee", money(r.total_fee)));
    if let Some(warning) = calc.warning {
        out.push_str(&format!("\nWARNING: {warning}\n"));
    }
    out
}
