//! Human-readable rendering of decoded accounts.

use tabled::builder::Builder;
use tabled::settings::Style;

use crate::account::{COption, TokenAccount};
use crate::address::Address;

/// Render a decoded account as a two-column field/value table.
///
/// Display-only: absent `COption` fields render as `none` even though their
/// raw bytes were decoded. Intended for logs and test output.
pub fn render_token_account(account: &TokenAccount) -> String {
    let rows = [
        ("mint", account.mint.to_string()),
        ("owner", account.owner.to_string()),
        ("amount", account.amount.to_string()),
        ("delegate", render_coption(&account.delegate)),
        ("state", account.state.to_string()),
        ("is_native", render_native(&account.is_native)),
        ("delegated_amount", account.delegated_amount.to_string()),
        ("close_authority", render_coption(&account.close_authority)),
    ];

    let mut builder = Builder::default();
    builder.push_record(["Field".to_string(), "Value".to_string()]);
    for (field, value) in rows {
        builder.push_record([field.to_string(), value]);
    }

    let mut table = builder.build();
    table.with(Style::sharp());
    table.to_string()
}

fn render_coption(field: &COption<Address>) -> String {
    match field.as_option() {
        Some(address) => address.to_string(),
        None => "none".to_string(),
    }
}

fn render_native(field: &COption<u64>) -> String {
    match field.as_option() {
        Some(reserve) => reserve.to_string(),
        None => "none".to_string(),
    }
}
