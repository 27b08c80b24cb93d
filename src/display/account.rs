//! Account display formatting
//!
//! Formats accounts for terminal output in table and detail views.

use crate::models::Account;

/// Format the chart of accounts with balances as a table
pub fn format_account_list(accounts: &[&Account]) -> String {
    if accounts.is_empty() {
        return "No accounts found.".to_string();
    }

    let name_width = accounts
        .iter()
        .map(|a| a.name.len())
        .max()
        .unwrap_or(4)
        .max(4);

    let type_width = accounts
        .iter()
        .map(|a| a.account_type.to_string().len())
        .max()
        .unwrap_or(4)
        .max(4);

    let mut output = String::new();
    output.push_str(&format!(
        "{:<6}  {:<name_width$}  {:<type_width$}  {:<6}  {:>14}  {}\n",
        "Code",
        "Name",
        "Type",
        "Normal",
        "Balance",
        "Role",
        name_width = name_width,
        type_width = type_width,
    ));

    output.push_str(&format!(
        "{:-<6}  {:-<name_width$}  {:-<type_width$}  {:-<6}  {:->14}  {:-<10}\n",
        "",
        "",
        "",
        "",
        "",
        "",
        name_width = name_width,
        type_width = type_width,
    ));

    for account in accounts {
        output.push_str(&format!(
            "{:<6}  {:<name_width$}  {:<type_width$}  {:<6}  {:>14}  {}\n",
            account.id,
            account.name,
            account.account_type,
            account.normal_side.to_string(),
            account.balance(),
            account.role,
            name_width = name_width,
            type_width = type_width,
        ));
    }

    output
}

/// Format a single account's details
pub fn format_account_details(account: &Account) -> String {
    let mut output = String::new();

    output.push_str(&format!("Account: {}\n", account.name));
    output.push_str(&format!("  Code:           {}\n", account.id));
    output.push_str(&format!("  Type:           {}\n", account.account_type));
    output.push_str(&format!("  Normal Side:    {}\n", account.normal_side));
    output.push_str(&format!("  Role:           {}\n", account.role));
    output.push('\n');
    output.push_str(&format!("  Total Debits:   {}\n", account.debit_total()));
    output.push_str(&format!("  Total Credits:  {}\n", account.credit_total()));
    output.push_str(&format!("  Balance:        {}\n", account.balance()));
    output.push_str(&format!("  Postings:       {}\n", account.history().len()));

    output
}
