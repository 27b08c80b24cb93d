//! Income Statement Report
//!
//! Revenue is measured credit minus debit, expenses (including contra-expense
//! accounts) debit minus credit. The net result is revenue less expenses.

use std::io::Write;

use crate::error::BookResult;
use crate::models::{Account, AccountId, AccountType, Book, Money};

use super::trial_balance::truncate;
use super::{csv_amount, csv_field, export_error};

/// One account line of the income statement
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IncomeStatementRow {
    pub account_id: AccountId,
    pub account_name: String,
    pub amount: Money,
}

impl IncomeStatementRow {
    fn from_account(account: &Account, amount: Money) -> Self {
        Self {
            account_id: account.id.clone(),
            account_name: account.name.clone(),
            amount,
        }
    }
}

/// Income Statement Report
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IncomeStatementReport {
    pub revenue_rows: Vec<IncomeStatementRow>,
    pub expense_rows: Vec<IncomeStatementRow>,
    pub revenue: Money,
    pub expenses: Money,
    /// Revenue minus expenses; negative for a loss
    pub net_result: Money,
}

impl IncomeStatementReport {
    /// Generate the income statement for the current book
    pub fn generate(book: &Book) -> Self {
        let mut revenue_rows = Vec::new();
        let mut expense_rows = Vec::new();

        for account in book.accounts.iter() {
            match account.account_type {
                AccountType::Revenue => revenue_rows.push(IncomeStatementRow::from_account(
                    account,
                    account.credit_total() - account.debit_total(),
                )),
                AccountType::Expense | AccountType::ContraExpense => {
                    expense_rows.push(IncomeStatementRow::from_account(
                        account,
                        account.debit_total() - account.credit_total(),
                    ))
                }
                _ => {}
            }
        }

        let revenue: Money = revenue_rows.iter().map(|r| r.amount).sum();
        let expenses: Money = expense_rows.iter().map(|r| r.amount).sum();

        Self {
            revenue_rows,
            expense_rows,
            revenue,
            expenses,
            net_result: revenue - expenses,
        }
    }

    pub fn is_profit(&self) -> bool {
        !self.net_result.is_negative()
    }

    /// Format the report for terminal display
    pub fn format_terminal(&self) -> String {
        let mut output = String::new();

        output.push_str("Income Statement\n");
        output.push_str(&"=".repeat(56));
        output.push('\n');

        output.push_str("REVENUE\n");
        for row in &self.revenue_rows {
            output.push_str(&format!(
                "  {:<8} {:<28} {:>15}\n",
                row.account_id,
                truncate(&row.account_name, 28),
                row.amount
            ));
        }
        output.push_str(&format!("  {:<37} {:>15}\n", "Total Revenue", self.revenue));
        output.push('\n');

        output.push_str("EXPENSES\n");
        for row in &self.expense_rows {
            output.push_str(&format!(
                "  {:<8} {:<28} {:>15}\n",
                row.account_id,
                truncate(&row.account_name, 28),
                row.amount
            ));
        }
        output.push_str(&format!("  {:<37} {:>15}\n", "Total Expenses", self.expenses));

        output.push_str(&"-".repeat(56));
        output.push('\n');
        let label = if self.is_profit() { "Net Profit" } else { "Net Loss" };
        output.push_str(&format!("{:<39} {:>15}\n", label, self.net_result));

        output
    }

    /// Export the report to CSV format
    pub fn export_csv<W: Write>(&self, writer: &mut W) -> BookResult<()> {
        writeln!(writer, "Section,Code,Account,Amount").map_err(export_error)?;

        for (section, rows) in [("Revenue", &self.revenue_rows), ("Expense", &self.expense_rows)] {
            for row in rows {
                writeln!(
                    writer,
                    "{},{},{},{}",
                    section,
                    csv_field(row.account_id.as_str()),
                    csv_field(&row.account_name),
                    csv_amount(row.amount)
                )
                .map_err(export_error)?;
            }
        }

        writeln!(writer).map_err(export_error)?;
        writeln!(writer, "SUMMARY,,Total Revenue,{}", csv_amount(self.revenue))
            .map_err(export_error)?;
        writeln!(writer, "SUMMARY,,Total Expenses,{}", csv_amount(self.expenses))
            .map_err(export_error)?;
        writeln!(writer, "SUMMARY,,Net Result,{}", csv_amount(self.net_result))
            .map_err(export_error)?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::JournalLine;
    use crate::services::{AccountService, JournalService, NewJournalEntry};
    use chrono::NaiveDate;

    fn record(book: &mut Book, lines: Vec<JournalLine>) {
        let mut entry = NewJournalEntry::new(NaiveDate::from_ymd_opt(2024, 3, 1).unwrap());
        entry.lines = lines;
        JournalService::new(book).record(entry).unwrap();
    }

    fn cents(c: i64) -> Money {
        Money::from_cents(c)
    }

    #[test]
    fn test_empty_book() {
        let report = IncomeStatementReport::generate(&Book::with_default_chart());
        assert!(report.revenue.is_zero());
        assert!(report.expenses.is_zero());
        assert!(report.net_result.is_zero());
        assert_eq!(report.revenue_rows.len(), 1);
        assert_eq!(report.expense_rows.len(), 3);
    }

    #[test]
    fn test_profit() {
        let mut book = Book::with_default_chart();
        record(
            &mut book,
            vec![
                JournalLine::debit("1000", cents(30000)),
                JournalLine::credit("4000", cents(30000)),
            ],
        );
        record(
            &mut book,
            vec![
                JournalLine::debit("6100", cents(5000)),
                JournalLine::credit("1600", cents(5000)),
            ],
        );

        let report = IncomeStatementReport::generate(&book);
        assert_eq!(report.revenue.cents(), 30000);
        assert_eq!(report.expenses.cents(), 5000);
        assert_eq!(report.net_result.cents(), 25000);
        assert!(report.is_profit());
    }

    #[test]
    fn test_contra_expense_reduces_expenses() {
        let mut book = Book::with_default_chart();
        AccountService::new(&mut book)
            .create("Purchase Returns", AccountType::ContraExpense)
            .unwrap();
        let returns = book.accounts.find_by_name("Purchase Returns").unwrap().id.clone();

        record(
            &mut book,
            vec![
                JournalLine::debit("6100", cents(1000)),
                JournalLine::credit("1000", cents(1000)),
            ],
        );
        record(
            &mut book,
            vec![
                JournalLine::debit("1000", cents(300)),
                JournalLine::credit(returns, cents(300)),
            ],
        );

        let report = IncomeStatementReport::generate(&book);
        assert_eq!(report.expenses.cents(), 700);
        assert_eq!(report.net_result.cents(), -700);
        assert!(!report.is_profit());
        assert!(report.format_terminal().contains("Net Loss"));
    }

    #[test]
    fn test_csv_export() {
        let mut book = Book::with_default_chart();
        record(
            &mut book,
            vec![
                JournalLine::debit("1000", cents(30000)),
                JournalLine::credit("4000", cents(30000)),
            ],
        );

        let mut csv_output = Vec::new();
        IncomeStatementReport::generate(&book)
            .export_csv(&mut csv_output)
            .unwrap();

        let csv_string = String::from_utf8(csv_output).unwrap();
        assert!(csv_string.contains("Revenue,4000,Sales,300.00"));
        assert!(csv_string.contains("SUMMARY,,Net Result,300.00"));
    }
}
