//! Posting engine
//!
//! Applies a validated entry to the book. Every account reference is resolved
//! before anything is written, so a posting either lands completely (history
//! records, journal entry, inventory effects) or not at all.
//!
//! Inventory side effects are keyed on account roles:
//!
//! - a positive debit to an inventory-purchase account, in an entry that also
//!   touches an inventory-asset account, adds a cost layer to the first item;
//! - a positive credit to a sales-revenue account together with a positive
//!   debit to a cost-of-goods-sold account relieves stock, once per entry.

use chrono::NaiveDate;
use tracing::{debug, info, warn};

use crate::error::{BookError, BookResult, ErrorKind};
use crate::models::{
    AccountRole, Book, ConsumptionResult, CostLayer, JournalEntry, JournalEntryId, JournalLine,
    LayerSource, PostingRecord, Quantity,
};

use super::inventory::{consume_fifo, push_journal_layer};
use super::journal::ValidatedEntry;

/// What a successful posting did
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PostingOutcome {
    pub entry_id: JournalEntryId,
    /// History records appended, one per effective line
    pub records_posted: usize,
    pub layers_added: Vec<CostLayer>,
    /// Present when the entry relieved stock
    pub consumption: Option<ConsumptionResult>,
}

impl PostingOutcome {
    /// Quantity cost of goods sold could not be matched against
    pub fn shortfall(&self) -> Option<Quantity> {
        self.consumption
            .filter(|c| !c.fully_covered)
            .map(|c| c.shortfall)
    }

    /// Non-fatal condition raised while posting
    pub fn warning(&self) -> Option<ErrorKind> {
        self.shortfall().map(|_| ErrorKind::InventoryShortfall)
    }
}

/// Service that writes validated entries into the book
pub struct PostingService<'a> {
    book: &'a mut Book,
}

impl<'a> PostingService<'a> {
    pub fn new(book: &'a mut Book) -> Self {
        Self { book }
    }

    /// Post a validated entry
    ///
    /// Fails with `UnknownAccount` and leaves the book untouched if the chart
    /// changed since validation. An inventory shortfall is not an error; it
    /// is reported in the outcome.
    pub fn post(
        &mut self,
        entry: ValidatedEntry,
        reference: String,
    ) -> BookResult<PostingOutcome> {
        let (date, lines) = entry.into_parts();

        // Stage: resolve every account before writing anything
        let mut targets = Vec::with_capacity(lines.len());
        for line in &lines {
            let index = self
                .book
                .accounts
                .position(&line.account_id)
                .ok_or_else(|| BookError::UnknownAccount(line.account_id.to_string()))?;
            targets.push(index);
        }

        let roles: Vec<AccountRole> = lines
            .iter()
            .map(|l| {
                self.book
                    .accounts
                    .find(&l.account_id)
                    .map(|a| a.role)
                    .unwrap_or_default()
            })
            .collect();

        let entry_id = JournalEntryId::new();
        let purchases = plan_purchases(&lines, &roles, entry_id, date);
        let sale = plan_sale(&lines, &roles);

        // Commit
        for (index, line) in targets.iter().zip(&lines) {
            self.book.accounts.append_history(
                *index,
                PostingRecord {
                    transaction_id: entry_id,
                    date,
                    debit: line.debit,
                    credit: line.credit,
                    memo: line.memo.clone(),
                },
            );
        }

        for layer in &purchases {
            let item = push_journal_layer(self.book, layer.clone());
            debug!(%item, qty = %layer.qty, unit_cost = %layer.unit_cost, "added cost layer");
        }

        let consumption = sale.map(|wanted| consume_fifo(&mut self.book.inventory, wanted));
        if let Some(result) = consumption.filter(|c| !c.fully_covered) {
            warn!(
                entry = %entry_id,
                requested = %result.requested,
                shortfall = %result.shortfall,
                "inventory did not cover cost of goods sold"
            );
        }

        let records_posted = lines.len();
        self.book.journals.push(JournalEntry {
            id: entry_id,
            date,
            reference,
            lines,
            posted: true,
        });

        info!(
            entry = %entry_id,
            %date,
            lines = records_posted,
            layers = purchases.len(),
            "posted journal entry"
        );

        Ok(PostingOutcome {
            entry_id,
            records_posted,
            layers_added: purchases,
            consumption,
        })
    }
}

/// Cost layers created by inventory purchase lines
fn plan_purchases(
    lines: &[JournalLine],
    roles: &[AccountRole],
    entry_id: JournalEntryId,
    date: NaiveDate,
) -> Vec<CostLayer> {
    if !roles.contains(&AccountRole::InventoryAsset) {
        return Vec::new();
    }

    lines
        .iter()
        .zip(roles)
        .filter(|(line, role)| **role == AccountRole::InventoryPurchase && line.debit.is_positive())
        .filter_map(|(line, _)| {
            // Without an explicit quantity one unit stands for one unit of money
            let qty = line
                .quantity
                .filter(Quantity::is_positive)
                .unwrap_or_else(|| Quantity::from_amount(line.debit));
            let unit_cost = line.debit.per_unit(qty)?;
            Some(CostLayer {
                qty,
                unit_cost,
                date,
                source: LayerSource::Journal(entry_id),
            })
        })
        .collect()
}

/// Quantity a sale relieves, if the entry is a sale with cost of goods sold
///
/// Only the first positive cost-of-goods-sold debit drives consumption.
fn plan_sale(lines: &[JournalLine], roles: &[AccountRole]) -> Option<Quantity> {
    let is_sale = lines
        .iter()
        .zip(roles)
        .any(|(line, role)| *role == AccountRole::SalesRevenue && line.credit.is_positive());
    if !is_sale {
        return None;
    }

    lines
        .iter()
        .zip(roles)
        .find(|(line, role)| **role == AccountRole::Cogs && line.debit.is_positive())
        .map(|(line, _)| {
            line.quantity
                .filter(Quantity::is_positive)
                .unwrap_or_else(|| Quantity::from_amount(line.debit))
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{AccountId, Money};
    use crate::services::inventory::InventoryService;
    use crate::services::journal::validate_entry;

    fn day() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 1, 1).unwrap()
    }

    fn cents(c: i64) -> Money {
        Money::from_cents(c)
    }

    fn post(book: &mut Book, lines: Vec<JournalLine>) -> PostingOutcome {
        let validated = validate_entry(&book.accounts, lines, Some(day())).unwrap();
        PostingService::new(book)
            .post(validated, String::new())
            .unwrap()
    }

    fn balance(book: &Book, code: &str) -> Money {
        book.accounts.find(&AccountId::from(code)).unwrap().balance()
    }

    #[test]
    fn test_capital_injection() {
        let mut book = Book::with_default_chart();
        let outcome = post(
            &mut book,
            vec![
                JournalLine::debit("1000", cents(500000)),
                JournalLine::credit("3000", cents(500000)),
            ],
        );

        assert_eq!(outcome.records_posted, 2);
        assert!(outcome.consumption.is_none());
        assert!(outcome.warning().is_none());
        assert_eq!(balance(&book, "1000").cents(), 500000);
        assert_eq!(balance(&book, "3000").cents(), 500000);

        assert_eq!(book.journals.len(), 1);
        assert!(book.journals[0].posted);
        assert_eq!(book.journals[0].id, outcome.entry_id);

        let record = &book.accounts.find(&"1000".into()).unwrap().history()[0];
        assert_eq!(record.transaction_id, outcome.entry_id);
        assert_eq!(record.debit.cents(), 500000);
    }

    #[test]
    fn test_credit_normal_balance_sign() {
        let mut book = Book::with_default_chart();
        post(
            &mut book,
            vec![
                JournalLine::debit("1000", cents(10000)),
                JournalLine::credit("2000", cents(10000)),
            ],
        );
        post(
            &mut book,
            vec![
                JournalLine::debit("2000", cents(2500)),
                JournalLine::credit("1000", cents(2500)),
            ],
        );

        assert_eq!(balance(&book, "1000").cents(), 7500);
        assert_eq!(balance(&book, "2000").cents(), 7500);
    }

    #[test]
    fn test_purchase_adds_layer_without_quantity() {
        let mut book = Book::with_default_chart();
        let outcome = post(
            &mut book,
            vec![
                JournalLine::debit("5000", cents(2000)),
                JournalLine::debit("1100", cents(2000)),
                JournalLine::credit("1000", cents(4000)),
            ],
        );

        assert_eq!(outcome.layers_added.len(), 1);
        let layer = &book.inventory[0].layers()[0];
        assert_eq!(layer.qty, Quantity::from_units(20));
        assert_eq!(layer.unit_cost.cents(), 100);
        assert_eq!(layer.source, LayerSource::Journal(outcome.entry_id));
        assert_eq!(book.inventory[0].current_value().cents(), 2000);
    }

    #[test]
    fn test_purchase_with_quantity() {
        let mut book = Book::with_default_chart();
        post(
            &mut book,
            vec![
                JournalLine::debit("5000", cents(2000)).with_quantity(Quantity::from_units(10)),
                JournalLine::debit("1100", cents(2000)),
                JournalLine::credit("1000", cents(4000)),
            ],
        );

        let layer = &book.inventory[0].layers()[0];
        assert_eq!(layer.qty, Quantity::from_units(10));
        assert_eq!(layer.unit_cost.cents(), 200);
    }

    #[test]
    fn test_purchase_needs_inventory_asset_line() {
        let mut book = Book::with_default_chart();
        let outcome = post(
            &mut book,
            vec![
                JournalLine::debit("5000", cents(2000)),
                JournalLine::credit("1000", cents(2000)),
            ],
        );

        assert!(outcome.layers_added.is_empty());
        assert!(book.inventory.is_empty());
    }

    #[test]
    fn test_sale_with_cogs_fully_covered() {
        let mut book = Book::with_default_chart();
        InventoryService::new(&mut book)
            .add_layer("Widget", Quantity::from_units(10), cents(200), day())
            .unwrap();

        let outcome = post(
            &mut book,
            vec![
                JournalLine::debit("1000", cents(3000)),
                JournalLine::credit("4000", cents(3000)),
                JournalLine::debit("5100", cents(500)),
                JournalLine::credit("1100", cents(500)),
            ],
        );

        let consumption = outcome.consumption.unwrap();
        assert!(consumption.fully_covered);
        assert!(outcome.warning().is_none());
        let layer = &book.inventory[0].layers()[0];
        assert_eq!(layer.qty, Quantity::from_units(5));
        assert_eq!(layer.unit_cost.cents(), 200);
    }

    #[test]
    fn test_sale_with_cogs_shortfall() {
        let mut book = Book::with_default_chart();
        InventoryService::new(&mut book)
            .add_layer("Widget", Quantity::from_units(10), cents(200), day())
            .unwrap();

        let outcome = post(
            &mut book,
            vec![
                JournalLine::debit("1000", cents(3000)),
                JournalLine::credit("4000", cents(3000)),
                JournalLine::debit("5100", cents(1500)),
                JournalLine::credit("1100", cents(1500)),
            ],
        );

        assert_eq!(outcome.shortfall(), Some(Quantity::from_units(5)));
        assert_eq!(outcome.warning(), Some(ErrorKind::InventoryShortfall));
        assert!(book.inventory[0].layers().is_empty());
        // The entry still posts
        assert_eq!(book.journals.len(), 1);
        assert_eq!(balance(&book, "4000").cents(), 3000);
    }

    #[test]
    fn test_sale_with_cogs_quantity() {
        let mut book = Book::with_default_chart();
        InventoryService::new(&mut book)
            .add_layer("Widget", Quantity::from_units(10), cents(200), day())
            .unwrap();

        post(
            &mut book,
            vec![
                JournalLine::debit("1000", cents(3000)),
                JournalLine::credit("4000", cents(3000)),
                JournalLine::debit("5100", cents(800)).with_quantity(Quantity::from_units(4)),
                JournalLine::credit("1100", cents(800)),
            ],
        );

        assert_eq!(book.inventory[0].layers()[0].qty, Quantity::from_units(6));
    }

    #[test]
    fn test_sale_without_cogs_leaves_inventory() {
        let mut book = Book::with_default_chart();
        InventoryService::new(&mut book)
            .add_layer("Widget", Quantity::from_units(10), cents(200), day())
            .unwrap();

        let outcome = post(
            &mut book,
            vec![
                JournalLine::debit("1000", cents(3000)),
                JournalLine::credit("4000", cents(3000)),
            ],
        );

        assert!(outcome.consumption.is_none());
        assert_eq!(book.inventory[0].layers()[0].qty, Quantity::from_units(10));
    }

    #[test]
    fn test_split_sales_lines_consume_once() {
        let mut book = Book::with_default_chart();
        InventoryService::new(&mut book)
            .add_layer("Widget", Quantity::from_units(10), cents(200), day())
            .unwrap();

        post(
            &mut book,
            vec![
                JournalLine::debit("1000", cents(3000)),
                JournalLine::credit("4000", cents(1000)),
                JournalLine::credit("4000", cents(2000)),
                JournalLine::debit("5100", cents(300)),
                JournalLine::credit("1100", cents(300)),
            ],
        );

        assert_eq!(book.inventory[0].layers()[0].qty, Quantity::from_units(7));
    }

    #[test]
    fn test_only_first_cogs_line_consumes() {
        let mut book = Book::with_default_chart();
        InventoryService::new(&mut book)
            .add_layer("Widget", Quantity::from_units(10), cents(200), day())
            .unwrap();

        let outcome = post(
            &mut book,
            vec![
                JournalLine::debit("1000", cents(3000)),
                JournalLine::credit("4000", cents(3000)),
                JournalLine::debit("5100", cents(400)).with_quantity(Quantity::from_units(2)),
                JournalLine::debit("5100", cents(600)).with_quantity(Quantity::from_units(3)),
                JournalLine::credit("1100", cents(1000)),
            ],
        );

        let consumption = outcome.consumption.unwrap();
        assert_eq!(consumption.requested, Quantity::from_units(2));
        assert_eq!(book.inventory[0].layers()[0].qty, Quantity::from_units(8));
        // Both lines still post to the account
        assert_eq!(balance(&book, "5100").cents(), 1000);
    }

    #[test]
    fn test_account_removed_after_validation_is_rejected() {
        let book = Book::with_default_chart();
        let validated = validate_entry(
            &book.accounts,
            vec![
                JournalLine::debit("1000", cents(100)),
                JournalLine::credit("3000", cents(100)),
            ],
            Some(day()),
        )
        .unwrap();

        let mut other = Book::new();
        let err = PostingService::new(&mut other)
            .post(validated, String::new())
            .unwrap_err();
        assert!(matches!(err, BookError::UnknownAccount(_)));
        assert_eq!(other, Book::new());
    }
}
