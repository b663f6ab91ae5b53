use budgety::{
    init,
    ledger::{EntryKind, Ledger},
};

#[test]
fn ledger_smoke() {
    init();

    let mut ledger = Ledger::new();
    let salary = ledger.add_item(EntryKind::Income, "Salary", 2500.0);
    ledger.add_item(EntryKind::Expense, "Rent", 1000.0);
    ledger.add_item(EntryKind::Expense, "Groceries", 250.0);
    ledger.recompute_all();

    let summary = ledger.budget();
    assert_eq!(summary.budget, 1250.0);
    assert_eq!(summary.percentage, 50);
    assert_eq!(ledger.percentages(), vec![40, 10]);

    ledger.delete_item(EntryKind::Income, salary.id);
    ledger.recompute_all();
    assert_eq!(ledger.budget().percentage, -1);
    assert_eq!(ledger.percentages(), vec![-1, -1]);
}
