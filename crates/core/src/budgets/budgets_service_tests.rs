#[cfg(test)]
mod tests {
    use rust_decimal_macros::dec;

    use crate::budgets::{BudgetPeriod, BudgetServiceTrait};
    use crate::categories::CategoryServiceTrait;
    use crate::entry_type::EntryType;
    use crate::errors::{Error, ValidationError};
    use crate::ids::{BudgetId, CategoryId};
    use crate::money::Money;
    use crate::test_support::{date, TestContext, ALICE, BOB, EUR, GROCERIES, USD};
    use crate::transactions::TransactionServiceTrait;

    fn usd(amount: rust_decimal::Decimal) -> Money {
        Money::new(amount, USD).unwrap()
    }

    #[tokio::test]
    async fn test_create_budget_derives_end_date() {
        let ctx = TestContext::new();
        let budget = ctx
            .budget_service
            .create_budget(ALICE, GROCERIES, usd(dec!(500)), BudgetPeriod::Monthly, date(2024, 1, 1))
            .await
            .unwrap();

        assert_eq!(budget.end_date, date(2024, 2, 1));
        assert_eq!(budget.user_id, ALICE);
    }

    #[tokio::test]
    async fn test_create_budget_checks_category() {
        let ctx = TestContext::new();
        let missing = ctx
            .budget_service
            .create_budget(ALICE, CategoryId::new(999), usd(dec!(1)), BudgetPeriod::Weekly, date(2024, 1, 1))
            .await;
        assert!(matches!(missing, Err(Error::NotFound(_))));

        let bobs = ctx
            .category_service
            .create_category(BOB, "Gym", None, EntryType::Expense)
            .await
            .unwrap();
        let foreign = ctx
            .budget_service
            .create_budget(ALICE, bobs.id, usd(dec!(1)), BudgetPeriod::Weekly, date(2024, 1, 1))
            .await;
        assert!(matches!(foreign, Err(Error::Forbidden(_))));
    }

    #[tokio::test]
    async fn test_update_budget_recomputes_window() {
        let ctx = TestContext::new();
        let budget = ctx
            .budget_service
            .create_budget(ALICE, GROCERIES, usd(dec!(500)), BudgetPeriod::Monthly, date(2024, 1, 1))
            .await
            .unwrap();

        let updated = ctx
            .budget_service
            .update_budget(budget.id, ALICE, usd(dec!(120)), BudgetPeriod::Weekly, date(2024, 3, 4))
            .await
            .unwrap();
        assert_eq!(updated.money.amount(), dec!(120));
        assert_eq!(updated.start_date, date(2024, 3, 4));
        assert_eq!(updated.end_date, date(2024, 3, 11));
        assert_eq!(updated.period, BudgetPeriod::Weekly);
    }

    #[tokio::test]
    async fn test_update_budget_rejects_currency_change_and_strangers() {
        let ctx = TestContext::new();
        let budget = ctx
            .budget_service
            .create_budget(ALICE, GROCERIES, usd(dec!(500)), BudgetPeriod::Monthly, date(2024, 1, 1))
            .await
            .unwrap();

        let eur = ctx
            .budget_service
            .update_budget(budget.id, ALICE, Money::new(dec!(500), EUR).unwrap(), BudgetPeriod::Monthly, date(2024, 1, 1))
            .await;
        assert!(matches!(
            eur,
            Err(Error::Validation(ValidationError::CurrencyMismatch { .. }))
        ));

        let foreign = ctx
            .budget_service
            .update_budget(budget.id, BOB, usd(dec!(1)), BudgetPeriod::Monthly, date(2024, 1, 1))
            .await;
        assert!(matches!(foreign, Err(Error::Forbidden(_))));

        let missing = ctx
            .budget_service
            .update_budget(BudgetId::new(999), ALICE, usd(dec!(1)), BudgetPeriod::Monthly, date(2024, 1, 1))
            .await;
        assert!(matches!(missing, Err(Error::NotFound(_))));
    }

    #[tokio::test]
    async fn test_delete_budget() {
        let ctx = TestContext::new();
        let budget = ctx
            .budget_service
            .create_budget(ALICE, GROCERIES, usd(dec!(500)), BudgetPeriod::Monthly, date(2024, 1, 1))
            .await
            .unwrap();

        let foreign = ctx.budget_service.delete_budget(budget.id, BOB).await;
        assert!(matches!(foreign, Err(Error::Forbidden(_))));

        ctx.budget_service.delete_budget(budget.id, ALICE).await.unwrap();
        assert!(ctx.budget_service.get_budgets_by_user(ALICE).unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_active_budgets() {
        let ctx = TestContext::new();
        ctx.budget_service
            .create_budget(ALICE, GROCERIES, usd(dec!(100)), BudgetPeriod::Weekly, date(2024, 1, 1))
            .await
            .unwrap();
        ctx.budget_service
            .create_budget(ALICE, GROCERIES, usd(dec!(100)), BudgetPeriod::Monthly, date(2024, 1, 1))
            .await
            .unwrap();

        let active = ctx
            .budget_service
            .get_active_budgets_by_user(ALICE, date(2024, 1, 10))
            .unwrap();
        assert_eq!(active.len(), 1);
        assert_eq!(active[0].period, BudgetPeriod::Monthly);
        assert!(ctx
            .budget_service
            .get_active_budgets_by_user(BOB, date(2024, 1, 10))
            .unwrap()
            .is_empty());
    }

    #[tokio::test]
    async fn test_budget_report_uses_owner_transactions_in_window() {
        let ctx = TestContext::new();
        let budget = ctx
            .budget_service
            .create_budget(ALICE, GROCERIES, usd(dec!(500)), BudgetPeriod::Monthly, date(2024, 1, 1))
            .await
            .unwrap();

        for (user, amount, day) in [
            (ALICE, dec!(100), date(2024, 1, 10)),
            (ALICE, dec!(250), date(2024, 1, 25)),
            (ALICE, dec!(75), date(2024, 2, 15)),
            (BOB, dec!(300), date(2024, 1, 12)),
        ] {
            ctx.transaction_service
                .create_transaction(user, GROCERIES, USD, usd(amount), "", day, EntryType::Expense)
                .await
                .unwrap();
        }

        let report = ctx.budget_service.get_budget_report(&budget).unwrap();
        assert_eq!(report.total_spent, dec!(350));
        assert_eq!(report.remaining, dec!(150));
        assert_eq!(report.percentage_used, dec!(70));
        assert!(report.is_on_track);
    }
}
