use crate::modules::accounts::adapters::outbound::event_store_repository::EventStoreAccountRepository;
use crate::modules::accounts::application::account_service::AccountService;
use crate::modules::accounts::application::errors::ApplicationError;
use crate::modules::accounts::core::decision::DecideError;
use crate::shared::infrastructure::event_store::EventStore;
use crate::shared::infrastructure::event_store::in_memory::InMemoryEventStore;
use crate::shared::core::primitives::Money;
use rust_decimal_macros::dec;
use std::sync::Arc;

fn service(
    event_store: Arc<InMemoryEventStore>,
) -> AccountService<EventStoreAccountRepository<InMemoryEventStore>> {
    AccountService::new(Arc::new(EventStoreAccountRepository::new(event_store)))
}

#[tokio::test]
async fn overdraws_down_to_the_limit_and_no_further() {
    let event_store = Arc::new(InMemoryEventStore::new());
    let accounts = service(event_store.clone());

    let mut account = accounts.create_account().await.unwrap();
    assert_eq!(account.deposit(dec!(100)).await.unwrap(), dec!(100));
    assert_eq!(account.set_limit(dec!(-50)).await.unwrap(), dec!(-50));
    assert_eq!(account.withdraw(dec!(140)).await.unwrap(), dec!(-40));
    assert_eq!(account.withdraw(dec!(10)).await.unwrap(), dec!(-50));

    let rejected = account.withdraw(dec!(1)).await;
    assert!(matches!(
        rejected,
        Err(ApplicationError::Domain(DecideError::LimitExceeded { .. }))
    ));
    assert_eq!(account.balance(), dec!(-50));

    let rows = event_store
        .read_stream(account.id().into_uuid())
        .await
        .unwrap();
    assert_eq!(rows.len(), 5);

    let reloaded = accounts.get_account(account.id()).await.unwrap();
    assert_eq!(reloaded.state(), account.state());
}

#[tokio::test]
async fn lists_only_accounts_that_were_not_deleted() {
    let event_store = Arc::new(InMemoryEventStore::new());
    let accounts = service(event_store);

    let first = accounts.create_account().await.unwrap();
    let mut second = accounts.create_account().await.unwrap();
    let third = accounts.create_account().await.unwrap();
    second.delete().await.unwrap();

    let mut listed = accounts.list_active_account_ids().await.unwrap();
    listed.sort();
    let mut expected = vec![first.id(), third.id()];
    expected.sort();
    assert_eq!(listed, expected);

    let missing = accounts.get_account(second.id()).await;
    assert!(matches!(missing, Err(ApplicationError::AccountNotFound(id)) if id == second.id()));
}

#[tokio::test]
async fn keeps_the_state_when_a_later_handle_is_reloaded() {
    let accounts = service(Arc::new(InMemoryEventStore::new()));
    let opened = accounts.create_account().await.unwrap();

    let mut first_handle = accounts.get_account(opened.id()).await.unwrap();
    first_handle.deposit(dec!(25.25)).await.unwrap();

    let mut second_handle = accounts.get_account(opened.id()).await.unwrap();
    assert_eq!(second_handle.balance(), dec!(25.25));
    second_handle.withdraw(dec!(0.25)).await.unwrap();

    let latest = accounts.get_account(opened.id()).await.unwrap();
    assert_eq!(latest.balance(), dec!(25));
}

#[tokio::test]
async fn keeps_serving_after_a_deposit_past_the_largest_balance() {
    let accounts = service(Arc::new(InMemoryEventStore::new()));
    let mut rich = accounts.create_account().await.unwrap();
    let other = accounts.create_account().await.unwrap();

    rich.deposit(Money::MAX).await.unwrap();
    let rejected = rich.deposit(Money::MAX).await;
    assert!(matches!(
        rejected,
        Err(ApplicationError::Domain(DecideError::BalanceOutOfRange { .. }))
    ));

    let reloaded = accounts.get_account(rich.id()).await.unwrap();
    assert_eq!(reloaded.balance(), Money::MAX);

    let mut listed = accounts.list_active_account_ids().await.unwrap();
    listed.sort();
    let mut expected = vec![rich.id(), other.id()];
    expected.sort();
    assert_eq!(listed, expected);
}
