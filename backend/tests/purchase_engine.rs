//! Port-level coverage for the transactional purchase engine: concurrency,
//! rollback, and failure paths against a real SQLite database.

use diesel::sql_query;
use diesel::RunQueryDsl;
use futures::future::join_all;

use backend::domain::ports::{ListingStore, PurchaseEngine, PurchaseError, UserStore};
use backend::domain::{Credentials, ListingDraft, ListingId, UserId};
use backend::outbound::persistence::{
    DbPool, DieselListingStore, DieselPurchaseEngine, DieselUserStore,
};

mod support;

async fn seed_user(pool: &DbPool, email: &str) -> UserId {
    let store = DieselUserStore::new(pool.clone());
    let credentials = Credentials::try_from_parts(email, "pw").expect("valid credentials");
    store.register(&credentials).await.expect("user registers")
}

async fn seed_listing(pool: &DbPool, owner: UserId, title: &str, price: f64) -> ListingId {
    let store = DieselListingStore::new(pool.clone());
    let draft =
        ListingDraft::try_from_parts(title, "", "", "", "misc", price).expect("valid draft");
    store.create(owner, &draft).await.expect("listing inserts")
}

#[tokio::test]
async fn purchase_records_seller_and_price_from_the_listing() {
    let db = support::test_db();
    let seller = seed_user(&db.pool, "seller@x.com").await;
    let buyer = seed_user(&db.pool, "buyer@x.com").await;
    let item = seed_listing(&db.pool, seller, "Desk", 42.5).await;

    let engine = DieselPurchaseEngine::new(db.pool.clone());
    let receipt = engine.purchase(buyer, item).await.expect("purchase succeeds");

    assert_eq!(receipt.item_id, item);
    assert_eq!(receipt.seller_id, seller);
    assert_eq!(receipt.price, 42.5);
    assert_eq!(receipt.confirmation_code.len(), 16);
    assert!(receipt
        .confirmation_code
        .chars()
        .all(|c| c.is_ascii_hexdigit()));

    let history = engine
        .purchases_by_buyer(buyer)
        .await
        .expect("history loads");
    assert_eq!(history.len(), 1);
    assert_eq!(history[0].id, receipt.transaction_id);
    assert_eq!(history[0].buyer_id, buyer);
    assert_eq!(history[0].confirmation_code, receipt.confirmation_code);

    let listings = DieselListingStore::new(db.pool.clone());
    assert_eq!(
        listings.availability(item).await.expect("lookup"),
        Some(false)
    );
}

#[tokio::test]
async fn missing_item_is_not_found_and_leaves_no_trace() {
    let db = support::test_db();
    let buyer = seed_user(&db.pool, "buyer@x.com").await;

    let engine = DieselPurchaseEngine::new(db.pool.clone());
    let outcome = engine.purchase(buyer, ListingId::new(999)).await;
    assert!(matches!(outcome, Err(PurchaseError::ItemNotFound)));

    let history = engine
        .purchases_by_buyer(buyer)
        .await
        .expect("history loads");
    assert!(history.is_empty());
}

#[tokio::test]
async fn second_purchase_of_the_same_item_is_rejected() {
    let db = support::test_db();
    let seller = seed_user(&db.pool, "seller@x.com").await;
    let first = seed_user(&db.pool, "first@x.com").await;
    let second = seed_user(&db.pool, "second@x.com").await;
    let item = seed_listing(&db.pool, seller, "Desk", 10.0).await;

    let engine = DieselPurchaseEngine::new(db.pool.clone());
    engine.purchase(first, item).await.expect("first sale");

    let outcome = engine.purchase(second, item).await;
    assert!(matches!(outcome, Err(PurchaseError::AlreadySold)));

    let history = engine
        .purchases_by_buyer(second)
        .await
        .expect("history loads");
    assert!(history.is_empty());
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn concurrent_buyers_race_for_exactly_one_sale() {
    let db = support::test_db();
    let seller = seed_user(&db.pool, "seller@x.com").await;
    let item = seed_listing(&db.pool, seller, "Desk", 10.0).await;

    let mut buyers = Vec::new();
    for n in 0..8 {
        buyers.push(seed_user(&db.pool, &format!("buyer{n}@x.com")).await);
    }

    let engine = DieselPurchaseEngine::new(db.pool.clone());
    let attempts = buyers.iter().map(|&buyer| {
        let engine = engine.clone();
        tokio::spawn(async move { engine.purchase(buyer, item).await })
    });
    let outcomes = join_all(attempts).await;

    let mut won = 0;
    let mut lost = 0;
    for outcome in outcomes {
        match outcome.expect("task completes") {
            Ok(receipt) => {
                assert_eq!(receipt.item_id, item);
                won += 1;
            }
            Err(PurchaseError::AlreadySold) => lost += 1,
            Err(other) => panic!("unexpected purchase failure: {other}"),
        }
    }
    assert_eq!(won, 1);
    assert_eq!(lost, 7);

    let listings = DieselListingStore::new(db.pool.clone());
    assert_eq!(
        listings.availability(item).await.expect("lookup"),
        Some(false)
    );
}

#[tokio::test]
async fn failed_insert_rolls_back_the_sold_flag() {
    let db = support::test_db();
    let seller = seed_user(&db.pool, "seller@x.com").await;
    let buyer = seed_user(&db.pool, "buyer@x.com").await;
    let item = seed_listing(&db.pool, seller, "Desk", 10.0).await;

    // Sabotage the transaction log so the insert inside the purchase unit
    // fails after the sold flag has been flipped.
    {
        let mut conn = db.pool.get().expect("connection");
        sql_query("DROP TABLE transactions")
            .execute(&mut conn)
            .expect("table drops");
    }

    let engine = DieselPurchaseEngine::new(db.pool.clone());
    let outcome = engine.purchase(buyer, item).await;
    assert!(matches!(outcome, Err(PurchaseError::Storage { .. })));

    // The rollback must leave the listing purchasable.
    let listings = DieselListingStore::new(db.pool.clone());
    assert_eq!(
        listings.availability(item).await.expect("lookup"),
        Some(true)
    );
}
