use super::*;
use entity::prelude::Discount;

/// Tests the redeemable-voucher lookup.
///
/// Only an active voucher whose validity window contains the probe time may
/// come back.
#[tokio::test]
async fn finds_active_discount_in_window() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_table(Discount).build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let discount = factory::discount::DiscountFactory::new(db)
        .code("WELCOME10")
        .build()
        .await?;

    let repo = DiscountRepository::new(db);
    let found = repo.find_valid_by_code("WELCOME10", Utc::now()).await?;

    assert_eq!(found.map(|d| d.id), Some(discount.id));

    Ok(())
}

/// Tests that inactive vouchers never resolve.
#[tokio::test]
async fn ignores_inactive_discount() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_table(Discount).build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    factory::discount::DiscountFactory::new(db)
        .code("DISABLED")
        .status(DiscountStatus::Inactive)
        .build()
        .await?;

    let repo = DiscountRepository::new(db);
    assert!(repo.find_valid_by_code("DISABLED", Utc::now()).await?.is_none());

    Ok(())
}

/// Tests that a voucher outside its validity window never resolves.
#[tokio::test]
async fn ignores_discount_outside_window() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_table(Discount).build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let now = Utc::now();
    factory::discount::DiscountFactory::new(db)
        .code("LASTYEAR")
        .valid_between(now - Duration::days(60), now - Duration::days(30))
        .build()
        .await?;

    let repo = DiscountRepository::new(db);
    assert!(repo.find_valid_by_code("LASTYEAR", now).await?.is_none());

    Ok(())
}
