use super::*;
use entity::prelude::Discount;

/// Tests the redemption counter increment.
///
/// Two increments must land as two, and the counter must move independently
/// of the in-memory model the caller holds.
#[tokio::test]
async fn increments_usage_counter() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_table(Discount).build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let discount = factory::discount::create_discount(db).await?;
    assert_eq!(discount.usage_used, 0);

    let repo = DiscountRepository::new(db);
    repo.increment_usage(discount.id).await?;
    repo.increment_usage(discount.id).await?;

    let reloaded = repo.find_by_id(discount.id).await?.unwrap();
    assert_eq!(reloaded.usage_used, 2);

    Ok(())
}
