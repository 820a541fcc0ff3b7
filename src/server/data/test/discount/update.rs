use super::*;
use entity::prelude::Discount;

/// Tests the partial voucher update.
///
/// Only the provided fields may change; everything else keeps its value.
#[tokio::test]
async fn updates_only_provided_fields() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_table(Discount).build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let discount = factory::discount::create_discount(db).await?;

    let repo = DiscountRepository::new(db);
    let updated = repo
        .update(
            discount.id,
            UpdateDiscountParams {
                value: Some(Decimal::from(25)),
                status: Some(DiscountStatus::Inactive),
                ..Default::default()
            },
        )
        .await?
        .unwrap();

    assert_eq!(updated.value, Decimal::from(25));
    assert_eq!(updated.status, DiscountStatus::Inactive);
    assert_eq!(updated.code, discount.code);
    assert_eq!(updated.discount_type, discount.discount_type);

    Ok(())
}

/// Tests deleting a voucher.
///
/// The deleted row comes back to the caller; a second delete yields None.
#[tokio::test]
async fn deletes_and_returns_row() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_table(Discount).build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let discount = factory::discount::create_discount(db).await?;

    let repo = DiscountRepository::new(db);

    let deleted = repo.delete(discount.id).await?;
    assert_eq!(deleted.map(|d| d.id), Some(discount.id));

    assert!(repo.delete(discount.id).await?.is_none());
    assert!(repo.find_by_id(discount.id).await?.is_none());

    Ok(())
}

/// Tests that updating a missing voucher yields None.
#[tokio::test]
async fn update_returns_none_for_missing() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_table(Discount).build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = DiscountRepository::new(db);
    let result = repo
        .update(Uuid::new_v4(), UpdateDiscountParams::default())
        .await?;

    assert!(result.is_none());

    Ok(())
}
