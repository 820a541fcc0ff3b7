use super::*;

/// Tests the happy payment path.
///
/// The payment settles synchronously as completed with a paid timestamp and
/// the booking moves to confirmed in the same transaction.
#[tokio::test]
async fn completes_payment_and_confirms_booking() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_payment_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (user, _resort, _room_type, _room, booking) =
        factory::helpers::create_booking_with_dependencies(db).await?;

    let payment = PaymentService::new(db)
        .create(user.id, booking.id, "card", Decimal::from(200), None)
        .await
        .unwrap();

    assert_eq!(payment.status, PaymentStatus::Completed);
    assert_eq!(payment.amount, Decimal::from(200));
    assert!(payment.paid_at.is_some());
    assert!(payment.transaction_code.starts_with("TXN-"));

    let booking = BookingRepository::new(db)
        .find_by_id(booking.id)
        .await?
        .unwrap();
    assert_eq!(booking.status, BookingStatus::Confirmed);

    Ok(())
}

/// Tests percent voucher redemption.
///
/// Paying 200 with a valid 10%-off code stores 180, links the voucher and
/// increments its redemption counter by one.
#[tokio::test]
async fn applies_percent_discount() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_payment_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (user, _resort, _room_type, _room, booking) =
        factory::helpers::create_booking_with_dependencies(db).await?;
    let discount = factory::discount::DiscountFactory::new(db)
        .code("TENOFF")
        .build()
        .await?;

    let payment = PaymentService::new(db)
        .create(user.id, booking.id, "card", Decimal::from(200), Some("TENOFF"))
        .await
        .unwrap();

    assert_eq!(payment.amount, Decimal::from(180));
    assert_eq!(payment.discount_id, Some(discount.id));

    let reloaded = DiscountRepository::new(db)
        .find_by_id(discount.id)
        .await?
        .unwrap();
    assert_eq!(reloaded.usage_used, 1);

    Ok(())
}

/// Tests fixed voucher redemption and the zero floor.
#[tokio::test]
async fn applies_fixed_discount_with_zero_floor() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_payment_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (user, _resort, _room_type, _room, booking) =
        factory::helpers::create_booking_with_dependencies(db).await?;
    factory::discount::DiscountFactory::new(db)
        .code("BIGFIXED")
        .discount_type(DiscountType::Fixed)
        .value(Decimal::from(250))
        .build()
        .await?;

    let payment = PaymentService::new(db)
        .create(
            user.id,
            booking.id,
            "bank_transfer",
            Decimal::from(200),
            Some("BIGFIXED"),
        )
        .await
        .unwrap();

    assert_eq!(payment.amount, Decimal::ZERO);

    Ok(())
}

/// Tests the double-payment guard.
///
/// A second payment attempt for an already-paid booking is rejected with a
/// conflict.
#[tokio::test]
async fn rejects_second_payment_for_same_booking() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_payment_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (user, _resort, _room_type, _room, booking) =
        factory::helpers::create_booking_with_dependencies(db).await?;

    let service = PaymentService::new(db);

    service
        .create(user.id, booking.id, "card", Decimal::from(200), None)
        .await
        .unwrap();

    let second = service
        .create(user.id, booking.id, "cash", Decimal::from(200), None)
        .await;

    assert!(matches!(second, Err(AppError::Conflict(_))));

    Ok(())
}

/// Tests the usage-limit check.
///
/// An exhausted voucher fails the payment outright and nothing is written:
/// no payment row, no counter change, booking still pending.
#[tokio::test]
async fn rejects_exhausted_discount_and_rolls_back() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_payment_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (user, _resort, _room_type, _room, booking) =
        factory::helpers::create_booking_with_dependencies(db).await?;
    let discount = factory::discount::DiscountFactory::new(db)
        .code("USEDUP")
        .usage_limit(Some(5))
        .usage_used(5)
        .build()
        .await?;

    let result = PaymentService::new(db)
        .create(user.id, booking.id, "card", Decimal::from(200), Some("USEDUP"))
        .await;

    assert!(matches!(result, Err(AppError::BadRequest(_))));

    let reloaded = DiscountRepository::new(db)
        .find_by_id(discount.id)
        .await?
        .unwrap();
    assert_eq!(reloaded.usage_used, 5);

    let booking = BookingRepository::new(db)
        .find_by_id(booking.id)
        .await?
        .unwrap();
    assert_eq!(booking.status, BookingStatus::Pending);

    Ok(())
}

/// Tests that a code that doesn't resolve applies no discount.
#[tokio::test]
async fn ignores_unknown_discount_code() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_payment_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (user, _resort, _room_type, _room, booking) =
        factory::helpers::create_booking_with_dependencies(db).await?;

    let payment = PaymentService::new(db)
        .create(
            user.id,
            booking.id,
            "e_wallet",
            Decimal::from(200),
            Some("NOSUCHCODE"),
        )
        .await
        .unwrap();

    assert_eq!(payment.amount, Decimal::from(200));
    assert!(payment.discount_id.is_none());

    Ok(())
}

/// Tests that a voucher without a usage limit can always be redeemed.
#[tokio::test]
async fn allows_unlimited_discount() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_payment_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (user, _resort, _room_type, _room, booking) =
        factory::helpers::create_booking_with_dependencies(db).await?;
    factory::discount::DiscountFactory::new(db)
        .code("FOREVER")
        .usage_limit(None)
        .usage_used(9000)
        .build()
        .await?;

    let payment = PaymentService::new(db)
        .create(user.id, booking.id, "cash", Decimal::from(100), Some("FOREVER"))
        .await
        .unwrap();

    assert_eq!(payment.amount, Decimal::from(90));

    Ok(())
}

/// Tests payment method validation.
#[tokio::test]
async fn rejects_invalid_payment_method() {
    let test = TestBuilder::new().with_payment_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let result = PaymentService::new(db)
        .create(
            Uuid::new_v4(),
            Uuid::new_v4(),
            "cheque",
            Decimal::from(200),
            None,
        )
        .await;

    assert!(matches!(result, Err(AppError::BadRequest(_))));
}

/// Tests the ownership check: paying someone else's booking reads as 404 so
/// booking existence is not leaked.
#[tokio::test]
async fn rejects_foreign_booking() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_payment_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_user, _resort, _room_type, _room, booking) =
        factory::helpers::create_booking_with_dependencies(db).await?;
    let stranger = factory::user::create_user(db).await?;

    let result = PaymentService::new(db)
        .create(stranger.id, booking.id, "card", Decimal::from(200), None)
        .await;

    assert!(matches!(result, Err(AppError::NotFound(_))));

    Ok(())
}

#[test]
fn discount_math_matches_voucher_type() {
    let base = factory_discount_model(DiscountType::Percent, Decimal::from(10));
    assert_eq!(
        PaymentService::apply_discount(Decimal::from(200), &base),
        Decimal::from(180)
    );

    let fixed = factory_discount_model(DiscountType::Fixed, Decimal::from(50));
    assert_eq!(
        PaymentService::apply_discount(Decimal::from(200), &fixed),
        Decimal::from(150)
    );

    let oversized = factory_discount_model(DiscountType::Fixed, Decimal::from(500));
    assert_eq!(
        PaymentService::apply_discount(Decimal::from(200), &oversized),
        Decimal::ZERO
    );
}

fn factory_discount_model(
    discount_type: DiscountType,
    value: Decimal,
) -> entity::discount::Model {
    let now = Utc::now();
    entity::discount::Model {
        id: Uuid::new_v4(),
        code: "TEST".to_string(),
        name: "Test".to_string(),
        description: None,
        discount_type,
        value,
        usage_limit: None,
        usage_used: 0,
        valid_from: now,
        valid_until: now,
        status: entity::discount::DiscountStatus::Active,
        created_at: now,
        updated_at: now,
    }
}
