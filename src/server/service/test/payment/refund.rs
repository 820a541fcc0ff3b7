use super::*;

/// Tests the happy refund path.
///
/// The payment moves to refunded with amount/reason/timestamp, the booking
/// reverts to cancelled, and the room is released.
#[tokio::test]
async fn refunds_completed_payment() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_payment_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (user, _resort, _room_type, room, booking) =
        factory::helpers::create_booking_with_dependencies(db).await?;

    let service = PaymentService::new(db);

    let payment = service
        .create(user.id, booking.id, "card", Decimal::from(200), None)
        .await
        .unwrap();

    let refunded = service
        .refund(payment.id, Decimal::from(200), Some("plan change".to_string()))
        .await
        .unwrap();

    assert_eq!(refunded.status, PaymentStatus::Refunded);
    assert_eq!(refunded.refund_amount, Some(Decimal::from(200)));
    assert_eq!(refunded.refund_reason.as_deref(), Some("plan change"));
    assert!(refunded.refunded_at.is_some());

    let booking = BookingRepository::new(db)
        .find_by_id(booking.id)
        .await?
        .unwrap();
    assert_eq!(booking.status, BookingStatus::Cancelled);

    let room = RoomRepository::new(db).find_by_id(room.id).await?.unwrap();
    assert_eq!(room.status, RoomStatus::Available);

    Ok(())
}

/// Tests the refund ceiling: refunding 250 against a 200 payment fails.
#[tokio::test]
async fn rejects_refund_above_paid_amount() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_payment_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (user, _resort, _room_type, _room, booking) =
        factory::helpers::create_booking_with_dependencies(db).await?;

    let service = PaymentService::new(db);

    let payment = service
        .create(user.id, booking.id, "card", Decimal::from(200), None)
        .await
        .unwrap();

    let result = service.refund(payment.id, Decimal::from(250), None).await;

    assert!(matches!(result, Err(AppError::BadRequest(_))));

    // The payment is untouched after the rejected refund.
    let reloaded = crate::server::data::payment::PaymentRepository::new(db)
        .find_by_id(payment.id)
        .await?
        .unwrap();
    assert_eq!(reloaded.status, PaymentStatus::Completed);
    assert!(reloaded.refund_amount.is_none());

    Ok(())
}

/// Tests that only completed payments can be refunded.
#[tokio::test]
async fn rejects_non_completed_payment() -> Result<(), DbErr> {
    use crate::server::{
        data::payment::PaymentRepository, model::payment::CreatePaymentParams,
    };
    use entity::payment::PaymentMethod;

    let test = TestBuilder::new().with_payment_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (user, _resort, _room_type, _room, booking) =
        factory::helpers::create_booking_with_dependencies(db).await?;

    // Insert a payment that never settled.
    let pending = PaymentRepository::new(db)
        .create(CreatePaymentParams {
            transaction_code: "TXN-PENDING".to_string(),
            booking_id: booking.id,
            user_id: user.id,
            payment_method: PaymentMethod::Cash,
            amount: Decimal::from(200),
            discount_id: None,
        })
        .await?;

    let result = PaymentService::new(db)
        .refund(pending.id, Decimal::from(100), None)
        .await;

    assert!(matches!(result, Err(AppError::BadRequest(_))));

    Ok(())
}

/// Tests the missing-payment and missing-amount cases.
#[tokio::test]
async fn rejects_unknown_payment_and_zero_amount() {
    let test = TestBuilder::new().with_payment_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let service = PaymentService::new(db);

    let missing = service.refund(Uuid::new_v4(), Decimal::from(50), None).await;
    assert!(matches!(missing, Err(AppError::NotFound(_))));

    let zero = service.refund(Uuid::new_v4(), Decimal::ZERO, None).await;
    assert!(matches!(zero, Err(AppError::BadRequest(_))));
}
