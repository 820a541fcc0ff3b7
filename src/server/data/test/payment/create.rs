use super::*;

/// Tests inserting a payment row.
///
/// Verifies new payments start out pending with no settlement or refund
/// metadata.
#[tokio::test]
async fn inserts_pending_payment() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_payment_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (user, _resort, _room_type, _room, booking) =
        factory::helpers::create_booking_with_dependencies(db).await?;

    let repo = PaymentRepository::new(db);
    let payment = repo
        .create(CreatePaymentParams {
            transaction_code: "TXN-TEST01".to_string(),
            booking_id: booking.id,
            user_id: user.id,
            payment_method: PaymentMethod::Card,
            amount: Decimal::from(200),
            discount_id: None,
        })
        .await?;

    assert_eq!(payment.status, PaymentStatus::Pending);
    assert_eq!(payment.amount, Decimal::from(200));
    assert!(payment.paid_at.is_none());
    assert!(payment.refund_amount.is_none());

    Ok(())
}

/// Tests the completed-payment existence check behind the double-payment
/// guard.
///
/// A pending payment must not count; only after settlement does the check
/// flip to true.
#[tokio::test]
async fn detects_completed_payment_for_booking() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_payment_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (user, _resort, _room_type, _room, booking) =
        factory::helpers::create_booking_with_dependencies(db).await?;

    let repo = PaymentRepository::new(db);
    let payment = repo
        .create(CreatePaymentParams {
            transaction_code: "TXN-TEST02".to_string(),
            booking_id: booking.id,
            user_id: user.id,
            payment_method: PaymentMethod::Cash,
            amount: Decimal::from(150),
            discount_id: None,
        })
        .await?;

    assert!(!repo.completed_exists_for_booking(booking.id).await?);

    let completed = repo.mark_completed(payment, Utc::now()).await?;
    assert_eq!(completed.status, PaymentStatus::Completed);
    assert!(completed.paid_at.is_some());

    assert!(repo.completed_exists_for_booking(booking.id).await?);

    Ok(())
}
