use super::*;

/// Tests the refund state change.
///
/// Verifies the status flips to refunded and the refund amount, reason and
/// timestamp are all stored.
#[tokio::test]
async fn marks_payment_refunded() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_payment_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (user, _resort, _room_type, _room, booking) =
        factory::helpers::create_booking_with_dependencies(db).await?;

    let repo = PaymentRepository::new(db);
    let payment = repo
        .create(CreatePaymentParams {
            transaction_code: "TXN-TEST03".to_string(),
            booking_id: booking.id,
            user_id: user.id,
            payment_method: PaymentMethod::BankTransfer,
            amount: Decimal::from(200),
            discount_id: None,
        })
        .await?;
    let payment = repo.mark_completed(payment, Utc::now()).await?;

    let refunded = repo
        .mark_refunded(
            payment,
            Decimal::from(120),
            Some("guest request".to_string()),
            Utc::now(),
        )
        .await?;

    assert_eq!(refunded.status, PaymentStatus::Refunded);
    assert_eq!(refunded.refund_amount, Some(Decimal::from(120)));
    assert_eq!(refunded.refund_reason.as_deref(), Some("guest request"));
    assert!(refunded.refunded_at.is_some());

    Ok(())
}
