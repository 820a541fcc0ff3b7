//! Payment creation, refunds, and payment reporting.
//!
//! Payment creation is the consistency-critical path of the system: the
//! ownership check, double-payment check, voucher redemption, payment insert,
//! synchronous settlement and booking confirmation all commit or roll back as
//! one unit.

use chrono::Utc;
use entity::booking::BookingStatus;
use entity::payment::{PaymentMethod, PaymentStatus};
use entity::room::RoomStatus;
use rust_decimal::Decimal;
use sea_orm::{ActiveEnum, DatabaseConnection, TransactionTrait};
use uuid::Uuid;

use crate::{
    model::payment::{
        AdminPaymentDto, InvoiceDto, MyPaymentDto, PaymentDetailDto, PaymentStatsDto,
        PaymentsByMethodDto,
    },
    server::{
        data::{
            booking::BookingRepository, discount::DiscountRepository, payment::PaymentRepository,
            resort::ResortRepository, room::RoomRepository, room_type::RoomTypeRepository,
            user::UserRepository,
        },
        error::AppError,
        model::payment::{CreatePaymentParams, DateRange, PaymentListFilter},
        util::code,
    },
};

pub struct PaymentService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> PaymentService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Pays a booking. Everything below runs in a single transaction:
    ///
    /// 1. Load the booking with an exclusive row lock; 404 unless it exists
    ///    and belongs to the caller.
    /// 2. Reject if a completed payment already exists (the row lock makes
    ///    this check race-free against concurrent attempts).
    /// 3. If a voucher code was sent and resolves to an active voucher inside
    ///    its validity window: fail on an exhausted usage limit, otherwise
    ///    apply the discount and increment the redemption counter. Codes that
    ///    don't resolve are ignored and the full amount is charged.
    /// 4. Insert the payment as pending, then mark it completed immediately.
    ///    There is no external gateway; settlement is synchronous.
    /// 5. Confirm the booking.
    ///
    /// # Returns
    /// - `Ok(Model)` - The completed payment
    /// - `Err(AppError::BadRequest)` - Invalid method/amount or exhausted voucher
    /// - `Err(AppError::NotFound)` - Booking missing or owned by someone else
    /// - `Err(AppError::Conflict)` - Booking already paid
    pub async fn create(
        &self,
        user_id: Uuid,
        booking_id: Uuid,
        payment_method: &str,
        amount: Decimal,
        discount_code: Option<&str>,
    ) -> Result<entity::payment::Model, AppError> {
        let payment_method = PaymentMethod::try_from_value(&payment_method.to_string())
            .map_err(|_| AppError::BadRequest("Invalid payment method".to_string()))?;

        if amount <= Decimal::ZERO {
            return Err(AppError::BadRequest(
                "Missing or invalid payment information".to_string(),
            ));
        }

        let txn = self.db.begin().await?;

        let booking_repo = BookingRepository::new(&txn);
        let payment_repo = PaymentRepository::new(&txn);
        let discount_repo = DiscountRepository::new(&txn);

        let Some(booking) = booking_repo.find_by_id_locked(booking_id).await? else {
            return Err(AppError::NotFound(
                "Booking not found or not yours to pay".to_string(),
            ));
        };
        if booking.user_id != user_id {
            return Err(AppError::NotFound(
                "Booking not found or not yours to pay".to_string(),
            ));
        }

        if payment_repo.completed_exists_for_booking(booking_id).await? {
            return Err(AppError::Conflict(
                "This booking has already been paid".to_string(),
            ));
        }

        let mut final_amount = amount;
        let mut discount_id = None;

        if let Some(code) = discount_code.filter(|c| !c.trim().is_empty()) {
            if let Some(discount) = discount_repo.find_valid_by_code(code, Utc::now()).await? {
                if let Some(limit) = discount.usage_limit {
                    if discount.usage_used >= limit {
                        return Err(AppError::BadRequest(
                            "Discount code has reached its usage limit".to_string(),
                        ));
                    }
                }

                final_amount = Self::apply_discount(amount, &discount);
                discount_repo.increment_usage(discount.id).await?;
                discount_id = Some(discount.id);
            }
        }

        let payment = payment_repo
            .create(CreatePaymentParams {
                transaction_code: code::transaction_code(),
                booking_id,
                user_id,
                payment_method,
                amount: final_amount,
                discount_id,
            })
            .await?;

        let payment = payment_repo.mark_completed(payment, Utc::now()).await?;

        booking_repo
            .set_status(booking_id, BookingStatus::Confirmed)
            .await?;

        txn.commit().await?;

        Ok(payment)
    }

    /// Amount left to charge after applying a voucher.
    ///
    /// Percent vouchers take `value` percent off; fixed vouchers subtract
    /// `value`, floored at zero.
    pub fn apply_discount(amount: Decimal, discount: &entity::discount::Model) -> Decimal {
        match discount.discount_type {
            entity::discount::DiscountType::Percent => {
                amount - amount * discount.value / Decimal::from(100)
            }
            entity::discount::DiscountType::Fixed => (amount - discount.value).max(Decimal::ZERO),
        }
    }

    /// Refunds a completed payment. In one transaction: the payment moves to
    /// refunded with amount/reason/timestamp, the booking reverts to
    /// cancelled, and the room is released back to available.
    ///
    /// # Returns
    /// - `Ok(Model)` - The refunded payment
    /// - `Err(AppError::BadRequest)` - Missing amount, non-completed payment,
    ///   or refund above the paid amount
    /// - `Err(AppError::NotFound)` - No payment with that id
    pub async fn refund(
        &self,
        payment_id: Uuid,
        refund_amount: Decimal,
        reason: Option<String>,
    ) -> Result<entity::payment::Model, AppError> {
        if refund_amount <= Decimal::ZERO {
            return Err(AppError::BadRequest(
                "Refund amount is required".to_string(),
            ));
        }

        let txn = self.db.begin().await?;

        let payment_repo = PaymentRepository::new(&txn);
        let booking_repo = BookingRepository::new(&txn);

        let Some(payment) = payment_repo.find_by_id(payment_id).await? else {
            return Err(AppError::NotFound("Payment not found".to_string()));
        };

        if payment.status != PaymentStatus::Completed {
            return Err(AppError::BadRequest(
                "Only completed payments can be refunded".to_string(),
            ));
        }

        if refund_amount > payment.amount {
            return Err(AppError::BadRequest(
                "Refund amount cannot exceed the paid amount".to_string(),
            ));
        }

        let refunded = payment_repo
            .mark_refunded(payment, refund_amount, reason, Utc::now())
            .await?;

        // Refund releases the room as well, keeping this path consistent
        // with cancellation and the admin status map.
        if let Some(booking) = booking_repo
            .set_status(refunded.booking_id, BookingStatus::Cancelled)
            .await?
        {
            RoomRepository::new(&txn)
                .set_status(booking.room_id, RoomStatus::Available)
                .await?;
        }

        txn.commit().await?;

        Ok(refunded)
    }

    /// The caller's payment history, enriched with booking and resort info.
    pub async fn my_payments(&self, user_id: Uuid) -> Result<Vec<MyPaymentDto>, AppError> {
        let payment_repo = PaymentRepository::new(self.db);
        let booking_repo = BookingRepository::new(self.db);
        let room_repo = RoomRepository::new(self.db);
        let resort_repo = ResortRepository::new(self.db);

        let payments = payment_repo.find_by_user(user_id).await?;

        let mut result = Vec::with_capacity(payments.len());
        for payment in payments {
            let Some(booking) = booking_repo.find_by_id(payment.booking_id).await? else {
                continue;
            };
            let room = room_repo.find_by_id(booking.room_id).await?;
            let resort_name = match &room {
                Some(room) => resort_repo
                    .find_by_id(room.resort_id)
                    .await?
                    .map(|r| r.name)
                    .unwrap_or_default(),
                None => String::new(),
            };

            result.push(MyPaymentDto {
                id: payment.id,
                transaction_code: payment.transaction_code,
                amount: payment.amount,
                payment_method: payment.payment_method,
                status: payment.status,
                transaction_date: payment.transaction_date,
                paid_at: payment.paid_at,
                booking_code: booking.booking_code,
                check_in: booking.check_in,
                check_out: booking.check_out,
                resort_name,
                location: room.map(|r| r.location).unwrap_or_default(),
            });
        }

        Ok(result)
    }

    /// Full payment detail joined with booking, guest, resort and voucher.
    pub async fn get_detail(&self, payment_id: Uuid) -> Result<PaymentDetailDto, AppError> {
        let payment_repo = PaymentRepository::new(self.db);
        let booking_repo = BookingRepository::new(self.db);
        let room_repo = RoomRepository::new(self.db);
        let resort_repo = ResortRepository::new(self.db);
        let user_repo = UserRepository::new(self.db);
        let discount_repo = DiscountRepository::new(self.db);

        let payment = payment_repo
            .find_by_id(payment_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Payment not found".to_string()))?;

        let booking = booking_repo
            .find_by_id(payment.booking_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Booking not found".to_string()))?;

        let user = user_repo
            .find_by_id(payment.user_id)
            .await?
            .ok_or_else(|| AppError::NotFound("User not found".to_string()))?;

        let room = room_repo.find_by_id(booking.room_id).await?;
        let resort_name = match &room {
            Some(room) => resort_repo
                .find_by_id(room.resort_id)
                .await?
                .map(|r| r.name)
                .unwrap_or_default(),
            None => String::new(),
        };

        let discount = match payment.discount_id {
            Some(id) => discount_repo.find_by_id(id).await?,
            None => None,
        };

        Ok(PaymentDetailDto {
            id: payment.id,
            transaction_code: payment.transaction_code,
            amount: payment.amount,
            payment_method: payment.payment_method,
            status: payment.status,
            transaction_date: payment.transaction_date,
            paid_at: payment.paid_at,
            refund_amount: payment.refund_amount,
            refunded_at: payment.refunded_at,
            booking_id: booking.id,
            booking_code: booking.booking_code,
            check_in: booking.check_in,
            check_out: booking.check_out,
            booking_total: booking.total_amount,
            full_name: user.full_name,
            email: user.email,
            phone: user.phone,
            resort_name,
            location: room.map(|r| r.location).unwrap_or_default(),
            discount_code: discount.as_ref().map(|d| d.code.clone()),
            discount_value: discount.map(|d| d.value),
        })
    }

    /// Printable invoice; only exists for completed payments.
    pub async fn invoice(&self, payment_id: Uuid) -> Result<InvoiceDto, AppError> {
        let payment_repo = PaymentRepository::new(self.db);
        let booking_repo = BookingRepository::new(self.db);
        let room_repo = RoomRepository::new(self.db);
        let resort_repo = ResortRepository::new(self.db);
        let room_type_repo = RoomTypeRepository::new(self.db);
        let user_repo = UserRepository::new(self.db);
        let discount_repo = DiscountRepository::new(self.db);

        let payment = payment_repo
            .find_by_id(payment_id)
            .await?
            .filter(|p| p.status == PaymentStatus::Completed)
            .ok_or_else(|| AppError::NotFound("Invoice not found".to_string()))?;

        let booking = booking_repo
            .find_by_id(payment.booking_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Booking not found".to_string()))?;

        let user = user_repo
            .find_by_id(payment.user_id)
            .await?
            .ok_or_else(|| AppError::NotFound("User not found".to_string()))?;

        let room = room_repo
            .find_by_id(booking.room_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Room not found".to_string()))?;

        let resort_name = resort_repo
            .find_by_id(room.resort_id)
            .await?
            .map(|r| r.name)
            .unwrap_or_default();

        let room_type = room_type_repo
            .find_by_id(room.room_type_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Room type not found".to_string()))?;

        let discount = match payment.discount_id {
            Some(id) => discount_repo.find_by_id(id).await?,
            None => None,
        };

        Ok(InvoiceDto {
            payment_id: payment.id,
            transaction_code: payment.transaction_code,
            amount: payment.amount,
            payment_method: payment.payment_method,
            transaction_date: payment.transaction_date,
            paid_at: payment.paid_at,
            booking_code: booking.booking_code,
            check_in: booking.check_in,
            check_out: booking.check_out,
            booking_total: booking.total_amount,
            customer_name: user.full_name,
            customer_email: user.email,
            customer_phone: user.phone,
            resort_name,
            location: room.location,
            address: room.address,
            room_type: room_type.name,
            price_per_night: room_type.price_per_night,
            discount_code: discount.as_ref().map(|d| d.code.clone()),
            discount_description: discount.map(|d| d.description.unwrap_or_default()),
        })
    }

    /// The admin payment list, enriched with booking, guest and resort info.
    pub async fn list_all(
        &self,
        filter: PaymentListFilter,
    ) -> Result<Vec<AdminPaymentDto>, AppError> {
        let payment_repo = PaymentRepository::new(self.db);
        let booking_repo = BookingRepository::new(self.db);
        let room_repo = RoomRepository::new(self.db);
        let resort_repo = ResortRepository::new(self.db);
        let user_repo = UserRepository::new(self.db);

        let payments = payment_repo.get_all(&filter).await?;

        let mut result = Vec::with_capacity(payments.len());
        for payment in payments {
            let booking = booking_repo.find_by_id(payment.booking_id).await?;
            let user = user_repo.find_by_id(payment.user_id).await?;
            let resort_name = match &booking {
                Some(booking) => match room_repo.find_by_id(booking.room_id).await? {
                    Some(room) => resort_repo
                        .find_by_id(room.resort_id)
                        .await?
                        .map(|r| r.name)
                        .unwrap_or_default(),
                    None => String::new(),
                },
                None => String::new(),
            };

            result.push(AdminPaymentDto {
                id: payment.id,
                transaction_code: payment.transaction_code,
                amount: payment.amount,
                payment_method: payment.payment_method,
                status: payment.status,
                transaction_date: payment.transaction_date,
                paid_at: payment.paid_at,
                booking_code: booking.map(|b| b.booking_code).unwrap_or_default(),
                full_name: user.as_ref().map(|u| u.full_name.clone()).unwrap_or_default(),
                email: user.map(|u| u.email).unwrap_or_default(),
                resort_name,
            });
        }

        Ok(result)
    }

    /// Aggregate payment figures inside an optional date range.
    pub async fn stats(&self, range: DateRange) -> Result<PaymentStatsDto, AppError> {
        use std::collections::HashSet;

        let payments = PaymentRepository::new(self.db).find_in_range(range).await?;

        let total_payments = payments.len() as u64;
        let total_users: HashSet<Uuid> = payments.iter().map(|p| p.user_id).collect();

        let mut total_revenue = Decimal::ZERO;
        let mut total_refunded = Decimal::ZERO;
        let mut completed_count = 0u64;

        for payment in &payments {
            match payment.status {
                PaymentStatus::Completed => {
                    total_revenue += payment.amount;
                    completed_count += 1;
                }
                PaymentStatus::Refunded => {
                    total_refunded += payment.refund_amount.unwrap_or_default();
                }
                PaymentStatus::Pending => {}
            }
        }

        let avg_payment_amount = if completed_count > 0 {
            total_revenue / Decimal::from(completed_count)
        } else {
            Decimal::ZERO
        };

        Ok(PaymentStatsDto {
            total_payments,
            total_users: total_users.len() as u64,
            total_revenue,
            total_refunded,
            avg_payment_amount,
        })
    }

    /// Transaction counts and completed-amount aggregates grouped by payment
    /// method, largest turnover first.
    pub async fn by_method(&self, range: DateRange) -> Result<Vec<PaymentsByMethodDto>, AppError> {
        use std::collections::HashMap;

        let payments = PaymentRepository::new(self.db).find_in_range(range).await?;

        // method -> (transactions, completed total, completed count)
        let mut by_method: HashMap<PaymentMethod, (u64, Decimal, u64)> = HashMap::new();
        for payment in payments {
            let entry = by_method.entry(payment.payment_method).or_default();
            entry.0 += 1;
            if payment.status == PaymentStatus::Completed {
                entry.1 += payment.amount;
                entry.2 += 1;
            }
        }

        let mut result: Vec<PaymentsByMethodDto> = by_method
            .into_iter()
            .map(|(method, (count, total, completed))| PaymentsByMethodDto {
                payment_method: method,
                transaction_count: count,
                total_amount: total,
                avg_amount: if completed > 0 {
                    total / Decimal::from(completed)
                } else {
                    Decimal::ZERO
                },
            })
            .collect();

        result.sort_by(|a, b| b.total_amount.cmp(&a.total_amount));

        Ok(result)
    }
}
