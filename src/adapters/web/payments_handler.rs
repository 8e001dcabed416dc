use actix_web::{HttpResponse, Responder, ResponseError, post, web};
use log::{info, warn};

use crate::adapters::web::errors::ApiError;
use crate::adapters::web::schema::PaymentRequest;
use crate::error::GatewayError;
use crate::infrastructure::queue::redis_intake_queue::RedisIntakeQueue;
use crate::use_cases::create_payment::CreatePaymentUseCase;
use crate::use_cases::dto::CreatePaymentCommand;

/// Accepted means queued, not settled — this endpoint never waits on a
/// downstream processor.
#[post("/payments")]
pub async fn payments(
	payload: web::Json<PaymentRequest>,
	create_payment_use_case: web::Data<CreatePaymentUseCase<RedisIntakeQueue>>,
) -> impl Responder {
	let command = CreatePaymentCommand {
		correlation_id: payload.correlation_id.clone(),
		amount:         payload.amount,
	};

	match create_payment_use_case.execute(command).await {
		Ok(()) => {
			info!("payment queued: {}", payload.correlation_id);
			HttpResponse::Accepted().finish()
		}
		Err(GatewayError::Validation) => ApiError::BadClientDataError.error_response(),
		Err(e) => {
			warn!("payment intake failed: {e}");
			ApiError::InternalServerError.error_response()
		}
	}
}
