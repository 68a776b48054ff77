//! Route handlers.

use axum::extract::{Json, State};
use tracing::error;
use uuid::Uuid;

use auth::AuthError;
use orchestrator::{ChatRequest, HistoryEntry, OrchestratorError, RoundtableRequest};

use crate::error::ApiError;
use crate::state::AppState;
use crate::wire::*;

pub async fn health() -> Json<Health> {
    Json(Health { status: "ok" })
}

pub async fn send_otp(
    State(state): State<AppState>,
    Json(payload): Json<SendOtpRequest>,
) -> Result<Json<SendOtpResponse>, ApiError> {
    let code = auth::issue(state.otp_store.as_ref(), &payload.phone)
        .await
        .map_err(send_otp_error)?;

    Ok(Json(SendOtpResponse {
        success: true,
        message: "کد تایید ارسال شد",
        dev_code: state.expose_otp.then_some(code),
    }))
}

fn send_otp_error(err: AuthError) -> ApiError {
    match err {
        AuthError::InvalidPhone => ApiError::Validation("شماره موبایل نامعتبر است"),
        other => {
            error!(error = %other, "Failed to issue OTP");
            ApiError::Internal("خطا در ارسال کد")
        }
    }
}

pub async fn verify_otp(
    State(state): State<AppState>,
    Json(payload): Json<VerifyOtpRequest>,
) -> Result<Json<VerifyOtpResponse>, ApiError> {
    let user = auth::verify(
        state.otp_store.as_ref(),
        state.user_store.as_ref(),
        &payload.phone,
        &payload.code,
    )
    .await
    .map_err(verify_otp_error)?;

    Ok(Json(VerifyOtpResponse {
        success: true,
        user,
    }))
}

fn verify_otp_error(err: AuthError) -> ApiError {
    match err {
        AuthError::InvalidPhone => ApiError::Validation("شماره موبایل نامعتبر است"),
        AuthError::InvalidCode => ApiError::Validation("کد تایید نامعتبر است"),
        AuthError::NoPendingChallenge => {
            ApiError::Validation("کد تایید یافت نشد. لطفاً دوباره درخواست کنید.")
        }
        AuthError::Expired => ApiError::Validation("کد تایید منقضی شده است"),
        AuthError::CodeMismatch => ApiError::Validation("کد تایید اشتباه است"),
        AuthError::Store(store_err) => {
            error!(error = %store_err, "Failed to verify OTP");
            ApiError::Internal("خطا در تایید کد")
        }
    }
}

pub async fn chat(
    State(state): State<AppState>,
    Json(payload): Json<ChatApiRequest>,
) -> Result<Json<ChatApiResponse>, ApiError> {
    let request = ChatRequest {
        message: payload.message,
        models: payload.models,
        mode: payload.mode,
        history: convert_history(payload.history),
    };

    let fanout = state
        .orchestrator
        .chat(request)
        .await
        .map_err(fanout_error)?;

    let responses = fanout
        .responses
        .into_iter()
        .map(|r| ModelResponse {
            model: r.target,
            content: r.completion.content,
            degraded: r.completion.degraded,
        })
        .collect();

    Ok(Json(ChatApiResponse {
        success: true,
        responses,
        credits_used: fanout.credits_used,
    }))
}

pub async fn roundtable(
    State(state): State<AppState>,
    Json(payload): Json<RoundtableApiRequest>,
) -> Result<Json<RoundtableApiResponse>, ApiError> {
    let request = RoundtableRequest {
        message: payload.message,
        personas: payload.personas,
        history: convert_history(payload.history),
    };

    let fanout = state
        .orchestrator
        .roundtable(request)
        .await
        .map_err(fanout_error)?;

    let responses = fanout
        .responses
        .into_iter()
        .map(|r| PersonaResponse {
            persona_id: r.target,
            content: r.completion.content,
            degraded: r.completion.degraded,
        })
        .collect();

    Ok(Json(RoundtableApiResponse {
        success: true,
        responses,
        credits_used: fanout.credits_used,
    }))
}

fn convert_history(history: Vec<WireHistoryEntry>) -> Vec<HistoryEntry> {
    history
        .into_iter()
        .map(|entry| HistoryEntry::new(entry.role, entry.content))
        .collect()
}

fn fanout_error(err: OrchestratorError) -> ApiError {
    match err {
        OrchestratorError::EmptyMessage => ApiError::Validation("پیام نامعتبر است"),
        OrchestratorError::InsufficientPersonas { .. } => {
            ApiError::Validation("حداقل ۲ شخصیت انتخاب کنید")
        }
    }
}

pub async fn list_packages(State(state): State<AppState>) -> Json<PackageListResponse> {
    Json(PackageListResponse {
        packages: state.registry.packages(),
    })
}

pub async fn purchase_credits(
    State(state): State<AppState>,
    Json(payload): Json<PurchaseRequest>,
) -> Result<Json<PurchaseResponse>, ApiError> {
    if payload.package_id.is_empty() || payload.user_id.is_empty() {
        return Err(ApiError::Validation("اطلاعات نامعتبر است"));
    }

    let Some(package) = state.registry.package(&payload.package_id) else {
        return Err(ApiError::Validation("بسته انتخاب شده نامعتبر است"));
    };

    // Gateway integration is simulated: hand back a transaction id and
    // a callback-shaped URL, persist nothing
    let transaction_id = Uuid::new_v4().to_string();
    let payment_url = format!("/api/credits/callback?transaction={}", transaction_id);

    Ok(Json(PurchaseResponse {
        success: true,
        transaction_id,
        package,
        payment_url,
    }))
}
