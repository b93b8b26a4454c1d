use actix_web::{HttpResponse, Responder, get, post, web};
use log::debug;

use super::models::{AppState, NewTxRequest, NewTxResponse, PendingResponse};

/// Queue a transaction for the next block. No validation is applied.
#[post("/transactions/")]
pub async fn post_transaction(
    state: web::Data<AppState>,
    body: web::Json<NewTxRequest>,
) -> impl Responder {
    let NewTxRequest {
        sender,
        recipient,
        amount,
    } = body.into_inner();

    let mut bc = state.blockchain.lock().expect("mutex poisoned");
    bc.initiate_transaction(sender, recipient, amount);
    let pending = bc.pending_transactions().len();
    debug!("POST /transactions/ - accepted (pending: {pending})");

    HttpResponse::Ok().json(NewTxResponse { pending })
}

/// List the transactions waiting to be mined.
#[get("/transactions/pending/")]
pub async fn get_pending(state: web::Data<AppState>) -> impl Responder {
    let bc = state.blockchain.lock().expect("mutex poisoned");
    let transactions = bc.pending_transactions().to_vec();
    HttpResponse::Ok().json(PendingResponse {
        size: transactions.len(),
        transactions,
    })
}
