use actix_web::{HttpResponse, Responder, get, post, web};
use log::{info, warn};

use super::models::{AppState, BlockView, ChainResponse, MineResponse, ValidateResponse};

/// Get the full blockchain.
#[get("/chain/")]
pub async fn get_chain(state: web::Data<AppState>) -> impl Responder {
    let bc = state.blockchain.lock().expect("mutex poisoned");
    let resp = ChainResponse {
        length: bc.len(),
        chain: bc.blocks().iter().map(BlockView::from).collect(),
    };
    HttpResponse::Ok().json(resp)
}

/// Validate the whole chain.
#[get("/validate/")]
pub async fn validate_chain(state: web::Data<AppState>) -> impl Responder {
    let bc = state.blockchain.lock().expect("mutex poisoned");
    let report = bc.validate();
    let resp = ValidateResponse {
        valid: report.is_valid(),
        length: bc.len(),
        violations: report.violations,
    };
    HttpResponse::Ok().json(resp)
}

/// Mine a new block from the pending buffer.
///
/// The search runs on the blocking pool. The lock is held for the whole
/// proof/hash/mine cycle so the proof always matches the head it extends.
#[post("/mine/")]
pub async fn mine_block(state: web::Data<AppState>) -> impl Responder {
    let mined = web::block(move || {
        let mut bc = state.blockchain.lock().expect("mutex poisoned");
        bc.mine_next_block().map(|block| MineResponse {
            index: block.index,
            proof: block.proof,
            previous_hash: block.previous_hash.clone(),
            hash: block.hash(),
            transactions: block.transactions.clone(),
        })
    })
    .await;

    match mined {
        Ok(Ok(resp)) => {
            info!("POST /mine/ - block #{} hash={}", resp.index, resp.hash);
            HttpResponse::Ok().json(resp)
        }
        Ok(Err(e)) => {
            warn!("POST /mine/ - {e}");
            HttpResponse::ServiceUnavailable().body(e.to_string())
        }
        Err(e) => {
            warn!("POST /mine/ - blocking task failed: {e}");
            HttpResponse::InternalServerError().finish()
        }
    }
}
