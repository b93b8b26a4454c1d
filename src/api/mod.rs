mod chain;
mod health;
pub mod models;
mod tx;

use actix_web::web::{self, ServiceConfig};

pub use models::AppState;

pub fn init_routes(cfg: &mut ServiceConfig) {
    cfg.service(
        web::scope("/api/v1")
            .service(health::health_check)
            .service(chain::get_chain)
            .service(chain::validate_chain)
            .service(chain::mine_block)
            .service(tx::post_transaction)
            .service(tx::get_pending),
    );
}

#[cfg(test)]
mod tests {
    use actix_web::{App, http::StatusCode, test, web};
    use serde_json::{Value, json};

    use super::models::{MineResponse, NewTxResponse, PendingResponse};
    use super::{AppState, init_routes};
    use crate::blockchain::SearchLimits;

    #[actix_web::test]
    async fn health_responds() {
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(AppState::default()))
                .configure(init_routes),
        )
        .await;
        let req = test::TestRequest::get().uri("/api/v1/health/").to_request();
        let resp = test::call_service(&app, req).await;
        assert!(resp.status().is_success());
    }

    #[actix_web::test]
    async fn submit_mine_and_validate() {
        let state = web::Data::new(AppState::default());
        let app = test::init_service(
            App::new()
                .app_data(state.clone())
                .configure(init_routes),
        )
        .await;

        for (sender, recipient, amount) in [("Joe", "Karter", "5 BTC"), ("Harry", "Porter", "6 BTC")] {
            let req = test::TestRequest::post()
                .uri("/api/v1/transactions/")
                .set_json(json!({ "sender": sender, "recipient": recipient, "amount": amount }))
                .to_request();
            let _: NewTxResponse = test::call_and_read_body_json(&app, req).await;
        }

        let req = test::TestRequest::get()
            .uri("/api/v1/transactions/pending/")
            .to_request();
        let pending: PendingResponse = test::call_and_read_body_json(&app, req).await;
        assert_eq!(pending.size, 2);
        assert_eq!(pending.transactions[0].sender, "Joe");

        let genesis_hash = state
            .blockchain
            .lock()
            .unwrap()
            .last_block()
            .hash();

        let req = test::TestRequest::post().uri("/api/v1/mine/").to_request();
        let mined: MineResponse = test::call_and_read_body_json(&app, req).await;
        assert_eq!(mined.index, 2);
        assert_eq!(mined.previous_hash, genesis_hash);
        assert_eq!(mined.transactions.len(), 2);

        let req = test::TestRequest::get().uri("/api/v1/chain/").to_request();
        let chain: Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(chain["length"], 2);
        assert_eq!(chain["chain"][1]["hash"], mined.hash.as_str());
        assert_eq!(chain["chain"][0]["previous_hash"], "0");

        let req = test::TestRequest::get().uri("/api/v1/validate/").to_request();
        let verdict: Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(verdict["valid"], true);
        assert_eq!(verdict["violations"], json!([]));
    }

    #[actix_web::test]
    async fn validate_reports_structured_violations() {
        let state = web::Data::new(AppState::default());
        state
            .blockchain
            .lock()
            .unwrap()
            .mine_block(1, "bogus".into());
        let app = test::init_service(
            App::new()
                .app_data(state.clone())
                .configure(init_routes),
        )
        .await;

        let req = test::TestRequest::get().uri("/api/v1/validate/").to_request();
        let verdict: Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(verdict["valid"], false);
        assert_eq!(verdict["length"], 2);
        assert_eq!(verdict["violations"][0]["kind"], "broken_link");
        assert_eq!(verdict["violations"][0]["index"], 2);
        assert_eq!(verdict["violations"][0]["found"], "bogus");
        assert_eq!(verdict["violations"][1]["kind"], "invalid_proof");
        assert_eq!(verdict["violations"][1]["proof"], 1);
    }

    #[actix_web::test]
    async fn exhausted_search_is_unavailable() {
        let state = web::Data::new(AppState::new(SearchLimits::with_max_attempts(0)));
        let app = test::init_service(
            App::new()
                .app_data(state.clone())
                .configure(init_routes),
        )
        .await;

        let req = test::TestRequest::post().uri("/api/v1/mine/").to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::SERVICE_UNAVAILABLE);
        assert_eq!(state.blockchain.lock().unwrap().len(), 1);
    }
}
