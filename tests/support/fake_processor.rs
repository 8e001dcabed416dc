use std::sync::{Arc, RwLock};

use actix_web::{App, HttpResponse, HttpServer, Responder, get, post, web};
use serde_json::{Value, json};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SendMode {
	Success,
	TerminalReject,
	Failure,
}

#[derive(Clone)]
struct State {
	mode: Arc<RwLock<SendMode>>,
	healthy: Arc<RwLock<bool>>,
	min_response_time_ms: Arc<RwLock<u64>>,
	received: Arc<RwLock<Vec<Value>>>,
}

#[post("/payments")]
async fn payments(state: web::Data<State>, body: web::Json<Value>) -> impl Responder {
	state.received.write().unwrap().push(body.0);
	match *state.mode.read().unwrap() {
		SendMode::Success => HttpResponse::Ok().finish(),
		SendMode::TerminalReject => HttpResponse::UnprocessableEntity().finish(),
		SendMode::Failure => HttpResponse::InternalServerError().finish(),
	}
}

#[get("/payments/service-health")]
async fn service_health(state: web::Data<State>) -> impl Responder {
	HttpResponse::Ok().json(json!({
		"failing": !*state.healthy.read().unwrap(),
		"minResponseTime": *state.min_response_time_ms.read().unwrap(),
	}))
}

/// A stand-in for a downstream payment processor, run as a real
/// actix-web server on a separate thread so `ProcessorClient`'s
/// `reqwest` calls hit a real socket. Used instead of the
/// `zanfranceschi/payment-processor` docker image for fast, dependency-free
/// dispatcher and health-monitor tests.
pub struct FakeProcessor {
	pub base_url: String,
	state: State,
	_thread: std::thread::JoinHandle<()>,
}

impl FakeProcessor {
	pub fn spawn() -> Self {
		let state = State {
			mode: Arc::new(RwLock::new(SendMode::Success)),
			healthy: Arc::new(RwLock::new(true)),
			min_response_time_ms: Arc::new(RwLock::new(0)),
			received: Arc::new(RwLock::new(Vec::new())),
		};
		let state_for_server = state.clone();
		let (tx, rx) = std::sync::mpsc::channel();

		let thread = std::thread::spawn(move || {
			let system = actix_web::rt::System::new();
			system.block_on(async move {
				let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
				let addr = listener.local_addr().unwrap();
				tx.send(addr).unwrap();

				HttpServer::new(move || {
					App::new()
						.app_data(web::Data::new(state_for_server.clone()))
						.service(payments)
						.service(service_health)
				})
				.listen(listener)
				.unwrap()
				.run()
				.await
				.unwrap();
			});
		});

		let addr = rx.recv().expect("fake processor failed to start");
		FakeProcessor { base_url: format!("http://{addr}"), state, _thread: thread }
	}

	pub fn set_mode(&self, mode: SendMode) {
		*self.state.mode.write().unwrap() = mode;
	}

	pub fn set_health(&self, healthy: bool, min_response_time_ms: u64) {
		*self.state.healthy.write().unwrap() = healthy;
		*self.state.min_response_time_ms.write().unwrap() = min_response_time_ms;
	}

	pub fn received_count(&self) -> usize {
		self.state.received.read().unwrap().len()
	}
}
