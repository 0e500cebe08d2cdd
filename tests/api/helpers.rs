//! tests/api/helpers.rs

use sproof::config::WaitlistConfig;
use sproof::models::WaitlistRequest;
use sproof::services::formspree::FormspreeClient;
use wiremock::MockServer;

pub const FORM_ID: &str = "testform";

pub struct TestRelay {
    pub formspree_server: MockServer,
    pub client: FormspreeClient,
}

pub async fn spawn_relay() -> TestRelay {
    let formspree_server = MockServer::start().await;
    let client = FormspreeClient::new(&WaitlistConfig {
        form_id: FORM_ID.to_string(),
        base_url: formspree_server.uri(),
        source: "S-Proof Website".to_string(),
    });

    TestRelay {
        formspree_server,
        client,
    }
}

/// A relay pointed at a port nobody listens on
pub fn unreachable_relay() -> FormspreeClient {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").expect("Failed to bind probe port");
    let port = listener.local_addr().expect("Probe port has no address").port();
    drop(listener);
    let base_url = format!("http://127.0.0.1:{port}");

    FormspreeClient::new(&WaitlistConfig {
        form_id: FORM_ID.to_string(),
        base_url,
        source: "S-Proof Website".to_string(),
    })
}

pub fn form_path() -> String {
    format!("/f/{FORM_ID}")
}

pub fn request(email: &str, company_name: &str, business_type: &str) -> WaitlistRequest {
    WaitlistRequest {
        email: email.to_string(),
        company_name: company_name.to_string(),
        business_type: business_type.to_string(),
    }
}
