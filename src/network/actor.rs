//! Network actor - runs generation requests in the Tokio async runtime

use std::time::Duration;
use tokio::sync::mpsc;
use tokio::task::JoinSet;

use crate::messages::{NetworkCommand, NetworkResponse};
use crate::network::client::{create_client, generate_image};

/// Network actor that processes generation commands
pub struct NetworkActor {
    client: reqwest::Client,
    endpoint: String,
    response_tx: mpsc::UnboundedSender<NetworkResponse>,
    active_requests: JoinSet<()>,
}

impl NetworkActor {
    pub fn new(
        endpoint: impl Into<String>,
        timeout: Option<Duration>,
        response_tx: mpsc::UnboundedSender<NetworkResponse>,
    ) -> Self {
        NetworkActor {
            client: create_client(timeout),
            endpoint: endpoint.into(),
            response_tx,
            active_requests: JoinSet::new(),
        }
    }

    /// Run the network actor message loop
    pub async fn run(mut self, mut cmd_rx: mpsc::UnboundedReceiver<NetworkCommand>) {
        loop {
            tokio::select! {
                biased;

                cmd = cmd_rx.recv() => {
                    match cmd {
                        Some(NetworkCommand::Generate { id, request }) => {
                            let response_tx = self.response_tx.clone();
                            let client = self.client.clone();
                            let endpoint = self.endpoint.clone();

                            // One request per command, never retried
                            self.active_requests.spawn(async move {
                                tracing::info!(id, endpoint = %endpoint, prompt_len = request.prompt.len(), "Posting prompt");
                                let result = generate_image(&client, &endpoint, request, id).await;
                                tracing::info!(id, success = result.is_success(), time_ms = result.time_ms(), "Generation request settled");
                                let _ = response_tx.send(result);
                            });
                        }

                        Some(NetworkCommand::Shutdown) | None => {
                            tracing::info!(in_flight = self.active_requests.len(), "Network actor shutting down");
                            self.active_requests.abort_all();
                            break;
                        }
                    }
                }

                // Reap completed tasks
                Some(_result) = self.active_requests.join_next() => {}
            }
        }
    }
}
