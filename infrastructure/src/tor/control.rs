//! Tor control-port client
//!
//! Implements the [`CircuitController`] port by speaking the line-oriented
//! control protocol: `AUTHENTICATE`, `SIGNAL NEWNYM`, `QUIT`, each answered
//! with a `250` status line on success. Invoked as a pre-batch step so the
//! verification traffic rides a fresh circuit.

use crate::config::CircuitSettings;
use async_trait::async_trait;
use phishguard_application::{CircuitController, CircuitError};
use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader};
use tokio::net::TcpStream;
use tokio::net::tcp::{OwnedReadHalf, OwnedWriteHalf};
use tracing::{debug, info};

/// Requests a new identity over the Tor control port.
pub struct TorCircuitController {
    settings: CircuitSettings,
}

impl TorCircuitController {
    pub fn new(settings: CircuitSettings) -> Self {
        Self { settings }
    }

    /// Send one command and expect a `250` reply line.
    async fn command(
        writer: &mut OwnedWriteHalf,
        reader: &mut BufReader<OwnedReadHalf>,
        command: &str,
    ) -> Result<(), CircuitError> {
        writer
            .write_all(command.as_bytes())
            .await
            .map_err(|e| CircuitError::Transport(e.to_string()))?;
        writer
            .write_all(b"\r\n")
            .await
            .map_err(|e| CircuitError::Transport(e.to_string()))?;
        writer
            .flush()
            .await
            .map_err(|e| CircuitError::Transport(e.to_string()))?;

        let mut line = String::new();
        let read = reader
            .read_line(&mut line)
            .await
            .map_err(|e| CircuitError::Transport(e.to_string()))?;
        if read == 0 {
            return Err(CircuitError::Transport(
                "control connection closed".to_string(),
            ));
        }

        let line = line.trim();
        debug!("Control reply: {}", line);
        if line.starts_with("250") {
            Ok(())
        } else {
            Err(CircuitError::Rejected(line.to_string()))
        }
    }
}

#[async_trait]
impl CircuitController for TorCircuitController {
    async fn request_new_identity(&self) -> Result<(), CircuitError> {
        let addr = self.settings.addr();
        debug!("Connecting to control port {}", addr);

        let stream = TcpStream::connect(&addr)
            .await
            .map_err(|e| CircuitError::Transport(format!("{}: {}", addr, e)))?;
        let (read_half, mut write_half) = stream.into_split();
        let mut reader = BufReader::new(read_half);

        let authenticate = match &self.settings.password {
            Some(password) => format!("AUTHENTICATE \"{}\"", password.replace('"', "\\\"")),
            None => "AUTHENTICATE".to_string(),
        };
        Self::command(&mut write_half, &mut reader, &authenticate).await?;
        Self::command(&mut write_half, &mut reader, "SIGNAL NEWNYM").await?;

        // Best effort; the circuit is already rotated
        let _ = write_half.write_all(b"QUIT\r\n").await;

        info!("Requested new Tor identity");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::io::AsyncReadExt;
    use tokio::net::TcpListener;

    /// Control-port stand-in answering each line with a canned reply.
    async fn spawn_control_server(replies: Vec<&'static str>) -> CircuitSettings {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let port = listener.local_addr().unwrap().port();

        tokio::spawn(async move {
            let (mut socket, _) = listener.accept().await.unwrap();
            let mut buffer = [0u8; 1024];
            for reply in replies {
                // Read one command line, then answer
                let _ = socket.read(&mut buffer).await.unwrap();
                socket.write_all(reply.as_bytes()).await.unwrap();
                socket.write_all(b"\r\n").await.unwrap();
            }
        });

        CircuitSettings {
            host: "127.0.0.1".to_string(),
            port,
            password: Some("test_password".to_string()),
        }
    }

    #[tokio::test]
    async fn test_new_identity_succeeds_on_250_replies() {
        let settings = spawn_control_server(vec!["250 OK", "250 OK"]).await;
        let controller = TorCircuitController::new(settings);

        assert!(controller.request_new_identity().await.is_ok());
    }

    #[tokio::test]
    async fn test_rejected_authentication() {
        let settings = spawn_control_server(vec!["515 Authentication failed"]).await;
        let controller = TorCircuitController::new(settings);

        let result = controller.request_new_identity().await;
        assert!(matches!(result, Err(CircuitError::Rejected(reply)) if reply.starts_with("515")));
    }

    #[tokio::test]
    async fn test_rejected_signal() {
        let settings = spawn_control_server(vec!["250 OK", "552 Unrecognized signal"]).await;
        let controller = TorCircuitController::new(settings);

        let result = controller.request_new_identity().await;
        assert!(matches!(result, Err(CircuitError::Rejected(_))));
    }

    #[tokio::test]
    async fn test_unreachable_control_port() {
        // Bind then drop to obtain a port with no listener
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let port = listener.local_addr().unwrap().port();
        drop(listener);

        let controller = TorCircuitController::new(CircuitSettings {
            host: "127.0.0.1".to_string(),
            port,
            password: None,
        });

        let result = controller.request_new_identity().await;
        assert!(matches!(result, Err(CircuitError::Transport(_))));
    }
}
