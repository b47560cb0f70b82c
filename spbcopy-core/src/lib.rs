pub mod config;
pub mod error;
pub mod input;
pub mod sender;


// Re-export key types for easier use
pub use config::{default_config_path, ClientConfig};
pub use error::{SpbcopyError, SpbcopyResult};
pub use sender::Sender;

use reqwest::StatusCode;
use tokio::io::AsyncRead;
use tracing::info;

/// Reads all of `reader` and posts it to the service described by `config`.
///
/// Nothing is sent if reading fails.
pub async fn forward<R>(config: &ClientConfig, reader: R) -> SpbcopyResult<StatusCode>
where
    R: AsyncRead + Unpin,
{
    let content = input::read_all(reader).await?;
    let url = config.api_url();
    let bytes = content.len();
    let status = Sender::new().send(&url, content).await?;
    info!(url = %url, bytes, status = status.as_u16(), "Copied to remote clipboard");
    Ok(status)
}
