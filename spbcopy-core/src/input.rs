use tokio::io::{AsyncRead, AsyncReadExt};
use tracing::debug;

use crate::error::SpbcopyResult;

/// Reads `reader` to EOF. No size limit is applied and the bytes are kept
/// exactly as read.
pub async fn read_all<R>(mut reader: R) -> SpbcopyResult<Vec<u8>>
where
    R: AsyncRead + Unpin,
{
    let mut content = Vec::new();
    reader.read_to_end(&mut content).await?;
    debug!(bytes = content.len(), "Read input");
    Ok(content)
}
