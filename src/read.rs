extern crate tokio;

use tokio::io::{stdin, AsyncReadExt};
use wpcs2_client::Result;

/// Whole answer file piped into `wpcs2 submit`.
pub async fn read_answer() -> Result<String> {
    let mut ret = String::new();
    stdin().read_to_string(&mut ret).await?;
    Ok(ret)
}
