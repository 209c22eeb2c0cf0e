//! Sequential delivery of composed messages.

use coinbrief_client::MessageSender;
use coinbrief_core::Result;
use coinbrief_models::sms::{DeliveryReceipt, OutboundMessage};
use tracing::{error, info};

/// Send `messages` one after another, in order.
///
/// Stops at the first failure and returns it; messages after that point are
/// not attempted. Every successful send is logged with its provider id, so a
/// partial run can be reconstructed from the log.
pub async fn send_all<S>(sender: &S, messages: &[OutboundMessage]) -> Result<Vec<DeliveryReceipt>>
where
  S: MessageSender + ?Sized,
{
  info!("Sending {} text message(s) via {}", messages.len(), sender.provider_name());

  let mut receipts = Vec::with_capacity(messages.len());

  for (index, message) in messages.iter().enumerate() {
    let receipt = sender.send(message).await.map_err(|e| {
      error!("Message {}/{} failed: {}", index + 1, messages.len(), e);
      e
    })?;

    info!("Message {}/{} ({}) status: {}", index + 1, messages.len(), receipt.sid, receipt.status);
    receipts.push(receipt);
  }

  Ok(receipts)
}
