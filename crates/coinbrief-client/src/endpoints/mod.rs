//! Provider endpoint groups sharing one transport

pub mod crypto;
pub mod news;

use crate::transport::Transport;
use std::sync::Arc;

/// Shared plumbing of a provider endpoint group: one transport, one base URL.
pub trait EndpointBase {
  /// Transport shared with the other endpoint groups of the client
  fn transport(&self) -> &Arc<Transport>;

  /// Provider base URL this endpoint group talks to
  fn base_url(&self) -> &str;
}

/// Implements `EndpointBase` for a struct with `transport` and `base_url` fields
macro_rules! impl_endpoint_base {
  ($struct_name:ident) => {
    impl EndpointBase for $struct_name {
      fn transport(&self) -> &Arc<Transport> {
        &self.transport
      }

      fn base_url(&self) -> &str {
        &self.base_url
      }
    }
  };
}

pub(crate) use impl_endpoint_base;
