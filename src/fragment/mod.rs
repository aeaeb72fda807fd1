//! Fragment decoding and hole-list reassembly.
//!
//! This module collects the domain types used to parse fragments off the
//! wire, split outbound messages into fragments, and stitch inbound fragments
//! back into complete messages. Each sub-module focuses on a single concept
//! to keep the code small and easy to audit while still providing a cohesive
//! API at the crate root.

pub mod assembly;
pub mod config;
pub mod error;
pub mod fragmenter;
pub mod header;
pub mod hole;
pub mod id;
pub mod packet;

pub use assembly::PacketAssembly;
pub use config::FragmentationConfig;
pub use error::{AssemblyStatus, DecodeError, FragmentationError, ReassemblyError};
pub use fragmenter::{FragmentBatch, FragmentFrame, Fragmenter};
pub use header::{FRAGMENT_HEADER_LEN, FragmentHeader};
pub use hole::Hole;
pub use id::{PeerId, Sequence};
pub use packet::{Fragment, decode_fragment, encode_fragment};
