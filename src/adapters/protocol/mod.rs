//! Protocol issuance adapters.

mod sequence_issuer;

pub use sequence_issuer::SequenceProtocolIssuer;
