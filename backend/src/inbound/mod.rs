//! Inbound adapters translating external requests into facade calls.

pub mod http;
