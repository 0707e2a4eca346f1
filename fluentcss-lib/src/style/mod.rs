pub mod block;
pub mod vendor_prefix;
