mod network;
pub use network::NetworkInfo;

mod node;
pub use node::{NodeInfo, NodeRole};
