pub mod edge_gate;
pub mod request_id;

pub use edge_gate::*;
pub use request_id::*;
