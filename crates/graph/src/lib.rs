pub mod also_likes;
pub mod dot;
pub mod store;

pub use also_likes::build_also_likes_graph;
pub use dot::to_dot;
pub use store::{Edge, GraphStats, GraphStore, Node};
