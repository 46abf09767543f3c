mod finding;

pub use finding::Finding;
