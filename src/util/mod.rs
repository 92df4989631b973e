pub use operators::BinaryOperator;

mod operators;
