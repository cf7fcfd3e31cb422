pub mod os;
pub mod parser;
pub mod scanner;
