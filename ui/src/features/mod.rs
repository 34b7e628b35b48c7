//! Feature logic kept separate from rendering so it unit-tests natively.

pub mod copy_field;
