mod common;
mod transform;
